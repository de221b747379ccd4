use crate::application::analytics::format_sum;
use crate::domain::housing::stats::DashboardStats;
use crate::interfaces::dashboard_components::metrics_card::render_metric_card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::LandlordApp;
use eframe::egui;

/// Landing view: headline stats plus the freshest listings and applications.
pub fn render_dashboard(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);
    let language = app.language();
    let stats = DashboardStats::compute(app.catalog.all(), app.inbox.all());
    let unread = app.messenger.total_unread();

    let name = app
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    ui.heading(
        egui::RichText::new(app.i18n.tf("welcome_back", &[("name", &name)]))
            .size(24.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.label(
        egui::RichText::new(app.i18n.t("dashboard_subtitle")).color(palette.text_secondary),
    );
    ui.add_space(16.0);

    ui.horizontal_wrapped(|ui| {
        render_metric_card(
            ui,
            &palette,
            "🏢",
            app.i18n.t("stat_total_listings"),
            &stats.total_listings.to_string(),
            Some(&format!(
                "{}: {}",
                app.i18n.t("stat_active_listings"),
                stats.active_listings
            )),
            palette.accent,
        );
        render_metric_card(
            ui,
            &palette,
            "📋",
            app.i18n.t("stat_pending_applications"),
            &stats.pending_applications.to_string(),
            Some(&format!(
                "{}: {}",
                app.i18n.t("stat_total_applications"),
                stats.total_applications
            )),
            palette.warning,
        );
        render_metric_card(
            ui,
            &palette,
            "💬",
            app.i18n.t("stat_unread_messages"),
            &unread.to_string(),
            None,
            palette.success,
        );
        render_metric_card(
            ui,
            &palette,
            "💰",
            app.i18n.t("stat_monthly_revenue"),
            &format!("{}", format_sum(stats.monthly_revenue)),
            Some(&format!(
                "{}: {}%",
                app.i18n.t("stat_occupancy"),
                stats.occupancy_rate
            )),
            palette.accent,
        );
    });

    ui.add_space(24.0);

    ui.columns(2, |cols| {
        // Recent listings
        cols[0].label(
            egui::RichText::new(app.i18n.t("recent_listings"))
                .size(16.0)
                .strong(),
        );
        cols[0].add_space(8.0);
        let mut recent: Vec<_> = app.catalog.all().iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for listing in recent.iter().take(3) {
            DesignSystem::card_frame(app.settings.theme).show(&mut cols[0], |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(listing.title.get(language))
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                format_sum(listing.price),
                                app.i18n.t("per_month")
                            ))
                            .size(11.0)
                            .color(palette.accent),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("⭐ {:.1}", listing.rating))
                                .size(11.0)
                                .color(palette.warning),
                        );
                    });
                });
            });
            cols[0].add_space(6.0);
        }

        // Recent applications
        cols[1].label(
            egui::RichText::new(app.i18n.t("recent_applications"))
                .size(16.0)
                .strong(),
        );
        cols[1].add_space(8.0);
        let recent_apps = app
            .inbox
            .select(None, crate::application::inbox::InboxSort::Newest);
        for application in recent_apps.iter().take(3) {
            DesignSystem::card_frame(app.settings.theme).show(&mut cols[1], |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(&application.student.full_name)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(
                            egui::RichText::new(
                                application.submitted_at.format("%Y-%m-%d").to_string(),
                            )
                            .size(11.0)
                            .color(palette.text_secondary),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        use crate::domain::housing::application::ApplicationStatus;
                        let (color, key) = match application.status {
                            ApplicationStatus::Pending => (palette.warning, "status_pending"),
                            ApplicationStatus::Accepted => (palette.success, "status_accepted"),
                            ApplicationStatus::Rejected => (palette.danger, "status_rejected"),
                            ApplicationStatus::Expired => (palette.text_muted, "status_expired"),
                        };
                        ui.label(
                            egui::RichText::new(app.i18n.t(key)).size(11.0).color(color),
                        );
                    });
                });
            });
            cols[1].add_space(6.0);
        }
    });
}
