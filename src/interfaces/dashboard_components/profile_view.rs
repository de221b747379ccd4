use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui::LandlordApp;
use eframe::egui;

pub fn render_profile_view(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);

    ui.heading(app.i18n.t("profile_title"));
    ui.add_space(12.0);

    let Some(user) = app.user.clone() else {
        return;
    };

    DesignSystem::card_frame(app.settings.theme).show(ui, |ui| {
        ui.set_width(420.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").size(40.0));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&user.name)
                            .strong()
                            .size(18.0)
                            .color(palette.text_primary),
                    );
                    let (badge, color) = if user.verified {
                        (app.i18n.t("profile_verified"), palette.success)
                    } else {
                        (app.i18n.t("profile_not_verified"), palette.warning)
                    };
                    ui.label(egui::RichText::new(format!("✔ {}", badge)).size(11.0).color(color));
                });
            });

            ui.add_space(12.0);
            egui::Grid::new("profile_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(app.i18n.t("profile_email"))
                            .color(palette.text_secondary),
                    );
                    ui.label(&user.email);
                    ui.end_row();

                    ui.label(
                        egui::RichText::new(app.i18n.t("profile_phone"))
                            .color(palette.text_secondary),
                    );
                    ui.label(&user.phone);
                    ui.end_row();
                });
        });
    });

    ui.add_space(16.0);

    // Portfolio summary under the profile card
    let counts = app.inbox.counts();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{}: {} · {}: {}",
                app.i18n.t("stat_total_listings"),
                app.catalog.total(),
                app.i18n.t("stat_total_applications"),
                counts.all,
            ))
            .color(palette.text_secondary),
        );
    });
}
