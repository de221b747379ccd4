use crate::application::inbox::InboxSort;
use crate::domain::housing::application::{ApplicationStatus, RentalApplication, Verdict};
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::design_system::{DesignSystem, Palette};
use crate::interfaces::ui::LandlordApp;
use eframe::egui;
use tracing::warn;
use uuid::Uuid;

pub fn render_applications_view(ui: &mut egui::Ui, app: &mut LandlordApp) {
    let palette = DesignSystem::palette(app.settings.theme);
    let counts = app.inbox.counts();

    ui.heading(app.i18n.t("nav_applications"));
    ui.add_space(8.0);

    // Status tabs with counters
    ui.horizontal(|ui| {
        let tabs: [(Option<ApplicationStatus>, String, usize); 5] = [
            (None, app.i18n.t("filter_all").to_string(), counts.all),
            (
                Some(ApplicationStatus::Pending),
                app.i18n.t("status_pending").to_string(),
                counts.pending,
            ),
            (
                Some(ApplicationStatus::Accepted),
                app.i18n.t("status_accepted").to_string(),
                counts.accepted,
            ),
            (
                Some(ApplicationStatus::Rejected),
                app.i18n.t("status_rejected").to_string(),
                counts.rejected,
            ),
            (
                Some(ApplicationStatus::Expired),
                app.i18n.t("status_expired").to_string(),
                counts.expired,
            ),
        ];
        for (status, label, count) in tabs {
            if ui
                .selectable_label(app.inbox_filter == status, format!("{} ({})", label, count))
                .clicked()
            {
                app.inbox_filter = status;
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt("inbox_sort")
                .selected_text(sort_label(app.inbox_sort, &app.i18n))
                .show_ui(ui, |ui| {
                    for sort in [InboxSort::Newest, InboxSort::Oldest] {
                        ui.selectable_value(&mut app.inbox_sort, sort, sort_label(sort, &app.i18n));
                    }
                });
        });
    });
    ui.add_space(12.0);

    let selected: Vec<RentalApplication> = app
        .inbox
        .select(app.inbox_filter, app.inbox_sort)
        .into_iter()
        .cloned()
        .collect();

    if selected.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(app.i18n.t("no_results"))
                    .italics()
                    .color(palette.text_muted),
            );
        });
        return;
    }

    let mut decision: Option<(Uuid, Verdict)> = None;

    egui::ScrollArea::vertical()
        .id_salt("applications_scroll")
        .show(ui, |ui| {
            for application in &selected {
                render_application_card(ui, application, app, &palette, &mut decision);
                ui.add_space(10.0);
            }
        });

    if decision.is_some() {
        app.decision_prompt = decision;
    }
    if let Some((id, verdict)) = app.decision_prompt {
        render_decision_window(ui.ctx(), app, id, verdict, &palette);
    }
}

/// Modal asking for the response text before an accept/reject is committed.
fn render_decision_window(
    ctx: &egui::Context,
    app: &mut LandlordApp,
    id: Uuid,
    verdict: Verdict,
    palette: &Palette,
) {
    let title = match verdict {
        Verdict::Accept => app.i18n.t("accept").to_string(),
        Verdict::Reject => app.i18n.t("reject").to_string(),
    };
    let fill = match verdict {
        Verdict::Accept => palette.success,
        Verdict::Reject => palette.danger,
    };

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new(title.clone())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_width(360.0);
            let draft = app.response_drafts.entry(id).or_default();
            ui.add(
                egui::TextEdit::multiline(draft)
                    .hint_text(app.i18n.t("response_placeholder"))
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let confirm =
                    egui::Button::new(egui::RichText::new(title.as_str()).strong()).fill(fill);
                if ui.add(confirm).clicked() {
                    confirmed = true;
                }
                if ui.button(app.i18n.t("cancel")).clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        let response = app.response_drafts.remove(&id).unwrap_or_default();
        if let Err(e) = app.inbox.respond(id, verdict, response) {
            warn!("Responding to application failed: {}", e);
        }
        app.decision_prompt = None;
    } else if cancelled {
        app.response_drafts.remove(&id);
        app.decision_prompt = None;
    }
}

fn render_application_card(
    ui: &mut egui::Ui,
    application: &RentalApplication,
    app: &LandlordApp,
    palette: &Palette,
    decision: &mut Option<(Uuid, Verdict)>,
) {
    let language = app.language();
    let listing_title = app
        .catalog
        .get(application.listing_id)
        .map(|l| l.title.get(language).to_string())
        .unwrap_or_default();

    DesignSystem::card_frame(app.settings.theme).show(ui, |ui| {
        ui.set_width(ui.available_width().min(640.0));
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&application.student.full_name)
                        .strong()
                        .size(15.0)
                        .color(palette.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (color, label) = status_badge(application.status, &app.i18n, palette);
                    ui.label(egui::RichText::new(format!("● {}", label)).size(11.0).color(color));
                });
            });

            ui.label(
                egui::RichText::new(format!("🏠 {}", listing_title))
                    .size(12.0)
                    .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "🎓 {} · {}",
                    application.student.university, application.student.study_program
                ))
                .size(11.0)
                .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "📞 {} · {}: {}",
                    application.student.phone,
                    app.i18n.t("applied_at"),
                    application.submitted_at.format("%Y-%m-%d")
                ))
                .size(11.0)
                .color(palette.text_secondary),
            );
            ui.label(
                egui::RichText::new(format!(
                    "📅 {}: {} · {}",
                    app.i18n.t("move_in_date"),
                    application.move_in_date.format("%Y-%m-%d"),
                    application.duration
                ))
                .size(11.0)
                .color(palette.text_secondary),
            );

            if !application.message.trim().is_empty() {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("\u{201c}{}\u{201d}", application.message))
                        .italics()
                        .size(12.0)
                        .color(palette.text_primary),
                );
            }

            if let Some(response) = &application.landlord_response {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("↩ {}", response))
                        .size(11.0)
                        .color(palette.accent),
                );
            }

            if application.status == ApplicationStatus::Pending {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let accept = egui::Button::new(
                        egui::RichText::new(format!("✔ {}", app.i18n.t("accept"))).strong(),
                    )
                    .fill(palette.success);
                    if ui.add(accept).clicked() {
                        *decision = Some((application.id, Verdict::Accept));
                    }

                    let reject = egui::Button::new(
                        egui::RichText::new(format!("✖ {}", app.i18n.t("reject"))).strong(),
                    )
                    .fill(palette.danger);
                    if ui.add(reject).clicked() {
                        *decision = Some((application.id, Verdict::Reject));
                    }
                });
            }
        });
    });
}

fn status_badge(
    status: ApplicationStatus,
    i18n: &I18nService,
    palette: &Palette,
) -> (egui::Color32, String) {
    match status {
        ApplicationStatus::Pending => (palette.warning, i18n.t("status_pending").to_string()),
        ApplicationStatus::Accepted => (palette.success, i18n.t("status_accepted").to_string()),
        ApplicationStatus::Rejected => (palette.danger, i18n.t("status_rejected").to_string()),
        ApplicationStatus::Expired => (palette.text_muted, i18n.t("status_expired").to_string()),
    }
}

fn sort_label(sort: InboxSort, i18n: &I18nService) -> String {
    match sort {
        InboxSort::Newest => i18n.t("sort_newest").to_string(),
        InboxSort::Oldest => i18n.t("sort_oldest").to_string(),
    }
}
