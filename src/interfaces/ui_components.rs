use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::settings_persistence::{PersistedSettings, Theme, ViewMode};
use eframe::egui;

/// Sidebar navigation for the landlord dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    Listings,
    Applications,
    Chat,
    Analytics,
    Profile,
    Settings,
}

impl AppView {
    pub const ALL: [AppView; 7] = [
        AppView::Dashboard,
        AppView::Listings,
        AppView::Applications,
        AppView::Chat,
        AppView::Analytics,
        AppView::Profile,
        AppView::Settings,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            AppView::Dashboard => "🏠",
            AppView::Listings => "🏢",
            AppView::Applications => "📋",
            AppView::Chat => "💬",
            AppView::Analytics => "📊",
            AppView::Profile => "👤",
            AppView::Settings => "⚙",
        }
    }

    pub fn label(&self, i18n: &I18nService) -> String {
        match self {
            AppView::Dashboard => i18n.t("nav_dashboard").to_string(),
            AppView::Listings => i18n.t("nav_listings").to_string(),
            AppView::Applications => i18n.t("nav_applications").to_string(),
            AppView::Chat => i18n.t("nav_chat").to_string(),
            AppView::Analytics => i18n.t("nav_analytics").to_string(),
            AppView::Profile => i18n.t("nav_profile").to_string(),
            AppView::Settings => i18n.t("nav_settings").to_string(),
        }
    }
}

pub fn render_sidebar(
    ui: &mut egui::Ui,
    current_view: &mut AppView,
    unread_messages: u32,
    pending_applications: usize,
    i18n: &I18nService,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        for view in AppView::ALL {
            let is_selected = *current_view == view;

            let bg_color = if is_selected {
                egui::Color32::from_rgb(28, 33, 40)
            } else {
                egui::Color32::TRANSPARENT
            };

            let stroke = if is_selected {
                egui::Stroke::new(1.5, egui::Color32::from_rgb(37, 99, 235))
            } else {
                egui::Stroke::NONE
            };

            // Unread / pending badges on the relevant entries
            let badge = match view {
                AppView::Chat if unread_messages > 0 => Some(unread_messages.to_string()),
                AppView::Applications if pending_applications > 0 => {
                    Some(pending_applications.to_string())
                }
                _ => None,
            };

            egui::Frame::NONE
                .fill(bg_color)
                .corner_radius(8)
                .stroke(stroke)
                .inner_margin(egui::Margin::symmetric(0, 12))
                .show(ui, |ui| {
                    ui.set_width(84.0);
                    if ui
                        .vertical_centered(|ui| {
                            ui.label(egui::RichText::new(view.icon()).size(24.0));
                            ui.add_space(4.0);
                            let mut label = view.label(i18n);
                            if let Some(badge) = badge {
                                label = format!("{} ({})", label, badge);
                            }
                            ui.label(egui::RichText::new(label).size(10.0));
                        })
                        .response
                        .interact(egui::Sense::click())
                        .clicked()
                    {
                        *current_view = view;
                    }
                });

            ui.add_space(12.0);
        }
    });
}

/// Language, theme, layout and about sections. Returns true when anything
/// changed and settings should be written back to disk.
pub fn render_settings_view(
    ui: &mut egui::Ui,
    settings: &mut PersistedSettings,
    i18n: &mut I18nService,
) -> bool {
    let mut changed = false;

    ui.heading(i18n.t("nav_settings"));
    ui.add_space(12.0);

    ui.label(egui::RichText::new(i18n.t("settings_language")).strong());
    ui.add_space(4.0);
    let current_code = i18n.current_language_code().to_string();
    let languages = i18n.available_languages().to_vec();
    for lang in languages {
        if ui
            .selectable_label(
                current_code == lang.code,
                format!("{} {}", lang.flag, lang.native_name),
            )
            .clicked()
            && i18n.set_language(&lang.code)
        {
            settings.language = lang.code.clone();
            changed = true;
        }
    }

    ui.add_space(16.0);
    ui.label(egui::RichText::new(i18n.t("settings_theme")).strong());
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .selectable_label(settings.theme == Theme::Dark, i18n.t("settings_theme_dark"))
            .clicked()
        {
            settings.theme = Theme::Dark;
            changed = true;
        }
        if ui
            .selectable_label(
                settings.theme == Theme::Light,
                i18n.t("settings_theme_light"),
            )
            .clicked()
        {
            settings.theme = Theme::Light;
            changed = true;
        }
    });

    ui.add_space(16.0);
    ui.label(egui::RichText::new(i18n.t("settings_view_mode")).strong());
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .selectable_label(
                settings.view_mode == ViewMode::Grid,
                i18n.t("settings_view_grid"),
            )
            .clicked()
        {
            settings.view_mode = ViewMode::Grid;
            changed = true;
        }
        if ui
            .selectable_label(
                settings.view_mode == ViewMode::List,
                i18n.t("settings_view_list"),
            )
            .clicked()
        {
            settings.view_mode = ViewMode::List;
            changed = true;
        }
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);
    ui.label(egui::RichText::new(i18n.t("settings_about")).strong());
    ui.label(format!("Joy Bor v{}", env!("CARGO_PKG_VERSION")));

    changed
}
