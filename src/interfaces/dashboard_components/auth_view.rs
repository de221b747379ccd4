use crate::infrastructure::auth::RegistrationForm;
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::settings_persistence::Theme;
use crate::interfaces::design_system::{DesignSystem, Palette};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Login and registration form state shared by both binaries.
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub register: RegistrationForm,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub in_progress: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            username: String::new(),
            password: String::new(),
            register: RegistrationForm::default(),
            error: None,
            notice: None,
            in_progress: false,
        }
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

pub enum AuthAction {
    Login { username: String, password: String },
    Register(RegistrationForm),
}

/// Centered auth card. Returns the submitted action, if any.
pub fn render_auth_card(
    ui: &mut egui::Ui,
    form: &mut AuthForm,
    allow_register: bool,
    title_key: &str,
    i18n: &I18nService,
    palette: &Palette,
    theme: Theme,
) -> Option<AuthAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.15);

        ui.allocate_ui(egui::vec2(360.0, 0.0), |ui| {
            DesignSystem::card_frame(theme).show(ui, |ui| {
                ui.set_width(328.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🏠").size(40.0));
                    ui.heading(i18n.t(title_key));
                    ui.label(
                        egui::RichText::new(i18n.t("login_subtitle"))
                            .color(palette.text_secondary),
                    );
                });
                ui.add_space(16.0);

                match form.mode {
                    AuthMode::Login => {
                        ui.label(i18n.t("login_username"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.username)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(8.0);
                        ui.label(i18n.t("login_password"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.password)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(16.0);

                        let label = if form.in_progress {
                            i18n.t("login_in_progress")
                        } else {
                            i18n.t("login_button")
                        };
                        let button = egui::Button::new(egui::RichText::new(label).strong())
                            .fill(palette.accent)
                            .min_size(egui::vec2(ui.available_width(), 36.0));
                        if ui.add_enabled(!form.in_progress, button).clicked()
                            && !form.username.trim().is_empty()
                            && !form.password.is_empty()
                        {
                            form.in_progress = true;
                            form.error = None;
                            action = Some(AuthAction::Login {
                                username: form.username.trim().to_string(),
                                password: form.password.clone(),
                            });
                        }

                        if allow_register {
                            ui.add_space(8.0);
                            if ui.link(i18n.t("no_account")).clicked() {
                                form.mode = AuthMode::Register;
                                form.error = None;
                            }
                        }
                    }
                    AuthMode::Register => {
                        ui.label(i18n.t("register_username"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.register.username)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(6.0);
                        ui.label(i18n.t("register_email"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.register.email)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(6.0);
                        ui.label(i18n.t("register_phone"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.register.phone)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(6.0);
                        ui.label(i18n.t("register_password"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.register.password)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(6.0);
                        ui.label(i18n.t("register_password2"));
                        ui.add(
                            egui::TextEdit::singleline(&mut form.register.password2)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        ui.add_space(16.0);

                        let button = egui::Button::new(
                            egui::RichText::new(i18n.t("register_button")).strong(),
                        )
                        .fill(palette.accent)
                        .min_size(egui::vec2(ui.available_width(), 36.0));
                        if ui.add_enabled(!form.in_progress, button).clicked() {
                            match form.register.validate() {
                                Ok(()) => {
                                    form.in_progress = true;
                                    form.error = None;
                                    action = Some(AuthAction::Register(form.register.clone()));
                                }
                                Err(e) => form.error = Some(e.to_string()),
                            }
                        }

                        ui.add_space(8.0);
                        if ui.link(i18n.t("have_account")).clicked() {
                            form.mode = AuthMode::Login;
                            form.error = None;
                        }
                    }
                }

                if let Some(error) = &form.error {
                    ui.add_space(10.0);
                    ui.colored_label(palette.danger, error);
                }
                if let Some(notice) = &form.notice {
                    ui.add_space(10.0);
                    ui.colored_label(palette.success, notice);
                }
            });
        });
    });

    action
}
