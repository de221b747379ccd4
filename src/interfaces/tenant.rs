use crate::application::analytics::format_sum;
use crate::application::catalog::ListingCatalog;
use crate::application::session::{AuthBridge, AuthEvent};
use crate::config::Config;
use crate::domain::housing::application::{
    ApplicationStatus, RentalApplication, StudentInfo,
};
use crate::domain::housing::filter::{ListingFilter, SortKey};
use crate::domain::housing::listing::{GenderPolicy, Listing, RoomType};
use crate::domain::locale::Language;
use crate::domain::users::User;
use crate::infrastructure::auth::SessionTokens;
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::mock;
use crate::infrastructure::settings_persistence::{PersistedSettings, SettingsPersistence};
use crate::interfaces::dashboard_components::auth_view::{self, AuthAction, AuthForm};
use crate::interfaces::dashboard_components::listing_form::{gender_label, room_type_label};
use crate::interfaces::design_system::DesignSystem;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eframe::egui;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantTab {
    Home,
    Favorites,
    Applications,
    Profile,
}

impl TenantTab {
    const ALL: [TenantTab; 4] = [
        TenantTab::Home,
        TenantTab::Favorites,
        TenantTab::Applications,
        TenantTab::Profile,
    ];

    fn icon(&self) -> &'static str {
        match self {
            TenantTab::Home => "🏠",
            TenantTab::Favorites => "❤",
            TenantTab::Applications => "📋",
            TenantTab::Profile => "👤",
        }
    }

    fn label(&self, i18n: &I18nService) -> String {
        match self {
            TenantTab::Home => i18n.t("tenant_home").to_string(),
            TenantTab::Favorites => i18n.t("tenant_favorites").to_string(),
            TenantTab::Applications => i18n.t("tenant_applications").to_string(),
            TenantTab::Profile => i18n.t("tenant_profile").to_string(),
        }
    }
}

/// Application form the tenant fills for one listing.
struct ApplyForm {
    listing_id: Uuid,
    message: String,
    duration: String,
    /// Move-in date as typed, parsed on submit (YYYY-MM-DD).
    move_in: String,
    error: Option<String>,
}

impl ApplyForm {
    fn new(listing_id: Uuid) -> Self {
        Self {
            listing_id,
            message: String::new(),
            duration: String::new(),
            move_in: Utc::now().format("%Y-%m-%d").to_string(),
            error: None,
        }
    }
}

fn parse_move_in(input: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Student-facing browse app.
pub struct TenantApp {
    pub config: Config,
    pub i18n: I18nService,
    pub settings: PersistedSettings,
    settings_persistence: Option<SettingsPersistence>,
    auth: AuthBridge,

    user: Option<User>,
    tokens: Option<SessionTokens>,
    auth_form: AuthForm,

    catalog: ListingCatalog,
    favorites: HashSet<Uuid>,
    my_applications: Vec<RentalApplication>,

    tab: TenantTab,
    filter: ListingFilter,
    sort: SortKey,
    price_max_input: String,
    apply_form: Option<ApplyForm>,
    notice: Option<String>,
}

impl TenantApp {
    pub fn new(config: Config, auth: AuthBridge) -> Self {
        let mut i18n = I18nService::new();

        let settings_persistence = SettingsPersistence::new()
            .map_err(|e| warn!("Settings persistence unavailable: {}", e))
            .ok();
        let settings = settings_persistence
            .as_ref()
            .and_then(|p| p.load().ok().flatten())
            .unwrap_or_else(|| PersistedSettings {
                language: config.default_language.clone(),
                ..PersistedSettings::default()
            });
        i18n.set_language(&settings.language);

        Self {
            config,
            i18n,
            settings,
            settings_persistence,
            auth,
            user: None,
            tokens: None,
            auth_form: AuthForm::new(),
            catalog: ListingCatalog::new(mock::sample_listings()),
            favorites: HashSet::new(),
            my_applications: Vec::new(),
            tab: TenantTab::Home,
            filter: ListingFilter {
                only_available: true,
                ..ListingFilter::default()
            },
            sort: SortKey::default(),
            price_max_input: String::new(),
            apply_form: None,
            notice: None,
        }
    }

    fn language(&self) -> Language {
        Language::from_code(self.i18n.current_language_code()).unwrap_or_default()
    }

    fn process_auth_events(&mut self) {
        while let Some(event) = self.auth.try_event() {
            match event {
                AuthEvent::LoggedIn { user, tokens } => {
                    self.user = Some(user);
                    self.tokens = Some(tokens);
                    self.auth_form = AuthForm::new();
                }
                AuthEvent::LoginFailed(message) | AuthEvent::RegisterFailed(message) => {
                    self.auth_form.in_progress = false;
                    self.auth_form.error = Some(message);
                }
                AuthEvent::Registered => {
                    self.auth_form.notice = Some(self.i18n.t("register_success").to_string());
                }
                AuthEvent::LoggedOut => {
                    self.user = None;
                    self.tokens = None;
                    self.tab = TenantTab::Home;
                }
            }
        }
    }

    fn submit_application(
        &mut self,
        listing_id: Uuid,
        message: String,
        duration: String,
        move_in_date: DateTime<Utc>,
    ) {
        let Some(user) = &self.user else { return };
        let university = self
            .catalog
            .get(listing_id)
            .map(|l| l.university.clone())
            .unwrap_or_default();
        self.my_applications.push(RentalApplication {
            id: Uuid::new_v4(),
            listing_id,
            status: ApplicationStatus::Pending,
            submitted_at: Utc::now(),
            student: StudentInfo {
                full_name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
                university,
                study_program: String::new(),
                student_id: String::new(),
            },
            move_in_date,
            duration,
            message,
            landlord_response: None,
            documents: Vec::new(),
        });
        self.notice = Some(self.i18n.t("apply_sent").to_string());
    }

    fn render_listing_card(&self, ui: &mut egui::Ui, listing: &Listing) -> (bool, bool) {
        let palette = DesignSystem::palette(self.settings.theme);
        let language = self.language();
        let mut favorite_clicked = false;
        let mut apply_clicked = false;

        DesignSystem::card_frame(self.settings.theme).show(ui, |ui| {
            ui.set_width(320.0);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(listing.title.get(language))
                            .strong()
                            .size(15.0)
                            .color(palette.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let heart = if self.favorites.contains(&listing.id) {
                            egui::RichText::new("❤").color(palette.danger)
                        } else {
                            egui::RichText::new("♡").color(palette.text_muted)
                        };
                        if ui.add(egui::Button::new(heart).frame(false)).clicked() {
                            favorite_clicked = true;
                        }
                    });
                });
                ui.label(
                    egui::RichText::new(format!("📍 {}", listing.location.get(language)))
                        .size(11.0)
                        .color(palette.text_secondary),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "🎓 {} · {}",
                        listing.university,
                        self.i18n.tf(
                            "km_to_university",
                            &[("km", &listing.distance_from_university_km.to_string())],
                        )
                    ))
                    .size(11.0)
                    .color(palette.text_secondary),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{} · {} · ⭐ {:.1}",
                        room_type_label(listing.room_type, &self.i18n),
                        gender_label(listing.gender, &self.i18n),
                        listing.rating,
                    ))
                    .size(11.0)
                    .color(palette.text_secondary),
                );

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            format_sum(listing.price),
                            self.i18n.t("per_month")
                        ))
                        .strong()
                        .color(palette.accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let already_applied = self
                            .my_applications
                            .iter()
                            .any(|a| a.listing_id == listing.id);
                        let apply = egui::Button::new(
                            egui::RichText::new(self.i18n.t("apply")).size(11.0).strong(),
                        )
                        .fill(palette.accent);
                        if ui
                            .add_enabled(listing.available && !already_applied, apply)
                            .clicked()
                        {
                            apply_clicked = true;
                        }
                    });
                });
            });
        });

        (favorite_clicked, apply_clicked)
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let palette = DesignSystem::palette(self.settings.theme);
        let language = self.language();
        ui.heading(self.i18n.t("tenant_search_title"));
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.filter.search)
                    .hint_text(self.i18n.t("search_placeholder"))
                    .desired_width(180.0),
            );

            let region_text = self
                .filter
                .region
                .as_ref()
                .map(|r| r.get(language).to_string())
                .unwrap_or_else(|| self.i18n.t("filter_all").to_string());
            egui::ComboBox::from_id_salt("tenant_region")
                .selected_text(region_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.region, None, self.i18n.t("filter_all"));
                    for region in mock::regions() {
                        let label = region.label.get(language).to_string();
                        ui.selectable_value(&mut self.filter.region, Some(region.label), label);
                    }
                });

            let university_text = self
                .filter
                .university
                .clone()
                .unwrap_or_else(|| self.i18n.t("filter_all").to_string());
            egui::ComboBox::from_id_salt("tenant_university")
                .selected_text(university_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.filter.university,
                        None,
                        self.i18n.t("filter_all"),
                    );
                    for university in mock::sample_universities() {
                        ui.selectable_value(
                            &mut self.filter.university,
                            Some(university.code.clone()),
                            university.code.clone(),
                        );
                    }
                });

            let room_text = match self.filter.room_type {
                None => self.i18n.t("filter_all").to_string(),
                Some(rt) => room_type_label(rt, &self.i18n),
            };
            egui::ComboBox::from_id_salt("tenant_room_type")
                .selected_text(room_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.filter.room_type,
                        None,
                        self.i18n.t("filter_all"),
                    );
                    for rt in [RoomType::Single, RoomType::Shared, RoomType::Family] {
                        ui.selectable_value(
                            &mut self.filter.room_type,
                            Some(rt),
                            room_type_label(rt, &self.i18n),
                        );
                    }
                });

            let gender_text = match self.filter.gender {
                None => self.i18n.t("filter_all").to_string(),
                Some(g) => gender_label(g, &self.i18n),
            };
            egui::ComboBox::from_id_salt("tenant_gender")
                .selected_text(gender_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter.gender, None, self.i18n.t("filter_all"));
                    for g in [GenderPolicy::Male, GenderPolicy::Female, GenderPolicy::Coed] {
                        ui.selectable_value(
                            &mut self.filter.gender,
                            Some(g),
                            gender_label(g, &self.i18n),
                        );
                    }
                });

            let max_response = ui.add(
                egui::TextEdit::singleline(&mut self.price_max_input)
                    .hint_text(self.i18n.t("filter_price_to"))
                    .desired_width(100.0),
            );
            if max_response.changed() {
                self.filter.max_price = Decimal::from_str(self.price_max_input.trim()).ok();
            }

            ui.checkbox(
                &mut self.filter.only_available,
                self.i18n.t("filter_only_available"),
            );

            let sort_label = |sort: SortKey, i18n: &I18nService| match sort {
                SortKey::Rating => i18n.t("sort_rating").to_string(),
                SortKey::PriceLow => i18n.t("sort_price_low").to_string(),
                SortKey::PriceHigh => i18n.t("sort_price_high").to_string(),
                SortKey::Distance => i18n.t("sort_distance").to_string(),
            };
            egui::ComboBox::from_id_salt("tenant_sort")
                .selected_text(sort_label(self.sort, &self.i18n))
                .show_ui(ui, |ui| {
                    for key in [
                        SortKey::Rating,
                        SortKey::PriceLow,
                        SortKey::PriceHigh,
                        SortKey::Distance,
                    ] {
                        ui.selectable_value(&mut self.sort, key, sort_label(key, &self.i18n));
                    }
                });
        });
        ui.add_space(12.0);

        self.filter.language = self.language();
        let selected: Vec<Listing> = self
            .catalog
            .select(&self.filter, self.sort)
            .into_iter()
            .cloned()
            .collect();

        if selected.is_empty() {
            ui.label(
                egui::RichText::new(self.i18n.t("no_results"))
                    .italics()
                    .color(palette.text_muted),
            );
            return;
        }

        self.render_listing_grid(ui, &selected);
    }

    fn render_listing_grid(&mut self, ui: &mut egui::Ui, listings: &[Listing]) {
        let mut favorite_toggle: Option<Uuid> = None;
        let mut apply_for: Option<Uuid> = None;

        egui::ScrollArea::vertical()
            .id_salt("tenant_listings_scroll")
            .show(ui, |ui| {
                for row in listings.chunks(2) {
                    ui.horizontal(|ui| {
                        for listing in row {
                            let (favorite, apply) = self.render_listing_card(ui, listing);
                            if favorite {
                                favorite_toggle = Some(listing.id);
                            }
                            if apply {
                                apply_for = Some(listing.id);
                            }
                        }
                    });
                    ui.add_space(10.0);
                }
            });

        if let Some(id) = favorite_toggle && !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
        if let Some(id) = apply_for {
            self.apply_form = Some(ApplyForm::new(id));
        }
    }

    fn render_favorites(&mut self, ui: &mut egui::Ui) {
        let palette = DesignSystem::palette(self.settings.theme);
        ui.heading(self.i18n.t("tenant_favorites"));
        ui.add_space(8.0);

        let favorites: Vec<Listing> = self
            .catalog
            .all()
            .iter()
            .filter(|l| self.favorites.contains(&l.id))
            .cloned()
            .collect();

        if favorites.is_empty() {
            ui.label(
                egui::RichText::new(self.i18n.t("favorites_empty"))
                    .italics()
                    .color(palette.text_muted),
            );
            return;
        }

        self.render_listing_grid(ui, &favorites);
    }

    fn render_applications(&mut self, ui: &mut egui::Ui) {
        let palette = DesignSystem::palette(self.settings.theme);
        let language = self.language();
        ui.heading(self.i18n.t("tenant_applications"));
        ui.add_space(8.0);

        if self.my_applications.is_empty() {
            ui.label(
                egui::RichText::new(self.i18n.t("no_results"))
                    .italics()
                    .color(palette.text_muted),
            );
            return;
        }

        for application in self.my_applications.iter().rev() {
            let listing_title = self
                .catalog
                .get(application.listing_id)
                .map(|l| l.title.get(language).to_string())
                .unwrap_or_default();
            DesignSystem::card_frame(self.settings.theme).show(ui, |ui| {
                ui.set_width(ui.available_width().min(520.0));
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(listing_title)
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
                        let (color, key) = match application.status {
                            ApplicationStatus::Pending => (palette.warning, "status_pending"),
                            ApplicationStatus::Accepted => (palette.success, "status_accepted"),
                            ApplicationStatus::Rejected => (palette.danger, "status_rejected"),
                            ApplicationStatus::Expired => (palette.text_muted, "status_expired"),
                        };
                        ui.label(
                            egui::RichText::new(self.i18n.t(key)).size(11.0).color(color),
                        );
                    });
                });
            });
            ui.add_space(8.0);
        }
    }

    fn render_profile(&mut self, ui: &mut egui::Ui) {
        let palette = DesignSystem::palette(self.settings.theme);
        ui.heading(self.i18n.t("tenant_profile"));
        ui.add_space(8.0);

        if let Some(user) = &self.user {
            DesignSystem::card_frame(self.settings.theme).show(ui, |ui| {
                ui.set_width(360.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&user.name)
                            .strong()
                            .size(18.0)
                            .color(palette.text_primary),
                    );
                    ui.label(&user.email);
                    ui.label(&user.phone);
                });
            });
            ui.add_space(12.0);

            // Language switch lives here on the compact layout
            let current_code = self.i18n.current_language_code().to_string();
            let languages = self.i18n.available_languages().to_vec();
            let mut switched = None;
            ui.horizontal(|ui| {
                for lang in &languages {
                    if ui
                        .selectable_label(
                            current_code == lang.code,
                            format!("{} {}", lang.flag, lang.native_name),
                        )
                        .clicked()
                    {
                        switched = Some(lang.code.clone());
                    }
                }
            });
            if let Some(code) = switched
                && self.i18n.set_language(&code)
            {
                self.settings.language = code;
                if let Some(persistence) = &self.settings_persistence
                    && let Err(e) = persistence.save(&self.settings)
                {
                    warn!("Failed to save settings: {}", e);
                }
            }

            ui.add_space(12.0);
            if ui.button(self.i18n.t("logout")).clicked() {
                self.auth.logout();
            }
        }
    }

    fn render_apply_window(&mut self, ctx: &egui::Context) {
        let Some(mut form) = self.apply_form.take() else {
            return;
        };
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(self.i18n.t("apply"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(self.i18n.t("apply_message"));
                ui.text_edit_multiline(&mut form.message);
                ui.add_space(6.0);
                ui.label(self.i18n.t("move_in_date"));
                ui.add(
                    egui::TextEdit::singleline(&mut form.move_in).hint_text("2026-09-01"),
                );
                ui.add_space(6.0);
                ui.label(self.i18n.t("apply_duration"));
                ui.add(
                    egui::TextEdit::singleline(&mut form.duration)
                        .hint_text(self.i18n.t("apply_duration_hint")),
                );
                if let Some(error) = &form.error {
                    ui.add_space(6.0);
                    ui.colored_label(
                        DesignSystem::palette(self.settings.theme).danger,
                        error,
                    );
                }
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button(self.i18n.t("apply")).clicked() {
                        submitted = true;
                    }
                    if ui.button(self.i18n.t("cancel")).clicked() {
                        cancelled = true;
                    }
                });
            });

        if cancelled {
            return;
        }
        if submitted {
            match parse_move_in(&form.move_in) {
                Some(move_in) => {
                    self.submit_application(
                        form.listing_id,
                        form.message.clone(),
                        form.duration.clone(),
                        move_in,
                    );
                    return;
                }
                None => form.error = Some(self.i18n.t("apply_bad_date").to_string()),
            }
        }
        self.apply_form = Some(form);
    }
}

impl eframe::App for TenantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme(self.settings.theme));
        self.process_auth_events();

        if self.user.is_none() {
            egui::CentralPanel::default()
                .frame(DesignSystem::main_frame(self.settings.theme))
                .show(ctx, |ui| {
                    let palette = DesignSystem::palette(self.settings.theme);
                    let action = auth_view::render_auth_card(
                        ui,
                        &mut self.auth_form,
                        true,
                        "app_title",
                        &self.i18n,
                        &palette,
                        self.settings.theme,
                    );
                    match action {
                        Some(AuthAction::Login { username, password }) => {
                            self.auth.login(&username, &password);
                        }
                        Some(AuthAction::Register(form)) => {
                            self.auth.register(form);
                        }
                        None => {}
                    }
                });
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
            return;
        }

        egui::TopBottomPanel::bottom("tenant_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let width = ui.available_width() / TenantTab::ALL.len() as f32;
                for tab in TenantTab::ALL {
                    ui.allocate_ui(egui::vec2(width, 48.0), |ui| {
                        ui.vertical_centered(|ui| {
                            let selected = self.tab == tab;
                            let text = format!("{} {}", tab.icon(), tab.label(&self.i18n));
                            if ui.selectable_label(selected, text).clicked() {
                                self.tab = tab;
                            }
                        });
                    });
                }
            });
        });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame(self.settings.theme))
            .show(ctx, |ui| {
                if let Some(notice) = self.notice.clone() {
                    let palette = DesignSystem::palette(self.settings.theme);
                    ui.horizontal(|ui| {
                        ui.colored_label(palette.success, notice);
                        if ui.small_button("✖").clicked() {
                            self.notice = None;
                        }
                    });
                    ui.add_space(8.0);
                }
                match self.tab {
                    TenantTab::Home => self.render_home(ui),
                    TenantTab::Favorites => self.render_favorites(ui),
                    TenantTab::Applications => self.render_applications(ui),
                    TenantTab::Profile => self.render_profile(ui),
                }
            });

        self.render_apply_window(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AuthError;
    use crate::domain::users::Role;
    use crate::infrastructure::auth::{AuthApi, LoginOutcome, RegistrationForm};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct OfflineAuth;

    #[async_trait]
    impl AuthApi for OfflineAuth {
        async fn login(&self, _: &str, _: &str) -> Result<LoginOutcome, AuthError> {
            Err(AuthError::Rejected {
                detail: "offline".to_string(),
            })
        }

        async fn register_tenant(&self, _: &RegistrationForm) -> Result<(), AuthError> {
            Ok(())
        }
    }

    fn logged_in_app() -> TenantApp {
        let mut app = TenantApp::new(Config::default(), AuthBridge::spawn(Arc::new(OfflineAuth)));
        app.user = Some(User {
            id: "5".to_string(),
            name: "Aziza Karimova".to_string(),
            email: "aziza@student.uz".to_string(),
            phone: "+998901112233".to_string(),
            role: Role::Tenant,
            verified: false,
            avatar: None,
        });
        app
    }

    #[test]
    fn move_in_dates_parse_strictly() {
        assert!(parse_move_in("2026-09-01").is_some());
        assert!(parse_move_in(" 2026-09-01 ").is_some());
        assert!(parse_move_in("01.09.2026").is_none());
        assert!(parse_move_in("").is_none());
    }

    #[test]
    fn submitted_application_carries_duration_and_move_in() {
        let mut app = logged_in_app();
        let listing_id = app.catalog.all()[0].id;
        let move_in = parse_move_in("2026-09-01").unwrap();

        app.submit_application(
            listing_id,
            "Assalomu alaykum!".to_string(),
            "1 yil".to_string(),
            move_in,
        );

        let submitted = app.my_applications.last().unwrap();
        assert_eq!(submitted.listing_id, listing_id);
        assert_eq!(submitted.duration, "1 yil");
        assert_eq!(submitted.move_in_date, move_in);
        assert_eq!(submitted.status, ApplicationStatus::Pending);
        assert_eq!(submitted.student.full_name, "Aziza Karimova");
        assert_eq!(submitted.student.university, "TATU");
    }
}
