use crate::application::catalog::ListingCatalog;
use crate::application::inbox::{ApplicationInbox, InboxSort};
use crate::application::messenger::Messenger;
use crate::application::session::{AuthBridge, AuthEvent};
use crate::config::Config;
use crate::domain::housing::application::{ApplicationStatus, Verdict};
use crate::domain::housing::filter::{ListingFilter, SortKey};
use crate::domain::locale::Language;
use crate::domain::users::User;
use crate::infrastructure::auth::SessionTokens;
use crate::infrastructure::i18n::I18nService;
use crate::infrastructure::mock;
use crate::infrastructure::session_store::{PersistedSession, SessionStore};
use crate::infrastructure::settings_persistence::{PersistedSettings, SettingsPersistence};
use crate::interfaces::dashboard;
use crate::interfaces::dashboard_components::auth_view::{self, AuthAction, AuthForm};
use crate::interfaces::dashboard_components::listing_form::ListingForm;
use crate::interfaces::dashboard_components::{
    analytics_view, applications_view, chat_view, listings_view, profile_view,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::ui_components::{self, AppView};
use chrono::Utc;
use eframe::egui;
use std::collections::HashMap;
use tracing::warn;
use uuid::Uuid;

/// Top-level state of the landlord dashboard.
pub struct LandlordApp {
    pub config: Config,
    pub i18n: I18nService,
    pub settings: PersistedSettings,
    pub settings_persistence: Option<SettingsPersistence>,
    pub session_store: Option<SessionStore>,
    pub auth: AuthBridge,

    pub user: Option<User>,
    pub tokens: Option<SessionTokens>,
    pub auth_form: AuthForm,

    pub catalog: ListingCatalog,
    pub inbox: ApplicationInbox,
    pub messenger: Messenger,

    pub current_view: AppView,
    pub filter: ListingFilter,
    pub sort: SortKey,
    pub price_min_input: String,
    pub price_max_input: String,
    pub listing_form: Option<ListingForm>,

    pub inbox_filter: Option<ApplicationStatus>,
    pub inbox_sort: InboxSort,
    pub response_drafts: HashMap<Uuid, String>,
    /// Open accept/reject dialog, if any.
    pub decision_prompt: Option<(Uuid, Verdict)>,

    pub selected_conversation: Option<Uuid>,
    pub chat_search: String,
    pub chat_draft: String,
}

impl LandlordApp {
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

        let session_store = SessionStore::new()
            .map_err(|e| warn!("Session persistence unavailable: {}", e))
            .ok();
        let saved_session = session_store.as_ref().and_then(|s| s.load().ok().flatten());
        let (user, tokens) = match saved_session {
            Some(session) => (
                Some(session.landlord_user),
                Some(SessionTokens {
                    access: session.access_token,
                    refresh: session.refresh_token,
                }),
            ),
            None => (None, None),
        };

        let catalog = ListingCatalog::new(mock::sample_listings());
        let mut inbox = ApplicationInbox::new(mock::sample_applications(catalog.all()));
        inbox.expire_overdue(Utc::now(), config.application_expiry_days);
        let conversations = mock::sample_conversations();
        let threads = conversations
            .iter()
            .map(|c| (c.id, mock::sample_thread(c, "1", "Jamshid Karimov")))
            .collect();
        let messenger = Messenger::new(conversations, threads);

        Self {
            config,
            i18n,
            settings,
            settings_persistence,
            session_store,
            auth,
            user,
            tokens,
            auth_form: AuthForm::new(),
            catalog,
            inbox,
            messenger,
            current_view: AppView::Dashboard,
            filter: ListingFilter::default(),
            sort: SortKey::default(),
            price_min_input: String::new(),
            price_max_input: String::new(),
            listing_form: None,
            inbox_filter: None,
            inbox_sort: InboxSort::default(),
            response_drafts: HashMap::new(),
            decision_prompt: None,
            selected_conversation: None,
            chat_search: String::new(),
            chat_draft: String::new(),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(self.i18n.current_language_code()).unwrap_or_default()
    }

    fn persist_settings(&self) {
        if let Some(persistence) = &self.settings_persistence
            && let Err(e) = persistence.save(&self.settings)
        {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn process_auth_events(&mut self) {
        while let Some(event) = self.auth.try_event() {
            match event {
                AuthEvent::LoggedIn { user, tokens } => {
                    if let Some(store) = &self.session_store
                        && let Err(e) =
                            store.save(&PersistedSession::new(user.clone(), tokens.clone()))
                    {
                        warn!("Failed to save session: {}", e);
                    }
                    self.user = Some(user);
                    self.tokens = Some(tokens);
                    self.auth_form = AuthForm::new();
                }
                AuthEvent::LoginFailed(message) => {
                    self.auth_form.in_progress = false;
                    self.auth_form.error = Some(message);
                }
                AuthEvent::Registered => {
                    self.auth_form.notice = Some(self.i18n.t("register_success").to_string());
                }
                AuthEvent::RegisterFailed(message) => {
                    self.auth_form.in_progress = false;
                    self.auth_form.error = Some(message);
                }
                AuthEvent::LoggedOut => {
                    if let Some(store) = &self.session_store
                        && let Err(e) = store.clear()
                    {
                        warn!("Failed to clear session: {}", e);
                    }
                    self.user = None;
                    self.tokens = None;
                    self.current_view = AppView::Dashboard;
                }
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = DesignSystem::palette(self.settings.theme);
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("🏠 {}", self.i18n.t("app_title")));
                ui.separator();
                ui.label(
                    egui::RichText::new(Utc::now().format("%H:%M").to_string())
                        .color(palette.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(self.i18n.t("logout")).clicked() {
                        self.auth.logout();
                    }
                    if let Some(user) = &self.user {
                        ui.label(
                            egui::RichText::new(&user.name)
                                .strong()
                                .color(palette.text_primary),
                        );
                        ui.label(egui::RichText::new("👤").size(16.0));
                    }
                });
            });
        });
    }

    fn render_main(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx);

        let unread = self.messenger.total_unread();
        let pending = self.inbox.counts().pending;
        egui::SidePanel::left("sidebar")
            .exact_width(110.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui_components::render_sidebar(
                    ui,
                    &mut self.current_view,
                    unread,
                    pending,
                    &self.i18n,
                );
            });

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame(self.settings.theme))
            .show(ctx, |ui| match self.current_view {
                AppView::Dashboard => dashboard::render_dashboard(ui, self),
                AppView::Listings => listings_view::render_listings_view(ui, self),
                AppView::Applications => {
                    applications_view::render_applications_view(ui, self)
                }
                AppView::Chat => chat_view::render_chat_view(ui, self),
                AppView::Analytics => analytics_view::render_analytics_view(ui, self),
                AppView::Profile => profile_view::render_profile_view(ui, self),
                AppView::Settings => {
                    if ui_components::render_settings_view(
                        ui,
                        &mut self.settings,
                        &mut self.i18n,
                    ) {
                        self.persist_settings();
                    }
                }
            });
    }

    fn render_auth_gate(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame(self.settings.theme))
            .show(ctx, |ui| {
                let palette = DesignSystem::palette(self.settings.theme);
                let action = auth_view::render_auth_card(
                    ui,
                    &mut self.auth_form,
                    false,
                    "login_title",
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
    }
}

impl eframe::App for LandlordApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme(self.settings.theme));

        self.process_auth_events();

        if self.user.is_some() {
            self.render_main(ctx);
        } else {
            self.render_auth_gate(ctx);
        }

        // Keep polling auth events even while idle
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
