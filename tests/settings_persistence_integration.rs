use joybor::domain::users::{Role, User};
use joybor::infrastructure::auth::SessionTokens;
use joybor::infrastructure::session_store::{PersistedSession, SessionStore};
use joybor::infrastructure::settings_persistence::{
    PersistedSettings, SettingsPersistence, Theme, ViewMode,
};
use std::path::PathBuf;

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("joybor-test-{}-{}", tag, uuid::Uuid::new_v4()))
}

#[test]
fn settings_survive_a_save_load_cycle() {
    let dir = temp_dir("settings");
    let persistence = SettingsPersistence::in_dir(dir.clone()).unwrap();

    assert!(persistence.load().unwrap().is_none());

    let settings = PersistedSettings {
        language: "ru".to_string(),
        theme: Theme::Light,
        view_mode: ViewMode::List,
    };
    persistence.save(&settings).unwrap();

    let loaded = persistence.load().unwrap().expect("settings were saved");
    assert_eq!(loaded.language, "ru");
    assert_eq!(loaded.theme, Theme::Light);
    assert_eq!(loaded.view_mode, ViewMode::List);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn settings_serialization_roundtrip() {
    let settings = PersistedSettings::default();
    let serialized = serde_json::to_string(&settings).expect("Failed to serialize");
    let deserialized: PersistedSettings =
        serde_json::from_str(&serialized).expect("Failed to deserialize");

    assert_eq!(deserialized.language, "uz");
    assert_eq!(deserialized.theme, Theme::Dark);
    assert_eq!(deserialized.view_mode, ViewMode::Grid);
}

#[test]
fn session_store_roundtrip_and_clear() {
    let dir = temp_dir("session");
    let store = SessionStore::in_dir(dir.clone()).unwrap();

    assert!(store.load().unwrap().is_none());

    let session = PersistedSession::new(
        User {
            id: "1".to_string(),
            name: "Jamshid Karimov".to_string(),
            email: "jamshid@example.com".to_string(),
            phone: "+998901234567".to_string(),
            role: Role::Landlord,
            verified: true,
            avatar: None,
        },
        SessionTokens {
            access: "access-token".to_string(),
            refresh: Some("refresh-token".to_string()),
        },
    );
    store.save(&session).unwrap();

    let loaded = store.load().unwrap().expect("session was saved");
    assert_eq!(loaded.access_token, "access-token");
    assert_eq!(loaded.refresh_token.as_deref(), Some("refresh-token"));
    assert_eq!(loaded.landlord_user.name, "Jamshid Karimov");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());

    // Clearing twice is harmless
    store.clear().unwrap();

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn session_json_uses_stable_field_names() {
    let session = PersistedSession::new(
        User {
            id: "1".to_string(),
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            phone: "+998900000000".to_string(),
            role: Role::Landlord,
            verified: true,
            avatar: None,
        },
        SessionTokens {
            access: "a".to_string(),
            refresh: None,
        },
    );
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();
    assert!(value.get("access_token").is_some());
    assert!(value.get("refresh_token").is_some());
    assert!(value.get("landlord_user").is_some());
}
