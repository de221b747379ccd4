use crate::domain::users::User;
use crate::infrastructure::auth::{AuthApi, RegistrationForm, SessionTokens};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug)]
pub enum AuthCommand {
    Login { username: String, password: String },
    Register { form: RegistrationForm },
    Logout,
}

#[derive(Debug)]
pub enum AuthEvent {
    LoggedIn { user: User, tokens: SessionTokens },
    LoginFailed(String),
    Registered,
    RegisterFailed(String),
    LoggedOut,
}

/// Bridges the UI thread to the async auth client. Commands go in over a
/// tokio channel, events come back over a crossbeam channel the UI polls
/// once per frame.
pub struct AuthBridge {
    commands: tokio::sync::mpsc::UnboundedSender<AuthCommand>,
    events: crossbeam_channel::Receiver<AuthEvent>,
}

impl AuthBridge {
    pub fn spawn(api: Arc<dyn AuthApi>) -> Self {
        let (command_tx, mut command_rx) = tokio::sync::mpsc::unbounded_channel::<AuthCommand>();
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<AuthEvent>();

        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to start auth runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(command) = command_rx.recv().await {
                    let event = handle_command(api.as_ref(), command, &event_tx).await;
                    if event_tx.send(event).is_err() {
                        // UI side dropped the receiver, nothing left to do.
                        break;
                    }
                }
            });
        });

        Self {
            commands: command_tx,
            events: event_rx,
        }
    }

    pub fn login(&self, username: &str, password: &str) {
        let _ = self.commands.send(AuthCommand::Login {
            username: username.to_string(),
            password: password.to_string(),
        });
    }

    pub fn register(&self, form: RegistrationForm) {
        let _ = self.commands.send(AuthCommand::Register { form });
    }

    pub fn logout(&self) {
        let _ = self.commands.send(AuthCommand::Logout);
    }

    /// Non-blocking poll, called once per UI frame.
    pub fn try_event(&self) -> Option<AuthEvent> {
        self.events.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn AuthApi,
    command: AuthCommand,
    event_tx: &crossbeam_channel::Sender<AuthEvent>,
) -> AuthEvent {
    match command {
        AuthCommand::Login { username, password } => {
            match api.login(&username, &password).await {
                Ok(outcome) => AuthEvent::LoggedIn {
                    user: outcome.user,
                    tokens: outcome.tokens,
                },
                Err(e) => AuthEvent::LoginFailed(e.to_string()),
            }
        }
        AuthCommand::Register { form } => match api.register_tenant(&form).await {
            Ok(()) => {
                info!(username = %form.username, "registration complete, logging in");
                // New tenants land in the app without a second form.
                let _ = event_tx.send(AuthEvent::Registered);
                match api.login(&form.username, &form.password).await {
                    Ok(outcome) => AuthEvent::LoggedIn {
                        user: outcome.user,
                        tokens: outcome.tokens,
                    },
                    Err(e) => AuthEvent::LoginFailed(e.to_string()),
                }
            }
            Err(e) => AuthEvent::RegisterFailed(e.to_string()),
        },
        AuthCommand::Logout => AuthEvent::LoggedOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::AuthError;
    use crate::domain::users::Role;
    use crate::infrastructure::auth::LoginOutcome;
    use async_trait::async_trait;
    use std::time::Duration;

    struct StubApi {
        accept: bool,
    }

    #[async_trait]
    impl AuthApi for StubApi {
        async fn login(&self, username: &str, _password: &str) -> Result<LoginOutcome, AuthError> {
            if self.accept {
                Ok(LoginOutcome {
                    user: User {
                        id: "7".to_string(),
                        name: username.to_string(),
                        email: format!("{}@example.com", username),
                        phone: "+998900000000".to_string(),
                        role: Role::Landlord,
                        verified: true,
                        avatar: None,
                    },
                    tokens: SessionTokens {
                        access: "a".to_string(),
                        refresh: None,
                    },
                })
            } else {
                Err(AuthError::Rejected {
                    detail: "bad credentials".to_string(),
                })
            }
        }

        async fn register_tenant(&self, _form: &RegistrationForm) -> Result<(), AuthError> {
            if self.accept {
                Ok(())
            } else {
                Err(AuthError::Rejected {
                    detail: "taken".to_string(),
                })
            }
        }
    }

    fn wait_event(bridge: &AuthBridge) -> AuthEvent {
        bridge
            .events
            .recv_timeout(Duration::from_secs(5))
            .expect("no event within timeout")
    }

    #[test]
    fn successful_login_emits_logged_in() {
        let bridge = AuthBridge::spawn(Arc::new(StubApi { accept: true }));
        bridge.login("jamshid", "secret");
        match wait_event(&bridge) {
            AuthEvent::LoggedIn { user, tokens } => {
                assert_eq!(user.name, "jamshid");
                assert_eq!(tokens.access, "a");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn failed_login_carries_the_message() {
        let bridge = AuthBridge::spawn(Arc::new(StubApi { accept: false }));
        bridge.login("jamshid", "wrong");
        match wait_event(&bridge) {
            AuthEvent::LoginFailed(message) => assert!(message.contains("bad credentials")),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn registration_chains_into_login() {
        let bridge = AuthBridge::spawn(Arc::new(StubApi { accept: true }));
        bridge.register(RegistrationForm {
            username: "talaba".to_string(),
            email: "t@student.uz".to_string(),
            phone: "+998911111111".to_string(),
            password: "sirli123".to_string(),
            password2: "sirli123".to_string(),
        });
        assert!(matches!(wait_event(&bridge), AuthEvent::Registered));
        assert!(matches!(wait_event(&bridge), AuthEvent::LoggedIn { .. }));
    }

    #[test]
    fn rejected_registration_does_not_attempt_login() {
        let api = StubApi { accept: false };
        let (event_tx, event_rx) = crossbeam_channel::unbounded::<AuthEvent>();
        let command = AuthCommand::Register {
            form: RegistrationForm {
                username: "talaba".to_string(),
                email: "t@student.uz".to_string(),
                phone: "+998911111111".to_string(),
                password: "sirli123".to_string(),
                password2: "sirli123".to_string(),
            },
        };
        let event = tokio_test::block_on(handle_command(&api, command, &event_tx));
        assert!(matches!(event, AuthEvent::RegisterFailed(_)));
        // No interim Registered event when the API rejects the form.
        assert!(event_rx.try_recv().is_err());
    }

    #[test]
    fn logout_round_trips() {
        let bridge = AuthBridge::spawn(Arc::new(StubApi { accept: true }));
        bridge.logout();
        assert!(matches!(wait_event(&bridge), AuthEvent::LoggedOut));
    }
}
