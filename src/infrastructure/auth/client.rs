use crate::domain::errors::{AuthError, ValidationError};
use crate::domain::users::{Role, User};
use crate::infrastructure::core::http_client_factory::HttpClientFactory;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

/// Role string the API uses for landlord accounts.
pub const LANDLORD_ROLE: &str = "ijarachi";

const DEMO_USERNAME: &str = "admin@example.com";
const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub tokens: SessionTokens,
}

/// Tenant registration payload, mirroring the API body field for field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password2: String,
}

impl RegistrationForm {
    /// Client-side checks run before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "username" });
        }
        if self.password != self.password2 {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < 6 {
            return Err(ValidationError::PasswordTooShort { min: 6 });
        }
        Ok(())
    }
}

/// Seam over the remote auth endpoints so the session bridge can be
/// exercised without a network.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError>;
    async fn register_tenant(&self, form: &RegistrationForm) -> Result<(), AuthError>;
}

pub struct AuthClient {
    client: ClientWithMiddleware,
    base_url: Url,
    /// When set, logins with any other role are refused.
    required_role: Option<String>,
    demo_login: bool,
}

impl AuthClient {
    pub fn new(
        base_url: &str,
        required_role: Option<String>,
        demo_login: bool,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join treats a path without a trailing slash as a file.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self {
            client: HttpClientFactory::create_client(timeout_secs),
            base_url,
            required_role,
            demo_login,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::MalformedResponse {
                reason: format!("bad endpoint {}: {}", path, e),
            })
    }

    fn demo_outcome(&self, username: &str, password: &str) -> Option<LoginOutcome> {
        if self.demo_login && username == DEMO_USERNAME && password == DEMO_PASSWORD {
            Some(LoginOutcome {
                user: demo_user(username),
                tokens: SessionTokens {
                    access: "demo".to_string(),
                    refresh: None,
                },
            })
        } else {
            None
        }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let url = self.endpoint("token/")?;
        let body = serde_json::json!({ "username": username, "password": password });

        let result = async {
            let response = self
                .client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(|e| AuthError::Network(e.into()))?;
            let status = response.status();
            let payload: Value = response
                .json()
                .await
                .map_err(|e| AuthError::MalformedResponse {
                    reason: e.to_string(),
                })?;

            if status.is_success() {
                parse_login_payload(username, &payload, self.required_role.as_deref())
            } else {
                Err(error_from_body(&payload))
            }
        }
        .await;

        match result {
            Ok(outcome) => {
                info!(user = %outcome.user.name, "login succeeded");
                Ok(outcome)
            }
            // The web client accepted the demo credentials whenever the real
            // login failed for any reason; keep that behavior, gated by config.
            Err(err) => match self.demo_outcome(username, password) {
                Some(outcome) => {
                    warn!("auth API unavailable, using demo session");
                    Ok(outcome)
                }
                None => Err(err),
            },
        }
    }

    async fn register_tenant(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        let url = self.endpoint("register/tenant/")?;
        let response = self
            .client
            .post(url)
            .json(form)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.into()))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse {
                reason: e.to_string(),
            })?;

        if status.is_success() {
            info!(username = %form.username, "tenant registered");
            Ok(())
        } else {
            Err(error_from_body(&payload))
        }
    }
}

/// Build a session from a 2xx token response, enforcing the role gate.
pub fn parse_login_payload(
    username: &str,
    payload: &Value,
    required_role: Option<&str>,
) -> Result<LoginOutcome, AuthError> {
    let role = payload
        .get("role")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if let Some(required) = required_role
        && role != required
    {
        return Err(AuthError::RoleNotAllowed {
            role: role.to_string(),
        });
    }

    let access = payload
        .get("access")
        .and_then(Value::as_str)
        .ok_or_else(|| AuthError::MalformedResponse {
            reason: "missing access token".to_string(),
        })?
        .to_string();
    let refresh = payload
        .get("refresh")
        .and_then(Value::as_str)
        .map(str::to_string);

    let str_field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| payload.get(*k).and_then(Value::as_str))
            .map(str::to_string)
    };

    let user = User {
        id: payload
            .get("id")
            .or_else(|| payload.get("user_id"))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| "1".to_string()),
        name: str_field(&["username", "name", "first_name"])
            .unwrap_or_else(|| "Foydalanuvchi".to_string()),
        email: str_field(&["email"]).unwrap_or_else(|| username.to_string()),
        phone: str_field(&["phone"]).unwrap_or_else(|| "+998901234567".to_string()),
        role: if role == LANDLORD_ROLE {
            Role::Landlord
        } else {
            Role::Tenant
        },
        verified: payload
            .get("verified")
            .and_then(Value::as_bool)
            .unwrap_or(true),
        avatar: str_field(&["avatar"]),
    };

    Ok(LoginOutcome {
        user,
        tokens: SessionTokens { access, refresh },
    })
}

/// Map a non-2xx body to a user-facing error, preferring the most
/// specific message the API gives us.
pub fn error_from_body(payload: &Value) -> AuthError {
    if let Some(detail) = payload.get("detail").and_then(Value::as_str) {
        return AuthError::Rejected {
            detail: detail.to_string(),
        };
    }
    if let Some(first) = payload
        .get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .and_then(Value::as_str)
    {
        return AuthError::Rejected {
            detail: first.to_string(),
        };
    }
    if let Some(object) = payload.as_object() {
        let fields: Vec<(String, String)> = object
            .iter()
            .filter_map(|(field, messages)| {
                let message = match messages {
                    Value::String(s) => Some(s.clone()),
                    Value::Array(a) => a.first().and_then(Value::as_str).map(str::to_string),
                    _ => None,
                }?;
                Some((field.clone(), message))
            })
            .collect();
        if !fields.is_empty() {
            return AuthError::FieldErrors { fields };
        }
    }
    AuthError::Rejected {
        detail: "Login failed".to_string(),
    }
}

pub fn demo_user(email: &str) -> User {
    User {
        id: "1".to_string(),
        name: "Jamshid Karimov".to_string(),
        email: email.to_string(),
        phone: "+998901234567".to_string(),
        role: Role::Landlord,
        verified: true,
        avatar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn landlord_role_is_required_when_gated() {
        let payload = json!({ "access": "a", "refresh": "r", "role": "talaba" });
        let err = parse_login_payload("u", &payload, Some(LANDLORD_ROLE)).unwrap_err();
        assert!(matches!(err, AuthError::RoleNotAllowed { .. }));
    }

    #[test]
    fn successful_payload_builds_landlord_user() {
        let payload = json!({
            "access": "tok",
            "refresh": "ref",
            "role": "ijarachi",
            "username": "jamshid",
            "email": "j@example.com",
            "verified": true
        });
        let outcome = parse_login_payload("jamshid", &payload, Some(LANDLORD_ROLE)).unwrap();
        assert_eq!(outcome.user.name, "jamshid");
        assert_eq!(outcome.user.role, Role::Landlord);
        assert_eq!(outcome.tokens.access, "tok");
        assert_eq!(outcome.tokens.refresh.as_deref(), Some("ref"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let payload = json!({ "access": "tok", "role": "ijarachi" });
        let outcome = parse_login_payload("someone@x.uz", &payload, None).unwrap();
        assert_eq!(outcome.user.name, "Foydalanuvchi");
        assert_eq!(outcome.user.email, "someone@x.uz");
        assert_eq!(outcome.user.id, "1");
    }

    #[test]
    fn missing_access_token_is_malformed() {
        let payload = json!({ "role": "ijarachi" });
        assert!(matches!(
            parse_login_payload("u", &payload, None),
            Err(AuthError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn detail_message_wins_over_field_errors() {
        let payload = json!({ "detail": "No active account", "username": ["taken"] });
        match error_from_body(&payload) {
            AuthError::Rejected { detail } => assert_eq!(detail, "No active account"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn non_field_errors_take_first_entry() {
        let payload = json!({ "non_field_errors": ["Invalid credentials", "second"] });
        match error_from_body(&payload) {
            AuthError::Rejected { detail } => assert_eq!(detail, "Invalid credentials"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn field_errors_are_collected_verbatim() {
        let payload = json!({
            "username": ["A user with that username already exists."],
            "phone": "Invalid phone number"
        });
        match error_from_body(&payload) {
            AuthError::FieldErrors { fields } => {
                assert_eq!(fields.len(), 2);
                assert!(fields.iter().any(|(f, m)| f == "phone" && m.contains("Invalid")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn registration_validation_matches_the_form_rules() {
        let mut form = RegistrationForm {
            username: "talaba".to_string(),
            email: "t@student.uz".to_string(),
            phone: "+998900000000".to_string(),
            password: "sirli123".to_string(),
            password2: "sirli123".to_string(),
        };
        assert!(form.validate().is_ok());

        form.password2 = "boshqa".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        form.password = "abc".to_string();
        form.password2 = "abc".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }
}
