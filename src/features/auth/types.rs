//! Request and response types for the auth endpoints. The login request
//! carries a raw password over TLS and must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session summary returned by the API to hydrate auth state. Mirrors the
/// cookie-backed session and contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserSession {
    /// Name shown in the header greeting; falls back to the email's local
    /// part when no display name is set.
    pub fn greeting_name(&self) -> &str {
        if let Some(name) = self.display_name.as_deref() {
            if !name.trim().is_empty() {
                return name;
            }
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::UserSession;

    #[test]
    fn session_deserializes_without_optional_fields() {
        let session: UserSession =
            serde_json::from_str(r#"{"user_id":"u-1","email":"ops@harivara.app"}"#)
                .expect("valid session");
        assert_eq!(session.display_name, None);
        assert_eq!(session.greeting_name(), "ops");
    }

    #[test]
    fn greeting_prefers_the_display_name() {
        let session: UserSession = serde_json::from_str(
            r#"{"user_id":"u-1","email":"ops@harivara.app","display_name":"Asha"}"#,
        )
        .expect("valid session");
        assert_eq!(session.greeting_name(), "Asha");
    }

    #[test]
    fn blank_display_names_fall_back_to_email() {
        let session: UserSession = serde_json::from_str(
            r#"{"user_id":"u-1","email":"ops@harivara.app","display_name":"  "}"#,
        )
        .expect("valid session");
        assert_eq!(session.greeting_name(), "ops");
    }
}
