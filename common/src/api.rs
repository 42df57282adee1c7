//! Wire types of the external authentication service's HTTP surface. Field names follow the
//! service's camelCase JSON so the types can be sent and parsed as is.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Body of an email and password registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpEmailRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Body of an email and password sign-in request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInEmailRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// OAuth providers the sign-up and sign-in views offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
}

impl SocialProvider {
    /// Every provider in the order the views show them
    pub const ALL: [Self; 2] = [Self::Google, Self::Github];

    /// Label shown on the provider's button
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Github => "Github",
        }
    }

    /// Identifier the authentication service expects
    pub const fn id(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
        }
    }
}

impl Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Body of a social sign-in request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSignInRequest {
    pub provider: SocialProvider,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Response to a social sign-in request. When `redirect` is set the browser must be sent to `url`
/// to continue the OAuth flow with the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSignInResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub redirect: bool,
}

/// The part of the signed in user the front end reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Session issued by the authentication service. Everything except the user's display data is
/// opaque to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

impl Session {
    /// Display name of the signed in user
    pub fn user_name(&self) -> &str {
        &self.user.name
    }

    /// Avatar image of the signed in user, if one was provided
    pub fn user_image(&self) -> Option<&str> {
        self.user.image.as_deref()
    }
}

/// Error payload returned by the authentication service. The message may be at the top level or
/// nested under `error` depending on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<Box<ErrorBody>>,
}

impl ErrorBody {
    /// First non-empty message found in the body
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .or_else(|| self.error.as_deref().and_then(Self::message))
    }

    /// First non-empty machine readable code found in the body
    pub fn code(&self) -> Option<&str> {
        self.code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .or_else(|| self.error.as_deref().and_then(Self::code))
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{ErrorBody, Session, SignUpEmailRequest, SocialProvider, SocialSignInRequest};

    #[test]
    fn sign_up_request_should_use_callback_url_key() -> Result<(), serde_json::Error> {
        let request = SignUpEmailRequest {
            name: "Al".to_owned(),
            email: "al@example.com".to_owned(),
            password: "secret1".to_owned(),
            callback_url: "/".to_owned(),
        };

        let json = serde_json::to_value(&request)?;

        assert_eq!(json["callbackURL"], "/");
        assert_eq!(json["name"], "Al");
        assert!(json.get("callback_url").is_none(), "snake case key leaked");
        Ok(())
    }

    #[test]
    fn social_request_should_serialize_provider_lowercase() -> Result<(), serde_json::Error> {
        let request = SocialSignInRequest {
            provider: SocialProvider::Github,
            callback_url: "/".to_owned(),
        };

        let json = serde_json::to_string(&request)?;

        assert_eq!(json, r#"{"provider":"github","callbackURL":"/"}"#);
        Ok(())
    }

    #[test]
    fn session_should_ignore_fields_it_does_not_read() -> Result<(), serde_json::Error> {
        let json = r#"{
            "session": { "id": "s1", "token": "t", "expiresAt": "2030-01-01T00:00:00Z" },
            "user": { "id": "u1", "name": "Al", "email": "al@example.com", "image": null }
        }"#;

        let session: Session = serde_json::from_str(json)?;

        assert_eq!(session.user_name(), "Al");
        assert_eq!(session.user_image(), None);
        Ok(())
    }

    #[rstest]
    #[case(r#"{"message":"Email taken","code":"USER_ALREADY_EXISTS"}"#, Some("Email taken"))]
    #[case(r#"{"error":{"message":"Invalid password"}}"#, Some("Invalid password"))]
    #[case(r#"{"message":"","error":{"message":"Nested"}}"#, Some("Nested"))]
    #[case(r#"{"code":"UNKNOWN"}"#, None)]
    #[case(r#"{}"#, None)]
    fn error_body_message_should_find_first_non_empty(
        #[case] json: &str,
        #[case] expected: Option<&str>,
    ) -> Result<(), serde_json::Error> {
        let body: ErrorBody = serde_json::from_str(json)?;

        assert_eq!(body.message(), expected);
        Ok(())
    }

    #[rstest]
    #[case(r#"{"message":"Email taken","code":"USER_ALREADY_EXISTS"}"#, Some("USER_ALREADY_EXISTS"))]
    #[case(r#"{"code":" ","error":{"code":"INVALID_PASSWORD"}}"#, Some("INVALID_PASSWORD"))]
    #[case(r#"{"message":"Email taken"}"#, None)]
    fn error_body_code_should_find_first_non_empty(
        #[case] json: &str,
        #[case] expected: Option<&str>,
    ) -> Result<(), serde_json::Error> {
        let body: ErrorBody = serde_json::from_str(json)?;

        assert_eq!(body.code(), expected);
        Ok(())
    }
}
