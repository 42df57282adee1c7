//! Client configuration. A browser bundle has no runtime environment, so values come from the
//! build environment through [option_env] and fall back to the defaults below.

use common::error::AvResult;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::routes::Page;

/// Default location of the authentication service, relative to the page origin
const DEFAULT_AUTH_BASE_URL: &str = "/api/auth";
/// Default log level of the browser console logger
const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings the authentication flow needs at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL every authentication endpoint is resolved against
    pub auth_base_url: String,
    /// Route the user lands on after a successful sign up or sign in
    pub callback_url: String,
    /// Route the user is sent to after signing out
    pub sign_in_route: String,
    /// Level name understood by [LevelFilter]'s `FromStr` implementation
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_owned(),
            callback_url: Page::Home.path().to_owned(),
            sign_in_route: Page::SignIn.path().to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build the configuration as it was set when the crate was compiled. `AIVIA_CONFIG` holds an
    /// optional JSON document, then `AIVIA_AUTH_URL` and `AIVIA_LOG_LEVEL` override single keys.
    /// # Errors
    /// This function will return an error if `AIVIA_CONFIG` is not a valid configuration document
    pub fn from_build_env() -> AvResult<Self> {
        Self::from_sources(
            option_env!("AIVIA_CONFIG"),
            option_env!("AIVIA_AUTH_URL"),
            option_env!("AIVIA_LOG_LEVEL"),
        )
    }

    /// Parse a JSON configuration document. Missing keys take their default value.
    /// # Errors
    /// This function will return an error if `json` is not a valid configuration document
    pub fn from_json(json: &str) -> AvResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    fn from_sources(
        json: Option<&str>,
        auth_base_url: Option<&str>,
        log_level: Option<&str>,
    ) -> AvResult<Self> {
        let config = match json.filter(|json| !json.trim().is_empty()) {
            Some(json) => Self::from_json(json)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(auth_base_url, log_level))
    }

    /// Apply optional overrides on top of the current values
    fn with_overrides(mut self, auth_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = auth_base_url.filter(|url| !url.trim().is_empty()) {
            self.auth_base_url = url.trim().to_owned();
        }
        if let Some(level) = log_level.filter(|level| !level.trim().is_empty()) {
            self.log_level = level.trim().to_owned();
        }
        self.normalized()
    }

    /// Strip trailing slashes so endpoints can be joined with a single `/`
    fn normalized(mut self) -> Self {
        let trimmed = self.auth_base_url.trim_end_matches('/');
        if trimmed.len() != self.auth_base_url.len() {
            self.auth_base_url = trimmed.to_owned();
        }
        self
    }

    /// Full URL of the authentication endpoint at `path`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.auth_base_url, path.trim_start_matches('/'))
    }

    /// Level filter for the console logger. Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod test {
    use common::error::AvResult;
    use log::LevelFilter;
    use rstest::rstest;

    use super::ClientConfig;

    #[test]
    fn default_should_point_at_local_auth_service() {
        let config = ClientConfig::default();

        assert_eq!(config.auth_base_url, "/api/auth");
        assert_eq!(config.callback_url, "/");
        assert_eq!(config.sign_in_route, "/sign-in");
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn from_json_should_fill_missing_keys_with_defaults() -> AvResult<()> {
        let config = ClientConfig::from_json(
            r#"{"authBaseUrl":"https://auth.example.com/api/auth/","logLevel":"debug"}"#,
        )?;

        assert_eq!(config.auth_base_url, "https://auth.example.com/api/auth");
        assert_eq!(config.callback_url, "/");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn from_json_should_fail_when_not_json() {
        assert!(ClientConfig::from_json("auth_base_url = 1").is_err());
    }

    #[rstest]
    #[case(None, None, "/api/auth", LevelFilter::Info)]
    #[case(Some("https://auth.example.com/"), None, "https://auth.example.com", LevelFilter::Info)]
    #[case(Some("  "), Some("trace"), "/api/auth", LevelFilter::Trace)]
    #[case(None, Some("loud"), "/api/auth", LevelFilter::Info)]
    fn with_overrides_should_replace_defaults(
        #[case] url: Option<&str>,
        #[case] level: Option<&str>,
        #[case] expected_url: &str,
        #[case] expected_level: LevelFilter,
    ) {
        let config = ClientConfig::default().with_overrides(url, level);

        assert_eq!(config.auth_base_url, expected_url);
        assert_eq!(config.level_filter(), expected_level);
    }

    #[test]
    fn from_sources_should_apply_env_overrides_on_top_of_json() -> AvResult<()> {
        let json = r#"{"authBaseUrl":"https://auth.example.com/api/auth","signInRoute":"/login","logLevel":"warn"}"#;

        let config = ClientConfig::from_sources(Some(json), None, Some("debug"))?;

        assert_eq!(config.auth_base_url, "https://auth.example.com/api/auth");
        assert_eq!(config.sign_in_route, "/login");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        Ok(())
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn from_sources_should_use_defaults_without_json(#[case] json: Option<&str>) -> AvResult<()> {
        let config = ClientConfig::from_sources(json, None, None)?;

        assert_eq!(config, ClientConfig::default());
        Ok(())
    }

    #[test]
    fn from_sources_should_fail_on_invalid_json() {
        let result = ClientConfig::from_sources(Some("{"), Some("/api/auth"), None);

        assert!(result.is_err());
    }

    #[rstest]
    #[case("sign-up/email", "/api/auth/sign-up/email")]
    #[case("/get-session", "/api/auth/get-session")]
    fn endpoint_should_join_with_single_slash(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(ClientConfig::default().endpoint(path), expected);
    }
}
