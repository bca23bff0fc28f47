//! Client configuration, passed explicitly to [`MitakeClient::new`].
//!
//! There is no process-wide default instance; callers that want a shared
//! configuration manage it themselves.
//!
//! [`MitakeClient::new`]: crate::MitakeClient::new

use std::time::Duration;

/// Production base URL; every endpoint is resolved relative to it.
pub const DEFAULT_API_BASE_URL: &str = "https://smsapi.mitake.com.tw/api/mtk/";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection-establishment timeout.
pub const DEFAULT_OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable read by [`Configuration::from_env`].
pub const USERNAME_ENV: &str = "MITAKE_USERNAME";
/// Environment variable read by [`Configuration::from_env`].
pub const PASSWORD_ENV: &str = "MITAKE_PASSWORD";

#[derive(Debug, Clone)]
/// Connection settings for the Mitake gateway.
///
/// Credentials are not validated here; missing or wrong credentials surface as
/// an authentication failure from the gateway itself.
pub struct Configuration {
    pub username: String,
    pub password: String,
    /// Base URL the relative endpoints (`SmSend`, `SmBulkSend`, `SmPost`) are
    /// joined against. Must end with a slash to keep the final path segment.
    pub api_base_url: String,
    /// Whole-request timeout applied to the HTTP client.
    pub timeout: Duration,
    /// Connection-establishment timeout applied to the HTTP client.
    pub open_timeout: Duration,
}

impl Configuration {
    /// Form field name for the account username (`username`).
    pub const USERNAME_FIELD: &'static str = "username";
    /// Form field name for the account password (`password`).
    pub const PASSWORD_FIELD: &'static str = "password";

    /// Configuration with the given credentials and default endpoint/timeouts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Configuration with credentials sourced from `MITAKE_USERNAME` /
    /// `MITAKE_PASSWORD`; unset variables yield empty credentials.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var(USERNAME_ENV).unwrap_or_default(),
            password: std::env::var(PASSWORD_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub(crate) fn push_credentials(&self, params: &mut Vec<(String, String)>) {
        params.push((Self::USERNAME_FIELD.to_owned(), self.username.clone()));
        params.push((Self::PASSWORD_FIELD.to_owned(), self.password.clone()));
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            open_timeout: DEFAULT_OPEN_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gateway_documentation() {
        let config = Configuration::default();
        assert_eq!(config.username, "");
        assert_eq!(config.password, "");
        assert_eq!(config.api_base_url, "https://smsapi.mitake.com.tw/api/mtk/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.open_timeout, Duration::from_secs(5));
    }

    #[test]
    fn new_sets_credentials_and_keeps_defaults() {
        let config = Configuration::new("user", "pass");
        assert_eq!(config.username, "user");
        assert_eq!(config.password, "pass");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn credentials_are_pushed_as_form_fields() {
        let config = Configuration::new("user", "pass");
        let mut params = Vec::new();
        config.push_credentials(&mut params);
        assert_eq!(
            params,
            vec![
                ("username".to_owned(), "user".to_owned()),
                ("password".to_owned(), "pass".to_owned()),
            ]
        );
    }

    #[test]
    fn from_env_keeps_default_endpoint_and_timeouts() {
        // Credentials depend on the ambient environment; everything else must
        // stay at the documented defaults.
        let config = Configuration::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.open_timeout, DEFAULT_OPEN_TIMEOUT);
        if std::env::var(USERNAME_ENV).is_err() {
            assert_eq!(config.username, "");
        }
        if std::env::var(PASSWORD_ENV).is_err() {
            assert_eq!(config.password, "");
        }
    }
}
