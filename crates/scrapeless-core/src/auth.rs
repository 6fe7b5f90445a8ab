//! Credential resolution for the Scrapeless API
//!
//! A token comes from an explicit value (constructor argument or config file)
//! or, failing that, from the process environment. An empty token is never
//! accepted: resolution fails with a configuration error before any client is
//! built, so no request can leave the process unauthenticated.

use crate::{Error, Result};
use std::env;
use std::fmt;

/// Environment variable consulted when no explicit token is given.
pub const SCRAPELESS_API_KEY_ENV: &str = "SCRAPELESS_API_KEY";

pub const ERROR_SCRAPELESS_TOKEN_ENV_VAR_NOT_SET: &str = "SCRAPELESS_API_KEY environment variable is not set. \
Please set it to your Scrapeless API token with `export SCRAPELESS_API_KEY=\"YOUR_SCRAPELESS_API_KEY\"`, \
add `api_key` to scrapeless.toml, or pass the token explicitly when constructing the tool.";

/// A non-empty Scrapeless API token
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap an explicit token, rejecting empty or whitespace-only input.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config(
                "API token is required to create a Scrapeless client.".into(),
            ));
        }
        Ok(Self(token))
    }

    /// Resolve a token from an explicit value, falling back to `env_var`.
    ///
    /// # Example
    /// ```no_run
    /// use scrapeless_core::{ApiToken, SCRAPELESS_API_KEY_ENV};
    ///
    /// let token = ApiToken::resolve(None, SCRAPELESS_API_KEY_ENV)?;
    /// # Ok::<(), scrapeless_core::Error>(())
    /// ```
    pub fn resolve(explicit: Option<&str>, env_var: &str) -> Result<Self> {
        if let Some(token) = explicit.filter(|t| !t.trim().is_empty()) {
            return Self::new(token);
        }

        match env::var(env_var) {
            Ok(token) if !token.trim().is_empty() => {
                tracing::debug!(env_var, "Resolved Scrapeless API token from environment");
                Self::new(token)
            }
            _ => Err(Error::Config(Self::missing_message(env_var))),
        }
    }

    /// Resolve using the default `SCRAPELESS_API_KEY` variable.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None, SCRAPELESS_API_KEY_ENV)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn missing_message(env_var: &str) -> String {
        if env_var == SCRAPELESS_API_KEY_ENV {
            ERROR_SCRAPELESS_TOKEN_ENV_VAR_NOT_SET.to_string()
        } else {
            format!(
                "{} environment variable is not set. Please set it to your Scrapeless API token.",
                env_var
            )
        }
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token_wins() {
        let token = ApiToken::resolve(Some("explicit"), "SCRAPELESS_TEST_UNSET_1").unwrap();
        assert_eq!(token.as_str(), "explicit");
    }

    #[test]
    fn test_env_fallback() {
        unsafe {
            env::set_var("SCRAPELESS_TEST_TOKEN_2", "from-env");
        }

        let token = ApiToken::resolve(None, "SCRAPELESS_TEST_TOKEN_2").unwrap();
        assert_eq!(token.as_str(), "from-env");

        // An empty explicit value falls through to the environment
        let token = ApiToken::resolve(Some("  "), "SCRAPELESS_TEST_TOKEN_2").unwrap();
        assert_eq!(token.as_str(), "from-env");

        unsafe {
            env::remove_var("SCRAPELESS_TEST_TOKEN_2");
        }
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let err = ApiToken::resolve(None, "SCRAPELESS_TEST_UNSET_3").unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("SCRAPELESS_TEST_UNSET_3")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_env_token_rejected() {
        unsafe {
            env::set_var("SCRAPELESS_TEST_TOKEN_4", "");
        }

        assert!(matches!(
            ApiToken::resolve(None, "SCRAPELESS_TEST_TOKEN_4"),
            Err(Error::Config(_))
        ));

        unsafe {
            env::remove_var("SCRAPELESS_TEST_TOKEN_4");
        }
    }

    #[test]
    fn test_default_message_names_variable() {
        assert!(ERROR_SCRAPELESS_TOKEN_ENV_VAR_NOT_SET.starts_with(SCRAPELESS_API_KEY_ENV));
        assert!(ApiToken::new("").is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = ApiToken::new("secret-value").unwrap();
        let printed = format!("{token:?}");
        assert!(!printed.contains("secret-value"));
    }
}
