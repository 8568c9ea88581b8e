use moneymq_stripe_types::ApiVersion;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default host for API requests
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Environment variable overriding [`ClientConfig::api_base`]
pub const API_BASE_ENV: &str = "STRIPE_API_BASE";
/// Environment variable overriding [`ClientConfig::api_version`]
pub const API_VERSION_ENV: &str = "STRIPE_API_VERSION";
/// Environment variable setting [`ClientConfig::stripe_account`]
pub const ACCOUNT_ENV: &str = "STRIPE_ACCOUNT";

/// Configuration shared by every request a [`Client`](crate::Client) makes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host requests are sent to, without a trailing slash
    pub api_base: String,

    /// Version sent as `Stripe-Version` unless a request overrides it
    pub api_version: ApiVersion,

    /// Connected account to act on behalf of, sent as `Stripe-Account`
    pub stripe_account: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: ApiVersion::default(),
            stripe_account: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `STRIPE_API_BASE`, `STRIPE_API_VERSION` and
    /// `STRIPE_ACCOUNT`, reading a `.env` file if one is present.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| match dotenvy::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
            Err(e) => Err(Error::Config(format!("{}: {}", name, e))),
        })
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup(API_BASE_ENV)? {
            config = config.with_api_base(&api_base)?;
        }

        if let Some(version) = lookup(API_VERSION_ENV)? {
            config.api_version = version.parse().map_err(Error::Config)?;
        }

        if let Some(account) = lookup(ACCOUNT_ENV)?.filter(|a| !a.is_empty()) {
            config.stripe_account = Some(account);
        }

        Ok(config)
    }

    /// Set the API host; it must be an absolute `http` or `https` URL
    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        let normalized = api_base.trim_end_matches('/');
        let url = Url::parse(normalized)
            .map_err(|e| Error::Config(format!("invalid API base '{}': {}", api_base, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "invalid API base '{}': unsupported scheme '{}'",
                api_base,
                url.scheme()
            )));
        }
        self.api_base = normalized.to_string();
        Ok(self)
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Act on behalf of a connected account by default
    pub fn with_stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Absolute URL for an API path such as `/v1/accounts`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.api_base.trim_end_matches('/'), path))
            .map_err(|e| Error::Config(format!("invalid API base '{}': {}", self.api_base, e)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<Option<String>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| Ok(vars.get(name).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "https://api.stripe.com");
        assert_eq!(config.api_version, ApiVersion::V2019_11_05);
        assert_eq!(config.stripe_account, None);
        assert_eq!(
            config.endpoint("/v1/balance").unwrap().as_str(),
            "https://api.stripe.com/v1/balance"
        );
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_BASE_ENV, "http://localhost:12111/"),
            (API_VERSION_ENV, "2019-10-17"),
            (ACCOUNT_ENV, "acct_1"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:12111");
        assert_eq!(config.api_version, ApiVersion::V2019_10_17);
        assert_eq!(config.stripe_account.as_deref(), Some("acct_1"));
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ACCOUNT_ENV, "")])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_malformed_values_are_config_errors() {
        let err = ClientConfig::from_lookup(lookup_from(&[(API_VERSION_ENV, "2020-01-01")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = ClientConfig::from_lookup(lookup_from(&[(API_BASE_ENV, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        assert!(ClientConfig::default().with_api_base("ftp://example.com").is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_value(serde_json::json!({ "stripe_account": "acct_2" })).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.stripe_account.as_deref(), Some("acct_2"));
    }
}
