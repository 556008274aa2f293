use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cashramp::{CashrampError, Result, WireNames};

pub const SECRET_KEY_VAR: &str = "CASHRAMP_SECRET_KEY";
pub const ENVIRONMENT_VAR: &str = "CASHRAMP_ENV";

const LIVE_ENDPOINT: &str = "https://api.cashramp.com/graphql";
const TEST_ENDPOINT: &str = "https://api.test.cashramp.com/graphql";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Live,
    Test,
}

impl Environment {
    pub fn endpoint(self) -> &'static str {
        match self {
            Environment::Live => LIVE_ENDPOINT,
            Environment::Test => TEST_ENDPOINT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = CashrampError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "live" => Ok(Environment::Live),
            "test" => Ok(Environment::Test),
            _ => Err(CashrampError::Configuration(
                "Invalid environment. Can either be 'test' or 'live'.".to_string(),
            )),
        }
    }
}

/// Everything a [`CashrampClient`](crate::CashrampClient) needs, validated up front.
#[derive(Clone)]
pub struct ClientConfig {
    environment: Environment,
    secret_key: String,
    endpoint: String,
    timeout: Option<Duration>,
    wire_names: WireNames,
}

impl ClientConfig {
    /// Builds a config, falling back to `CASHRAMP_SECRET_KEY` when no key is given.
    pub fn new(environment: Environment, secret_key: Option<String>) -> Result<Self> {
        Self::with_lookup(environment, secret_key, |name| std::env::var(name).ok())
    }

    /// Like [`ClientConfig::new`], parsing the environment name first.
    pub fn from_env_name(environment: &str, secret_key: Option<String>) -> Result<Self> {
        Self::new(environment.parse()?, secret_key)
    }

    /// Reads `CASHRAMP_ENV` (default `live`) and `CASHRAMP_SECRET_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = match lookup(ENVIRONMENT_VAR) {
            Some(name) => name.parse()?,
            None => Environment::default(),
        };
        Self::with_lookup(environment, None, lookup)
    }

    fn with_lookup(
        environment: Environment,
        secret_key: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let secret_key = resolve_secret_key(secret_key, lookup)?;
        Ok(Self {
            environment,
            secret_key,
            endpoint: environment.endpoint().to_string(),
            timeout: None,
            wire_names: WireNames::default(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Points the client at another URL, e.g. a proxy or a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_wire_names(mut self, wire_names: WireNames) -> Self {
        self.wire_names = wire_names;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn wire_names(&self) -> WireNames {
        self.wire_names
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("secret_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("wire_names", &self.wire_names)
            .finish()
    }
}

fn resolve_secret_key(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| lookup(SECRET_KEY_VAR))
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            CashrampError::Configuration("Please provide your API secret key.".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_endpoint_per_environment() {
        for (environment, endpoint) in [
            (Environment::Live, "https://api.cashramp.com/graphql"),
            (Environment::Test, "https://api.test.cashramp.com/graphql"),
        ] {
            let config =
                ClientConfig::with_lookup(environment, Some("sk_key".to_string()), no_env)
                    .unwrap();
            assert_eq!(config.environment(), environment);
            assert_eq!(config.endpoint(), endpoint);
            assert_eq!(config.secret_key(), "sk_key");
        }
    }

    #[test]
    fn test_default_environment_is_live() {
        assert_eq!(Environment::default(), Environment::Live);
    }

    #[test]
    fn test_invalid_environment_fails_regardless_of_key() {
        for key in [Some("test_key".to_string()), None] {
            let err = ClientConfig::from_env_name("invalid", key).unwrap_err();
            assert!(matches!(err, CashrampError::Configuration(_)));
            assert_eq!(
                err.to_string(),
                "Configuration error: Invalid environment. Can either be 'test' or 'live'."
            );
        }
    }

    #[test]
    fn test_environment_names_are_exact() {
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("live".parse::<Environment>().unwrap(), Environment::Live);
        for name in ["TEST", "Live", " live", ""] {
            let err = name.parse::<Environment>().unwrap_err();
            assert!(matches!(err, CashrampError::Configuration(_)));
        }
    }

    fn env_with(environment: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| match name {
            SECRET_KEY_VAR => Some("sk_from_env".to_string()),
            ENVIRONMENT_VAR => environment.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn test_from_env_defaults_to_live() {
        let config = ClientConfig::from_lookup(env_with(None)).unwrap();
        assert_eq!(config.environment(), Environment::Live);
        assert_eq!(config.endpoint(), "https://api.cashramp.com/graphql");
        assert_eq!(config.secret_key(), "sk_from_env");
    }

    #[test]
    fn test_from_env_reads_environment_name() {
        let config = ClientConfig::from_lookup(env_with(Some("test"))).unwrap();
        assert_eq!(config.environment(), Environment::Test);
        assert_eq!(config.endpoint(), "https://api.test.cashramp.com/graphql");
    }

    #[test]
    fn test_from_env_rejects_unknown_environment() {
        let err = ClientConfig::from_lookup(env_with(Some("bogus"))).unwrap_err();
        assert!(matches!(err, CashrampError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment. Can either be 'test' or 'live'."
        );
    }

    #[test]
    fn test_missing_secret_key_fails() {
        for key in [None, Some(String::new())] {
            let err = ClientConfig::with_lookup(Environment::Test, key, no_env).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Configuration error: Please provide your API secret key."
            );
        }
    }

    #[test]
    fn test_secret_key_falls_back_to_environment_variable() {
        let lookup = |name: &str| (name == SECRET_KEY_VAR).then(|| "sk_from_env".to_string());
        let config = ClientConfig::with_lookup(Environment::Test, None, lookup).unwrap();
        assert_eq!(config.secret_key(), "sk_from_env");

        let config =
            ClientConfig::with_lookup(Environment::Test, Some("explicit".to_string()), lookup)
                .unwrap();
        assert_eq!(config.secret_key(), "explicit");
    }

    #[test]
    fn test_empty_environment_variable_is_missing() {
        let err = ClientConfig::with_lookup(Environment::Live, None, |_| Some(String::new()))
            .unwrap_err();
        assert!(matches!(err, CashrampError::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_secret_key() {
        let config =
            ClientConfig::with_lookup(Environment::Test, Some("sk_secret".to_string()), no_env)
                .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::with_lookup(Environment::Test, Some("k".to_string()), no_env)
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_endpoint("http://127.0.0.1:9000/graphql")
            .with_wire_names(WireNames::Corrected);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/graphql");
        assert_eq!(config.wire_names(), WireNames::Corrected);
        assert_eq!(config.environment(), Environment::Test);
    }
}
