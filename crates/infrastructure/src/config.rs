//! Client configuration.
//!
//! Values are layered, later sources winning:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. `SLACKWEB_*` environment variables (e.g. `SLACKWEB_TOKEN`)

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Default Web API base URL.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Prefix of the environment variables read by [`ClientConfig::load`].
pub const ENV_PREFIX: &str = "SLACKWEB";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the Web API transport.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL that method names are appended to.
    pub base_url: String,
    /// Bearer token sent with every call, if any.
    #[serde(default)]
    pub token: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent header value.
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("slackweb/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Loads configuration from defaults, an optional file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value is
    /// invalid.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(file, None)
    }

    /// Like [`ClientConfig::load`], reading environment variables from `env`
    /// instead of the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value is
    /// invalid.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_ms", defaults.timeout_ms)?
            .set_default("user_agent", defaults.user_agent)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env);
        let loaded: Self = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        loaded.validate()
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".to_string()));
        }
        if url::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::Invalid(format!(
                "base_url is not a valid URL: {}",
                self.base_url
            )));
        }
        if self.token.as_deref().is_some_and(str::is_empty) {
            self.token = None;
        }
        Ok(self)
    }
}
