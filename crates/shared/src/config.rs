//! Application configuration management.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::MacAlgorithm;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Payment gateway configuration.
    pub gateway: GatewayConfig,
}

/// Payment gateway configuration.
#[derive(Clone, Deserialize)]
pub struct GatewayConfig {
    /// Scheme and host every operation path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Merchant id assigned by the gateway.
    pub merchant_id: String,
    /// Merchant secret used to compute request MACs.
    pub merchant_key: String,
    /// Digest used for the `mac` field.
    #[serde(default)]
    pub mac_algorithm: MacAlgorithm,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// Production gateway host.
pub const DEFAULT_BASE_URL: &str = "https://webpaywg.bestpay.com.cn";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl GatewayConfig {
    /// Creates a gateway configuration with default endpoint, digest and timeouts.
    #[must_use]
    pub fn new(merchant_id: impl Into<String>, merchant_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
            mac_algorithm: MacAlgorithm::default(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }

    /// Whole-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Checks that the values needed to sign and send requests are present.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` naming the first missing value.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Configuration("gateway.base_url is empty".into()));
        }
        if self.merchant_id.trim().is_empty() {
            return Err(AppError::Configuration(
                "gateway.merchant_id is empty".into(),
            ));
        }
        if self.merchant_key.is_empty() {
            return Err(AppError::Configuration(
                "gateway.merchant_key is empty".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "gateway.timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

// The merchant key never appears in logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &"<redacted>")
            .field("mac_algorithm", &self.mac_algorithm)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `BESTPAY__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is incomplete.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BESTPAY").separator("__"))
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.gateway.validate()?;
        Ok(app)
    }
}
