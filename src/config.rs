use serde::{Deserialize, Serialize};

use crate::discovery::{DownstreamRoute, ServiceProviderConfiguration};
use crate::error::{DiscoveryError, Result};

/// 覆盖 `discovery.kind` 的环境变量
pub const DISCOVERY_KIND_ENV: &str = "GATEWAY_DISCOVERY_KIND";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub discovery: ServiceProviderConfiguration,
    #[serde(default)]
    pub routes: Vec<DownstreamRoute>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // RUST_LOG 优先
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GatewayConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: GatewayConfig = toml::from_str(content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        if let Ok(kind) = std::env::var(DISCOVERY_KIND_ENV) {
            tracing::info!(kind = %kind, "Discovery kind overridden by {}", DISCOVERY_KIND_ENV);
            self.discovery.kind = kind;
        }
    }

    /// 校验注册中心超时和所有路由的静态地址
    pub fn validate(&self) -> Result<()> {
        if self.discovery.request_timeout_ms == 0 {
            return Err(DiscoveryError::configuration(
                "discovery.request_timeout_ms must be greater than 0",
            ));
        }
        self.routes.iter().try_for_each(DownstreamRoute::validate)
    }
}
