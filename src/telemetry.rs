//! 日志初始化

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;
use crate::error::{ErrorCode, InfraResult, InfraResultExt, Result};

/// 安装全局 tracing subscriber
///
/// `RUST_LOG` 优先于配置里的 level；重复调用时保留已安装的 subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)
        .into_discovery(ErrorCode::ConfigurationError, "invalid log filter")?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::info!(level = %config.level, json = config.json, "📝 Tracing initialized");
    }
    Ok(())
}

fn build_filter(config: &LoggingConfig) -> InfraResult<EnvFilter> {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
    Ok(EnvFilter::try_new(directives)?)
}
