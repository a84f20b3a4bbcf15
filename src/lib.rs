//! Flare Gateway Discovery
//!
//! 网关下游服务发现提供者解析引擎：按路由配置选择静态列表、注册中心
//! （Eureka、Service Fabric）或运维方安装的自定义提供者。

pub mod config;
pub mod discovery;
pub mod error;
pub mod telemetry;

// Re-exports
pub use config::{GatewayConfig, LoggingConfig};
pub use discovery::{
    DiscoveryProvider, DownstreamHostAndPort, DownstreamRoute, Endpoint, EurekaProvider,
    NoopRegistryClient, OverrideSlot, ProviderKind, ProviderResolver, RegistryClient,
    RegistryInstance, RegistryKind, ServiceFabricProvider, ServiceProviderConfiguration,
    SlotContext, StaticProvider,
};
pub use error::{DiscoveryError, ErrorBuilder, ErrorCategory, ErrorCode, Result};
pub use telemetry::init_tracing;
