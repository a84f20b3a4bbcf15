//! 下游服务发现模块
//!
//! 按路由配置选择并构造服务发现提供者：静态列表、注册中心（Eureka、Service Fabric）
//! 或运维方安装的覆盖函数。

pub mod client;
pub mod config;
pub mod endpoint;
pub mod provider;
pub mod resolver;
pub mod slot;

pub use client::{NoopRegistryClient, RegistryClient, RegistryInstance, registry_client_for};
#[cfg(feature = "eureka-http")]
pub use client::eureka::EurekaHttpClient;
pub use config::{
    DownstreamRoute, EUREKA_KIND, ProviderKind, RegistryKind, SERVICE_FABRIC_KIND,
    ServiceProviderConfiguration,
};
pub use endpoint::{DownstreamHostAndPort, Endpoint};
pub use provider::{DiscoveryProvider, EurekaProvider, ServiceFabricProvider, StaticProvider};
pub use resolver::{ProviderConstructor, ProviderResolver, ProviderResolverBuilder};
pub use slot::{OverrideSlot, ProviderOverride, SlotContext};
