//! 服务发现提供者抽象和实现

pub mod eureka;
pub mod service_fabric;
pub mod static_list;

use async_trait::async_trait;

use crate::discovery::config::ProviderKind;
use crate::discovery::endpoint::Endpoint;
use crate::error::Result;

pub use eureka::EurekaProvider;
pub use service_fabric::ServiceFabricProvider;
pub use static_list::StaticProvider;

/// 服务发现提供者 trait
///
/// 所有策略（静态列表、注册中心、自定义覆盖）都需要实现这个 trait。
/// 构造必须是纯内存操作，只有 `fetch()` 可以做 I/O。
#[async_trait]
pub trait DiscoveryProvider: Send + Sync {
    /// 获取当前的端点列表
    ///
    /// 超时/取消由调用方（或提供者内部的客户端）负责，
    /// 调用方可以直接用 `tokio::time::timeout` 包装
    async fn fetch(&self) -> Result<Vec<Endpoint>>;

    /// 提供者类型
    fn kind(&self) -> ProviderKind;
}
