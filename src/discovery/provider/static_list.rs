//! 静态列表提供者

use async_trait::async_trait;

use crate::discovery::config::ProviderKind;
use crate::discovery::endpoint::{DownstreamHostAndPort, Endpoint};
use crate::discovery::provider::DiscoveryProvider;
use crate::error::Result;

/// 静态列表提供者
///
/// 服务发现关闭、配置缺失或 kind 无法识别时的兜底策略
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    service_name: String,
    addresses: Vec<DownstreamHostAndPort>,
}

impl StaticProvider {
    /// 使用路由上配置的静态地址创建（保持顺序，可以为空）
    pub fn new(service_name: impl Into<String>, addresses: Vec<DownstreamHostAndPort>) -> Self {
        Self {
            service_name: service_name.into(),
            addresses,
        }
    }

    /// 种子地址
    pub fn addresses(&self) -> &[DownstreamHostAndPort] {
        &self.addresses
    }
}

#[async_trait]
impl DiscoveryProvider for StaticProvider {
    async fn fetch(&self) -> Result<Vec<Endpoint>> {
        Ok(self
            .addresses
            .iter()
            .map(|address| Endpoint::from_downstream(self.service_name.clone(), address))
            .collect())
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Static
    }
}
