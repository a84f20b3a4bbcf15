//! Service Fabric 命名服务提供者

use async_trait::async_trait;

use crate::discovery::config::{ProviderKind, RegistryKind, ServiceProviderConfiguration};
use crate::discovery::endpoint::Endpoint;
use crate::discovery::provider::DiscoveryProvider;
use crate::error::Result;

/// Service Fabric 提供者
///
/// 平台的反向代理负责把请求转发给具体副本，
/// 所以只返回一个指向命名服务 host:port 的端点
#[derive(Debug, Clone)]
pub struct ServiceFabricProvider {
    service_name: String,
    config: ServiceProviderConfiguration,
}

impl ServiceFabricProvider {
    /// 创建 Service Fabric 提供者
    pub fn new(config: ServiceProviderConfiguration, service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            config,
        }
    }

    /// 服务名
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

#[async_trait]
impl DiscoveryProvider for ServiceFabricProvider {
    async fn fetch(&self) -> Result<Vec<Endpoint>> {
        let mut endpoint = Endpoint::new(
            self.service_name.clone(),
            self.config.host.clone(),
            self.config.port,
        );
        if let Some(namespace) = &self.config.namespace {
            endpoint = endpoint.with_metadata("namespace", namespace.clone());
        }
        Ok(vec![endpoint])
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Registry(RegistryKind::ServiceFabric)
    }
}
