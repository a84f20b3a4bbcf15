//! Eureka 注册中心提供者

use std::sync::Arc;

use async_trait::async_trait;

use crate::discovery::client::RegistryClient;
use crate::discovery::config::{ProviderKind, RegistryKind, ServiceProviderConfiguration};
use crate::discovery::endpoint::Endpoint;
use crate::discovery::provider::DiscoveryProvider;
use crate::error::Result;

/// Eureka 提供者
///
/// 每次 `fetch()` 都通过注册中心客户端查询一次，不做缓存
pub struct EurekaProvider {
    service_name: String,
    client: Arc<dyn RegistryClient>,
    config: ServiceProviderConfiguration,
}

impl EurekaProvider {
    /// 创建 Eureka 提供者（不做网络调用）
    pub fn new(
        client: Arc<dyn RegistryClient>,
        config: ServiceProviderConfiguration,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            client,
            config,
        }
    }

    /// 服务名
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// 构造时的配置
    pub fn config(&self) -> &ServiceProviderConfiguration {
        &self.config
    }
}

#[async_trait]
impl DiscoveryProvider for EurekaProvider {
    async fn fetch(&self) -> Result<Vec<Endpoint>> {
        let instances = self.client.instances(&self.service_name).await?;

        Ok(instances
            .into_iter()
            .map(|instance| {
                let mut endpoint =
                    Endpoint::new(self.service_name.clone(), instance.host, instance.port)
                        .with_id(instance.instance_id);
                if let Some(version) = instance.metadata.get("version") {
                    endpoint = endpoint.with_version(version.clone());
                }
                endpoint.metadata = instance.metadata;
                endpoint
            })
            .collect())
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Registry(RegistryKind::Eureka)
    }
}
