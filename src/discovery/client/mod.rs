//! 注册中心客户端抽象
//!
//! 注册中心型提供者只依赖这个窄接口，测试时可直接替换为假实现

#[cfg(feature = "eureka-http")]
pub mod eureka;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::discovery::config::ServiceProviderConfiguration;
use crate::error::Result;

/// 注册中心返回的服务实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryInstance {
    /// 实例 ID
    pub instance_id: String,

    /// 服务名
    pub service_id: String,

    /// 主机
    pub host: String,

    /// 端口
    pub port: u16,

    /// 元数据
    pub metadata: HashMap<String, String>,
}

impl RegistryInstance {
    /// 创建新的实例
    pub fn new(
        instance_id: impl Into<String>,
        service_id: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            service_id: service_id.into(),
            host: host.into(),
            port,
            metadata: HashMap::new(),
        }
    }

    /// 添加元数据
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// 注册中心客户端
///
/// 注意：需要动态分发（dyn），使用 async-trait
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// 查询服务的全部实例
    async fn instances(&self, service_name: &str) -> Result<Vec<RegistryInstance>>;
}

/// 未配置注册中心时使用的空客户端，总是返回空列表
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRegistryClient;

#[async_trait]
impl RegistryClient for NoopRegistryClient {
    async fn instances(&self, service_name: &str) -> Result<Vec<RegistryInstance>> {
        tracing::debug!(
            service = %service_name,
            "No registry client configured, returning no instances"
        );
        Ok(Vec::new())
    }
}

/// 按配置创建注册中心客户端
///
/// Eureka 使用 REST 客户端，其余 kind 不需要查询注册中心，使用空客户端
pub fn registry_client_for(config: &ServiceProviderConfiguration) -> Arc<dyn RegistryClient> {
    #[cfg(feature = "eureka-http")]
    {
        if config.kind == crate::discovery::config::EUREKA_KIND {
            return Arc::new(eureka::EurekaHttpClient::new(config));
        }
    }

    tracing::debug!(kind = %config.kind, "Using no-op registry client");
    Arc::new(NoopRegistryClient)
}
