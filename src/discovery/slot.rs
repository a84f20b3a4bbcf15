//! 扩展槽
//!
//! 运维方可以在启动时安装一个覆盖函数，完全接管提供者的选择。
//! 槽只能写一次，之后只读，读操作无锁。

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::Span;

use crate::discovery::client::RegistryClient;
use crate::discovery::config::ServiceProviderConfiguration;
use crate::discovery::provider::DiscoveryProvider;
use crate::error::{DiscoveryError, Result};

/// 覆盖函数：`(上下文, 配置, 服务名) -> 提供者`
pub type ProviderOverride = Arc<
    dyn Fn(&SlotContext, &ServiceProviderConfiguration, &str) -> Arc<dyn DiscoveryProvider>
        + Send
        + Sync,
>;

/// 传给覆盖函数（以及 kind 构造函数）的上下文
///
/// 带上解析器自己的日志 span 和注册中心客户端，覆盖函数可以复用它们构造提供者
#[derive(Clone)]
pub struct SlotContext {
    span: Span,
    registry_client: Arc<dyn RegistryClient>,
}

impl SlotContext {
    /// 创建上下文
    pub fn new(span: Span, registry_client: Arc<dyn RegistryClient>) -> Self {
        Self {
            span,
            registry_client,
        }
    }

    /// 日志 span
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// 注册中心客户端
    pub fn registry_client(&self) -> Arc<dyn RegistryClient> {
        self.registry_client.clone()
    }
}

impl fmt::Debug for SlotContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotContext")
            .field("span", &self.span)
            .finish_non_exhaustive()
    }
}

/// 扩展槽（至多一个覆盖函数）
#[derive(Default)]
pub struct OverrideSlot {
    inner: OnceLock<ProviderOverride>,
}

impl OverrideSlot {
    /// 空槽：使用内置分派
    pub fn empty() -> Self {
        Self::default()
    }

    /// 创建已安装覆盖函数的槽
    pub fn with_override<F>(provider_override: F) -> Self
    where
        F: Fn(&SlotContext, &ServiceProviderConfiguration, &str) -> Arc<dyn DiscoveryProvider>
            + Send
            + Sync
            + 'static,
    {
        let slot = Self::empty();
        // 新建的槽一定是空的
        let _ = slot.inner.set(Arc::new(provider_override));
        slot
    }

    /// 安装覆盖函数，只允许一次
    pub fn install<F>(&self, provider_override: F) -> Result<()>
    where
        F: Fn(&SlotContext, &ServiceProviderConfiguration, &str) -> Arc<dyn DiscoveryProvider>
            + Send
            + Sync
            + 'static,
    {
        self.inner
            .set(Arc::new(provider_override))
            .map_err(|_| DiscoveryError::override_already_installed())?;
        tracing::info!("🔌 Discovery provider override installed");
        Ok(())
    }

    /// 当前的覆盖函数
    pub fn get(&self) -> Option<&ProviderOverride> {
        self.inner.get()
    }

    /// 是否已安装
    pub fn is_installed(&self) -> bool {
        self.inner.get().is_some()
    }
}

impl fmt::Debug for OverrideSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}
