//! 服务发现提供者解析器
//!
//! 按固定优先级为每条路由选择并构造提供者：
//! 1. 扩展槽里有覆盖函数 → 直接返回其结果
//! 2. `config.kind` 精确（大小写敏感）命中 kind 表 → 对应的注册中心提供者
//! 3. 其余情况（包括空 kind）→ 静态列表提供者

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{Span, debug};

use crate::discovery::client::RegistryClient;
use crate::discovery::config::{
    DownstreamRoute, EUREKA_KIND, SERVICE_FABRIC_KIND, ServiceProviderConfiguration,
};
use crate::discovery::provider::{
    DiscoveryProvider, EurekaProvider, ServiceFabricProvider, StaticProvider,
};
use crate::discovery::slot::{OverrideSlot, SlotContext};

/// kind 构造函数：`(上下文, 配置, 服务名) -> 提供者`，不能做 I/O
pub type ProviderConstructor = Arc<
    dyn Fn(&SlotContext, &ServiceProviderConfiguration, &str) -> Arc<dyn DiscoveryProvider>
        + Send
        + Sync,
>;

fn eureka_provider(
    context: &SlotContext,
    config: &ServiceProviderConfiguration,
    service_name: &str,
) -> Arc<dyn DiscoveryProvider> {
    Arc::new(EurekaProvider::new(
        context.registry_client(),
        config.clone(),
        service_name,
    ))
}

fn service_fabric_provider(
    _context: &SlotContext,
    config: &ServiceProviderConfiguration,
    service_name: &str,
) -> Arc<dyn DiscoveryProvider> {
    Arc::new(ServiceFabricProvider::new(config.clone(), service_name))
}

/// 服务发现提供者解析器
///
/// 解析是同步、无锁、无副作用的，可以通过 `Arc` 在多个任务间共享
pub struct ProviderResolver {
    context: SlotContext,
    slot: Arc<OverrideSlot>,
    constructors: HashMap<String, ProviderConstructor>,
}

impl ProviderResolver {
    /// 使用内置 kind（Eureka、ServiceFabric）创建解析器
    ///
    /// # 参数
    /// * `span` - 日志 span，解析器的事件都挂在它下面
    /// * `registry_client` - 注册中心客户端，传给注册中心型提供者
    /// * `slot` - 扩展槽
    pub fn new(
        span: Span,
        registry_client: Arc<dyn RegistryClient>,
        slot: Arc<OverrideSlot>,
    ) -> Self {
        Self::builder(span, registry_client, slot).build()
    }

    /// 创建构建器，可在启动阶段注册额外的 kind
    pub fn builder(
        span: Span,
        registry_client: Arc<dyn RegistryClient>,
        slot: Arc<OverrideSlot>,
    ) -> ProviderResolverBuilder {
        ProviderResolverBuilder::new(span, registry_client, slot)
    }

    /// 为路由解析提供者，永远不会失败
    pub fn resolve(
        &self,
        config: &ServiceProviderConfiguration,
        route: &DownstreamRoute,
    ) -> Arc<dyn DiscoveryProvider> {
        let span = self.context.span();
        let service_name = route.service_name.as_str();

        // 每次解析只读一次槽
        if let Some(provider_override) = self.slot.get() {
            let provider = provider_override(&self.context, config, service_name);
            debug!(
                parent: span,
                service = %service_name,
                provider = %provider.kind(),
                "Discovery provider resolved by override"
            );
            return provider;
        }

        if let Some(constructor) = self.constructors.get(config.kind.as_str()) {
            let provider = constructor(&self.context, config, service_name);
            debug!(
                parent: span,
                service = %service_name,
                kind = %config.kind,
                provider = %provider.kind(),
                "Discovery provider resolved by kind"
            );
            return provider;
        }

        if !config.kind.is_empty() {
            debug!(
                parent: span,
                service = %service_name,
                kind = %config.kind,
                "Unrecognized discovery kind, falling back to static provider"
            );
        }

        Arc::new(StaticProvider::new(
            route.service_name.clone(),
            route.downstream_addresses.clone(),
        ))
    }

    /// kind 表里的全部标识（排序后）
    pub fn recognized_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// 扩展槽
    pub fn slot(&self) -> &Arc<OverrideSlot> {
        &self.slot
    }
}

impl fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderResolver")
            .field("kinds", &self.recognized_kinds())
            .field("slot", &self.slot)
            .finish()
    }
}

/// 解析器构建器
///
/// kind 表只能在这里修改，`build()` 之后冻结
pub struct ProviderResolverBuilder {
    span: Span,
    registry_client: Arc<dyn RegistryClient>,
    slot: Arc<OverrideSlot>,
    constructors: HashMap<String, ProviderConstructor>,
}

impl ProviderResolverBuilder {
    fn new(span: Span, registry_client: Arc<dyn RegistryClient>, slot: Arc<OverrideSlot>) -> Self {
        let mut constructors: HashMap<String, ProviderConstructor> = HashMap::new();
        constructors.insert(EUREKA_KIND.to_string(), Arc::new(eureka_provider));
        constructors.insert(
            SERVICE_FABRIC_KIND.to_string(),
            Arc::new(service_fabric_provider),
        );

        Self {
            span,
            registry_client,
            slot,
            constructors,
        }
    }

    /// 注册一个 kind；与内置 kind 同名时替换内置构造函数
    #[must_use]
    pub fn register_kind<F>(mut self, kind: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&SlotContext, &ServiceProviderConfiguration, &str) -> Arc<dyn DiscoveryProvider>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(kind.into(), Arc::new(constructor));
        self
    }

    /// 构建解析器
    pub fn build(self) -> ProviderResolver {
        let resolver = ProviderResolver {
            context: SlotContext::new(self.span, self.registry_client),
            slot: self.slot,
            constructors: self.constructors,
        };
        debug!(
            parent: resolver.context.span(),
            kinds = ?resolver.recognized_kinds(),
            override_installed = resolver.slot.is_installed(),
            "Discovery provider resolver ready"
        );
        resolver
    }
}
