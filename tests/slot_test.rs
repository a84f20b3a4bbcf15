//! 扩展槽测试

use std::sync::Arc;

use flare_gateway_discovery::discovery::{
    DiscoveryProvider, DownstreamRoute, OverrideSlot, ProviderKind, ProviderResolver,
    ServiceFabricProvider, ServiceProviderConfiguration, SlotContext, StaticProvider,
};
use flare_gateway_discovery::{ErrorCode, NoopRegistryClient};
use tracing::Span;

fn service_fabric_override(
    _context: &SlotContext,
    config: &ServiceProviderConfiguration,
    service_name: &str,
) -> Arc<dyn DiscoveryProvider> {
    Arc::new(ServiceFabricProvider::new(config.clone(), service_name))
}

/// 测试：空槽
#[test]
fn test_empty_slot() {
    let slot = OverrideSlot::empty();
    assert!(!slot.is_installed());
    assert!(slot.get().is_none());
}

/// 测试：槽只能写一次
#[test]
fn test_slot_is_write_once() {
    let slot = OverrideSlot::empty();

    slot.install(service_fabric_override).unwrap();
    assert!(slot.is_installed());

    let err = slot
        .install(|_context, _config, _service_name| {
            Arc::new(StaticProvider::default()) as Arc<dyn DiscoveryProvider>
        })
        .unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::OverrideAlreadyInstalled));
}

/// 测试：with_override 创建的槽不能再次安装
#[test]
fn test_prefilled_slot_rejects_install() {
    let slot = OverrideSlot::with_override(service_fabric_override);
    assert!(slot.install(service_fabric_override).is_err());
}

/// 测试：启动后安装的覆盖函数对已有解析器生效
#[test]
fn test_install_after_resolver_construction() {
    let slot = Arc::new(OverrideSlot::empty());
    let resolver = ProviderResolver::new(Span::none(), Arc::new(NoopRegistryClient), slot.clone());
    let config = ServiceProviderConfiguration::new();
    let route = DownstreamRoute::new().with_service_name("product");

    assert_eq!(resolver.resolve(&config, &route).kind(), ProviderKind::Static);

    slot.install(service_fabric_override).unwrap();

    assert!(matches!(
        resolver.resolve(&config, &route).kind(),
        ProviderKind::Registry(_)
    ));
    assert!(resolver.slot().is_installed());
}

/// 测试：并发安装只有一个成功
#[test]
fn test_concurrent_install_has_single_winner() {
    let slot = Arc::new(OverrideSlot::empty());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let slot = slot.clone();
            std::thread::spawn(move || slot.install(service_fabric_override).is_ok())
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
}

/// 测试：覆盖函数构造的提供者可以直接 fetch
#[test]
fn test_override_provider_fetch() {
    let resolver = ProviderResolver::new(
        Span::none(),
        Arc::new(NoopRegistryClient),
        Arc::new(OverrideSlot::with_override(service_fabric_override)),
    );
    let config = ServiceProviderConfiguration::new().with_host("fabric.local").with_port(19081);
    let route = DownstreamRoute::new().with_service_name("product");

    let endpoints = tokio_test::block_on(resolver.resolve(&config, &route).fetch()).unwrap();

    assert_eq!(endpoints.len(), 1);
    assert_eq!(endpoints[0].host, "fabric.local");
    assert_eq!(endpoints[0].service_name, "product");
}
