//! 网关配置测试

use std::sync::Arc;

use flare_gateway_discovery::discovery::{
    DownstreamHostAndPort, OverrideSlot, ProviderKind, ProviderResolver, RegistryKind,
    registry_client_for,
};
use flare_gateway_discovery::{ErrorCode, GatewayConfig, LoggingConfig, init_tracing};
use tracing::Span;

const GATEWAY_TOML: &str = r#"
[discovery]
kind = "ServiceFabric"
host = "localhost"
port = 19081

[logging]
level = "debug"

[[routes]]
service_name = "product"
use_service_discovery = true

[[routes]]
service_name = "legacy"
downstream_addresses = [
    { host = "asdf.com", port = 80 },
    { host = "abc.com", port = 80 },
]
"#;

/// 测试：解析 TOML 配置
#[test]
fn test_parse_gateway_config() {
    let config = GatewayConfig::from_toml_str(GATEWAY_TOML).unwrap();

    assert_eq!(config.discovery.kind, "ServiceFabric");
    assert_eq!(config.discovery.port, 19081);
    assert_eq!(config.discovery.scheme, "http");
    assert_eq!(config.discovery.request_timeout_ms, 5_000);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json);
    assert_eq!(config.routes.len(), 2);
    assert!(config.routes[0].use_service_discovery);
    assert!(config.routes[0].downstream_addresses.is_empty());
    assert_eq!(
        config.routes[1].downstream_addresses,
        vec![
            DownstreamHostAndPort::new("asdf.com", 80),
            DownstreamHostAndPort::new("abc.com", 80),
        ]
    );
}

/// 测试：空配置使用默认值（静态提供者）
#[test]
fn test_empty_config_defaults() {
    let config = GatewayConfig::from_toml_str("").unwrap();

    assert_eq!(config.discovery.kind, "");
    assert!(config.routes.is_empty());
    assert_eq!(config.logging.level, "info");
}

/// 测试：空 host 被拒绝
#[test]
fn test_empty_host_is_rejected() {
    let toml = r#"
[[routes]]
service_name = "broken"
downstream_addresses = [{ host = "", port = 80 }]
"#;

    let err = GatewayConfig::from_toml_str(toml).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InvalidEndpoint));

    assert!(DownstreamHostAndPort::try_new("  ", 80).is_err());
    assert!(DownstreamHostAndPort::try_new("abc.com", 0).is_ok());
}

/// 测试：注册中心超时为 0 被拒绝
#[test]
fn test_zero_request_timeout_is_rejected() {
    let toml = r#"
[discovery]
kind = "Eureka"
request_timeout_ms = 0
"#;

    let err = GatewayConfig::from_toml_str(toml).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::ConfigurationError));
}

/// 测试：端口超出范围时解析失败
#[test]
fn test_out_of_range_port_is_rejected() {
    let toml = r#"
[[routes]]
service_name = "broken"
downstream_addresses = [{ host = "abc.com", port = 65536 }]
"#;

    let err = GatewayConfig::from_toml_str(toml).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::ConfigurationError));
}

/// 测试：从文件加载
#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("flare-gateway-{}.toml", std::process::id()));
    std::fs::write(&path, GATEWAY_TOML).unwrap();

    let config = GatewayConfig::load_from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.routes.len(), 2);

    std::fs::remove_file(&path).unwrap();

    let err = GatewayConfig::load_from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, flare_gateway_discovery::DiscoveryError::Io(_)));
}

/// 测试：配置 → 解析器 → fetch 全流程
#[tokio::test]
async fn test_config_driven_resolution() {
    init_tracing(&LoggingConfig::default()).unwrap();
    // 重复初始化不会报错
    init_tracing(&LoggingConfig::default()).unwrap();

    let config = GatewayConfig::from_toml_str(GATEWAY_TOML).unwrap();
    let resolver = ProviderResolver::new(
        Span::current(),
        registry_client_for(&config.discovery),
        Arc::new(OverrideSlot::empty()),
    );

    let product = resolver.resolve(&config.discovery, &config.routes[0]);
    assert_eq!(product.kind(), ProviderKind::Registry(RegistryKind::ServiceFabric));
    let endpoints = product.fetch().await.unwrap();
    assert_eq!(endpoints[0].host, "localhost");
    assert_eq!(endpoints[0].port, 19081);

    let mut static_discovery = config.discovery.clone();
    static_discovery.kind = String::new();
    let legacy = resolver.resolve(&static_discovery, &config.routes[1]);
    let endpoints = legacy.fetch().await.unwrap();
    let hosts: Vec<&str> = endpoints.iter().map(|e| e.host.as_str()).collect();
    assert_eq!(hosts, vec!["asdf.com", "abc.com"]);
}
