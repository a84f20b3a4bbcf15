//! 环境变量覆盖测试（单独的测试二进制，避免和其他测试共享环境变量）

use flare_gateway_discovery::GatewayConfig;
use flare_gateway_discovery::config::DISCOVERY_KIND_ENV;

/// 测试：GATEWAY_DISCOVERY_KIND 覆盖配置里的 kind
#[test]
fn test_env_overrides_discovery_kind() {
    // SAFETY: 本测试二进制里只有这一个测试
    unsafe { std::env::set_var(DISCOVERY_KIND_ENV, "Eureka") };

    let config = GatewayConfig::from_toml_str("[discovery]\nkind = \"ServiceFabric\"\n").unwrap();
    assert_eq!(config.discovery.kind, "Eureka");

    unsafe { std::env::remove_var(DISCOVERY_KIND_ENV) };
}
