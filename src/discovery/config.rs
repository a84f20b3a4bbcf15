//! 服务发现配置

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::discovery::endpoint::DownstreamHostAndPort;
use crate::error::Result;

/// 心跳型注册中心（Eureka）的 kind 标识
pub const EUREKA_KIND: &str = "Eureka";

/// 平台命名服务（Service Fabric）的 kind 标识
pub const SERVICE_FABRIC_KIND: &str = "ServiceFabric";

/// 服务提供者配置（全局，来自网关配置的 discovery 段）
///
/// `kind` 为空表示使用默认的静态提供者
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceProviderConfiguration {
    /// 后端标识：""、"Eureka"、"ServiceFabric" 或自定义注册的 kind（大小写敏感）
    pub kind: String,

    /// 注册中心协议（http/https）
    pub scheme: String,

    /// 注册中心主机
    pub host: String,

    /// 注册中心端口
    pub port: u16,

    /// 命名空间（平台命名服务使用）
    pub namespace: Option<String>,

    /// 访问令牌
    pub token: Option<String>,

    /// 注册中心里存放网关配置的 key
    pub configuration_key: Option<String>,

    /// 轮询间隔（毫秒），由外部刷新调度使用
    pub polling_interval_ms: u64,

    /// 单次注册中心请求超时（毫秒）
    pub request_timeout_ms: u64,
}

impl Default for ServiceProviderConfiguration {
    fn default() -> Self {
        Self {
            kind: String::new(),
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 0,
            namespace: None,
            token: None,
            configuration_key: None,
            polling_interval_ms: 0,
            request_timeout_ms: 5_000,
        }
    }
}

impl ServiceProviderConfiguration {
    /// 创建默认配置（静态提供者）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置后端 kind
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// 设置协议
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// 设置注册中心主机
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// 设置注册中心端口
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// 设置命名空间
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// 设置访问令牌
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 设置配置 key
    pub fn with_configuration_key(mut self, key: impl Into<String>) -> Self {
        self.configuration_key = Some(key.into());
        self
    }

    /// 设置轮询间隔
    pub fn with_polling_interval_ms(mut self, interval: u64) -> Self {
        self.polling_interval_ms = interval;
        self
    }

    /// 设置请求超时
    pub fn with_request_timeout_ms(mut self, timeout: u64) -> Self {
        self.request_timeout_ms = timeout;
        self
    }

    /// 注册中心基础地址，如 `http://localhost:8761`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// 下游路由
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DownstreamRoute {
    /// 逻辑服务名，只用于注册中心型提供者
    pub service_name: String,

    /// 是否启用服务发现（仅供调用方参考，不影响内置分派）
    pub use_service_discovery: bool,

    /// 静态下游地址（保持配置顺序）
    pub downstream_addresses: Vec<DownstreamHostAndPort>,
}

impl DownstreamRoute {
    /// 创建空路由
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置服务名
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// 设置是否启用服务发现
    pub fn with_use_service_discovery(mut self, enabled: bool) -> Self {
        self.use_service_discovery = enabled;
        self
    }

    /// 设置静态下游地址
    pub fn with_downstream_addresses(mut self, addresses: Vec<DownstreamHostAndPort>) -> Self {
        self.downstream_addresses = addresses;
        self
    }

    /// 追加一个静态下游地址
    pub fn with_downstream_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.downstream_addresses
            .push(DownstreamHostAndPort::new(host, port));
        self
    }

    /// 校验所有静态地址
    pub fn validate(&self) -> Result<()> {
        self.downstream_addresses
            .iter()
            .try_for_each(DownstreamHostAndPort::validate)
    }
}

/// 注册中心类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    /// 心跳型注册中心
    Eureka,
    /// 平台命名服务
    ServiceFabric,
    /// 启动时额外注册的后端
    Other(String),
}

impl RegistryKind {
    /// 对应的 kind 标识
    pub fn as_str(&self) -> &str {
        match self {
            RegistryKind::Eureka => EUREKA_KIND,
            RegistryKind::ServiceFabric => SERVICE_FABRIC_KIND,
            RegistryKind::Other(kind) => kind,
        }
    }
}

/// 提供者类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// 静态列表（默认）
    Static,
    /// 注册中心
    Registry(RegistryKind),
    /// 运维方通过覆盖函数提供的自定义实现
    Custom(String),
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Static => write!(f, "static"),
            ProviderKind::Registry(kind) => write!(f, "registry:{}", kind.as_str()),
            ProviderKind::Custom(name) => write!(f, "custom:{}", name),
        }
    }
}
