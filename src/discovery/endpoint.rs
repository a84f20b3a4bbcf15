//! 端点定义

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, Result};

/// 路由上配置的静态下游地址
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DownstreamHostAndPort {
    /// 主机名或 IP
    pub host: String,

    /// 端口
    pub port: u16,
}

impl DownstreamHostAndPort {
    /// 创建下游地址（不做校验，配置加载后统一调用 `validate`）
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// 创建并校验下游地址，host 不能为空
    pub fn try_new(host: impl Into<String>, port: u16) -> Result<Self> {
        let address = Self::new(host, port);
        address.validate()?;
        Ok(address)
    }

    /// 校验 host 非空
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(DiscoveryError::invalid_endpoint(&self.host, self.port));
        }
        Ok(())
    }
}

impl fmt::Display for DownstreamHostAndPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// 解析出的下游端点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// 所属服务名
    pub service_name: String,

    /// 主机名或 IP
    pub host: String,

    /// 端口
    pub port: u16,

    /// 注册中心里的实例 ID
    pub id: Option<String>,

    /// 版本
    pub version: Option<String>,

    /// 标签
    pub tags: Vec<String>,

    /// 元数据
    pub metadata: HashMap<String, String>,
}

impl Endpoint {
    /// 创建新的端点
    pub fn new(service_name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            host: host.into(),
            port,
            id: None,
            version: None,
            tags: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// 从静态下游地址创建端点，host/port 原样复制
    pub fn from_downstream(
        service_name: impl Into<String>,
        address: &DownstreamHostAndPort,
    ) -> Self {
        Self::new(service_name, address.host.clone(), address.port)
    }

    /// 设置实例 ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 设置版本
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// 添加元数据
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// host:port 形式
    pub fn host_and_port(&self) -> DownstreamHostAndPort {
        DownstreamHostAndPort::new(self.host.clone(), self.port)
    }
}
