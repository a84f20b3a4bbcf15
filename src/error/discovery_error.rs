//! 服务发现统一错误类型
//!
//! 解析本身不会失败；这里的错误只来自 `fetch()`、配置加载和启动期装配

use super::code::ErrorCode;
use std::collections::HashMap;
use thiserror::Error;

/// 统一结果类型
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// 服务发现统一错误类型
#[derive(Error, Debug, Clone)]
pub enum DiscoveryError {
    /// 带错误代码的业务错误
    #[error("错误 [{code}] {reason}", code = .code.as_str())]
    Localized {
        code: ErrorCode,
        reason: String,
        details: Option<String>,
        params: Option<HashMap<String, String>>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(String),
}

impl DiscoveryError {
    /// 创建带错误代码的错误
    pub fn localized(code: ErrorCode, reason: impl Into<String>) -> Self {
        DiscoveryError::Localized {
            code,
            reason: reason.into(),
            details: None,
            params: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 创建 IO 错误
    pub fn io(msg: impl Into<String>) -> Self {
        DiscoveryError::Io(msg.into())
    }

    // ============================================================
    // 便捷方法：注册中心相关错误
    // ============================================================

    /// 注册中心不可达
    pub fn registry_unavailable(reason: impl Into<String>) -> Self {
        Self::localized(ErrorCode::RegistryUnavailable, reason)
    }

    /// 注册中心请求超时
    pub fn registry_timeout(reason: impl Into<String>) -> Self {
        Self::localized(ErrorCode::RegistryTimeout, reason)
    }

    /// 注册中心响应格式错误
    pub fn registry_response_invalid(reason: impl Into<String>) -> Self {
        Self::localized(ErrorCode::RegistryResponseInvalid, reason)
    }

    // ============================================================
    // 便捷方法：端点与配置
    // ============================================================

    /// 端点不合法（如 host 为空）
    pub fn invalid_endpoint(host: impl Into<String>, port: u16) -> Self {
        let mut params = HashMap::new();
        params.insert("host".to_string(), host.into());
        params.insert("port".to_string(), port.to_string());
        DiscoveryError::Localized {
            code: ErrorCode::InvalidEndpoint,
            reason: "端点 host 不能为空".to_string(),
            details: None,
            params: Some(params),
            timestamp: chrono::Utc::now(),
        }
    }

    /// 配置错误
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::localized(ErrorCode::ConfigurationError, reason)
    }

    /// 覆盖函数已安装（扩展槽只能写一次）
    pub fn override_already_installed() -> Self {
        Self::localized(
            ErrorCode::OverrideAlreadyInstalled,
            "provider override has already been installed",
        )
    }

    // ============================================================
    // 查询方法
    // ============================================================

    /// 获取错误代码（非 Localized 错误返回 None）
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DiscoveryError::Localized { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// 获取错误详情
    pub fn details(&self) -> Option<&str> {
        match self {
            DiscoveryError::Localized { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// 判断是否为可重试的错误
    pub fn is_retryable(&self) -> bool {
        self.code().map(|c| c.is_retryable()).unwrap_or(false)
    }
}
