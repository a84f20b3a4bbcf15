//! 错误代码和错误类别定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 错误代码枚举
///
/// 错误代码按类别分组，每个类别占用1000个代码范围：
/// - 1000-1999: 注册中心相关错误
/// - 2000-2999: 端点相关错误
/// - 6000-6999: 配置/装配相关错误
/// - 7000-7999: 网络相关错误
/// - 8000-8999: 序列化相关错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum ErrorCode {
    // ============================================================
    // 注册中心相关错误 (1000-1999)
    // ============================================================
    RegistryUnavailable = 1000,
    RegistryTimeout = 1001,
    RegistryResponseInvalid = 1002,
    RegistryRejected = 1003,

    // ============================================================
    // 端点相关错误 (2000-2999)
    // ============================================================
    InvalidEndpoint = 2000,

    // ============================================================
    // 配置/装配相关错误 (6000-6999)
    // ============================================================
    ConfigurationError = 6000,
    OverrideAlreadyInstalled = 6001,

    // ============================================================
    // 网络相关错误 (7000-7999)
    // ============================================================
    NetworkError = 7000,
    NetworkTimeout = 7001,

    // ============================================================
    // 序列化相关错误 (8000-8999)
    // ============================================================
    DeserializationError = 8001,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorCode {
    /// 获取错误代码的数字值
    #[inline]
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// 获取错误代码的英文标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RegistryUnavailable => "REGISTRY_UNAVAILABLE",
            ErrorCode::RegistryTimeout => "REGISTRY_TIMEOUT",
            ErrorCode::RegistryResponseInvalid => "REGISTRY_RESPONSE_INVALID",
            ErrorCode::RegistryRejected => "REGISTRY_REJECTED",
            ErrorCode::InvalidEndpoint => "INVALID_ENDPOINT",
            ErrorCode::ConfigurationError => "CONFIGURATION_ERROR",
            ErrorCode::OverrideAlreadyInstalled => "OVERRIDE_ALREADY_INSTALLED",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::NetworkTimeout => "NETWORK_TIMEOUT",
            ErrorCode::DeserializationError => "DESERIALIZATION_ERROR",
        }
    }

    /// 获取错误代码的类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_u32() {
            1000..=1999 => ErrorCategory::Registry,
            2000..=2999 => ErrorCategory::Endpoint,
            6000..=6999 => ErrorCategory::Configuration,
            7000..=7999 => ErrorCategory::Network,
            _ => ErrorCategory::Serialization,
        }
    }

    /// 判断是否为可重试的错误
    ///
    /// 本库不做重试，这里只是给调用方的提示
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCode::RegistryUnavailable
                | ErrorCode::RegistryTimeout
                | ErrorCode::NetworkError
                | ErrorCode::NetworkTimeout
        )
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    Registry,
    Endpoint,
    Configuration,
    Network,
    Serialization,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Registry => write!(f, "REGISTRY"),
            ErrorCategory::Endpoint => write!(f, "ENDPOINT"),
            ErrorCategory::Configuration => write!(f, "CONFIGURATION"),
            ErrorCategory::Network => write!(f, "NETWORK"),
            ErrorCategory::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}
