//! 错误类型转换实现

use super::{DiscoveryError, ErrorBuilder, ErrorCode};
use std::io;

impl From<io::Error> for DiscoveryError {
    fn from(err: io::Error) -> Self {
        DiscoveryError::io(err.to_string())
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(err: serde_json::Error) -> Self {
        ErrorBuilder::new(ErrorCode::DeserializationError, "JSON 解析错误")
            .details(err.to_string())
            .build()
    }
}

impl From<toml::de::Error> for DiscoveryError {
    fn from(err: toml::de::Error) -> Self {
        ErrorBuilder::new(ErrorCode::ConfigurationError, "TOML 配置解析错误")
            .details(err.to_string())
            .build()
    }
}

#[cfg(feature = "eureka-http")]
impl From<reqwest::Error> for DiscoveryError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            ErrorCode::NetworkTimeout
        } else if err.is_decode() {
            ErrorCode::RegistryResponseInvalid
        } else if err.is_connect() {
            ErrorCode::RegistryUnavailable
        } else {
            ErrorCode::NetworkError
        };

        let mut builder =
            ErrorBuilder::new(code, "registry request failed").details(err.to_string());
        if let Some(url) = err.url() {
            builder = builder.param("url", url.as_str());
        }
        builder.build()
    }
}
