//! Eureka REST 客户端
//!
//! 通过 `GET /eureka/apps/{APP}` 查询实例；构造时不做任何网络调用

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::discovery::client::{RegistryClient, RegistryInstance};
use crate::discovery::config::ServiceProviderConfiguration;
use crate::error::{DiscoveryError, ErrorBuilder, ErrorCode, Result};

/// Eureka HTTP 客户端
#[derive(Clone)]
pub struct EurekaHttpClient {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl EurekaHttpClient {
    /// 从服务提供者配置创建客户端
    pub fn new(config: &ServiceProviderConfiguration) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: config.base_url(),
            token: config.token.clone(),
            timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    /// 使用自定义的 reqwest 客户端（共享连接池）
    pub fn with_http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = http_client;
        self
    }

    /// 注册中心基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 应用查询地址 `{base}/eureka/apps/{APP}`
    ///
    /// 服务名作为单个路径段编码，`/`、`?`、`#` 不会改变请求的路径
    pub fn app_url(&self, service_name: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            DiscoveryError::configuration(format!("invalid Eureka url {}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                DiscoveryError::configuration(format!("Eureka url {} has no path", self.base_url))
            })?
            .pop_if_empty()
            .push("eureka")
            .push("apps")
            .push(&service_name.to_uppercase());
        Ok(url)
    }

    async fn query(&self, url: &Url, service_name: &str) -> Result<Vec<RegistryInstance>> {
        let mut request = self
            .http_client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(service = %service_name, "Eureka has no application registered");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(
                ErrorBuilder::new(ErrorCode::RegistryRejected, "Eureka rejected the request")
                    .param("status", status.as_u16().to_string())
                    .param("url", url.as_str())
                    .build(),
            );
        }

        let body: Value = resp.json().await?;
        parse_application(service_name, &body)
    }
}

#[async_trait]
impl RegistryClient for EurekaHttpClient {
    async fn instances(&self, service_name: &str) -> Result<Vec<RegistryInstance>> {
        let url = self.app_url(service_name)?;

        // 整个请求（含读取响应体）受 timeout 约束，避免阻塞调用方
        match tokio::time::timeout(self.timeout, self.query(&url, service_name)).await {
            Ok(Ok(instances)) => {
                tracing::debug!(
                    service = %service_name,
                    count = instances.len(),
                    "Fetched instances from Eureka"
                );
                Ok(instances)
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    service = %service_name,
                    url = %url,
                    error = %e,
                    "⚠️ Eureka query failed"
                );
                Err(e)
            }
            Err(_) => Err(DiscoveryError::registry_timeout(format!(
                "Eureka request timeout ({}ms)",
                self.timeout.as_millis()
            ))),
        }
    }
}

/// 解析 `/eureka/apps/{APP}` 的 JSON 响应
///
/// `application.instance` 可能是数组，也可能是单个对象
pub fn parse_application(service_name: &str, body: &Value) -> Result<Vec<RegistryInstance>> {
    let application = body
        .get("application")
        .ok_or_else(|| DiscoveryError::registry_response_invalid("missing `application`"))?;

    let instances = match application.get("instance") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().collect::<Vec<_>>(),
        Some(item) if item.is_object() => vec![item],
        Some(_) => {
            return Err(DiscoveryError::registry_response_invalid(
                "`application.instance` must be an object or an array",
            ));
        }
    };

    instances
        .into_iter()
        .map(|item| parse_instance(service_name, item))
        .collect()
}

fn parse_instance(service_name: &str, item: &Value) -> Result<RegistryInstance> {
    let host = item
        .get("hostName")
        .or_else(|| item.get("ipAddr"))
        .and_then(Value::as_str)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| {
            DiscoveryError::registry_response_invalid("instance without hostName/ipAddr")
        })?;

    let port = if port_enabled(item.get("securePort")) {
        port_value(item.get("securePort"))
    } else {
        port_value(item.get("port"))
    }
    .ok_or_else(|| {
        DiscoveryError::registry_response_invalid(format!("instance {} without port", host))
    })?;

    let default_id = format!("{}:{}", host, port);
    let instance_id = item
        .get("instanceId")
        .and_then(Value::as_str)
        .unwrap_or(&default_id);

    let service_id = item
        .get("app")
        .and_then(Value::as_str)
        .unwrap_or(service_name);

    let metadata: HashMap<String, String> = item
        .get("metadata")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let mut instance = RegistryInstance::new(instance_id, service_id, host, port);
    instance.metadata = metadata;
    Ok(instance)
}

/// 端口既可能是 `{"$": 8080, "@enabled": "true"}`，也可能是裸数字
fn port_value(value: Option<&Value>) -> Option<u16> {
    let raw = match value? {
        Value::Object(map) => map.get("$")?,
        other => other,
    };
    match raw {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn port_enabled(value: Option<&Value>) -> bool {
    match value.and_then(|v| v.get("@enabled")) {
        Some(Value::String(s)) => s == "true",
        Some(Value::Bool(b)) => *b,
        _ => false,
    }
}
