//! RapidAPI Forwarder
//!
//! 通过 `x-rapidapi-host` / `x-rapidapi-key` 两个固定头认证的上游实现

use anyhow::{Context, Result};
use async_trait::async_trait;
use http::{header, HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::Value;

use super::constants::{RAPIDAPI_HOST_HEADER, RAPIDAPI_KEY_HEADER};
use super::{parse_details, ForwardError, Upstream, UpstreamConfig, UpstreamRequest};

pub struct RapidApiForwarder {
    config: UpstreamConfig,
    client: Client,
}

impl RapidApiForwarder {
    /// 创建 Forwarder
    ///
    /// 不设置请求超时，沿用 reqwest 客户端的默认行为。
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent())
            .build()
            .context("Failed to create upstream HTTP client")?;

        Ok(Self { config, client })
    }

    fn build_url(&self, request: &UpstreamRequest) -> String {
        let query = request.query_string();
        if query.is_empty() {
            format!("{}{}", self.config.base_url, request.path)
        } else {
            format!("{}{}?{}", self.config.base_url, request.path, query)
        }
    }
}

#[async_trait]
impl Upstream for RapidApiForwarder {
    async fn forward(&self, request: UpstreamRequest) -> Result<Value, ForwardError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ForwardError::MissingCredential)?;

        let url = self.build_url(&request);
        // 完整 URL（含调用方提供的参数）按原样记录
        tracing::info!(kind = %request.kind, %url, "forwarding");

        let headers = build_headers(&self.config.host_header, api_key)?;

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(ForwardError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(ForwardError::Transport)?;
            tracing::warn!(kind = %request.kind, status = status.as_u16(), "upstream error");
            return Err(ForwardError::Upstream {
                status,
                message: request.kind.error_message(),
                details: parse_details(&body),
            });
        }

        response.json().await.map_err(ForwardError::Decode)
    }

    fn credential_configured(&self) -> bool {
        self.config.has_credential()
    }
}

fn user_agent() -> String {
    format!("vidrelay/{}", env!("CARGO_PKG_VERSION"))
}

fn build_headers(host: &str, api_key: &str) -> Result<HeaderMap, ForwardError> {
    let mut map = HeaderMap::new();

    map.insert(RAPIDAPI_HOST_HEADER, HeaderValue::from_str(host)?);

    let mut key = HeaderValue::from_str(api_key)?;
    key.set_sensitive(true);
    map.insert(RAPIDAPI_KEY_HEADER, key);

    map.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    Ok(map)
}
