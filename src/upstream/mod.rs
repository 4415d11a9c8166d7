//! 上游 API 抽象层
//!
//! 定义 Forwarder 的统一接口：每个入站请求对应一次出站 GET，
//! 成功时原样返回上游 JSON，失败时归一化为 [`ForwardError`]。

mod constants;
mod error;
#[cfg(test)]
pub mod mock;
mod rapidapi;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub use constants::{
    CHANNEL_SHORTS_PATH, DEFAULT_TRENDING_GEO, DEFAULT_UPSTREAM_URL, SEARCH_PATH, TRENDING_PATH,
    VIDEO_DETAILS_PATH, VIDEO_DETAILS_REGION,
};
pub use error::{parse_details, ForwardError, MISSING_CREDENTIAL_MESSAGE};
pub use rapidapi::RapidApiForwarder;

/// 上游请求类型，用于日志标识和选择固定的错误信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    VideoDetails,
    ChannelShorts,
    Search,
    Trending,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::VideoDetails => "video_details",
            RequestKind::ChannelShorts => "channel_shorts",
            RequestKind::Search => "search",
            RequestKind::Trending => "trending",
        }
    }

    /// 上游失败时返回给调用方的信息，不取自上游响应内容
    pub fn error_message(&self) -> &'static str {
        match self {
            RequestKind::VideoDetails => "Failed to fetch video details",
            RequestKind::ChannelShorts => "Failed to fetch channel shorts",
            RequestKind::Search => "Failed to search videos",
            RequestKind::Trending => "Failed to fetch trending videos",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次上游请求描述
///
/// 路径与参数名由路由固定，只有参数值可能来自调用方。
/// 参数按插入顺序序列化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub kind: RequestKind,
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    pub fn new(kind: RequestKind, path: &'static str) -> Self {
        Self {
            kind,
            path,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// 查找参数值
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// 百分号编码后的查询串（不含 `?`）
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// 上游连接配置，启动时加载后只读
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// 上游地址，不含末尾的 `/`
    pub base_url: String,
    /// `x-rapidapi-host` 头的值
    pub host_header: String,
    /// `x-rapidapi-key` 头的值；为 `None` 时所有请求在发出前失败
    pub api_key: Option<String>,
}

impl UpstreamConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Forwarder Trait - 所有上游传输的统一接口
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn forward(&self, request: UpstreamRequest) -> Result<Value, ForwardError>;

    /// 是否已配置上游密钥（用于健康检查）
    fn credential_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_keeps_insertion_order_and_encodes() {
        let request = UpstreamRequest::new(RequestKind::Search, SEARCH_PATH)
            .param("query", "rust & tokio")
            .param("lang", "en");
        assert_eq!(request.query_string(), "query=rust%20%26%20tokio&lang=en");
    }

    #[test]
    fn empty_params_yield_empty_query() {
        let request = UpstreamRequest::new(RequestKind::Trending, TRENDING_PATH);
        assert_eq!(request.query_string(), "");
        assert_eq!(request.get("geo"), None);
    }

    #[test]
    fn error_messages_differ_per_kind() {
        let kinds = [
            RequestKind::VideoDetails,
            RequestKind::ChannelShorts,
            RequestKind::Search,
            RequestKind::Trending,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.error_message(), b.error_message());
            }
        }
    }
}
