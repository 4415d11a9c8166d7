//! 转发错误类型

use http::StatusCode;
use serde_json::Value;

/// 缺少密钥时返回给调用方的固定信息
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Server misconfigured: upstream API key is not set";

/// Forwarder 的失败结果
///
/// 只有 `Upstream` 会把上游的状态码和响应体透传给调用方，
/// 其余变体一律按 500 处理。
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// 未配置 `RAPIDAPI_KEY`，请求未发出
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// 上游返回了非 2xx 状态码
    #[error("{message} (upstream status {status})")]
    Upstream {
        status: StatusCode,
        message: &'static str,
        /// 上游响应体：能解析为 JSON 时为 JSON，否则为原始文本
        details: Value,
    },

    #[error("Failed to reach upstream API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse upstream response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid upstream header value: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

/// 解析上游错误响应体
///
/// 优先按 JSON 解析，失败时退回为 JSON 字符串形式的原始文本。
pub fn parse_details(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
