//! HTTP 请求处理器
//!
//! 四个媒体路由形状相同（校验输入 → 转发 → 映射结果），
//! 差异全部放在 [`RouteSpec`] 表项里，由 [`relay`] 统一处理。

pub mod health;
pub mod media;

pub use health::handle_health;
pub use media::{
    handle_channel_shorts, handle_channel_shorts_missing, handle_search, handle_trending,
    handle_video_details, handle_video_details_missing,
};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::gateway::state::AppState;
use crate::upstream::{
    ForwardError, RequestKind, UpstreamRequest, CHANNEL_SHORTS_PATH, DEFAULT_TRENDING_GEO,
    SEARCH_PATH, TRENDING_PATH, VIDEO_DETAILS_PATH, VIDEO_DETAILS_REGION,
};

/// 单个路由的转发规则
#[derive(Debug)]
pub struct RouteSpec {
    pub kind: RequestKind,
    /// 上游路径
    pub path: &'static str,
    /// 调用方输入对应的上游参数名
    pub param: &'static str,
    /// 缺少输入时的 400 信息
    pub missing: &'static str,
    /// 输入可选时的默认值
    pub default: Option<&'static str>,
    /// 附加的固定参数
    pub fixed: &'static [(&'static str, &'static str)],
}

impl RouteSpec {
    fn request(&self, value: String) -> UpstreamRequest {
        self.fixed.iter().fold(
            UpstreamRequest::new(self.kind, self.path).param(self.param, value),
            |req, &(name, fixed)| req.param(name, fixed),
        )
    }
}

pub const VIDEO_DETAILS: RouteSpec = RouteSpec {
    kind: RequestKind::VideoDetails,
    path: VIDEO_DETAILS_PATH,
    param: "id",
    missing: "Video ID is required",
    default: None,
    fixed: &[("region", VIDEO_DETAILS_REGION)],
};

pub const CHANNEL_SHORTS: RouteSpec = RouteSpec {
    kind: RequestKind::ChannelShorts,
    path: CHANNEL_SHORTS_PATH,
    param: "id",
    missing: "Channel ID is required",
    default: None,
    fixed: &[],
};

pub const SEARCH: RouteSpec = RouteSpec {
    kind: RequestKind::Search,
    path: SEARCH_PATH,
    param: "query",
    missing: "Search query parameter 'q' is required",
    default: None,
    fixed: &[],
};

pub const TRENDING: RouteSpec = RouteSpec {
    kind: RequestKind::Trending,
    path: TRENDING_PATH,
    param: "geo",
    missing: "Region parameter 'geo' is required",
    default: Some(DEFAULT_TRENDING_GEO),
    fixed: &[],
};

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// 校验输入、转发并把结果映射为 HTTP 响应
///
/// 空字符串视为未提供。成功时原样返回上游 JSON。
pub async fn relay(state: &AppState, route: &RouteSpec, input: Option<String>) -> Response {
    let value = match input
        .filter(|v| !v.is_empty())
        .or_else(|| route.default.map(str::to_string))
    {
        Some(value) => value,
        None => return bad_request(route.missing),
    };

    match state.upstream().forward(route.request(value)).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => error_response(err),
    }
}

fn bad_request(message: &str) -> Response {
    json_error(StatusCode::BAD_REQUEST, message.to_string())
}

/// `{"error": ...}` 错误体，提取器拒绝（重复的查询参数、非 UTF-8 路径等）也经由这里返回
pub fn json_error(status: StatusCode, message: String) -> Response {
    let error = ErrorResponse {
        error: message,
        details: None,
    };
    (status, Json(error)).into_response()
}

fn error_response(err: ForwardError) -> Response {
    match err {
        ForwardError::Upstream {
            status,
            message,
            details,
        } => {
            let error = ErrorResponse {
                error: message.to_string(),
                details: Some(details),
            };
            (status, Json(error)).into_response()
        }
        other => {
            tracing::error!("{}", other);
            let error = ErrorResponse {
                error: other.to_string(),
                details: None,
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}
