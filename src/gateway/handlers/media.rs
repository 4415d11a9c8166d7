//! 媒体路由处理器：视频详情、频道 Shorts、搜索、热门

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Response,
};
use serde::Deserialize;

use super::{json_error, relay, CHANNEL_SHORTS, SEARCH, TRENDING, VIDEO_DETAILS};
use crate::gateway::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingParams {
    geo: Option<String>,
}

/// GET /stream/{videoid}
pub async fn handle_video_details(
    State(state): State<AppState>,
    videoid: Result<Path<String>, PathRejection>,
) -> Response {
    match videoid {
        Ok(Path(videoid)) => relay(&state, &VIDEO_DETAILS, Some(videoid)).await,
        Err(rejection) => json_error(rejection.status(), rejection.body_text()),
    }
}

/// GET /stream 和 /stream/（缺少视频 ID）
pub async fn handle_video_details_missing(State(state): State<AppState>) -> Response {
    relay(&state, &VIDEO_DETAILS, None).await
}

/// GET /short/{channelid}
pub async fn handle_channel_shorts(
    State(state): State<AppState>,
    channelid: Result<Path<String>, PathRejection>,
) -> Response {
    match channelid {
        Ok(Path(channelid)) => relay(&state, &CHANNEL_SHORTS, Some(channelid)).await,
        Err(rejection) => json_error(rejection.status(), rejection.body_text()),
    }
}

/// GET /short 和 /short/（缺少频道 ID）
pub async fn handle_channel_shorts_missing(State(state): State<AppState>) -> Response {
    relay(&state, &CHANNEL_SHORTS, None).await
}

/// GET /search?q=
pub async fn handle_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(params)) => relay(&state, &SEARCH, params.q).await,
        Err(rejection) => json_error(rejection.status(), rejection.body_text()),
    }
}

/// GET /trend?geo=，`geo` 缺省为 US
pub async fn handle_trending(
    State(state): State<AppState>,
    params: Result<Query<TrendingParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(params)) => relay(&state, &TRENDING, params.geo).await,
        Err(rejection) => json_error(rejection.status(), rejection.body_text()),
    }
}
