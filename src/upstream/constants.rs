//! 上游 API 常量

/// RapidAPI 上的 YT-API 服务地址
pub const DEFAULT_UPSTREAM_URL: &str = "https://yt-api.p.rapidapi.com";

pub const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
pub const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

pub const VIDEO_DETAILS_PATH: &str = "/dl";
pub const CHANNEL_SHORTS_PATH: &str = "/channel/shorts";
pub const SEARCH_PATH: &str = "/search";
pub const TRENDING_PATH: &str = "/trending";

/// 视频详情请求固定使用的地区
pub const VIDEO_DETAILS_REGION: &str = "DE";

/// 热门视频的默认地区
pub const DEFAULT_TRENDING_GEO: &str = "US";
