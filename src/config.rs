//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - 上游 API 地址与 RapidAPI 密钥
//! - 日志输出格式

use anyhow::{Context, Result};
use reqwest::Url;

use crate::upstream::{UpstreamConfig, DEFAULT_UPSTREAM_URL};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 应用配置
///
/// 包含服务器运行所需的所有配置项
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 上游 API 配置（地址、host 标识、密钥）
    pub upstream: UpstreamConfig,
    pub log_format: LogFormat,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `PORT`: 服务器监听端口（默认: 3000）
    /// - `VIDRELAY_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `RAPIDAPI_KEY`: 上游 API 密钥（缺失时服务仍可启动，但每个请求都会失败）
    /// - `VIDRELAY_UPSTREAM_URL`: 上游 API 地址（默认: RapidAPI YT-API）
    /// - `VIDRELAY_UPSTREAM_HOST`: `x-rapidapi-host` 头的值（默认取上游地址的 host）
    /// - `VIDRELAY_LOG_FORMAT`: `json` 时输出 JSON 日志
    ///
    /// # 错误
    ///
    /// - 如果 `PORT` 不是有效的端口号
    /// - 如果 `VIDRELAY_UPSTREAM_URL` 不是有效的 URL
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置，`from_env` 的底层实现
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("VIDRELAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let base_url = var("VIDRELAY_UPSTREAM_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)
            .with_context(|| format!("VIDRELAY_UPSTREAM_URL is not a valid URL: {base_url}"))?;

        let host_header = match var("VIDRELAY_UPSTREAM_HOST") {
            Some(h) => h,
            None => parsed
                .host_str()
                .context("VIDRELAY_UPSTREAM_URL has no host")?
                .to_string(),
        };

        // 空字符串与未设置等价
        let api_key = var("RAPIDAPI_KEY").filter(|k| !k.trim().is_empty());

        let log_format = match var("VIDRELAY_LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host,
            port,
            upstream: UpstreamConfig {
                base_url,
                host_header,
                api_key,
            },
            log_format,
        })
    }

    /// 本地访问地址，供 `test` 命令使用
    pub fn local_base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "127.0.0.1"
        } else {
            self.host.as_str()
        };
        format!("http://{}:{}", host, self.port)
    }
}
