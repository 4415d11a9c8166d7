//! vidrelay - 视频元数据 API 中继服务
//!
//! 把四个 REST 路由转发到 RapidAPI 上的 YT-API，服务端注入认证头，
//! 原样返回上游 JSON 或归一化后的错误。
//!
//! # 路由
//!
//! - `GET /stream/{videoid}`: 视频详情（固定地区 DE）
//! - `GET /short/{channelid}`: 频道 Shorts
//! - `GET /search?q=`: 搜索
//! - `GET /trend?geo=`: 热门视频（`geo` 默认 US）
//! - `GET /health`: 健康检查
//!
//! # 命令行接口
//!
//! - `serve`: 启动中继服务器（默认命令）
//! - `test`: 向本地服务器发送测试请求

mod commands;
mod config;
mod gateway;
mod upstream;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// vidrelay CLI
#[derive(Parser)]
#[command(name = "vidrelay")]
#[command(about = "Video metadata API relay", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动中继服务器
    Serve,
    /// 向本地服务器发送测试请求
    Test {
        /// 热门视频地区代码（如 JP）
        #[arg(short, long)]
        geo: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("VIDRELAY_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Test { geo } => commands::test_command(config, geo).await,
    }
}

/// 初始化日志系统
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "vidrelay=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init(),
    }
}
