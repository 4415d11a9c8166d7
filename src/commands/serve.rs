//! Serve 命令 - 启动中继服务器

use anyhow::Result;

use crate::config::Config;
use crate::gateway;

/// 执行服务器启动命令
///
/// 未配置 `RAPIDAPI_KEY` 时只记录警告，服务照常启动；
/// 收到 Ctrl+C 或 SIGTERM 后优雅关闭。
pub async fn serve_command(config: Config) -> Result<()> {
    gateway::serve(config).await
}
