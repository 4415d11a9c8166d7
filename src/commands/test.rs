//! Test 命令 - 发送测试请求到本地服务器
//!
//! 此模块实现 `test` 命令，用于向本地运行的 vidrelay 服务器发送一次
//! `/trend` 请求，验证服务和上游密钥是否正常工作。

use anyhow::{Context, Result};

use crate::config::Config;

/// 执行测试命令
///
/// # 参数
///
/// * `config` - 应用配置，用于获取服务器地址
/// * `geo` - 热门视频地区，为 `None` 时由服务端使用默认值
///
/// # 返回
///
/// 服务器返回 2xx 时返回 Ok(())，否则返回包含响应体的错误
pub async fn test_command(config: Config, geo: Option<String>) -> Result<()> {
    println!("Sending test request to local server...");

    let mut url = format!("{}/trend", config.local_base_url());
    if let Some(geo) = geo {
        url.push_str(&format!("?geo={}", urlencoding::encode(&geo)));
    }

    println!("Request URL: {}", url);

    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    println!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {}", body);
    }

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    println!("Response:");
    println!("{}", body);

    Ok(())
}
