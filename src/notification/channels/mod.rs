//! 具体渠道实现

pub mod bark;
pub mod desktop;
pub mod server_chan;

pub use bark::BarkChannel;
pub use desktop::{DesktopChannel, Platform};
pub use server_chan::{ServerChanChannel, ServerChanVariant};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// 网络渠道的请求超时
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// 网络渠道共用的阻塞 HTTP 客户端配置
pub(crate) fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")
}
