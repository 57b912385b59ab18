//! Bark 推送渠道（iOS）
//!
//! URL 格式：`https://api.day.app/<KEY>/<title>/<body>?sound=...&group=ClaudeCode`

use super::http_client;
use crate::classifier::Tone;
use crate::config::BarkConfig;
use crate::notification::channel::{Notification, NotificationChannel, SendResult};
use anyhow::{Context, Result};
use chrono::Local;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

/// 只配置了 key 时使用的公共服务地址
pub const DEFAULT_BARK_SERVER: &str = "https://api.day.app";
/// Bark 通知分组
const GROUP: &str = "ClaudeCode";

/// Bark 响应
#[derive(Debug, Deserialize)]
struct BarkResponse {
    code: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Bark 推送渠道
pub struct BarkChannel {
    client: Client,
    config: BarkConfig,
}

impl BarkChannel {
    pub fn new(config: BarkConfig) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            config,
        })
    }

    /// 拼接推送 URL（标题和正文作为路径段编码）
    pub fn build_url(&self, title: &str, body: &str) -> String {
        let title = urlencoding::encode(title);
        let body = urlencoding::encode(body);
        let url = self.config.url.as_str();

        if url.starts_with("http") {
            format!("{}/{}/{}", url.trim_end_matches('/'), title, body)
        } else {
            let key = self.config.key.as_deref().unwrap_or(url);
            format!("{}/{}/{}/{}", DEFAULT_BARK_SERVER, key, title, body)
        }
    }
}

impl NotificationChannel for BarkChannel {
    fn name(&self) -> &str {
        "bark"
    }

    fn send(&self, notification: &Notification) -> Result<SendResult> {
        let body = format!("{}\n\n{}", notification.message, Local::now().format("%H:%M:%S"));
        let url = self.build_url(&notification.decorated_title(), &body);

        let response = self
            .client
            .get(&url)
            .query(&[("sound", sound(notification.tone())), ("group", GROUP)])
            .send()
            .context("Bark request failed")?;

        let status = response.status().as_u16();
        let text = response.text().unwrap_or_default();
        let result = interpret_response(status, &text);
        if result.is_sent() {
            info!(channel = "bark", "Push notification sent");
        }
        Ok(result)
    }
}

fn sound(tone: Tone) -> &'static str {
    match tone {
        Tone::Error => "alarm",
        Tone::Success => "bell",
        Tone::Neutral => "default",
    }
}

/// 解析 Bark 响应：HTTP 200 且 `code == 200` 才算成功
pub fn interpret_response(status: u16, body: &str) -> SendResult {
    if status != 200 {
        return SendResult::Failed(format!("HTTP {}: {}", status, body.trim()));
    }
    match serde_json::from_str::<BarkResponse>(body) {
        Ok(r) if r.code == 200 => SendResult::Sent,
        Ok(r) => SendResult::Failed(r.message.unwrap_or_else(|| "Unknown error".to_string())),
        Err(e) => SendResult::Failed(format!("invalid response: {}", e)),
    }
}
