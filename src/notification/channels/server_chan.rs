//! Server酱 渠道（微信推送）
//!
//! 普通版 POST 表单；Turbo 版 GET 查询参数 + Markdown 正文，成功时返回 pushid。

use super::http_client;
use crate::notification::channel::{Notification, NotificationChannel, SendResult};
use anyhow::{Context, Result};
use chrono::Local;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

/// Server酱 API 地址
pub const SERVER_CHAN_API: &str = "https://sctapi.ftqq.com";

/// Server酱 版本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerChanVariant {
    Plain,
    Turbo,
}

/// Server酱 响应
#[derive(Debug, Deserialize)]
struct ServerChanResponse {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<ServerChanData>,
}

#[derive(Debug, Deserialize)]
struct ServerChanData {
    /// 通常是字符串，也兼容数字
    #[serde(default)]
    pushid: Option<serde_json::Value>,
}

impl ServerChanData {
    fn push_id(&self) -> Option<String> {
        match self.pushid.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// 成功响应的结果
#[derive(Debug, Clone, PartialEq)]
pub struct ServerChanReply {
    pub result: SendResult,
    pub push_id: Option<String>,
}

/// Server酱 渠道
pub struct ServerChanChannel {
    client: Client,
    key: String,
    variant: ServerChanVariant,
}

impl ServerChanChannel {
    pub fn new(key: impl Into<String>, variant: ServerChanVariant) -> Result<Self> {
        Ok(Self {
            client: http_client()?,
            key: key.into(),
            variant,
        })
    }

    /// 普通版
    pub fn plain(key: impl Into<String>) -> Result<Self> {
        Self::new(key, ServerChanVariant::Plain)
    }

    /// Turbo 版
    pub fn turbo(key: impl Into<String>) -> Result<Self> {
        Self::new(key, ServerChanVariant::Turbo)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}.send", SERVER_CHAN_API, self.key)
    }

    /// 推送正文
    pub fn format_desp(&self, message: &str, timestamp: &str) -> String {
        match self.variant {
            ServerChanVariant::Plain => format!("{}\n\nTime: {}", message, timestamp),
            ServerChanVariant::Turbo => format!(
                "**{}**\n\n---\n\n⏰ Time: `{}`\n\n📡 Source: Claude Code Notifier",
                message, timestamp
            ),
        }
    }
}

impl NotificationChannel for ServerChanChannel {
    fn name(&self) -> &str {
        match self.variant {
            ServerChanVariant::Plain => "server_chan",
            ServerChanVariant::Turbo => "server_chan_turbo",
        }
    }

    fn send(&self, notification: &Notification) -> Result<SendResult> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let title = notification.decorated_title();
        let desp = self.format_desp(&notification.message, &timestamp);
        let params = [("title", title.as_str()), ("desp", desp.as_str())];

        let request = match self.variant {
            ServerChanVariant::Plain => self.client.post(self.endpoint()).form(&params),
            ServerChanVariant::Turbo => self.client.get(self.endpoint()).query(&params),
        };
        let response = request
            .send()
            .with_context(|| format!("{} request failed", self.name()))?;

        let status = response.status().as_u16();
        let text = response.text().unwrap_or_default();
        let reply = interpret_response(status, &text);

        if reply.result.is_sent() {
            match (&self.variant, &reply.push_id) {
                (ServerChanVariant::Turbo, Some(push_id)) => {
                    info!(
                        channel = self.name(),
                        push_id = %push_id,
                        "Server酱Turbo notification sent"
                    )
                }
                _ => info!(channel = self.name(), "Server酱 notification sent"),
            }
        }
        Ok(reply.result)
    }
}

/// 解析 Server酱 响应：HTTP 200 且 `code == 0` 才算成功
pub fn interpret_response(status: u16, body: &str) -> ServerChanReply {
    let failed = |reason: String| ServerChanReply {
        result: SendResult::Failed(reason),
        push_id: None,
    };

    if status != 200 {
        return failed(format!("HTTP {}: {}", status, body.trim()));
    }
    match serde_json::from_str::<ServerChanResponse>(body) {
        Ok(r) if r.code == 0 => ServerChanReply {
            result: SendResult::Sent,
            push_id: r.data.as_ref().and_then(ServerChanData::push_id),
        },
        Ok(r) => failed(r.message.unwrap_or_else(|| "Unknown error".to_string())),
        Err(e) => failed(format!("invalid response: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_and_names() {
        let plain = ServerChanChannel::plain("SCT123").unwrap();
        let turbo = ServerChanChannel::turbo("SCT456").unwrap();

        assert_eq!(plain.endpoint(), "https://sctapi.ftqq.com/SCT123.send");
        assert_eq!(plain.name(), "server_chan");
        assert_eq!(turbo.endpoint(), "https://sctapi.ftqq.com/SCT456.send");
        assert_eq!(turbo.name(), "server_chan_turbo");
    }

    #[test]
    fn test_format_desp() {
        let plain = ServerChanChannel::plain("k").unwrap();
        assert_eq!(
            plain.format_desp("Tests passed, 42/42", "2026-10-14 09:30:00"),
            "Tests passed, 42/42\n\nTime: 2026-10-14 09:30:00"
        );

        let turbo = ServerChanChannel::turbo("k").unwrap();
        let desp = turbo.format_desp("Tests passed, 42/42", "2026-10-14 09:30:00");
        assert!(desp.starts_with("**Tests passed, 42/42**\n\n---\n\n"));
        assert!(desp.contains("`2026-10-14 09:30:00`"));
        assert!(desp.ends_with("📡 Source: Claude Code Notifier"));
    }

    #[test]
    fn test_interpret_success_with_pushid() {
        let reply = interpret_response(
            200,
            r#"{"code":0,"message":"","data":{"pushid":"12345","readkey":"abc"}}"#,
        );
        assert_eq!(reply.result, SendResult::Sent);
        assert_eq!(reply.push_id.as_deref(), Some("12345"));
    }

    #[test]
    fn test_interpret_numeric_pushid() {
        let reply = interpret_response(200, r#"{"code":0,"data":{"pushid":987}}"#);
        assert_eq!(reply.push_id.as_deref(), Some("987"));
    }

    #[test]
    fn test_interpret_success_without_data() {
        let reply = interpret_response(200, r#"{"code":0}"#);
        assert_eq!(reply.result, SendResult::Sent);
        assert!(reply.push_id.is_none());
    }

    #[test]
    fn test_interpret_nonzero_code() {
        let reply = interpret_response(200, r#"{"code":40001,"message":"bad pushtoken"}"#);
        assert_eq!(reply.result, SendResult::Failed("bad pushtoken".to_string()));

        let reply = interpret_response(200, r#"{"code":1}"#);
        assert_eq!(reply.result, SendResult::Failed("Unknown error".to_string()));
    }

    #[test]
    fn test_interpret_http_error_and_garbage() {
        let reply = interpret_response(502, "Bad Gateway\n");
        assert_eq!(reply.result, SendResult::Failed("HTTP 502: Bad Gateway".to_string()));

        let reply = interpret_response(200, "not json");
        assert!(matches!(reply.result, SendResult::Failed(_)));
    }
}
