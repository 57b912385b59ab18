//! 通知渠道 trait 定义

use anyhow::Result;
use serde::Serialize;

use crate::classifier::{Classification, StatusKind, Tone};

/// 通知内容（分析器与分发器之间唯一的交接数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: StatusKind,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn tone(&self) -> Tone {
        self.kind.tone()
    }

    /// 带状态 emoji 的标题，远程推送使用
    pub fn decorated_title(&self) -> String {
        format!("{} {}", self.tone().emoji(), self.title)
    }
}

impl From<Classification> for Notification {
    fn from(c: Classification) -> Self {
        Self {
            title: c.title,
            message: c.detail,
            kind: c.kind,
        }
    }
}

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（dry-run 或当前平台不支持）
    Skipped(String),
    /// 发送失败
    Failed(String),
}

impl SendResult {
    pub fn is_sent(&self) -> bool {
        matches!(self, SendResult::Sent)
    }
}

/// 通知渠道 trait
///
/// `send` 尽力发送一次，不重试。
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 同步发送
    fn send(&self, notification: &Notification) -> Result<SendResult>;
}
