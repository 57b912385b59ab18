//! Claude Notifier - 分析 Claude Code 会话结束状态并推送通知

pub mod classifier;
pub mod cli;
pub mod config;
pub mod notification;

pub use classifier::{classify, classify_text, Classification, StatusKind, Tone};
pub use config::{BarkConfig, NotifierConfig};
pub use notification::{
    dispatch_all, Notification, NotificationBuilder, NotificationChannel, NotificationDispatcher,
    SendResult,
};
