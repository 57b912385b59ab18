//! 通知抽象层 - 统一管理所有通知渠道
//!
//! # 设计目标
//! 1. 统一接口：所有渠道实现 `NotificationChannel` trait
//! 2. 渠道隔离：单个渠道失败只记日志，不影响其它渠道，也不向调用方传播
//! 3. 配置驱动：`NotificationBuilder` 根据 `NotifierConfig` 决定注册哪些渠道
//! 4. 同步发送：按固定顺序逐个发送，网络渠道 10 秒超时
//!
//! # 使用示例
//! ```ignore
//! use claude_notifier::config::NotifierConfig;
//! use claude_notifier::notification::{dispatch_all, Notification};
//! use claude_notifier::StatusKind;
//!
//! let config = NotifierConfig::from_env();
//! let notification = Notification::new("✅ tests passed", "42/42", StatusKind::TestSuccess);
//! dispatch_all(&notification, &config);
//! ```

pub mod builder;
pub mod channel;
pub mod channels;
pub mod dispatcher;

pub use builder::{dispatch_all, NotificationBuilder};
pub use channel::{Notification, NotificationChannel, SendResult};
pub use dispatcher::NotificationDispatcher;
