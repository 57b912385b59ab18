//! 通知分发器 - 按顺序把通知发送到所有已注册渠道

use super::channel::{Notification, NotificationChannel, SendResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 通知分发器
///
/// 渠道按注册顺序依次同步发送；单个渠道失败只记录日志，不影响后续渠道。
pub struct NotificationDispatcher {
    /// 所有注册的渠道
    channels: Vec<Arc<dyn NotificationChannel>>,
    /// 是否为 dry-run 模式
    dry_run: bool,
}

impl NotificationDispatcher {
    /// 创建新的分发器
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 注册渠道
    pub fn register_channel(&mut self, channel: Arc<dyn NotificationChannel>) {
        debug!(channel = channel.name(), "Registering notification channel");
        self.channels.push(channel);
    }

    /// 发送到所有渠道，返回每个渠道的结果
    pub fn send_all(&self, notification: &Notification) -> Vec<(String, SendResult)> {
        let mut results = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            let name = channel.name().to_string();

            if self.dry_run {
                info!(
                    channel = %name,
                    title = %notification.title,
                    "[DRY-RUN] Would send notification"
                );
                results.push((name, SendResult::Skipped("dry-run".to_string())));
                continue;
            }

            let result = match channel.send(notification) {
                Ok(r) => r,
                Err(e) => SendResult::Failed(format!("{:#}", e)),
            };

            match &result {
                SendResult::Sent => debug!(channel = %name, "Notification delivered"),
                SendResult::Skipped(reason) => {
                    debug!(channel = %name, reason = %reason, "Channel skipped")
                }
                SendResult::Failed(error) => {
                    warn!(channel = %name, error = %error, "Channel send failed")
                }
            }

            results.push((name, result));
        }

        results
    }

    /// 获取已注册的渠道数量
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// 获取已注册的渠道名称
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}

impl Default for NotificationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
