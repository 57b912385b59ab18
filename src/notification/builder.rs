//! 通知系统构建器 - 根据配置注册渠道

use super::channel::{Notification, NotificationChannel, SendResult};
use super::channels::{BarkChannel, DesktopChannel, Platform, ServerChanChannel};
use super::dispatcher::NotificationDispatcher;
use crate::config::NotifierConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// 通知系统构建器
///
/// 渠道注册顺序固定：desktop → bark → server_chan → server_chan_turbo。
pub struct NotificationBuilder {
    config: NotifierConfig,
    platform: Platform,
    dry_run: bool,
}

impl NotificationBuilder {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            platform: Platform::current(),
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 指定本地通知平台（默认当前平台）
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// 构建 NotificationDispatcher
    ///
    /// 单个渠道初始化失败只记录警告，不影响其它渠道。
    pub fn build(self) -> NotificationDispatcher {
        let mut dispatcher = NotificationDispatcher::new().with_dry_run(self.dry_run);

        if self.config.desktop {
            dispatcher.register_channel(Arc::new(DesktopChannel::for_platform(self.platform)));
        }

        if let Some(bark) = &self.config.bark {
            register(&mut dispatcher, "bark", BarkChannel::new(bark.clone()));
        }

        if let Some(key) = &self.config.server_chan_key {
            register(&mut dispatcher, "server_chan", ServerChanChannel::plain(key.clone()));
        }

        if let Some(key) = &self.config.server_chan_turbo_key {
            register(&mut dispatcher, "server_chan_turbo", ServerChanChannel::turbo(key.clone()));
        }

        debug!(channels = ?dispatcher.channel_names(), "Notification dispatcher ready");
        dispatcher
    }
}

fn register<C>(dispatcher: &mut NotificationDispatcher, name: &str, channel: Result<C>)
where
    C: NotificationChannel + 'static,
{
    match channel {
        Ok(channel) => dispatcher.register_channel(Arc::new(channel)),
        Err(e) => warn!(
            channel = name,
            error = %format!("{:#}", e),
            "Failed to initialize channel"
        ),
    }
}

/// 便捷函数：按配置发送到所有启用的渠道
///
/// 从不返回错误；每个渠道的结果按发送顺序返回。
pub fn dispatch_all(
    notification: &Notification,
    config: &NotifierConfig,
) -> Vec<(String, SendResult)> {
    NotificationBuilder::new(config.clone())
        .build()
        .send_all(notification)
}
