// src/cli/hook.rs
//! Hook 入口 - 从 stdin 读取 Claude Code Stop hook 的 JSON，分析并发送通知

use crate::classifier::{classify, StatusKind};
use crate::config::NotifierConfig;
use crate::notification::channels::DesktopChannel;
use crate::notification::{Notification, NotificationBuilder, NotificationChannel, SendResult};
use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::output::{console_line, format_output};

/// 通知命令参数
#[derive(Args, Debug, Clone, Default)]
pub struct NotifyArgs {
    /// 只打印要发送的渠道，不实际发送
    #[arg(long)]
    pub dry_run: bool,

    /// 不发送本地桌面通知
    #[arg(long)]
    pub no_desktop: bool,

    /// dotenv 文件路径（默认读取当前目录的 .env）
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// 以 JSON 格式输出分析结果和各渠道发送结果
    #[arg(long)]
    pub json: bool,
}

/// Hook 输入（只取需要的字段）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookInput {
    /// 缺失或不是字符串时为空
    pub transcript_path: String,
    pub session_id: Option<String>,
    pub hook_event_name: Option<String>,
}

impl HookInput {
    /// 解析 stdin 内容；不是合法 JSON 对象时返回错误
    pub fn parse(raw: &str) -> Result<Self> {
        let json: serde_json::Value =
            serde_json::from_str(raw).context("invalid JSON input")?;
        let Some(obj) = json.as_object() else {
            bail!("invalid JSON input: expected an object");
        };

        let field = |name: &str| obj.get(name).and_then(|v| v.as_str()).map(|s| s.to_string());

        Ok(Self {
            transcript_path: field("transcript_path").unwrap_or_default(),
            session_id: field("session_id"),
            hook_event_name: field("hook_event_name"),
        })
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader
            .read_to_string(&mut raw)
            .context("failed to read stdin")?;
        Self::parse(&raw)
    }
}

/// 一次 hook 调用的结果
#[derive(Debug, Serialize)]
pub struct HookReport {
    pub notification: Notification,
    pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Serialize)]
pub struct Delivery {
    pub channel: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<(String, SendResult)> for Delivery {
    fn from((channel, result): (String, SendResult)) -> Self {
        let (status, reason) = match result {
            SendResult::Sent => ("sent", None),
            SendResult::Skipped(r) => ("skipped", Some(r)),
            SendResult::Failed(r) => ("failed", Some(r)),
        };
        Self {
            channel,
            status,
            reason,
        }
    }
}

impl HookReport {
    /// 控制台输出
    pub fn render(&self, json: bool) -> String {
        if json {
            format_output(self)
        } else {
            console_line(&self.notification.title, &self.notification.message)
        }
    }
}

/// 分析对话记录并发送到所有启用的渠道
pub fn handle_hook(input: &HookInput, config: &NotifierConfig, dry_run: bool) -> HookReport {
    debug!(
        session_id = ?input.session_id,
        hook_event = ?input.hook_event_name,
        transcript = %input.transcript_path,
        "Hook received"
    );

    let classification = classify(&input.transcript_path);
    debug!(kind = %classification.kind, "Transcript classified");

    let notification = Notification::from(classification);
    let results = NotificationBuilder::new(config.clone())
        .dry_run(dry_run)
        .build()
        .send_all(&notification);

    HookReport {
        notification,
        deliveries: results.into_iter().map(Delivery::from).collect(),
    }
}

/// 读取 stdin → 分析 → 发送
pub fn run<R: Read>(reader: R, args: &NotifyArgs, config: &NotifierConfig) -> Result<HookReport> {
    let input = HookInput::read_from(reader)?;
    Ok(handle_hook(&input, config, args.dry_run))
}

/// 出错时尽力发一条本地通知
pub fn notify_failure(error: &anyhow::Error, config: &NotifierConfig, dry_run: bool) {
    if dry_run || !config.desktop {
        return;
    }

    let notification = Notification::new(
        "Claude Code notifier error",
        format!("notifier failed: {:#}", error),
        StatusKind::Error,
    );
    match DesktopChannel::new().send(&notification) {
        Ok(SendResult::Sent) => {}
        Ok(other) => debug!(result = ?other, "Failure notification not shown"),
        Err(e) => warn!(error = %e, "Failure notification not shown"),
    }
}
