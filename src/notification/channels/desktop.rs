//! 本地桌面通知渠道 - 按运行平台选择系统通知命令
//!
//! - macOS: `osascript -e 'display notification ...'`
//! - Linux: `notify-send`
//! - Windows: PowerShell toast

use crate::classifier::Tone;
use crate::notification::channel::{Notification, NotificationChannel, SendResult};
use anyhow::{Context, Result};
use std::process::Command;
use tracing::info;

/// Linux 通知的应用名
const APP_NAME: &str = "Claude Code";

/// 本地通知平台
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Unsupported,
}

impl Platform {
    /// 当前运行平台
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            _ => Platform::Unsupported,
        }
    }

    /// 通知所用的可执行文件
    pub fn program(&self) -> Option<&'static str> {
        match self {
            Platform::MacOs => Some("osascript"),
            Platform::Linux => Some("notify-send"),
            Platform::Windows => Some("powershell"),
            Platform::Unsupported => None,
        }
    }

    /// 构造通知命令（不执行）
    pub fn command(&self, notification: &Notification) -> Option<Command> {
        let program = self.program()?;
        let mut cmd = Command::new(program);
        match self {
            Platform::MacOs => {
                cmd.arg("-e").arg(applescript(notification));
            }
            Platform::Linux => {
                cmd.args([
                    "--icon",
                    linux_icon(notification.tone()),
                    "--app-name",
                    APP_NAME,
                    notification.title.as_str(),
                    notification.message.as_str(),
                ]);
            }
            Platform::Windows => {
                cmd.args(["-NoProfile", "-NonInteractive", "-Command"])
                    .arg(powershell_toast(notification));
            }
            Platform::Unsupported => return None,
        }
        Some(cmd)
    }
}

/// 本地桌面通知渠道
pub struct DesktopChannel {
    platform: Platform,
}

impl DesktopChannel {
    pub fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Default for DesktopChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationChannel for DesktopChannel {
    fn name(&self) -> &str {
        "desktop"
    }

    fn send(&self, notification: &Notification) -> Result<SendResult> {
        let (Some(program), Some(mut cmd)) = (
            self.platform.program(),
            self.platform.command(notification),
        ) else {
            return Ok(SendResult::Skipped(format!(
                "no desktop notifier for {}",
                std::env::consts::OS
            )));
        };

        if which::which(program).is_err() {
            return Ok(SendResult::Failed(format!("{} not found in PATH", program)));
        }

        let output = cmd
            .output()
            .with_context(|| format!("failed to run {}", program))?;

        if output.status.success() {
            info!(channel = "desktop", program, "Desktop notification shown");
            Ok(SendResult::Sent)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Ok(SendResult::Failed(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )))
        }
    }
}

/// macOS 提示音
fn mac_sound(tone: Tone) -> &'static str {
    match tone {
        Tone::Error => "Basso",
        Tone::Success => "Glass",
        Tone::Neutral => "default",
    }
}

fn linux_icon(tone: Tone) -> &'static str {
    match tone {
        Tone::Error => "dialog-error",
        Tone::Success | Tone::Neutral => "dialog-information",
    }
}

/// AppleScript 字符串字面量转义
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn applescript(notification: &Notification) -> String {
    format!(
        "display notification \"{}\" with title \"{}\" sound name \"{}\"",
        escape_applescript(&notification.message),
        escape_applescript(&notification.title),
        mac_sound(notification.tone()),
    )
}

/// PowerShell 单引号字符串转义
fn escape_powershell(s: &str) -> String {
    s.replace('\'', "''")
}

fn powershell_toast(notification: &Notification) -> String {
    format!(
        "[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] > $null; \
         $template = [Windows.UI.Notifications.ToastNotificationManager]::GetTemplateContent([Windows.UI.Notifications.ToastTemplateType]::ToastText02); \
         $text = $template.GetElementsByTagName('text'); \
         $text.Item(0).AppendChild($template.CreateTextNode('{}')) > $null; \
         $text.Item(1).AppendChild($template.CreateTextNode('{}')) > $null; \
         $toast = [Windows.UI.Notifications.ToastNotification]::new($template); \
         [Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier('{}').Show($toast)",
        escape_powershell(&notification.title),
        escape_powershell(&notification.message),
        APP_NAME,
    )
}
