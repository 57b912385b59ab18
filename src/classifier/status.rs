//! 完成状态分类 - 状态类型与通知风格

use serde::{Deserialize, Serialize};

/// 会话完成状态
///
/// 只影响通知的图标、emoji 和提示音，不携带其它行为。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    // 严重错误
    ApiError,
    AuthError,
    RateLimit,
    NetworkError,
    TimeoutError,
    // 需要用户交互
    PermissionRequired,
    ConfirmationRequired,
    CredentialsRequired,
    InputRequired,
    KeyRequired,
    // 一般错误
    FatalError,
    CommandError,
    PermissionDenied,
    MemoryError,
    // 成功
    Success,
    TestSuccess,
    BuildSuccess,
    DeploySuccess,
    GitSuccess,
    // 兜底
    Completed,
    Unknown,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::ApiError => "api_error",
            StatusKind::AuthError => "auth_error",
            StatusKind::RateLimit => "rate_limit",
            StatusKind::NetworkError => "network_error",
            StatusKind::TimeoutError => "timeout_error",
            StatusKind::PermissionRequired => "permission_required",
            StatusKind::ConfirmationRequired => "confirmation_required",
            StatusKind::CredentialsRequired => "credentials_required",
            StatusKind::InputRequired => "input_required",
            StatusKind::KeyRequired => "key_required",
            StatusKind::FatalError => "fatal_error",
            StatusKind::CommandError => "command_error",
            StatusKind::PermissionDenied => "permission_denied",
            StatusKind::MemoryError => "memory_error",
            StatusKind::Success => "success",
            StatusKind::TestSuccess => "test_success",
            StatusKind::BuildSuccess => "build_success",
            StatusKind::DeploySuccess => "deploy_success",
            StatusKind::GitSuccess => "git_success",
            StatusKind::Completed => "completed",
            StatusKind::Unknown => "unknown",
            StatusKind::Error => "error",
        }
    }

    /// 通知风格：标签含 "error" 为错误，含 "success" 为成功，其余为中性
    ///
    /// 注意 `rate_limit`、`permission_denied` 按此规则属于中性。
    pub fn tone(&self) -> Tone {
        let tag = self.as_str();
        if tag.contains("error") {
            Tone::Error
        } else if tag.contains("success") {
            Tone::Success
        } else {
            Tone::Neutral
        }
    }

    /// 属于严重错误层级（API、认证、限流、网络、超时）
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            StatusKind::ApiError
                | StatusKind::AuthError
                | StatusKind::RateLimit
                | StatusKind::NetworkError
                | StatusKind::TimeoutError
        )
    }

    /// 会话停下来等待用户操作
    pub fn needs_interaction(&self) -> bool {
        matches!(
            self,
            StatusKind::PermissionRequired
                | StatusKind::ConfirmationRequired
                | StatusKind::CredentialsRequired
                | StatusKind::InputRequired
                | StatusKind::KeyRequired
        )
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 通知风格分组
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
    Neutral,
}

impl Tone {
    /// 推送标题前缀
    pub fn emoji(&self) -> &'static str {
        match self {
            Tone::Error => "❌",
            Tone::Success => "✅",
            Tone::Neutral => "🤖",
        }
    }
}
