//! 分类规则表 - 按优先级排列，第一个匹配的规则生效

use super::status::StatusKind;
use regex::Regex;
use std::sync::LazyLock;

/// 规则层级，决定标题前缀和证据行数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// API / 认证 / 限流 / 网络 / 超时
    Critical,
    /// 需要权限、确认、凭据或按键
    Interaction,
    /// 严重但非 API 的错误
    Failure,
    /// 明确的成功标识
    Success,
}

impl Tier {
    pub fn glyph(&self) -> &'static str {
        match self {
            Tier::Critical => "🚨",
            Tier::Interaction => "⏸️",
            Tier::Failure => "❌",
            Tier::Success => "✅",
        }
    }

    /// 证据行数：错误类 5 行，其余 3 行
    pub fn evidence_lines(&self) -> usize {
        match self {
            Tier::Critical | Tier::Failure => 5,
            Tier::Interaction | Tier::Success => 3,
        }
    }
}

/// 单条分类规则
#[derive(Debug)]
pub struct ClassificationRule {
    pub pattern: Regex,
    pub kind: StatusKind,
    pub description: &'static str,
    pub tier: Tier,
}

impl ClassificationRule {
    /// 通知标题，如 "🚨 API call error"
    pub fn title(&self) -> String {
        format!("{} {}", self.tier.glyph(), self.description)
    }

    pub fn evidence_lines(&self) -> usize {
        self.tier.evidence_lines()
    }
}

/// 规则声明顺序即优先级：Critical → Interaction → Failure → Success
const RULE_TABLE: &[(&str, StatusKind, &str, Tier)] = &[
    (r"api error|api_error", StatusKind::ApiError, "API call error", Tier::Critical),
    (
        r"authentication.*failed|auth.*error",
        StatusKind::AuthError,
        "authentication failed",
        Tier::Critical,
    ),
    (
        r"rate.*limit.*exceeded|too many requests",
        StatusKind::RateLimit,
        "rate limit exceeded",
        Tier::Critical,
    ),
    (
        r"network.*error|connection.*error",
        StatusKind::NetworkError,
        "network connection error",
        Tier::Critical,
    ),
    (
        r"timeout.*error|request.*timeout",
        StatusKind::TimeoutError,
        "request timed out",
        Tier::Critical,
    ),
    (
        r"permission.*required|grant.*permission|allow.*access",
        StatusKind::PermissionRequired,
        "permission required",
        Tier::Interaction,
    ),
    (
        r"please.*confirm|confirm.*\(y/n\)|do you want to",
        StatusKind::ConfirmationRequired,
        "confirmation required",
        Tier::Interaction,
    ),
    (
        r"enter.*password|provide.*credentials",
        StatusKind::CredentialsRequired,
        "credentials required",
        Tier::Interaction,
    ),
    (
        r"waiting.*for.*input|please.*provide",
        StatusKind::InputRequired,
        "waiting for input",
        Tier::Interaction,
    ),
    (
        r"press.*any.*key|press.*enter",
        StatusKind::KeyRequired,
        "waiting for key press",
        Tier::Interaction,
    ),
    (r"fatal.*error|critical.*error", StatusKind::FatalError, "fatal error", Tier::Failure),
    (
        r"command.*not.*found|no such file",
        StatusKind::CommandError,
        "command or file not found",
        Tier::Failure,
    ),
    (
        r"permission.*denied|access.*denied",
        StatusKind::PermissionDenied,
        "permission denied",
        Tier::Failure,
    ),
    (r"out of memory|memory.*error", StatusKind::MemoryError, "out of memory", Tier::Failure),
    (
        r"successfully.*completed|task.*completed.*successfully",
        StatusKind::Success,
        "task completed successfully",
        Tier::Success,
    ),
    (r"tests?.*passed|all.*tests.*pass", StatusKind::TestSuccess, "tests passed", Tier::Success),
    (
        r"build.*successful|compilation.*successful",
        StatusKind::BuildSuccess,
        "build successful",
        Tier::Success,
    ),
    (
        r"deployed.*successfully|deployment.*complete",
        StatusKind::DeploySuccess,
        "deployment complete",
        Tier::Success,
    ),
    (
        r"committed.*successfully|pushed.*successfully",
        StatusKind::GitSuccess,
        "changes committed",
        Tier::Success,
    ),
];

/// 编译后的规则表
pub static RULES: LazyLock<Vec<ClassificationRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        // 编译失败的规则会被丢弃，由 test_all_patterns_compile 保证全部可编译
        .filter_map(|(pattern, kind, description, tier)| {
            Regex::new(pattern).ok().map(|pattern| ClassificationRule {
                pattern,
                kind: *kind,
                description: *description,
                tier: *tier,
            })
        })
        .collect()
});

/// 在已小写的窗口中查找第一条匹配的规则
pub fn first_match(window_lower: &str) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|rule| rule.pattern.is_match(window_lower))
}
