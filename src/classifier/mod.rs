//! 完成状态分析 - 根据对话记录末尾内容判断会话结束状态
//!
//! 分析流程：
//! 1. 展开路径，文件不存在时返回 `unknown`
//! 2. 读取内容，失败时返回 `error`
//! 3. 取末尾 500 字符并小写
//! 4. 按优先级依次匹配规则表（严重错误 → 需要交互 → 一般错误 → 成功），第一个命中即返回
//! 5. 都未命中时返回 `completed`
//!
//! 分析永远不会返回错误，所有失败都映射为状态结果。

pub mod evidence;
pub mod rules;
pub mod status;
pub mod transcript;

pub use evidence::{extract_recent_lines, NO_EVIDENCE};
pub use rules::{ClassificationRule, Tier, RULES};
pub use status::{StatusKind, Tone};
pub use transcript::{expand_home, TranscriptWindow, WINDOW_CHARS};

use serde::Serialize;
use tracing::debug;

/// 默认标题（无法判断具体状态时）
pub const DEFAULT_TITLE: &str = "Claude completion response";
/// 对话记录不存在
pub const TRANSCRIPT_UNAVAILABLE: &str = "transcript unavailable";
/// 分析失败时的标题
pub const ANALYSIS_FAILED_TITLE: &str = "❌ analysis failed";

/// 分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub kind: StatusKind,
    pub title: String,
    pub detail: String,
}

impl Classification {
    pub fn new(kind: StatusKind, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// 分析对话记录判断完成状态
pub fn classify(transcript_path: &str) -> Classification {
    let path = expand_home(transcript_path);
    if !path.exists() {
        debug!(path = %path.display(), "Transcript not found");
        return Classification::new(StatusKind::Unknown, DEFAULT_TITLE, TRANSCRIPT_UNAVAILABLE);
    }

    match TranscriptWindow::load(&path) {
        Ok(window) => classify_window(&window),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Transcript read failed");
            Classification::new(
                StatusKind::Error,
                ANALYSIS_FAILED_TITLE,
                format!("unable to analyze transcript: {:#}", e),
            )
        }
    }
}

/// 分析已经载入的内容
pub fn classify_text(content: &str) -> Classification {
    classify_window(&TranscriptWindow::new(content.to_string()))
}

fn classify_window(window: &TranscriptWindow) -> Classification {
    match rules::first_match(&window.recent_lower) {
        Some(rule) => {
            debug!(kind = %rule.kind, pattern = %rule.pattern, "Transcript matched rule");
            Classification::new(
                rule.kind,
                rule.title(),
                extract_recent_lines(&window.content, rule.evidence_lines()),
            )
        }
        None => Classification::new(StatusKind::Completed, DEFAULT_TITLE, NO_EVIDENCE),
    }
}
