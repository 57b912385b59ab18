//! 对话记录读取 - 路径展开、容错解码、末尾窗口

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 参与匹配的末尾字符数
pub const WINDOW_CHARS: usize = 500;

/// 单次分析用的对话记录视图
#[derive(Debug, Clone)]
pub struct TranscriptWindow {
    /// 完整原始内容（用于提取证据）
    pub content: String,
    /// 末尾窗口，已小写（用于匹配）
    pub recent_lower: String,
}

impl TranscriptWindow {
    pub fn new(content: String) -> Self {
        let recent_lower = tail_chars(&content, WINDOW_CHARS).to_lowercase();
        Self {
            content,
            recent_lower,
        }
    }

    /// 读取文件并构建窗口
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let content = decode_transcript(bytes)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        Ok(Self::new(content))
    }
}

/// 展开 `~` 和 `~/...`
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// 末尾 `n` 个字符（按字符而非字节切分）
pub fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// UTF-8 解码；写入方可能正写到一半，末尾不完整的多字节序列直接丢弃
fn decode_transcript(bytes: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let utf8_error = e.utf8_error();
            if utf8_error.error_len().is_some() {
                return Err(e);
            }
            let valid_up_to = utf8_error.valid_up_to();
            let mut bytes = e.into_bytes();
            bytes.truncate(valid_up_to);
            String::from_utf8(bytes)
        }
    }
}
