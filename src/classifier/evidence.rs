//! 证据提取 - 从对话记录末尾挑选有意义的行

/// 没有可用证据时的提示
pub const NO_EVIDENCE: &str = "check terminal for details";

/// 短于该长度（trim 后）的行被视为噪音
const MIN_LINE_LEN: usize = 6;

/// 取原始内容最后 `max_lines` 条有意义的行（trim 后至少 6 个字符）
///
/// 从末尾向前扫描，保持原有的上下顺序，用换行拼接。
pub fn extract_recent_lines(content: &str, max_lines: usize) -> String {
    let mut lines: Vec<&str> = content
        .lines()
        .rev()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_LEN)
        .take(max_lines)
        .collect();

    if lines.is_empty() {
        return NO_EVIDENCE.to_string();
    }

    lines.reverse();
    lines.join("\n")
}
