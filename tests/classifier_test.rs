//! 完成状态分析测试 - 基于临时对话记录文件

use claude_notifier::classifier::{DEFAULT_TITLE, NO_EVIDENCE, TRANSCRIPT_UNAVAILABLE, WINDOW_CHARS};
use claude_notifier::{classify, Classification, StatusKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn transcript(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn classify_file(file: &NamedTempFile) -> Classification {
    classify(file.path().to_str().unwrap())
}

#[test]
fn test_tests_passed_example() {
    let file = transcript("Running cargo test...\nrunning 42 tests\n...Tests passed, 42/42\n");
    let result = classify_file(&file);

    assert_eq!(result.kind, StatusKind::TestSuccess);
    assert!(result.title.contains('✅'));
    assert!(result.detail.contains("...Tests passed, 42/42"));
}

#[test]
fn test_critical_error_never_reported_as_success() {
    let cases = [
        "API_ERROR: upstream overloaded",
        "Authentication failed for token",
        "Rate limit exceeded, retry later",
        "Too many requests",
        "connection error while streaming",
        "Request timeout after 60s",
    ];

    for case in cases {
        let file = transcript(&format!("working on it\n{}\nall tests passed\n", case));
        let result = classify_file(&file);
        assert!(
            result.kind.is_critical(),
            "expected critical kind for {:?}, got {:?}",
            case,
            result.kind
        );
        assert!(result.title.starts_with("🚨"));
    }
}

#[test]
fn test_critical_tier_beats_success_tier() {
    let file = transcript("Build successful\nDeployment complete\nAPI Error: 500\n");
    assert_eq!(classify_file(&file).kind, StatusKind::ApiError);
}

#[test]
fn test_interaction_beats_generic_error_and_success() {
    let file = transcript("fatal error: linker failed\nbuild successful\nPress Enter to continue");
    let result = classify_file(&file);
    assert_eq!(result.kind, StatusKind::KeyRequired);
    assert!(result.kind.needs_interaction());
}

#[test]
fn test_generic_error_beats_success() {
    let file = transcript("tests passed\nerror: out of memory (allocating 4GB)");
    let result = classify_file(&file);
    assert_eq!(result.kind, StatusKind::MemoryError);
    assert_eq!(result.title, "❌ out of memory");
}

#[test]
fn test_each_tier_representative() {
    let cases = [
        ("permission required to write /etc/hosts", StatusKind::PermissionRequired),
        ("Please enter your password", StatusKind::CredentialsRequired),
        ("waiting for input from user", StatusKind::InputRequired),
        ("Critical error in scheduler", StatusKind::FatalError),
        ("cat: foo.txt: No such file or directory", StatusKind::CommandError),
        ("Access denied for user root", StatusKind::PermissionDenied),
        ("Task completed successfully", StatusKind::Success),
        ("Compilation successful", StatusKind::BuildSuccess),
        ("Deployed to prod successfully", StatusKind::DeploySuccess),
        ("Pushed successfully to origin/main", StatusKind::GitSuccess),
    ];

    for (content, expected) in cases {
        let file = transcript(content);
        assert_eq!(classify_file(&file).kind, expected, "content: {:?}", content);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.jsonl");
    assert_eq!(
        classify(path.to_str().unwrap()),
        Classification::new(StatusKind::Unknown, DEFAULT_TITLE, TRANSCRIPT_UNAVAILABLE)
    );
    assert_eq!(DEFAULT_TITLE, "Claude completion response");
    assert_eq!(TRANSCRIPT_UNAVAILABLE, "transcript unavailable");
}

#[test]
fn test_empty_and_whitespace_transcripts_fall_back() {
    for content in ["", "   \n\n\t  \n"] {
        let file = transcript(content);
        let result = classify_file(&file);
        assert_eq!(result.kind, StatusKind::Completed);
        assert_eq!(result.title, DEFAULT_TITLE);
        assert_eq!(result.detail, NO_EVIDENCE);
        assert_eq!(NO_EVIDENCE, "check terminal for details");
    }
}

#[test]
fn test_evidence_respects_line_count_and_length() {
    let mut content = String::new();
    for i in 0..10 {
        content.push_str(&format!("compiling crate number {}\nok\n\n", i));
    }
    content.push_str("Build successful\n");

    let file = transcript(&content);
    let result = classify_file(&file);

    assert_eq!(result.kind, StatusKind::BuildSuccess);
    let lines: Vec<&str> = result.detail.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.trim().chars().count() >= 6));
    assert_eq!(lines.last(), Some(&"Build successful"));
}

#[test]
fn test_error_evidence_uses_five_lines() {
    let mut content: String = (0..8).map(|i| format!("step {} finished\n", i)).collect();
    content.push_str("fatal error: cannot continue\n");

    let file = transcript(&content);
    let result = classify_file(&file);

    assert_eq!(result.kind, StatusKind::FatalError);
    assert_eq!(result.detail.lines().count(), 5);
}

#[test]
fn test_short_lines_are_dropped_from_evidence() {
    let file = transcript("ok\nyes\nAPI\nerror\n");
    let result = classify_file(&file);
    // "api\nerror" 跨行，不构成 "api error"
    assert_eq!(result.kind, StatusKind::Completed);

    let file = transcript("ok\nyes\napi error\n");
    let result = classify_file(&file);
    assert_eq!(result.kind, StatusKind::ApiError);
    assert_eq!(result.detail, "api error");

    let file = transcript("ok\npass\ntests passed");
    let result = classify_file(&file);
    assert_eq!(result.kind, StatusKind::TestSuccess);
    assert_eq!(result.detail, "tests passed");
}

#[test]
fn test_pattern_outside_window_is_ignored() {
    let content = format!("API Error: 529\n{}\n", "z".repeat(WINDOW_CHARS));
    let file = transcript(&content);
    assert_eq!(classify_file(&file).kind, StatusKind::Completed);
}

#[test]
fn test_invalid_utf8_is_error_kind() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"build \xc3\x28 successful").unwrap();

    let result = classify_file(&file);
    assert_eq!(result.kind, StatusKind::Error);
    assert!(result.detail.starts_with("unable to analyze transcript"));
}
