//! Claude Notifier CLI
//!
//! 作为 Claude Code Stop hook 运行：从 stdin 读取 hook JSON，分析对话记录末尾，推送完成通知。

use std::process::ExitCode;

use clap::Parser;
use claude_notifier::cli::{notify_failure, run, NotifyArgs};
use claude_notifier::config::{load_env_file, NotifierConfig};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "claude-notifier")]
#[command(about = "Claude Code 完成通知 - 分析会话结果并推送到桌面、Bark、Server酱")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: NotifyArgs,
}

fn main() -> ExitCode {
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    // 例如: RUST_LOG=debug claude-notifier < hook.json
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("claude_notifier=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    let args = cli.args;

    load_env_file(args.env_file.as_deref());
    let mut config = NotifierConfig::from_env();
    if args.no_desktop {
        config = config.without_desktop();
    }

    match run(std::io::stdin().lock(), &args, &config) {
        Ok(report) => {
            println!("{}", report.render(args.json));
            ExitCode::SUCCESS
        }
        Err(e) => {
            notify_failure(&e, &config, args.dry_run);
            error!(error = %format!("{:#}", e), "Notifier failed");
            ExitCode::FAILURE
        }
    }
}
