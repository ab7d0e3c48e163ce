//! Coursea binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;
use std::time::SystemTime;

use clap::Parser;

use coursea::{app, args, theme};

struct CourseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for CourseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        w.write_str(&coursea::util::log_timestamp(secs))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Output:
/// - Logs go to `~/.config/coursea/logs/coursea.log`, or stderr if the file cannot be opened.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("coursea.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CourseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CourseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = theme::settings();
    let source = args::resolve_catalog_source(&cli, &settings);
    tracing::info!(catalog = %source, "Coursea starting");

    if cli.is_headless() {
        let code = args::handle_query(&cli, &source, &settings).await;
        tracing::info!(code, "Coursea exited");
        std::process::exit(code);
    }

    if let Err(err) = app::run(source, settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Coursea exited");
}
