use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

fn filter_directives(log_config: &LogConfig) -> String {
    let mut directives = log_config.level.clone();

    if let Some(ext_levels) = &log_config.ext_level {
        let mut targets: Vec<_> = ext_levels.iter().collect();
        targets.sort();
        for (target, level) in targets {
            directives.push_str(&format!(",{}={}", target, level));
        }
    }
    directives
}

/// Installs the global subscriber. Console output goes to stderr so that
/// commands printing to stdout stay pipeable.
///
/// The returned guard flushes the file appender and must be held until exit.
pub fn init_logging(log_config: &LogConfig) -> Option<WorkerGuard> {
    let mut guard = None;

    let file_layer = if log_config.file_enabled {
        log_config.dir.as_ref().map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "mongoseed.log");
            let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(file_guard);

            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true)
                .boxed()
        })
    } else {
        None
    };

    let console_layer = match log_config.console_format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        "pretty" => fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        _ => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
