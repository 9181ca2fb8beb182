use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::Targets, fmt::format::FmtSpan, layer::SubscriberExt};

/// Install the global logger, writing to stdout. Logs are flushed when the
/// returned guard is dropped.
pub fn setup_logger(debug: bool) -> Result<WorkerGuard, SetGlobalDefaultError> {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    let filter = Targets::new()
        .with_default(level)
        .with_target("winit", Level::WARN)
        .with_target("glutin", Level::WARN)
        .with_target("glutin_winit", Level::WARN);

    // stdout logger
    let (std_writer, std_guard) = tracing_appender::non_blocking(std::io::stdout());
    let std_logger = tracing_subscriber::fmt::layer()
        .with_writer(std_writer)
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    // Register loggers
    let collector = tracing_subscriber::registry().with(std_logger).with(filter);

    set_global_default(collector)?;

    Ok(std_guard)
}
