//! pipeline::logging — terminal `slog` logger shared by pipeline observers.
//!
//! Only compiled with feature `obs_slog`.

use slog::Drain;

/// Build a non-blocking terminal logger.
///
/// Records are formatted by `slog_term::FullFormat` and written from a
/// background thread via `slog_async`. Pending records are flushed when the
/// last clone of the returned logger is dropped.
pub fn term_logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, slog::o!("component" => "steering_fit"))
}
