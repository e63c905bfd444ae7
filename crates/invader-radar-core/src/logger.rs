//! Minimal logger.
//!
//! Prints `[level elapsed] message` to stderr with an elapsed-time prefix,
//! enough to follow a scan without pulling in a logging framework. Install
//! it once at startup with [`init_with_level`] or [`init_from_env`].

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct ScanLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for ScanLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "[{:>5} {:8.3}s] {}",
            record.level(),
            elapsed,
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ScanLogger> = OnceLock::new();

/// Install the logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| ScanLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install the logger at the level named by the `INVADER_RADAR_LOG`
/// environment variable (`error`..`trace`), defaulting to `info`.
pub fn init_from_env() -> Result<(), log::SetLoggerError> {
    let level = std::env::var("INVADER_RADAR_LOG")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_with_level(level)
}

#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}
