use crate::lib::error::NrResult;
use anyhow::Context;
use slog::{Drain, Level, Logger};
use std::fs::File;
use std::path::PathBuf;

/// The logging mode to use.
pub enum LoggingMode {
    /// The default mode for logging; output without any decoration, to STDERR.
    Stderr,

    /// Tee logging to a file (in addition to STDERR).
    Tee(PathBuf),

    /// Output logs to a file only.
    File(PathBuf),
}

/// Plain console output: the message alone, with a lowercase `error:`-style
/// prefix for warnings and worse.
pub struct NrFormat<D: slog_term::Decorator> {
    decorator: D,
}

impl<D: slog_term::Decorator> NrFormat<D> {
    pub fn new(decorator: D) -> NrFormat<D> {
        NrFormat { decorator }
    }
}

fn level_prefix(level: Level) -> Option<&'static str> {
    match level {
        Level::Critical => Some("critical"),
        Level::Error => Some("error"),
        Level::Warning => Some("warning"),
        Level::Info | Level::Debug | Level::Trace => None,
    }
}

impl<D: slog_term::Decorator> slog::Drain for NrFormat<D> {
    type Ok = ();
    type Err = std::io::Error;

    fn log(
        &self,
        record: &slog::Record<'_>,
        values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.decorator.with_record(record, values, |out| {
            if let Some(prefix) = level_prefix(record.level()) {
                out.start_level()?;
                write!(out, "{prefix}:")?;
                out.start_whitespace()?;
                write!(out, " ")?;
            }
            out.start_msg()?;
            writeln!(out, "{}", record.msg())?;
            out.flush()
        })
    }
}

fn create_drain(mode: LoggingMode) -> NrResult<Logger> {
    Ok(match mode {
        LoggingMode::Stderr => {
            let decorator = slog_term::TermDecorator::new().build();
            let drain = NrFormat::new(decorator).fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        LoggingMode::File(out) => {
            let file = File::create(&out)
                .with_context(|| format!("Couldn't open log file {}.", out.display()))?;
            let decorator = slog_term::PlainDecorator::new(file);
            let drain = slog_term::FullFormat::new(decorator).build().fuse();
            Logger::root(slog_async::Async::new(drain).build().fuse(), slog::o!())
        }
        // A Tee mode is basically 2 drains duplicated.
        LoggingMode::Tee(out) => Logger::root(
            slog::Duplicate::new(
                create_drain(LoggingMode::Stderr)?,
                create_drain(LoggingMode::File(out))?,
            )
            .fuse(),
            slog::o!(),
        ),
    })
}

/// Create a root logger.
/// The verbose_level can be negative, in which case it's a quiet mode which removes warnings,
/// then errors entirely.
pub fn create_root_logger(verbose_level: i64, mode: LoggingMode) -> NrResult<Logger> {
    let log_level = match verbose_level {
        -3 => Level::Critical,
        -2 => Level::Error,
        -1 => Level::Warning,
        0 => Level::Info,
        1 => Level::Debug,
        x if x > 0 => Level::Trace,
        _ => return Ok(Logger::root(slog::Discard, slog::o!())),
    };

    let drain = slog::LevelFilter::new(create_drain(mode)?, log_level).fuse();
    Ok(Logger::root(
        drain,
        slog::o!("version" => env!("CARGO_PKG_VERSION")),
    ))
}
