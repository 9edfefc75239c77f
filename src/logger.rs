//! The injectable logger interface (Cargo feature `logging`).
//!
//! The core never owns a transport: callers hand the arena a `&dyn Logger`
//! at init time, and the four severity methods take pre-formatted
//! [`core::fmt::Arguments`] rather than an owned `String`, so no allocation
//! and no ownership of the caller's interpolation arguments ever crosses
//! the boundary.

use core::fmt::Arguments;

/// Four severity levels a caller can observe the arena through.
pub trait Logger {
    fn debug(&self, args: Arguments<'_>);
    fn info(&self, args: Arguments<'_>);
    fn warning(&self, args: Arguments<'_>);
    fn error(&self, args: Arguments<'_>);
}

/// A [`Logger`] that discards everything. Used when a caller wants the
/// `logging` feature's call sites compiled in but has nowhere to send the
/// output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    #[inline]
    fn debug(&self, _args: Arguments<'_>) {}
    #[inline]
    fn info(&self, _args: Arguments<'_>) {}
    #[inline]
    fn warning(&self, _args: Arguments<'_>) {}
    #[inline]
    fn error(&self, _args: Arguments<'_>) {}
}

/// Default logger [`Arena::init`](crate::arena::Arena::init) uses when no
/// logger is supplied explicitly.
pub(crate) static NOOP_LOGGER: NoopLogger = NoopLogger;

/// A [`Logger`] that forwards to the `log` crate's global logger, under
/// the same target as the rest of this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrate;

impl Logger for LogCrate {
    fn debug(&self, args: Arguments<'_>) {
        log::debug!("{args}");
    }

    fn info(&self, args: Arguments<'_>) {
        log::info!("{args}");
    }

    fn warning(&self, args: Arguments<'_>) {
        log::warn!("{args}");
    }

    fn error(&self, args: Arguments<'_>) {
        log::error!("{args}");
    }
}

/// Calls `$level` on `$logger` with `format_args!($fmt, $($arg)*)`,
/// without evaluating the arguments unless `$logger` is actually used.
macro_rules! log_at {
    ($logger:expr, $level:ident, $($arg:tt)*) => {
        $logger.$level(format_args!($($arg)*))
    };
}

pub(crate) use log_at;
