//! Logging collaborator injected into a checker.
//!
//! The checker announces every node it visits at TRACE and summarizes the visited
//! identities at DEBUG once per call. What happens to those lines is up to the [`Logger`];
//! it never influences the outcome of a check.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

pub use tracing::Level;

pub trait Logger: Send + Sync {
    fn emit(&self, level: Level, args: fmt::Arguments<'_>);
}

/// Forwards to `tracing` under the `nilcheck` target. This is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        if level == Level::TRACE {
            tracing::trace!(target: "nilcheck", "{}", args)
        } else if level == Level::DEBUG {
            tracing::debug!(target: "nilcheck", "{}", args)
        } else if level == Level::INFO {
            tracing::info!(target: "nilcheck", "{}", args)
        } else if level == Level::WARN {
            tracing::warn!(target: "nilcheck", "{}", args)
        } else {
            tracing::error!(target: "nilcheck", "{}", args)
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn emit(&self, _level: Level, _args: fmt::Arguments<'_>) {}
}

/// Keeps every emitted line in memory. Handy for asserting on what a checker reported.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self { Self::default() }

    // A writer that panicked mid-push still leaves a usable log behind.
    fn log(&self) -> MutexGuard<'_, Vec<(Level, String)>> { self.lines.lock().unwrap_or_else(PoisonError::into_inner) }

    pub fn lines(&self) -> Vec<(Level, String)> { self.log().clone() }

    /// Lines emitted at exactly `level`.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.log().iter().filter(|(l, _)| *l == level).map(|(_, line)| line.clone()).collect()
    }

    pub fn clear(&self) { self.log().clear() }
}

impl Logger for RecordingLogger {
    fn emit(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log().push((level, args.to_string()));
    }
}
