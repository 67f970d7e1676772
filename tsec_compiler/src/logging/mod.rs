//! Minimal structured logging used across the compiler and scanner.
//!
//! Mirrors the teacher's hand-rolled `logging` module (codes + leveled
//! macros) rather than reaching for an external logging facade: the
//! teacher never took a dependency on `log`/`tracing` either, it wrote
//! its own thin event layer. Ours is the same idea at a tenth of the
//! size, since the core engine itself only needs diagnostics, not the
//! teacher's SIEM-oriented event collector.

#[macro_use]
mod macros;
pub mod codes;

use crate::utils::Span;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

static MIN_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Raise or lower the minimum level that gets written to stderr.
pub fn set_min_level(level: Level) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

fn enabled(level: Level) -> bool {
    level as u8 >= MIN_LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn emit(level: Level, message: &str, span: Option<Span>, context: &[(&str, &str)]) {
    emit_coded(level, "", message, span, context)
}

#[doc(hidden)]
pub fn emit_coded(level: Level, code: &str, message: &str, span: Option<Span>, context: &[(&str, &str)]) {
    if !enabled(level) {
        return;
    }
    let tag = match level {
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Warning => "warn",
        Level::Error => "error",
    };
    let mut line = format!("[{tag}]");
    if !code.is_empty() {
        line.push_str(&format!(" {code}"));
    }
    line.push_str(&format!(" {message}"));
    if let Some(span) = span {
        line.push_str(&format!(" ({span})"));
    }
    for (k, v) in context {
        line.push_str(&format!(" {k}={v}"));
    }
    eprintln!("{line}");
}
