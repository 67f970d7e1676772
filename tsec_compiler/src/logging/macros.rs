//! Logging macros used throughout the compiler and scanner crates.
//!
//! These are deliberately small wrappers around `eprintln!` rather than a
//! pulled-in logging facade: the engine has no business dictating how a
//! host process wires up its log sink, and the only consumer inside this
//! workspace is developer diagnostics during parsing/scanning.

#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::Level::Debug, $message, None, &[])
    };
    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let ctx: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let ctx_refs: Vec<(&str, &str)> = ctx.iter().map(|(k, v)| (*k, v.as_str())).collect();
            $crate::logging::emit($crate::logging::Level::Debug, $message, None, &ctx_refs)
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::Level::Info, $message, None, &[])
    };
    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        {
            let ctx: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let ctx_refs: Vec<(&str, &str)> = ctx.iter().map(|(k, v)| (*k, v.as_str())).collect();
            $crate::logging::emit($crate::logging::Level::Info, $message, None, &ctx_refs)
        }
    };
}

#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr, span = $span:expr) => {
        $crate::logging::emit_coded($crate::logging::Level::Warning, $code, $message, Some($span), &[])
    };
    ($code:expr, $message:expr) => {
        $crate::logging::emit_coded($crate::logging::Level::Warning, $code, $message, None, &[])
    };
}

#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr) => {
        $crate::logging::emit_coded($crate::logging::Level::Error, $code, $message, Some($span), &[])
    };
    ($code:expr, $message:expr) => {
        $crate::logging::emit_coded($crate::logging::Level::Error, $code, $message, None, &[])
    };
}
