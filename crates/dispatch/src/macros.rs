//! Statement macros: the one-line front ends over [`Statement`](crate::Statement).

/// Emits one warning-classified statement with `format!` syntax.
///
/// The composed text is flushed, with a trailing newline, when the macro
/// expression ends.
///
/// # Examples
///
/// ```
/// use dispatch::warning_log;
///
/// warning_log!("unexpected frame size: {}", 512);
/// ```
#[macro_export]
macro_rules! warning_log {
    ($($arg:tt)*) => {{
        use ::std::fmt::Write as _;
        let mut statement = $crate::Statement::warning();
        let _ = ::std::write!(statement, $($arg)*);
    }};
}

/// Emits one debug-classified statement with `format!` syntax.
///
/// # Examples
///
/// ```
/// use dispatch::debug_log;
///
/// debug_log!("cache warmed with {} entries", 1024);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        use ::std::fmt::Write as _;
        let mut statement = $crate::Statement::debug();
        let _ = ::std::write!(statement, $($arg)*);
    }};
}
