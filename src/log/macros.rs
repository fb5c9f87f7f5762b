//! `pr_*` 日志宏
//!
//! 用法与 Linux 内核一致，例如 `pr_info!("huh: {} bytes", n)`。
//! 级别被过滤时格式化参数不会被求值。

#[doc(hidden)]
#[macro_export]
macro_rules! __pr_at {
    ($level:ident, $($arg:tt)*) => {
        if $crate::log::enabled($crate::log::LogLevel::$level) {
            $crate::log::emit($crate::log::LogLevel::$level, format_args!($($arg)*));
        }
    };
}

/// 以 `Emergency` 级别记录
#[macro_export]
macro_rules! pr_emerg {
    ($($arg:tt)*) => { $crate::__pr_at!(Emergency, $($arg)*) };
}

/// 以 `Alert` 级别记录
#[macro_export]
macro_rules! pr_alert {
    ($($arg:tt)*) => { $crate::__pr_at!(Alert, $($arg)*) };
}

/// 以 `Critical` 级别记录
#[macro_export]
macro_rules! pr_crit {
    ($($arg:tt)*) => { $crate::__pr_at!(Critical, $($arg)*) };
}

/// 以 `Error` 级别记录
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)*) => { $crate::__pr_at!(Error, $($arg)*) };
}

/// 以 `Warning` 级别记录
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)*) => { $crate::__pr_at!(Warning, $($arg)*) };
}

/// 以 `Notice` 级别记录
#[macro_export]
macro_rules! pr_notice {
    ($($arg:tt)*) => { $crate::__pr_at!(Notice, $($arg)*) };
}

/// 以 `Info` 级别记录
#[macro_export]
macro_rules! pr_info {
    ($($arg:tt)*) => { $crate::__pr_at!(Info, $($arg)*) };
}

/// 以 `Debug` 级别记录
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)*) => { $crate::__pr_at!(Debug, $($arg)*) };
}
