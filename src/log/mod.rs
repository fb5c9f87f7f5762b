//! 内核风格的日志
//!
//! `pr_*` 宏写入全局 [`LogCore`]：按全局级别过滤，存进无锁环形缓冲区，
//! 达到控制台级别的同时回显到宿主控制台。

#[macro_use]
mod macros;

pub mod config;
pub mod context;
pub mod level;
pub mod log_core;
pub mod record;
mod ring;

#[cfg(test)]
mod tests;

pub use context::{ContextHooks, install_hooks};
pub use level::LogLevel;
pub use log_core::LogCore;
pub use record::LogRecord;

static GLOBAL_LOG: LogCore = LogCore::default();

#[doc(hidden)]
#[inline]
pub fn enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.enabled(level)
}

#[doc(hidden)]
pub fn emit(level: LogLevel, args: core::fmt::Arguments) {
    GLOBAL_LOG.log(level, args);
}

/// 全局记录级别
pub fn global_level() -> LogLevel {
    GLOBAL_LOG.level()
}

/// 设置全局记录级别
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG.set_level(level);
}

/// 全局回显级别
pub fn console_level() -> LogLevel {
    GLOBAL_LOG.console_level()
}

/// 设置全局回显级别
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG.set_console_level(level);
}
