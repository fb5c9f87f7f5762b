//! 日志状态
//!
//! [`LogCore`] 把环形缓冲区和两个级别阈值放在一起。全局只有一个实例，
//! 测试可以各自创建独立的实例。

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU8, Ordering};

use super::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};
use super::context;
use super::level::{ANSI_RESET, LogLevel};
use super::record::LogRecord;
use super::ring::LogRing;
use crate::console::Stdout;

/// 日志缓冲区与过滤阈值
pub struct LogCore {
    ring: LogRing,
    /// 不高于该级别的日志进入缓冲区
    level: AtomicU8,
    /// 不高于该级别的日志同时回显到控制台
    console_level: AtomicU8,
}

impl LogCore {
    /// 使用默认级别（记录 Info，回显 Warning）
    pub const fn default() -> Self {
        Self::with_levels(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL)
    }

    /// 使用指定的记录级别和回显级别
    pub fn new(level: LogLevel, console_level: LogLevel) -> Self {
        Self::with_levels(level, console_level)
    }

    const fn with_levels(level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            ring: LogRing::new(),
            level: AtomicU8::new(level as u8),
            console_level: AtomicU8::new(console_level as u8),
        }
    }

    /// 记录一条日志
    pub fn log(&self, level: LogLevel, args: fmt::Arguments) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord::capture(level, &context::collect_context(), args);
        self.ring.push(&record);
        if level <= self.console_level() {
            echo(&record);
        }
    }

    /// 取出最旧的一条未读日志
    pub fn pop(&self) -> Option<LogRecord> {
        self.ring.pop()
    }

    /// 未读日志条数
    pub fn pending(&self) -> usize {
        self.ring.pending()
    }

    /// 因缓冲区满被覆盖的日志条数
    pub fn dropped(&self) -> usize {
        self.ring.dropped()
    }

    /// `level` 是否会被记录
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level()
    }

    /// 当前记录级别
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire))
    }

    /// 设置记录级别
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// 当前回显级别
    pub fn console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Acquire))
    }

    /// 设置回显级别
    pub fn set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Release);
    }
}

/// 回显到控制台，输出失败不影响调用者
fn echo(record: &LogRecord) {
    let level = record.level();
    let _ = writeln!(
        Stdout,
        "{}{} {}{}",
        level.ansi_color(),
        level.tag(),
        record.message(),
        ANSI_RESET
    );
}
