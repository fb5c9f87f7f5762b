//! 单条日志记录

use core::fmt::{self, Write};

use super::config::MAX_LOG_MESSAGE_LENGTH;
use super::context::LogContext;
use super::level::LogLevel;

/// 一条已格式化的日志
///
/// 消息以定长字节数组保存，记录本身是 `Copy` 的，放进环形缓冲区时不需要分配。
#[derive(Clone, Copy)]
pub struct LogRecord {
    level: LogLevel,
    cpu_id: usize,
    task_id: u32,
    timestamp: usize,
    len: usize,
    text: [u8; MAX_LOG_MESSAGE_LENGTH],
}

impl LogRecord {
    pub(super) const fn blank() -> Self {
        Self {
            level: LogLevel::Debug,
            cpu_id: 0,
            task_id: 0,
            timestamp: 0,
            len: 0,
            text: [0; MAX_LOG_MESSAGE_LENGTH],
        }
    }

    pub(super) fn capture(level: LogLevel, ctx: &LogContext, args: fmt::Arguments) -> Self {
        let mut record = Self {
            level,
            cpu_id: ctx.cpu_id,
            task_id: ctx.task_id,
            timestamp: ctx.timestamp,
            ..Self::blank()
        };
        let mut out = Truncating {
            buf: &mut record.text,
            used: 0,
        };
        // 截断不算错误，格式化失败时保留已写入的部分
        let _ = out.write_fmt(args);
        record.len = out.used;
        record
    }

    /// 消息文本
    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.text[..self.len]).unwrap_or_default()
    }

    /// 级别
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// 产生日志的 CPU
    pub fn cpu_id(&self) -> usize {
        self.cpu_id
    }

    /// 产生日志的任务
    pub fn task_id(&self) -> u32 {
        self.task_id
    }

    /// 产生日志时的时间戳
    pub fn timestamp(&self) -> usize {
        self.timestamp
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>12}] {} cpu{} task{}: {}",
            self.timestamp,
            self.level.tag(),
            self.cpu_id,
            self.task_id,
            self.message()
        )
    }
}

/// 写满即停的格式化目标，只在 UTF-8 字符边界处截断
struct Truncating<'a> {
    buf: &'a mut [u8],
    used: usize,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.used;
        let take = if s.len() <= room {
            s.len()
        } else {
            (0..=room).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
        };
        self.buf[self.used..self.used + take].copy_from_slice(&s.as_bytes()[..take]);
        self.used += take;
        Ok(())
    }
}
