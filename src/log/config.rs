//! 日志子系统的编译期参数

use super::level::LogLevel;

/// 环形缓冲区占用的字节数
pub const GLOBAL_LOG_BUFFER_SIZE: usize = 16 * 1024;

/// 单条消息的最大字节数，超出部分在字符边界处截断
pub const MAX_LOG_MESSAGE_LENGTH: usize = 256;

/// 默认记录级别
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// 默认回显到控制台的级别
pub const DEFAULT_CONSOLE_LEVEL: LogLevel = LogLevel::Warning;
