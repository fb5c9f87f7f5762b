//! 日志级别
//!
//! 与内核的 `KERN_*` 一一对应，数值越小越紧急。

/// 日志级别
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// 系统不可用
    Emergency = 0,
    /// 必须立即处理
    Alert = 1,
    /// 严重错误
    Critical = 2,
    /// 一般错误
    Error = 3,
    /// 警告
    Warning = 4,
    /// 正常但值得注意
    Notice = 5,
    /// 提示信息
    Info = 6,
    /// 调试信息
    Debug = 7,
}

const BY_VALUE: [LogLevel; 8] = [
    LogLevel::Emergency,
    LogLevel::Alert,
    LogLevel::Critical,
    LogLevel::Error,
    LogLevel::Warning,
    LogLevel::Notice,
    LogLevel::Info,
    LogLevel::Debug,
];

/// 恢复默认颜色
pub(super) const ANSI_RESET: &str = "\x1b[0m";

impl LogLevel {
    /// 从原始数值转换，超出范围的按 `Debug` 处理
    pub const fn from_u8(raw: u8) -> Self {
        if (raw as usize) < BY_VALUE.len() {
            BY_VALUE[raw as usize]
        } else {
            LogLevel::Debug
        }
    }

    /// 输出时使用的级别标签
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Emergency => "[EMERG]",
            LogLevel::Alert => "[ALERT]",
            LogLevel::Critical => "[CRIT]",
            LogLevel::Error => "[ERR]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Notice => "[NOTICE]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
        }
    }

    pub(super) const fn ansi_color(self) -> &'static str {
        match self {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical => "\x1b[1;31m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Notice => "\x1b[1;37m",
            LogLevel::Info => "\x1b[37m",
            LogLevel::Debug => "\x1b[90m",
        }
    }
}
