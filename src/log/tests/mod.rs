use super::level::LogLevel;
use super::log_core::LogCore;
use crate::{kassert, test_case};

// ========== 测试辅助宏 ==========

/// 测试专用日志宏
///
/// 模拟生产宏的行为，但操作独立的 LogCore 实例
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.log($level, format_args!($($arg)*))
    };
}
