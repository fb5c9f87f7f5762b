//! 统一的控制台抽象
//!
//! 模块自身不直接接触任何输出设备：宿主在加载时通过 [`set_console`]
//! 安装一个 [`Console`] 实现，之后日志系统的即时输出都经由它完成。
//! 未安装时输出被静默丢弃，日志仍然进入环形缓冲区。

use alloc::sync::Arc;
use core::fmt::{self, Write};

use crate::sync::SpinLock;

/// 宿主提供的字符输出设备
pub trait Console: Send + Sync {
    /// 输出一段字符串
    fn write_str(&self, s: &str);
}

/// 当前安装的控制台
static MAIN_CONSOLE: SpinLock<Option<Arc<dyn Console>>> = SpinLock::new(None);

/// 安装控制台，返回之前安装的实例
pub fn set_console(console: Arc<dyn Console>) -> Option<Arc<dyn Console>> {
    MAIN_CONSOLE.lock().replace(console)
}

/// 卸下控制台
pub fn clear_console() -> Option<Arc<dyn Console>> {
    MAIN_CONSOLE.lock().take()
}

/// 带锁的字符串输出
///
/// 整段输出在一个锁内完成，防止并发日志交错。
pub fn write_str(s: &str) {
    let guard = MAIN_CONSOLE.lock();
    if let Some(console) = guard.as_ref() {
        console.write_str(s);
    }
}

/// 控制台输出结构体（实现 Write trait，供日志系统使用）
pub struct Stdout;

impl Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        crate::console::write_str(s);
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        // 在锁内格式化，保证一次 write! 的输出不被其它调用者打断
        let guard = MAIN_CONSOLE.lock();
        let Some(console) = guard.as_ref() else {
            return Ok(());
        };

        struct UnlockedWriter<'a>(&'a dyn Console);
        impl Write for UnlockedWriter<'_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.write_str(s);
                Ok(())
            }
        }

        UnlockedWriter(console.as_ref()).write_fmt(args)
    }
}
