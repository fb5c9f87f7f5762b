//! 测试工具
//!
//! 提供 `test_case!` / `kassert!`，在标准测试框架下运行：
//! 失败的断言先被记录，用例结束时统一报告并使该用例失败。

use alloc::string::String;
use alloc::sync::Arc;
use std::sync::{Mutex, MutexGuard};

use crate::console::{self, Console};
use crate::sync::SpinLock;

/// 把所有输出追加到内存里的控制台
struct CaptureConsole {
    out: SpinLock<String>,
}

impl Console for CaptureConsole {
    fn write_str(&self, s: &str) {
        self.out.lock().push_str(s);
    }
}

/// 全局控制台同一时刻只属于一个用例
static CONSOLE_OWNER: Mutex<()> = Mutex::new(());

/// 安装中的捕获控制台，析构时恢复原来的控制台
pub struct ConsoleCapture {
    console: Arc<CaptureConsole>,
    previous: Option<Arc<dyn Console>>,
    _owner: MutexGuard<'static, ()>,
}

impl ConsoleCapture {
    /// 到目前为止捕获的输出
    pub fn output(&self) -> String {
        self.console.out.lock().clone()
    }
}

impl Drop for ConsoleCapture {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(prev) => {
                console::set_console(prev);
            }
            None => {
                console::clear_console();
            }
        }
    }
}

/// 安装捕获控制台；其它需要全局控制台的用例会等待它释放
pub fn capture_console() -> ConsoleCapture {
    let owner = CONSOLE_OWNER.lock().unwrap_or_else(|e| e.into_inner());
    let console = Arc::new(CaptureConsole {
        out: SpinLock::new(String::new()),
    });
    let previous = console::set_console(console.clone());
    ConsoleCapture {
        console,
        previous,
        _owner: owner,
    }
}
