//! huh-proc
//!
//! 一个最小的 `/proc/huh` 伪文件：内核内存中只保存一条消息，任何调用者都可以
//! 覆盖写入或读取它。
//!
//! # 模块组织
//!
//! - [`msg`]: 消息存储（[`msg::MessageStore`]）和读写处理函数
//! - [`fs`]: 伪文件系统宿主（proc 目录、表项、打开会话）与错误码
//! - [`module`]: 模块的加载/卸载生命周期
//! - [`log`]: 内核风格的 `pr_*` 日志子系统
//! - [`sync`]: 自旋锁
//! - [`tool`]: 用户态缓冲区拷贝原语
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod log;

pub mod config;
pub mod console;
pub mod fs;
pub mod module;
pub mod msg;
pub mod sync;
pub mod tool;

#[cfg(test)]
#[macro_use]
mod test;

pub use fs::FsError;
pub use module::{HuhModule, module_exit, module_init};
pub use msg::{MessageStore, MsgHandlers};
