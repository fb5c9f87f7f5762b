//! 打开会话
//!
//! 每次打开表项得到一个 [`File`]。游标保存在会话里，读写方法因此不带偏移参数；
//! 同一会话在多个线程间共享时，游标更新由会话自己串行化。

use crate::fs::FsError;
use crate::tool::{UserSink, UserSource};

/// 一个打开的会话
pub trait File: Send + Sync {
    /// 打开时是否请求了读权限
    fn readable(&self) -> bool;

    /// 打开时是否请求了写权限
    fn writable(&self) -> bool;

    /// 从读游标处读到 `buf`，返回读到的字节数，0 表示没有更多数据
    fn read(&self, buf: &mut dyn UserSink) -> Result<usize, FsError>;

    /// 把 `buf` 交给写处理函数，返回消费的字节数
    fn write(&self, buf: &dyn UserSource) -> Result<usize, FsError>;

    /// 移动读游标，返回新的位置；结果为负或溢出时返回 `InvalidArgument`
    fn lseek(&self, offset: isize, whence: SeekWhence) -> Result<usize, FsError>;

    /// 当前读游标
    fn offset(&self) -> usize;

    /// 打开标志
    fn flags(&self) -> OpenFlags;
}

/// `lseek` 的基准位置（`SEEK_SET` / `SEEK_CUR` / `SEEK_END`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekWhence {
    /// 相对开头
    Set,
    /// 相对当前位置
    Cur,
    /// 相对末尾
    End,
}

bitflags::bitflags! {
    /// 打开标志，只保留访问模式位
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// 只读
        const O_RDONLY = 0o0;
        /// 只写
        const O_WRONLY = 0o1;
        /// 读写
        const O_RDWR = 0o2;
        /// 访问模式掩码
        const O_ACCMODE = 0o3;
    }
}

impl OpenFlags {
    fn access_mode(&self) -> u32 {
        self.bits() & Self::O_ACCMODE.bits()
    }

    /// 访问模式允许读（`O_RDONLY` 或 `O_RDWR`）
    pub fn readable(&self) -> bool {
        let mode = self.access_mode();
        mode == Self::O_RDONLY.bits() || mode == Self::O_RDWR.bits()
    }

    /// 访问模式允许写（`O_WRONLY` 或 `O_RDWR`）
    pub fn writable(&self) -> bool {
        let mode = self.access_mode();
        mode == Self::O_WRONLY.bits() || mode == Self::O_RDWR.bits()
    }
}
