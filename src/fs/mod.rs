//! 伪文件系统宿主
//!
//! 两层设计（与 VFS 相同）：
//! - **存储层**: [`proc::ProcEntry`] 绑定一对读写处理函数（[`proc::ProcOps`]），本身无状态
//! - **会话层**: [`File`] trait / [`proc::ProcFile`] 维护每次打开的游标
pub mod error;
pub mod file;
pub mod proc;


pub use error::FsError;
pub use file::{File, OpenFlags, SeekWhence};

bitflags::bitflags! {
    /// 文件权限（与 POSIX 兼容，仅保留权限位）
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FileMode: u32 {
        /// 属主可读
        const S_IRUSR = 0o400;
        /// 属主可写
        const S_IWUSR = 0o200;
        /// 属主可执行
        const S_IXUSR = 0o100;
        /// 同组可读
        const S_IRGRP = 0o040;
        /// 同组可写
        const S_IWGRP = 0o020;
        /// 同组可执行
        const S_IXGRP = 0o010;
        /// 其他用户可读
        const S_IROTH = 0o004;
        /// 其他用户可写
        const S_IWOTH = 0o002;
        /// 其他用户可执行
        const S_IXOTH = 0o001;
    }
}

impl FileMode {
    /// 非特权调用者（“其他用户”）是否可读
    pub fn other_can_read(&self) -> bool {
        self.contains(FileMode::S_IROTH)
    }

    /// 非特权调用者（“其他用户”）是否可写
    pub fn other_can_write(&self) -> bool {
        self.contains(FileMode::S_IWOTH)
    }
}
