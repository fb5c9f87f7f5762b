use alloc::string::String;
use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::fs::proc::{ProcFile, ProcOps};
use crate::fs::{FileMode, FsError, OpenFlags};

/// 全局 inode 号分配器
static NEXT_INODE_NO: AtomicUsize = AtomicUsize::new(1);

/// proc 目录中的一个表项
pub struct ProcEntry {
    name: String,
    mode: FileMode,
    ino: usize,
    ops: Arc<dyn ProcOps>,
    /// 表项已从目录中移除，已打开的会话此后的读写返回 `IoError`
    removed: AtomicBool,
}

impl ProcEntry {
    pub(super) fn new(name: String, mode: FileMode, ops: Arc<dyn ProcOps>) -> Self {
        Self {
            name,
            mode,
            ino: NEXT_INODE_NO.fetch_add(1, Ordering::Relaxed),
            ops,
            removed: AtomicBool::new(false),
        }
    }

    /// 表项名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 权限位
    pub fn mode(&self) -> FileMode {
        self.mode
    }

    /// inode 号
    pub fn ino(&self) -> usize {
        self.ino
    }

    /// 绑定的处理函数
    pub fn ops(&self) -> &Arc<dyn ProcOps> {
        &self.ops
    }

    /// 是否已从目录中移除
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Acquire)
    }

    pub(super) fn mark_removed(&self) {
        self.removed.store(true, Ordering::Release);
    }

    /// 以非特权调用者的身份打开表项
    ///
    /// 按 `flags` 的访问模式检查“其他用户”权限位。
    pub fn open(self: &Arc<Self>, flags: OpenFlags) -> Result<Arc<ProcFile>, FsError> {
        if self.is_removed() {
            return Err(FsError::NotFound);
        }
        if flags.readable() && !self.mode.other_can_read() {
            return Err(FsError::PermissionDenied);
        }
        if flags.writable() && !self.mode.other_can_write() {
            return Err(FsError::PermissionDenied);
        }
        Ok(Arc::new(ProcFile::new(self.clone(), flags)))
    }
}
