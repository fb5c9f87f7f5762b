//! proc 表项的 File trait 实现

use alloc::sync::Arc;

use crate::fs::proc::ProcEntry;
use crate::fs::{File, FsError, OpenFlags, SeekWhence};
use crate::sync::SpinLock;
use crate::tool::{UserSink, UserSource};

/// 一次打开 proc 表项得到的会话
///
/// 维护：
/// - 读游标（offset），`lseek` 操作的也是它
/// - 写位置（write_pos），处理函数要求共享游标时不使用
/// - 打开标志位
///
/// # 并发安全
///
/// 游标用 `SpinLock` 保护，并在整个处理函数调用期间持有，
/// 因此共享同一会话的多个线程不会丢失游标更新。
pub struct ProcFile {
    entry: Arc<ProcEntry>,
    flags: OpenFlags,
    offset: SpinLock<usize>,
    write_pos: SpinLock<usize>,
}

impl ProcFile {
    pub(super) fn new(entry: Arc<ProcEntry>, flags: OpenFlags) -> Self {
        Self {
            entry,
            flags,
            offset: SpinLock::new(0),
            write_pos: SpinLock::new(0),
        }
    }

    /// 获取关联的表项
    pub fn entry(&self) -> &Arc<ProcEntry> {
        &self.entry
    }

    /// 当前写位置
    pub fn write_pos(&self) -> usize {
        if self.entry.ops().shares_cursor() {
            *self.offset.lock()
        } else {
            *self.write_pos.lock()
        }
    }

    fn check_alive(&self) -> Result<(), FsError> {
        if self.entry.is_removed() {
            return Err(FsError::IoError);
        }
        Ok(())
    }
}

impl File for ProcFile {
    fn readable(&self) -> bool {
        self.flags.readable()
    }

    fn writable(&self) -> bool {
        self.flags.writable()
    }

    fn read(&self, buf: &mut dyn UserSink) -> Result<usize, FsError> {
        if !self.readable() {
            return Err(FsError::PermissionDenied);
        }
        self.check_alive()?;

        let mut offset = self.offset.lock();
        self.entry.ops().proc_read(buf, &mut offset)
    }

    fn write(&self, buf: &dyn UserSource) -> Result<usize, FsError> {
        if !self.writable() {
            return Err(FsError::PermissionDenied);
        }
        self.check_alive()?;

        let mut pos = if self.entry.ops().shares_cursor() {
            self.offset.lock()
        } else {
            self.write_pos.lock()
        };
        self.entry.ops().proc_write(buf, &mut pos)
    }

    /// 没有固定大小，`End` 以 0 为基准
    fn lseek(&self, offset: isize, whence: SeekWhence) -> Result<usize, FsError> {
        self.check_alive()?;

        let mut offset_guard = self.offset.lock();
        let new_offset = match whence {
            SeekWhence::Set | SeekWhence::End => usize::try_from(offset).ok(),
            SeekWhence::Cur => offset_guard.checked_add_signed(offset),
        }
        .ok_or(FsError::InvalidArgument)?;

        *offset_guard = new_offset;
        Ok(*offset_guard)
    }

    fn offset(&self) -> usize {
        *self.offset.lock()
    }

    fn flags(&self) -> OpenFlags {
        self.flags
    }
}
