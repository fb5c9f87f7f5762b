//! 读写处理函数
//!
//! 宿主对 `/proc/huh` 的每次读写都会调用这里的 [`MsgHandlers`]，并传入
//! （用户缓冲区, 当前游标）。处理函数本身无状态，只把请求投影到共享的
//! [`MessageStore`] 上。

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::config::{CursorPolicy, MsgConfig, ReadPolicy};
use crate::fs::FsError;
use crate::fs::proc::ProcOps;
use crate::msg::MessageStore;
use crate::tool::{UserSink, UserSource};

/// 绑定到 proc 表项上的读写处理函数对
pub struct MsgHandlers {
    store: Arc<MessageStore>,
}

impl MsgHandlers {
    /// 创建绑定到 `store` 的处理函数
    pub fn new(store: Arc<MessageStore>) -> Self {
        Self { store }
    }

    /// 处理函数操作的存储
    pub fn store(&self) -> &Arc<MessageStore> {
        &self.store
    }

    fn config(&self) -> &MsgConfig {
        self.store.config()
    }

    /// 读处理函数
    ///
    /// - 存储未初始化、游标已到达消息末尾或消息为空时返回 0
    /// - `Bounded`：从游标处拷贝至多 `buf.len()` 字节
    /// - `WholeMessage`：拷贝整条消息，目标放不下时返回 `Fault`
    ///
    /// 成功时游标前进实际拷贝的字节数。
    pub fn read(&self, buf: &mut dyn UserSink, offset: &mut usize) -> Result<usize, FsError> {
        pr_debug!("huh: read offset={} count={}", *offset, buf.len());

        let chunk = match self.config().read {
            ReadPolicy::Bounded => self.store.read_at(*offset, buf.len())?,
            ReadPolicy::WholeMessage => match self.store.read_all()? {
                Some(msg) if *offset < msg.len() => msg,
                _ => return Ok(0),
            },
        };
        if chunk.is_empty() {
            return Ok(0);
        }

        buf.copy_to_user(&chunk)?;
        *offset = offset.saturating_add(chunk.len());
        Ok(chunk.len())
    }

    /// 写处理函数
    ///
    /// 先把用户数据拷到内核暂存区，再在锁内替换消息，所以拷贝失败不会
    /// 留下写了一半的消息。成功时游标前进写入的字节数并返回该字节数。
    pub fn write(&self, buf: &dyn UserSource, offset: &mut usize) -> Result<usize, FsError> {
        let count = buf.len();
        pr_debug!("huh: write offset={} count={}", *offset, count);

        if count > self.config().max_payload() {
            pr_warn!("huh: rejected {} byte write", count);
            return Err(FsError::InvalidArgument);
        }

        let mut staging = Vec::new();
        staging
            .try_reserve_exact(count)
            .map_err(|_| FsError::OutOfMemory)?;
        staging.resize(count, 0);
        buf.copy_from_user(&mut staging)?;

        let written = self.store.write(&staging)?;
        *offset = offset.saturating_add(written);
        Ok(written)
    }
}

impl ProcOps for MsgHandlers {
    fn proc_read(&self, buf: &mut dyn UserSink, offset: &mut usize) -> Result<usize, FsError> {
        self.read(buf, offset)
    }

    fn proc_write(&self, buf: &dyn UserSource, offset: &mut usize) -> Result<usize, FsError> {
        self.write(buf, offset)
    }

    fn shares_cursor(&self) -> bool {
        self.config().cursor == CursorPolicy::Shared
    }
}
