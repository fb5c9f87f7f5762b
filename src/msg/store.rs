//! 消息存储
//!
//! 整个模块只有一个槽位，保存最近一次写入的消息。所有访问
//! （分配、写入、读取）都在同一把自旋锁内完成，因此：
//! - 首次分配的“检查后分配”不会被并发写入重复执行；
//! - 读者看到的总是某一次写入的完整内容，不会出现交错的字节。
//!
//! 槽位状态只有两种：未初始化（从未写入）和已初始化。
//! 已初始化后没有回到未初始化的路径，只有模块卸载时的 [`MessageStore::release`]
//! 会释放底层内存。

use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{CapacityPolicy, MsgConfig};
use crate::fs::FsError;
use crate::sync::SpinLock;

/// 槽位内部状态
struct Slot {
    /// `None` 表示从未分配；`Some` 时长度即容量，消息后紧跟一个 `\0`
    buffer: Option<Vec<u8>>,
    /// 当前消息长度（不含 `\0`）
    len: usize,
}

impl Slot {
    const fn new() -> Self {
        Self {
            buffer: None,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.buffer.as_ref().map_or(0, Vec::len)
    }

    fn message(&self) -> Option<&[u8]> {
        self.buffer.as_deref().map(|buf| &buf[..self.len])
    }
}

/// 单消息存储
pub struct MessageStore {
    slot: SpinLock<Slot>,
    config: MsgConfig,
    /// 实际发生的分配次数（含扩容）
    allocations: AtomicUsize,
}

impl MessageStore {
    /// 创建一个未初始化的存储；配置不合法时返回 `InvalidArgument`
    pub fn new(config: MsgConfig) -> Result<Self, FsError> {
        if !config.is_valid() {
            return Err(FsError::InvalidArgument);
        }
        Ok(Self {
            slot: SpinLock::new(Slot::new()),
            config,
            allocations: AtomicUsize::new(0),
        })
    }

    /// 当前配置
    pub fn config(&self) -> &MsgConfig {
        &self.config
    }

    /// 确保已为 `requested_len` 字节的消息分配缓冲区（容量 `requested_len + 1`）
    ///
    /// - 从未分配时：分配，失败返回 `OutOfMemory`
    /// - `FixedAtFirstWrite`：已分配后为空操作，无论 `requested_len` 多大
    /// - `Regrow`：已有容量不够时重新分配，当前消息原样搬到新缓冲区
    pub fn ensure_allocated(&self, requested_len: usize) -> Result<(), FsError> {
        let mut slot = self.slot.lock();
        self.ensure_allocated_locked(&mut slot, requested_len)
    }

    fn ensure_allocated_locked(&self, slot: &mut Slot, requested_len: usize) -> Result<(), FsError> {
        let needed = requested_len.checked_add(1).ok_or(FsError::InvalidArgument)?;
        match (&slot.buffer, self.config.capacity) {
            (Some(_), CapacityPolicy::FixedAtFirstWrite) => return Ok(()),
            (Some(buf), CapacityPolicy::Regrow) if buf.len() >= needed => return Ok(()),
            _ => {}
        }

        let mut buffer = Vec::new();
        if buffer.try_reserve_exact(needed).is_err() {
            pr_err!("huh: failed to allocate {} bytes", needed);
            return Err(FsError::OutOfMemory);
        }
        buffer.resize(needed, 0);
        if let Some(msg) = slot.message() {
            buffer[..msg.len()].copy_from_slice(msg);
        }

        let old_capacity = slot.capacity();
        slot.buffer = Some(buffer);
        self.allocations.fetch_add(1, Ordering::Relaxed);
        pr_debug!(
            "huh: allocated {} bytes (previous capacity {})",
            needed,
            old_capacity
        );
        Ok(())
    }

    /// 用 `bytes` 整体替换当前消息，返回写入的字节数
    ///
    /// 超过 `max_msg_size - 1` 字节，或在 `FixedAtFirstWrite` 下放不进已分配的容量时，
    /// 返回 `InvalidArgument` 且存储保持不变。
    pub fn write(&self, bytes: &[u8]) -> Result<usize, FsError> {
        let len = bytes.len();
        if len > self.config.max_payload() {
            return Err(FsError::InvalidArgument);
        }

        let mut slot = self.slot.lock();
        self.ensure_allocated_locked(&mut slot, len)?;

        let Some(buffer) = slot.buffer.as_mut() else {
            return Err(FsError::OutOfMemory);
        };
        if len + 1 > buffer.len() {
            pr_warn!(
                "huh: {} byte write exceeds fixed capacity {}",
                len,
                buffer.len()
            );
            return Err(FsError::InvalidArgument);
        }
        buffer[..len].copy_from_slice(bytes);
        buffer[len] = 0;
        slot.len = len;
        Ok(len)
    }

    /// 读取整条消息；从未写入时返回 `None`
    ///
    /// 返回的是在锁内拍下的快照，拷贝到调用者空间时不再持有锁。
    pub fn read_all(&self) -> Result<Option<Vec<u8>>, FsError> {
        let slot = self.slot.lock();
        match slot.message() {
            Some(msg) => snapshot(msg).map(Some),
            None => Ok(None),
        }
    }

    /// 从 `offset` 开始读取至多 `max_len` 字节
    ///
    /// 未初始化、`offset` 已到达消息末尾或 `max_len == 0` 时返回空。
    pub fn read_at(&self, offset: usize, max_len: usize) -> Result<Vec<u8>, FsError> {
        let slot = self.slot.lock();
        let Some(msg) = slot.message() else {
            return Ok(Vec::new());
        };
        if offset >= msg.len() {
            return Ok(Vec::new());
        }
        let end = offset + (msg.len() - offset).min(max_len);
        snapshot(&msg[offset..end])
    }

    /// 当前消息长度；从未写入时返回 `None`
    pub fn len(&self) -> Option<usize> {
        let slot = self.slot.lock();
        slot.buffer.as_ref().map(|_| slot.len)
    }

    /// 是否已经分配过缓冲区
    pub fn is_initialized(&self) -> bool {
        self.slot.lock().buffer.is_some()
    }

    /// 当前分配的字节数（含 `\0`），未初始化时为 0
    pub fn capacity(&self) -> usize {
        self.slot.lock().capacity()
    }

    /// 到目前为止发生的分配次数
    pub fn allocation_count(&self) -> usize {
        self.allocations.load(Ordering::Relaxed)
    }

    /// 释放底层缓冲区（仅在模块卸载时调用）
    pub(crate) fn release(&self) {
        let mut slot = self.slot.lock();
        if let Some(buffer) = slot.buffer.take() {
            pr_debug!("huh: released {} bytes", buffer.len());
        }
        slot.len = 0;
    }
}

/// 把消息拷贝到新的内核缓冲区
fn snapshot(msg: &[u8]) -> Result<Vec<u8>, FsError> {
    let mut out = Vec::new();
    out.try_reserve_exact(msg.len())
        .map_err(|_| FsError::OutOfMemory)?;
    out.extend_from_slice(msg);
    Ok(out)
}
