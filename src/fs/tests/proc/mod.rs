use crate::config::{MsgConfig, PROC_ENTRY_MODE, PROC_ENTRY_NAME};
use crate::fs::proc::{ProcEntry, ProcFS};
use crate::fs::{FileMode, FsError};
use crate::msg::{MessageStore, MsgHandlers};
use alloc::sync::Arc;

// 测试辅助函数 (fixtures)

/// 创建一个空的测试用 ProcFS
pub fn create_test_procfs() -> Arc<ProcFS> {
    ProcFS::new()
}

/// 创建挂好 `huh` 表项的 ProcFS，返回 (procfs, 存储, 表项)
pub fn create_test_huh(
    config: MsgConfig,
) -> Result<(Arc<ProcFS>, Arc<MessageStore>, Arc<ProcEntry>), FsError> {
    let procfs = create_test_procfs();
    let store = Arc::new(MessageStore::new(config)?);
    let entry = procfs.proc_create(
        PROC_ENTRY_NAME,
        FileMode::from_bits_truncate(PROC_ENTRY_MODE),
        Arc::new(MsgHandlers::new(store.clone())),
    )?;
    Ok((procfs, store, entry))
}

pub mod proc_basic;
pub mod proc_concurrency;
pub mod proc_trace;
