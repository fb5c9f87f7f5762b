use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::fs::proc::{ProcEntry, ProcFile, ProcOps};
use crate::fs::{FileMode, FsError, OpenFlags};
use crate::sync::SpinLock;

/// proc 文件系统根目录
///
/// 只有一层的扁平目录，表项按名字排序。
pub struct ProcFS {
    entries: SpinLock<BTreeMap<String, Arc<ProcEntry>>>,
}

impl ProcFS {
    /// 创建空的 ProcFS 实例
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entries: SpinLock::new(BTreeMap::new()),
        })
    }

    /// 创建表项并绑定处理函数
    ///
    /// 名字为空或含有 `/` 时返回 `InvalidArgument`，重名返回 `AlreadyExists`。
    pub fn proc_create(
        &self,
        name: &str,
        mode: FileMode,
        ops: Arc<dyn ProcOps>,
    ) -> Result<Arc<ProcEntry>, FsError> {
        if name.is_empty() || name.contains('/') {
            return Err(FsError::InvalidArgument);
        }

        let mut entries = self.entries.lock();
        if entries.contains_key(name) {
            return Err(FsError::AlreadyExists);
        }
        let entry = Arc::new(ProcEntry::new(name.to_string(), mode, ops));
        entries.insert(name.to_string(), entry.clone());
        Ok(entry)
    }

    /// 移除表项
    ///
    /// 已打开的会话仍持有表项，但之后的读写会失败。
    pub fn proc_remove(&self, entry: &Arc<ProcEntry>) -> Result<(), FsError> {
        let mut entries = self.entries.lock();
        match entries.get(entry.name()) {
            Some(found) if Arc::ptr_eq(found, entry) => {}
            _ => return Err(FsError::NotFound),
        }
        entries.remove(entry.name());
        entry.mark_removed();
        Ok(())
    }

    /// 按名字查找表项
    pub fn lookup(&self, name: &str) -> Result<Arc<ProcEntry>, FsError> {
        self.entries
            .lock()
            .get(name)
            .cloned()
            .ok_or(FsError::NotFound)
    }

    /// 列出目录中的全部表项名
    pub fn readdir(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    /// 按名字打开表项
    pub fn open(&self, name: &str, flags: OpenFlags) -> Result<Arc<ProcFile>, FsError> {
        self.lookup(name)?.open(flags)
    }
}
