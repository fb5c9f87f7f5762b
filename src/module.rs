//! 模块生命周期
//!
//! 加载时创建消息存储并在 proc 目录下注册 `huh` 表项，卸载时移除表项并释放
//! 存储的内存。[`HuhModule`] 持有这些资源；[`module_init`] / [`module_exit`]
//! 是面向全局 proc 根目录的入口。

use alloc::sync::Arc;

use lazy_static::lazy_static;

use crate::config::{MsgConfig, PROC_ENTRY_MODE, PROC_ENTRY_NAME};
use crate::fs::proc::{ProcEntry, ProcFS};
use crate::fs::{FileMode, FsError};
use crate::msg::{MessageStore, MsgHandlers};
use crate::sync::SpinLock;

lazy_static! {
    /// 全局 proc 根目录
    pub static ref PROC_ROOT: Arc<ProcFS> = ProcFS::new();
}

/// 已加载的模块实例，`None` 表示未加载
static MODULE: SpinLock<Option<HuhModule>> = SpinLock::new(None);

/// 一个已加载的 `huh` 模块
pub struct HuhModule {
    procfs: Arc<ProcFS>,
    entry: Arc<ProcEntry>,
    store: Arc<MessageStore>,
}

impl HuhModule {
    /// 在 `procfs` 下创建 `huh` 表项
    ///
    /// 存储此时尚未分配，第一次写入时才分配。
    pub fn init(procfs: Arc<ProcFS>, config: MsgConfig) -> Result<Self, FsError> {
        pr_info!("huh: proc create start");

        let store = Arc::new(MessageStore::new(config)?);
        let handlers = Arc::new(MsgHandlers::new(store.clone()));
        let entry = procfs
            .proc_create(
                PROC_ENTRY_NAME,
                FileMode::from_bits_truncate(PROC_ENTRY_MODE),
                handlers,
            )
            .inspect_err(|e| pr_err!("huh: proc create failed: {}", e))?;

        pr_info!("huh: proc create end");
        Ok(Self {
            procfs,
            entry,
            store,
        })
    }

    /// 移除表项并释放消息内存
    pub fn exit(self) {
        pr_info!("huh: proc remove start");

        if let Err(e) = self.procfs.proc_remove(&self.entry) {
            pr_warn!("huh: proc remove failed: {}", e);
        }
        self.store.release();

        pr_info!("huh: proc remove end");
    }

    /// 模块的消息存储
    pub fn store(&self) -> &Arc<MessageStore> {
        &self.store
    }

    /// 注册的 `huh` 表项
    pub fn entry(&self) -> &Arc<ProcEntry> {
        &self.entry
    }
}

/// 以默认配置加载模块到全局 proc 根目录
///
/// 重复加载返回 `AlreadyExists`。
pub fn module_init() -> Result<(), FsError> {
    let mut module = MODULE.lock();
    if module.is_some() {
        return Err(FsError::AlreadyExists);
    }
    *module = Some(HuhModule::init(PROC_ROOT.clone(), MsgConfig::default())?);
    Ok(())
}

/// 卸载模块；未加载时什么也不做
pub fn module_exit() {
    let module = MODULE.lock().take();
    if let Some(module) = module {
        module.exit();
    }
}
