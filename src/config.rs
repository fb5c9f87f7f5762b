//! `/proc/huh` 的常量与可调参数

/// 消息最大长度（包含结尾的 `\0`）
pub const MAX_MSG_SIZE: usize = 1024;

/// proc 表项名，对应 `/proc/huh`
pub const PROC_ENTRY_NAME: &str = "huh";

/// proc 表项权限：rw-rw-rw-
pub const PROC_ENTRY_MODE: u32 = 0o666;

/// 存储容量策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// 首次写入时按 `len + 1` 分配，之后永不调整；放不下的写入返回 `InvalidArgument`
    FixedAtFirstWrite,
    /// 新消息放不下时重新分配（旧缓冲区随之释放）
    Regrow,
}

/// 读取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// 从游标处读取，最多 `max_len` 字节
    Bounded,
    /// 总是拷贝整条消息，忽略游标位置；目标缓冲区放不下时返回 `Fault`
    WholeMessage,
}

/// 游标策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPolicy {
    /// 读游标与写位置相互独立
    Split,
    /// 写操作推进读操作使用的同一个游标
    Shared,
}

/// 消息槽配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgConfig {
    /// 消息最大长度（包含结尾的 `\0`），必须 >= 1
    pub max_msg_size: usize,
    /// 容量策略
    pub capacity: CapacityPolicy,
    /// 读取策略
    pub read: ReadPolicy,
    /// 游标策略
    pub cursor: CursorPolicy,
}

impl MsgConfig {
    /// 默认配置：加锁、按需扩容、尊重读取长度、读写游标分离
    pub const fn default() -> Self {
        Self {
            max_msg_size: MAX_MSG_SIZE,
            capacity: CapacityPolicy::Regrow,
            read: ReadPolicy::Bounded,
            cursor: CursorPolicy::Split,
        }
    }

    /// 早期行为：首次写入时定容、整条读取、读写共用游标
    pub const fn legacy() -> Self {
        Self {
            max_msg_size: MAX_MSG_SIZE,
            capacity: CapacityPolicy::FixedAtFirstWrite,
            read: ReadPolicy::WholeMessage,
            cursor: CursorPolicy::Shared,
        }
    }

    /// 单条消息允许的最大字节数（不含 `\0`）
    #[inline]
    pub const fn max_payload(&self) -> usize {
        self.max_msg_size.saturating_sub(1)
    }

    /// 检查配置是否合法
    pub const fn is_valid(&self) -> bool {
        self.max_msg_size >= 1
    }
}

impl Default for MsgConfig {
    fn default() -> Self {
        MsgConfig::default()
    }
}
