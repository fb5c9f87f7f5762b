use crate::fs::FsError;
use crate::tool::{UserSink, UserSource};

/// proc 表项的读写处理函数
///
/// 宿主在每次读写时调用，传入用户缓冲区和当前游标。实现者负责在成功时
/// 推进游标，并返回实际处理的字节数。
pub trait ProcOps: Send + Sync {
    /// 读处理函数，返回拷贝到 `buf` 的字节数，0 表示已到末尾
    fn proc_read(&self, buf: &mut dyn UserSink, offset: &mut usize) -> Result<usize, FsError>;

    /// 写处理函数，返回从 `buf` 消费的字节数
    fn proc_write(&self, buf: &dyn UserSource, offset: &mut usize) -> Result<usize, FsError>;

    /// 读写是否推进同一个游标
    ///
    /// 默认读写各自维护游标。
    fn shares_cursor(&self) -> bool {
        false
    }
}
