//! proc 伪文件系统
//!
//! 每个表项在创建时绑定一对读写处理函数（[`ProcOps`]），表项本身不保存数据；
//! 打开表项得到 [`ProcFile`] 会话，由会话负责维护游标并把读写转交给处理函数。
mod entry;
mod file;
mod ops;
mod proc;

pub use entry::ProcEntry;
pub use file::ProcFile;
pub use ops::ProcOps;
pub use proc::ProcFS;
