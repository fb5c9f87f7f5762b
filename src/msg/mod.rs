//! `/proc/huh` 的核心：单消息存储及其读写处理函数
mod handlers;
mod store;

pub use handlers::MsgHandlers;
pub use store::MessageStore;
