//! 工具模块
mod user_buffer;

pub use user_buffer::*;
