//! 同步原语
//!
//! 向其它模块提供基本的自旋锁
mod raw_spin_lock;

pub use raw_spin_lock::*;

/// 基于 [`RawSpinLock`] 的数据锁
pub type SpinLock<T> = lock_api::Mutex<RawSpinLock, T>;
