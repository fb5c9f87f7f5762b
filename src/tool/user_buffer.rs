//! 用户态缓冲区
//!
//! 用户态程序通过一段位于用户地址的缓冲区与内核交换数据：
//! 写操作从中拷出（[`UserSource`]），读操作向其中拷入（[`UserSink`]）。
//! 拷贝可能失败，失败统一表现为 [`FsError::Fault`]。
//!
//! 内核自身的切片也实现了这两个 trait，便于内部调用与测试。

use alloc::vec::Vec;
use core::ptr;

use crate::fs::FsError;

/// 可以从中拷出数据的用户缓冲区（写操作的数据源）
pub trait UserSource {
    /// 调用者声明的长度
    fn len(&self) -> usize;

    /// 缓冲区是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 将 `dst.len()` 字节从用户缓冲区拷贝到内核缓冲区
    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), FsError>;
}

/// 可以向其中拷入数据的用户缓冲区（读操作的目标）
pub trait UserSink {
    /// 调用者声明的长度
    fn len(&self) -> usize;

    /// 缓冲区是否为空
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 将 `src` 全部拷贝到用户缓冲区开头
    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError>;
}

/// 用户缓冲区结构体
///
/// 只保存宿主传入的指针和长度；越界或空指针的拷贝返回 `Fault`，
/// 而不是写穿缓冲区。
pub struct UserBuffer {
    data: *mut u8,
    len: usize,
}

impl UserBuffer {
    /// 创建一个新的用户缓冲区
    /// # 参数：
    /// - `data`: 指向用户缓冲区的指针
    /// - `len`: 缓冲区的长度
    ///
    /// # Safety
    /// - 若 `data` 非空，`data .. data + len` 必须在本对象存活期间有效且可读写；
    /// - 不得与内核侧的源/目标切片重叠。
    pub unsafe fn new(data: *mut u8, len: usize) -> Self {
        Self { data, len }
    }

    /// 返回用户缓冲区长度
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 判断用户缓冲区是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_access(&self, n: usize) -> Result<(), FsError> {
        if n == 0 {
            return Ok(());
        }
        if self.data.is_null() || n > self.len {
            return Err(FsError::Fault);
        }
        Ok(())
    }
}

impl UserSource for UserBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), FsError> {
        self.check_access(dst.len())?;
        if dst.is_empty() {
            return Ok(());
        }
        // SAFETY: 构造时调用方保证区间有效，长度已在 check_access 中校验
        unsafe {
            ptr::copy_nonoverlapping(self.data as *const u8, dst.as_mut_ptr(), dst.len());
        }
        Ok(())
    }
}

impl UserSink for UserBuffer {
    fn len(&self) -> usize {
        self.len
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError> {
        self.check_access(src.len())?;
        if src.is_empty() {
            return Ok(());
        }
        // SAFETY: 同上
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.data, src.len());
        }
        Ok(())
    }
}

impl UserSource for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), FsError> {
        let src = self.get(..dst.len()).ok_or(FsError::Fault)?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl UserSink for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError> {
        let dst = self.get_mut(..src.len()).ok_or(FsError::Fault)?;
        dst.copy_from_slice(src);
        Ok(())
    }
}

impl<const N: usize> UserSource for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), FsError> {
        self.as_slice().copy_from_user(dst)
    }
}

impl<const N: usize> UserSink for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError> {
        self.as_mut_slice().copy_to_user(src)
    }
}

impl UserSource for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn copy_from_user(&self, dst: &mut [u8]) -> Result<(), FsError> {
        self.as_slice().copy_from_user(dst)
    }
}

impl UserSink for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn copy_to_user(&mut self, src: &[u8]) -> Result<(), FsError> {
        self.as_mut_slice().copy_to_user(src)
    }
}
