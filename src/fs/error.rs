//! 错误类型
//!
//! 与 POSIX 兼容的错误码，可通过 [`FsError::to_errno()`] 转换为返回给调用者的错误码。

/// 伪文件操作错误
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// 表项不存在（`-ENOENT`）
    NotFound,
    /// 表项已存在（`-EEXIST`）
    AlreadyExists,
    /// “其他用户”权限位不允许该访问（`-EACCES`）
    PermissionDenied,
    /// 参数无效，例如消息超长（`-EINVAL`）
    InvalidArgument,
    /// 内核缓冲区分配失败（`-ENOMEM`）
    OutOfMemory,
    /// 用户态缓冲区不可访问（`-EFAULT`）
    Fault,
    /// 表项已被移除（`-EIO`）
    IoError,
    /// 操作不支持（`-ENOTSUP`）
    NotSupported,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::IoError => -5,
            FsError::OutOfMemory => -12,
            FsError::PermissionDenied => -13,
            FsError::Fault => -14,
            FsError::AlreadyExists => -17,
            FsError::InvalidArgument => -22,
            FsError::NotSupported => -95,
        }
    }
}

impl core::fmt::Display for FsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FsError::NotFound => "no such entry",
            FsError::AlreadyExists => "entry exists",
            FsError::PermissionDenied => "permission denied",
            FsError::InvalidArgument => "invalid argument",
            FsError::OutOfMemory => "out of memory",
            FsError::Fault => "bad address",
            FsError::IoError => "I/O error",
            FsError::NotSupported => "operation not supported",
        };
        write!(f, "{} ({})", msg, self.to_errno())
    }
}

impl core::error::Error for FsError {}
