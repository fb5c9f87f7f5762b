//! ProcFS 目录与表项基础功能测试

use super::*;
use crate::fs::{File, OpenFlags, SeekWhence};
use crate::{kassert, test_case};

test_case!(test_procfs_empty_initially, {
    let procfs = create_test_procfs();
    kassert!(procfs.readdir().is_empty());
    kassert!(procfs.lookup("huh").err() == Some(FsError::NotFound));
});

test_case!(test_proc_create_and_lookup, {
    let (procfs, _store, entry) = create_test_huh(MsgConfig::default()).unwrap();

    kassert!(entry.name() == "huh");
    kassert!(entry.mode().bits() == 0o666);
    kassert!(entry.ino() > 0);

    let found = procfs.lookup("huh").unwrap();
    kassert!(Arc::ptr_eq(&found, &entry));
    kassert!(procfs.readdir() == ["huh"]);
});

test_case!(test_proc_create_rejects_bad_names, {
    let (procfs, store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    let ops = Arc::new(MsgHandlers::new(store));
    let mode = FileMode::from_bits_truncate(0o444);

    kassert!(procfs.proc_create("", mode, ops.clone()).err() == Some(FsError::InvalidArgument));
    kassert!(procfs.proc_create("a/b", mode, ops.clone()).err() == Some(FsError::InvalidArgument));
    kassert!(procfs.proc_create("huh", mode, ops).err() == Some(FsError::AlreadyExists));
});

test_case!(test_inode_numbers_are_unique, {
    let (procfs, store, entry) = create_test_huh(MsgConfig::default()).unwrap();
    let other = procfs
        .proc_create(
            "huh2",
            FileMode::from_bits_truncate(0o444),
            Arc::new(MsgHandlers::new(store)),
        )
        .unwrap();
    kassert!(other.ino() != entry.ino());
    kassert!(procfs.readdir() == ["huh", "huh2"]);
});

test_case!(test_proc_remove, {
    let (procfs, _store, entry) = create_test_huh(MsgConfig::default()).unwrap();

    kassert!(procfs.proc_remove(&entry).is_ok());
    kassert!(entry.is_removed());
    kassert!(procfs.lookup("huh").err() == Some(FsError::NotFound));
    kassert!(procfs.proc_remove(&entry).err() == Some(FsError::NotFound));
    kassert!(procfs.open("huh", OpenFlags::O_RDONLY).err() == Some(FsError::NotFound));
});

test_case!(test_open_checks_other_permission_bits, {
    let (procfs, store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    procfs
        .proc_create(
            "ro",
            FileMode::from_bits_truncate(0o444),
            Arc::new(MsgHandlers::new(store)),
        )
        .unwrap();

    kassert!(procfs.open("ro", OpenFlags::O_RDONLY).is_ok());
    kassert!(procfs.open("ro", OpenFlags::O_WRONLY).err() == Some(FsError::PermissionDenied));
    kassert!(procfs.open("ro", OpenFlags::O_RDWR).err() == Some(FsError::PermissionDenied));
    kassert!(procfs.open("huh", OpenFlags::O_RDWR).is_ok());
});

test_case!(test_session_access_mode, {
    let (procfs, _store, _entry) = create_test_huh(MsgConfig::default()).unwrap();

    let reader = procfs.open("huh", OpenFlags::O_RDONLY).unwrap();
    kassert!(reader.readable());
    kassert!(!reader.writable());
    kassert!(reader.write(b"x").err() == Some(FsError::PermissionDenied));

    let writer = procfs.open("huh", OpenFlags::O_WRONLY).unwrap();
    let mut buf = [0u8; 4];
    kassert!(writer.read(&mut buf).err() == Some(FsError::PermissionDenied));
    kassert!(writer.flags() == OpenFlags::O_WRONLY);
});

test_case!(test_io_after_remove_fails, {
    let (procfs, _store, entry) = create_test_huh(MsgConfig::default()).unwrap();
    let file = procfs.open("huh", OpenFlags::O_RDWR).unwrap();
    kassert!(file.write(b"hi") == Ok(2));

    procfs.proc_remove(&entry).unwrap();

    let mut buf = [0u8; 4];
    kassert!(file.read(&mut buf).err() == Some(FsError::IoError));
    kassert!(file.write(b"hi").err() == Some(FsError::IoError));
    kassert!(file.lseek(0, SeekWhence::Set).err() == Some(FsError::IoError));
});

test_case!(test_lseek, {
    let (procfs, _store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    let file = procfs.open("huh", OpenFlags::O_RDONLY).unwrap();

    kassert!(file.lseek(3, SeekWhence::Set) == Ok(3));
    kassert!(file.lseek(2, SeekWhence::Cur) == Ok(5));
    kassert!(file.lseek(-1, SeekWhence::Cur) == Ok(4));
    kassert!(file.offset() == 4);
    kassert!(file.lseek(-10, SeekWhence::Cur) == Err(FsError::InvalidArgument));
    kassert!(file.offset() == 4);
    // 没有大小，End 以 0 为基准
    kassert!(file.lseek(0, SeekWhence::End) == Ok(0));
    kassert!(file.lseek(-1, SeekWhence::End) == Err(FsError::InvalidArgument));
});
