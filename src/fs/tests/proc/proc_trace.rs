//! `huh` 各个跟踪点的输出测试

use super::*;
use crate::fs::{File, OpenFlags};
use crate::log::{self, LogLevel};
use crate::module::HuhModule;
use crate::test::capture_console;
use crate::{kassert, test_case};

test_case!(test_trace_points_reach_console, {
    let capture = capture_console();
    let saved = (log::global_level(), log::console_level());
    log::set_global_level(LogLevel::Debug);
    log::set_console_level(LogLevel::Debug);

    let procfs = create_test_procfs();
    let module = HuhModule::init(procfs.clone(), MsgConfig::default()).unwrap();
    let file = procfs.open("huh", OpenFlags::O_RDWR).unwrap();
    file.write(b"traced").unwrap();
    let mut buf = [0u8; 16];
    file.read(&mut buf).unwrap();
    module.exit();

    log::set_global_level(saved.0);
    log::set_console_level(saved.1);
    let out = capture.output();
    drop(capture);

    kassert!(out.contains("huh: proc create start"));
    kassert!(out.contains("huh: proc create end"));
    kassert!(out.contains("huh: write offset=0 count=6"));
    kassert!(out.contains("huh: allocated 7 bytes"));
    kassert!(out.contains("huh: read offset=0 count=16"));
    kassert!(out.contains("huh: proc remove start"));
    kassert!(out.contains("huh: proc remove end"));
});

test_case!(test_rejected_write_is_logged, {
    let capture = capture_console();
    let saved = log::console_level();
    log::set_console_level(LogLevel::Warning);

    let (procfs, _store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    let file = procfs.open("huh", OpenFlags::O_WRONLY).unwrap();
    let payload = alloc::vec![0u8; 2048];
    kassert!(file.write(&payload) == Err(FsError::InvalidArgument));

    log::set_console_level(saved);
    let out = capture.output();
    drop(capture);
    kassert!(out.contains("huh: rejected 2048 byte write"));
});
