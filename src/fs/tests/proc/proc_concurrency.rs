//! 多个会话并发读写 `/proc/huh` 的测试

use super::*;
use crate::config::CapacityPolicy;
use crate::fs::{File, OpenFlags, SeekWhence};
use crate::{kassert, test_case};
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Barrier;
use std::thread;

test_case!(test_concurrent_first_writes_allocate_once, {
    for capacity in [CapacityPolicy::FixedAtFirstWrite, CapacityPolicy::Regrow] {
        let config = MsgConfig {
            capacity,
            ..MsgConfig::default()
        };
        let (procfs, store, _entry) = create_test_huh(config).unwrap();
        let barrier = Arc::new(Barrier::new(2));

        let payloads: [&[u8]; 2] = [b"AAAAAAAA", b"BBBBBBBB"];
        let handles: Vec<_> = payloads
            .into_iter()
            .map(|payload| {
                let file = procfs.open("huh", OpenFlags::O_WRONLY).unwrap();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    file.write(&payload.to_vec())
                })
            })
            .collect();
        for handle in handles {
            kassert!(handle.join().unwrap() == Ok(8));
        }

        kassert!(store.allocation_count() == 1);
        let msg = store.read_all().unwrap().unwrap();
        kassert!(msg == payloads[0] || msg == payloads[1]);
    }
});

test_case!(test_readers_never_see_mixed_messages, {
    let (procfs, _store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    let seed = procfs.open("huh", OpenFlags::O_WRONLY).unwrap();
    seed.write(&vec![b'a'; 64]).unwrap();

    let writers: Vec<_> = [b'a', b'b', b'c']
        .into_iter()
        .map(|fill| {
            let file = procfs.open("huh", OpenFlags::O_WRONLY).unwrap();
            thread::spawn(move || {
                // 长度不同，混合的结果既可能体现在字节上也可能体现在长度上
                let msg = vec![fill; 32 + (fill - b'a') as usize * 16];
                for _ in 0..200 {
                    file.write(&msg).unwrap();
                }
            })
        })
        .collect();

    let reader = procfs.open("huh", OpenFlags::O_RDONLY).unwrap();
    for _ in 0..200 {
        reader.lseek(0, SeekWhence::Set).unwrap();
        let mut buf = [0u8; 128];
        let n = reader.read(&mut buf).unwrap();
        let msg = &buf[..n];
        kassert!(!msg.is_empty());
        kassert!(msg.iter().all(|&b| b == msg[0]));
        let expected = match msg[0] {
            b'a' => [32, 64].contains(&n),
            b'b' => n == 48,
            b'c' => n == 64,
            _ => false,
        };
        kassert!(expected);
    }

    for handle in writers {
        handle.join().unwrap();
    }
});

test_case!(test_shared_session_cursor_updates_are_not_lost, {
    let (procfs, _store, _entry) = create_test_huh(MsgConfig::default()).unwrap();
    let file = procfs.open("huh", OpenFlags::O_RDWR).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let file = file.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    file.write(b"xy").unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    kassert!(file.write_pos() == 4 * 100 * 2);
    kassert!(file.offset() == 0);
});
