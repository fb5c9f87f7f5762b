//! 多生产者单消费者的日志环形缓冲区
//!
//! 写者用 `head` 领取序号，写完记录后在槽位上盖上 `序号 + 1` 的戳；
//! 读者只接受戳与 `tail` 对应的槽位。缓冲区满时最旧的记录被覆盖，
//! `tail` 随之前移并累计到 `dropped`。

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::config::GLOBAL_LOG_BUFFER_SIZE;
use super::record::LogRecord;

/// 槽位个数
pub(super) const RING_CAPACITY: usize = GLOBAL_LOG_BUFFER_SIZE / core::mem::size_of::<LogRecord>();

struct Slot {
    /// 0 表示从未写入，否则为 `序号 + 1`
    stamp: AtomicUsize,
    record: UnsafeCell<LogRecord>,
}

impl Slot {
    const fn new() -> Self {
        Self {
            stamp: AtomicUsize::new(0),
            record: UnsafeCell::new(LogRecord::blank()),
        }
    }
}

pub(super) struct LogRing {
    head: AtomicUsize,
    tail: AtomicUsize,
    dropped: AtomicUsize,
    slots: [Slot; RING_CAPACITY],
}

// 槽位内容只在持有对应序号时写入，读者通过戳判断是否完整
unsafe impl Sync for LogRing {}

impl LogRing {
    pub(super) const fn new() -> Self {
        Self {
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
            slots: [const { Slot::new() }; RING_CAPACITY],
        }
    }

    pub(super) fn push(&self, record: &LogRecord) {
        let seq = self.head.fetch_add(1, Ordering::Relaxed);

        // 为 seq 腾出位置：tail 至少要到 seq + 1 - RING_CAPACITY
        let floor = (seq + 1).saturating_sub(RING_CAPACITY);
        let prev = self.tail.fetch_max(floor, Ordering::AcqRel);
        if prev < floor {
            self.dropped.fetch_add(floor - prev, Ordering::Relaxed);
        }

        let slot = &self.slots[seq % RING_CAPACITY];
        unsafe { *slot.record.get() = *record };
        slot.stamp.store(seq + 1, Ordering::Release);
    }

    pub(super) fn pop(&self) -> Option<LogRecord> {
        loop {
            let tail = self.tail.load(Ordering::Acquire);
            let slot = &self.slots[tail % RING_CAPACITY];
            if slot.stamp.load(Ordering::Acquire) != tail + 1 {
                return None;
            }
            let record = unsafe { *slot.record.get() };
            // 读取期间被写者挤掉时从新的 tail 重来
            if self
                .tail
                .compare_exchange(tail, tail + 1, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                return Some(record);
            }
        }
    }

    pub(super) fn pending(&self) -> usize {
        let head = self.head.load(Ordering::Relaxed);
        head.saturating_sub(self.tail.load(Ordering::Relaxed))
    }

    pub(super) fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}
