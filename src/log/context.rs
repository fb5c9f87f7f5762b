//! Log context collection
//!
//! This module collects contextual information (CPU ID, task ID, timestamp)
//! for each log entry. The module has no clock or scheduler of its own, so
//! the host installs the sources once at load time; until then every field
//! reads as zero.

use spin::Once;

/// Context sources provided by the host
#[derive(Clone, Copy)]
pub struct ContextHooks {
    /// Monotonic timestamp (host-defined unit, typically timer ticks)
    pub clock: fn() -> usize,
    /// ID of the CPU executing the caller
    pub cpu_id: fn() -> usize,
    /// ID of the calling task
    pub task_id: fn() -> u32,
}

static HOOKS: Once<ContextHooks> = Once::new();

/// Installs the context sources. Only the first call takes effect;
/// returns `false` if hooks were already installed.
pub fn install_hooks(hooks: ContextHooks) -> bool {
    let mut installed = false;
    HOOKS.call_once(|| {
        installed = true;
        hooks
    });
    installed
}

/// Contextual information for a log entry
pub(super) struct LogContext {
    /// ID of the CPU that generated the log
    pub(super) cpu_id: usize,
    /// ID of the task/process that generated the log
    pub(super) task_id: u32,
    /// Timestamp when the log was created
    pub(super) timestamp: usize,
}

/// Collects context information for a new log entry
pub(super) fn collect_context() -> LogContext {
    match HOOKS.get() {
        Some(hooks) => LogContext {
            cpu_id: (hooks.cpu_id)(),
            task_id: (hooks.task_id)(),
            timestamp: (hooks.clock)(),
        },
        None => LogContext {
            cpu_id: 0,
            task_id: 0,
            timestamp: 0,
        },
    }
}
