//! Cancellable deferred tasks
//!
//! Mock recognition, playback and voice capture are timers. Each kind has
//! at most one pending instance; scheduling a kind again replaces the old
//! instance. Every schedule gets a fresh generation, so a handle held by a
//! view goes stale the moment its task is cancelled or replaced.
//!
//! Time is passed in explicitly. The UI feeds `Instant::now()` each frame,
//! tests feed a virtual clock.

use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The deferred operations the app knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Sign recognition on the sign-to-text screen
    Recognition,
    /// Sign animation on the text-to-sign screen
    Playback,
    /// Voice capture on the text-to-sign screen
    VoiceCapture,
}

/// Identifies one scheduled instance of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub kind: TaskKind,
    pub generation: u64,
}

#[derive(Clone, Debug)]
struct PendingTask {
    handle: TaskHandle,
    due: Instant,
}

/// Scheduler for pending deferred tasks
#[derive(Clone, Debug, Default)]
pub struct DeferredTasks {
    pending: Vec<PendingTask>,
    next_generation: u64,
}

impl DeferredTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` after `now`, cancelling any pending instance
    pub fn schedule(&mut self, kind: TaskKind, delay: Duration, now: Instant) -> TaskHandle {
        self.cancel(kind);

        self.next_generation += 1;
        let handle = TaskHandle {
            kind,
            generation: self.next_generation,
        };
        self.pending.push(PendingTask {
            handle,
            due: now + delay,
        });
        debug!("[TASK] Scheduled {:?} gen {} in {:?}", kind, handle.generation, delay);
        handle
    }

    /// Cancel the pending instance of `kind`, if any
    pub fn cancel(&mut self, kind: TaskKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.handle.kind != kind);
        let cancelled = self.pending.len() != before;
        if cancelled {
            debug!("[TASK] Cancelled {:?}", kind);
        }
        cancelled
    }

    /// Cancel one specific instance; a stale handle cancels nothing
    pub fn cancel_handle(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.handle != handle);
        self.pending.len() != before
    }

    /// Handle of the pending instance of `kind`
    pub fn handle(&self, kind: TaskKind) -> Option<TaskHandle> {
        self.pending
            .iter()
            .find(|task| task.handle.kind == kind)
            .map(|task| task.handle)
    }

    /// Earliest due time among pending tasks
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|task| task.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn poll(&mut self, now: Instant) -> Vec<TaskHandle> {
        let mut due: Vec<PendingTask> = Vec::new();
        self.pending.retain(|task| {
            if task.due <= now {
                due.push(task.clone());
                false
            } else {
                true
            }
        });

        due.sort_by_key(|task| (task.due, task.handle.generation));
        for task in &due {
            trace!("[TASK] Fired {:?} gen {}", task.handle.kind, task.handle.generation);
        }
        due.into_iter().map(|task| task.handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_only_after_delay() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let handle = tasks.schedule(TaskKind::Recognition, ms(2000), t0);

        assert!(tasks.poll(t0 + ms(1999)).is_empty());
        assert_eq!(tasks.poll(t0 + ms(2000)), vec![handle]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        tasks.schedule(TaskKind::Recognition, ms(2000), t0);

        assert!(tasks.cancel(TaskKind::Recognition));
        assert!(tasks.poll(t0 + ms(10_000)).is_empty());
        assert!(!tasks.cancel(TaskKind::Recognition));
    }

    #[test]
    fn test_reschedule_replaces_previous_instance() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let first = tasks.schedule(TaskKind::Playback, ms(3000), t0);
        let second = tasks.schedule(TaskKind::Playback, ms(3000), t0 + ms(1000));

        assert_ne!(first.generation, second.generation);
        assert_eq!(tasks.len(), 1);
        assert!(tasks.poll(t0 + ms(3500)).is_empty());
        assert_eq!(tasks.poll(t0 + ms(4000)), vec![second]);
    }

    #[test]
    fn test_stale_handle_cancels_nothing() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let stale = tasks.schedule(TaskKind::VoiceCapture, ms(2000), t0);
        let live = tasks.schedule(TaskKind::VoiceCapture, ms(2000), t0);

        assert!(!tasks.cancel_handle(stale));
        assert_eq!(tasks.handle(TaskKind::VoiceCapture), Some(live));
        assert!(tasks.cancel_handle(live));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_kinds_are_independent() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let voice = tasks.schedule(TaskKind::VoiceCapture, ms(2000), t0);
        let playback = tasks.schedule(TaskKind::Playback, ms(3000), t0);

        assert_eq!(tasks.next_deadline(), Some(t0 + ms(2000)));
        assert_eq!(tasks.poll(t0 + ms(5000)), vec![voice, playback]);
    }

    #[test]
    fn test_cancel_handle_leaves_other_kinds() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let voice = tasks.schedule(TaskKind::VoiceCapture, ms(2000), t0);
        let playback = tasks.schedule(TaskKind::Playback, ms(3000), t0);

        assert!(tasks.cancel_handle(voice));
        assert_eq!(tasks.next_deadline(), Some(t0 + ms(3000)));
        assert_eq!(tasks.poll(t0 + ms(5000)), vec![playback]);
    }
}
