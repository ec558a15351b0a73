//! Sign-to-text screen state
//!
//! `Idle -> Recording -> (recognition delay) -> Idle`. Stopping before the
//! delay elapses cancels the recognition and nothing is logged.

use crate::collab::{Clipboard, SpeechOutput};
use crate::notify::Notifier;
use crate::settings::VoiceType;
use crate::tasks::{DeferredTasks, TaskHandle, TaskKind};
use crate::translations::{NewTranslation, TranslationId, TranslationKind, TranslationLog};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Text the mock recognizer always produces
pub const RECOGNIZED_TEXT: &str = "Hello, how are you today?";

/// Input recorded for every recognized sign sequence
pub const GESTURE_INPUT: &str = "Hand gestures";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

impl RecordingState {
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignToTextState {
    recording: RecordingState,
    camera_on: bool,
    detected_text: String,
    pending: Option<TaskHandle>,
}

impl SignToTextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording(&self) -> RecordingState {
        self.recording
    }

    pub fn is_recording(&self) -> bool {
        self.recording == RecordingState::Recording
    }

    /// True while a recognition is waiting on its delay
    pub fn is_processing(&self) -> bool {
        self.is_recording() && self.pending.is_some()
    }

    pub fn camera_on(&self) -> bool {
        self.camera_on
    }

    pub fn detected_text(&self) -> &str {
        &self.detected_text
    }

    /// Start recording, or stop and cancel the pending recognition
    pub fn toggle_recording(&mut self, tasks: &mut DeferredTasks, delay: Duration, now: Instant) {
        match self.recording {
            RecordingState::Idle => {
                self.recording = RecordingState::Recording;
                self.camera_on = true;
                self.pending = Some(tasks.schedule(TaskKind::Recognition, delay, now));
                info!("[SIGN] Recording started");
            }
            RecordingState::Recording => {
                if let Some(handle) = self.pending.take() {
                    tasks.cancel_handle(handle);
                }
                self.recording = RecordingState::Idle;
                info!("[SIGN] Recording stopped");
            }
        }
    }

    /// Apply a fired recognition; stale handles are ignored
    pub fn complete_recognition(
        &mut self,
        handle: TaskHandle,
        log: &mut TranslationLog,
    ) -> Option<TranslationId> {
        if self.pending != Some(handle) {
            debug!("[SIGN] Ignoring stale recognition gen {}", handle.generation);
            return None;
        }

        self.pending = None;
        self.recording = RecordingState::Idle;
        self.detected_text = RECOGNIZED_TEXT.to_string();
        Some(log.append(NewTranslation::new(
            TranslationKind::SignToText,
            GESTURE_INPUT,
            RECOGNIZED_TEXT,
        )))
    }

    /// Copy the detected text; `None` when there is nothing to copy
    pub fn request_copy(&self, clipboard: &mut dyn Clipboard, notifier: &Notifier) -> Option<String> {
        if self.detected_text.is_empty() {
            return None;
        }
        match clipboard.write_text(&self.detected_text) {
            Ok(()) => notifier.success("Text copied to clipboard!"),
            Err(e) => notifier.report(&e),
        }
        Some(self.detected_text.clone())
    }

    /// Speak the detected text; `None` when there is nothing to speak
    pub fn request_speak(
        &self,
        speech: &mut dyn SpeechOutput,
        voice: VoiceType,
        notifier: &Notifier,
    ) -> Option<String> {
        if self.detected_text.is_empty() {
            return None;
        }
        match speech.speak(&self.detected_text, voice) {
            Ok(()) => notifier.success(format!("Speaking: \"{}\"", self.detected_text)),
            Err(e) => notifier.report(&e),
        }
        Some(self.detected_text.clone())
    }

    /// Cancel pending work and forget local state
    pub fn teardown(&mut self, tasks: &mut DeferredTasks) {
        if let Some(handle) = self.pending.take() {
            tasks.cancel_handle(handle);
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{LoggingSpeech, MemoryClipboard};
    use crate::notify::{NotificationCenter, Severity};

    const DELAY: Duration = Duration::from_millis(2000);

    fn fire(tasks: &mut DeferredTasks, state: &mut SignToTextState, log: &mut TranslationLog, at: Instant) {
        for handle in tasks.poll(at) {
            state.complete_recognition(handle, log);
        }
    }

    #[test]
    fn test_recording_produces_translation_after_delay() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let mut log = TranslationLog::new();
        let mut state = SignToTextState::new();

        state.toggle_recording(&mut tasks, DELAY, t0);
        assert!(state.is_recording());
        assert!(state.is_processing());
        assert!(state.camera_on());

        fire(&mut tasks, &mut state, &mut log, t0 + Duration::from_millis(1999));
        assert!(log.is_empty());

        fire(&mut tasks, &mut state, &mut log, t0 + DELAY);
        assert_eq!(log.len(), 1);
        let head = log.head().unwrap();
        assert_eq!(head.kind, TranslationKind::SignToText);
        assert_eq!(head.input, GESTURE_INPUT);
        assert_eq!(head.output, RECOGNIZED_TEXT);
        assert_eq!(state.detected_text(), RECOGNIZED_TEXT);
        assert_eq!(state.recording(), RecordingState::Idle);
        assert!(!state.is_processing());
    }

    #[test]
    fn test_stop_before_delay_logs_nothing() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let mut log = TranslationLog::new();
        let mut state = SignToTextState::new();

        state.toggle_recording(&mut tasks, DELAY, t0);
        state.toggle_recording(&mut tasks, DELAY, t0 + Duration::from_millis(500));

        fire(&mut tasks, &mut state, &mut log, t0 + Duration::from_secs(10));
        assert!(log.is_empty());
        assert!(state.detected_text().is_empty());
        assert!(state.camera_on());
    }

    #[test]
    fn test_stale_handle_is_inert() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let mut log = TranslationLog::new();
        let mut state = SignToTextState::new();

        state.toggle_recording(&mut tasks, DELAY, t0);
        let stale = tasks.handle(TaskKind::Recognition).unwrap();
        state.toggle_recording(&mut tasks, DELAY, t0);
        state.toggle_recording(&mut tasks, DELAY, t0);

        assert_eq!(state.complete_recognition(stale, &mut log), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_copy_and_speak_are_noops_when_empty() {
        let center = NotificationCenter::new(Duration::from_secs(1));
        let state = SignToTextState::new();
        let mut clipboard = MemoryClipboard::new();
        let mut speech = LoggingSpeech::new();

        assert_eq!(state.request_copy(&mut clipboard, &center.notifier()), None);
        assert_eq!(
            state.request_speak(&mut speech, VoiceType::Female, &center.notifier()),
            None
        );
        assert_eq!(clipboard.contents(), None);
        assert!(speech.spoken().is_empty());
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let t0 = Instant::now();
        let mut center = NotificationCenter::new(Duration::from_secs(1));
        let mut tasks = DeferredTasks::new();
        let mut log = TranslationLog::new();
        let mut state = SignToTextState::new();
        state.toggle_recording(&mut tasks, DELAY, t0);
        fire(&mut tasks, &mut state, &mut log, t0 + DELAY);

        let mut clipboard = MemoryClipboard::denying();
        let copied = state.request_copy(&mut clipboard, &center.notifier());
        center.drain(t0);

        assert_eq!(copied.as_deref(), Some(RECOGNIZED_TEXT));
        let last = center.last().unwrap();
        assert_eq!(last.severity, Severity::Error);
        assert_eq!(last.message, "Unable to copy text");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_teardown_cancels_pending_recognition() {
        let t0 = Instant::now();
        let mut tasks = DeferredTasks::new();
        let mut state = SignToTextState::new();
        state.toggle_recording(&mut tasks, DELAY, t0);

        state.teardown(&mut tasks);

        assert!(tasks.is_empty());
        assert!(!state.is_recording());
        assert!(!state.camera_on());
    }
}
