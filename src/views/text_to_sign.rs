//! Text-to-sign screen state
//!
//! Playback logs its translation when the animation starts, not when it
//! ends, so history shows the entry during the animation.

use crate::collab::SpeechInput;
use crate::error::{Result, SignSpeakError};
use crate::notify::Notifier;
use crate::tasks::{DeferredTasks, TaskHandle, TaskKind};
use crate::translations::{NewTranslation, TranslationId, TranslationKind, TranslationLog};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Output recorded for every played gesture
pub const PLAYBACK_OUTPUT: &str = "Sign animation played";

#[derive(Clone, Debug, Default)]
pub struct TextToSignState {
    input_text: String,
    playback: Option<TaskHandle>,
    capture: Option<TaskHandle>,
}

impl TextToSignState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.capture.is_some()
    }

    /// Whether the play control should be enabled
    pub fn can_play(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_playing()
    }

    /// Log the current input and start the animation
    ///
    /// Fails without touching any state when the input is blank. Playing
    /// again mid-animation restarts the animation.
    pub fn play_gesture(
        &mut self,
        tasks: &mut DeferredTasks,
        log: &mut TranslationLog,
        delay: Duration,
        now: Instant,
    ) -> Result<TranslationId> {
        if self.input_text.trim().is_empty() {
            return Err(SignSpeakError::Validation(
                "Please enter some text first".to_string(),
            ));
        }

        let id = log.append(NewTranslation::new(
            TranslationKind::TextToSign,
            self.input_text.clone(),
            PLAYBACK_OUTPUT,
        ));
        self.playback = Some(tasks.schedule(TaskKind::Playback, delay, now));
        info!("[PLAY] Playing {:?}", self.input_text);
        Ok(id)
    }

    /// Apply a fired playback completion; stale handles are ignored
    pub fn finish_playback(&mut self, handle: TaskHandle) -> bool {
        if self.playback != Some(handle) {
            debug!("[PLAY] Ignoring stale playback gen {}", handle.generation);
            return false;
        }
        self.playback = None;
        info!("[PLAY] Animation finished");
        true
    }

    /// Start voice capture; ignored while a capture is already running
    pub fn voice_input(&mut self, tasks: &mut DeferredTasks, delay: Duration, now: Instant) -> bool {
        if self.is_listening() {
            debug!("[VOICE] Already listening, ignoring");
            return false;
        }
        self.capture = Some(tasks.schedule(TaskKind::VoiceCapture, delay, now));
        info!("[VOICE] Listening");
        true
    }

    /// Apply a fired capture: replace the input with what was heard
    pub fn finish_voice_capture(
        &mut self,
        handle: TaskHandle,
        speech: &mut dyn SpeechInput,
        notifier: &Notifier,
    ) -> bool {
        if self.capture != Some(handle) {
            debug!("[VOICE] Ignoring stale capture gen {}", handle.generation);
            return false;
        }
        self.capture = None;

        match speech.capture() {
            Ok(text) => {
                info!("[VOICE] Captured {:?}", text);
                self.input_text = text;
                notifier.success("Voice input captured!");
                true
            }
            Err(e) => {
                notifier.report(&e);
                false
            }
        }
    }

    /// Cancel pending work and forget local state
    pub fn teardown(&mut self, tasks: &mut DeferredTasks) {
        for handle in [self.playback.take(), self.capture.take()].into_iter().flatten() {
            tasks.cancel_handle(handle);
        }
        *self = Self::default();
    }
}
