//! External collaborators: clipboard, speech output, speech input
//!
//! The core calls these with a string payload and turns any failure into an
//! error notification. The headless implementations here back tests and
//! scenario runs; the GUI swaps in an egui clipboard.

use crate::error::{Result, SignSpeakError};
use crate::settings::VoiceType;
use tracing::info;

/// Text that mock voice capture "hears"
pub const CAPTURED_VOICE_TEXT: &str = "Thank you very much";

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

pub trait SpeechOutput {
    fn speak(&mut self, text: &str, voice: VoiceType) -> Result<()>;
}

pub trait SpeechInput {
    /// Produce the text heard during the last capture window
    fn capture(&mut self) -> Result<String>;
}

/// In-memory clipboard, optionally refusing every write
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects writes, like a browser without permission
    pub fn denying() -> Self {
        Self {
            contents: None,
            deny: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.deny {
            return Err(SignSpeakError::Clipboard("write permission denied".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Speech output that only logs what it would say
#[derive(Debug, Default)]
pub struct LoggingSpeech {
    spoken: Vec<(String, VoiceType)>,
}

impl LoggingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> &[(String, VoiceType)] {
        &self.spoken
    }
}

impl SpeechOutput for LoggingSpeech {
    fn speak(&mut self, text: &str, voice: VoiceType) -> Result<()> {
        info!("[SPEECH] ({}) {}", voice.label(), text);
        self.spoken.push((text.to_string(), voice));
        Ok(())
    }
}

/// Voice capture that always hears the same phrase
#[derive(Debug, Default)]
pub struct MockSpeechInput;

impl SpeechInput for MockSpeechInput {
    fn capture(&mut self) -> Result<String> {
        Ok(CAPTURED_VOICE_TEXT.to_string())
    }
}

/// The collaborators one app instance talks to
pub struct Collaborators {
    pub clipboard: Box<dyn Clipboard>,
    pub speech_output: Box<dyn SpeechOutput>,
    pub speech_input: Box<dyn SpeechInput>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::headless()
    }
}

impl Collaborators {
    /// In-memory clipboard, logging speech, mock voice capture
    pub fn headless() -> Self {
        Self {
            clipboard: Box::new(MemoryClipboard::new()),
            speech_output: Box::new(LoggingSpeech::new()),
            speech_input: Box::new(MockSpeechInput),
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_speech_output(mut self, speech: impl SpeechOutput + 'static) -> Self {
        self.speech_output = Box::new(speech);
        self
    }

    pub fn with_speech_input(mut self, speech: impl SpeechInput + 'static) -> Self {
        self.speech_input = Box::new(speech);
        self
    }
}
