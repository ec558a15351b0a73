//! Error types for the SignSpeak application
//!
//! Every error here is local to the view action that raised it. Actions turn
//! them into error notifications; none of them touch the settings store or
//! the translation log.

use thiserror::Error;

/// SignSpeak application errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignSpeakError {
    /// User input rejected before any state change
    #[error("Validation error: {0}")]
    Validation(String),

    /// Clipboard write refused by the platform
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Speech output collaborator failed
    #[error("Speech output error: {0}")]
    Speech(String),

    /// Configuration file missing, malformed or out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scenario script missing, malformed or inconsistent
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// File system I/O error
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SignSpeakError {
    fn from(e: std::io::Error) -> Self {
        SignSpeakError::Io(e.to_string())
    }
}

impl SignSpeakError {
    /// Get a user-friendly description of the error
    ///
    /// Returns the text shown in the error toast.
    pub fn user_message(&self) -> String {
        match self {
            // Validation messages are already written for the user
            SignSpeakError::Validation(msg) => msg.clone(),
            SignSpeakError::Clipboard(_) => "Unable to copy text".to_string(),
            SignSpeakError::Speech(_) => "Unable to speak text".to_string(),
            SignSpeakError::Config(_) => {
                "Configuration error. Please check settings.".to_string()
            }
            SignSpeakError::Scenario(_) => "Scenario could not be run.".to_string(),
            SignSpeakError::Io(_) => "File system error occurred.".to_string(),
        }
    }
}

/// Result type alias for SignSpeak operations
pub type Result<T> = std::result::Result<T, SignSpeakError>;
