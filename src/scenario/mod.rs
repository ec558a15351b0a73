//! Scripted scenarios for automated runs
//!
//! A scenario is a TOML file of timed actions, each optionally followed by
//! an assertion on the application state. Scenarios drive the GUI on the
//! real clock or run headless on a simulated one.

mod runner;

pub use runner::{run_headless, AssertionResult, ScenarioReport, ScenarioRunner};

use crate::error::{Result, SignSpeakError};
use crate::state::Screen;
use crate::translations::TranslationKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A scenario loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub scenario: ScenarioMetadata,
    /// Timed actions, ordered by time
    pub actions: Vec<ScenarioAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One action with its timing
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioAction {
    /// Milliseconds after scenario start
    pub time_ms: u64,
    pub action: ActionType,
    /// Checked right after the action runs
    #[serde(default)]
    pub assert: Option<Assertion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    Navigate {
        screen: Screen,
    },
    /// Start or stop sign recording
    ToggleRecording,
    /// Replace the text-to-sign input
    SetInput {
        text: String,
    },
    PlayGesture,
    VoiceInput,
    /// Delete the most recent history entry
    DeleteNewest,
    Log {
        message: String,
    },
    Exit {
        #[serde(default)]
        code: i32,
    },
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    ScreenIs {
        screen: Screen,
    },
    HistoryLen {
        len: usize,
    },
    /// The newest entry matches; `output` is optional
    HistoryHead {
        kind: TranslationKind,
        input: String,
        #[serde(default)]
        output: Option<String>,
    },
    IsRecording {
        #[serde(default = "default_true")]
        expected: bool,
    },
    IsPlaying {
        #[serde(default = "default_true")]
        expected: bool,
    },
    IsListening {
        #[serde(default = "default_true")]
        expected: bool,
    },
    InputIs {
        text: String,
    },
}

impl Scenario {
    /// Load and validate a scenario file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SignSpeakError::Scenario(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| SignSpeakError::Scenario(format!("failed to parse: {}", e)))?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(SignSpeakError::Scenario(
                "scenario must have at least one action".to_string(),
            ));
        }

        let mut last_time = 0;
        for action in &self.actions {
            if action.time_ms < last_time {
                return Err(SignSpeakError::Scenario(format!(
                    "actions must be ordered by time, found {}ms after {}ms",
                    action.time_ms, last_time
                )));
            }
            last_time = action.time_ms;
        }

        if !self
            .actions
            .iter()
            .any(|a| matches!(a.action, ActionType::Exit { .. }))
        {
            return Err(SignSpeakError::Scenario(
                "scenario must have an exit action".to_string(),
            ));
        }

        Ok(())
    }

    /// Time of the last action
    pub fn duration(&self) -> Duration {
        self.actions
            .last()
            .map(ScenarioAction::delay)
            .unwrap_or(Duration::ZERO)
    }
}

impl ScenarioAction {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        let scenario = Scenario::from_toml(
            r#"
            [scenario]
            name = "Record once"

            [[actions]]
            time_ms = 0
            action = { type = "navigate", screen = "sign-to-text" }

            [[actions]]
            time_ms = 100
            action = { type = "toggle_recording" }
            assert = { type = "is_recording" }

            [[actions]]
            time_ms = 200
            action = { type = "set_input", text = "Hi" }

            [[actions]]
            time_ms = 3000
            action = { type = "exit" }
        "#,
        )
        .unwrap();

        assert_eq!(scenario.scenario.name, "Record once");
        assert_eq!(
            scenario.actions[0].action,
            ActionType::Navigate {
                screen: Screen::SignToText
            }
        );
        assert_eq!(
            scenario.actions[1].assert,
            Some(Assertion::IsRecording { expected: true })
        );
        assert_eq!(scenario.actions[3].action, ActionType::Exit { code: 0 });
        assert_eq!(scenario.duration(), Duration::from_millis(3000));
    }

    #[test]
    fn test_parse_history_head() {
        let scenario = Scenario::from_toml(
            r#"
            [scenario]
            name = "Head"

            [[actions]]
            time_ms = 0
            action = { type = "log", message = "checking" }
            assert = { type = "history_head", kind = "text-to-sign", input = "Thank you" }

            [[actions]]
            time_ms = 0
            action = { type = "exit", code = 2 }
            assert = { type = "is_playing", expected = false }
        "#,
        )
        .unwrap();

        assert_eq!(
            scenario.actions[0].assert,
            Some(Assertion::HistoryHead {
                kind: TranslationKind::TextToSign,
                input: "Thank you".to_string(),
                output: None,
            })
        );
        assert_eq!(
            scenario.actions[1].assert,
            Some(Assertion::IsPlaying { expected: false })
        );
    }

    #[test]
    fn test_rejects_unordered_actions() {
        let err = Scenario::from_toml(
            r#"
            [scenario]
            name = "Backwards"

            [[actions]]
            time_ms = 500
            action = { type = "play_gesture" }

            [[actions]]
            time_ms = 100
            action = { type = "exit" }
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, SignSpeakError::Scenario(_)));
    }

    #[test]
    fn test_rejects_missing_exit() {
        let err = Scenario::from_toml(
            r#"
            [scenario]
            name = "Endless"

            [[actions]]
            time_ms = 0
            action = { type = "voice_input" }
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exit"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Scenario::from_toml("actions = []\n[scenario]\nname = \"x\"\n").is_err());
    }
}
