//! Scenario runner
//!
//! The runner owns no clock. Callers pass `now` in, so the GUI drives it
//! from frame time and `run_headless` from a simulated clock.

use super::{ActionType, Assertion, Scenario, ScenarioAction};
use crate::collab::Collaborators;
use crate::config::AppConfig;
use crate::error::{Result, SignSpeakError};
use crate::state::{AppCommand, AppState, AppStateSnapshot};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Simulated frame interval for headless runs
const HEADLESS_TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed(String),
}

/// Outcome of a finished scenario
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: String,
    pub actions_run: usize,
    pub exit_code: i32,
    pub failures: Vec<String>,
    pub elapsed: Duration,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.exit_code == 0
    }
}

pub struct ScenarioRunner {
    scenario: Scenario,
    start_time: Option<Instant>,
    last_poll: Option<Instant>,
    next_action: usize,
    exit_code: Option<i32>,
    failures: Vec<String>,
}

impl ScenarioRunner {
    pub fn new(scenario: Scenario) -> Self {
        info!("[SCENARIO] Loaded: {}", scenario.scenario.name);
        if !scenario.scenario.description.is_empty() {
            info!("[SCENARIO] Description: {}", scenario.scenario.description);
        }
        info!("[SCENARIO] Total actions: {}", scenario.actions.len());

        Self {
            scenario,
            start_time: None,
            last_poll: None,
            next_action: 0,
            exit_code: None,
            failures: Vec::new(),
        }
    }

    /// Start the clock; later calls are ignored
    pub fn start(&mut self, now: Instant) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
            info!("[SCENARIO] Started: {}", self.scenario.scenario.name);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.exit_code.is_some() || self.next_action >= self.scenario.actions.len()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty() && self.exit_code.unwrap_or(0) == 0
    }

    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.last_poll) {
            (Some(start), Some(last)) => last.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Take the next action if it is due
    pub fn poll(&mut self, now: Instant) -> Option<ScenarioAction> {
        if self.is_completed() {
            return None;
        }
        let start = self.start_time?;
        self.last_poll = Some(now);

        let action = self.scenario.actions.get(self.next_action)?;
        if now.saturating_duration_since(start) < action.delay() {
            return None;
        }

        debug!(
            "[SCENARIO] Executing action at {}ms: {:?}",
            action.time_ms, action.action
        );
        self.next_action += 1;
        Some(action.clone())
    }

    /// Run every due action against `state`
    ///
    /// Returns the exit code once an exit action has run.
    pub fn step(&mut self, state: &mut AppState, now: Instant) -> Option<i32> {
        while let Some(action) = self.poll(now) {
            self.execute(&action.action, state, now);
            if let Some(assertion) = &action.assert {
                self.check_assertion(assertion, &state.snapshot());
            }
        }
        self.exit_code
    }

    fn execute(&mut self, action: &ActionType, state: &mut AppState, now: Instant) {
        match action {
            ActionType::Navigate { screen } => state.dispatch(AppCommand::Navigate(*screen), now),
            ActionType::ToggleRecording => state.dispatch(AppCommand::ToggleRecording, now),
            ActionType::SetInput { text } => {
                state.dispatch(AppCommand::SetInputText(text.clone()), now)
            }
            ActionType::PlayGesture => state.dispatch(AppCommand::PlayGesture, now),
            ActionType::VoiceInput => state.dispatch(AppCommand::VoiceInput, now),
            ActionType::DeleteNewest => match state.translations().head().map(|t| t.id) {
                Some(id) => state.dispatch(AppCommand::DeleteTranslation(id), now),
                None => debug!("[SCENARIO] History empty, nothing to delete"),
            },
            ActionType::Log { message } => info!("[SCENARIO] Log: {}", message),
            ActionType::Exit { code } => {
                info!("[SCENARIO] Exit requested with code {}", code);
                self.exit_code = Some(*code);
            }
        }
    }

    /// Check an assertion against a state snapshot
    pub fn check_assertion(
        &mut self,
        assertion: &Assertion,
        snapshot: &AppStateSnapshot,
    ) -> AssertionResult {
        let result = evaluate(assertion, snapshot);

        match &result {
            AssertionResult::Passed => info!("[SCENARIO] PASS: {:?}", assertion),
            AssertionResult::Failed(reason) => {
                error!("[SCENARIO] FAIL: {:?} - {}", assertion, reason);
                self.failures.push(reason.clone());
            }
        }

        result
    }

    pub fn report(&self) -> ScenarioReport {
        ScenarioReport {
            name: self.scenario.scenario.name.clone(),
            actions_run: self.next_action,
            exit_code: self.exit_code.unwrap_or(0),
            failures: self.failures.clone(),
            elapsed: self.elapsed(),
        }
    }

    pub fn summary(&self) -> String {
        let status = if self.passed() { "PASSED" } else { "FAILED" };
        format!(
            "[SCENARIO] '{}' {}: executed {} actions in {:?}",
            self.scenario.scenario.name,
            status,
            self.next_action,
            self.elapsed()
        )
    }
}

fn expect_flag(name: &str, expected: bool, actual: bool) -> AssertionResult {
    if expected == actual {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed(format!("Expected {} to be {}, was {}", name, expected, actual))
    }
}

fn evaluate(assertion: &Assertion, snapshot: &AppStateSnapshot) -> AssertionResult {
    match assertion {
        Assertion::ScreenIs { screen } => {
            if snapshot.screen == *screen {
                AssertionResult::Passed
            } else {
                AssertionResult::Failed(format!(
                    "Expected screen {}, was {}",
                    screen, snapshot.screen
                ))
            }
        }
        Assertion::HistoryLen { len } => {
            if snapshot.history.len() == *len {
                AssertionResult::Passed
            } else {
                AssertionResult::Failed(format!(
                    "Expected {} history entries, got {}",
                    len,
                    snapshot.history.len()
                ))
            }
        }
        Assertion::HistoryHead {
            kind,
            input,
            output,
        } => match snapshot.history.first() {
            None => AssertionResult::Failed("Expected a history entry, log is empty".to_string()),
            Some(head)
                if head.kind == *kind
                    && head.input == *input
                    && output.as_ref().map_or(true, |o| *o == head.output) =>
            {
                AssertionResult::Passed
            }
            Some(head) => AssertionResult::Failed(format!(
                "Unexpected head entry: {} {:?} -> {:?}",
                head.kind, head.input, head.output
            )),
        },
        Assertion::IsRecording { expected } => {
            expect_flag("recording", *expected, snapshot.recording.is_recording())
        }
        Assertion::IsPlaying { expected } => {
            expect_flag("playing", *expected, snapshot.is_playing)
        }
        Assertion::IsListening { expected } => {
            expect_flag("listening", *expected, snapshot.is_listening)
        }
        Assertion::InputIs { text } => {
            if snapshot.input_text == *text {
                AssertionResult::Passed
            } else {
                AssertionResult::Failed(format!(
                    "Expected input {:?}, was {:?}",
                    text, snapshot.input_text
                ))
            }
        }
    }
}

/// Run a scenario without a window on a simulated clock
pub fn run_headless(
    scenario: Scenario,
    config: AppConfig,
    collaborators: Collaborators,
) -> Result<ScenarioReport> {
    config.validate()?;

    // Give pending tasks one full delay past the last action to settle
    let limit = scenario.duration()
        + config
            .recognition_delay()
            .max(config.playback_delay())
            .max(config.voice_capture_delay());

    let mut state = AppState::with_collaborators(config, collaborators);
    let mut runner = ScenarioRunner::new(scenario);

    let t0 = Instant::now();
    let mut now = t0;
    runner.start(now);

    while !runner.is_completed() {
        if now.duration_since(t0) > limit {
            return Err(SignSpeakError::Scenario(format!(
                "scenario did not finish within {:?}",
                limit
            )));
        }
        state.tick(now);
        runner.step(&mut state, now);
        now += HEADLESS_TICK;
    }

    info!("{}", runner.summary());
    Ok(runner.report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Screen;

    fn scenario(toml: &str) -> Scenario {
        Scenario::from_toml(toml).unwrap()
    }

    #[test]
    fn test_poll_waits_for_start_and_time() {
        let mut runner = ScenarioRunner::new(scenario(
            r#"
            [scenario]
            name = "Timing"

            [[actions]]
            time_ms = 100
            action = { type = "exit" }
        "#,
        ));
        let t0 = Instant::now();
        assert!(runner.poll(t0).is_none());

        runner.start(t0);
        assert!(runner.poll(t0 + Duration::from_millis(99)).is_none());
        assert!(runner.poll(t0 + Duration::from_millis(100)).is_some());
        assert!(runner.is_completed());
    }

    #[test]
    fn test_failed_assertion_is_recorded() {
        let mut runner = ScenarioRunner::new(scenario(
            r#"
            [scenario]
            name = "Wrong screen"

            [[actions]]
            time_ms = 0
            action = { type = "exit" }
            assert = { type = "screen_is", screen = "history" }
        "#,
        ));
        let mut state = AppState::default();
        let t0 = Instant::now();
        runner.start(t0);

        assert_eq!(runner.step(&mut state, t0), Some(0));
        assert!(!runner.passed());
        let report = runner.report();
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].contains("history"));
    }

    #[test]
    fn test_nonzero_exit_fails() {
        let mut runner = ScenarioRunner::new(scenario(
            r#"
            [scenario]
            name = "Exit code"

            [[actions]]
            time_ms = 0
            action = { type = "exit", code = 3 }
        "#,
        ));
        let mut state = AppState::default();
        let t0 = Instant::now();
        runner.start(t0);
        runner.step(&mut state, t0);
        assert_eq!(runner.exit_code(), Some(3));
        assert!(!runner.report().passed());
    }

    #[test]
    fn test_history_head_optional_output() {
        let state = AppState::default();
        let snapshot = state.snapshot();
        let head = Assertion::HistoryHead {
            kind: crate::translations::TranslationKind::SignToText,
            input: "Hand gestures".to_string(),
            output: None,
        };
        assert_eq!(evaluate(&head, &snapshot), AssertionResult::Passed);
        assert_eq!(
            evaluate(&Assertion::ScreenIs { screen: Screen::Home }, &snapshot),
            AssertionResult::Passed
        );
    }

    #[test]
    fn test_headless_recording_round() {
        let report = run_headless(
            scenario(
                r#"
                [scenario]
                name = "Record"

                [[actions]]
                time_ms = 0
                action = { type = "navigate", screen = "sign-to-text" }

                [[actions]]
                time_ms = 100
                action = { type = "toggle_recording" }
                assert = { type = "is_recording" }

                [[actions]]
                time_ms = 2200
                action = { type = "log", message = "done" }
                assert = { type = "history_len", len = 4 }

                [[actions]]
                time_ms = 2300
                action = { type = "exit" }
                assert = { type = "is_recording", expected = false }
            "#,
            ),
            AppConfig::default(),
            Collaborators::headless(),
        )
        .unwrap();

        assert!(report.passed(), "failures: {:?}", report.failures);
        assert_eq!(report.actions_run, 4);
    }
}
