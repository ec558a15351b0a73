//! Headless scenario runs
//!
//! Each scenario runs against a fresh `AppState` on a simulated clock.

use signspeak::collab::Collaborators;
use signspeak::scenario::{run_headless, Scenario};
use signspeak::{AppConfig, SignSpeakError};

fn run(toml: &str, config: AppConfig) -> signspeak::scenario::ScenarioReport {
    let scenario = Scenario::from_toml(toml).expect("scenario should parse");
    run_headless(scenario, config, Collaborators::headless()).expect("scenario should finish")
}

#[test]
fn test_demo_record_and_review() {
    let report = run(
        include_str!("../demos/record_and_review.toml"),
        AppConfig::default(),
    );
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.name, "Record and review");
}

#[test]
fn test_demo_play_and_delete() {
    let report = run(
        include_str!("../demos/play_and_delete.toml"),
        AppConfig::default(),
    );
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.actions_run, 9);
}

#[test]
fn test_leaving_mid_recording_logs_nothing() {
    let report = run(
        r#"
        [scenario]
        name = "Walk away"

        [[actions]]
        time_ms = 0
        action = { type = "navigate", screen = "sign-to-text" }

        [[actions]]
        time_ms = 100
        action = { type = "toggle_recording" }

        [[actions]]
        time_ms = 1000
        action = { type = "navigate", screen = "home" }

        [[actions]]
        time_ms = 4000
        action = { type = "exit" }
        assert = { type = "history_len", len = 3 }
        "#,
        AppConfig::default(),
    );
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn test_blank_input_is_not_logged() {
    let report = run(
        r#"
        [scenario]
        name = "Blank"

        [[actions]]
        time_ms = 0
        action = { type = "navigate", screen = "text-to-sign" }

        [[actions]]
        time_ms = 50
        action = { type = "set_input", text = "   " }

        [[actions]]
        time_ms = 100
        action = { type = "play_gesture" }
        assert = { type = "is_playing", expected = false }

        [[actions]]
        time_ms = 150
        action = { type = "exit" }
        assert = { type = "history_len", len = 0 }
        "#,
        AppConfig::default().without_seed_history(),
    );
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn test_configured_delays_are_used() {
    let report = run(
        r#"
        [scenario]
        name = "Fast recognizer"

        [[actions]]
        time_ms = 0
        action = { type = "navigate", screen = "sign-to-text" }

        [[actions]]
        time_ms = 0
        action = { type = "toggle_recording" }

        [[actions]]
        time_ms = 300
        action = { type = "exit" }
        assert = { type = "history_len", len = 1 }
        "#,
        AppConfig::default()
            .without_seed_history()
            .with_delays(200, 200, 200),
    );
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn test_failing_assertion_fails_report() {
    let report = run(
        r#"
        [scenario]
        name = "Wrong expectation"

        [[actions]]
        time_ms = 0
        action = { type = "navigate", screen = "settings" }
        assert = { type = "screen_is", screen = "history" }

        [[actions]]
        time_ms = 50
        action = { type = "exit" }
        "#,
        AppConfig::default(),
    );
    assert!(!report.passed());
    assert_eq!(report.failures.len(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let scenario = Scenario::from_toml(
        r#"
        [scenario]
        name = "Any"

        [[actions]]
        time_ms = 0
        action = { type = "exit" }
        "#,
    )
    .unwrap();
    let config = AppConfig::default().with_delays(0, 3000, 2000);

    let err = run_headless(scenario, config, Collaborators::headless()).unwrap_err();
    assert!(matches!(err, SignSpeakError::Config(_)));
}

#[test]
fn test_unknown_action_fails_to_parse() {
    let err = Scenario::from_toml(
        r#"
        [scenario]
        name = "Typo"

        [[actions]]
        time_ms = 0
        action = { type = "toggle_recordin" }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SignSpeakError::Scenario(_)));
}
