//! End-to-end tests for the interactive care session.
//!
//! Sessions run against a scripted console and a recording pacer, so no
//! test actually sleeps.

use std::time::Duration;

use sprout_core::policy::{DurationTable, PolicyRegistry, Species, TimingPolicy};
use sprout_core::{CareAction, CareSession, Locale, SessionError, SessionSummary};
use sprout_test_utils::{Line, RecordingPacer, ScriptedConsole};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const COMPLETION: &str = "has finished growing";

struct Outcome {
    result: Result<SessionSummary, SessionError>,
    console: ScriptedConsole,
    pacer: RecordingPacer,
}

impl Outcome {
    fn summary(&self) -> &SessionSummary {
        match &self.result {
            Ok(summary) => summary,
            Err(e) => panic!("session failed: {e}"),
        }
    }
}

fn run_session(locale: Locale, answers: &[&str]) -> Outcome {
    let mut console = ScriptedConsole::new(answers.iter().copied());
    let mut pacer = RecordingPacer::new();
    let result = CareSession::new(locale, &mut console, &mut pacer).run();
    Outcome {
        result,
        console,
        pacer,
    }
}

fn secs(values: &[u64]) -> Vec<Duration> {
    values.iter().map(|s| Duration::from_secs(*s)).collect()
}

/// Answers that apply `action` `times` times and then stop.
fn repeat_action(species: &str, action: &str, times: usize) -> Vec<String> {
    let mut answers = vec![species.to_string()];
    for i in 0..times {
        answers.push(action.to_string());
        answers.push(if i + 1 == times { "no" } else { "yes" }.to_string());
    }
    answers
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn cactus_water_uses_two_seconds() {
    let out = run_session(Locale::English, &["Cactus", "Water", "no"]);
    let summary = out.summary();

    assert_eq!(summary.species, Species::Cactus);
    assert_eq!(summary.plant.name(), "Cactus");
    assert_eq!(summary.plant.growth(), 10);
    assert_eq!(summary.actions.len(), 1);
    assert_eq!(summary.actions[0].action, CareAction::Water);
    assert_eq!(summary.actions[0].duration, Duration::from_secs(2));
    assert_eq!(summary.actions[0].growth_after, 10);
    assert_eq!(out.pacer.pauses(), secs(&[2]).as_slice());
}

#[test]
fn rose_pest_control_uses_five_seconds() {
    let out = run_session(Locale::English, &["Rose", "ControlPests", "no"]);
    let summary = out.summary();

    assert_eq!(summary.species, Species::Rose);
    assert_eq!(summary.plant.growth(), 10);
    assert_eq!(summary.actions[0].duration, Duration::from_secs(5));
    assert_eq!(out.pacer.pauses(), secs(&[5]).as_slice());
}

#[test]
fn tomato_four_actions_reach_forty_without_completion() {
    let out = run_session(
        Locale::English,
        &[
            "Tomato",
            "Water",
            "yes",
            "Feed",
            "yes",
            "ControlPests",
            "yes",
            "AdjustSunlight",
            "no",
        ],
    );
    let summary = out.summary();

    assert_eq!(summary.plant.growth(), 40);
    assert_eq!(out.pacer.pauses(), secs(&[4, 3, 5, 3]).as_slice());
    assert_eq!(out.console.count_said(COMPLETION), 0);
    assert_eq!(
        summary
            .actions
            .iter()
            .map(|a| a.growth_after)
            .collect::<Vec<_>>(),
        vec![10, 20, 30, 40]
    );
}

#[test]
fn summary_durations_match_pacer_pauses() {
    let out = run_session(
        Locale::English,
        &["Rose", "Water", "yes", "ControlPests", "yes", "Feed", "no"],
    );
    let recorded: Vec<Duration> = out.summary().actions.iter().map(|a| a.duration).collect();

    assert_eq!(recorded.as_slice(), out.pacer.pauses());
    assert_eq!(recorded, secs(&[3, 5, 1]));
}

#[test]
fn tenth_action_completes_growth_for_every_species() {
    for (species, secs_per_feed) in [("Cactus", 2), ("Rose", 1), ("Tomato", 3)] {
        let answers = repeat_action(species, "Feed", 10);
        let answers: Vec<&str> = answers.iter().map(String::as_str).collect();
        let out = run_session(Locale::English, &answers);
        let summary = out.summary();

        assert_eq!(summary.plant.growth(), 100, "{species}");
        assert_eq!(out.console.count_said(COMPLETION), 1, "{species}");
        assert_eq!(
            out.pacer.total(),
            Duration::from_secs(10 * secs_per_feed),
            "{species}"
        );
        assert!(
            summary.actions[..9].iter().all(|a| a.growth_after < 100),
            "{species}"
        );
        assert_eq!(summary.actions[9].growth_after, 100, "{species}");
    }
}

#[test]
fn completion_repeats_after_threshold_and_growth_keeps_climbing() {
    let answers = repeat_action("Rose", "AdjustSunlight", 13);
    let answers: Vec<&str> = answers.iter().map(String::as_str).collect();
    let out = run_session(Locale::English, &answers);

    assert_eq!(out.summary().plant.growth(), 130);
    assert_eq!(out.console.count_said(COMPLETION), 4);
    assert_eq!(out.console.count_said("Current growth: 130%"), 1);
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[test]
fn species_near_misses_are_rejected() {
    let out = run_session(
        Locale::English,
        &["cactus", "", "Rose ", " Tomato", "Cactus", "Water", "no"],
    );

    assert_eq!(out.summary().species, Species::Cactus);
    assert_eq!(out.console.count_said("No such plant."), 4);

    let prompts = out.console.prompts();
    assert_eq!(
        prompts[0],
        "Which plant would you like to care for? (Cactus/Rose/Tomato) "
    );
    for retry in &prompts[1..5] {
        assert_eq!(*retry, "Which plant would you like to care for? ");
    }
}

#[test]
fn unknown_actions_are_rejected_without_growth() {
    let out = run_session(
        Locale::English,
        &["Rose", "Prune", "water", "Water", "no"],
    );

    assert_eq!(out.summary().plant.growth(), 10);
    assert_eq!(out.pacer.pauses().len(), 1);
    assert_eq!(
        out.console.count_said("That care action cannot be performed."),
        2
    );
}

#[test]
fn continuation_accepts_only_two_tokens() {
    let out = run_session(
        Locale::English,
        &["Tomato", "Water", "maybe", "Yes", "N", "", "no"],
    );
    let summary = out.summary();

    assert_eq!(summary.plant.growth(), 10);
    assert_eq!(summary.actions.len(), 1);
    assert_eq!(out.pacer.pauses().len(), 1);
    assert_eq!(out.console.count_said("Invalid input."), 4);

    let continue_prompts = out
        .console
        .prompts()
        .into_iter()
        .filter(|p| p.starts_with("Perform another care action?"))
        .count();
    assert_eq!(continue_prompts, 5);
}

// ---------------------------------------------------------------------------
// Sequencing and shutdown
// ---------------------------------------------------------------------------

#[test]
fn care_output_follows_start_decoration_done_growth_order() {
    let out = run_session(Locale::English, &["Cactus", "ControlPests", "no"]);
    let transcript = out.console.transcript();

    let said = |s: &str| Line::Said(s.to_string());
    let start = transcript
        .iter()
        .position(|l| *l == said("Controlling pests..."))
        .expect("start line");
    let art = transcript
        .iter()
        .position(|l| *l == said("- - bzzz - -"))
        .expect("decoration");
    let done = transcript
        .iter()
        .position(|l| *l == said("Pest control complete!"))
        .expect("done line");
    let growth = transcript
        .iter()
        .position(|l| *l == said("Cactus has grown 10%. Current growth: 10%"))
        .expect("growth line");

    assert!(start < art && art < done && done < growth);
}

#[test]
fn shutdown_message_is_last_output() {
    let out = run_session(Locale::English, &["Rose", "Feed", "no"]);
    assert_eq!(
        out.console.transcript().last(),
        Some(&Line::Said("Shutting down the plant care system.".to_string()))
    );
    assert_eq!(out.console.count_said("Shutting down"), 1);
}

#[test]
fn closed_input_ends_session_with_error() {
    let out = run_session(Locale::English, &["Cactus", "Water"]);

    match out.result {
        Err(SessionError::InputClosed { prompt }) => {
            assert!(prompt.starts_with("Perform another care action?"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("session should not finish without an answer"),
    }
    assert_eq!(out.pacer.pauses(), secs(&[2]).as_slice());
}

// ---------------------------------------------------------------------------
// Locales and catalogs
// ---------------------------------------------------------------------------

#[test]
fn korean_session_uses_korean_tokens() {
    let out = run_session(
        Locale::Korean,
        &["Rose", "장미", "해충관리", "yes", "Y", "물주기", "N"],
    );
    let summary = out.summary();

    assert_eq!(summary.species, Species::Rose);
    assert_eq!(summary.plant.name(), "장미");
    assert_eq!(summary.plant.growth(), 20);
    assert_eq!(out.pacer.pauses(), secs(&[5, 3]).as_slice());
    assert_eq!(out.console.count_said("존재하지 않는 식물입니다"), 1);
    assert_eq!(out.console.count_said("잘못된 입력입니다"), 1);
    assert_eq!(out.console.count_said("- - 윙윙 - -"), 1);
    assert_eq!(
        out.console.said().last().copied(),
        Some("식물 관리 시스템을 종료합니다.")
    );
}

struct QuickRose;

const QUICK: DurationTable = DurationTable::from_secs(0, 0, 0, 0);

impl TimingPolicy for QuickRose {
    fn species(&self) -> Species {
        Species::Rose
    }

    fn durations(&self) -> &DurationTable {
        &QUICK
    }
}

#[test]
fn custom_registry_limits_species_and_drives_durations() {
    let mut registry = PolicyRegistry::new();
    registry.register(QuickRose);

    let mut console = ScriptedConsole::new(["Cactus", "Rose", "Water", "no"]);
    let mut pacer = RecordingPacer::new();
    let summary = CareSession::new(Locale::English, &mut console, &mut pacer)
        .with_registry(registry)
        .run()
        .unwrap();

    assert_eq!(summary.species, Species::Rose);
    assert_eq!(summary.actions[0].duration, Duration::ZERO);
    assert_eq!(pacer.pauses(), &[Duration::ZERO]);
    assert_eq!(console.count_said("No such plant."), 1);
    assert_eq!(
        console.prompts()[0],
        "Which plant would you like to care for? (Rose) "
    );
}
