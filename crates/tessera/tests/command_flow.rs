//! End-to-end resolution of a command invocation.

use std::sync::{Arc, Mutex};

use anyhow::Context;
use tessera::prelude::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GameMode {
    Survival,
    Creative,
    Adventure,
}

fn game_modes() -> EnumParser<GameMode> {
    EnumParser::new(
        EnumTable::new(GameMode::Survival)
            .with_entry("creative", GameMode::Creative)
            .with_entry("adventure", GameMode::Adventure),
    )
}

fn amounts() -> ListParser<u32> {
    ListParser::with_converter(|element: &str| {
        element
            .trim()
            .parse::<u32>()
            .with_context(|| format!("'{element}' is not an amount"))
    })
    .with_rule(MinMax::at_most(3))
    .with_guard(Guard::silent())
}

#[test]
fn resolves_a_full_command() {
    let tessera = Tessera::builder(TesseraConfig::default())
        .parser(game_modes())
        .parser(amounts())
        .build();

    let player = Uuid::new_v4();
    let args: CommandArguments = [
        CommandValue::new("player", player.to_string()),
        CommandValue::new("mode", "Creative"),
        CommandValue::new("amounts", "1, 2,3,4"),
        CommandValue::new("lang", "fr_fr"),
    ]
    .into_iter()
    .collect();

    assert_eq!(tessera.require::<Uuid>(&args, "player").ok(), Some(player));
    assert_eq!(tessera.require::<GameMode>(&args, "mode").ok(), Some(GameMode::Creative));
    assert_eq!(tessera.require::<Vec<u32>>(&args, "amounts").ok(), Some(vec![1, 2, 3]));
    assert_eq!(tessera.get::<Language>(&args, "lang").into_option(), Some(Language::FrFr));
}

#[test]
fn conversion_failure_reaches_the_handler_once() {
    let reports = Arc::new(Mutex::new(Vec::<Vec<String>>::new()));
    let sink = Arc::clone(&reports);
    let reporter = ErrorReporter::new(ReportStyle::Minimal);
    let guard = Guard::with_handler(move |error| sink.lock().unwrap().push(reporter.render(error)));

    let tessera = Tessera::builder(TesseraConfig::default())
        .parser(
            ListParser::<u32>::with_converter(|element: &str| {
                element.parse::<u32>().context("not an amount")
            })
            .with_guard(guard),
        )
        .build();

    let outcome = tessera.resolve::<Vec<u32>>(&CommandValue::new("amounts", "5,five"));

    let error = outcome.error().expect("conversion should fail");
    assert_eq!(error.key(), Some("amounts"));
    assert_eq!(error.error_code(), "INVOCATION_FAILED");

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1, "handler called once");
    assert_eq!(reports[0].len(), 1, "minimal report is a single line");
    assert!(reports[0][0].starts_with("INVOCATION_FAILED"));
}

#[test]
fn stock_list_parser_uses_configured_guard() {
    let failures = Arc::new(Mutex::new(0_usize));
    let seen = Arc::clone(&failures);

    let tessera = Tessera::builder(TesseraConfig::default())
        .error_handler(move |_| *seen.lock().unwrap() += 1)
        .build();

    // String elements never fail to convert
    let names = tessera.resolve::<Vec<String>>(&CommandValue::new("names", ",,"));
    assert_eq!(names.value().map(Vec::len), Some(3));
    assert_eq!(*failures.lock().unwrap(), 0);
}

#[test]
fn unknown_mode_falls_back() {
    let tessera = Tessera::builder(TesseraConfig::default())
        .parser(game_modes())
        .build();

    let mode = tessera.resolve::<GameMode>(&CommandValue::new("mode", "hardcore"));
    assert_eq!(mode.into_option(), Some(GameMode::Survival));
}
