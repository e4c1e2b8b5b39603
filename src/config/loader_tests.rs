use std::io::Write;

use tempfile::NamedTempFile;

use super::loader::{ChoiceSpec, PromptFile, PromptKind};
use crate::tui::{Key, KeyScript, MemorySurface};

const MULTI_TOML: &str = r#"
kind = "multi"
label = "Toppings"
description = "Pick up to two"
max = 2
defaults = [0]

[[choices]]
value = "cheese"
label = "Cheese"

[[choices]]
value = "olives"
disabled = true

[[choices]]
value = "basil"
"#;

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_prompt_file_defaults() {
    let file = PromptFile::from_toml("").unwrap();

    assert_eq!(file.kind, PromptKind::Single);
    assert!(file.choices.is_empty());
    assert!(!file.optional);
    assert_eq!(file.theme().unwrap(), None);
}

#[test]
fn test_load_toml() {
    let temp = temp_file(".toml", MULTI_TOML);
    let file = PromptFile::load(temp.path()).unwrap();

    assert_eq!(file.kind, PromptKind::Multi);
    assert_eq!(file.label.as_deref(), Some("Toppings"));
    assert_eq!(file.max, Some(2));
    assert_eq!(file.defaults, vec![0]);
    assert_eq!(file.choices.len(), 3);
    assert!(file.choices[1].disabled);
}

#[test]
fn test_load_json() {
    let json = r#"{
        "label": "Fruit",
        "optional": true,
        "choices": [
            { "value": "a", "label": "Apple" },
            { "value": "b" }
        ]
    }"#;
    let temp = temp_file(".json", json);
    let file = PromptFile::load(temp.path()).unwrap();

    assert_eq!(file.kind, PromptKind::Single);
    assert!(file.optional);

    let choices = file.choices();
    assert_eq!(choices[0].label, "Apple");
    assert_eq!(choices[1].label, "b");
}

#[test]
fn test_load_reports_path() {
    let temp = temp_file(".toml", "kind = [");
    let err = PromptFile::load(temp.path()).unwrap_err();

    assert!(
        format!("{err}").contains(&temp.path().display().to_string()),
        "error should name the file: {err:#}"
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = PromptFile::load(&missing).unwrap_err();
    assert!(format!("{err}").starts_with("Unable to read"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    assert!(PromptFile::from_toml(r#"kind = "triple""#).is_err());
}

#[test]
fn test_theme_lookup() {
    let file = PromptFile::builder().theme("Tokyo_Night").build();
    assert!(file.theme().unwrap().is_some());

    let file = PromptFile::builder().theme("neon").build();
    let err = file.theme().unwrap_err();
    assert!(format!("{err}").contains("catppuccin-mocha"));
}

#[test]
fn test_builders() {
    let choice = ChoiceSpec::builder().value("x").label("Ex").build();
    assert!(!choice.disabled);
    assert_eq!(choice.to_choice().label, "Ex");

    let file = PromptFile::builder()
        .kind(PromptKind::Multi)
        .choices(vec![choice])
        .min(1)
        .build();
    assert_eq!(file.min, Some(1));
    assert_eq!(file.max, None);
    assert!(file.defaults.is_empty());
}

#[test]
fn test_round_trip_keeps_choices() {
    let file = PromptFile::from_toml(MULTI_TOML).unwrap();
    let json = serde_json::to_string(&file).unwrap();

    assert_eq!(PromptFile::from_json(&json).unwrap(), file);
}

#[test]
fn test_multi_select_from_file() {
    let file = PromptFile::from_toml(MULTI_TOML).unwrap();
    let prompt = file.multi_select().unwrap();

    // Cheese is preselected; olives are disabled; select basil and confirm
    let mut keys = KeyScript::new([Key::Down, Key::Down, Key::Space, Key::Enter]);
    let mut surface = MemorySurface::default();
    let picked = prompt.prompt_with(&mut keys, &mut surface).unwrap();

    let values: Vec<&str> = picked.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["cheese", "basil"]);
    assert_eq!(surface.last_frame_text()[0], "Pick up to two");
}

#[test]
fn test_single_select_from_file() {
    let file = PromptFile::builder()
        .label("Fruit")
        .defaults(vec![1])
        .choices(vec![
            ChoiceSpec::builder().value("a").build(),
            ChoiceSpec::builder().value("b").build(),
        ])
        .build();

    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();
    let picked = file
        .single_select()
        .unwrap()
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert_eq!(picked.map(|c| c.value), Some("b".to_string()));
}
