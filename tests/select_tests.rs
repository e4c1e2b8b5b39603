use std::io;

use termprompt::{
    PromptError,
    tui::{Choice, Key, KeyScript, MemorySurface, MultiSelect, SingleSelect},
};

fn fruits() -> Vec<Choice<String>> {
    vec![
        Choice::from("Apple"),
        Choice::from("Banana"),
        Choice::from("Cherry"),
    ]
}

fn letters() -> Vec<Choice<String>> {
    ["A", "B", "C", "D"].into_iter().map(Choice::from).collect()
}

#[test]
fn test_search_then_select() {
    let mut keys = KeyScript::new([Key::Tab])
        .typing("an")
        .then(Key::Escape)
        .then(Key::Space)
        .then(Key::Enter);
    let mut surface = MemorySurface::default();

    let picked = SingleSelect::new(fruits())
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert_eq!(picked.map(|c| c.label), Some("Banana".to_string()));
    assert_eq!(keys.remaining(), 0);
}

#[test]
fn test_required_single_waits_for_selection() {
    let mut keys = KeyScript::new([Key::Enter, Key::Down, Key::Space, Key::Enter]);
    let mut surface = MemorySurface::default();

    let picked = SingleSelect::new(fruits())
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert_eq!(picked.map(|c| c.value), Some("Banana".to_string()));

    // Initial frame plus one per key that kept the session running
    assert_eq!(surface.frames().len(), 4);
    let rejected: Vec<String> = surface.frames()[1]
        .iter()
        .map(termprompt::tui::line_text)
        .collect();
    assert!(rejected.iter().any(|line| line == "No selection made (required)"));
}

#[test]
fn test_optional_single_confirms_empty() {
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();

    let picked = SingleSelect::new(fruits())
        .optional()
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert!(picked.is_none());
}

#[test]
fn test_exact_count_rejects_third_choice() {
    let mut keys = KeyScript::new([
        Key::Space,
        Key::Down,
        Key::Space,
        Key::Down,
        Key::Space,
        Key::Enter,
    ]);
    let mut surface = MemorySurface::default();

    let picked = MultiSelect::new(letters())
        .with_min_selected_count(2)
        .with_max_selected_count(2)
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    let labels: Vec<String> = picked.into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["A", "B"]);

    let after_c = &surface.frames()[5];
    assert!(
        after_c
            .iter()
            .map(termprompt::tui::line_text)
            .any(|line| line == "Cannot select more than 2 choices")
    );
}

#[test]
fn test_multi_returns_selection_order() {
    let mut keys = KeyScript::new([
        Key::Down,
        Key::Down,
        Key::Space,
        Key::Up,
        Key::Up,
        Key::Space,
        Key::Enter,
    ]);
    let mut surface = MemorySurface::default();

    let picked = MultiSelect::new(letters())
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    let labels: Vec<String> = picked.into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["C", "A"]);
}

#[test]
fn test_interrupt_releases_terminal() {
    let mut keys = KeyScript::new([Key::Down, Key::Interrupt]);
    let mut surface = MemorySurface::default();

    let err = SingleSelect::new(fruits())
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    assert!(err.is_interrupted());
    assert_eq!(surface.acquired(), 1);
    assert_eq!(surface.released(), 1);
}

#[test]
fn test_interrupt_while_searching_releases_terminal() {
    let mut keys = KeyScript::new([Key::Space, Key::Tab])
        .typing("ch")
        .then(Key::Interrupt);
    let mut surface = MemorySurface::default();

    let err = MultiSelect::new(fruits())
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    assert!(err.is_interrupted());
    assert_eq!(keys.remaining(), 0);
    assert_eq!(surface.acquired(), 1);
    assert_eq!(surface.released(), 1);
}

#[test]
fn test_required_multi_with_zero_minimum_needs_a_selection() {
    let mut keys = KeyScript::new([Key::Enter, Key::Space, Key::Enter]);
    let mut surface = MemorySurface::default();

    let picked = MultiSelect::new(fruits())
        .with_min_selected_count(0)
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert_eq!(picked.len(), 1);
    let rejected: Vec<String> = surface.frames()[1]
        .iter()
        .map(termprompt::tui::line_text)
        .collect();
    assert!(
        rejected
            .iter()
            .any(|line| line == "At least 1 choice must be selected")
    );
}

#[test]
fn test_optional_multi_with_zero_minimum_confirms_empty() {
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();

    let picked = MultiSelect::new(fruits())
        .optional()
        .with_min_selected_count(0)
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    assert!(picked.is_empty());
}

#[test]
fn test_exhausted_keys_release_terminal() {
    let mut keys = KeyScript::new([Key::Down]);
    let mut surface = MemorySurface::default();

    let err = MultiSelect::new(fruits())
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    assert!(matches!(err, PromptError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    assert_eq!(surface.released(), 1);
}

#[test]
fn test_no_choices() {
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();

    let err = SingleSelect::<String>::new(Vec::new())
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    assert!(matches!(err, PromptError::NoChoices));
    assert_eq!(surface.acquired(), 0);
}

#[test]
fn test_invalid_selection_count() {
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();

    let err = MultiSelect::new(letters())
        .with_min_selected_count(3)
        .with_max_selected_count(2)
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    assert!(matches!(
        err,
        PromptError::InvalidSelectionCount { min: 3, max: 2 }
    ));
    assert_eq!(surface.acquired(), 0);
    assert_eq!(keys.remaining(), 1);
}

#[test]
fn test_terminal_too_small() {
    let choices: Vec<Choice<usize>> = (0..20)
        .map(|i| Choice::new(i, format!("Item {i}")))
        .collect();
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::new(80, 10);

    let err = SingleSelect::new(choices)
        .with_page_size(10)
        .prompt_with(&mut keys, &mut surface)
        .unwrap_err();

    match err {
        PromptError::TerminalTooSmall {
            columns,
            rows,
            required_rows,
            ..
        } => {
            assert_eq!((columns, rows), (80, 10));
            assert_eq!(required_rows, 19);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(surface.acquired(), 0);
    assert!(surface.frames().is_empty());
}

#[test]
fn test_frame_height_matches_page() {
    let choices: Vec<Choice<usize>> = (0..20)
        .map(|i| Choice::new(i, format!("Item {i}")))
        .collect();
    let mut keys = KeyScript::new([
        Key::Down,
        Key::Down,
        Key::Tab,
        Key::Char('1'),
        Key::Interrupt,
    ]);
    let mut surface = MemorySurface::default();

    let _ = SingleSelect::new(choices)
        .with_page_size(5)
        .with_description("Pick one")
        .prompt_with(&mut keys, &mut surface);

    // Description, header, search, five rows, blank, validation and two help lines
    assert_eq!(surface.height(), Some(12));
    assert!(surface.frames().iter().all(|frame| frame.len() == 12));
}

#[test]
fn test_disabled_choice_is_skipped_by_defaults() {
    let choices = vec![
        Choice::new(1, "One"),
        Choice::disabled(2, "Two"),
        Choice::new(3, "Three"),
    ];
    let mut keys = KeyScript::new([Key::Enter]);
    let mut surface = MemorySurface::default();

    let picked = MultiSelect::new(choices)
        .with_default_choices([1, 2, 9])
        .prompt_with(&mut keys, &mut surface)
        .unwrap();

    let values: Vec<i32> = picked.into_iter().map(|c| c.value).collect();
    assert_eq!(values, vec![3]);
}
