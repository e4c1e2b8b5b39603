//! Frame rendering for selection prompts.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{SelectConfig, engine::Session};
use crate::tui::{
    components::Choice,
    theme::{Role, Theme},
};

const HELP_KEYS: &str = "↑/↓ move . space select . enter confirm";
const HELP_BROWSING: &str = "tab to search";
const HELP_SEARCHING: &str = "type to search (ESC/TAB nav)";

/// Renders the full frame for the current session state.
///
/// The number of rows only depends on the configuration, never on the
/// filter, so the frame does not jump while typing.
pub(crate) fn render_frame<T: PartialEq>(
    session: &Session<'_, T>,
    config: &SelectConfig<T>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(session.page_size().saturating_add(7));

    if !config.description.is_empty() {
        lines.push(Line::from(
            theme.decorate(Role::Description, config.description.clone()),
        ));
    }

    lines.push(Line::from(vec![
        theme.decorate(Role::Prefix, config.prefix.clone()),
        theme.decorate(Role::Label, config.label.clone()),
    ]));

    lines.push(search_line(session, theme));

    for (pos, choice) in session.visible() {
        let current = pos == session.cursor();
        let selected = session.is_selected(choice);
        lines.push(render_row(choice, current, selected, config, theme));
    }

    // Pad to a constant height
    for _ in session.window().len()..session.page_size() {
        lines.push(Line::default());
    }

    lines.push(Line::default());
    lines.push(Line::from(theme.decorate(
        Role::ValidationFail,
        session.message().unwrap_or_default().to_string(),
    )));

    let mode_help = if session.searching() {
        HELP_SEARCHING
    } else {
        HELP_BROWSING
    };
    lines.push(Line::from(theme.decorate(Role::Help, HELP_KEYS)));
    lines.push(Line::from(theme.decorate(Role::Help, mode_help)));

    lines
}

fn search_line<T: PartialEq>(session: &Session<'_, T>, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        theme.decorate(Role::SearchLabel, "Search: "),
        theme.decorate(Role::SearchHint, session.query().to_string()),
    ];
    if session.searching() {
        spans.push(theme.decorate(
            Role::SearchHint,
            format!(" ◂ {} hits", session.filtered_len()),
        ));
    }
    spans.push(theme.decorate(
        Role::SearchHint,
        format!(" [{} selected]", session.selected_count()),
    ));
    Line::from(spans)
}

/// One list row. Precedence: current+disabled, current+selected, disabled,
/// selected, current, plain.
fn render_row<T>(
    choice: &Choice<T>,
    current: bool,
    selected: bool,
    config: &SelectConfig<T>,
    theme: &Theme,
) -> Line<'static> {
    let cursor = config.cursor_indicator.as_str();
    let cursor_pad = " ".repeat(cursor.width());
    let selection_pad = " ".repeat(config.selection_marker.width());
    let label = choice.label.clone();

    let spans = match (current, selected, choice.disabled) {
        (true, _, true) => vec![
            theme.decorate(
                Role::DisabledMarker,
                format!("{cursor}{}", config.disabled_marker),
            ),
            theme.decorate(Role::DisabledLabel, label),
        ],
        (true, true, false) => vec![
            theme.decorate(
                Role::SelectedMarker,
                format!("{cursor}{}", config.selection_marker),
            ),
            theme.decorate(Role::SelectedLabel, label),
        ],
        (false, _, true) => vec![
            Span::raw(cursor_pad),
            theme.decorate(Role::DisabledMarker, config.disabled_marker.clone()),
            theme.decorate(Role::DisabledLabel, label),
        ],
        (false, true, false) => vec![
            Span::raw(cursor_pad),
            theme.decorate(Role::SelectedMarker, config.selection_marker.clone()),
            theme.decorate(Role::SelectedLabel, label),
        ],
        (true, false, false) => vec![
            theme.decorate(Role::CurrentMarker, cursor.to_string()),
            Span::raw(selection_pad),
            theme.decorate(Role::CurrentLabel, label),
        ],
        (false, false, false) => vec![
            Span::raw(cursor_pad),
            Span::raw(selection_pad),
            theme.decorate(Role::ItemLabel, label),
        ],
    };
    Line::from(spans)
}
