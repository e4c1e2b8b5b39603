//! Theme configuration for consistent styling across prompt components.
//!
//! A [`Palette`] names the colors, a [`Theme`] maps every semantic [`Role`]
//! to a concrete [`Style`]. Themes are plain values: each prompt resolves
//! one at session start, there is no process-wide theme.

use std::{
    borrow::Cow,
    env,
    io::{self, IsTerminal},
};

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Named colors a theme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub background_alt: Color,
    pub foreground: Color,
    pub foreground_alt: Color,

    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub highlight: Color,
    pub muted: Color,

    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub orange: Color,
}

impl Palette {
    /// 256-color ANSI palette, works on every color terminal.
    pub const DEFAULT: Self = Self {
        background: Color::Indexed(0),
        background_alt: Color::Indexed(8),
        foreground: Color::Indexed(15),
        foreground_alt: Color::Indexed(7),
        primary: Color::Indexed(4),
        secondary: Color::Indexed(5),
        accent: Color::Indexed(6),
        highlight: Color::Indexed(3),
        muted: Color::Indexed(8),
        red: Color::Indexed(9),
        green: Color::Indexed(10),
        yellow: Color::Indexed(11),
        blue: Color::Indexed(12),
        purple: Color::Indexed(13),
        // ANSI has no orange
        orange: Color::Indexed(3),
    };

    pub const CATPPUCCIN_MOCHA: Self = Self {
        background: Color::Rgb(30, 30, 46),       // #1e1e2e base
        background_alt: Color::Rgb(24, 24, 37),   // #181825 mantle
        foreground: Color::Rgb(205, 214, 244),    // #cdd6f4 text
        foreground_alt: Color::Rgb(186, 194, 222), // #bac2de subtext1
        primary: Color::Rgb(203, 166, 247),       // #cba6f7 mauve
        secondary: Color::Rgb(242, 205, 205),     // #f2cdcd flamingo
        accent: Color::Rgb(250, 179, 135),        // #fab387 peach
        highlight: Color::Rgb(245, 224, 220),     // #f5e0dc rosewater
        muted: Color::Rgb(108, 112, 134),         // #6c7086 overlay0
        red: Color::Rgb(243, 139, 168),
        green: Color::Rgb(166, 227, 161),
        yellow: Color::Rgb(249, 226, 175),
        blue: Color::Rgb(137, 180, 250),
        purple: Color::Rgb(203, 166, 247),
        orange: Color::Rgb(250, 179, 135),
    };

    pub const CATPPUCCIN_LATTE: Self = Self {
        background: Color::Rgb(239, 241, 245),    // #eff1f5 base
        background_alt: Color::Rgb(230, 233, 239), // #e6e9ef mantle
        foreground: Color::Rgb(76, 79, 105),      // #4c4f69 text
        foreground_alt: Color::Rgb(92, 95, 119),  // #5c5f77 subtext1
        primary: Color::Rgb(136, 57, 239),        // #8839ef mauve
        secondary: Color::Rgb(234, 118, 203),     // #ea76cb flamingo
        accent: Color::Rgb(254, 100, 11),         // #fe640b peach
        highlight: Color::Rgb(220, 138, 120),     // #dc8a78 rosewater
        muted: Color::Rgb(156, 160, 176),         // #9ca0b0 overlay0
        red: Color::Rgb(210, 15, 57),
        green: Color::Rgb(64, 160, 43),
        yellow: Color::Rgb(223, 142, 29),
        blue: Color::Rgb(30, 102, 245),
        purple: Color::Rgb(136, 57, 239),
        orange: Color::Rgb(254, 100, 11),
    };

    pub const GRUVBOX_DARK: Self = Self {
        background: Color::Rgb(40, 40, 40),
        background_alt: Color::Rgb(60, 56, 54),
        foreground: Color::Rgb(235, 219, 178),
        foreground_alt: Color::Rgb(213, 196, 161),
        primary: Color::Rgb(177, 98, 134),   // #b16286 purple
        secondary: Color::Rgb(211, 134, 155), // #d3869b pink
        accent: Color::Rgb(254, 128, 25),    // #fe8019 orange
        highlight: Color::Rgb(250, 189, 47), // #fabd2f yellow
        muted: Color::Rgb(168, 153, 132),
        red: Color::Rgb(251, 73, 52),
        green: Color::Rgb(184, 187, 38),
        yellow: Color::Rgb(250, 189, 47),
        blue: Color::Rgb(131, 165, 152),
        purple: Color::Rgb(211, 134, 155),
        orange: Color::Rgb(254, 128, 25),
    };

    pub const TOKYO_NIGHT: Self = Self {
        background: Color::Rgb(26, 27, 38),
        background_alt: Color::Rgb(36, 40, 59),
        foreground: Color::Rgb(192, 202, 245),
        foreground_alt: Color::Rgb(169, 177, 214),
        primary: Color::Rgb(122, 162, 247),   // #7aa2f7 blue
        secondary: Color::Rgb(187, 154, 247), // #bb9af7 purple
        accent: Color::Rgb(125, 207, 255),    // #7dcfff cyan
        highlight: Color::Rgb(224, 175, 104), // #e0af68
        muted: Color::Rgb(86, 95, 137),
        red: Color::Rgb(247, 118, 142),
        green: Color::Rgb(158, 206, 106),
        yellow: Color::Rgb(224, 175, 104),
        blue: Color::Rgb(122, 162, 247),
        purple: Color::Rgb(187, 154, 247),
        orange: Color::Rgb(255, 158, 100),
    };

    pub const KANAGAWA: Self = Self {
        background: Color::Rgb(31, 31, 40),
        background_alt: Color::Rgb(42, 42, 55),
        foreground: Color::Rgb(220, 215, 186),
        foreground_alt: Color::Rgb(200, 192, 147),
        primary: Color::Rgb(126, 156, 216),   // #7e9cd8 blue
        secondary: Color::Rgb(149, 127, 184), // #957fb8 purple
        accent: Color::Rgb(255, 160, 102),    // #ffa066 orange
        highlight: Color::Rgb(230, 195, 132), // #e6c384 yellow
        muted: Color::Rgb(114, 113, 105),
        red: Color::Rgb(195, 64, 67),
        green: Color::Rgb(152, 187, 108),
        yellow: Color::Rgb(192, 163, 110),
        blue: Color::Rgb(126, 156, 216),
        purple: Color::Rgb(149, 127, 184),
        orange: Color::Rgb(255, 160, 102),
    };

    pub const DRACULA: Self = Self {
        background: Color::Rgb(40, 42, 54),
        background_alt: Color::Rgb(68, 71, 90),
        foreground: Color::Rgb(248, 248, 242),
        foreground_alt: Color::Rgb(226, 226, 220),
        primary: Color::Rgb(189, 147, 249),   // #bd93f9 purple
        secondary: Color::Rgb(255, 121, 198), // #ff79c6 pink
        accent: Color::Rgb(80, 250, 123),     // #50fa7b green
        highlight: Color::Rgb(241, 250, 140), // #f1fa8c yellow
        muted: Color::Rgb(98, 114, 164),
        red: Color::Rgb(255, 85, 85),
        green: Color::Rgb(80, 250, 123),
        yellow: Color::Rgb(241, 250, 140),
        blue: Color::Rgb(139, 233, 253),
        purple: Color::Rgb(189, 147, 249),
        orange: Color::Rgb(255, 184, 108),
    };

    /// Preset palettes by name.
    pub const PRESETS: [(&'static str, Self); 7] = [
        ("default", Self::DEFAULT),
        ("catppuccin-mocha", Self::CATPPUCCIN_MOCHA),
        ("catppuccin-latte", Self::CATPPUCCIN_LATTE),
        ("gruvbox-dark", Self::GRUVBOX_DARK),
        ("tokyo-night", Self::TOKYO_NIGHT),
        ("kanagawa", Self::KANAGAWA),
        ("dracula", Self::DRACULA),
    ];

    /// Looks up a preset palette, ignoring case and `_`/`-` differences.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::PRESETS
            .iter()
            .find(|(preset, _)| *preset == wanted)
            .map(|(_, palette)| *palette)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Semantic role of a piece of prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Description,
    Prefix,
    Label,
    Help,
    SearchLabel,
    SearchHint,
    ValidationPass,
    ValidationFail,
    ItemLabel,
    CurrentMarker,
    CurrentLabel,
    SelectedMarker,
    SelectedLabel,
    DisabledMarker,
    DisabledLabel,
    Placeholder,
    InputText,
    StatusDebug,
    StatusSuccess,
    StatusInfo,
    StatusWarn,
    StatusError,
    StatusLabel,
    BannerLabel,
    BannerSubLabel,
    BannerPad,
    SpinnerFrame,
    SpinnerLabel,
    ProgressPad,
    ProgressDone,
    ProgressPending,
    ProgressStatus,
}

/// Theme configuration for prompt components.
///
/// Holds one style per [`Role`]. [`Theme::plain`] holds no attributes at all
/// and is what prompts use when color output is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub description: Style,
    pub prefix: Style,
    pub label: Style,
    pub help: Style,
    pub search_label: Style,
    pub search_hint: Style,
    pub validation_pass: Style,
    pub validation_fail: Style,
    pub item_label: Style,
    pub current_marker: Style,
    pub current_label: Style,
    pub selected_marker: Style,
    pub selected_label: Style,
    pub disabled_marker: Style,
    pub disabled_label: Style,
    pub placeholder: Style,
    pub input_text: Style,
    pub status_debug: Style,
    pub status_success: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,
    pub status_label: Style,
    pub banner_label: Style,
    pub banner_sub_label: Style,
    pub banner_pad: Style,
    pub spinner_frame: Style,
    pub spinner_label: Style,
    pub progress_pad: Style,
    pub progress_done: Style,
    pub progress_pending: Style,
    pub progress_status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::DEFAULT)
    }
}

impl Theme {
    /// Creates a new theme with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives role styles from a palette.
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let fg = |c: Color| Style::default().fg(c);
        Self {
            description: fg(p.accent),
            prefix: fg(p.primary),
            label: fg(p.secondary),
            help: fg(p.muted),
            search_label: fg(p.secondary),
            search_hint: fg(p.muted),
            validation_pass: fg(p.green),
            validation_fail: fg(p.red),
            item_label: fg(p.foreground),
            current_marker: fg(p.primary),
            current_label: fg(p.primary),
            selected_marker: fg(p.green),
            selected_label: fg(p.green),
            disabled_marker: fg(p.muted),
            disabled_label: fg(p.muted).add_modifier(Modifier::CROSSED_OUT),
            placeholder: fg(p.muted),
            input_text: fg(p.foreground),
            status_debug: fg(p.muted),
            status_success: fg(p.green),
            status_info: fg(p.blue),
            status_warn: fg(p.yellow),
            status_error: fg(p.red),
            status_label: fg(p.foreground),
            banner_label: fg(p.primary),
            banner_sub_label: fg(p.secondary),
            banner_pad: fg(p.accent),
            spinner_frame: fg(p.primary),
            spinner_label: fg(p.secondary),
            progress_pad: fg(p.secondary),
            progress_done: fg(p.green),
            progress_pending: fg(p.yellow),
            progress_status: fg(p.secondary),
        }
    }

    /// A theme that leaves every piece of text undecorated.
    #[must_use]
    pub fn plain() -> Self {
        let s = Style::default();
        Self {
            description: s,
            prefix: s,
            label: s,
            help: s,
            search_label: s,
            search_hint: s,
            validation_pass: s,
            validation_fail: s,
            item_label: s,
            current_marker: s,
            current_label: s,
            selected_marker: s,
            selected_label: s,
            disabled_marker: s,
            disabled_label: s,
            placeholder: s,
            input_text: s,
            status_debug: s,
            status_success: s,
            status_info: s,
            status_warn: s,
            status_error: s,
            status_label: s,
            banner_label: s,
            banner_sub_label: s,
            banner_pad: s,
            spinner_frame: s,
            spinner_label: s,
            progress_pad: s,
            progress_done: s,
            progress_pending: s,
            progress_status: s,
        }
    }

    /// Theme for the given palette, or [`Theme::plain`] when the output
    /// should not be colored.
    #[must_use]
    pub fn resolve(palette: &Palette) -> Self {
        if color_enabled() {
            Self::from_palette(palette)
        } else {
            Self::plain()
        }
    }

    /// Returns the style configured for a role.
    #[must_use]
    pub fn style(&self, role: Role) -> Style {
        match role {
            Role::Description => self.description,
            Role::Prefix => self.prefix,
            Role::Label => self.label,
            Role::Help => self.help,
            Role::SearchLabel => self.search_label,
            Role::SearchHint => self.search_hint,
            Role::ValidationPass => self.validation_pass,
            Role::ValidationFail => self.validation_fail,
            Role::ItemLabel => self.item_label,
            Role::CurrentMarker => self.current_marker,
            Role::CurrentLabel => self.current_label,
            Role::SelectedMarker => self.selected_marker,
            Role::SelectedLabel => self.selected_label,
            Role::DisabledMarker => self.disabled_marker,
            Role::DisabledLabel => self.disabled_label,
            Role::Placeholder => self.placeholder,
            Role::InputText => self.input_text,
            Role::StatusDebug => self.status_debug,
            Role::StatusSuccess => self.status_success,
            Role::StatusInfo => self.status_info,
            Role::StatusWarn => self.status_warn,
            Role::StatusError => self.status_error,
            Role::StatusLabel => self.status_label,
            Role::BannerLabel => self.banner_label,
            Role::BannerSubLabel => self.banner_sub_label,
            Role::BannerPad => self.banner_pad,
            Role::SpinnerFrame => self.spinner_frame,
            Role::SpinnerLabel => self.spinner_label,
            Role::ProgressPad => self.progress_pad,
            Role::ProgressDone => self.progress_done,
            Role::ProgressPending => self.progress_pending,
            Role::ProgressStatus => self.progress_status,
        }
    }

    /// Styles `text` for a role, for frames drawn through a [`Surface`](crate::tui::Surface).
    #[must_use]
    pub fn decorate(&self, role: Role, text: impl Into<Cow<'static, str>>) -> Span<'static> {
        Span::styled(text, self.style(role))
    }

    /// Styles `text` for a role as an ANSI string, for inline output.
    ///
    /// Empty text and roles without attributes come back unchanged.
    #[must_use]
    pub fn paint(&self, role: Role, text: &str) -> String {
        let style = self.style(role);
        if text.is_empty() || style == Style::default() {
            return text.to_string();
        }
        to_content_style(style).apply(text).to_string()
    }
}

/// Whether ANSI colors should be written to stdout.
///
/// Disabled by `NO_COLOR`, `TERM=dumb`, or a non-terminal stdout.
#[must_use]
pub fn color_enabled() -> bool {
    let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let dumb = env::var("TERM").is_ok_and(|t| t == "dumb");
    !no_color && !dumb && io::stdout().is_terminal()
}

fn to_content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::new();
    out.foreground_color = style.fg.map(to_term_color);
    out.background_color = style.bg.map(to_term_color);

    let modifiers = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (modifier, attribute) in modifiers {
        if style.add_modifier.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}

// Same mapping ratatui's crossterm backend uses.
fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_paint_is_noop() {
        let theme = Theme::plain();
        assert_eq!(theme.paint(Role::Label, "hello"), "hello");
        assert_eq!(theme.paint(Role::DisabledLabel, "x"), "x");
    }

    #[test]
    fn test_paint_empty_text_is_noop() {
        let theme = Theme::default();
        assert_eq!(theme.paint(Role::Prefix, ""), "");
    }

    #[test]
    fn test_paint_wraps_text_in_escape_codes() {
        let theme = Theme::default();
        let painted = theme.paint(Role::ValidationFail, "bad");
        assert!(painted.contains("bad"));
        assert!(painted.starts_with("\u{1b}["));
        assert_ne!(painted, "bad");
    }

    #[test]
    fn test_decorate_uses_role_style() {
        let theme = Theme::from_palette(&Palette::DRACULA);
        let span = theme.decorate(Role::SelectedLabel, "Apple");
        assert_eq!(span.content, "Apple");
        assert_eq!(span.style.fg, Some(Palette::DRACULA.green));
    }

    #[test]
    fn test_disabled_label_is_crossed_out() {
        let theme = Theme::default();
        assert!(
            theme
                .style(Role::DisabledLabel)
                .add_modifier
                .contains(Modifier::CROSSED_OUT)
        );
    }

    #[test]
    fn test_palette_lookup_by_name() {
        assert_eq!(Palette::by_name("dracula"), Some(Palette::DRACULA));
        assert_eq!(Palette::by_name("Tokyo_Night"), Some(Palette::TOKYO_NIGHT));
        assert_eq!(Palette::by_name("solarized"), None);
    }

    #[test]
    fn test_every_role_is_unstyled_in_plain_theme() {
        let theme = Theme::plain();
        for role in [Role::Description, Role::CurrentMarker, Role::ProgressDone, Role::BannerPad] {
            assert_eq!(theme.style(role), Style::default());
        }
    }
}
