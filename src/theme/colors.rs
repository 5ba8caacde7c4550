//! Color definitions for markquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the markquill terminal UI. Colors are organized into three
//! categories: viewer UI, the marks overlay, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a markquill theme.
///
/// # Examples
///
/// ```
/// use markquill::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let dark = ThemeColors::default_dark();
/// assert_eq!(dark.background, Color::Reset);
/// assert_eq!(dark.mark_global, Color::LightMagenta);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI colors
    /// Main background color for the viewer.
    pub background: Color,
    /// Main foreground/text color for the viewer.
    pub foreground: Color,
    /// Background of the cursor line.
    pub cursor: Color,
    /// Color of the line number gutter.
    pub gutter: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Overlay colors
    /// Background of the marks overlay.
    pub overlay_bg: Color,
    /// Border of the marks overlay.
    pub overlay_border: Color,
    /// Drop shadow behind the overlay.
    pub shadow: Color,
    /// Mode label in popup mode.
    pub mode_popup: Color,
    /// Mode label in direct mode.
    pub mode_direct: Color,
    /// Mark counts line.
    pub stats: Color,
    /// Horizontal rules.
    pub separator: Color,
    /// Column titles.
    pub column_header: Color,
    /// Key hints in popup mode.
    pub status_popup: Color,
    /// Key hints in direct mode.
    pub status_direct: Color,
    /// Buffer mark characters.
    pub mark_buffer: Color,
    /// Global mark characters.
    pub mark_global: Color,
    /// Line numbers on mark rows.
    pub line_number: Color,
    /// Filenames on mark rows.
    pub filename: Color,
    /// The "no marks" placeholder.
    pub no_marks: Color,
    /// Background of the selected overlay row.
    pub selection_bg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the result follows the user's terminal palette.
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            cursor: Color::DarkGray,
            gutter: Color::DarkGray,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            overlay_bg: Color::Reset,
            overlay_border: Color::LightBlue,
            shadow: Color::Black,
            mode_popup: Color::LightBlue,
            mode_direct: Color::LightGreen,
            stats: Color::Gray,
            separator: Color::DarkGray,
            column_header: Color::White,
            status_popup: Color::LightBlue,
            status_direct: Color::LightGreen,
            mark_buffer: Color::LightCyan,
            mark_global: Color::LightMagenta,
            line_number: Color::Yellow,
            filename: Color::Green,
            no_marks: Color::DarkGray,
            selection_bg: Color::DarkGray,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(220, 224, 232),
            gutter: Color::Rgb(160, 161, 167),
            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),

            overlay_bg: Color::Rgb(240, 240, 241),
            overlay_border: Color::Rgb(64, 120, 242),
            shadow: Color::Rgb(190, 190, 196),
            mode_popup: Color::Rgb(64, 120, 242),
            mode_direct: Color::Rgb(80, 161, 79),
            stats: Color::Rgb(105, 108, 119),
            separator: Color::Rgb(160, 161, 167),
            column_header: Color::Rgb(56, 58, 66),
            status_popup: Color::Rgb(64, 120, 242),
            status_direct: Color::Rgb(80, 161, 79),
            mark_buffer: Color::Rgb(1, 132, 188),
            mark_global: Color::Rgb(166, 38, 164),
            line_number: Color::Rgb(152, 104, 1),
            filename: Color::Rgb(80, 161, 79),
            no_marks: Color::Rgb(160, 161, 167),
            selection_bg: Color::Rgb(220, 224, 232),

            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }

    /// Returns the Gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(60, 56, 54),
            gutter: Color::Rgb(124, 111, 100),
            status_line_bg: Color::Rgb(80, 73, 69),
            status_line_fg: Color::Rgb(235, 219, 178),

            overlay_bg: Color::Rgb(50, 48, 47),
            overlay_border: Color::Rgb(131, 165, 152),
            shadow: Color::Rgb(29, 32, 33),
            mode_popup: Color::Rgb(131, 165, 152),
            mode_direct: Color::Rgb(184, 187, 38),
            stats: Color::Rgb(168, 153, 132),
            separator: Color::Rgb(102, 92, 84),
            column_header: Color::Rgb(251, 241, 199),
            status_popup: Color::Rgb(131, 165, 152),
            status_direct: Color::Rgb(184, 187, 38),
            mark_buffer: Color::Rgb(142, 192, 124),
            mark_global: Color::Rgb(211, 134, 155),
            line_number: Color::Rgb(250, 189, 47),
            filename: Color::Rgb(184, 187, 38),
            no_marks: Color::Rgb(146, 131, 116),
            selection_bg: Color::Rgb(80, 73, 69),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            cursor: Color::Rgb(59, 66, 82),
            gutter: Color::Rgb(76, 86, 106),
            status_line_bg: Color::Rgb(67, 76, 94),
            status_line_fg: Color::Rgb(236, 239, 244),

            overlay_bg: Color::Rgb(59, 66, 82),
            overlay_border: Color::Rgb(136, 192, 208),
            shadow: Color::Rgb(36, 41, 51),
            mode_popup: Color::Rgb(136, 192, 208),
            mode_direct: Color::Rgb(163, 190, 140),
            stats: Color::Rgb(216, 222, 233),
            separator: Color::Rgb(76, 86, 106),
            column_header: Color::Rgb(236, 239, 244),
            status_popup: Color::Rgb(136, 192, 208),
            status_direct: Color::Rgb(163, 190, 140),
            mark_buffer: Color::Rgb(143, 188, 187),
            mark_global: Color::Rgb(180, 142, 173),
            line_number: Color::Rgb(235, 203, 139),
            filename: Color::Rgb(163, 190, 140),
            no_marks: Color::Rgb(76, 86, 106),
            selection_bg: Color::Rgb(67, 76, 94),

            error: Color::Rgb(191, 97, 106),
            warning: Color::Rgb(235, 203, 139),
            info: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            cursor: Color::Rgb(68, 71, 90),
            gutter: Color::Rgb(98, 114, 164),
            status_line_bg: Color::Rgb(68, 71, 90),
            status_line_fg: Color::Rgb(248, 248, 242),

            overlay_bg: Color::Rgb(33, 34, 44),
            overlay_border: Color::Rgb(189, 147, 249),
            shadow: Color::Rgb(25, 26, 33),
            mode_popup: Color::Rgb(189, 147, 249),
            mode_direct: Color::Rgb(80, 250, 123),
            stats: Color::Rgb(248, 248, 242),
            separator: Color::Rgb(98, 114, 164),
            column_header: Color::Rgb(248, 248, 242),
            status_popup: Color::Rgb(189, 147, 249),
            status_direct: Color::Rgb(80, 250, 123),
            mark_buffer: Color::Rgb(139, 233, 253),
            mark_global: Color::Rgb(255, 121, 198),
            line_number: Color::Rgb(241, 250, 140),
            filename: Color::Rgb(80, 250, 123),
            no_marks: Color::Rgb(98, 114, 164),
            selection_bg: Color::Rgb(68, 71, 90),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(241, 250, 140),
            info: Color::Rgb(139, 233, 253),
        }
    }
}
