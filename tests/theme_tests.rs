use ratatui::style::Color;
use markquill::theme::{colors::ThemeColors, get_builtin_theme, list_builtin_themes};

// Tests for get_builtin_theme function

#[test]
fn test_all_listed_themes_exist() {
    for name in list_builtin_themes() {
        let theme = get_builtin_theme(&name);
        assert!(theme.is_some(), "missing theme {name}");
        assert_eq!(theme.unwrap().name, name);
    }
}

#[test]
fn test_theme_list_is_sorted() {
    let themes = list_builtin_themes();
    let mut sorted = themes.clone();
    sorted.sort();
    assert_eq!(themes, sorted);
    assert_eq!(themes.len(), 5);
}

#[test]
fn test_invalid_theme_returns_none() {
    let theme = get_builtin_theme("nonexistent");
    assert!(theme.is_none());
}

// Tests for default-dark theme colors

#[test]
fn test_dark_theme_ui_colors() {
    let theme = get_builtin_theme("default-dark").unwrap();

    assert_eq!(theme.colors.background, Color::Reset); // Terminal default background
    assert_eq!(theme.colors.foreground, Color::Gray);
    assert_eq!(theme.colors.status_line_bg, Color::White);
    assert_eq!(theme.colors.status_line_fg, Color::Black);
}

#[test]
fn test_dark_theme_overlay_colors() {
    let colors = ThemeColors::default_dark();

    assert_eq!(colors.mark_buffer, Color::LightCyan);
    assert_eq!(colors.mark_global, Color::LightMagenta);
    assert_eq!(colors.line_number, Color::Yellow);
    assert_eq!(colors.filename, Color::Green);
}

#[test]
fn test_dark_theme_semantic_colors() {
    let colors = ThemeColors::default_dark();

    assert_eq!(colors.error, Color::Red);
    assert_eq!(colors.warning, Color::Yellow);
    assert_eq!(colors.info, Color::LightBlue);
}

// Properties every theme should have

#[test]
fn test_mark_types_distinguishable() {
    for name in list_builtin_themes() {
        let colors = get_builtin_theme(&name).unwrap().colors;
        assert_ne!(colors.mark_buffer, colors.mark_global, "theme {name}");
    }
}

#[test]
fn test_modes_distinguishable() {
    for name in list_builtin_themes() {
        let colors = get_builtin_theme(&name).unwrap().colors;
        assert_ne!(colors.mode_popup, colors.mode_direct, "theme {name}");
        assert_ne!(colors.status_popup, colors.status_direct, "theme {name}");
    }
}

#[test]
fn test_selection_visible_on_overlay() {
    for name in list_builtin_themes() {
        let colors = get_builtin_theme(&name).unwrap().colors;
        assert_ne!(colors.selection_bg, colors.overlay_bg, "theme {name}");
    }
}

#[test]
fn test_light_theme_uses_rgb() {
    let colors = ThemeColors::default_light();
    assert!(matches!(colors.background, Color::Rgb(..)));
    assert!(matches!(colors.foreground, Color::Rgb(..)));
}
