use std::io::Write;

use tempfile::NamedTempFile;
use tessera_tui::{Color, Decoration, Error, Theme};

#[test]
fn test_load_fixture_merges_over_default() {
    let theme = Theme::load("tests/fixtures/theme/ocean.toml").unwrap();

    let selected = theme.style("list.item.selected");
    assert_eq!(selected.fg, Some(Color::Black));
    assert_eq!(selected.bg, Some(Color::Rgb(0x00, 0xaf, 0xff)));
    assert_eq!(selected.reverse, Decoration::Off);

    assert_eq!(theme.style("statusbar").bg, Some(Color::Indexed(24)));
    // Untouched entries come from the built-in theme
    assert_eq!(theme.style("button"), Theme::default_theme().style("button"));
}

#[test]
fn test_invalid_color_reports_style() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[styles.label]\nfg = \"not-a-color\"").unwrap();

    match Theme::load(file.path()) {
        Err(Error::InvalidColor { style, value }) => {
            assert_eq!(style, "label");
            assert_eq!(value, "not-a-color");
        }
        other => panic!("expected InvalidColor, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(Theme::load(&path), Err(Error::ThemeRead { .. })));
}

#[test]
fn test_unknown_field_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[styles.label]\nblink = true").unwrap();
    assert!(matches!(Theme::load(file.path()), Err(Error::ThemeParse { .. })));
}
