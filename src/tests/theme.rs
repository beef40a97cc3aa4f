use super::{find_color, Hsl, ThemeMode, ThemePreference, COLOR_THEMES};
use crate::error::FolioError;
use ratatui::style::Color;

#[test]
fn test_hsl_parse_and_convert() {
    let blue = Hsl::parse("210 100% 50%").unwrap();
    assert_eq!(blue.to_rgb(), (0, 128, 255));

    let white = Hsl::parse("0 0% 100%").unwrap();
    assert_eq!(white.to_rgb(), (255, 255, 255));

    let red = Hsl::parse("0 100% 50%").unwrap();
    assert_eq!(red.to_color(), Color::Rgb(255, 0, 0));
}

#[test]
fn test_hsl_rejects_malformed() {
    assert!(Hsl::parse("210 100 50").is_none());
    assert!(Hsl::parse("210 100%").is_none());
    assert!(Hsl::parse("blue").is_none());
    assert!(Hsl::parse("1 2% 3% 4%").is_none());
}

#[test]
fn test_all_presets_parse() {
    for theme in COLOR_THEMES {
        assert!(Hsl::parse(theme.primary).is_some(), "{}", theme.name);
        assert!(Hsl::parse(theme.secondary).is_some(), "{}", theme.name);
        assert!(Hsl::parse(theme.accent).is_some(), "{}", theme.name);
    }
    assert_eq!(COLOR_THEMES.len(), 7);
}

#[test]
fn test_set_color_known_and_unknown() {
    let mut pref = ThemePreference::default();
    assert!(pref.set_color("teal"));
    assert_eq!(pref.color().label, "Aqua");

    assert!(!pref.set_color("chartreuse"));
    assert_eq!(pref.color().name, "teal", "unknown preset leaves selection");
}

#[test]
fn test_cycle_color_wraps() {
    let mut pref = ThemePreference::default();
    pref.cycle_color(false);
    assert_eq!(pref.color().name, "gold");
    pref.cycle_color(true);
    assert_eq!(pref.color().name, "default");
    pref.cycle_color(true);
    assert_eq!(pref.color_index(), 1);
}

#[test]
fn test_toggle_resolves_system_first() {
    let mut pref = ThemePreference::default().with_system_dark(true);
    assert_eq!(pref.mode(), ThemeMode::System);
    assert!(pref.is_dark());

    pref.toggle_mode();
    assert_eq!(pref.mode(), ThemeMode::Light);
    pref.toggle_mode();
    assert_eq!(pref.mode(), ThemeMode::Dark);
}

#[test]
fn test_dark_palette_accent_is_primary() {
    let mut pref = ThemePreference::default();
    pref.set_mode(ThemeMode::Dark);
    let dark = pref.palette();
    assert_eq!(dark.accent, dark.primary);

    pref.set_mode(ThemeMode::Light);
    let light = pref.palette();
    assert_ne!(light.accent, light.primary);
    assert_eq!(light.primary, dark.primary);
}

#[test]
fn test_from_names() {
    let pref = ThemePreference::from_names("Dark", "purple").unwrap();
    assert_eq!(pref.mode(), ThemeMode::Dark);
    assert_eq!(pref.color().label, "Lavender");

    assert!(matches!(
        ThemePreference::from_names("dim", "default"),
        Err(FolioError::UnknownTheme(_))
    ));
    assert!(matches!(
        ThemePreference::from_names("light", "mauve"),
        Err(FolioError::UnknownColor(_))
    ));
}

#[test]
fn test_find_color_case_insensitive() {
    assert_eq!(find_color("GOLD").map(|t| t.label), Some("Gold"));
    assert!(find_color("").is_none());
}
