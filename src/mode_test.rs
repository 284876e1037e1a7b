use super::*;

#[test]
fn default_mode_is_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
}

#[test]
fn icon_class_matches_mode() {
    assert_eq!(ThemeMode::Dark.icon_class(), "icon-moon");
    assert_eq!(ThemeMode::Light.icon_class(), "icon-sun");
}

#[test]
fn toggled_is_an_involution() {
    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        assert_ne!(mode.toggled(), mode);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("Dark"), None);
    assert_eq!(ThemeMode::parse(" light"), None);
    assert_eq!(ThemeMode::parse(""), None);
}

#[test]
fn from_str_reports_unknown_value() {
    let err = "sepia".parse::<ThemeMode>().expect_err("sepia is not a mode");
    assert!(matches!(err, ThemeError::UnknownMode(ref v) if v == "sepia"));
    assert_eq!(err.to_string(), "unknown theme mode: sepia");
}

#[test]
fn display_matches_attribute_value() {
    assert_eq!(ThemeMode::Light.to_string(), "light");
    assert_eq!(format!("{}", ThemeMode::Dark), ThemeMode::Dark.as_str());
}
