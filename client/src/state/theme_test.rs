use super::*;

#[test]
fn parse_defaults_to_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::parse(Some("")), Theme::Light);
    assert_eq!(Theme::parse(Some("purple")), Theme::Light);
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
}

#[test]
fn toggle_twice_restores_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggle(), theme);
        assert_eq!(theme.toggle().toggle(), theme);
    }
}

#[test]
fn as_str_round_trips_through_parse() {
    assert_eq!(Theme::parse(Some(Theme::Dark.as_str())), Theme::Dark);
    assert_eq!(Theme::parse(Some(Theme::Light.as_str())), Theme::Light);
}

#[test]
fn toggle_icon_offers_the_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
}
