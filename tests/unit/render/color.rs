use super::*;

#[test]
fn parse_hex_accepts_long_and_short_forms() {
    assert_eq!(Rgb8::parse_hex("#09132b").unwrap(), Rgb8::new(9, 19, 43));
    assert_eq!(Rgb8::parse_hex("CED5E5").unwrap(), Theme::Light.color());
    assert_eq!(Rgb8::parse_hex(" #fa0 ").unwrap(), Rgb8::new(255, 170, 0));
    assert_eq!("#010203".parse::<Rgb8>().unwrap().to_hex(), "#010203");
}

#[test]
fn parse_hex_rejects_garbage() {
    for bad in ["", "#12345", "#gg0000", "#12345678", "#ééé", "#+f+f+f", "+ff"] {
        assert!(
            matches!(Rgb8::parse_hex(bad), Err(DelicacyError::InvalidInput(_))),
            "{bad}"
        );
    }
}

#[test]
fn themes_have_fixed_colours() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(Theme::Dark.color().to_hex(), "#09132b");
    assert_eq!(Theme::Light.color().to_hex(), "#ced5e5");
    assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("sepia".parse::<Theme>().is_err());
}

#[test]
fn parse_background_options() {
    assert_eq!(parse_background("dark").unwrap(), Some(Theme::Dark.color()));
    assert_eq!(parse_background("none").unwrap(), None);
    assert_eq!(parse_background("Transparent").unwrap(), None);
    assert_eq!(parse_background("#000").unwrap(), Some(Rgb8::new(0, 0, 0)));
    assert!(parse_background("purple-ish").is_err());
    assert!(parse_background("#+f+f+f").is_err());
}

#[test]
fn theme_serializes_as_snake_case() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    let rgb: Rgb8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
    assert_eq!(rgb, Rgb8::new(1, 2, 3));
}
