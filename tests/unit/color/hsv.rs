use super::*;

#[test]
fn hue_wraps_and_truncates() {
    let c = HsvColor::new(725.9, 50.0, 50.0).unwrap();
    assert_eq!(c.hue(), 5);

    let c = HsvColor::new(-25.0, 50.0, 50.0).unwrap();
    assert_eq!(c.hue(), 335);

    let c = HsvColor::new(360.0, 0.0, 0.0).unwrap();
    assert_eq!(c.hue(), 0);
}

#[test]
fn sat_and_val_are_validated() {
    assert!(matches!(
        HsvColor::new(0.0, 100.5, 50.0),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(matches!(
        HsvColor::new(0.0, 50.0, -1.0),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(HsvColor::new(0.0, 100.0, 100.0).is_ok());
    assert!(HsvColor::new(0.0, 0.0, 0.0).is_ok());
    assert_eq!(HsvColor::new(0.0, 33.333, 66.667).unwrap().sat(), 33);
}

#[test]
fn primary_colors_convert_to_rgb() {
    assert_eq!(HsvColor::new(0.0, 100.0, 100.0).unwrap().to_rgb(), [255, 0, 0]);
    assert_eq!(HsvColor::new(120.0, 100.0, 100.0).unwrap().to_rgb(), [0, 255, 0]);
    assert_eq!(HsvColor::new(240.0, 100.0, 100.0).unwrap().to_rgb(), [0, 0, 255]);
    assert_eq!(HsvColor::new(77.0, 0.0, 100.0).unwrap().to_rgb(), [255, 255, 255]);
    assert_eq!(HsvColor::new(77.0, 100.0, 0.0).unwrap().to_rgb(), [0, 0, 0]);
}

#[test]
fn hex_is_lowercase_rrggbb() {
    assert_eq!(HsvColor::new(0.0, 100.0, 100.0).unwrap().to_hex(), "#ff0000");
    assert_eq!(HsvColor::new(60.0, 100.0, 50.0).unwrap().to_hex(), "#7f7f00");
    let hex = HsvColor::new(211.0, 37.0, 81.0).unwrap().to_hex();
    assert_eq!(hex.len(), 7);
    assert!(hex.starts_with('#'));
}

#[test]
fn deserialize_validates_like_new() {
    assert!(serde_json::from_str::<HsvColor>(r#"{"hue":10,"sat":200,"val":50}"#).is_err());
    assert!(serde_json::from_str::<HsvColor>(r#"{"hue":10,"sat":50,"val":250}"#).is_err());

    let c: HsvColor = serde_json::from_str(r#"{"hue":999,"sat":40,"val":60}"#).unwrap();
    assert_eq!(c, HsvColor::new(999.0, 40.0, 60.0).unwrap());
    assert_eq!(c.hue(), 279);

    let back: HsvColor = serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
    assert_eq!(back, c);
}
