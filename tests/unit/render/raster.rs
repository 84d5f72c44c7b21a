use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect x="0" y="0" width="5" height="10" style="fill: #ff0000;"/></svg>"##;

#[test]
fn rasterize_scales_to_target_and_keeps_transparency() {
    let img = rasterize(SQUARE.as_bytes(), 20, 20, None).unwrap();
    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(img.get_pixel(2, 10).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(17, 10).0[3], 0);
}

#[test]
fn rasterize_fills_background() {
    let bg = Rgb8::new(9, 19, 43);
    let img = rasterize(SQUARE.as_bytes(), 10, 10, Some(bg)).unwrap();
    assert_eq!(img.get_pixel(8, 5).0, [9, 19, 43, 255]);
    assert_eq!(img.get_pixel(1, 5).0, [255, 0, 0, 255]);
}

#[test]
fn rasterize_rejects_bad_input() {
    assert!(matches!(
        rasterize(SQUARE.as_bytes(), 0, 10, None),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(rasterize(b"<not svg", 10, 10, None).is_err());
}

#[test]
fn rasterize_scene_uses_scene_size() {
    let scene = Scene::new(16.0, 8.0);
    let img = rasterize_scene(&scene, Some(Rgb8::new(1, 2, 3))).unwrap();
    assert_eq!(img.dimensions(), (16, 8));
    assert!(img.pixels().all(|p| p.0 == [1, 2, 3, 255]));
}
