use super::*;
use image::Rgba;

#[test]
fn over_opaque_src_replaces_dst() {
    assert_eq!(over([10, 20, 30, 255], [200, 100, 50, 255]), [200, 100, 50, 255]);
}

#[test]
fn over_transparent_src_keeps_dst() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn over_half_alpha_blends() {
    // premultiplied white at ~50% over opaque black
    assert_eq!(over([0, 0, 0, 255], [128, 128, 128, 128]), [128, 128, 128, 255]);
}

#[test]
fn paste_over_clips_and_offsets() {
    let mut dst = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let src = RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 255]));
    paste_over(&mut dst, &src, 2, -1);
    assert_eq!(dst.get_pixel(2, 0).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(3, 1).0, [255, 0, 0, 255]);
    assert_eq!(dst.get_pixel(1, 0).0, [0, 0, 0, 255]);
    assert_eq!(dst.get_pixel(2, 2).0, [0, 0, 0, 255]);

    let before = dst.clone();
    paste_over(&mut dst, &src, 10, 10);
    assert_eq!(dst, before);
}

#[test]
fn paste_over_onto_transparent_keeps_source() {
    let mut dst = RgbaImage::new(2, 2);
    let src = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
    paste_over(&mut dst, &src, 1, 1);
    assert_eq!(dst.get_pixel(1, 1).0, [255, 255, 255, 128]);
    assert_eq!(dst.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn combine_requires_equal_sizes() {
    let a = RgbaImage::new(4, 4);
    let b = RgbaImage::new(4, 5);
    assert!(matches!(combine(&a, &b), Err(DelicacyError::DimensionMismatch(_))));
}

#[test]
fn combine_draws_character_over_background() {
    let bg = RgbaImage::from_pixel(2, 1, Rgba([9, 19, 43, 255]));
    let mut ch = RgbaImage::new(2, 1);
    ch.put_pixel(0, 0, Rgba([255, 255, 0, 255]));
    let out = combine(&ch, &bg).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [255, 255, 0, 255]);
    assert_eq!(out.get_pixel(1, 0).0, [9, 19, 43, 255]);
}
