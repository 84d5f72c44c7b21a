use super::*;

fn all_palettes() -> Vec<Palette> {
    let reg = PaletteRegistry::builtin();
    reg.names().map(|n| reg.get(n).unwrap()).collect()
}

#[test]
fn every_palette_returns_exactly_count() {
    let reg = PaletteRegistry::builtin();
    for name in reg.names() {
        for count in [0usize, 1, 2, 3, 4, 7, 16] {
            let generator = PaletteGenerator::new(&reg, name, Some(Seed::from(9u64))).unwrap();
            let colors = generator.generate(count).unwrap();
            assert_eq!(colors.len(), count, "palette {name} count {count}");
        }
    }
}

#[test]
fn zero_count_is_empty_not_error() {
    let reg = PaletteRegistry::builtin();
    let generator = PaletteGenerator::new(&reg, "shade", Some(Seed::from(1u64))).unwrap();
    assert!(generator.generate(0).unwrap().is_empty());
    assert!(generator.generate_hex(0).unwrap().is_empty());
}

#[test]
fn colors_stay_in_range() {
    for palette in all_palettes() {
        for seed in 0u64..20 {
            let mut rng = Seed::from(seed).stream(StreamDomain::Palette);
            for c in palette.colors(9, &mut rng).unwrap() {
                assert!(c.hue() < 360, "{palette:?}");
                assert!(c.sat() <= 100, "{palette:?}");
                assert!(c.val() <= 100, "{palette:?}");
            }
        }
    }
}

#[test]
fn shade_has_full_saturation_and_spaced_values() {
    let mut rng = Seed::from(3u64).stream(StreamDomain::Palette);
    let colors = shade(5, &mut rng).unwrap();
    assert!(colors.iter().all(|c| c.sat() == 100));
    let vals: Vec<u8> = colors.iter().map(|c| c.val()).collect();
    assert_eq!(vals, vec![0, 25, 50, 75, 100]);
    assert!(colors.windows(2).all(|w| w[0].hue() == w[1].hue()));
}

#[test]
fn tint_has_full_value_and_spaced_saturations() {
    let mut rng = Seed::from(3u64).stream(StreamDomain::Palette);
    let colors = tint(3, &mut rng).unwrap();
    assert!(colors.iter().all(|c| c.val() == 100));
    let sats: Vec<u8> = colors.iter().map(|c| c.sat()).collect();
    assert_eq!(sats, vec![0, 50, 100]);
}

#[test]
fn single_color_uses_start_of_interpolation() {
    let mut rng = Seed::from(11u64).stream(StreamDomain::Palette);
    let colors = shade(1, &mut rng).unwrap();
    assert_eq!(colors[0].val(), 0);
}

#[test]
fn analogous_alternates_two_saturations() {
    let mut rng = Seed::from(5u64).stream(StreamDomain::Palette);
    let colors = analogous(6, &mut rng).unwrap();
    let sats: Vec<u8> = colors.iter().map(|c| c.sat()).collect();
    assert_eq!(sats[0], sats[2]);
    assert_eq!(sats[1], sats[3]);
    assert!(sats[1] >= sats[0]);
    assert!(colors.windows(2).all(|w| w[0].val() == w[1].val()));
}

#[test]
fn segment_steps_around_the_wheel() {
    let mut rng = Seed::from(8u64).stream(StreamDomain::Palette);
    let colors = segment(3, 4, &mut rng).unwrap();
    let h0 = u32::from(colors[0].hue());
    for (i, c) in colors.iter().enumerate() {
        assert_eq!(u32::from(c.hue()), (h0 + 120 * i as u32) % 360);
        assert!((70..90).contains(&c.sat()));
        assert!((70..=100).contains(&c.val()));
    }
}

#[test]
fn segment_rejects_non_positive_counts() {
    let mut rng = Seed::from(8u64).stream(StreamDomain::Palette);
    assert!(matches!(
        segment(0, 4, &mut rng),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(matches!(
        segment(-2, 4, &mut rng),
        Err(DelicacyError::InvalidInput(_))
    ));
}

#[test]
fn family_shares_sat_and_val_within_ranges() {
    for fam in [JEWEL, PASTEL, EARTH, NEON] {
        let mut rng = Seed::from(21u64).stream(StreamDomain::Palette);
        let colors = family(fam, 6, &mut rng).unwrap();
        let s0 = colors[0].sat();
        let v0 = colors[0].val();
        assert!(colors.iter().all(|c| c.sat() == s0 && c.val() == v0));
        assert!((fam.sat.0..fam.sat.1).contains(&i64::from(s0)));
        assert!((fam.val.0..fam.val.1).contains(&i64::from(v0)));
    }
}

#[test]
fn generator_is_reproducible_per_seed() {
    let reg = PaletteRegistry::builtin();
    let a = PaletteGenerator::new(&reg, "jewel", Some(Seed::from(77u64))).unwrap();
    let b = PaletteGenerator::new(&reg, "jewel", Some(Seed::from(77u64))).unwrap();
    assert_eq!(a.generate_hex(5).unwrap(), b.generate_hex(5).unwrap());
    assert_eq!(a.generate(5).unwrap(), a.generate(5).unwrap());
}

#[test]
fn unregistered_palette_is_rejected() {
    let reg = PaletteRegistry::builtin();
    assert!(matches!(
        PaletteGenerator::new(&reg, "identity", Some(Seed::from(0u64))),
        Err(DelicacyError::InvalidInput(_))
    ));
}

#[test]
fn registry_rejects_duplicates_and_keeps_preferred_order() {
    let mut reg = PaletteRegistry::builtin();
    assert!(reg.register("shade", shade, false).is_err());

    let names: Vec<&str> = reg.preferred().iter().map(|p| p.name()).collect();
    assert_eq!(names, PREFERRED_PALETTES.to_vec());

    reg.register("blackout", shade, false).unwrap();
    assert!(reg.get("blackout").is_ok());
    assert_eq!(reg.preferred().len(), PREFERRED_PALETTES.len());
}

#[test]
fn oversized_counts_are_rejected() {
    let reg = PaletteRegistry::builtin();
    let palette_gen = PaletteGenerator::new(&reg, "shade", Some(Seed::from(1u64))).unwrap();
    for count in [MAX_COLORS + 1, usize::MAX] {
        assert!(matches!(
            palette_gen.generate(count),
            Err(DelicacyError::InvalidInput(_))
        ));
    }
    assert_eq!(palette_gen.generate(MAX_COLORS).unwrap().len(), MAX_COLORS);
}
