use super::*;

fn stream(byte: u8) -> RandomStream {
    RandomStream::from_key([byte; 32])
}

fn colors() -> Vec<String> {
    ["#112233", "#445566", "#778899", "#aabbcc"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn registry_lists_builtin_makers() {
    let reg = MakerRegistry::builtin();
    assert_eq!(reg.names().collect::<Vec<_>>(), ["reah", "dione", "tethys"]);
    assert_eq!(reg.get("dione").unwrap().name(), "dione");
    assert!(matches!(
        reg.get("titan").unwrap_err(),
        DelicacyError::InvalidInput(_)
    ));
}

#[test]
fn registry_rejects_duplicates_and_accepts_new_makers() {
    fn blank(args: &MakerArgs, _: &[String], _: &mut RandomStream) -> DelicacyResult<Scene> {
        Ok(Scene::new(args.width, args.height))
    }
    let mut reg = MakerRegistry::empty();
    reg.register("blank", blank).unwrap();
    assert!(reg.register("blank", blank).is_err());
    let scene = reg
        .get("blank")
        .unwrap()
        .build(&MakerArgs::new(8.0, 8.0), &colors(), &mut stream(0))
        .unwrap();
    assert!(scene.is_empty());
}

#[test]
fn build_validates_canvas_and_colours() {
    let maker = MakerRegistry::builtin().get("reah").unwrap();
    let mut rng = stream(1);
    for args in [MakerArgs::new(0.0, 10.0), MakerArgs::new(10.0, f64::NAN)] {
        assert!(matches!(
            maker.build(&args, &colors(), &mut rng).unwrap_err(),
            DelicacyError::InvalidInput(_)
        ));
    }
    assert!(maker.build(&MakerArgs::new(10.0, 10.0), &[], &mut rng).is_err());
    assert!(
        maker
            .build(&MakerArgs::new(10.0, 10.0).with_density(0, 4), &colors(), &mut rng)
            .is_err()
    );
}

#[test]
fn reah_draws_round_lines_on_every_row() {
    let args = MakerArgs::new(320.0, 320.0);
    let scene = reah(&args, &colors(), &mut stream(2)).unwrap();
    let rows: std::collections::BTreeSet<&str> =
        scene.children().iter().map(|l| l.get("y1").unwrap()).collect();
    assert_eq!(rows.len(), 32);
    assert!(scene.len() >= 32 && scene.len() <= 32 * 8);
    for line in scene.children() {
        assert_eq!(line.tag(), "line");
        assert_eq!(line.get("y1"), line.get("y2"));
        let style = line.get("style").unwrap();
        assert!(style.contains("stroke-width: 4;"));
        assert!(style.contains("stroke-linecap: round;"));
        assert!(colors().iter().any(|c| style.contains(c.as_str())));
        let x1: f64 = line.get("x1").unwrap().parse().unwrap();
        let x2: f64 = line.get("x2").unwrap().parse().unwrap();
        assert!(x1 <= x2 && x2 <= 320.0);
    }
}

#[test]
fn dione_places_one_faded_shape_per_cell() {
    let args = MakerArgs::new(320.0, 320.0).with_density(3, 4);
    let scene = dione(&args, &colors(), &mut stream(3)).unwrap();
    assert_eq!(scene.len(), 12);

    let mut ids = Vec::new();
    for group in scene.children() {
        assert_eq!(group.tag(), "g");
        let transform = group.get("transform").unwrap();
        assert!(transform.starts_with("translate("));
        assert!(transform.contains(" rotate("));
        let uses = group.children().len() - 1;
        assert!(uses == 1 || uses == 3, "{uses} copies");
        ids.push(group.children()[0].children()[0].get("id").unwrap().to_string());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[test]
fn tethys_mirrors_one_quadrant_three_times() {
    let args = MakerArgs::new(320.0, 320.0);
    let scene = tethys(&args, &colors(), &mut stream(4)).unwrap();
    assert_eq!(scene.len(), 4);

    let quadrant = &scene.children()[0];
    let id = quadrant.get("id").unwrap();
    assert!(!quadrant.children().is_empty());
    assert!(quadrant.children().len() < 100);
    for dot in quadrant.children() {
        assert_eq!(dot.get("r"), Some("3"));
        let cx: f64 = dot.get("cx").unwrap().parse().unwrap();
        assert!((12.0..=148.0).contains(&cx));
    }

    let transforms: Vec<&str> = scene.children()[1..]
        .iter()
        .map(|u| {
            assert_eq!(u.get("xlink:href"), Some(format!("#{id}").as_str()));
            u.get("transform").unwrap()
        })
        .collect();
    assert_eq!(
        transforms,
        [
            "translate(0,320) scale(1,-1)",
            "translate(320,0) scale(-1,1)",
            "translate(320,320) scale(-1,-1)",
        ]
    );
}

#[test]
fn tethys_centres_the_motif_on_wide_canvases() {
    let args = MakerArgs::new(400.0, 200.0);
    let scene = tethys(&args, &colors(), &mut stream(5)).unwrap();
    assert_eq!(scene.len(), 1);
    let wrapper = &scene.children()[0];
    assert_eq!(wrapper.get("transform"), Some("translate(100,0)"));
    assert_eq!(wrapper.children().len(), 4);
}

#[test]
fn same_stream_same_scene() {
    for maker in MakerRegistry::builtin().names() {
        let maker = MakerRegistry::builtin().get(maker).unwrap();
        let args = MakerArgs::new(256.0, 256.0);
        let a = maker.build(&args, &colors(), &mut stream(9)).unwrap();
        let b = maker.build(&args, &colors(), &mut stream(9)).unwrap();
        assert_eq!(a.to_markup(), b.to_markup(), "{}", maker.name());
        let c = maker.build(&args, &colors(), &mut stream(10)).unwrap();
        assert_ne!(a.to_markup(), c.to_markup(), "{}", maker.name());
    }
}

#[test]
fn oversized_densities_are_rejected() {
    let mut rng = stream(2);
    for name in ["reah", "dione", "tethys"] {
        let maker = MakerRegistry::builtin().get(name).unwrap();
        for args in [
            MakerArgs::new(64.0, 64.0).with_density(usize::MAX, 4),
            MakerArgs::new(64.0, 64.0).with_density(4, MAX_DENSITY + 1),
        ] {
            assert!(matches!(
                maker.build(&args, &colors(), &mut rng).unwrap_err(),
                DelicacyError::InvalidInput(_)
            ));
        }
    }
}
