use super::*;

#[test]
fn fmt_num_is_stable() {
    assert_eq!(fmt_num(6.0), "6");
    assert_eq!(fmt_num(-60.0), "-60");
    assert_eq!(fmt_num(0.8), "0.8");
    assert_eq!(fmt_num(0.64), "0.64");
    assert_eq!(fmt_num(103.923_048_454), "103.923");
    assert_eq!(fmt_num(0.000_01), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
}

#[test]
fn stroke_renders_all_properties() {
    let s = Stroke::new("#ff0000")
        .opacity(0.8)
        .unwrap()
        .width(12.0)
        .linecap(LineCap::Round);
    assert_eq!(
        s.to_string(),
        "stroke: #ff0000; stroke-opacity: 0.8; stroke-width: 12; stroke-linecap: round;"
    );
}

#[test]
fn fill_renders_rule_only_when_set() {
    assert_eq!(Fill::none().to_string(), "fill: none; fill-opacity: 1;");
    assert_eq!(
        Fill::new("red").rule(FillRule::EvenOdd).to_string(),
        "fill: red; fill-opacity: 1; fill-rule: evenodd;"
    );
}

#[test]
fn opacity_outside_unit_interval_is_rejected() {
    assert!(matches!(
        Stroke::new("red").opacity(1.5),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(matches!(
        Fill::new("red").opacity(-0.1),
        Err(DelicacyError::InvalidInput(_))
    ));
    assert!(Fill::new("red").opacity(0.0).is_ok());
}

#[test]
fn transform_chains_in_order() {
    let t = Transform::new()
        .translate(10.0, 20.5)
        .scale_uniform(0.12)
        .rotate(275.0);
    assert_eq!(t.to_string(), "translate(10,20.5) scale(0.12,0.12) rotate(275)");
    assert!(Transform::new().is_empty());

    let t = Transform::new()
        .rotate_about(45.0, 1.0, 2.0)
        .skew_x(10.0)
        .skew_y(5.0)
        .matrix([1.0, 0.0, 0.0, 1.0, 3.0, 4.0]);
    assert_eq!(
        t.to_string(),
        "rotate(45,1,2) skewX(10) skewY(5) matrix(1,0,0,1,3,4)"
    );
}

#[test]
fn path_data_joins_commands() {
    let d = PathData::new()
        .move_by(0.0, 0.0)
        .line_by(120.0, 0.0)
        .line_by(-60.0, 103.923)
        .close();
    assert_eq!(d.to_string(), "m0,0 l120,0 l-60,103.923 z");

    let d = PathData::new()
        .move_to(1.0, 2.0)
        .quad_to(3.0, 4.0, 5.0, 6.0)
        .cubic_to((1.0, 1.0), (2.0, 2.0), (3.0, 3.0))
        .arc_to((5.0, 5.0), 0.0, true, false, (9.0, 9.0))
        .line_to(0.0, 0.0);
    assert_eq!(
        d.to_string(),
        "M1,2 Q3,4 5,6 C1,1 2,2 3,3 A5,5 0 1,0 9,9 L0,0"
    );
}
