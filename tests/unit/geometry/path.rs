use super::*;
use kurbo::ParamCurve as _;

fn sample_path() -> PathDesc {
    PathDesc::new(vec![
        PathCommand::MoveTo {
            to: Point::new(1.0, 2.0),
        },
        PathCommand::CubicTo {
            c1: Point::new(3.0, 4.0),
            c2: Point::new(5.5, -6.0),
            to: Point::new(7.0, 8.0),
        },
    ])
}

#[test]
fn svg_d_uses_move_and_cubic_commands() {
    assert_eq!(sample_path().to_svg_d(), "M 1,2 C 3,4 5.5,-6 7,8");
}

#[test]
fn segments_start_at_the_pen() {
    let segs: Vec<_> = sample_path().segments().collect();
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].p0, Point::new(1.0, 2.0));
    assert_eq!(segs[0].p3, Point::new(7.0, 8.0));
}

#[test]
fn bez_path_round_trips_through_kurbo() {
    let path = sample_path();
    let back = PathDesc::from_bez_path(&path.to_bez_path()).unwrap();
    assert_eq!(back, path);
}

#[test]
fn line_segments_are_rejected() {
    let mut bez = BezPath::new();
    bez.move_to((0.0, 0.0));
    bez.line_to((1.0, 0.0));
    assert!(matches!(
        PathDesc::from_bez_path(&bez),
        Err(PenumbraError::Render(_))
    ));
}

#[test]
fn circle_stays_on_its_radius() {
    let circle = PathDesc::circle(128.0);
    assert!(matches!(circle.commands()[0], PathCommand::MoveTo { .. }));
    assert!(circle.segments().count() >= 4);
    for seg in circle.segments() {
        for k in 0..=8 {
            let p = seg.eval(k as f64 / 8.0);
            assert!((p.to_vec2().hypot() - 128.0).abs() < 0.1);
        }
    }
}

#[test]
fn json_is_tagged_per_command() {
    let json = serde_json::to_value(sample_path()).unwrap();
    assert_eq!(json[0]["op"], "move_to");
    assert_eq!(json[1]["op"], "cubic_to");
    assert_eq!(json[1]["to"]["x"], 7.0);
}
