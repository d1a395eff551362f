use super::*;
use kurbo::{ParamCurve as _, ParamCurveDeriv as _};

fn wobbly_ring(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 * std::f64::consts::TAU / n as f64;
            let r = 150.0 + 7.0 * (3.0 * t + 0.4).sin();
            Point::new(r * t.cos(), 12.0 + r * t.sin())
        })
        .collect()
}

#[test]
fn emits_one_move_and_one_cubic_per_point() {
    let path = fit_closed_curve(&wobbly_ring(9)).unwrap();
    let cmds = path.commands();
    assert_eq!(cmds.len(), 10);
    assert!(matches!(cmds[0], PathCommand::MoveTo { .. }));
    assert!(
        cmds[1..]
            .iter()
            .all(|c| matches!(c, PathCommand::CubicTo { .. }))
    );
}

#[test]
fn passes_through_every_sample() {
    let points = wobbly_ring(9);
    let path = fit_closed_curve(&points).unwrap();
    let ends: Vec<Point> = path.segments().map(|s| s.p3).collect();
    for p in &points {
        assert_eq!(ends.iter().filter(|e| *e == p).count(), 1, "{p:?}");
    }
}

#[test]
fn starts_at_second_sample_and_closes_there() {
    let points = wobbly_ring(9);
    let path = fit_closed_curve(&points).unwrap();
    assert_eq!(path.commands()[0].end_point(), points[1]);
    assert_eq!(path.commands().last().unwrap().end_point(), points[1]);
}

#[test]
fn control_points_follow_catmull_rom() {
    let square = [
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(6.0, 6.0),
        Point::new(0.0, 6.0),
    ];
    let path = fit_closed_curve(&square).unwrap();
    // First window: (p0, p1, p2, p3) = square[0..4].
    let PathCommand::CubicTo { c1, c2, to } = path.commands()[1] else {
        panic!("expected cubic");
    };
    assert_eq!(c1, Point::new(6.0 + 1.0, 0.0 + 1.0));
    assert_eq!(c2, Point::new(6.0 + 1.0, 6.0 - 1.0));
    assert_eq!(to, square[2]);
}

#[test]
fn seam_is_c1_continuous() {
    for n in [5, 9, 16] {
        let path = fit_closed_curve(&wobbly_ring(n)).unwrap();
        let segs: Vec<_> = path.segments().collect();
        let pairs = segs
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(std::iter::once((segs[segs.len() - 1], segs[0])));
        for (a, b) in pairs {
            assert!(a.eval(1.0).distance(b.eval(0.0)) < 1e-9);
            let ta = a.deriv().eval(1.0).to_vec2();
            let tb = b.deriv().eval(0.0).to_vec2();
            assert!((ta - tb).hypot() < 1e-9, "kink: {ta:?} vs {tb:?}");
        }
    }
}

#[test]
fn fewer_than_three_points_is_rejected() {
    let err = fit_closed_curve(&[Point::ORIGIN, Point::new(1.0, 1.0)]).unwrap_err();
    assert!(matches!(err, PenumbraError::InvalidConfiguration(_)));
}

#[test]
fn fitting_is_deterministic() {
    let points = wobbly_ring(9);
    let a = fit_closed_curve(&points).unwrap();
    let b = fit_closed_curve(&points).unwrap();
    assert_eq!(a.to_svg_d(), b.to_svg_d());
}
