use super::*;

#[test]
fn sample_angles_split_the_turn_evenly() {
    assert_eq!(sample_angle(0, 9), 0.0);
    let step = sample_angle(1, 9);
    assert!((step * 9.0 - TAU).abs() < 1e-12);
    assert!((sample_angle(3, 9) - 3.0 * step).abs() < 1e-12);
}

#[test]
fn polar_is_offset_by_center() {
    let p = polar(Point::new(0.0, 10.0), 5.0, 0.0);
    assert_eq!(p, Point::new(5.0, 10.0));

    let q = polar(Point::ORIGIN, 2.0, std::f64::consts::FRAC_PI_2);
    assert!(q.x.abs() < 1e-12);
    assert!((q.y - 2.0).abs() < 1e-12);
}
