use super::*;
use crate::{foundation::rng::Rng64, wave::model::Wave};

fn pinned_waves() -> WaveBundle {
    WaveBundle::new(vec![
        Wave::new(6.0, 3.0, 0.0),
        Wave::new(4.0, 5.0, 0.0),
        Wave::new(2.0, 7.0, 0.0),
    ])
}

#[test]
fn keyframes_run_outermost_to_innermost() {
    let config = PenumbraConfig::default();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    let keys = cycle.keyframes.values();
    assert_eq!(keys.len(), config.ring_count);
    assert_eq!(keys[0], cycle.curves[config.ring_count - 1]);
    assert_eq!(keys[keys.len() - 1], cycle.curves[0]);
    assert_eq!(cycle.keyframes.dur(), config.loop_duration);
    assert_eq!(cycle.keyframes.begin(), 0.0);
}

#[test]
fn keyframes_are_equally_spaced() {
    let config = PenumbraConfig::default();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    let step = config.loop_duration / (config.ring_count - 1) as f64;
    for k in 0..config.ring_count {
        assert!((cycle.keyframes.key_time(k) - k as f64 * step).abs() < 1e-12);
    }
    assert_eq!(cycle.keyframes.sample(0.0), Some(cycle.curves[19].clone()));

    let at_third = cycle.keyframes.sample(cycle.keyframes.key_time(3)).unwrap();
    for (a, b) in at_third.end_points().zip(cycle.curves[16].end_points()) {
        assert!(a.distance(b) < 1e-6);
    }
}

#[test]
fn strided_keyframes_keep_the_innermost_curve() {
    let curves: Vec<PathDesc> = (1..=20).map(|r| PathDesc::circle(r as f64)).collect();
    let keys = keyframe_paths(&curves, 3);
    // Reversed positions 0, 3, ..., 18 plus the innermost.
    assert_eq!(keys.len(), 8);
    assert_eq!(keys[0], curves[19]);
    assert_eq!(keys[1], curves[16]);
    assert_eq!(keys[keys.len() - 1], curves[0]);

    let every = keyframe_paths(&curves, 1);
    assert_eq!(every.len(), 20);

    // 19 % 19 == 0: the innermost is already on the stride.
    let exact = keyframe_paths(&curves, 19);
    assert_eq!(exact, vec![curves[19].clone(), curves[0].clone()]);
}

#[test]
fn curves_interpolate_their_rings() {
    let config = PenumbraConfig::default();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    assert_eq!(cycle.rings.len(), cycle.curves.len());
    for (ring, curve) in cycle.rings.iter().zip(&cycle.curves) {
        let ends: Vec<_> = curve.segments().map(|s| s.p3).collect();
        for p in &ring.points {
            assert!(ends.contains(p));
        }
    }
}

#[test]
fn outer_band_tracers_use_rings_above_the_middle() {
    let config = PenumbraConfig::default();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    assert_eq!(cycle.tracers.len(), config.ring_count / 2 - config.tracer_drop);
    let rings: Vec<_> = cycle.tracers.iter().map(|t| t.ring_index).collect();
    assert_eq!(rings, (10..18).collect::<Vec<_>>());
    for t in &cycle.tracers {
        assert_eq!(t.path, cycle.curves[t.ring_index]);
    }
}

#[test]
fn inner_band_tracers_trail_the_morph() {
    let config = PenumbraConfig::single_shot();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    let rings: Vec<_> = cycle.tracers.iter().map(|t| t.ring_index).collect();
    assert_eq!(rings, vec![9, 8, 7, 6, 5, 4, 3]);
}

#[test]
fn stay_on_is_staggered_over_the_second_half() {
    for config in [PenumbraConfig::looping(), PenumbraConfig::single_shot()] {
        let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
        let d = config.loop_duration;
        let stays: Vec<f64> = cycle.tracers.iter().map(|t| t.stay_on).collect();
        assert!(stays.windows(2).all(|w| w[0] < w[1]));
        assert!(stays.iter().all(|s| (d / 2.0..d).contains(s)), "{stays:?}");
        for t in &cycle.tracers {
            assert_eq!(t.visibility.begin(), t.stay_on);
        }
    }
}

#[test]
fn stay_on_formula() {
    assert_eq!(stay_on(0, 10, 0.5, 10.0), 5.0 + (0.5 / 9.0) * 5.0);
    assert_eq!(stay_on(6, 10, 0.5, 10.0), 5.0 + (6.5 / 9.0) * 5.0);
    // A one-ring band does not divide by zero.
    assert_eq!(stay_on(0, 1, 0.0, 10.0), 5.0);
}

#[test]
fn tracers_pulse_on_then_off() {
    let config = PenumbraConfig::single_shot();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    let t = &cycle.tracers[0];
    assert_eq!(t.opacity_at(t.stay_on - 0.01), 0.0);
    assert_eq!(t.opacity_at(t.stay_on), 1.0);
    assert_eq!(t.opacity_at(t.stay_on + config.loop_duration * 0.6), 0.0);
}

#[test]
fn tracers_share_one_pulse_shape() {
    let config = PenumbraConfig::default();
    let cycle = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    for t in &cycle.tracers {
        assert_eq!(t.visibility.values(), TRACER_PULSE.as_slice());
        assert_eq!(t.visibility.dur(), config.loop_duration);
        assert!(t.visibility.repeats());
        assert_eq!(t.opacity_at(t.stay_on + 0.25 * config.loop_duration), 1.0);
    }
}

#[test]
fn pinned_waves_reproduce_bit_for_bit() {
    let config = PenumbraConfig::default();
    let a = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    let b = build_cycle_with_waves(&config, 0, pinned_waves()).unwrap();
    assert_eq!(a.rings, b.rings);
    let da: Vec<String> = a.curves.iter().map(PathDesc::to_svg_d).collect();
    let db: Vec<String> = b.curves.iter().map(PathDesc::to_svg_d).collect();
    assert_eq!(da, db);
}

#[test]
fn random_cycles_keep_their_shape_counts() {
    let config = PenumbraConfig::default();
    let mut rng = Rng64::new(2024);
    let a = build_cycle(&config, 0, &mut rng).unwrap();
    let b = build_cycle(&config, 1, &mut rng).unwrap();
    assert_ne!(a.waves, b.waves);
    for c in [&a, &b] {
        assert_eq!(c.keyframes.values().len(), 20);
        assert_eq!(c.tracers.len(), 20 / 2 - 2);
    }
}

#[test]
fn invalid_configuration_fails_the_whole_cycle() {
    let config = PenumbraConfig {
        resolution: 4,
        ..PenumbraConfig::default()
    };
    assert!(matches!(
        build_cycle_with_waves(&config, 0, pinned_waves()),
        Err(crate::PenumbraError::InvalidConfiguration(_))
    ));
}
