// Tests for the spiral path and the animation clock.

use funnel_core::{is_inside_span, phase_at, position_at, AnimationClock, SPIRAL_DEPTH};
use std::time::Duration;

#[test]
fn spiral_starts_at_unit_radius_on_x_axis() {
    let p = position_at(0.0);
    assert!((p.x - 1.0).abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
    assert!(p.z.abs() < 1e-6);
}

#[test]
fn spiral_seam_wraps_to_start_but_end_stays_at_bottom() {
    // Phase 1.0 wraps back to 0.0 before it reaches the spiral, so the
    // animation never evaluates t = 1 directly. Evaluated anyway, t = 1 is
    // the bottom of the funnel: same angle as t = 0 but y = -SPIRAL_DEPTH.
    let wrapped = position_at((0.75_f32 + 0.25) % 1.0);
    let start = position_at(0.0);
    assert!((wrapped - start).length() < 1e-5);

    // Approaching the end of a cycle the angle returns to where it began
    let end = position_at(1.0);
    let dir_end = glam::Vec2::new(end.x, end.z).normalize();
    let dir_start = glam::Vec2::new(start.x, start.z).normalize();
    assert!((dir_end - dir_start).length() < 1e-4);
    assert!((end.y + SPIRAL_DEPTH).abs() < 1e-6);
    assert!(start.y.abs() < 1e-6);
}

#[test]
fn spiral_height_descends_monotonically() {
    let mut prev = position_at(0.0).y;
    assert_eq!(prev, 0.0);
    for i in 1..1000 {
        let t = i as f32 / 1000.0;
        let y = position_at(t).y;
        assert!(y < prev, "y not decreasing at t={t}");
        assert!(y > -SPIRAL_DEPTH && y <= 0.0, "y={y} out of range at t={t}");
        prev = y;
    }
}

#[test]
fn spiral_radius_narrows_linearly() {
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let p = position_at(t);
        let radius = (p.x * p.x + p.z * p.z).sqrt();
        let expected = 1.0 - 0.6 * t;
        assert!(
            (radius - expected).abs() < 1e-5,
            "radius {radius} != {expected} at t={t}"
        );
    }
}

#[test]
fn span_excludes_exact_endpoints() {
    assert!(!is_inside_span(0.0));
    assert!(!is_inside_span(-SPIRAL_DEPTH));
    assert!(is_inside_span(-1.0));
    assert!(is_inside_span(-5.59));
    assert!(!is_inside_span(0.01));
}

#[test]
fn phase_wraps_every_duration_over_speed() {
    // speed 0.1, duration 10: a full cycle takes 100 seconds
    assert!((phase_at(50.0, 0.1, 10.0) - 0.5).abs() < 1e-5);
    assert!(phase_at(100.0, 0.1, 10.0) < 1e-5);
    assert!((phase_at(125.0, 0.1, 10.0) - 0.25).abs() < 1e-5);
}

#[test]
fn phase_always_in_unit_interval() {
    for i in -500..500 {
        let seconds = i as f64 * 0.37;
        let phase = phase_at(seconds, 0.1, 10.0);
        assert!((0.0..1.0).contains(&phase), "phase {phase} at {seconds}s");
    }
    assert_eq!(phase_at(12.0, 0.1, 0.0), 0.0);
}

#[test]
fn clock_accumulates_and_pauses() {
    let mut clock = AnimationClock::new(0.1, 10.0);
    clock.advance(Duration::from_secs(25));
    assert!((clock.phase() - 0.25).abs() < 1e-5);

    clock.toggle_pause();
    assert!(clock.is_paused());
    clock.advance(Duration::from_secs(10));
    assert!((clock.elapsed_sec() - 25.0).abs() < 1e-9);

    clock.toggle_pause();
    clock.advance(Duration::from_secs(25));
    assert!((clock.phase() - 0.5).abs() < 1e-5);
}
