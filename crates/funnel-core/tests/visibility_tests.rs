// Tests for the distance mapping and frame-rate feedback.

use funnel_core::{
    adjust_for_fps, clamp_visible, visible_from_distance, FrameRateSampler, VisibilityPolicy,
    MIN_WORDS,
};

#[test]
fn distance_endpoints_and_midpoint() {
    assert_eq!(visible_from_distance(5.0, 100), 100);
    assert_eq!(visible_from_distance(15.0, 100), MIN_WORDS);
    // halfway between 20 and 100
    assert_eq!(visible_from_distance(10.0, 100), 60);
}

#[test]
fn distance_outside_range_clamps() {
    assert_eq!(visible_from_distance(0.0, 100), 100);
    assert_eq!(visible_from_distance(-50.0, 100), 100);
    assert_eq!(visible_from_distance(100.0, 100), MIN_WORDS);
    assert_eq!(visible_from_distance(f32::INFINITY, 100), MIN_WORDS);
    assert_eq!(visible_from_distance(f32::NAN, 100), MIN_WORDS);
}

#[test]
fn distance_mapping_is_monotonic_non_increasing() {
    for pool_len in [10usize, 20, 50, 120] {
        let mut prev = usize::MAX;
        for i in 0..600 {
            let d = i as f32 * 0.1 - 20.0;
            let words = visible_from_distance(d, pool_len);
            assert!(words <= prev, "count rose at d={d} for pool {pool_len}");
            assert!(words <= pool_len);
            prev = words;
        }
    }
}

#[test]
fn small_pool_shows_every_slot_at_any_distance() {
    for d in [0.0, 5.0, 10.0, 15.0, 40.0] {
        assert_eq!(visible_from_distance(d, 10), 10);
    }
}

#[test]
fn clamp_floors_then_caps() {
    assert_eq!(clamp_visible(5, 100), MIN_WORDS);
    assert_eq!(clamp_visible(150, 100), 100);
    assert_eq!(clamp_visible(50, 100), 50);
    // pool length wins over the floor
    assert_eq!(clamp_visible(50, 10), 10);
}

#[test]
fn low_fps_sheds_ten_words_down_to_floor() {
    assert_eq!(adjust_for_fps(50, 20.0, 100), 40);
    assert_eq!(adjust_for_fps(25, 20.0, 100), MIN_WORDS);
    assert_eq!(adjust_for_fps(MIN_WORDS, 5.0, 100), MIN_WORDS);
}

#[test]
fn high_fps_adds_ten_words_up_to_pool() {
    assert_eq!(adjust_for_fps(50, 60.0, 100), 60);
    assert_eq!(adjust_for_fps(95, 60.0, 100), 100);
    assert_eq!(adjust_for_fps(100, 144.0, 100), 100);
}

#[test]
fn fps_in_band_leaves_count_alone() {
    assert_eq!(adjust_for_fps(50, 30.0, 100), 50);
    assert_eq!(adjust_for_fps(50, 42.0, 100), 50);
    assert_eq!(adjust_for_fps(50, 55.0, 100), 50);
}

#[test]
fn sampler_reports_after_one_interval() {
    let mut sampler = FrameRateSampler::new(1.0);
    assert_eq!(sampler.record_frame(0.0), None);
    for i in 1..20 {
        assert_eq!(sampler.record_frame(i as f64 / 20.0), None);
    }
    let fps = sampler.record_frame(1.0).expect("sample after one second");
    assert!((fps - 20.0).abs() < 1e-3);

    // next window starts fresh
    for i in 1..60 {
        assert_eq!(sampler.record_frame(1.0 + i as f64 / 60.0), None);
    }
    let fps = sampler.record_frame(2.0).expect("second sample");
    assert!((fps - 60.0).abs() < 1e-3);
}

#[test]
fn sampler_reset_reopens_window() {
    let mut sampler = FrameRateSampler::default();
    assert_eq!(sampler.record_frame(0.0), None);
    assert_eq!(sampler.record_frame(0.5), None);
    sampler.reset();
    assert_eq!(sampler.record_frame(5.0), None);
    assert!(sampler.record_frame(6.0).is_some());
}

#[test]
fn policy_toggles_between_both_modes() {
    let p = VisibilityPolicy::default();
    assert_eq!(p, VisibilityPolicy::DistanceOverrides);
    assert_eq!(p.toggled(), VisibilityPolicy::FrameRateBudget);
    assert_eq!(p.toggled().toggled(), p);
}
