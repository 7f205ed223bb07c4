// Host-side tests for the easing curves and the scalar tween driving all
// dot animations.

use dots_web::core::ease::Easing;
use dots_web::core::tween::Tween;

#[test]
fn easing_endpoints_are_exact() {
    for easing in [Easing::Linear, Easing::OutCubic, Easing::InOutCubic] {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    for easing in [Easing::Linear, Easing::OutCubic, Easing::InOutCubic] {
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }
}

#[test]
fn easing_is_monotonic() {
    for easing in [Easing::Linear, Easing::OutCubic, Easing::InOutCubic] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = easing.apply(i as f32 / 100.0);
            assert!(v >= prev, "{easing:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn out_cubic_leads_linear_in_midrange() {
    // Starts fast: eased progress stays ahead of linear progress.
    for i in 1..100 {
        let t = i as f32 / 100.0;
        assert!(Easing::OutCubic.apply(t) > t, "not ahead at t={t}");
    }
}

#[test]
fn in_out_cubic_is_symmetric_around_midpoint() {
    assert!((Easing::InOutCubic.apply(0.5) - 0.5).abs() < 1e-6);
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let lo = Easing::InOutCubic.apply(t);
        let hi = Easing::InOutCubic.apply(1.0 - t);
        assert!((lo + hi - 1.0).abs() < 1e-5, "asymmetric at t={t}");
    }
}

#[test]
fn tween_reaches_target_and_clamps() {
    let mut tween = Tween::new(3.0, 12.0, 0.4, Easing::OutCubic);
    assert_eq!(tween.value(), 3.0);
    assert!(!tween.finished());

    tween.step(0.4);
    assert!(tween.finished());
    assert!((tween.value() - 12.0).abs() < 1e-5);

    // Stepping past the end keeps the final value.
    tween.step(1.0);
    assert!((tween.value() - 12.0).abs() < 1e-5);
}

#[test]
fn tween_step_returns_unconsumed_remainder() {
    let mut tween = Tween::new(0.0, 1.0, 0.3, Easing::Linear);
    assert_eq!(tween.step(0.1), 0.0);
    // 0.1 consumed, 0.2 remain: a 0.5 step leaves 0.3 for the next stage.
    let leftover = tween.step(0.5);
    assert!((leftover - 0.3).abs() < 1e-6);
    assert!(tween.finished());
}

#[test]
fn tween_value_is_monotonic_for_increasing_target() {
    let mut tween = Tween::new(1.0, 2.0, 0.5, Easing::InOutCubic);
    let mut prev = tween.value();
    for _ in 0..50 {
        tween.step(0.01);
        let v = tween.value();
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn zero_duration_tween_is_immediately_at_target() {
    let tween = Tween::new(0.0, 1.0, 0.0, Easing::Linear);
    assert_eq!(tween.value(), 1.0);
    assert!(tween.finished());
}
