// Host-side tests for pointer and header proximity scalars.

use dots_web::core::constants::{BASE_DOT_RADIUS, MAX_DOT_RADIUS, MOUSE_INFLUENCE_RADIUS};
use dots_web::core::influence::{header_opacity, hover_radius, pointer_scale, HeaderBounds};
use glam::Vec2;

fn header() -> HeaderBounds {
    HeaderBounds {
        x: 400.0,
        y: 100.0,
        width: 800.0,
        height: 400.0,
    }
}

#[test]
fn pointer_scale_is_none_outside_influence() {
    let dot = Vec2::new(500.0, 500.0);
    assert!(pointer_scale(dot, Vec2::new(500.0, 700.0)).is_none());
    // Strictly-less-than boundary: exactly at the radius is outside.
    assert!(pointer_scale(dot, Vec2::new(500.0, 500.0 + MOUSE_INFLUENCE_RADIUS)).is_none());
}

#[test]
fn pointer_scale_is_one_under_the_pointer() {
    let dot = Vec2::new(500.0, 500.0);
    let scale = pointer_scale(dot, dot).unwrap();
    assert!((scale - 1.0).abs() < 1e-6);
}

#[test]
fn pointer_scale_grows_as_distance_shrinks() {
    let dot = Vec2::new(500.0, 500.0);
    let mut prev = 0.0;
    for dist in (1..100).rev() {
        let scale = pointer_scale(dot, Vec2::new(500.0 + dist as f32, 500.0)).unwrap();
        assert!(scale > prev, "scale not increasing at distance {dist}");
        assert!(scale > 0.0 && scale <= 1.0);
        prev = scale;
    }
}

#[test]
fn offscreen_default_pointer_activates_nothing() {
    let pointer = Vec2::new(-1000.0, -1000.0);
    for x in (40..2000).step_by(40) {
        for y in (40..1100).step_by(200) {
            assert!(pointer_scale(Vec2::new(x as f32, y as f32), pointer).is_none());
        }
    }
}

#[test]
fn hover_radius_spans_base_to_max() {
    assert_eq!(hover_radius(0.0), BASE_DOT_RADIUS);
    assert_eq!(hover_radius(1.0), MAX_DOT_RADIUS);
    let mid = hover_radius(0.5);
    assert!(mid > BASE_DOT_RADIUS && mid < MAX_DOT_RADIUS);
    // Monotone in the scale, bounded by the max radius.
    let mut prev = BASE_DOT_RADIUS;
    for i in 1..=10 {
        let r = hover_radius(i as f32 / 10.0);
        assert!(r >= prev && r <= MAX_DOT_RADIUS);
        prev = r;
    }
}

#[test]
fn header_opacity_is_linear_inside_and_one_outside() {
    let bounds = header();
    let center = bounds.center();
    let radius = bounds.influence_radius();
    assert_eq!(radius, 800.0 * 1.5);

    // Zero at the center, linear with distance inside.
    assert_eq!(header_opacity(center, Some(&bounds)), 0.0);
    let quarter = header_opacity(center + Vec2::new(radius / 4.0, 0.0), Some(&bounds));
    assert!((quarter - 0.25).abs() < 1e-5);
    let half = header_opacity(center + Vec2::new(0.0, radius / 2.0), Some(&bounds));
    assert!((half - 0.5).abs() < 1e-5);

    // Exactly 1 outside.
    assert_eq!(
        header_opacity(center + Vec2::new(radius + 1.0, 0.0), Some(&bounds)),
        1.0
    );
}

#[test]
fn header_opacity_is_continuous_at_the_boundary() {
    let bounds = header();
    let center = bounds.center();
    let radius = bounds.influence_radius();
    let just_inside = header_opacity(center + Vec2::new(radius - 0.5, 0.0), Some(&bounds));
    let outside = header_opacity(center + Vec2::new(radius, 0.0), Some(&bounds));
    assert_eq!(outside, 1.0);
    assert!((outside - just_inside).abs() < 1e-3);
}

#[test]
fn missing_or_degenerate_header_disables_the_fade() {
    let dot = Vec2::new(200.0, 200.0);
    assert_eq!(header_opacity(dot, None), 1.0);

    let empty = HeaderBounds {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };
    assert_eq!(header_opacity(dot, Some(&empty)), 1.0);
}
