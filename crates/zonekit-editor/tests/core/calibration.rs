use zonekit_core::CalibrationError;
use zonekit_editor::calibration::{CalibrationSession, PickSlot};
use zonekit_editor::geometry::Point;

fn session(p1: (f64, f64), p2: (f64, f64), w1: (f64, f64), w2: (f64, f64)) -> CalibrationSession {
    let mut s = CalibrationSession::new();
    s.begin_pick(PickSlot::First);
    s.apply_pick(Point::new(p1.0, p1.1));
    s.begin_pick(PickSlot::Second);
    s.apply_pick(Point::new(p2.0, p2.1));
    s.set_world_point(PickSlot::First, Point::new(w1.0, w1.1));
    s.set_world_point(PickSlot::Second, Point::new(w2.0, w2.1));
    s
}

#[test]
fn test_basic_scale_and_origin() {
    // 100 map px span 1000 world units: 10 units per pixel, origin at zero
    let s = session((0.0, 0.0), (100.0, 0.0), (0.0, 0.0), (1000.0, 0.0));
    let cal = s.solve().unwrap();
    assert!((cal.scale - 10.0).abs() < 1e-9);
    assert!((cal.origin_x - 0.0).abs() < 1e-9);
    assert!((cal.origin_y - 0.0).abs() < 1e-9);
    assert!(!cal.invert_y);
}

#[test]
fn test_invert_y_changes_only_origin_y() {
    // Non-zero map Y so the inversion is observable
    let mut s = session((10.0, 20.0), (110.0, 20.0), (0.0, 500.0), (1000.0, 500.0));
    let normal = s.solve().unwrap();

    s.set_invert_y(true);
    let inverted = s.solve().unwrap();

    assert_eq!(normal.scale, inverted.scale);
    assert_eq!(normal.origin_x, inverted.origin_x);

    // normal: origin_y = w.y - p.y * scale; inverted: origin_y = w.y + p.y * scale
    assert!((normal.origin_y - (500.0 - 20.0 * normal.scale)).abs() < 1e-9);
    assert!((inverted.origin_y - (500.0 + 20.0 * inverted.scale)).abs() < 1e-9);
}

#[test]
fn test_origin_is_average_of_both_estimates() {
    // Slightly inconsistent correspondences: the origin is the average of
    // the two independent estimates, not either one alone
    let s = session((0.0, 0.0), (100.0, 0.0), (5.0, 0.0), (1011.0, 0.0));
    let cal = s.solve().unwrap();

    let scale = cal.scale;
    let est1 = 5.0 - 0.0 * scale;
    let est2 = 1011.0 - 100.0 * scale;
    assert!((cal.origin_x - (est1 + est2) / 2.0).abs() < 1e-9);
}

#[test]
fn test_map_to_world_roundtrips_reference_points() {
    let s = session((0.0, 0.0), (100.0, 0.0), (0.0, 0.0), (1000.0, 0.0));
    let cal = s.solve().unwrap();

    let w = cal.map_to_world(Point::new(100.0, 0.0));
    assert!((w.x - 1000.0).abs() < 1e-9);
    assert!((w.y - 0.0).abs() < 1e-9);
}

#[test]
fn test_map_to_world_inverted_y() {
    let mut s = session((0.0, 0.0), (100.0, 0.0), (0.0, 1000.0), (1000.0, 1000.0));
    s.set_invert_y(true);
    let cal = s.solve().unwrap();

    // Moving down the map image decreases world Y under inversion
    let near = cal.map_to_world(Point::new(0.0, 10.0));
    let far = cal.map_to_world(Point::new(0.0, 50.0));
    assert!(far.y < near.y);
}

#[test]
fn test_rejects_map_points_too_close() {
    let s = session((50.0, 50.0), (50.5, 50.0), (0.0, 0.0), (1000.0, 0.0));
    match s.solve() {
        Err(CalibrationError::MapPointsTooClose { distance }) => {
            assert!(distance < 1.0);
        }
        other => panic!("expected MapPointsTooClose, got {other:?}"),
    }
}

#[test]
fn test_rejects_world_points_too_close() {
    let s = session((0.0, 0.0), (100.0, 0.0), (10.0, 10.0), (10.05, 10.0));
    assert!(matches!(
        s.solve(),
        Err(CalibrationError::WorldPointsTooClose { .. })
    ));
}

#[test]
fn test_rejects_missing_points() {
    let mut s = CalibrationSession::new();
    assert_eq!(s.solve(), Err(CalibrationError::MissingMapPoint));

    s.begin_pick(PickSlot::First);
    s.apply_pick(Point::new(0.0, 0.0));
    s.begin_pick(PickSlot::Second);
    s.apply_pick(Point::new(100.0, 0.0));
    assert_eq!(s.solve(), Err(CalibrationError::MissingWorldPoint));
}

#[test]
fn test_failed_solve_leaves_session_intact_for_retry() {
    let mut s = session((0.0, 0.0), (0.1, 0.0), (0.0, 0.0), (1000.0, 0.0));
    assert!(s.solve().is_err());

    // Re-pick the second point further away; solve now succeeds
    s.begin_pick(PickSlot::Second);
    s.apply_pick(Point::new(100.0, 0.0));
    assert!(s.solve().is_ok());
}

#[test]
fn test_pick_workflow() {
    let mut s = CalibrationSession::new();
    assert!(!s.is_picking());
    assert!(!s.apply_pick(Point::new(1.0, 1.0)));

    s.begin_pick(PickSlot::First);
    assert!(s.is_picking());
    assert!(s.apply_pick(Point::new(12.0, 34.0)));
    assert!(!s.is_picking());
    assert_eq!(s.map_point(PickSlot::First), Some(Point::new(12.0, 34.0)));

    // An abandoned pick waits indefinitely until cancelled
    s.begin_pick(PickSlot::Second);
    s.cancel_pick();
    assert!(!s.is_picking());
    assert_eq!(s.map_point(PickSlot::Second), None);
}
