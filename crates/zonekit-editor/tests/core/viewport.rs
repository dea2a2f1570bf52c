use zonekit_editor::geometry::Point;
use zonekit_editor::viewport::Viewport;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert!(!vp.snap_enabled());
}

#[test]
fn test_screen_to_map_identity_at_default() {
    let vp = Viewport::new();
    let map = vp.screen_to_map(150.0, 250.0);
    assert_eq!(map, Point::new(150.0, 250.0));
}

#[test]
fn test_screen_to_map_with_zoom_and_pan() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    vp.set_pan(100.0, 50.0);
    // screen 300 -> map (300 - 100) / 2 = 100
    let map = vp.screen_to_map(300.0, 250.0);
    assert!((map.x - 100.0).abs() < 1e-9);
    assert!((map.y - 100.0).abs() < 1e-9);
}

#[test]
fn test_roundtrip_conversion() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.5);
    vp.set_pan(75.0, 125.0);

    let original = Point::new(123.45, 456.78);
    let (sx, sy) = vp.map_to_screen(original.x, original.y);
    let roundtrip = vp.screen_to_map(sx, sy);

    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_zoom_clamped_to_bounds() {
    let mut vp = Viewport::new();
    vp.set_zoom(0.01);
    assert_eq!(vp.zoom(), 0.1);

    vp.set_zoom(100.0);
    assert_eq!(vp.zoom(), 5.0);

    // Relative zoom with a huge delta also clamps, never rejects
    vp.zoom_by(1e9, None);
    assert_eq!(vp.zoom(), 5.0);
    vp.zoom_by(-1e9, None);
    assert_eq!(vp.zoom(), 0.1);
}

#[test]
fn test_zoom_anchor_keeps_map_point_fixed() {
    let mut vp = Viewport::new();
    vp.set_pan(40.0, -20.0);

    let anchor = (400.0, 300.0);
    let before = vp.screen_to_map(anchor.0, anchor.1);
    vp.zoom_by(0.5, Some(anchor));
    let after = vp.screen_to_map(anchor.0, anchor.1);

    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_zoom_without_anchor_leaves_pan_alone() {
    let mut vp = Viewport::new();
    vp.set_pan(33.0, 44.0);
    vp.zoom_by(0.1, None);
    assert_eq!(vp.pan_x(), 33.0);
    assert_eq!(vp.pan_y(), 44.0);
}

#[test]
fn test_fit_to_view_centers_map() {
    let mut vp = Viewport::new();
    // 1000x1000 map in a 900x600 viewport: zoom = 600/1000 * 0.9 = 0.54
    vp.fit_to_view(1000.0, 1000.0, 900.0, 600.0);
    assert!((vp.zoom() - 0.54).abs() < 1e-9);

    // Map center lands on the viewport center
    let (cx, cy) = vp.map_to_screen(500.0, 500.0);
    assert!((cx - 450.0).abs() < 1e-9);
    assert!((cy - 300.0).abs() < 1e-9);
}

#[test]
fn test_fit_to_view_without_map_is_noop() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.0);
    vp.set_pan(10.0, 20.0);
    vp.fit_to_view(0.0, 0.0, 900.0, 600.0);
    assert_eq!(vp.zoom(), 2.0);
    assert_eq!(vp.pan_x(), 10.0);
}

#[test]
fn test_snap_disabled_is_identity() {
    let vp = Viewport::new();
    let p = Point::new(13.7, 28.2);
    assert_eq!(vp.snap_to_grid(p), p);
}

#[test]
fn test_snap_rounds_to_grid() {
    let mut vp = Viewport::new();
    vp.set_snap_enabled(true);
    let snapped = vp.snap_to_grid(Point::new(13.7, 28.2));
    assert_eq!(snapped, Point::new(10.0, 30.0));
}

#[test]
fn test_snap_is_idempotent() {
    let mut vp = Viewport::new();
    vp.set_snap_enabled(true);
    let once = vp.snap_to_grid(Point::new(-47.3, 91.8));
    let twice = vp.snap_to_grid(once);
    assert_eq!(once, twice);
}

#[test]
fn test_snap_grid_size_independent_of_zoom() {
    let mut vp = Viewport::new();
    vp.set_snap_enabled(true);
    let p = Point::new(13.7, 28.2);
    let at_1x = vp.snap_to_grid(p);
    vp.set_zoom(4.0);
    assert_eq!(vp.snap_to_grid(p), at_1x);
}

#[test]
fn test_toggle_snap() {
    let mut vp = Viewport::new();
    assert!(vp.toggle_snap());
    assert!(!vp.toggle_snap());
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.5);
    vp.set_pan(100.0, 200.0);
    vp.reset();

    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}
