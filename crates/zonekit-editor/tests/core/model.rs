use zonekit_editor::geometry::Point;
use zonekit_editor::model::{
    FillPattern, LabelSize, LineStyle, Zone, ZoneCircle, ZonePolygon, ZoneRect, ZoneShape,
    ZoneType,
};

#[test]
fn test_new_zone_defaults() {
    let zone = Zone::new("Zone 1", ZoneShape::Circle(ZoneCircle::new(5.0, 5.0, 20.0)));
    assert_eq!(zone.zone_type, ZoneType::Safe);
    assert_eq!(zone.color, "#00ff88");
    assert_eq!(zone.opacity, 0.4);
    assert!(zone.visible);
    assert_eq!(zone.style, LineStyle::Solid);
    assert_eq!(zone.fill_pattern, FillPattern::Solid);
    assert!(!zone.label.show);
    assert_eq!(zone.label.size, LabelSize::Medium);
}

#[test]
fn test_zone_type_colors() {
    assert_eq!(ZoneType::Safe.default_color(), "#00ff88");
    assert_eq!(ZoneType::Restricted.default_color(), "#ff4757");
    assert_eq!(ZoneType::Pvp.default_color(), "#ff6b35");
    assert_eq!(ZoneType::Spawn.default_color(), "#3498db");
    assert_eq!(ZoneType::Objective.default_color(), "#9b59b6");
    assert_eq!(ZoneType::Custom.default_color(), "#f1c40f");
}

#[test]
fn test_zone_type_display_names() {
    assert_eq!(ZoneType::Safe.display_name(), "Safe Zone");
    assert_eq!(ZoneType::Pvp.display_name(), "PvP Zone");
    assert_eq!(ZoneType::Spawn.display_name(), "Spawn Area");
}

#[test]
fn test_shape_serializes_flat_with_discriminant() {
    let zone = Zone::new(
        "Zone 1",
        ZoneShape::Rectangle(ZoneRect::new(10.0, 20.0, 30.0, 40.0)),
    );
    let value = serde_json::to_value(&zone).unwrap();

    // The shape tag and its fields are flattened into the zone record
    assert_eq!(value["shape"], "rectangle");
    assert_eq!(value["x"], 10.0);
    assert_eq!(value["width"], 30.0);
    assert_eq!(value["type"], "safe");
}

#[test]
fn test_zone_roundtrip_all_shapes() {
    let shapes = vec![
        ZoneShape::Circle(ZoneCircle::new(50.0, 60.0, 25.0)),
        ZoneShape::Rectangle(ZoneRect::new(0.0, 0.0, 100.0, 50.0)),
        ZoneShape::Line(line_of((0.0, 0.0), (100.0, 100.0))),
        ZoneShape::Polygon(ZonePolygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ])),
    ];

    for shape in shapes {
        let zone = Zone::new("Zone", shape.clone());
        let json = serde_json::to_string(&zone).unwrap();
        let back: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape, shape);
        assert_eq!(back.id, zone.id);
    }
}

fn line_of(a: (f64, f64), b: (f64, f64)) -> zonekit_editor::model::ZoneLine {
    zonekit_editor::model::ZoneLine::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
}

#[test]
fn test_deserialize_minimal_record_fills_defaults() {
    // A record carrying only id, name, and geometry: presentation and
    // label fields fall back to defaults
    let json = r#"{
        "id": "0b7e5d42-3f9a-4c1d-8e6b-2a5f9c8d7e61",
        "name": "Imported",
        "shape": "circle",
        "cx": 100.0,
        "cy": 200.0,
        "radius": 30.0
    }"#;

    let zone: Zone = serde_json::from_str(json).unwrap();
    assert_eq!(zone.name, "Imported");
    assert_eq!(zone.zone_type, ZoneType::Safe);
    assert_eq!(zone.color, "#00ff88");
    assert_eq!(zone.opacity, 0.4);
    assert!(zone.visible);
    assert_eq!(zone.label.bg_opacity, 0.7);
    match zone.shape {
        ZoneShape::Circle(c) => assert_eq!(c.radius, 30.0),
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn test_fill_pattern_snake_case_names() {
    let json = serde_json::to_string(&FillPattern::DiagonalRight).unwrap();
    assert_eq!(json, "\"diagonal_right\"");
    let back: FillPattern = serde_json::from_str("\"crosshatch\"").unwrap();
    assert_eq!(back, FillPattern::Crosshatch);
}

#[test]
fn test_shape_validity() {
    assert!(ZoneShape::Circle(ZoneCircle::new(0.0, 0.0, 5.0)).is_valid());
    assert!(!ZoneShape::Circle(ZoneCircle::new(0.0, 0.0, 0.0)).is_valid());
    assert!(!ZoneShape::Rectangle(ZoneRect::new(0.0, 0.0, 10.0, 0.0)).is_valid());
    assert!(!ZoneShape::Polygon(ZonePolygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
    ]))
    .is_valid());
}

#[test]
fn test_rect_resize_corner_clamps_to_minimum() {
    let mut rect = ZoneRect::new(100.0, 100.0, 50.0, 50.0);
    // Drag the bottom-right corner far past the top-left
    rect.resize_corner(2, Point::new(90.0, 90.0));
    assert_eq!(rect.width, 5.0);
    assert_eq!(rect.height, 5.0);
    assert_eq!(rect.x, 100.0);
    assert_eq!(rect.y, 100.0);
}

#[test]
fn test_rect_resize_keeps_opposite_corner_fixed() {
    let mut rect = ZoneRect::new(100.0, 100.0, 50.0, 50.0);
    rect.resize_corner(0, Point::new(90.0, 80.0));
    // Bottom-right stays at (150, 150)
    assert_eq!(rect.x, 90.0);
    assert_eq!(rect.y, 80.0);
    assert_eq!(rect.x + rect.width, 150.0);
    assert_eq!(rect.y + rect.height, 150.0);
}

#[test]
fn test_rect_from_corners_normalizes() {
    let rect = ZoneRect::from_corners(Point::new(50.0, 60.0), Point::new(10.0, 20.0));
    assert_eq!(rect.x, 10.0);
    assert_eq!(rect.y, 20.0);
    assert_eq!(rect.width, 40.0);
    assert_eq!(rect.height, 40.0);
}
