use zonekit_editor::geometry::Point;
use zonekit_editor::model::{Zone, ZoneCircle, ZonePolygon, ZoneRect, ZoneShape, ZoneType};
use zonekit_editor::serialization::ProjectFile;

fn sample_zones() -> Vec<Zone> {
    vec![
        Zone::new("Base", ZoneShape::Circle(ZoneCircle::new(100.0, 100.0, 50.0))),
        Zone::new(
            "Perimeter",
            ZoneShape::Rectangle(ZoneRect::new(0.0, 0.0, 400.0, 300.0)),
        ),
        Zone::new(
            "Patrol",
            ZoneShape::Polygon(ZonePolygon::new(vec![
                Point::new(10.0, 10.0),
                Point::new(90.0, 20.0),
                Point::new(50.0, 80.0),
            ])),
        ),
    ]
}

#[test]
fn test_new_project_metadata() {
    let project = ProjectFile::new(sample_zones());
    assert_eq!(project.version, "1.0");
    assert_eq!(project.zones.len(), 3);
}

#[test]
fn test_json_roundtrip() {
    let project = ProjectFile::new(sample_zones());
    let json = project.to_json().unwrap();
    let loaded = ProjectFile::from_json(&json).unwrap();

    assert_eq!(loaded.version, project.version);
    assert_eq!(loaded.zones.len(), 3);
    assert_eq!(loaded.zones[0].name, "Base");
    assert_eq!(loaded.zones[0].id, project.zones[0].id);
    assert_eq!(loaded.zones[2].shape, project.zones[2].shape);
}

#[test]
fn test_save_and_load_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map_project.json");

    let mut zones = sample_zones();
    zones[0].zone_type = ZoneType::Objective;
    zones[0].color = ZoneType::Objective.default_color().to_string();

    ProjectFile::new(zones).save_to_path(&path).unwrap();
    let loaded = ProjectFile::load_from_path(&path).unwrap();

    assert_eq!(loaded.zones.len(), 3);
    assert_eq!(loaded.zones[0].zone_type, ZoneType::Objective);
    assert_eq!(loaded.zones[0].color, "#9b59b6");
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ProjectFile::load_from_path(dir.path().join("nope.json")).is_err());
}

#[test]
fn test_invalid_json_errors() {
    assert!(ProjectFile::from_json("not json at all").is_err());
    assert!(ProjectFile::from_json("{\"no_zones\": true}").is_err());
}

#[test]
fn test_malformed_zone_record_is_skipped() {
    // Three records: one fine, one with garbage geometry fields, one with
    // an unknown shape tag. Only the good one survives; the load succeeds.
    let json = r#"{
        "version": "1.0",
        "zones": [
            {
                "id": "0b7e5d42-3f9a-4c1d-8e6b-2a5f9c8d7e61",
                "name": "Good",
                "shape": "circle",
                "cx": 10.0, "cy": 10.0, "radius": 25.0
            },
            {
                "id": "1c8f6e53-4a0b-5d2e-9f7c-3b6a0d9e8f72",
                "name": "Broken",
                "shape": "circle",
                "cx": "not-a-number"
            },
            {
                "id": "2d9f7f64-5b1c-6e3f-a08d-4c7b1e0f9083",
                "name": "Unknown",
                "shape": "hexagram",
                "points": []
            }
        ]
    }"#;

    let loaded = ProjectFile::from_json(json).unwrap();
    assert_eq!(loaded.zones.len(), 1);
    assert_eq!(loaded.zones[0].name, "Good");
}

#[test]
fn test_degenerate_geometry_is_skipped() {
    let json = r#"{
        "zones": [
            {
                "id": "0b7e5d42-3f9a-4c1d-8e6b-2a5f9c8d7e61",
                "name": "Flat",
                "shape": "rectangle",
                "x": 0.0, "y": 0.0, "width": 100.0, "height": 0.0
            },
            {
                "id": "1c8f6e53-4a0b-5d2e-9f7c-3b6a0d9e8f72",
                "name": "TwoPoints",
                "shape": "polygon",
                "points": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]
            }
        ]
    }"#;

    let loaded = ProjectFile::from_json(json).unwrap();
    assert!(loaded.zones.is_empty());
}

#[test]
fn test_missing_version_and_created_get_defaults() {
    let json = r#"{"zones": []}"#;
    let loaded = ProjectFile::from_json(json).unwrap();
    assert_eq!(loaded.version, "1.0");
}

#[test]
fn test_record_layout_matches_flat_format() {
    let project = ProjectFile::new(vec![Zone::new(
        "Zone 1",
        ZoneShape::Circle(ZoneCircle::new(5.0, 6.0, 7.0)),
    )]);
    let value: serde_json::Value = serde_json::from_str(&project.to_json().unwrap()).unwrap();

    let record = &value["zones"][0];
    assert_eq!(record["shape"], "circle");
    assert_eq!(record["cx"], 5.0);
    assert_eq!(record["radius"], 7.0);
    assert_eq!(record["type"], "safe");
    assert_eq!(record["visible"], true);
}
