use zonekit_core::EventBus;
use zonekit_editor::history::UndoRedoManager;
use zonekit_editor::model::{Zone, ZoneCircle, ZoneShape};

fn circle_zone(name: &str, radius: f64) -> Zone {
    Zone::new(name, ZoneShape::Circle(ZoneCircle::new(0.0, 0.0, radius)))
}

#[test]
fn test_empty_history() {
    let history = UndoRedoManager::new(EventBus::new());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.is_empty());
}

#[test]
fn test_undo_restores_previous_snapshot() {
    let mut history = UndoRedoManager::new(EventBus::new());
    history.save(&[]);
    history.save(&[circle_zone("Zone 1", 10.0)]);

    assert!(history.can_undo());
    let restored = history.undo().unwrap();
    assert!(restored.is_empty());
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn test_redo_after_undo() {
    let mut history = UndoRedoManager::new(EventBus::new());
    history.save(&[]);
    history.save(&[circle_zone("Zone 1", 10.0)]);

    history.undo().unwrap();
    let restored = history.redo().unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].name, "Zone 1");
    assert!(!history.can_redo());
}

#[test]
fn test_save_truncates_redo_tail() {
    let mut history = UndoRedoManager::new(EventBus::new());
    history.save(&[]);
    history.save(&[circle_zone("Zone 1", 10.0)]);
    history.undo().unwrap();

    // A new edit after undo discards the redo branch
    history.save(&[circle_zone("Other", 20.0)]);
    assert!(!history.can_redo());

    let restored = history.undo().unwrap();
    assert!(restored.is_empty());
}

#[test]
fn test_capacity_drops_oldest() {
    let mut history = UndoRedoManager::new(EventBus::new());
    for i in 0..60 {
        history.save(&[circle_zone(&format!("Zone {i}"), 10.0)]);
    }

    assert_eq!(history.len(), 50);

    // Walk all the way back: the oldest surviving snapshot is number 10
    let mut last = None;
    while history.can_undo() {
        last = history.undo();
    }
    assert_eq!(last.unwrap()[0].name, "Zone 10");
}

#[test]
fn test_undo_at_bottom_returns_none() {
    let mut history = UndoRedoManager::new(EventBus::new());
    history.save(&[]);
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn test_snapshots_are_deep_copies() {
    let mut history = UndoRedoManager::new(EventBus::new());
    let mut zone = circle_zone("Zone 1", 10.0);
    history.save(&[zone.clone()]);

    // Mutating the live zone must not touch the stored snapshot
    if let ZoneShape::Circle(c) = &mut zone.shape {
        c.radius = 99.0;
    }
    history.save(&[zone]);

    let restored = history.undo().unwrap();
    match &restored[0].shape {
        ZoneShape::Circle(c) => assert_eq!(c.radius, 10.0),
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn test_clear() {
    let mut history = UndoRedoManager::new(EventBus::new());
    history.save(&[]);
    history.save(&[circle_zone("Zone 1", 10.0)]);
    history.clear();

    assert!(history.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
