//! Pointer-driven editing tools.
//!
//! Each tool is a small state machine fed pointer-down / pointer-move /
//! pointer-up events (plus double-click for the pen tool), operating
//! entirely in map-space coordinates. Draft state is transient: it is
//! discarded on commit, cancel, or tool switch, and never persisted.
//!
//! [`ToolSet`] owns one instance of every tool and dispatches to the active
//! one; the closed [`ToolKind`] enum keeps dispatch exhaustive.

mod path_tools;
mod select_tool;
mod shape_tools;

pub use path_tools::{FreehandTool, PenTool};
pub use select_tool::SelectTool;
pub use shape_tools::{CircleTool, LineTool, RectangleTool};

use zonekit_core::ZoneId;

use crate::geometry::Point;
use crate::model::ZoneShape;
use crate::zone_store::ZoneStore;

/// The available editing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Pen,
    Freehand,
}

/// Cursor feedback for the shell. Purely advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over any non-selected zone.
    Pointer,
    /// Over the selected zone's body.
    Move,
    /// Over a resize handle.
    Resize,
    /// A drawing tool is active.
    Crosshair,
}

/// What a renderer needs to draw the in-progress operation.
#[derive(Debug, Clone, Default)]
pub struct ToolDraft {
    /// Collected points (pen anchors, freehand trail, drag anchor).
    pub points: Vec<Point>,
    /// Live shape preview for the drag tools.
    pub preview: Option<ZoneShape>,
    /// Pen tool: pointer is close enough to the first anchor to close the
    /// loop on the next click.
    pub close_loop_hover: bool,
}

/// Outcome of a dispatched pointer event.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureResult {
    /// A zone was committed by this event.
    pub committed: Option<ZoneId>,
    /// A move/resize gesture that mutated geometry just ended. Signaled
    /// exactly once per gesture, on pointer-up.
    pub drag_completed: bool,
}

impl GestureResult {
    fn committed(id: Option<ZoneId>) -> Self {
        Self {
            committed: id,
            drag_completed: false,
        }
    }
}

/// Owns every tool and routes events to the active one.
#[derive(Debug, Default)]
pub struct ToolSet {
    kind: ToolKind,
    select: SelectTool,
    rectangle: RectangleTool,
    circle: CircleTool,
    line: LineTool,
    pen: PenTool,
    freehand: FreehandTool,
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool.
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Switches tools, discarding the outgoing tool's draft.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if self.kind != kind {
            self.cancel();
            self.kind = kind;
        }
    }

    /// Cancels the active tool's in-progress operation.
    pub fn cancel(&mut self) {
        match self.kind {
            ToolKind::Select => self.select.cancel(),
            ToolKind::Rectangle => self.rectangle.cancel(),
            ToolKind::Circle => self.circle.cancel(),
            ToolKind::Line => self.line.cancel(),
            ToolKind::Pen => self.pen.cancel(),
            ToolKind::Freehand => self.freehand.cancel(),
        }
    }

    pub fn handle_down(&mut self, pos: Point, zoom: f64, store: &mut ZoneStore) -> GestureResult {
        match self.kind {
            ToolKind::Select => {
                self.select.on_down(pos, zoom, store);
                GestureResult::default()
            }
            ToolKind::Rectangle => {
                self.rectangle.on_down(pos);
                GestureResult::default()
            }
            ToolKind::Circle => {
                self.circle.on_down(pos);
                GestureResult::default()
            }
            ToolKind::Line => {
                self.line.on_down(pos);
                GestureResult::default()
            }
            ToolKind::Pen => GestureResult::committed(self.pen.on_down(pos, zoom, store)),
            ToolKind::Freehand => {
                self.freehand.on_down(pos);
                GestureResult::default()
            }
        }
    }

    pub fn handle_move(&mut self, pos: Point, zoom: f64, store: &mut ZoneStore) {
        match self.kind {
            ToolKind::Select => self.select.on_move(pos, zoom, store),
            ToolKind::Rectangle => self.rectangle.on_move(pos),
            ToolKind::Circle => self.circle.on_move(pos),
            ToolKind::Line => self.line.on_move(pos),
            ToolKind::Pen => self.pen.on_move(pos, zoom),
            ToolKind::Freehand => self.freehand.on_move(pos, zoom),
        }
    }

    pub fn handle_up(&mut self, pos: Point, store: &mut ZoneStore) -> GestureResult {
        let _ = pos;
        match self.kind {
            ToolKind::Select => GestureResult {
                committed: None,
                drag_completed: self.select.on_up(store),
            },
            ToolKind::Rectangle => GestureResult::committed(self.rectangle.on_up(store)),
            ToolKind::Circle => GestureResult::committed(self.circle.on_up(store)),
            ToolKind::Line => GestureResult::committed(self.line.on_up(store)),
            ToolKind::Pen => GestureResult::default(),
            ToolKind::Freehand => GestureResult::committed(self.freehand.on_up(store)),
        }
    }

    pub fn handle_double_click(&mut self, store: &mut ZoneStore) -> GestureResult {
        match self.kind {
            ToolKind::Pen => GestureResult::committed(self.pen.on_double_click(store)),
            _ => GestureResult::default(),
        }
    }

    /// The active tool's draft state, for live preview.
    pub fn draft(&self) -> ToolDraft {
        match self.kind {
            ToolKind::Select => ToolDraft::default(),
            ToolKind::Rectangle => self.rectangle.draft(),
            ToolKind::Circle => self.circle.draft(),
            ToolKind::Line => self.line.draft(),
            ToolKind::Pen => self.pen.draft(),
            ToolKind::Freehand => self.freehand.draft(),
        }
    }

    /// Cursor feedback at the given map position.
    pub fn cursor(&self, pos: Point, zoom: f64, store: &ZoneStore) -> CursorStyle {
        match self.kind {
            ToolKind::Select => self.select.cursor(pos, zoom, store),
            _ => CursorStyle::Crosshair,
        }
    }

    /// Whether the active tool wants grid-snapped input.
    pub fn wants_snapped_input(&self) -> bool {
        self.kind == ToolKind::Pen
    }
}
