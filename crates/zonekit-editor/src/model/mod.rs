//! The zone data model.
//!
//! A [`Zone`] is the persisted drawable entity: one geometric shape plus
//! presentation and label attributes. Geometry is a closed tagged union
//! ([`ZoneShape`]) so every consumer — hit-testing, bounds, rendering,
//! handle resize — switches exhaustively on the shape kind; adding a shape
//! variant forces every consumer site to be updated.
//!
//! The serde layout is flat: the shape discriminant and its fields are
//! flattened into the zone record, matching the project-file format.

use serde::{Deserialize, Serialize};

use zonekit_core::constants::{
    DEFAULT_LABEL_BG_OPACITY, DEFAULT_ZONE_OPACITY, LABEL_SIZE_LARGE, LABEL_SIZE_MEDIUM,
    LABEL_SIZE_SMALL, LINE_HIT_THRESHOLD,
};
use zonekit_core::ZoneId;

mod circle;
mod line;
mod polygon;
mod rectangle;

pub use circle::ZoneCircle;
pub use line::ZoneLine;
pub use polygon::ZonePolygon;
pub use rectangle::ZoneRect;

use crate::geometry::{Bounds, Point};

/// Shape discriminant, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
    Polygon,
}

/// Closed union of zone geometries.
///
/// Serialized internally tagged as `"shape"`, so a flattened zone record
/// reads `{"shape": "circle", "cx": ..., "cy": ..., "radius": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ZoneShape {
    Circle(ZoneCircle),
    Rectangle(ZoneRect),
    Line(ZoneLine),
    Polygon(ZonePolygon),
}

impl ZoneShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ZoneShape::Circle(_) => ShapeKind::Circle,
            ZoneShape::Rectangle(_) => ShapeKind::Rectangle,
            ZoneShape::Line(_) => ShapeKind::Line,
            ZoneShape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Shape-specific hit test. `zoom` converts the line tolerance from
    /// screen px to map units; area shapes ignore it.
    pub fn hit_test(&self, point: Point, zoom: f64) -> bool {
        match self {
            ZoneShape::Circle(c) => c.contains_point(point),
            ZoneShape::Rectangle(r) => r.contains_point(point),
            ZoneShape::Line(l) => l.distance_to(point) <= LINE_HIT_THRESHOLD / zoom,
            ZoneShape::Polygon(p) => p.contains_point(point),
        }
    }

    /// Axis-aligned bounding box. `None` for a polygon with no vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            ZoneShape::Circle(c) => Some(c.bounds()),
            ZoneShape::Rectangle(r) => Some(r.bounds()),
            ZoneShape::Line(l) => Some(l.bounds()),
            ZoneShape::Polygon(p) => p.bounds(),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            ZoneShape::Circle(c) => c.translate(dx, dy),
            ZoneShape::Rectangle(r) => r.translate(dx, dy),
            ZoneShape::Line(l) => l.translate(dx, dy),
            ZoneShape::Polygon(p) => p.translate(dx, dy),
        }
    }

    /// Resize/reshape handle positions, in the index order the select tool
    /// uses when dragging.
    pub fn handles(&self) -> Vec<Point> {
        match self {
            ZoneShape::Circle(c) => c.handles().to_vec(),
            ZoneShape::Rectangle(r) => r.corners().to_vec(),
            ZoneShape::Line(l) => l.points.to_vec(),
            ZoneShape::Polygon(p) => p.points.clone(),
        }
    }

    /// Whether the geometry is well-formed enough to keep. Used when
    /// loading external data: malformed records are skipped, not fatal.
    pub fn is_valid(&self) -> bool {
        match self {
            ZoneShape::Circle(c) => c.radius > 0.0 && c.radius.is_finite(),
            ZoneShape::Rectangle(r) => {
                r.width > 0.0 && r.height > 0.0 && r.width.is_finite() && r.height.is_finite()
            }
            ZoneShape::Line(l) => l.length() > 0.0,
            ZoneShape::Polygon(p) => p.is_valid(),
        }
    }
}

/// Zone category. Drives the default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    #[default]
    Safe,
    Restricted,
    Pvp,
    Spawn,
    Objective,
    Custom,
}

impl ZoneType {
    /// Default fill/stroke color for this zone type.
    pub fn default_color(&self) -> &'static str {
        match self {
            ZoneType::Safe => "#00ff88",
            ZoneType::Restricted => "#ff4757",
            ZoneType::Pvp => "#ff6b35",
            ZoneType::Spawn => "#3498db",
            ZoneType::Objective => "#9b59b6",
            ZoneType::Custom => "#f1c40f",
        }
    }

    /// Human-readable name for list panels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ZoneType::Safe => "Safe Zone",
            ZoneType::Restricted => "Restricted",
            ZoneType::Pvp => "PvP Zone",
            ZoneType::Spawn => "Spawn Area",
            ZoneType::Objective => "Objective",
            ZoneType::Custom => "Custom",
        }
    }
}

/// Outline stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Fill pattern swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillPattern {
    #[default]
    Solid,
    DiagonalRight,
    DiagonalLeft,
    Vertical,
    Horizontal,
    Grid,
    Dots,
    Crosshatch,
}

/// Label font size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LabelSize {
    /// Font size in screen px.
    pub fn font_size(&self) -> f64 {
        match self {
            LabelSize::Small => LABEL_SIZE_SMALL,
            LabelSize::Medium => LABEL_SIZE_MEDIUM,
            LabelSize::Large => LABEL_SIZE_LARGE,
        }
    }
}

/// Zone label presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default)]
    pub show: bool,
    #[serde(default = "default_label_color")]
    pub color: String,
    #[serde(default = "default_label_bg_color")]
    pub bg_color: String,
    #[serde(default = "default_label_bg_opacity")]
    pub bg_opacity: f64,
    #[serde(default)]
    pub size: LabelSize,
    #[serde(default)]
    pub shadow: bool,
}

fn default_label_color() -> String {
    "#ffffff".to_string()
}

fn default_label_bg_color() -> String {
    "#000000".to_string()
}

fn default_label_bg_opacity() -> f64 {
    DEFAULT_LABEL_BG_OPACITY
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            show: false,
            color: default_label_color(),
            bg_color: default_label_bg_color(),
            bg_opacity: default_label_bg_opacity(),
            size: LabelSize::default(),
            shadow: false,
        }
    }
}

/// The persisted drawable entity: one shape plus presentation attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub zone_type: ZoneType,
    #[serde(default = "default_zone_color")]
    pub color: String,
    #[serde(default = "default_zone_opacity")]
    pub opacity: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub style: LineStyle,
    #[serde(default)]
    pub fill_pattern: FillPattern,
    #[serde(default)]
    pub label: LabelSettings,
    #[serde(flatten)]
    pub shape: ZoneShape,
}

fn default_zone_color() -> String {
    ZoneType::Safe.default_color().to_string()
}

fn default_zone_opacity() -> f64 {
    DEFAULT_ZONE_OPACITY
}

fn default_visible() -> bool {
    true
}

impl Zone {
    /// Creates a zone with a fresh id and default presentation: safe type,
    /// its default color, 0.4 opacity, visible.
    pub fn new(name: impl Into<String>, shape: ZoneShape) -> Self {
        Self {
            id: ZoneId::new(),
            name: name.into(),
            zone_type: ZoneType::Safe,
            color: ZoneType::Safe.default_color().to_string(),
            opacity: DEFAULT_ZONE_OPACITY,
            visible: true,
            style: LineStyle::default(),
            fill_pattern: FillPattern::default(),
            label: LabelSettings::default(),
            shape,
        }
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.shape.bounds()
    }

    /// Merges a patch into this zone. Only fields present in the patch
    /// change; the type→color rule is applied by the store, not here.
    pub fn apply_patch(&mut self, patch: &ZonePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(zone_type) = patch.zone_type {
            self.zone_type = zone_type;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
        if let Some(fill_pattern) = patch.fill_pattern {
            self.fill_pattern = fill_pattern;
        }
        if let Some(label) = &patch.label {
            self.label = label.clone();
        }
    }
}

/// Partial update for [`Zone`] presentation fields: shallow merge, absent
/// fields untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZonePatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub zone_type: Option<ZoneType>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub style: Option<LineStyle>,
    pub fill_pattern: Option<FillPattern>,
    pub label: Option<LabelSettings>,
}

impl ZonePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn zone_type(zone_type: ZoneType) -> Self {
        Self {
            zone_type: Some(zone_type),
            ..Self::default()
        }
    }

    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }
}
