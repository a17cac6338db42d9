//! Geometric Entities
//!
//! Shapes built through multi-step input acceptance. Each entity owns its
//! points and completion state and exposes hit-testing, extents, and a
//! memento pair for exact undo/redo restoration.

mod line;

pub use line::*;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::coords::CoordError;

/// Kind of a drawable shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Straight segment between two points
    Line,
}

impl ShapeKind {
    /// Get the lowercase name of this kind, used as the id tag
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
        }
    }

    /// Number of points a shape of this kind needs to complete
    pub fn required_points(&self) -> usize {
        match self {
            ShapeKind::Line => 2,
        }
    }
}

/// Unique shape identifier: a per-kind monotonic serial, displayed as
/// `line1`, `line2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId {
    kind: ShapeKind,
    serial: u64,
}

impl ShapeId {
    pub fn new(kind: ShapeKind, serial: u64) -> Self {
        Self { kind, serial }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.name(), self.serial)
    }
}

/// Raw input offered to a shape: a pre-resolved model-space point, or a
/// textual coordinate expression still to be parsed
#[derive(Debug, Clone)]
pub enum CoordInput {
    Point(Vec2),
    Text(String),
}

/// Result of a successful input acceptance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// The shape needs more points
    NeedsMore,
    /// The shape consolidated and emits no further input requests
    Complete,
}

/// A drawable shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
}

/// Opaque snapshot of a shape, sufficient for exact reconstruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShapeMemento {
    Line(LineMemento),
}

impl Shape {
    /// Start a new, incomplete shape of the given kind
    pub fn begin(kind: ShapeKind, id: ShapeId) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line(Line::begin(id)),
        }
    }

    /// Rebuild a shape from its id and memento, re-running consolidation
    pub fn revive(id: ShapeId, memento: &ShapeMemento) -> Self {
        let mut shape = Shape::begin(id.kind(), id);
        shape.restore_state(memento);
        shape
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(line) => line.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Shape::Line(line) => line.is_complete(),
        }
    }

    /// Offer a point or coordinate expression to the shape.
    ///
    /// `cursor` is the current model-space cursor, used by the
    /// bare-magnitude form; `ortho` axis-aligns clicked or projected second
    /// points. On a parse failure the shape is left unchanged.
    pub fn accept_input(
        &mut self,
        input: &CoordInput,
        cursor: Vec2,
        ortho: bool,
    ) -> Result<Acceptance, CoordError> {
        match self {
            Shape::Line(line) => line.accept_input(input, cursor, ortho),
        }
    }

    /// Distance from `point` to the shape, None while incomplete
    pub fn hit_distance(&self, point: Vec2) -> Option<f32> {
        match self {
            Shape::Line(line) => line.hit_distance(point),
        }
    }

    /// Axis-aligned bounding box, None while incomplete
    pub fn extents(&self) -> Option<(Vec2, Vec2)> {
        match self {
            Shape::Line(line) => line.extents(),
        }
    }

    pub fn save_state(&self) -> ShapeMemento {
        match self {
            Shape::Line(line) => ShapeMemento::Line(line.save_state()),
        }
    }

    pub fn restore_state(&mut self, memento: &ShapeMemento) {
        match (self, memento) {
            (Shape::Line(line), ShapeMemento::Line(m)) => line.restore_state(m),
        }
    }

    /// Release transient entry state; safe on a never-completed shape
    pub fn cancel(&mut self) {
        match self {
            Shape::Line(line) => line.cancel(),
        }
    }

    /// Track the cursor for the rubber-band preview
    pub fn update_preview(&mut self, cursor: Vec2, ortho: bool) {
        match self {
            Shape::Line(line) => line.update_preview(cursor, ortho),
        }
    }

    /// One-line description for shape listings
    pub fn describe(&self) -> String {
        match self {
            Shape::Line(line) => line.describe(),
        }
    }
}
