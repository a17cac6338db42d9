//! Line entity
//!
//! A straight segment accepted in two steps. The second point may be typed
//! relative to the first (`@x,y`) or as a bare distance projected along the
//! cursor direction; both forms are rejected for the first point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::coords::{CoordError, is_bare_number, parse_coords};
use crate::geometry::{Acceptance, CoordInput, ShapeId};

/// A line segment under construction or completed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    id: ShapeId,
    points: Vec<Vec2>,
    /// Midpoint, derived once at consolidation
    center: Option<Vec2>,
    complete: bool,
    /// Rubber-band endpoint tracking the cursor; never part of committed
    /// geometry
    #[serde(skip)]
    preview: Option<Vec2>,
}

/// Snapshot of a line: the point sequence and completion flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMemento {
    pub points: Vec<Vec2>,
    pub complete: bool,
}

impl Line {
    /// Start an incomplete line awaiting its first point
    pub fn begin(id: ShapeId) -> Self {
        Self {
            id,
            points: Vec::new(),
            center: None,
            complete: false,
            preview: None,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Midpoint of the segment, available once complete
    pub fn center(&self) -> Option<Vec2> {
        self.center
    }

    /// Current rubber-band endpoint, if any
    pub fn preview(&self) -> Option<Vec2> {
        self.preview
    }

    /// Offer a point or coordinate expression.
    ///
    /// Textual forms: `"x,y"` absolute; `"@x,y"` relative to the first point
    /// (second point only); `"<number>"` a distance from the first point
    /// along the direction toward `cursor` (second point only). A relative
    /// form offered as the first point falls through to absolute parsing and
    /// fails there. Parse failures leave the line unchanged.
    pub fn accept_input(
        &mut self,
        input: &CoordInput,
        cursor: Vec2,
        ortho: bool,
    ) -> Result<Acceptance, CoordError> {
        if self.complete {
            return Ok(Acceptance::Complete);
        }

        // `correctable` marks inputs that ortho may still axis-align:
        // clicked points and projected magnitudes, never fully typed pairs.
        let (point, correctable) = match input {
            CoordInput::Point(p) => (*p, true),
            CoordInput::Text(text) => {
                if let Some(rest) = text.strip_prefix('@').filter(|_| self.points.len() == 1) {
                    let rel = parse_coords(rest)?;
                    (self.points[0] + rel, false)
                } else if self.points.len() == 1 && is_bare_number(text) {
                    let length: f32 = text
                        .parse()
                        .map_err(|_| CoordError::NotANumber(text.clone()))?;
                    let delta = cursor - self.points[0];
                    let angle = delta.y.atan2(delta.x);
                    let point = self.points[0] + length * Vec2::new(angle.cos(), angle.sin());
                    (point, true)
                } else {
                    (parse_coords(text)?, false)
                }
            }
        };

        if self.points.is_empty() {
            self.points.push(point);
            return Ok(Acceptance::NeedsMore);
        }

        let point = if correctable {
            self.correct_coords(point, ortho)
        } else {
            point
        };
        self.points.push(point);
        self.consolidate();
        Ok(Acceptance::Complete)
    }

    /// Axis-align a pending second point to the first along the dominant
    /// displacement axis
    fn correct_coords(&self, coords: Vec2, ortho: bool) -> Vec2 {
        if !ortho || self.points.len() != 1 {
            return coords;
        }

        let first = self.points[0];
        if (coords.x - first.x).abs() > (coords.y - first.y).abs() {
            Vec2::new(coords.x, first.y)
        } else {
            Vec2::new(first.x, coords.y)
        }
    }

    /// One-time transition to the completed state: derive the midpoint and
    /// mark the line complete. Registration is performed by the caller.
    fn consolidate(&mut self) {
        self.complete = true;
        self.preview = None;
        self.center = Some((self.points[0] + self.points[1]) / 2.0);
    }

    /// Track the cursor for the rubber-band preview (second point pending)
    pub fn update_preview(&mut self, cursor: Vec2, ortho: bool) {
        if self.complete || self.points.len() != 1 {
            return;
        }
        self.preview = Some(self.correct_coords(cursor, ortho));
    }

    /// Distance from `point` to the finite segment (projection clamped to
    /// the segment; nearest endpoint outside it). None while incomplete.
    pub fn hit_distance(&self, point: Vec2) -> Option<f32> {
        if !self.complete || self.points.len() != 2 {
            return None;
        }

        let a = self.points[0];
        let b = self.points[1];
        let ab = b - a;
        let ap = point - a;

        let len_sq = ab.length_squared();
        let param = if len_sq != 0.0 { ap.dot(ab) / len_sq } else { -1.0 };

        let nearest = if param < 0.0 {
            a
        } else if param > 1.0 {
            b
        } else {
            a + ab * param
        };

        Some(point.distance(nearest))
    }

    /// Axis-aligned bounding box of the points. None while incomplete.
    pub fn extents(&self) -> Option<(Vec2, Vec2)> {
        if !self.complete {
            return None;
        }
        Some((
            self.points[0].min(self.points[1]),
            self.points[0].max(self.points[1]),
        ))
    }

    pub fn save_state(&self) -> LineMemento {
        LineMemento {
            points: self.points.clone(),
            complete: self.complete,
        }
    }

    /// Rebuild from a memento, re-running the same consolidation as normal
    /// construction. Idempotent.
    pub fn restore_state(&mut self, memento: &LineMemento) {
        self.points = memento.points.clone();
        if memento.complete {
            self.consolidate();
        } else {
            self.complete = false;
            self.center = None;
        }
    }

    /// Drop transient entry state; safe on a line that never completed
    pub fn cancel(&mut self) {
        self.preview = None;
    }

    pub fn describe(&self) -> String {
        if self.complete {
            format!(
                "{}: ({}, {}) -> ({}, {})",
                self.id, self.points[0].x, self.points[0].y, self.points[1].x, self.points[1].y
            )
        } else {
            format!("{}: incomplete ({} points)", self.id, self.points.len())
        }
    }
}
