//! Shape registry
//!
//! Owns every completed shape in the drawing and hands out shape ids.
//! Incomplete shapes are never registered: while a shape is still accepting
//! input it lives inside its command, invisible to hit-testing, extents, and
//! selection queries.

use std::collections::HashMap;

use glam::Vec2;

use crate::geometry::{Shape, ShapeId, ShapeKind};

/// Registry of completed shapes, keyed by id
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<ShapeId, Shape>,
    serials: HashMap<ShapeKind, u64>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for a shape kind (`line1`, `line2`, ...)
    pub fn allocate(&mut self, kind: ShapeKind) -> ShapeId {
        let serial = self.serials.entry(kind).or_insert(0);
        *serial += 1;
        ShapeId::new(kind, *serial)
    }

    /// Register a completed shape.
    ///
    /// Panics if the shape is incomplete: registration is the visible half
    /// of consolidation and must never happen early.
    pub fn insert(&mut self, shape: Shape) {
        assert!(
            shape.is_complete(),
            "only completed shapes are registered: {}",
            shape.id()
        );
        tracing::debug!(id = %shape.id(), "shape registered");
        self.shapes.insert(shape.id(), shape);
    }

    /// Unregister a shape, returning it if it was present
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let removed = self.shapes.remove(id);
        if removed.is_some() {
            tracing::debug!(id = %id, "shape unregistered");
        }
        removed
    }

    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Ids of all registered shapes, ordered by serial
    pub fn sorted_ids(&self) -> Vec<ShapeId> {
        let mut ids: Vec<ShapeId> = self.shapes.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Shapes within `max_dist` of a point, nearest first
    pub fn pick(&self, point: Vec2, max_dist: f32) -> Vec<(ShapeId, f32)> {
        let mut hits: Vec<(ShapeId, f32)> = self
            .shapes
            .values()
            .filter_map(|shape| {
                let dist = shape.hit_distance(point)?;
                (dist < max_dist).then_some((shape.id(), dist))
            })
            .collect();
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits
    }

    /// Union bounding box of every registered shape
    pub fn extents(&self) -> Option<(Vec2, Vec2)> {
        let mut bounds: Option<(Vec2, Vec2)> = None;
        for shape in self.shapes.values() {
            if let Some((min, max)) = shape.extents() {
                bounds = Some(match bounds {
                    Some((bmin, bmax)) => (bmin.min(min), bmax.max(max)),
                    None => (min, max),
                });
            }
        }
        bounds
    }
}
