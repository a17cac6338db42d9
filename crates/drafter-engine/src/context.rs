//! Editor context
//!
//! The shared working state every command mutates: shape registry, selection,
//! viewport, tool toggles, cursor, and the user-visible timeline. One context
//! per editor session; tests construct a fresh one instead of relying on any
//! global.

use glam::Vec2;

use drafter_core::{
    DEFAULT_PRECISION_FACTOR, SelectionSet, ShapeRegistry, ViewBox, screen_to_model,
};

use crate::error::EditorError;

/// Shared editor working state
#[derive(Debug)]
pub struct EditorContext {
    pub registry: ShapeRegistry,
    pub selection: SelectionSet,
    pub viewport: ViewBox,
    /// Ortho toggle: axis-align clicked/projected second points
    pub ortho: bool,
    /// Last known cursor position, model space
    pub last_cursor: Vec2,
    /// Scale factor between viewport height and pick precision
    pub precision_factor: f32,
    timeline: Vec<String>,
    prompt: Option<String>,
}

impl Default for EditorContext {
    fn default() -> Self {
        let viewport = ViewBox::default();
        Self {
            registry: ShapeRegistry::new(),
            selection: SelectionSet::new(),
            // Cursor starts at the center of the default view
            last_cursor: screen_to_model(viewport.center()),
            viewport,
            ortho: false,
            precision_factor: DEFAULT_PRECISION_FACTOR,
            timeline: Vec::new(),
            prompt: None,
        }
    }
}

impl EditorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user-visible diagnostic to the timeline
    pub fn note(&mut self, message: impl Into<String>) {
        let message = capitalize_first(&message.into());
        tracing::debug!(timeline = %message);
        self.timeline.push(message);
    }

    /// Report a rejected input: timeline entry plus a log warning
    pub fn report(&mut self, error: &EditorError) {
        tracing::warn!(%error, "input rejected");
        self.note(error.to_string());
    }

    pub fn timeline(&self) -> &[String] {
        &self.timeline
    }

    /// Take all timeline entries accumulated since the last drain
    pub fn drain_timeline(&mut self) -> Vec<String> {
        std::mem::take(&mut self.timeline)
    }

    /// Set the hint describing what the pending command awaits
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = Some(prompt.into());
    }

    pub fn clear_prompt(&mut self) {
        self.prompt = None;
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Pick radius at the current zoom level
    pub fn pick_radius(&self) -> f32 {
        3.0 * self.viewport.cursor_precision(self.precision_factor)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_capitalizes_first_letter() {
        let mut ctx = EditorContext::new();
        ctx.note("ortho ON");
        assert_eq!(ctx.timeline(), &["Ortho ON".to_string()]);
    }

    #[test]
    fn test_drain_timeline_empties() {
        let mut ctx = EditorContext::new();
        ctx.note("one");
        ctx.note("two");
        assert_eq!(ctx.drain_timeline().len(), 2);
        assert!(ctx.timeline().is_empty());
    }
}
