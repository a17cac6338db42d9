//! Shape command
//!
//! Wraps a geometry entity through its multi-step entry. The entity lives
//! inside the command while incomplete; consolidation clones it into the
//! registry and captures the memento that undo/redo replay from.

use glam::Vec2;

use drafter_core::{Acceptance, CoordInput, Shape, ShapeKind, ShapeMemento};

use crate::command::{CommandOutcome, Input, InputKind};
use crate::context::EditorContext;
use crate::error::EditorError;

/// Command building one new shape
#[derive(Debug)]
pub struct ShapeCommand {
    kind: ShapeKind,
    /// Armed by execute()
    entity: Option<Shape>,
    /// Captured eagerly at consolidation
    memento: Option<ShapeMemento>,
    pending: Vec<InputKind>,
}

impl ShapeCommand {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            entity: None,
            memento: None,
            pending: Vec::new(),
        }
    }

    pub fn pending_kinds(&self) -> &[InputKind] {
        &self.pending
    }

    pub fn execute(&mut self, ctx: &mut EditorContext) -> CommandOutcome {
        // A fresh shape entry always drops the current selection
        ctx.selection.clear();

        let id = ctx.registry.allocate(self.kind);
        self.entity = Some(Shape::begin(self.kind, id));
        self.pending = vec![InputKind::Coord];
        ctx.set_prompt(format!("{}: specify first point", display_name(self.kind)));
        tracing::info!(shape = %id, "shape command started");
        CommandOutcome::Pending
    }

    pub fn handle_input(&mut self, ctx: &mut EditorContext, input: &Input) -> CommandOutcome {
        let entity = self
            .entity
            .as_mut()
            .expect("input routed to an unexecuted shape command");

        let coord_input = match input {
            Input::Point(p) => CoordInput::Point(*p),
            Input::Text(text) => CoordInput::Text(text.clone()),
            Input::Confirm | Input::Window(_) => {
                ctx.report(&EditorError::UnexpectedInputForState {
                    command: display_name(self.kind),
                    detail: "expecting a coordinate".into(),
                });
                return CommandOutcome::Pending;
            }
        };

        match entity.accept_input(&coord_input, ctx.last_cursor, ctx.ortho) {
            Err(source) => {
                let input = match coord_input {
                    CoordInput::Text(text) => text,
                    CoordInput::Point(p) => format!("{p}"),
                };
                ctx.report(&EditorError::InvalidCoordinateSyntax { input, source });
                CommandOutcome::Pending
            }
            Ok(Acceptance::NeedsMore) => {
                ctx.set_prompt(format!("{}: specify second point", display_name(self.kind)));
                CommandOutcome::Pending
            }
            Ok(Acceptance::Complete) => {
                // Consolidation: register the finished entity and capture
                // the memento undo/redo will replay from
                ctx.registry.insert(entity.clone());
                self.memento = Some(entity.save_state());
                self.pending.clear();
                ctx.selection.clear();
                ctx.clear_prompt();
                tracing::info!(shape = %entity.id(), "shape consolidated");
                CommandOutcome::Completed
            }
        }
    }

    pub fn cancel(&mut self, ctx: &mut EditorContext) {
        self.pending.clear();
        ctx.clear_prompt();
        if let Some(entity) = self.entity.as_mut() {
            // Safe even though a cancelled entry was never registered
            ctx.registry.remove(&entity.id());
            entity.cancel();
            tracing::info!(shape = %entity.id(), "shape entry cancelled");
        }
    }

    pub fn undo(&mut self, ctx: &mut EditorContext) {
        let entity = self.entity.as_ref().expect("undo on an unexecuted command");
        ctx.registry.remove(&entity.id());
        // A destroyed shape must not linger in the selection
        ctx.selection.remove(&entity.id());
        tracing::info!(shape = %entity.id(), "shape undone");
    }

    pub fn redo(&mut self, ctx: &mut EditorContext) {
        let entity = self.entity.as_mut().expect("redo on an unexecuted command");
        let memento = self
            .memento
            .as_ref()
            .expect("redo without a captured memento");
        entity.restore_state(memento);
        ctx.registry.insert(entity.clone());
        tracing::info!(shape = %entity.id(), "shape redone");
    }

    pub fn update_cursor(&mut self, cursor: Vec2, ortho: bool) {
        if let Some(entity) = self.entity.as_mut() {
            entity.update_preview(cursor, ortho);
        }
    }

    pub fn describe(&self) -> String {
        match &self.entity {
            Some(entity) if entity.is_complete() => format!("{} (complete)", entity.id()),
            Some(entity) => format!("{} (awaiting coordinate)", entity.id()),
            None => format!("{} (unexecuted)", self.kind.name()),
        }
    }
}

fn display_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Line => "Line",
    }
}
