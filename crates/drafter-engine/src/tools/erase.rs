//! Erase tool
//!
//! Removes the selected shapes as one atomic unit. With an empty selection
//! it waits for the user to pick shapes and confirm with empty input; a
//! single undo restores every victim together.

use drafter_core::{Shape, ShapeId, ShapeMemento};

use crate::command::{CommandOutcome, Input};
use crate::context::EditorContext;
use crate::error::EditorError;

const PROMPT: &str = "Erase: select objects to erase, empty input confirms";

/// Batch-erase of the current selection
#[derive(Debug, Default)]
pub struct EraseTool {
    /// Snapshot of every erased shape, captured at erase time
    victims: Vec<(ShapeId, ShapeMemento)>,
}

impl EraseTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, ctx: &mut EditorContext) -> CommandOutcome {
        if ctx.selection.is_empty() {
            ctx.set_prompt(PROMPT);
            return CommandOutcome::Pending;
        }
        self.erase_selection(ctx);
        CommandOutcome::Completed
    }

    pub fn handle_input(&mut self, ctx: &mut EditorContext, input: &Input) -> CommandOutcome {
        match input {
            Input::Confirm => {
                if ctx.selection.is_empty() {
                    ctx.note("Nothing selected");
                    ctx.set_prompt(PROMPT);
                    return CommandOutcome::Pending;
                }
                self.erase_selection(ctx);
                CommandOutcome::Completed
            }
            _ => {
                ctx.report(&EditorError::UnexpectedInputForState {
                    command: "Erase",
                    detail: "expecting a selection confirmation".into(),
                });
                CommandOutcome::Pending
            }
        }
    }

    /// Snapshot and unregister every selected shape, atomically
    fn erase_selection(&mut self, ctx: &mut EditorContext) {
        let ids: Vec<ShapeId> = ctx.selection.ids().to_vec();
        for id in ids {
            match ctx.registry.remove(&id) {
                Some(shape) => self.victims.push((id, shape.save_state())),
                // Selection never holds destroyed shapes; tolerate anyway
                None => tracing::warn!(id = %id, "selected shape missing from registry"),
            }
        }
        ctx.selection.clear();
        ctx.clear_prompt();
        ctx.note(format!("Erased {} shape(s)", self.victims.len()));
        tracing::info!(count = self.victims.len(), "selection erased");
    }

    pub fn cancel(&mut self, ctx: &mut EditorContext) {
        ctx.clear_prompt();
    }

    /// Restore every victim together
    pub fn undo(&mut self, ctx: &mut EditorContext) {
        assert!(
            !self.victims.is_empty(),
            "undo on an erase that never ran"
        );
        for (id, memento) in &self.victims {
            ctx.registry.insert(Shape::revive(*id, memento));
        }
        tracing::info!(count = self.victims.len(), "erase undone");
    }

    /// Remove every victim again
    pub fn redo(&mut self, ctx: &mut EditorContext) {
        assert!(
            !self.victims.is_empty(),
            "redo without a captured memento"
        );
        for (id, _) in &self.victims {
            ctx.registry.remove(id);
            // The victim may have been re-selected after the undo
            ctx.selection.remove(id);
        }
        tracing::info!(count = self.victims.len(), "erase redone");
    }

    pub fn describe(&self) -> String {
        if self.victims.is_empty() {
            "erase (awaiting selection)".into()
        } else {
            format!("erase ({} shapes)", self.victims.len())
        }
    }
}
