//! Command history
//!
//! Undo/redo stacks plus the single pending-command slot. A command is
//! pushed onto the undo stack *before* it is known to be complete — the
//! stack entry is the same object that later finalizes in place — and the
//! pending mark distinguishes the in-flight top entry from committed
//! history. Undo while a command is pending cancels it instead of touching
//! committed history.

use glam::Vec2;

use crate::command::{Command, CommandOutcome, Input};
use crate::context::EditorContext;

/// Undo/redo stacks, most recent last
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo_stack: Vec<Command>,
    redo_stack: Vec<Command>,
    /// The top undo-stack entry is still mid-entry
    pending: bool,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new command: push it (still unfinished) and run execute().
    /// Starting any new command discards the redo branch.
    pub fn execute_command(&mut self, ctx: &mut EditorContext, command: Command) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
        self.pending = true;

        let outcome = self
            .undo_stack
            .last_mut()
            .expect("undo stack cannot be empty after a push")
            .execute(ctx);

        if outcome == CommandOutcome::Completed {
            self.finish_command();
        }
    }

    /// Route raw input to the pending command; finalizes it on completion
    pub fn handle_pending_input(&mut self, ctx: &mut EditorContext, input: &Input) {
        if !self.pending {
            tracing::warn!("input routed to history with no pending command");
            return;
        }
        let outcome = self
            .undo_stack
            .last_mut()
            .expect("pending mark requires a stack entry")
            .handle_input(ctx, input);

        if outcome == CommandOutcome::Completed {
            self.finish_command();
        }
    }

    /// Clear the pending slot; the top entry is now committed history
    fn finish_command(&mut self) {
        self.pending = false;
        self.redo_stack.clear();
    }

    /// Expunge the pending command: cancelled entries are not redoable and
    /// leave committed history untouched
    pub fn cancel_pending(&mut self, ctx: &mut EditorContext) {
        if !self.pending {
            return;
        }
        let mut command = self
            .undo_stack
            .pop()
            .expect("pending mark requires a stack entry");
        command.cancel(ctx);
        self.pending = false;
        tracing::info!("pending command cancelled");
    }

    /// Undo the most recent command — or, if one is mid-entry, cancel it
    pub fn undo(&mut self, ctx: &mut EditorContext) {
        if self.pending {
            self.cancel_pending(ctx);
            return;
        }
        if let Some(mut command) = self.undo_stack.pop() {
            command.undo(ctx);
            self.redo_stack.push(command);
        }
    }

    /// Re-apply the most recently undone command; no-op with nothing undone
    pub fn redo(&mut self, ctx: &mut EditorContext) {
        if let Some(mut command) = self.redo_stack.pop() {
            command.redo(ctx);
            self.undo_stack.push(command);
        }
    }

    /// Forward cursor motion to the pending command's preview
    pub fn update_pending_cursor(&mut self, cursor: Vec2, ortho: bool) {
        if !self.pending {
            return;
        }
        if let Some(command) = self.undo_stack.last_mut() {
            command.update_cursor(cursor, ortho);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The command currently mid-entry, if any
    pub fn pending_command(&self) -> Option<&Command> {
        if self.pending {
            self.undo_stack.last()
        } else {
            None
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
