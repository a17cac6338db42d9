//! Command abstraction
//!
//! Adapts shapes and transient tools to one uniform contract: execute,
//! handle-input, cancel, undo, redo. Represented as a closed sum type so the
//! history can own commands by value; new command families are new variants.

mod shape;
mod tool;

pub use shape::*;
pub use tool::*;

use glam::Vec2;

use drafter_core::{ShapeKind, ViewBox};

use crate::context::EditorContext;
use crate::tools::{EraseTool, ZoomTool};

/// Kind of input a pending command is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A model-space point or coordinate expression
    Coord,
    /// Shapes picked through the external selection mechanism
    Select,
    /// A plain text token (e.g. a zoom option)
    Str,
    /// A window rectangle from a drag
    ViewBox,
    /// Several of the above in sequence
    Multiple,
}

/// A raw input routed to a pending command
#[derive(Debug, Clone)]
pub enum Input {
    /// Text token, already lowercased by the router
    Text(String),
    /// Pre-resolved model-space point (from a click)
    Point(Vec2),
    /// Window rectangle (from a drag)
    Window(ViewBox),
    /// The empty-input sentinel confirming a pending selection
    Confirm,
}

/// What a command reports back after execute or handle-input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command finalized; the history must clear the pending slot
    Completed,
    /// More input is required (or the last input was rejected)
    Pending,
}

/// A command in the history: a shape under construction/committed, or a
/// transient tool
#[derive(Debug)]
pub enum Command {
    Shape(ShapeCommand),
    Tool(ToolCommand),
}

impl Command {
    /// Command drawing a new shape of the given kind
    pub fn shape(kind: ShapeKind) -> Self {
        Command::Shape(ShapeCommand::new(kind))
    }

    /// Command erasing the selected shapes
    pub fn erase() -> Self {
        Command::Tool(ToolCommand::new(Tool::Erase(EraseTool::new())))
    }

    /// Command adjusting the viewport
    pub fn zoom() -> Self {
        Command::Tool(ToolCommand::new(Tool::Zoom(ZoomTool::new())))
    }

    /// Called exactly once, at commit time
    pub fn execute(&mut self, ctx: &mut EditorContext) -> CommandOutcome {
        match self {
            Command::Shape(cmd) => cmd.execute(ctx),
            Command::Tool(cmd) => cmd.execute(ctx),
        }
    }

    /// Forwarded only while this command is pending
    pub fn handle_input(&mut self, ctx: &mut EditorContext, input: &Input) -> CommandOutcome {
        match self {
            Command::Shape(cmd) => cmd.handle_input(ctx, input),
            Command::Tool(cmd) => cmd.handle_input(ctx, input),
        }
    }

    /// Revert partial side effects of a command that never finalized.
    /// Never touches the history stacks.
    pub fn cancel(&mut self, ctx: &mut EditorContext) {
        match self {
            Command::Shape(cmd) => cmd.cancel(ctx),
            Command::Tool(cmd) => cmd.cancel(ctx),
        }
    }

    /// Revert the visible effect of a finalized command
    pub fn undo(&mut self, ctx: &mut EditorContext) {
        match self {
            Command::Shape(cmd) => cmd.undo(ctx),
            Command::Tool(cmd) => cmd.undo(ctx),
        }
    }

    /// Restore the exact completed state captured by the memento
    pub fn redo(&mut self, ctx: &mut EditorContext) {
        match self {
            Command::Shape(cmd) => cmd.redo(ctx),
            Command::Tool(cmd) => cmd.redo(ctx),
        }
    }

    /// Track cursor motion for the rubber-band preview
    pub fn update_cursor(&mut self, cursor: Vec2, ortho: bool) {
        match self {
            Command::Shape(cmd) => cmd.update_cursor(cursor, ortho),
            Command::Tool(_) => {}
        }
    }

    /// Input kinds this command is currently waiting for
    pub fn pending_kinds(&self) -> &[InputKind] {
        match self {
            Command::Shape(cmd) => cmd.pending_kinds(),
            Command::Tool(cmd) => cmd.pending_kinds(),
        }
    }

    pub fn wants(&self, kind: InputKind) -> bool {
        self.pending_kinds().contains(&kind)
    }

    /// Short status description for state printouts
    pub fn describe(&self) -> String {
        match self {
            Command::Shape(cmd) => cmd.describe(),
            Command::Tool(cmd) => cmd.describe(),
        }
    }
}
