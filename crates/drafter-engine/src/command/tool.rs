//! Tool command
//!
//! Wraps a transient tool — one that mutates something other than its own
//! geometry (the registry for Erase, the viewport for Zoom) — behind the
//! same contract shape commands satisfy.

use crate::command::{CommandOutcome, Input, InputKind};
use crate::context::EditorContext;
use crate::tools::{EraseTool, ZoomTool};

/// The closed set of transient tools
#[derive(Debug)]
pub enum Tool {
    Erase(EraseTool),
    Zoom(ZoomTool),
}

/// Command running one transient tool
#[derive(Debug)]
pub struct ToolCommand {
    tool: Tool,
    pending: Vec<InputKind>,
}

impl ToolCommand {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            pending: Vec::new(),
        }
    }

    pub fn pending_kinds(&self) -> &[InputKind] {
        &self.pending
    }

    pub fn execute(&mut self, ctx: &mut EditorContext) -> CommandOutcome {
        let outcome = match &mut self.tool {
            Tool::Erase(tool) => tool.execute(ctx),
            Tool::Zoom(tool) => tool.execute(ctx),
        };
        self.sync_pending(outcome);
        outcome
    }

    pub fn handle_input(&mut self, ctx: &mut EditorContext, input: &Input) -> CommandOutcome {
        let outcome = match &mut self.tool {
            Tool::Erase(tool) => tool.handle_input(ctx, input),
            Tool::Zoom(tool) => tool.handle_input(ctx, input),
        };
        self.sync_pending(outcome);
        outcome
    }

    pub fn cancel(&mut self, ctx: &mut EditorContext) {
        self.pending.clear();
        match &mut self.tool {
            Tool::Erase(tool) => tool.cancel(ctx),
            Tool::Zoom(tool) => tool.cancel(ctx),
        }
    }

    pub fn undo(&mut self, ctx: &mut EditorContext) {
        match &mut self.tool {
            Tool::Erase(tool) => tool.undo(ctx),
            Tool::Zoom(tool) => tool.undo(ctx),
        }
    }

    pub fn redo(&mut self, ctx: &mut EditorContext) {
        match &mut self.tool {
            Tool::Erase(tool) => tool.redo(ctx),
            Tool::Zoom(tool) => tool.redo(ctx),
        }
    }

    pub fn describe(&self) -> String {
        match &self.tool {
            Tool::Erase(tool) => tool.describe(),
            Tool::Zoom(tool) => tool.describe(),
        }
    }

    /// Mirror the tool's current input wants onto the command
    fn sync_pending(&mut self, outcome: CommandOutcome) {
        self.pending = match outcome {
            CommandOutcome::Completed => Vec::new(),
            CommandOutcome::Pending => match &self.tool {
                Tool::Erase(_) => vec![InputKind::Select],
                Tool::Zoom(_) => vec![InputKind::Str, InputKind::ViewBox],
            },
        };
    }
}
