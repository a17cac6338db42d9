//! Zoom tool
//!
//! Adjusts the viewport rectangle: `a` fits all registered shapes, a window
//! rectangle (from a drag) becomes the new view. The memento is the pair of
//! rectangles before and after; undo/redo swap between them.

use drafter_core::ViewBox;

use crate::command::{CommandOutcome, Input};
use crate::context::EditorContext;

/// Viewport adjustment with before/after memento
#[derive(Debug, Default)]
pub struct ZoomTool {
    before: Option<ViewBox>,
    after: Option<ViewBox>,
}

impl ZoomTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, ctx: &mut EditorContext) -> CommandOutcome {
        ctx.set_prompt("Zoom [a]ll or select area for zooming");
        CommandOutcome::Pending
    }

    pub fn handle_input(&mut self, ctx: &mut EditorContext, input: &Input) -> CommandOutcome {
        match input {
            Input::Text(option) if option == "a" => {
                self.apply(ctx, Self::fit_all(ctx));
                CommandOutcome::Completed
            }
            Input::Text(option) => {
                ctx.note(format!("Invalid option for 'Zoom': '{option}'"));
                tracing::warn!(%option, "zoom option rejected");
                CommandOutcome::Pending
            }
            Input::Window(window) => {
                self.apply(ctx, *window);
                CommandOutcome::Completed
            }
            _ => CommandOutcome::Pending,
        }
    }

    /// Rectangle covering every registered shape; unchanged view when the
    /// registry is empty
    fn fit_all(ctx: &EditorContext) -> ViewBox {
        match ctx.registry.extents() {
            Some((min, max)) => ViewBox::fit(min, max),
            None => ctx.viewport,
        }
    }

    fn apply(&mut self, ctx: &mut EditorContext, target: ViewBox) {
        // Captured at application time: scroll-zoom may have moved the view
        // since the command started
        self.before = Some(ctx.viewport);
        ctx.viewport = target;
        self.after = Some(target);
        ctx.clear_prompt();
        tracing::info!(?target, "viewport adjusted");
    }

    pub fn cancel(&mut self, ctx: &mut EditorContext) {
        ctx.note("'Zoom' cancelled");
        ctx.clear_prompt();
    }

    pub fn undo(&mut self, ctx: &mut EditorContext) {
        let before = self.before.expect("undo on a zoom that never applied");
        ctx.viewport = before;
        tracing::info!("zoom undone");
    }

    pub fn redo(&mut self, ctx: &mut EditorContext) {
        let after = self.after.expect("redo without a captured memento");
        ctx.viewport = after;
        tracing::info!("zoom redone");
    }

    pub fn describe(&self) -> String {
        if self.after.is_some() {
            "zoom (applied)".into()
        } else {
            "zoom (awaiting option)".into()
        }
    }
}
