//! Editor session and input router
//!
//! A session owns the editor context and command history and routes every
//! raw input: while a command is pending, all input is data for it (name
//! lookup is bypassed entirely); otherwise tokens go through the dispatch
//! table. Empty input either confirms a pending selection or repeats the
//! last successful command.

use glam::Vec2;

use drafter_core::{SelectionSet, ShapeId, ShapeKind, ShapeRegistry, ViewBox, screen_to_model};

use crate::command::{Command, Input, InputKind};
use crate::context::EditorContext;
use crate::error::EditorError;
use crate::history::CommandHistory;

/// Dispatch-table entry for a recognized command name
enum Dispatch {
    /// Construct a fresh command and commit it through the history
    Spawn(fn() -> Command),
    Undo,
    Redo,
    PrintState,
    ListShapes,
    ToggleOrtho,
}

/// Map a (lowercased) command name to its dispatch entry
fn lookup(name: &str) -> Option<Dispatch> {
    Some(match name {
        "l" | "line" => Dispatch::Spawn(|| Command::shape(ShapeKind::Line)),
        "e" | "erase" => Dispatch::Spawn(Command::erase),
        "z" | "zoom" => Dispatch::Spawn(Command::zoom),
        "undo" => Dispatch::Undo,
        "redo" => Dispatch::Redo,
        "printstate" => Dispatch::PrintState,
        "listshapes" => Dispatch::ListShapes,
        "ortho" => Dispatch::ToggleOrtho,
        _ => return None,
    })
}

/// One editing session: context, history, and repeat memory
#[derive(Debug, Default)]
pub struct EditorSession {
    ctx: EditorContext,
    history: CommandHistory,
    last_successful: Option<String>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            ctx: EditorContext::new(),
            history: CommandHistory::new(),
            last_successful: None,
        }
    }

    // ============== Input entry points ==============

    /// Submit one line from the command box (Enter or Space)
    pub fn submit_line(&mut self, raw: &str) {
        let input = raw.trim();

        if !input.is_empty() {
            self.process_input(input, false);
            return;
        }

        // Empty input confirms a pending selection...
        if self.pending_wants(InputKind::Select) {
            self.history.handle_pending_input(&mut self.ctx, &Input::Confirm);
            return;
        }

        // ...or repeats the last successful command while idle
        if !self.history.is_pending() {
            if let Some(last) = self.last_successful.clone() {
                self.process_input(&last, true);
            }
        }
    }

    /// Submit a pointer click at a screen-space position.
    ///
    /// Becomes a pre-resolved point for a pending coordinate command,
    /// otherwise a pick-select against the registry.
    pub fn submit_click(&mut self, screen: Vec2) {
        let point = screen_to_model(screen);
        self.ctx.last_cursor = point;

        if self.pending_wants(InputKind::Coord) {
            self.history
                .handle_pending_input(&mut self.ctx, &Input::Point(point));
            return;
        }

        self.click_select(point);
    }

    /// Submit a drag-selected window rectangle (zoom area)
    pub fn submit_window(&mut self, window: ViewBox) {
        if self.pending_wants(InputKind::ViewBox) {
            self.history
                .handle_pending_input(&mut self.ctx, &Input::Window(window));
        } else {
            tracing::debug!("window input with no command awaiting one, ignored");
        }
    }

    /// Track cursor motion: updates the stored cursor and the pending
    /// command's rubber-band preview
    pub fn update_cursor(&mut self, screen: Vec2) {
        let point = screen_to_model(screen);
        self.ctx.last_cursor = point;
        let ortho = self.ctx.ortho;
        self.history.update_pending_cursor(point, ortho);
    }

    /// Escape: cancel any pending entry and drop the selection. Committed
    /// history is untouched.
    pub fn cancel(&mut self) {
        self.ctx.clear_prompt();
        if self.history.is_pending() {
            self.history.undo(&mut self.ctx);
        }
        self.ctx.selection.clear();
    }

    /// Undo shortcut (Ctrl+Z): bypasses dispatch, so it is never repeated
    /// by empty input
    pub fn undo(&mut self) {
        self.ctx.selection.clear();
        self.history.undo(&mut self.ctx);
        self.ctx.note("> 'Undo'");
    }

    /// Redo shortcut (Ctrl+Y)
    pub fn redo(&mut self) {
        self.ctx.selection.clear();
        self.history.redo(&mut self.ctx);
        self.ctx.note("> 'Redo'");
    }

    // ============== Routing ==============

    fn process_input(&mut self, input: &str, repeated: bool) {
        let input = input.to_lowercase();

        // A pending command consumes everything, even command names
        if self.history.is_pending() {
            self.history
                .handle_pending_input(&mut self.ctx, &Input::Text(input));
            return;
        }

        let Some(entry) = lookup(&input) else {
            self.ctx.report(&EditorError::UnknownCommand(input));
            return;
        };

        if repeated {
            self.ctx
                .note(format!("> Repeating last command: '{input}'"));
        } else {
            self.ctx.note(format!("> '{input}'"));
        }
        self.last_successful = Some(input);

        match entry {
            Dispatch::Spawn(factory) => self.history.execute_command(&mut self.ctx, factory()),
            Dispatch::Undo => self.history.undo(&mut self.ctx),
            Dispatch::Redo => self.history.redo(&mut self.ctx),
            Dispatch::PrintState => self.print_state(),
            Dispatch::ListShapes => self.list_shapes(),
            Dispatch::ToggleOrtho => self.toggle_ortho(),
        }
    }

    fn pending_wants(&self, kind: InputKind) -> bool {
        self.history
            .pending_command()
            .is_some_and(|command| command.wants(kind))
    }

    /// Pick the nearest shape at a clicked point into the selection
    fn click_select(&mut self, point: Vec2) {
        let hits = self.ctx.registry.pick(point, self.ctx.pick_radius());
        match hits.as_slice() {
            [] => {}
            [(id, _)] => {
                self.ctx.selection.add(*id);
                self.ctx.note(format!("Selected {id}"));
            }
            _ => {
                tracing::warn!(count = hits.len(), "more than one shape under cursor");
                self.ctx.note("More than one shape under cursor");
            }
        }
    }

    // ============== Introspection commands ==============

    fn print_state(&mut self) {
        let pending = match self.history.pending_command() {
            Some(command) => command.describe(),
            None => "none".into(),
        };
        let lines = [
            format!("Shapes: {}", self.ctx.registry.len()),
            format!(
                "Undo stack: {}, redo stack: {}",
                self.history.undo_depth(),
                self.history.redo_depth()
            ),
            format!("Pending: {pending}"),
        ];
        for line in lines {
            self.ctx.note(line);
        }
    }

    fn list_shapes(&mut self) {
        let ids = self.ctx.registry.sorted_ids();
        if ids.is_empty() {
            self.ctx.note("No shapes");
            return;
        }
        for id in ids {
            if let Some(shape) = self.ctx.registry.get(&id) {
                let line = shape.describe();
                self.ctx.note(line);
            }
        }
    }

    fn toggle_ortho(&mut self) {
        self.ctx.ortho = !self.ctx.ortho;
        let state = if self.ctx.ortho { "ON" } else { "OFF" };
        self.ctx.note(format!("Ortho {state}"));

        // Re-apply the pending preview under the new flag
        if self.pending_wants(InputKind::Coord) {
            let cursor = self.ctx.last_cursor;
            let ortho = self.ctx.ortho;
            self.history.update_pending_cursor(cursor, ortho);
        }
    }

    // ============== External selection mechanism ==============

    /// Add a live shape to the selection; false if it is not registered
    pub fn select_shape(&mut self, id: ShapeId) -> bool {
        if self.ctx.registry.contains(&id) {
            self.ctx.selection.add(id);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.ctx.selection.clear();
    }

    // ============== Accessors ==============

    pub fn registry(&self) -> &ShapeRegistry {
        &self.ctx.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.ctx.selection
    }

    pub fn viewport(&self) -> ViewBox {
        self.ctx.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewBox) {
        self.ctx.viewport = viewport;
    }

    pub fn ortho(&self) -> bool {
        self.ctx.ortho
    }

    pub fn set_ortho(&mut self, ortho: bool) {
        self.ctx.ortho = ortho;
    }

    pub fn set_precision_factor(&mut self, factor: f32) {
        self.ctx.precision_factor = factor;
    }

    pub fn is_pending(&self) -> bool {
        self.history.is_pending()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.ctx.prompt()
    }

    pub fn timeline(&self) -> &[String] {
        self.ctx.timeline()
    }

    pub fn drain_timeline(&mut self) -> Vec<String> {
        self.ctx.drain_timeline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use drafter_core::Shape;

    fn line_points(session: &EditorSession, id: &ShapeId) -> Vec<Vec2> {
        match session.registry().get(id) {
            Some(Shape::Line(line)) => line.points().to_vec(),
            None => panic!("shape {id} not registered"),
        }
    }

    fn sole_id(session: &EditorSession) -> ShapeId {
        let ids = session.registry().sorted_ids();
        assert_eq!(ids.len(), 1, "expected exactly one shape");
        ids[0]
    }

    #[test]
    fn test_line_by_clicks_inverts_y() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        assert!(session.is_pending());

        session.submit_click(Vec2::new(0.0, 0.0));
        assert!(session.is_pending());
        assert!(session.registry().is_empty());

        session.submit_click(Vec2::new(10.0, 10.0));
        assert!(!session.is_pending());
        assert_eq!(session.registry().len(), 1);

        let id = sole_id(&session);
        let points = line_points(&session, &id);
        assert_eq!(points, vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, -10.0)]);

        let dist = session
            .registry()
            .get(&id)
            .unwrap()
            .hit_distance(Vec2::new(5.0, -5.0))
            .unwrap();
        assert_relative_eq!(dist, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_line_undo_redo_restores_identical_shape() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_click(Vec2::new(0.0, 0.0));
        session.submit_click(Vec2::new(10.0, 10.0));
        let id = sole_id(&session);
        let points = line_points(&session, &id);

        session.submit_line("undo");
        assert!(session.registry().is_empty());
        assert_eq!(session.undo_depth(), 0);
        assert_eq!(session.redo_depth(), 1);

        session.submit_line("redo");
        assert_eq!(session.registry().len(), 1);
        assert_eq!(line_points(&session, &id), points);
        assert_relative_eq!(
            session
                .registry()
                .get(&id)
                .unwrap()
                .hit_distance(Vec2::new(10.0, -10.0))
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn test_typed_coordinates_absolute_and_relative() {
        let mut session = EditorSession::new();
        session.submit_line("l");
        session.submit_line("5,5");
        session.submit_line("@3,4");

        let id = sole_id(&session);
        let points = line_points(&session, &id);
        // "5,5" -> (5,-5); "@3,4" -> (8,-9), i.e. (8,9) pre-inversion
        assert_eq!(points, vec![Vec2::new(5.0, -5.0), Vec2::new(8.0, -9.0)]);
    }

    #[test]
    fn test_bare_magnitude_follows_cursor_direction() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        // Screen (30, -40) -> model (30, 40): direction (0.6, 0.8)
        session.update_cursor(Vec2::new(30.0, -40.0));
        session.submit_line("10");

        let id = sole_id(&session);
        let points = line_points(&session, &id);
        assert_relative_eq!(points[1].x, 6.0, epsilon = 1e-4);
        assert_relative_eq!(points[1].y, 8.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cancel_mid_entry_leaves_no_trace() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_click(Vec2::new(1.0, 2.0));
        assert!(session.is_pending());
        assert_eq!(session.undo_depth(), 1);

        session.cancel();
        assert!(!session.is_pending());
        assert!(session.registry().is_empty());
        assert_eq!(session.undo_depth(), 0);
        // An aborted entry is not redoable
        assert_eq!(session.redo_depth(), 0);
        assert!(session.prompt().is_none());
    }

    #[test]
    fn test_undo_while_pending_cancels_instead() {
        let mut session = EditorSession::new();
        // Commit one line first
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        assert_eq!(session.registry().len(), 1);

        // Start a second line, then Ctrl+Z mid-entry
        session.submit_line("line");
        session.submit_line("3,3");
        session.undo();

        // The committed line survives; only the pending entry was expunged
        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.undo_depth(), 1);
        assert_eq!(session.redo_depth(), 0);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_invalid_coordinate_keeps_command_pending() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("not a coordinate");

        assert!(session.is_pending());
        assert!(session.registry().is_empty());
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Invalid coordinate input"))
        );

        // Recovery: a valid second point still completes the line
        session.submit_line("4,4");
        assert!(!session.is_pending());
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_relative_first_point_rejected() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("@3,4");
        assert!(session.is_pending());
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Invalid coordinate input"))
        );
    }

    #[test]
    fn test_command_name_is_data_while_pending() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        // "zoom" coincides with a command name but must be treated as a
        // (bad) coordinate for the pending line
        session.submit_line("zoom");
        assert!(session.is_pending());
        assert_eq!(session.undo_depth(), 1);
        assert_eq!(session.viewport(), ViewBox::default());
    }

    #[test]
    fn test_unknown_command_changes_nothing() {
        let mut session = EditorSession::new();
        session.submit_line("foo");
        assert!(!session.is_pending());
        assert_eq!(session.undo_depth(), 0);
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Invalid command: 'foo'"))
        );
        // Unknown names are not remembered for repeat
        session.submit_line("");
        assert!(!session.is_pending());
    }

    #[test]
    fn test_empty_input_repeats_last_command_fresh() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        assert_eq!(session.registry().len(), 1);

        // Empty input starts a fresh line entry, not a replay of the points
        session.submit_line("");
        assert!(session.is_pending());
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Repeating last command: 'line'"))
        );
        assert_eq!(session.registry().len(), 1);

        session.submit_line("0,5");
        session.submit_line("10,5");
        assert_eq!(session.registry().len(), 2);
    }

    #[test]
    fn test_case_insensitive_dispatch() {
        let mut session = EditorSession::new();
        session.submit_line("LINE");
        assert!(session.is_pending());
        session.cancel();
    }

    #[test]
    fn test_new_command_discards_redo_branch() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        session.submit_line("undo");
        assert_eq!(session.redo_depth(), 1);

        session.submit_line("line");
        assert_eq!(session.redo_depth(), 0);
        session.cancel();
    }

    #[test]
    fn test_erase_waits_for_selection_then_removes_atomically() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        session.submit_line("line");
        session.submit_line("0,5");
        session.submit_line("10,5");
        let ids = session.registry().sorted_ids();
        assert_eq!(ids.len(), 2);

        session.submit_line("erase");
        assert!(session.is_pending());

        // Populate the selection through the external mechanism, confirm
        // with empty input
        assert!(session.select_shape(ids[0]));
        assert!(session.select_shape(ids[1]));
        session.submit_line("");

        assert!(!session.is_pending());
        assert!(session.registry().is_empty());

        // One undo restores both together
        session.submit_line("undo");
        assert_eq!(session.registry().len(), 2);
        assert!(session.registry().contains(&ids[0]));
        assert!(session.registry().contains(&ids[1]));

        // Redo removes both again
        session.submit_line("redo");
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_erase_with_preexisting_selection_completes_immediately() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);

        assert!(session.select_shape(id));
        session.submit_line("erase");
        assert!(!session.is_pending());
        assert!(session.registry().is_empty());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_erase_confirm_without_selection_reprompts() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");

        session.submit_line("erase");
        session.submit_line("");
        assert!(session.is_pending());
        assert_eq!(session.registry().len(), 1);

        // Text while awaiting selection is rejected, command stays pending
        session.submit_line("5,5");
        assert!(session.is_pending());
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Unexpected input for 'Erase'"))
        );
        session.cancel();
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_click_select_picks_nearest_shape() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_click(Vec2::new(0.0, 0.0));
        session.submit_click(Vec2::new(10.0, 0.0));
        let id = sole_id(&session);

        // No command pending: a click near the line selects it
        session.submit_click(Vec2::new(5.0, 0.1));
        assert!(session.selection().contains(&id));

        // A click far away selects nothing
        session.clear_selection();
        session.submit_click(Vec2::new(200.0, 200.0));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_zoom_all_fits_shapes_and_swaps_on_undo_redo() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("100,50");

        let initial = session.viewport();
        session.submit_line("zoom");
        assert!(session.is_pending());
        session.submit_line("a");
        assert!(!session.is_pending());

        let fitted = session.viewport();
        assert_ne!(fitted, initial);
        assert_relative_eq!(fitted.center().x, 50.0, epsilon = 1e-3);
        assert_relative_eq!(fitted.center().y, -25.0, epsilon = 1e-3);

        session.submit_line("undo");
        assert_eq!(session.viewport(), initial);
        session.submit_line("redo");
        assert_eq!(session.viewport(), fitted);
    }

    #[test]
    fn test_zoom_rejects_unknown_option() {
        let mut session = EditorSession::new();
        session.submit_line("zoom");
        session.submit_line("x");
        assert!(session.is_pending());
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Invalid option for 'Zoom'"))
        );
        session.cancel();
        assert!(!session.is_pending());
    }

    #[test]
    fn test_zoom_window_input() {
        let mut session = EditorSession::new();
        session.submit_line("zoom");
        let window = ViewBox::new(10.0, -20.0, 50.0, 40.0);
        session.submit_window(window);
        assert!(!session.is_pending());
        assert_eq!(session.viewport(), window);
    }

    #[test]
    fn test_zoom_all_with_empty_registry_keeps_view() {
        let mut session = EditorSession::new();
        let initial = session.viewport();
        session.submit_line("zoom");
        session.submit_line("a");
        assert_eq!(session.viewport(), initial);
    }

    #[test]
    fn test_interleaved_shape_and_tool_history() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);

        session.submit_line("zoom");
        session.submit_line("a");
        let fitted = session.viewport();

        // Undo zoom first, then the line
        session.submit_line("undo");
        assert_eq!(session.viewport(), ViewBox::default());
        assert_eq!(session.registry().len(), 1);

        session.submit_line("undo");
        assert!(session.registry().is_empty());

        // Redo in order: line, then zoom
        session.submit_line("redo");
        assert!(session.registry().contains(&id));
        session.submit_line("redo");
        assert_eq!(session.viewport(), fitted);
    }

    #[test]
    fn test_ortho_corrects_clicked_second_point() {
        let mut session = EditorSession::new();
        session.submit_line("ortho");
        assert!(session.ortho());

        session.submit_line("line");
        session.submit_click(Vec2::new(0.0, 0.0));
        session.submit_click(Vec2::new(10.0, 3.0));

        let id = sole_id(&session);
        let points = line_points(&session, &id);
        // Model (10, -3): x displacement dominates, y snaps to 0
        assert_eq!(points[1], Vec2::new(10.0, 0.0));

        session.submit_line("ortho");
        assert!(!session.ortho());
    }

    #[test]
    fn test_new_shape_command_clears_selection() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);
        session.select_shape(id);

        session.submit_line("line");
        assert!(session.selection().is_empty());
        session.cancel();
    }

    #[test]
    fn test_escape_clears_selection_without_touching_history() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);
        session.select_shape(id);

        session.cancel();
        assert!(session.selection().is_empty());
        assert_eq!(session.undo_depth(), 1);
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_redo_is_noop_when_branch_discarded() {
        let mut session = EditorSession::new();
        session.submit_line("redo");
        assert_eq!(session.undo_depth(), 0);
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_introspection_commands_have_no_side_effects() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");

        session.submit_line("printstate");
        session.submit_line("listshapes");
        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.undo_depth(), 1);
        assert!(
            session
                .timeline()
                .iter()
                .any(|l| l.contains("Shapes: 1"))
        );
        assert!(session.timeline().iter().any(|l| l.contains("line1")));
    }

    #[test]
    fn test_prompts_track_entry_progress() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        assert_eq!(session.prompt(), Some("Line: specify first point"));
        session.submit_line("0,0");
        assert_eq!(session.prompt(), Some("Line: specify second point"));
        session.submit_line("1,1");
        assert_eq!(session.prompt(), None);
    }

    #[test]
    fn test_repeat_after_erase_starts_fresh_erase() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);

        session.select_shape(id);
        session.submit_line("erase");
        assert!(session.registry().is_empty());

        // Empty input repeats erase; with nothing selected it waits
        session.submit_line("");
        assert!(session.is_pending());
        session.cancel();
    }

    #[test]
    fn test_undo_prunes_destroyed_shape_from_selection() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);
        session.select_shape(id);

        // Typed undo does not clear the selection wholesale, but the
        // destroyed shape must not linger in it
        session.submit_line("undo");
        assert!(session.registry().is_empty());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_erase_redo_prunes_reselected_victims() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        let id = sole_id(&session);

        session.select_shape(id);
        session.submit_line("erase");
        session.submit_line("undo");
        assert!(session.registry().contains(&id));

        // Re-select between undo and redo
        session.select_shape(id);
        session.submit_line("redo");
        assert!(session.registry().is_empty());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_ids_stay_monotonic_across_undo() {
        let mut session = EditorSession::new();
        session.submit_line("line");
        session.submit_line("0,0");
        session.submit_line("10,0");
        session.submit_line("undo");

        // The next line gets a fresh serial even after undo
        session.submit_line("line");
        session.submit_line("0,5");
        session.submit_line("10,5");
        let ids = session.registry().sorted_ids();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].to_string(), "line2");
    }
}
