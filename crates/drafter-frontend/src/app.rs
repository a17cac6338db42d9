//! Terminal application loop
//!
//! Wires the terminal to the editor session: printable keys edit the input
//! buffer, Enter/Space submit it, Escape cancels the pending entry, Ctrl+Z
//! and Ctrl+Y drive undo/redo directly (bypassing dispatch, so they are not
//! repeatable by empty input). Mouse clicks become coordinate or pick-select
//! input; motion feeds the rubber-band preview.

use std::io::{self, Write};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{cursor, execute, style, terminal};
use glam::Vec2;

use drafter_core::ViewBox;
use drafter_engine::EditorSession;

use crate::config::SharedConfig;

/// Interactive terminal frontend
pub struct App {
    session: EditorSession,
    config: SharedConfig,
    buffer: String,
    running: bool,
    /// Timeline lines shown per burst (the rest scrolls away unseen)
    scrollback: usize,
}

impl App {
    pub fn new(config: SharedConfig) -> Self {
        let mut session = EditorSession::new();
        let scrollback;
        {
            let cfg = config.read();
            let cfg = cfg.config();
            session.set_viewport(cfg.viewport);
            session.set_ortho(cfg.editor.ortho);
            session.set_precision_factor(cfg.editor.cursor_precision_factor);
            scrollback = cfg.timeline.scrollback.max(1);
        }

        Self {
            session,
            config,
            buffer: String::new(),
            running: true,
            scrollback,
        }
    }

    /// Run the event loop until the user quits (Ctrl+C / Ctrl+D)
    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnableMouseCapture)?;

        let result = self.event_loop();

        execute!(io::stdout(), DisableMouseCapture)?;
        terminal::disable_raw_mode()?;
        result
    }

    fn event_loop(&mut self) -> io::Result<()> {
        self.print_line("Drafter — type 'line', 'erase', 'zoom', 'undo', 'redo'")?;
        self.redraw_input_line()?;

        while self.running {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.modifiers, key.code);
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                _ => {}
            }

            self.flush_timeline()?;
            self.redraw_input_line()?;
        }

        self.print_line("")?;
        Ok(())
    }

    fn handle_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('d')) => {
                self.running = false;
            }
            // Undo/redo shortcuts bypass the dispatch table
            (KeyModifiers::CONTROL, KeyCode::Char('z')) => self.session.undo(),
            (KeyModifiers::CONTROL, KeyCode::Char('y')) => self.session.redo(),
            (_, KeyCode::Esc) => {
                self.buffer.clear();
                self.session.cancel();
            }
            // Spacebar and Enter are equivalent submit keys
            (_, KeyCode::Enter | KeyCode::Char(' ')) => {
                let input = std::mem::take(&mut self.buffer);
                self.session.submit_line(&input);
            }
            (_, KeyCode::Backspace) => {
                self.buffer.pop();
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let screen = cell_to_screen(
            mouse.column,
            mouse.row,
            cols,
            rows,
            self.session.viewport(),
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.session.submit_click(screen),
            MouseEventKind::Moved => self.session.update_cursor(screen),
            _ => {}
        }
        Ok(())
    }

    fn flush_timeline(&mut self) -> io::Result<()> {
        let lines = self.session.drain_timeline();
        let skip = lines.len().saturating_sub(self.scrollback);
        for line in lines.iter().skip(skip) {
            self.print_line(line)?;
        }
        Ok(())
    }

    fn print_line(&self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(line),
            style::Print("\r\n"),
        )?;
        stdout.flush()
    }

    fn redraw_input_line(&self) -> io::Result<()> {
        let prompt = self.session.prompt().unwrap_or("Enter commands");
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(format!("{}: {}", prompt, self.buffer)),
        )?;
        stdout.flush()
    }

    /// Persist the session's view and toggles back into the configuration
    pub fn save_config(&self) {
        let mut manager = self.config.write();
        let config = manager.config_mut();
        config.viewport = self.session.viewport();
        config.editor.ortho = self.session.ortho();

        if let Err(e) = manager.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

/// Map a terminal cell to a screen-space position inside the viewport.
///
/// The top row maps to the top of the view; screen y grows downward, which
/// the session inverts into model space.
fn cell_to_screen(col: u16, row: u16, cols: u16, rows: u16, viewport: ViewBox) -> Vec2 {
    let fx = f32::from(col) / f32::from(cols.max(1));
    let fy = f32::from(row) / f32::from(rows.max(1));
    Vec2::new(
        viewport.x + fx * viewport.width,
        -(viewport.y + (1.0 - fy) * viewport.height),
    )
}
