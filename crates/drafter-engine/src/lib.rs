//! Command Engine
//!
//! Turns a stream of heterogeneous user inputs (typed tokens, coordinate
//! clicks, selections) into committed or reverted mutations of the drawing
//! model:
//! - A single pending-command slot routes raw input either to the command
//!   mid-entry or to name dispatch
//! - Commands wrap shapes (Line) or transient tools (Erase, Zoom) behind one
//!   execute/handle-input/cancel/undo/redo contract
//! - The command history keeps exact-replay undo/redo stacks and
//!   distinguishes cancelling an in-progress command from undoing a
//!   completed one

mod command;
mod context;
mod error;
mod history;
mod session;
mod tools;

pub use command::*;
pub use context::*;
pub use error::*;
pub use history::*;
pub use session::*;
pub use tools::*;
