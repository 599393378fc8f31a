//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `motion` - indent-relative cursor movement
//! * `edit`   - structural line insertion
//! * `search` - jump sessions and match cycling
//! * `read`   - line/block/function read-outs
//! * `output` - program output history review
//!
//! File persistence and the run handoff to the sandbox live here directly;
//! they are single match arms and do not warrant their own modules.

use crate::Action;
use crate::io_ops::{self, OpenFileResult, WriteFileResult};
use core_config::Config;
use core_run::Sandbox;
use core_state::EditorState;
use std::path::PathBuf;

mod edit;
mod motion;
mod output;
mod read;
mod search;

/// Status line shown on startup and after `clear`.
pub const READY_STATUS: &str = "Ready for input. Type ? for available commands.";

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// Text for the status line / announcement channel.
    pub status: String,
    /// The buffer text changed and must be re-rendered and re-announced.
    pub dirty: bool,
    pub quit: bool,
    /// The whole buffer was replaced (file load); render caches and any
    /// per-line annotations are invalid.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    /// A status-only outcome: nothing in the buffer changed.
    pub fn status(text: impl Into<String>) -> Self {
        Self {
            status: text.into(),
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }

    pub fn dirty(text: impl Into<String>) -> Self {
        Self {
            status: text.into(),
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            status: String::new(),
            dirty: false,
            quit: true,
            buffer_replaced: false,
        }
    }

    pub fn buffer_replaced(text: impl Into<String>) -> Self {
        Self {
            status: text.into(),
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to editor state. Every arm returns a `DispatchResult`
/// whose `status` is the exact announcement for the user.
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    sandbox: &mut dyn Sandbox,
    config: &Config,
) -> DispatchResult {
    tracing::debug!(target: "actions.dispatch", ?action, line = state.active_line, "dispatch");
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Edit(kind) => edit::handle_edit(kind, state, config.editor.tab_width as usize),
        Action::Jump { mode, term } => search::handle_jump(mode, &term, state),
        Action::SearchNext => search::handle_search_step(1, state),
        Action::SearchPrev => search::handle_search_step(-1, state),
        Action::Read(kind) => read::handle_read(kind, state),
        Action::Run => handle_run(state, sandbox),
        Action::OutputNext => output::handle_output_step(1, state),
        Action::OutputPrev => output::handle_output_step(-1, state),
        Action::Save(name) => handle_save(name, state, config),
        Action::Load(path) => handle_load(path, state),
        Action::Clear => DispatchResult::status(READY_STATUS),
        Action::Quit => DispatchResult::quit(),
    }
}

fn handle_run(state: &mut EditorState, sandbox: &mut dyn Sandbox) -> DispatchResult {
    if state.run_in_flight {
        return DispatchResult::status("A program is already running");
    }
    state.output.reset();
    match sandbox.run(&state.buffer().to_text()) {
        Ok(()) => {
            state.run_in_flight = true;
            state.awaiting_input = false;
            tracing::info!(target: "actions.run", lines = state.buffer().line_count(), "run_started");
            DispatchResult::status("Running program")
        }
        Err(e) => DispatchResult::status(format!("Error running program: {e}")),
    }
}

fn handle_save(name: Option<String>, state: &mut EditorState, config: &Config) -> DispatchResult {
    let name = name.unwrap_or_else(|| config.files.default_save.clone());
    let path = PathBuf::from(&name);
    match io_ops::write_file(&path, &state.buffer().to_text()) {
        WriteFileResult::Success(path) => {
            state.file_name = Some(path);
            DispatchResult::status(format!("Saved file: {name}"))
        }
        WriteFileResult::Error(e) => DispatchResult::status(format!("Error saving file: {e}")),
    }
}

fn handle_load(path: Option<PathBuf>, state: &mut EditorState) -> DispatchResult {
    let Some(path) = path else {
        return DispatchResult::status("Usage: load <file>");
    };
    match io_ops::open_file(&path) {
        OpenFileResult::Success { content, file_name } => {
            let display = file_name.display().to_string();
            state.replace_buffer(&content, Some(file_name));
            DispatchResult::buffer_replaced(format!("Loaded file: {display}"))
        }
        OpenFileResult::Error(e) => DispatchResult::status(format!("Error loading file: {e}")),
    }
}
