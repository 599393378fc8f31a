//! pynav entrypoint: a line-oriented console around the navigation core.
//!
//! Reads one command per line from stdin and prints each dispatch's status
//! text, which doubles as the announcement channel for screen readers and
//! speech tooling driving the process. While a program run is in flight,
//! typed lines are forwarded to the running program's stdin instead of the
//! command parser.

use anyhow::Result;
use clap::Parser;
use core_actions::dispatcher::READY_STATUS;
use core_actions::{CommandParser, CommandResult, dispatch};
use core_run::{ProcessSandbox, RunEvent, Sandbox};
use core_state::EditorState;
use core_text::Buffer;
use crossbeam_channel::{Receiver, select, unbounded};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::thread;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// Buffer shown when no file is given: small, recursive, and runnable, so
/// every navigation and run command has something to land on.
const SAMPLE_PROGRAM: &str = "\
def fibonacci(n):
    # nth value in the sequence
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

print(fibonacci(10))";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "pynav", version, about = "Audio-first structural Python navigator")]
struct Args {
    /// Optional path to open at startup. If omitted a sample program is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `pynav.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("pynav.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "pynav.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_editor_state(args: &Args) -> EditorState {
    let (buffer, file_name) = if let Some(path) = args.path.as_ref() {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("file");
                tracing::debug!(target: "io", file = %path.display(), bytes = content.len(), "file_read_ok");
                (Buffer::from_str(name, &content), Some(path.clone()))
            }
            Err(e) => {
                error!(target: "io", file = %path.display(), %e, "file_open_error");
                eprintln!("Could not open {}: {e}", path.display());
                (Buffer::from_str("sample", SAMPLE_PROGRAM), None)
            }
        }
    } else {
        (Buffer::from_str("sample", SAMPLE_PROGRAM), None)
    };
    let mut state = EditorState::new(buffer);
    state.file_name = file_name;
    state
}

/// Reader thread feeding stdin lines into the select loop. The channel
/// closes when stdin does, which ends the session.
fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(text) => {
                    if tx.send(text).is_err() {
                        return;
                    }
                }
                Err(_) => return,
            }
        }
    });
    rx
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let config = core_config::load_from(args.config.clone())?;
    let mut state = load_editor_state(&args);
    let mut sandbox = ProcessSandbox::new(&config.run.python);
    // Cloned handle so the select loop can borrow the sandbox mutably.
    let run_events = sandbox.events().clone();
    let stdin_rx = spawn_stdin_reader();

    info!(
        target: "runtime.startup",
        buffer = state.buffer().name.as_str(),
        lines = state.buffer().line_count(),
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    println!("{READY_STATUS}");
    loop {
        select! {
            recv(stdin_rx) -> line => {
                let Ok(line) = line else { break };
                if state.run_in_flight {
                    forward_program_input(&line, &mut state, &mut sandbox);
                    continue;
                }
                if line.trim().is_empty() {
                    continue;
                }
                let result = match CommandParser::parse(&line) {
                    CommandResult::Action(action) => {
                        dispatch(action, &mut state, &mut sandbox, &config)
                    }
                    CommandResult::Help(text) | CommandResult::Error(text) => {
                        core_actions::DispatchResult::status(text)
                    }
                };
                if !result.status.is_empty() {
                    println!("{}", result.status);
                }
                if result.quit {
                    break;
                }
            }
            recv(run_events) -> event => {
                let Ok(event) = event else { break };
                handle_run_event(event, &mut state, &mut sandbox);
            }
        }
    }

    info!(target: "runtime", "shutdown");
    Ok(())
}

/// Lines typed while a run is in flight belong to the program, not the
/// command parser.
fn forward_program_input(line: &str, state: &mut EditorState, sandbox: &mut ProcessSandbox) {
    match sandbox.send_input(line) {
        Ok(()) => {
            state.awaiting_input = false;
            tracing::debug!(target: "run", bytes = line.len(), "input_forwarded");
        }
        Err(e) => println!("Could not send input: {e}"),
    }
}

fn handle_run_event(event: RunEvent, state: &mut EditorState, sandbox: &mut ProcessSandbox) {
    match event {
        RunEvent::Output(line) => {
            println!("{line}");
            state.output.append(line);
        }
        RunEvent::InputRequest(prompt) => {
            state.awaiting_input = true;
            println!("{prompt}");
        }
        RunEvent::Terminated(summary) => {
            state.run_in_flight = false;
            state.awaiting_input = false;
            sandbox.finish_run();
            println!("{summary}");
        }
        RunEvent::Error(message) => {
            state.run_in_flight = false;
            state.awaiting_input = false;
            sandbox.finish_run();
            println!("Error: {message}");
        }
    }
}
