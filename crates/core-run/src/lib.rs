//! Execution sandbox boundary: the message protocol and its backends.
//!
//! The navigation core never executes code itself. It hands the full buffer
//! text to a `Sandbox` and consumes an ordered stream of `RunEvent`s back:
//! zero or more `Output`s, optionally `InputRequest`s (the program is blocked
//! until a matching `send_input`), and exactly one terminal event
//! (`Terminated` or `Error`). One run may be in flight per sandbox instance;
//! the protocol has no cancellation — a stuck run is abandoned by dropping
//! the instance and creating a new one.

use crossbeam_channel::Receiver;

mod process;
mod scripted;

pub use process::ProcessSandbox;
pub use scripted::ScriptedSandbox;

/// Events emitted by a sandbox during one run, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// One line of program output.
    Output(String),
    /// The program is blocked awaiting input; the prompt text is attached.
    InputRequest(String),
    /// The run finished; carries a result summary.
    Terminated(String),
    /// The run failed; carries the failure text. Output already received
    /// stays valid.
    Error(String),
}

impl RunEvent {
    /// True for the events that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunEvent::Terminated(_) | RunEvent::Error(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// `run` was issued while a previous run's terminal event is pending.
    #[error("a run is already in flight")]
    RunInFlight,
    /// `send_input` with no program waiting to receive it.
    #[error("no running program to receive input")]
    NotRunning,
    #[error("failed to start the sandboxed interpreter: {0}")]
    Spawn(#[from] std::io::Error),
}

/// An isolated executor for the edited program.
pub trait Sandbox {
    /// Start executing `source`. Rejected with `RunInFlight` while a previous
    /// run has not produced its terminal event.
    fn run(&mut self, source: &str) -> Result<(), SandboxError>;

    /// Forward one line of input to the running program.
    fn send_input(&mut self, value: &str) -> Result<(), SandboxError>;

    /// The ordered event stream for this instance.
    fn events(&self) -> &Receiver<RunEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_event_classification() {
        assert!(!RunEvent::Output("x".into()).is_terminal());
        assert!(!RunEvent::InputRequest("? ".into()).is_terminal());
        assert!(RunEvent::Terminated("ok".into()).is_terminal());
        assert!(RunEvent::Error("boom".into()).is_terminal());
    }
}
