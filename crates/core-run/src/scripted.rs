//! Scripted sandbox: a test double that replays a fixed event sequence.
//!
//! Used by the dispatcher and binary tests to exercise the full protocol —
//! including `InputRequest`, which the process backend cannot produce.

use crate::{RunEvent, Sandbox, SandboxError};
use crossbeam_channel::{Receiver, Sender, unbounded};

pub struct ScriptedSandbox {
    script: Vec<RunEvent>,
    events_tx: Sender<RunEvent>,
    events_rx: Receiver<RunEvent>,
    in_flight: bool,
    /// Sources passed to `run`, oldest first.
    pub runs: Vec<String>,
    /// Values forwarded via `send_input`, oldest first.
    pub inputs: Vec<String>,
}

impl ScriptedSandbox {
    /// Replays `script` on every `run` call. The script should end with a
    /// terminal event; `run` while one is mid-flight is still rejected until
    /// the caller drains that terminal event via `acknowledge_terminal`.
    pub fn new(script: Vec<RunEvent>) -> Self {
        let (events_tx, events_rx) = unbounded();
        Self {
            script,
            events_tx,
            events_rx,
            in_flight: false,
            runs: Vec::new(),
            inputs: Vec::new(),
        }
    }

    /// Callers invoke this when they consume a terminal event, mirroring how
    /// the real event loop clears its run-in-flight flag.
    pub fn acknowledge_terminal(&mut self) {
        self.in_flight = false;
    }
}

impl Sandbox for ScriptedSandbox {
    fn run(&mut self, source: &str) -> Result<(), SandboxError> {
        if self.in_flight {
            return Err(SandboxError::RunInFlight);
        }
        self.runs.push(source.to_string());
        self.in_flight = true;
        for event in &self.script {
            let _ = self.events_tx.send(event.clone());
        }
        Ok(())
    }

    fn send_input(&mut self, value: &str) -> Result<(), SandboxError> {
        if !self.in_flight {
            return Err(SandboxError::NotRunning);
        }
        self.inputs.push(value.to_string());
        Ok(())
    }

    fn events(&self) -> &Receiver<RunEvent> {
        &self.events_rx
    }
}
