//! Process-backed sandbox: stages the source to a temp file and runs the
//! configured interpreter with piped stdio.
//!
//! A reader thread streams child stdout lines as `Output` events in order;
//! the exit status becomes the single terminal event. A plain process cannot
//! observe when the program blocks inside `input()`, so this backend never
//! emits `InputRequest`; forwarded input is written to the child's stdin
//! whenever the caller sends it.

use crate::{RunEvent, Sandbox, SandboxError};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;

pub struct ProcessSandbox {
    interpreter: String,
    events_tx: Sender<RunEvent>,
    events_rx: Receiver<RunEvent>,
    current: Option<RunningChild>,
}

struct RunningChild {
    child: Child,
    stdin: Option<ChildStdin>,
    // Keeps the staged source alive until the run finishes.
    _source_file: tempfile::NamedTempFile,
}

/// Abandoning a run means dropping its bookkeeping, so the drop must kill a
/// still-running child (e.g. one blocked in `input()`) before reaping it, or
/// it would outlive the sandbox as an orphan.
impl Drop for RunningChild {
    fn drop(&mut self) {
        if matches!(self.child.try_wait(), Ok(None)) {
            tracing::debug!(target: "run", "killing_abandoned_child");
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

impl ProcessSandbox {
    /// `interpreter` is the command used to execute the staged source, e.g.
    /// `python3` (configured via `[run] python`).
    pub fn new(interpreter: impl Into<String>) -> Self {
        let (events_tx, events_rx) = unbounded();
        Self {
            interpreter: interpreter.into(),
            events_tx,
            events_rx,
            current: None,
        }
    }

    /// Drop the previous run's bookkeeping. Callers invoke this when they
    /// observe `Terminated`/`Error`; a child that is somehow still running is
    /// killed rather than waited on, so this never blocks on a stuck run.
    pub fn finish_run(&mut self) {
        self.current = None;
    }

    fn run_finished(&mut self) -> bool {
        match self.current.as_mut() {
            None => true,
            // try_wait: Some(status) once the child exited.
            Some(running) => matches!(running.child.try_wait(), Ok(Some(_))),
        }
    }
}

impl Sandbox for ProcessSandbox {
    fn run(&mut self, source: &str) -> Result<(), SandboxError> {
        if !self.run_finished() {
            return Err(SandboxError::RunInFlight);
        }
        self.finish_run();

        let mut source_file = tempfile::Builder::new()
            .prefix("pynav-run-")
            .suffix(".py")
            .tempfile()?;
        source_file.write_all(source.as_bytes())?;
        source_file.flush()?;

        let mut child = Command::new(&self.interpreter)
            .arg("-u")
            .arg(source_file.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        tracing::info!(
            target: "run",
            interpreter = %self.interpreter,
            bytes = source.len(),
            "run_started"
        );

        let stdin = child.stdin.take();
        let stdout = child.stdout.take().expect("stdout was piped");
        let stderr = child.stderr.take();

        let tx = self.events_tx.clone();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                match line {
                    Ok(text) => {
                        if tx.send(RunEvent::Output(text)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(target: "run", ?e, "stdout_read_error");
                        break;
                    }
                }
            }
            // Stdout closed: the program is done (or crashed). Drain stderr
            // for the terminal event.
            let mut err_text = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut err_text);
            }
            let event = if err_text.trim().is_empty() {
                RunEvent::Terminated("Program completed successfully".to_string())
            } else {
                RunEvent::Error(err_text.trim_end().to_string())
            };
            let _ = tx.send(event);
        });

        self.current = Some(RunningChild {
            child,
            stdin,
            _source_file: source_file,
        });
        Ok(())
    }

    fn send_input(&mut self, value: &str) -> Result<(), SandboxError> {
        let running = self.current.as_mut().ok_or(SandboxError::NotRunning)?;
        let stdin = running.stdin.as_mut().ok_or(SandboxError::NotRunning)?;
        stdin.write_all(value.as_bytes())?;
        stdin.write_all(b"\n")?;
        stdin.flush()?;
        Ok(())
    }

    fn events(&self) -> &Receiver<RunEvent> {
        &self.events_rx
    }
}
