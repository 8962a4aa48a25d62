use crate::application::{DashboardCommand, DashboardHandle};
use std::io::BufRead;
use std::thread;
use tracing::{info, warn};

/// Operator command typed on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCommand {
    Clear,
    Quit,
}

impl OperatorCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "clear" | "c" => Some(OperatorCommand::Clear),
            "quit" | "exit" | "q" => Some(OperatorCommand::Quit),
            _ => None,
        }
    }
}

/// Read operator commands line by line from `input` and forward them to the
/// dashboard. Returns on `quit`, end of input, or once the dashboard is gone.
///
/// Blocking: call it from a plain thread, never from an async task.
pub fn run_console_commands<R: BufRead>(input: R, dashboard: &DashboardHandle) -> Result<(), String> {
    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read console input: {}", e))?;
        match OperatorCommand::parse(&line) {
            Some(OperatorCommand::Clear) => dashboard.blocking_send(DashboardCommand::Clear)?,
            Some(OperatorCommand::Quit) => {
                info!("Operator requested shutdown");
                return dashboard.blocking_send(DashboardCommand::Shutdown);
            }
            None if line.trim().is_empty() => {}
            None => warn!("Unknown command '{}', expected 'clear' or 'quit'", line.trim()),
        }
    }
    Ok(())
}

/// Serve operator commands from stdin on a detached thread, so a pending
/// read never holds up runtime shutdown.
pub fn spawn_stdin_commands(dashboard: DashboardHandle) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        if let Err(e) = run_console_commands(stdin.lock(), &dashboard) {
            warn!("Console commands unavailable: {}", e);
        }
    })
}
