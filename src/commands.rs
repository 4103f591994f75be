use std::io::{self, Write};

use crate::args::Command;
use crate::battery::BatteryAccessor;
use crate::error::{BatteryError, Result};

/// Runs one subcommand and returns what it prints on success.
pub fn run(accessor: &BatteryAccessor, command: Command) -> Result<String> {
    Ok(match command {
        Command::Status(_) => accessor.get_status()?,
        Command::Device(_) => accessor.resolve_device()?,
        Command::Capacity(_) => accessor.get_capacity()?.to_string(),
        Command::Threshold(cmd) => match cmd.set {
            Some(level) => {
                accessor.set_threshold(level.get_percentage())?;
                level.to_string()
            }
            None => accessor.get_threshold()?.to_string(),
        },
        Command::Info(_) => {
            let snapshot = accessor.snapshot()?;
            format!(
                "active battery device: {}\n\
                 current battery threshold: {}\n\
                 current charge levels: {}\n\
                 current battery status: {}",
                snapshot.device, snapshot.threshold, snapshot.capacity, snapshot.status
            )
        }
    })
}

pub fn describe(err: &BatteryError) -> String {
    match err.io_kind() {
        Some(io::ErrorKind::PermissionDenied) => {
            format!("{err} (permission denied, try running as root)")
        }
        _ => err.to_string(),
    }
}

/// Prints the outcome of [`run`], errors go to `stderr`. Returns whether the
/// process should exit successfully.
pub fn report(outcome: Result<String>, stdout: &mut impl Write, stderr: &mut impl Write) -> bool {
    match outcome {
        Ok(output) => writeln!(stdout, "{output}").is_ok(),
        Err(err) => {
            let _ = writeln!(stderr, "{}", describe(&err));
            false
        }
    }
}
