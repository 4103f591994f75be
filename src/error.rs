use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("battery device was unable to be found")]
    DeviceNotFound,

    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not parse {content:?} from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        content: String,
        source: ParseIntError,
    },

    #[error("threshold {0} is out of range, it may not precede 5 or exceed 100")]
    InvalidRange(u32),

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl BatteryError {
    /// Kind of the underlying I/O failure, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            BatteryError::Read { source, .. } | BatteryError::Write { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BatteryError>;
