use std::{
    fs::{self, OpenOptions},
    io::Write as _,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::error::{BatteryError, Result};
use crate::{
    CAPACITY_ATTRIBUTE, DEFAULT_CANDIDATES, MAX_THRESHOLD, MIN_THRESHOLD, POWER_SUPPLY_ROOT,
    STATUS_ATTRIBUTE, THRESHOLD_ATTRIBUTE,
};

/// Reads and writes the attributes of the active battery under a power-supply
/// directory. Nothing is cached: every call resolves the device again.
#[derive(Debug, Clone)]
pub struct BatteryAccessor {
    root: PathBuf,
    candidates: Vec<String>,
}

/// Every value the accessor reports, read in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterySnapshot {
    pub device: String,
    pub threshold: u32,
    pub capacity: u32,
    pub status: String,
}

impl Default for BatteryAccessor {
    fn default() -> Self {
        Self::new(POWER_SUPPLY_ROOT, DEFAULT_CANDIDATES)
    }
}

impl BatteryAccessor {
    /// `candidates` are probed in order, the first one with a readable
    /// status attribute wins.
    pub fn new<P, I, S>(root: P, candidates: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn resolve_device(&self) -> Result<String> {
        for device in &self.candidates {
            let status_file = self.attribute_path(device, STATUS_ATTRIBUTE);
            match fs::read(&status_file) {
                Ok(_) => {
                    debug!("using battery device {device}");
                    return Ok(device.clone());
                }
                Err(err) => debug!("skipping {}: {err}", status_file.display()),
            }
        }
        Err(BatteryError::DeviceNotFound)
    }

    pub fn get_threshold(&self) -> Result<u32> {
        let device = self.resolve_device()?;
        read_number(&self.attribute_path(&device, THRESHOLD_ATTRIBUTE))
    }

    /// Writes `value` to the charge-limit attribute. Values outside
    /// `MIN_THRESHOLD..=MAX_THRESHOLD` are rejected before touching the device.
    pub fn set_threshold(&self, value: u32) -> Result<()> {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
            return Err(BatteryError::InvalidRange(value));
        }
        let device = self.resolve_device()?;
        let path = self.attribute_path(&device, THRESHOLD_ATTRIBUTE);
        // the attribute is owned by the driver, never create it
        let mut end_threshold_file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| BatteryError::Write {
                path: path.clone(),
                source,
            })?;
        end_threshold_file
            .write_all(value.to_string().as_bytes())
            .map_err(|source| BatteryError::Write {
                path: path.clone(),
                source,
            })?;
        info!("charge threshold of {device} set to {value}");
        Ok(())
    }

    pub fn get_status(&self) -> Result<String> {
        let device = self.resolve_device()?;
        read_text(&self.attribute_path(&device, STATUS_ATTRIBUTE))
    }

    pub fn get_capacity(&self) -> Result<u32> {
        let device = self.resolve_device()?;
        read_number(&self.attribute_path(&device, CAPACITY_ATTRIBUTE))
    }

    pub fn snapshot(&self) -> Result<BatterySnapshot> {
        let device = self.resolve_device()?;
        Ok(BatterySnapshot {
            threshold: read_number(&self.attribute_path(&device, THRESHOLD_ATTRIBUTE))?,
            capacity: read_number(&self.attribute_path(&device, CAPACITY_ATTRIBUTE))?,
            status: read_text(&self.attribute_path(&device, STATUS_ATTRIBUTE))?,
            device,
        })
    }

    fn attribute_path(&self, device: &str, attribute: &str) -> PathBuf {
        self.root.join(device).join(attribute)
    }
}

/// Attribute contents with surrounding whitespace removed. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
fn read_text(path: &Path) -> Result<String> {
    let contents = fs::read(path).map_err(|source| BatteryError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&contents).trim().to_owned())
}

fn read_number(path: &Path) -> Result<u32> {
    let trimmed = read_text(path)?;
    trimmed.parse().map_err(|source| BatteryError::Parse {
        path: path.to_owned(),
        content: trimmed,
        source,
    })
}
