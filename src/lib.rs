pub mod args;
pub mod battery;
pub mod battery_level;
pub mod commands;
pub mod error;

pub use battery::{BatteryAccessor, BatterySnapshot};
pub use battery_level::BatteryLevel;
pub use error::BatteryError;

pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";
pub const DEFAULT_CANDIDATES: [&str; 4] = ["BAT0", "BAT1", "BATC", "BATT"];

const STATUS_ATTRIBUTE: &str = "status";
const CAPACITY_ATTRIBUTE: &str = "capacity";
const THRESHOLD_ATTRIBUTE: &str = "charge_control_end_threshold";

/// Below this most hardware cannot reliably detect the end of charge.
pub const MIN_THRESHOLD: u32 = 5;
pub const MAX_THRESHOLD: u32 = 100;
