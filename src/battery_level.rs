use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    Low,
    Medium,
    Full,
    Custom(u32),
}

impl From<u32> for BatteryLevel {
    fn from(value: u32) -> Self {
        match value {
            60 => Self::Low,
            80 => Self::Medium,
            100 => Self::Full,
            num => Self::Custom(num),
        }
    }
}

impl FromStr for BatteryLevel {
    type Err = String;

    /// Accepts `low`, `medium`, `full` or a plain percentage. Range checks are
    /// left to [`crate::battery::BatteryAccessor::set_threshold`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "full" => Ok(Self::Full),
            other => other
                .parse::<u32>()
                .map(Self::from)
                .map_err(|_| format!("expected low, medium, full or a percentage, got {s:?}")),
        }
    }
}

impl fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_percentage())
    }
}

impl BatteryLevel {
    pub fn get_percentage(&self) -> u32 {
        match self {
            BatteryLevel::Low => 60,
            BatteryLevel::Medium => 80,
            BatteryLevel::Full => 100,
            BatteryLevel::Custom(l) => *l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("low".parse(), Ok(BatteryLevel::Low));
        assert_eq!("Medium".parse(), Ok(BatteryLevel::Medium));
        assert_eq!(" FULL ".parse(), Ok(BatteryLevel::Full));
    }

    #[test]
    fn numbers_map_onto_presets_when_they_match() {
        assert_eq!("80".parse(), Ok(BatteryLevel::Medium));
        assert_eq!("75".parse(), Ok(BatteryLevel::Custom(75)));
        assert_eq!(BatteryLevel::from(60).get_percentage(), 60);
    }

    #[test]
    fn out_of_range_numbers_are_kept_for_the_accessor_to_reject() {
        assert_eq!("250".parse(), Ok(BatteryLevel::Custom(250)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("half".parse::<BatteryLevel>().is_err());
        assert!("-5".parse::<BatteryLevel>().is_err());
        assert!("".parse::<BatteryLevel>().is_err());
    }
}
