use std::path::PathBuf;

use argh::FromArgs;

use crate::battery_level::BatteryLevel;

#[derive(FromArgs, Debug)]
/// report and configure laptop battery charging
pub struct BatteryCtlArgs {
    /// power supply directory to probe (default: /sys/class/power_supply)
    #[argh(option)]
    pub root: Option<PathBuf>,

    /// log device probing and writes to stderr
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Status(StatusCommand),
    Device(DeviceCommand),
    Capacity(CapacityCommand),
    Threshold(ThresholdCommand),
    Info(InfoCommand),
}

#[derive(FromArgs, Debug)]
/// print the current charging status
#[argh(subcommand, name = "status")]
pub struct StatusCommand {}

#[derive(FromArgs, Debug)]
/// print the active battery device
#[argh(subcommand, name = "device")]
pub struct DeviceCommand {}

#[derive(FromArgs, Debug)]
/// print the current charge level
#[argh(subcommand, name = "capacity")]
pub struct CapacityCommand {}

#[derive(FromArgs, Debug)]
/// print or change the charge threshold
#[argh(subcommand, name = "threshold")]
pub struct ThresholdCommand {
    /// new threshold: low, medium, full or a percentage between 5 and 100
    #[argh(option, short = 's')]
    pub set: Option<BatteryLevel>,
}

#[derive(FromArgs, Debug)]
/// print device, threshold, capacity and status
#[argh(subcommand, name = "info")]
pub struct InfoCommand {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<BatteryCtlArgs, argh::EarlyExit> {
        BatteryCtlArgs::from_args(&["battery_ctl"], args)
    }

    #[test]
    fn global_options_precede_the_subcommand() {
        let args = parse(&["--root", "/tmp/ps", "-v", "status"]).unwrap();
        assert_eq!(args.root, Some(PathBuf::from("/tmp/ps")));
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Status(_)));
    }

    #[test]
    fn threshold_accepts_presets() {
        let args = parse(&["threshold", "--set", "medium"]).unwrap();
        match args.command {
            Command::Threshold(cmd) => assert_eq!(cmd.set, Some(BatteryLevel::Medium)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn threshold_without_set_only_reads() {
        let args = parse(&["threshold"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Threshold(ThresholdCommand { set: None })
        ));
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(parse(&["threshold", "--set", "lots"]).is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(parse(&[]).is_err());
    }
}
