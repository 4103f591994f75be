use battery_ctl::args::BatteryCtlArgs;
use battery_ctl::commands::{report, run};
use battery_ctl::{BatteryAccessor, DEFAULT_CANDIDATES};
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: BatteryCtlArgs = argh::from_env();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let accessor = match args.root {
        Some(root) => BatteryAccessor::new(root, DEFAULT_CANDIDATES),
        None => BatteryAccessor::default(),
    };

    let outcome = run(&accessor, args.command);
    if report(outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
