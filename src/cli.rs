//! Command-line interface.
//!
//! [`Command`] is the single table of subcommands: its variants define the
//! parser (name, help, value argument) and [`Command::execute`] ties each one
//! to its [`CommandDescriptor`](crate::commands::CommandDescriptor).

use btleplug::api::BDAddr;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::commands::{dispatch, Reading, FAN_SPEED, POWER, TARGET_TEMP};
use crate::data::FanSpeed;
use crate::device::CoolerDevice;
use crate::error::Result;

/// Control the Ooler bed cooler using BLE
#[derive(Debug, Parser)]
#[command(name = "OolerCtrl", version)]
pub struct Cli {
    /// MAC address of the Ooler to control, like AA:BB:CC:DD:EE:FF
    #[arg(long = "MAC", value_name = "ADDRESS", value_parser = parse_address)]
    pub address: BDAddr,

    /// Seconds to scan for the device before giving up
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub scan_timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// How long to scan for the device.
    pub fn scan_timeout(&self) -> Duration {
        Duration::from_secs(self.scan_timeout)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "warn,ooler_ctrl=info",
            2 => "warn,ooler_ctrl=debug",
            _ => "trace",
        }
    }
}

/// Device property to read, or write when a value is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Ooler power state
    Power {
        /// Desired power state
        #[arg(long, value_enum)]
        state: Option<PowerState>,
    },

    /// Device target temperature (F)
    #[command(name = "target_temp")]
    TargetTemp {
        /// Desired target temperature
        #[arg(long)]
        temp: Option<u8>,
    },

    /// Fan speed
    #[command(name = "fan_speed")]
    FanSpeed {
        /// Desired fan speed
        #[arg(long, value_enum)]
        speed: Option<FanSpeed>,
    },
}

impl Command {
    /// Run the read or write this subcommand maps to.
    pub async fn execute(&self, device: &dyn CoolerDevice) -> Result<Reading> {
        debug!("Executing {:?}", self);

        match *self {
            Self::Power { state } => dispatch(&POWER, device, state.map(PowerState::is_on))
                .await
                .map(Reading::Power),
            Self::TargetTemp { temp } => dispatch(&TARGET_TEMP, device, temp)
                .await
                .map(Reading::TargetTemp),
            Self::FanSpeed { speed } => dispatch(&FAN_SPEED, device, speed)
                .await
                .map(Reading::FanSpeed),
        }
    }
}

/// Power state accepted by `power --state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PowerState {
    /// Turn the device on
    Auto,
    /// Turn the device off
    Off,
}

impl PowerState {
    /// Whether this state means powered on.
    pub fn is_on(self) -> bool {
        matches!(self, Self::Auto)
    }
}

fn parse_address(s: &str) -> std::result::Result<BDAddr, String> {
    BDAddr::from_str(s).map_err(|e| format!("{} (expected XX:XX:XX:XX:XX:XX)", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;
    use crate::device::MockCoolerDevice;
    use clap::error::ErrorKind;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    const MAC: &str = "AA:BB:CC:DD:EE:FF";

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ooler-ctrl").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_target_temp_with_value() {
        let cli = parse(&["--MAC", MAC, "target_temp", "--temp", "72"]).unwrap();
        assert_eq!(cli.address, BDAddr::from_str(MAC).unwrap());
        assert_eq!(cli.command, Command::TargetTemp { temp: Some(72) });
    }

    #[test]
    fn test_parse_target_temp_without_value() {
        let cli = parse(&["--MAC", MAC, "target_temp"]).unwrap();
        assert_eq!(cli.command, Command::TargetTemp { temp: None });
    }

    #[test]
    fn test_parse_power_states() {
        let cli = parse(&["--MAC", MAC, "power", "--state", "auto"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Power {
                state: Some(PowerState::Auto)
            }
        );

        let cli = parse(&["--MAC", MAC, "power", "--state", "off"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Power {
                state: Some(PowerState::Off)
            }
        );

        let cli = parse(&["--MAC", MAC, "power"]).unwrap();
        assert_eq!(cli.command, Command::Power { state: None });
    }

    #[test]
    fn test_parse_fan_speed() {
        let cli = parse(&["--MAC", MAC, "fan_speed", "--speed", "boost"]).unwrap();
        assert_eq!(
            cli.command,
            Command::FanSpeed {
                speed: Some(FanSpeed::Boost)
            }
        );

        let cli = parse(&["--MAC", MAC, "fan_speed"]).unwrap();
        assert_eq!(cli.command, Command::FanSpeed { speed: None });
    }

    #[test]
    fn test_missing_mac_is_usage_error() {
        let err = parse(&["power"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_malformed_mac_is_usage_error() {
        let err = parse(&["--MAC", "not-a-mac", "power"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_non_integer_temp_is_usage_error() {
        let err = parse(&["--MAC", MAC, "target_temp", "--temp", "warm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--MAC", MAC, "target_temp", "--temp", "300"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_power_state_is_usage_error() {
        let err = parse(&["--MAC", MAC, "power", "--state", "on"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        let err = parse(&["--MAC", MAC]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = parse(&["--MAC", MAC, "actual_temp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn test_options() {
        let cli = parse(&["--MAC", MAC, "--scan-timeout", "3", "power", "-vv"]).unwrap();
        assert_eq!(cli.scan_timeout(), Duration::from_secs(3));
        assert_eq!(cli.log_filter(), "warn,ooler_ctrl=debug");

        let cli = parse(&["--MAC", MAC, "power"]).unwrap();
        assert_eq!(cli.scan_timeout(), Duration::from_secs(10));
        assert_eq!(cli.log_filter(), "warn");
    }

    #[tokio::test]
    async fn test_parsed_target_temp_reaches_device() {
        let cli = parse(&["--MAC", MAC, "target_temp", "--temp", "72"]).unwrap();

        let mut mock = MockCoolerDevice::new();
        mock.expect_open().times(1).returning(|| Ok(()));
        mock.expect_desired_temperature_f().never();
        mock.expect_set_desired_temperature_f()
            .with(eq(72))
            .times(1)
            .returning(Ok);
        mock.expect_close().times(1).returning(|| Ok(()));

        let reading = commands::run(&mock, &cli.command).await.unwrap();
        assert_eq!(reading.to_string(), "72");
    }
}
