// Allow unusual byte groupings for UUIDs which have standard format
#![allow(clippy::unusual_byte_groupings)]

//! # ooler-ctrl
//!
//! Control an Ooler bed cooler over Bluetooth Low Energy.
//!
//! The crate has two halves:
//!
//! - a device layer ([`Ooler`], built on `btleplug`) that finds the cooler by
//!   its hardware address and reads or writes its GATT characteristics;
//! - a small dispatcher ([`cli`], [`commands`]) that maps a subcommand to one
//!   read or write on any [`CoolerDevice`] and prints the result.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ooler_ctrl::{BDAddr, Ooler, Result};
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ooler = Ooler::new(BDAddr::from_str("AA:BB:CC:DD:EE:FF").unwrap());
//!
//!     ooler.connect().await?;
//!     println!("Powered on: {}", ooler.powered_on().await?);
//!     println!("Target: {}°F", ooler.desired_temperature_f().await?);
//!
//!     ooler.set_desired_temperature_f(68).await?;
//!     ooler.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Platform Notes
//!
//! ### Linux
//! Requires BlueZ. User may need to be in the `bluetooth` group.
//!
//! ### macOS
//! CoreBluetooth does not expose hardware addresses, so lookup by MAC
//! address only works on Linux and Windows.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod ble;
pub mod cli;
pub mod commands;
pub mod data;
pub mod device;
pub mod error;
pub mod ooler;
pub mod protocol;
pub mod utils;

// Re-exports for convenience
pub use btleplug::api::BDAddr;
pub use cli::{Cli, Command, PowerState};
pub use commands::{dispatch, run, CommandDescriptor, Reading};
pub use data::FanSpeed;
pub use device::CoolerDevice;
pub use error::{Error, Result};
pub use ooler::Ooler;
pub use utils::{celsius_to_fahrenheit, fahrenheit_to_celsius};

pub use ble::connection::ConnectionState;
