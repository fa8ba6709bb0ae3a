//! BLE communication module.
//!
//! This module provides low-level Bluetooth Low Energy functionality
//! for locating and talking to an Ooler.

pub mod characteristics;
pub mod connection;
pub mod scanner;
pub mod uuids;

pub use characteristics::CharacteristicHandler;
pub use connection::{ConnectionManager, ConnectionState};
pub use scanner::BleScanner;
pub use uuids::*;
