//! Command dispatch.
//!
//! Each device property the CLI exposes is described by a
//! [`CommandDescriptor`]: a read that takes no argument and a write that
//! takes the new value. [`dispatch`] picks one of the two based on whether
//! a value was supplied, and [`run`] brackets that single call with
//! [`CoolerDevice::open`] and [`CoolerDevice::close`].

use futures::future::BoxFuture;
use std::fmt;
use tracing::debug;

use crate::data::FanSpeed;
use crate::device::CoolerDevice;
use crate::error::{after_cleanup, Result};

/// Query the current value of a property.
pub type ReadFn<T> = for<'a> fn(&'a dyn CoolerDevice) -> BoxFuture<'a, Result<T>>;

/// Set a property and return the value the device acknowledged.
pub type WriteFn<T> = for<'a> fn(&'a dyn CoolerDevice, T) -> BoxFuture<'a, Result<T>>;

/// A read/write pair for one device property.
pub struct CommandDescriptor<T: 'static> {
    /// Operation used when no value is given.
    pub read: ReadFn<T>,
    /// Operation used when a value is given.
    pub write: WriteFn<T>,
}

/// Power on/off.
pub const POWER: CommandDescriptor<bool> = CommandDescriptor {
    read: |device| device.powered_on(),
    write: |device, on| device.set_power_state(on),
};

/// Target temperature in °F.
pub const TARGET_TEMP: CommandDescriptor<u8> = CommandDescriptor {
    read: |device| device.desired_temperature_f(),
    write: |device, deg_f| device.set_desired_temperature_f(deg_f),
};

/// Fan speed.
pub const FAN_SPEED: CommandDescriptor<FanSpeed> = CommandDescriptor {
    read: |device| device.fan_speed(),
    write: |device, speed| device.set_fan_speed(speed),
};

/// Result of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading {
    /// Whether the device is on.
    Power(bool),
    /// Target temperature in °F.
    TargetTemp(u8),
    /// Fan speed.
    FanSpeed(FanSpeed),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(on) => write!(f, "{}", on),
            Self::TargetTemp(deg_f) => write!(f, "{}", deg_f),
            Self::FanSpeed(speed) => write!(f, "{}", speed),
        }
    }
}

/// Invoke exactly one of `descriptor`'s operations.
///
/// With `Some(value)` the write is called with `value` as given; with `None`
/// the read is called.
pub async fn dispatch<T>(
    descriptor: &CommandDescriptor<T>,
    device: &dyn CoolerDevice,
    value: Option<T>,
) -> Result<T>
where
    T: fmt::Debug + Send,
{
    match value {
        Some(value) => {
            debug!("Writing {:?}", value);
            (descriptor.write)(device, value).await
        }
        None => {
            debug!("Reading current value");
            (descriptor.read)(device).await
        }
    }
}

/// Open a session, run `command`, and close the session again.
///
/// The session is closed whether or not the command succeeded. If both the
/// command and the close fail, the command's error is returned.
pub async fn run(device: &dyn CoolerDevice, command: &crate::cli::Command) -> Result<Reading> {
    device.open().await?;

    let result = command.execute(device).await;

    after_cleanup(result, device.close().await, "close device session")
}
