//! The device abstraction the command dispatcher talks to.

use async_trait::async_trait;

use crate::data::FanSpeed;
use crate::error::Result;

/// Asynchronous read/write access to a bed-cooling device.
///
/// Every write returns the value the device acknowledged. [`open`] and
/// [`close`] bracket a session; the other methods may assume it is open.
///
/// [`open`]: CoolerDevice::open
/// [`close`]: CoolerDevice::close
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoolerDevice: Send + Sync {
    /// Establish the session with the device.
    async fn open(&self) -> Result<()>;

    /// Release the session. Safe to call when not open.
    async fn close(&self) -> Result<()>;

    /// Whether the device is powered on.
    async fn powered_on(&self) -> Result<bool>;

    /// Power the device on or off.
    async fn set_power_state(&self, on: bool) -> Result<bool>;

    /// Target temperature in °F.
    async fn desired_temperature_f(&self) -> Result<u8>;

    /// Set the target temperature in °F.
    async fn set_desired_temperature_f(&self, deg_f: u8) -> Result<u8>;

    /// Current fan speed.
    async fn fan_speed(&self) -> Result<FanSpeed>;

    /// Set the fan speed.
    async fn set_fan_speed(&self, speed: FanSpeed) -> Result<FanSpeed>;
}
