//! Ooler device handle.
//!
//! Represents a single Ooler bed cooler addressed by its Bluetooth hardware
//! address.

use async_trait::async_trait;
use btleplug::api::BDAddr;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ble::characteristics::CharacteristicHandler;
use crate::ble::connection::{ConnectionManager, ConnectionState};
use crate::ble::scanner::BleScanner;
use crate::ble::uuids::*;
use crate::data::FanSpeed;
use crate::device::CoolerDevice;
use crate::error::{after_cleanup, Error, Result};
use crate::protocol::codec;
use crate::utils::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// An open link to the peripheral.
struct Session {
    connection: ConnectionManager,
    characteristics: CharacteristicHandler,
}

/// Control an Ooler over Bluetooth LE.
///
/// The handle is cheap to create; nothing touches the radio until the first
/// operation (or an explicit [`connect`](Ooler::connect)).
pub struct Ooler {
    /// Hardware address of the device.
    address: BDAddr,
    /// How long to scan for the device before giving up.
    scan_timeout: Duration,
    /// Keep the link up between operations.
    stay_connected: bool,
    /// Current session, if connected.
    session: RwLock<Option<Arc<Session>>>,
}

impl Ooler {
    /// Default time spent scanning for the device (10 seconds).
    pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a handle for the device at `address`.
    pub fn new(address: BDAddr) -> Self {
        Self {
            address,
            scan_timeout: Self::DEFAULT_SCAN_TIMEOUT,
            stay_connected: true,
            session: RwLock::new(None),
        }
    }

    /// Set how long to scan for the device.
    pub fn with_scan_timeout(mut self, timeout: Duration) -> Self {
        self.scan_timeout = timeout;
        self
    }

    /// Disconnect after every characteristic access when `false`.
    pub fn stay_connected(mut self, stay_connected: bool) -> Self {
        self.stay_connected = stay_connected;
        self
    }

    /// Get the hardware address.
    pub fn address(&self) -> BDAddr {
        self.address
    }

    // === Connection ===

    /// Get the current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.session
            .read()
            .as_ref()
            .map(|s| s.connection.state())
            .unwrap_or_default()
    }

    /// Check if connected.
    pub fn is_connected(&self) -> bool {
        self.connection_state().is_connected()
    }

    /// Locate the device and connect to it.
    pub async fn connect(&self) -> Result<()> {
        if self.is_connected() {
            return Ok(());
        }

        info!("Attempting to connect to {}", self.address);

        let scanner = BleScanner::new().await?;
        let peripheral = scanner.find(self.address, self.scan_timeout).await?;

        let connection = ConnectionManager::new(peripheral.clone());
        connection.connect().await?;

        let characteristics = CharacteristicHandler::new(peripheral);
        characteristics.discover_characteristics();

        if !characteristics.has_characteristic(&POWER_STATUS_UUID) {
            warn!(
                "{} has no power status characteristic; it may not be an Ooler",
                self.address
            );
        }

        *self.session.write() = Some(Arc::new(Session {
            connection,
            characteristics,
        }));

        info!("Connected to {}", self.address);

        Ok(())
    }

    /// Disconnect from the device.
    pub async fn disconnect(&self) -> Result<()> {
        let session = self.session.write().take();

        match session {
            Some(session) => session.connection.disconnect().await,
            None => Ok(()),
        }
    }

    async fn ensure_connected(&self) -> Result<Arc<Session>> {
        if !self.is_connected() {
            self.connect().await?;
        }

        self.session.read().clone().ok_or(Error::NotConnected)
    }

    async fn request_characteristic(&self, uuid: &Uuid) -> Result<Vec<u8>> {
        let session = self.ensure_connected().await?;
        let value = session.characteristics.read(uuid).await;

        if self.stay_connected {
            return value;
        }

        after_cleanup(value, self.disconnect().await, "disconnect")
    }

    async fn write_characteristic(&self, uuid: &Uuid, data: &[u8]) -> Result<()> {
        let session = self.ensure_connected().await?;
        let result = session.characteristics.write(uuid, data).await;

        if self.stay_connected {
            return result;
        }

        after_cleanup(result, self.disconnect().await, "disconnect")
    }

    // === Power ===

    /// Return the power state.
    pub async fn powered_on(&self) -> Result<bool> {
        let data = self.request_characteristic(&POWER_STATUS_UUID).await?;
        Ok(codec::decode_bool(&data))
    }

    /// Turn the device on or off.
    pub async fn set_power_state(&self, on: bool) -> Result<bool> {
        debug!("Setting power state to {}", on);
        self.write_characteristic(&POWER_STATUS_UUID, &codec::encode_bool(on))
            .await?;
        Ok(on)
    }

    // === Temperature ===

    /// Get the desired temperature in Fahrenheit.
    pub async fn desired_temperature_f(&self) -> Result<u8> {
        let data = self.request_characteristic(&TARGET_TEMP_F_UUID).await?;
        codec::decode_u8(&data)
    }

    /// Set the desired temperature in Fahrenheit.
    pub async fn set_desired_temperature_f(&self, deg_f: u8) -> Result<u8> {
        debug!("Setting desired temperature to {}°F", deg_f);
        self.write_characteristic(&TARGET_TEMP_F_UUID, &codec::encode_u8(deg_f))
            .await?;
        Ok(deg_f)
    }

    /// Get the desired temperature in Celsius.
    pub async fn desired_temperature_c(&self) -> Result<i32> {
        Ok(fahrenheit_to_celsius(i32::from(
            self.desired_temperature_f().await?,
        )))
    }

    /// Set the desired temperature in Celsius.
    pub async fn set_desired_temperature_c(&self, deg_c: i32) -> Result<i32> {
        let deg_f = celsius_to_fahrenheit(deg_c);
        let deg_f = u8::try_from(deg_f).map_err(|_| Error::InvalidParameter {
            name: "deg_c".to_string(),
            value: deg_c.to_string(),
        })?;

        let confirmed = self.set_desired_temperature_f(deg_f).await?;
        Ok(fahrenheit_to_celsius(i32::from(confirmed)))
    }

    /// Get the measured water temperature in Fahrenheit.
    pub async fn actual_temperature_f(&self) -> Result<u8> {
        let data = self.request_characteristic(&ACTUAL_TEMP_F_UUID).await?;
        codec::decode_u8(&data)
    }

    /// Get the measured water temperature in Celsius.
    pub async fn actual_temperature_c(&self) -> Result<i32> {
        Ok(fahrenheit_to_celsius(i32::from(
            self.actual_temperature_f().await?,
        )))
    }

    // === Fan ===

    /// Return the fan speed.
    pub async fn fan_speed(&self) -> Result<FanSpeed> {
        let data = self.request_characteristic(&FAN_SPEED_UUID).await?;
        FanSpeed::from_raw(codec::decode_u8(&data)?)
    }

    /// Set the fan speed.
    pub async fn set_fan_speed(&self, speed: FanSpeed) -> Result<FanSpeed> {
        debug!("Setting fan speed to {}", speed);
        self.write_characteristic(&FAN_SPEED_UUID, &codec::encode_u8(speed.to_raw()))
            .await?;
        Ok(speed)
    }

    // === Status ===

    /// Return the water level.
    pub async fn water_level(&self) -> Result<u32> {
        let data = self.request_characteristic(&WATER_LEVEL_UUID).await?;
        codec::decode_uint(&data)
    }

    /// Get the advertised device name.
    pub async fn name(&self) -> Result<String> {
        let data = self.request_characteristic(&DEVICE_NAME_UUID).await?;
        codec::decode_ascii(&data)
    }
}

#[async_trait]
impl CoolerDevice for Ooler {
    async fn open(&self) -> Result<()> {
        self.connect().await
    }

    async fn close(&self) -> Result<()> {
        self.disconnect().await
    }

    async fn powered_on(&self) -> Result<bool> {
        Ooler::powered_on(self).await
    }

    async fn set_power_state(&self, on: bool) -> Result<bool> {
        Ooler::set_power_state(self, on).await
    }

    async fn desired_temperature_f(&self) -> Result<u8> {
        Ooler::desired_temperature_f(self).await
    }

    async fn set_desired_temperature_f(&self, deg_f: u8) -> Result<u8> {
        Ooler::set_desired_temperature_f(self, deg_f).await
    }

    async fn fan_speed(&self) -> Result<FanSpeed> {
        Ooler::fan_speed(self).await
    }

    async fn set_fan_speed(&self, speed: FanSpeed) -> Result<FanSpeed> {
        Ooler::set_fan_speed(self, speed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn address() -> BDAddr {
        BDAddr::from_str("AA:BB:CC:DD:EE:FF").unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let ooler = Ooler::new(address());
        assert_eq!(ooler.address(), address());
        assert_eq!(ooler.scan_timeout, Ooler::DEFAULT_SCAN_TIMEOUT);
        assert!(ooler.stay_connected);
        assert_eq!(ooler.connection_state(), ConnectionState::Disconnected);
        assert!(!ooler.is_connected());
    }

    #[test]
    fn test_builder() {
        let ooler = Ooler::new(address())
            .with_scan_timeout(Duration::from_secs(3))
            .stay_connected(false);
        assert_eq!(ooler.scan_timeout, Duration::from_secs(3));
        assert!(!ooler.stay_connected);
    }

    #[tokio::test]
    async fn test_disconnect_without_session_is_noop() {
        let ooler = Ooler::new(address());
        assert!(ooler.disconnect().await.is_ok());
        assert!(CoolerDevice::close(&ooler).await.is_ok());
    }

    #[tokio::test]
    async fn test_set_celsius_out_of_range_is_rejected_before_io() {
        let ooler = Ooler::new(address());
        let err = ooler.set_desired_temperature_c(200).await.unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
        assert!(!ooler.is_connected());
    }
}
