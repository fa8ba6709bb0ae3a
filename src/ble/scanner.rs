//! BLE scanning functionality.
//!
//! Locates the peripheral that carries a given hardware address.

use btleplug::api::{BDAddr, Central, CentralEvent, Manager as _, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Manager, Peripheral};
use futures::stream::StreamExt;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::error::{Error, Result};

/// BLE scanner for finding a device by address.
pub struct BleScanner {
    /// The BLE adapter to use for scanning.
    adapter: Adapter,
}

impl BleScanner {
    /// Create a new BLE scanner on the first available adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if Bluetooth is not available.
    pub async fn new() -> Result<Self> {
        let manager = Manager::new()
            .await
            .map_err(|_e| Error::BluetoothUnavailable)?;

        let adapters = manager.adapters().await.map_err(Error::Bluetooth)?;

        let adapter = adapters
            .into_iter()
            .next()
            .ok_or(Error::BluetoothUnavailable)?;

        debug!(
            "Using Bluetooth adapter: {:?}",
            adapter.adapter_info().await.ok()
        );

        Ok(Self { adapter })
    }

    /// Find the peripheral with `address`, scanning for at most `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DeviceNotFound`] if nothing with that address
    /// advertises before the timeout elapses.
    pub async fn find(&self, address: BDAddr, timeout: Duration) -> Result<Peripheral> {
        if let Some(peripheral) = self.known_peripheral(address).await? {
            debug!("{} already known to the adapter", address);
            return Ok(peripheral);
        }

        // Subscribe before scanning so no discovery event is missed
        let mut events = self.adapter.events().await.map_err(Error::Bluetooth)?;

        info!("Scanning for {} (timeout {:?})", address, timeout);
        self.adapter
            .start_scan(ScanFilter::default())
            .await
            .map_err(Error::Bluetooth)?;

        let search = async {
            while let Some(event) = events.next().await {
                let id = match event {
                    CentralEvent::DeviceDiscovered(id) | CentralEvent::DeviceUpdated(id) => id,
                    _ => continue,
                };

                let peripheral = match self.adapter.peripheral(&id).await {
                    Ok(peripheral) => peripheral,
                    Err(e) => {
                        trace!("Ignoring peripheral {:?}: {}", id, e);
                        continue;
                    }
                };

                if peripheral.address() == address {
                    return Some(peripheral);
                }
            }
            None
        };

        let found = tokio::time::timeout(timeout, search).await.ok().flatten();

        if let Err(e) = self.adapter.stop_scan().await {
            warn!("Failed to stop scan: {}", e);
        }

        found.ok_or_else(|| Error::DeviceNotFound {
            address: address.to_string(),
        })
    }

    async fn known_peripheral(&self, address: BDAddr) -> Result<Option<Peripheral>> {
        let peripherals = self.adapter.peripherals().await.map_err(Error::Bluetooth)?;

        Ok(peripherals.into_iter().find(|p| p.address() == address))
    }
}
