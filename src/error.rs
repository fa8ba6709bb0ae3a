//! Error types for the ooler-ctrl crate.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Bluetooth-related error from the underlying BLE library.
    #[error("Bluetooth error: {0}")]
    Bluetooth(#[from] btleplug::Error),

    /// Bluetooth is not available or is disabled on this system.
    #[error("Bluetooth not available or disabled")]
    BluetoothUnavailable,

    /// No device with the requested address showed up while scanning.
    #[error("Device not found: {address}")]
    DeviceNotFound {
        /// The address that was searched for.
        address: String,
    },

    /// Operation requires a connection but the device is not connected.
    #[error("Device not connected")]
    NotConnected,

    /// Failed to establish a connection to the device.
    #[error("Connection failed: {reason}")]
    ConnectionFailed {
        /// Description of why the connection failed.
        reason: String,
    },

    /// Invalid data was received from the device.
    #[error("Invalid data received: {context}")]
    InvalidData {
        /// Description of what was invalid about the data.
        context: String,
    },

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// The name of the parameter.
        name: String,
        /// The invalid value that was provided.
        value: String,
    },

    /// Characteristic not found on the device.
    #[error("Characteristic not found: {uuid}")]
    CharacteristicNotFound {
        /// The UUID of the characteristic that was not found.
        uuid: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Combine an operation's result with the result of the cleanup that follows it.
///
/// A failed operation keeps its own error; the cleanup error is only logged.
/// A successful operation reports the cleanup error, if any.
pub(crate) fn after_cleanup<T>(result: Result<T>, cleanup: Result<()>, what: &str) -> Result<T> {
    match (result, cleanup) {
        (result, Ok(())) => result,
        (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
        (Err(err), Err(cleanup_err)) => {
            tracing::warn!("Failed to {}: {}", what, cleanup_err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DeviceNotFound {
            address: "AA:BB:CC:DD:EE:FF".to_string(),
        };
        assert_eq!(err.to_string(), "Device not found: AA:BB:CC:DD:EE:FF");

        let err = Error::InvalidData {
            context: "empty payload".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid data received: empty payload");
    }

    #[test]
    fn test_after_cleanup_keeps_operation_error() {
        let result: Result<u8> = after_cleanup(
            Err(Error::CharacteristicNotFound {
                uuid: "7a2623ff-bd92-4c13-be9f-7023aa4ecb85".to_string(),
            }),
            Err(Error::NotConnected),
            "disconnect",
        );
        assert!(matches!(result, Err(Error::CharacteristicNotFound { .. })));
    }

    #[test]
    fn test_after_cleanup_reports_cleanup_error_after_success() {
        let result = after_cleanup(Ok(72u8), Err(Error::NotConnected), "disconnect");
        assert!(matches!(result, Err(Error::NotConnected)));

        let result = after_cleanup(Ok(72u8), Ok(()), "disconnect");
        assert_eq!(result.unwrap(), 72);
    }
}
