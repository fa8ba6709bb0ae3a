//! Data structures for device state.

pub mod fan_speed;

pub use fan_speed::FanSpeed;
