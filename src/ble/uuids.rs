//! BLE Characteristic UUIDs.
//!
//! Contains the UUID constants of the Ooler GATT profile.

use uuid::Uuid;

/// Desired (target) temperature in °F (Read, Write).
pub const TARGET_TEMP_F_UUID: Uuid = Uuid::from_u128(0x6aa46711_a29d_4f8a_88e2_044ca1fd03ff);
/// Measured water temperature in °F (Read).
pub const ACTUAL_TEMP_F_UUID: Uuid = Uuid::from_u128(0xe8ebded3_9dca_45c2_a2d8_ceffb901474d);
/// Fan speed (Read, Write).
pub const FAN_SPEED_UUID: Uuid = Uuid::from_u128(0xcafe2421_d04c_458f_b1c0_253c6c97e8e8);
/// Power status (Read, Write).
pub const POWER_STATUS_UUID: Uuid = Uuid::from_u128(0x7a2623ff_bd92_4c13_be9f_7023aa4ecb85);
/// Warm wake enabled flag.
pub const WARM_WAKE_ENABLED_UUID: Uuid = Uuid::from_u128(0x7aa73db1_1c2d_4c8c_9195_36c0a4b6acb2);
/// Relative humidity.
pub const RELATIVE_HUMIDITY_UUID: Uuid = Uuid::from_u128(0x654b8162_7090_4084_8d94_4eb33e917e9c);
/// Ambient temperature in °F.
pub const AMBIENT_TEMP_F_UUID: Uuid = Uuid::from_u128(0x7c0ea228_2616_4765_a726_beb5f4a0fa71);
/// Water level (Read).
pub const WATER_LEVEL_UUID: Uuid = Uuid::from_u128(0x8db5b9db_dbf6_47e6_a9dd_0612a1349a5b);
/// Serial number.
pub const SERIAL_NUMBER_UUID: Uuid = Uuid::from_u128(0x136e24c6_c486_4a74_bb0a_d18b985970a6);

/// Standard GAP Device Name characteristic UUID.
pub const DEVICE_NAME_UUID: Uuid = Uuid::from_u128(0x0000_2a00_0000_1000_8000_00805f9b34fb);

/// Check if a characteristic UUID belongs to the Ooler vendor profile.
pub fn is_ooler_characteristic(uuid: &Uuid) -> bool {
    [
        TARGET_TEMP_F_UUID,
        ACTUAL_TEMP_F_UUID,
        FAN_SPEED_UUID,
        POWER_STATUS_UUID,
        WARM_WAKE_ENABLED_UUID,
        RELATIVE_HUMIDITY_UUID,
        AMBIENT_TEMP_F_UUID,
        WATER_LEVEL_UUID,
        SERIAL_NUMBER_UUID,
    ]
    .contains(uuid)
}
