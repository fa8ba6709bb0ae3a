//! Protocol module for encoding and decoding characteristic values.

pub mod codec;

pub use codec::{decode_ascii, decode_bool, decode_u8, decode_uint, encode_bool, encode_u8};
