//! Cryptographic primitives for password-protected keys.
//!
//! Provides web-safe base64, PBKDF2 key derivation and AES-CBC decryption.

pub mod aes_cbc;
pub mod kdf;
pub mod web64;

pub use aes_cbc::decrypt;
pub use kdf::derive_key;

/// Length of the derived PBE key (16 bytes / 128 bits).
pub const KEY_LEN: usize = 128 / 8;
/// Length of the AES block and CBC initialization vector (16 bytes).
pub const BLOCK_LEN: usize = 16;
