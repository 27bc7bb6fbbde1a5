//! Key material records, one shape per key type.
//!
//! Every binary value is web-safe base64; RSA integers are big-endian and
//! unsigned with no leading zero bytes.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsaPublicKeyJson {
    pub modulus: String,
    pub public_exponent: String,
    /// Modulus length in bits.
    pub size: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsaPrivateKeyJson {
    pub crt_coefficient: String,
    pub prime_exponent_p: String,
    pub prime_exponent_q: String,
    pub prime_p: String,
    pub prime_q: String,
    pub private_exponent: String,
    pub public_key: RsaPublicKeyJson,
    pub size: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CipherMode {
    Cbc,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HmacKeyJson {
    pub hmac_key_string: String,
    /// Key length in bits.
    pub size: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AesKeyJson {
    pub aes_key_string: String,
    pub hmac_key: HmacKeyJson,
    pub mode: CipherMode,
    /// Key length in bits.
    pub size: usize,
}

impl Drop for RsaPrivateKeyJson {
    fn drop(&mut self) {
        self.crt_coefficient.zeroize();
        self.prime_exponent_p.zeroize();
        self.prime_exponent_q.zeroize();
        self.prime_p.zeroize();
        self.prime_q.zeroize();
        self.private_exponent.zeroize();
    }
}

impl Drop for AesKeyJson {
    fn drop(&mut self) {
        self.aes_key_string.zeroize();
        self.hmac_key.hmac_key_string.zeroize();
    }
}
