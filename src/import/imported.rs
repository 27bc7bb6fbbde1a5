//! Readers that present a single imported key as a one-version store.

use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::crypto::web64;
use crate::error::Result;
use crate::format::{
    AesKeyJson, CipherMode, HmacKeyJson, KeyMeta, KeyPurpose, KeyType, RsaPrivateKeyJson,
    RsaPublicKeyJson,
};
use crate::reader::{KeyReader, sealed};

fn encode_uint(value: &BigUint) -> String {
    web64::encode(&value.to_bytes_be())
}

fn rsa_public_json(key: &impl PublicKeyParts) -> RsaPublicKeyJson {
    RsaPublicKeyJson {
        modulus: encode_uint(key.n()),
        public_exponent: encode_uint(key.e()),
        size: key.n().bits(),
    }
}

// d mod (prime - 1), for keys built without precomputation.
fn crt_exponent(precomputed: Option<&BigUint>, d: &BigUint, prime: &BigUint) -> BigUint {
    precomputed
        .cloned()
        .unwrap_or_else(|| d % (prime - BigUint::from(1u8)))
}

/// Reader over one imported RSA private key.
pub struct ImportedRsaPrivateKeyReader {
    meta: KeyMeta,
    key: RsaPrivateKeyJson,
}

impl ImportedRsaPrivateKeyReader {
    pub const NAME: &'static str = "Imported RSA Private Key";

    pub fn new(key: &RsaPrivateKey, purpose: KeyPurpose) -> Self {
        // RsaPrivateKey always holds at least two primes.
        let (p, q) = (&key.primes()[0], &key.primes()[1]);
        let d = key.d();

        let dp = crt_exponent(key.dp(), d, p);
        let dq = crt_exponent(key.dq(), d, q);
        let qinv = key.crt_coefficient().unwrap_or_default();

        Self {
            meta: KeyMeta::imported(Self::NAME, KeyType::RsaPriv, purpose),
            key: RsaPrivateKeyJson {
                crt_coefficient: encode_uint(&qinv),
                prime_exponent_p: encode_uint(&dp),
                prime_exponent_q: encode_uint(&dq),
                prime_p: encode_uint(p),
                prime_q: encode_uint(q),
                private_exponent: encode_uint(d),
                public_key: rsa_public_json(key),
                size: key.n().bits(),
            },
        }
    }
}

impl sealed::Sealed for ImportedRsaPrivateKeyReader {}

impl KeyReader for ImportedRsaPrivateKeyReader {
    fn metadata(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.meta)?)
    }

    fn key(&self, _version: u32) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(serde_json::to_string(&self.key)?))
    }
}

/// Reader over one imported RSA public key.
pub struct ImportedRsaPublicKeyReader {
    meta: KeyMeta,
    key: RsaPublicKeyJson,
}

impl ImportedRsaPublicKeyReader {
    pub const NAME: &'static str = "Imported RSA Public Key";

    pub fn new(key: &RsaPublicKey, purpose: KeyPurpose) -> Self {
        Self {
            meta: KeyMeta::imported(Self::NAME, KeyType::RsaPub, purpose),
            key: rsa_public_json(key),
        }
    }
}

impl sealed::Sealed for ImportedRsaPublicKeyReader {}

impl KeyReader for ImportedRsaPublicKeyReader {
    fn metadata(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.meta)?)
    }

    fn key(&self, _version: u32) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(serde_json::to_string(&self.key)?))
    }
}

/// Raw AES key with its companion HMAC key.
pub struct AesKey {
    key: Zeroizing<Vec<u8>>,
    hmac_key: Zeroizing<Vec<u8>>,
}

impl AesKey {
    pub fn new(key: &[u8], hmac_key: &[u8]) -> Self {
        Self {
            key: Zeroizing::new(key.to_vec()),
            hmac_key: Zeroizing::new(hmac_key.to_vec()),
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn hmac_key(&self) -> &[u8] {
        &self.hmac_key
    }
}

/// Reader over one imported AES key, always for encryption and decryption.
pub struct ImportedAesKeyReader {
    meta: KeyMeta,
    key: AesKeyJson,
}

impl ImportedAesKeyReader {
    pub const NAME: &'static str = "Imported AES Key";

    pub fn new(key: &AesKey) -> Self {
        Self {
            meta: KeyMeta::imported(Self::NAME, KeyType::Aes, KeyPurpose::DecryptAndEncrypt),
            key: AesKeyJson {
                aes_key_string: web64::encode(key.key()),
                hmac_key: HmacKeyJson {
                    hmac_key_string: web64::encode(key.hmac_key()),
                    size: key.hmac_key().len() * 8,
                },
                mode: CipherMode::Cbc,
                size: key.key().len() * 8,
            },
        }
    }
}

impl sealed::Sealed for ImportedAesKeyReader {}

impl KeyReader for ImportedAesKeyReader {
    fn metadata(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.meta)?)
    }

    fn key(&self, _version: u32) -> Result<Zeroizing<String>> {
        Ok(Zeroizing::new(serde_json::to_string(&self.key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::KeyStatus;
    use crate::import::rsa_private_key_from_pem;

    fn decode_uint(text: &str) -> BigUint {
        BigUint::from_bytes_be(&web64::decode("test", text).unwrap())
    }

    fn fixture_key() -> RsaPrivateKey {
        rsa_private_key_from_pem("tests/data/rsa_private.pem").unwrap()
    }

    #[test]
    fn private_metadata_is_fabricated() {
        let reader = ImportedRsaPrivateKeyReader::new(&fixture_key(), KeyPurpose::SignAndVerify);
        let meta: KeyMeta = serde_json::from_str(&reader.metadata().unwrap()).unwrap();

        assert_eq!(meta.name, "Imported RSA Private Key");
        assert_eq!(meta.key_type, KeyType::RsaPriv);
        assert_eq!(meta.purpose, KeyPurpose::SignAndVerify);
        assert!(!meta.encrypted);
        assert_eq!(meta.versions.len(), 1);
        assert_eq!(meta.versions[0].version_number, 1);
        assert_eq!(meta.versions[0].status, KeyStatus::Primary);
        assert!(!meta.versions[0].exportable);
    }

    #[test]
    fn private_key_fields_decode_to_key_values() {
        let key = fixture_key();
        let reader = ImportedRsaPrivateKeyReader::new(&key, KeyPurpose::DecryptAndEncrypt);
        let json: RsaPrivateKeyJson = serde_json::from_str(&reader.key(1).unwrap()).unwrap();

        assert_eq!(
            web64::decode("modulus", &json.public_key.modulus).unwrap(),
            key.n().to_bytes_be()
        );
        assert_eq!(json.public_key.public_exponent, "AQAB");
        assert_eq!(json.public_key.size, 1024);
        assert_eq!(json.size, 1024);
        assert_eq!(&decode_uint(&json.prime_p), &key.primes()[0]);
        assert_eq!(&decode_uint(&json.prime_q), &key.primes()[1]);
        assert_eq!(&decode_uint(&json.private_exponent), key.d());
        assert_eq!(Some(&decode_uint(&json.prime_exponent_p)), key.dp());
        assert_eq!(Some(&decode_uint(&json.prime_exponent_q)), key.dq());
        assert_eq!(Some(decode_uint(&json.crt_coefficient)), key.crt_coefficient());
    }

    #[test]
    fn crt_values_rebuild_the_key() {
        let key = fixture_key();
        let reader = ImportedRsaPrivateKeyReader::new(&key, KeyPurpose::SignAndVerify);
        let json: RsaPrivateKeyJson = serde_json::from_str(&reader.key(1).unwrap()).unwrap();

        let rebuilt = RsaPrivateKey::from_components(
            decode_uint(&json.public_key.modulus),
            decode_uint(&json.public_key.public_exponent),
            decode_uint(&json.private_exponent),
            vec![decode_uint(&json.prime_p), decode_uint(&json.prime_q)],
        )
        .unwrap();
        assert_eq!(rebuilt, key);
    }

    #[test]
    fn version_argument_is_ignored() {
        let reader = ImportedRsaPrivateKeyReader::new(&fixture_key(), KeyPurpose::SignAndVerify);
        assert_eq!(*reader.key(1).unwrap(), *reader.key(42).unwrap());
    }

    #[test]
    fn public_reader_has_two_fields() {
        let public = fixture_key().to_public_key();
        let reader = ImportedRsaPublicKeyReader::new(&public, KeyPurpose::Verify);

        let meta: KeyMeta = serde_json::from_str(&reader.metadata().unwrap()).unwrap();
        assert_eq!(meta.name, "Imported RSA Public Key");
        assert_eq!(meta.key_type, KeyType::RsaPub);
        assert_eq!(meta.purpose, KeyPurpose::Verify);

        let value: serde_json::Value = serde_json::from_str(&reader.key(1).unwrap()).unwrap();
        assert_eq!(value["publicExponent"], "AQAB");
        assert_eq!(
            web64::decode("modulus", value["modulus"].as_str().unwrap()).unwrap(),
            public.n().to_bytes_be()
        );
    }

    #[test]
    fn aes_reader_reports_bit_sizes() {
        let key = AesKey::new(&[1u8; 16], &[2u8; 20]);
        let reader = ImportedAesKeyReader::new(&key);

        let json: AesKeyJson = serde_json::from_str(&reader.key(1).unwrap()).unwrap();
        assert_eq!(json.size, 128);
        assert_eq!(json.hmac_key.size, 160);
        assert_eq!(json.mode, CipherMode::Cbc);
        assert_eq!(web64::decode("aesKeyString", &json.aes_key_string).unwrap(), [1u8; 16]);
        assert_eq!(
            web64::decode("hmacKeyString", &json.hmac_key.hmac_key_string).unwrap(),
            [2u8; 20]
        );
    }

    #[test]
    fn aes_metadata_is_fixed() {
        let reader = ImportedAesKeyReader::new(&AesKey::new(&[0u8; 32], &[0u8; 32]));
        assert_eq!(
            reader.metadata().unwrap(),
            r#"{"name":"Imported AES Key","type":"AES","purpose":"DECRYPT_AND_ENCRYPT","encrypted":false,"versions":[{"versionNumber":1,"status":"PRIMARY","exportable":false}]}"#
        );
    }

    #[test]
    fn imported_store_reads_like_plain_store() {
        let stored = std::fs::read_to_string("tests/data/plain_store/1").unwrap();
        let key = AesKey::new(
            &(0u8..16).collect::<Vec<_>>(),
            &(100u8..120).collect::<Vec<_>>(),
        );

        let reader = ImportedAesKeyReader::new(&key);
        assert_eq!(*reader.key(1).unwrap(), stored);
    }
}
