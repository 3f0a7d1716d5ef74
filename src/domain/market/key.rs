//! Country market key: `bytes32` Keccak-256 of the market label.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::CountryKeyError;

/// Fixed-width on-chain identifier of a country market.
///
/// Derived as `keccak256(utf8(label))`, the same key the trading contract's
/// `openLongPosition`/`openShortPosition` expect. One-way: reverse lookups
/// go through [`CountryRegistry`](super::CountryRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CountryKey([u8; 32]);

impl CountryKey {
    /// Derive the key for a market label.
    pub fn encode(label: &str) -> Result<Self, CountryKeyError> {
        if label.is_empty() {
            return Err(CountryKeyError::InvalidLabel);
        }
        Ok(Self(Keccak256::digest(label.as_bytes()).into()))
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Display for CountryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for CountryKey {
    type Err = CountryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| CountryKeyError::InvalidHex {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| CountryKeyError::InvalidHex {
                input: s.to_string(),
                reason: format!("expected 32 bytes, got {}", v.len()),
            })?;
        Ok(Self(bytes))
    }
}

impl Serialize for CountryKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CountryKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CountryKey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDONESIA: &str = "0x63fabda9ae7fde4f245219d60a5c30b62e77284bbee577fc53c4ae3e3e6c5738";

    #[test]
    fn test_encode_known_vector() {
        assert_eq!(CountryKey::encode("Indonesia").unwrap().to_hex(), INDONESIA);
        assert_eq!(
            CountryKey::encode("hello").unwrap().to_string(),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = CountryKey::encode("Indonesia").unwrap();
        let b = CountryKey::encode("Indonesia").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, CountryKey::encode("indonesia").unwrap());
    }

    #[test]
    fn test_encode_empty_rejected() {
        assert_eq!(CountryKey::encode(""), Err(CountryKeyError::InvalidLabel));
    }

    #[test]
    fn test_parse_hex() {
        let key: CountryKey = INDONESIA.parse().unwrap();
        assert_eq!(key, CountryKey::encode("Indonesia").unwrap());
        let bare: CountryKey = INDONESIA.trim_start_matches("0x").parse().unwrap();
        assert_eq!(bare, key);
    }

    #[test]
    fn test_parse_rejects_wrong_length_and_garbage() {
        assert!(matches!(
            "0x1234".parse::<CountryKey>(),
            Err(CountryKeyError::InvalidHex { .. })
        ));
        assert!(matches!(
            "0xzz".parse::<CountryKey>(),
            Err(CountryKeyError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let key = CountryKey::encode("Indonesia").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", INDONESIA));
        let back: CountryKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
