//! Market domain: country markets, their on-chain keys, registry lookup.

mod convert;
pub mod key;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use key::CountryKey;
pub use state::CountryRegistry;

// ─── Country ─────────────────────────────────────────────────────────────────

/// A validated registry entry for one country market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub key: CountryKey,
    pub name: String,
    /// Price feed contract address, `0x`-prefixed lowercase hex.
    pub price_feed: String,
    pub is_active: bool,
}

impl Country {
    /// Two-letter badge shown next to the market name.
    pub fn short_code(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    InvalidKey(crate::error::CountryKeyError),
    NameMissing,
    InvalidPriceFeed(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(code, errors) => {
                writeln!(f, "Country validation errors ({code}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidKey(err) => write!(f, "Key: {}", err),
            ValidationError::NameMissing => write!(f, "Missing name"),
            ValidationError::InvalidPriceFeed(addr) => write!(f, "Invalid price feed '{}'", addr),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::InvalidKey(e) => Some(e),
            _ => None,
        }
    }
}
