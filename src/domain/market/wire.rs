//! Wire types for the country registry contract.

use serde::{Deserialize, Serialize};

/// One element of `getAllCountries()` / the return of `getCountry(bytes32)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTuple {
    /// `bytes32` as `0x`-prefixed hex.
    pub country_code: String,
    pub name: String,
    pub price_feed: String,
    pub is_active: bool,
}
