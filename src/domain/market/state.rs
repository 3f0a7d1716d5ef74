//! Country registry lookup table: app-owned, filled from `getAllCountries()`.

use super::{Country, CountryKey};
use std::collections::BTreeMap;

/// Reverse lookup from market key to registry entry.
///
/// Keys are one-way hashes, so the only way back to a name is a table built
/// from what the registry contract reports.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    countries: BTreeMap<CountryKey, Country>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table with a fresh registry listing.
    pub fn replace(&mut self, countries: Vec<Country>) {
        self.countries = countries.into_iter().map(|c| (c.key, c)).collect();
    }

    /// Insert or update one entry, returning the previous one.
    pub fn upsert(&mut self, country: Country) -> Option<Country> {
        self.countries.insert(country.key, country)
    }

    pub fn get(&self, key: &CountryKey) -> Option<&Country> {
        self.countries.get(key)
    }

    /// Display name for a key, if the registry knows it.
    pub fn name_of(&self, key: &CountryKey) -> Option<&str> {
        self.get(key).map(|c| c.name.as_str())
    }

    /// Find an entry by the label its key was derived from.
    pub fn find_by_label(&self, label: &str) -> Option<&Country> {
        CountryKey::encode(label).ok().and_then(|k| self.get(&k))
    }

    /// Entries currently open for trading.
    pub fn active(&self) -> impl Iterator<Item = &Country> {
        self.countries.values().filter(|c| c.is_active)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
