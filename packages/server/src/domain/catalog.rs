//! Payment method catalog.
//!
//! The catalog is fixed for the lifetime of the process. Display state such
//! as "connected" or "disabled" is never stored here; clients derive it.

use serde::{Deserialize, Serialize};

use super::{error::ValueObjectError, value_object::MethodId};

/// One predefined payment method option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, e.g. `binance`
    pub id: MethodId,
    /// Human readable name
    pub label: String,
    /// Placeholder shown in the address editor
    pub address_hint: String,
}

impl CatalogEntry {
    /// Create a new catalog entry
    pub fn new(id: MethodId, label: impl Into<String>, address_hint: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            address_hint: address_hint.into(),
        }
    }
}

/// Ordered, immutable list of payment methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

const DEFAULT_ENTRIES: [(&str, &str); 4] = [
    ("binance", "Binance"),
    ("kucoin", "KuCoin"),
    ("trustwallet", "Trust Wallet"),
    ("upi", "UPI"),
];

impl Catalog {
    /// Build a catalog from entries. Later duplicates of an id are dropped.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().all(|e| e.id != entry.id) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// All entries in display order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: &MethodId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Whether `id` is offered by this catalog
    pub fn contains(&self, id: &MethodId) -> bool {
        self.get(id).is_some()
    }

    /// Parse raw input into a MethodId that is known to this catalog.
    ///
    /// # Errors
    ///
    /// `MethodIdEmpty` for blank input, `UnknownMethod` for ids outside the catalog
    pub fn resolve(&self, raw: &str) -> Result<MethodId, ValueObjectError> {
        let id = MethodId::try_from(raw)?;
        if !self.contains(&id) {
            return Err(ValueObjectError::UnknownMethod(id.into_string()));
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .filter_map(|(id, label)| {
                let method_id = MethodId::try_from(*id).ok()?;
                Some(CatalogEntry::new(
                    method_id,
                    *label,
                    format!("Enter {label} address"),
                ))
            })
            .collect();
        Self::new(entries)
    }
}
