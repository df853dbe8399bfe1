//! Item ledgers.
//!
//! A `Ledger` maps items to a non-negative number. The store keeps two:
//! unit prices in gold and owned stock. Both are persisted as JSON
//! objects keyed by item display name, and both accept partial
//! snapshots on load: known keys overlay the current value, everything
//! else stays as it was.

use crate::data;
use crate::error::SnapshotError;
use crate::item::Item;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A mutable `item -> value` mapping. Absent items read as zero.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::{Item, Ledger};
///
/// let mut prices = Ledger::default_prices();
/// assert_eq!(prices.get(Item::VampireTeeth), 1_500);
///
/// prices.set(Item::VampireTeeth, 2_000);
/// assert_eq!(prices.get(Item::VampireTeeth), 2_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    values: BTreeMap<Item, u64>,
}

/// Unit gold price per item.
pub type PriceLedger = Ledger;

/// Owned quantity per item.
pub type StockLedger = Ledger;

impl Ledger {
    /// Create an empty ledger; every item reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prices from the standard market table.
    pub fn default_prices() -> PriceLedger {
        data::default_prices().into_iter().collect()
    }

    /// Zero stock for every catalog item.
    pub fn empty_stock() -> StockLedger {
        Item::ALL.into_iter().map(|item| (item, 0)).collect()
    }

    /// Value recorded for `item`, or zero if none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imbuement_planner::{Item, Ledger};
    ///
    /// let stock = Ledger::new();
    /// assert_eq!(stock.get(Item::RopeBelt), 0);
    /// ```
    pub fn get(&self, item: Item) -> u64 {
        self.values.get(&item).copied().unwrap_or(0)
    }

    /// Record `value` for `item`, replacing any previous value.
    pub fn set(&mut self, item: Item, value: u64) {
        self.values.insert(item, value);
    }

    /// Entries in item order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, u64)> + '_ {
        self.values.iter().map(|(&item, &value)| (item, value))
    }

    /// Serialize as a JSON object keyed by item name.
    pub fn to_snapshot(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .values
            .iter()
            .map(|(item, value)| (item.name().to_string(), (*value).into()))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    /// Overlay a persisted snapshot.
    ///
    /// The whole snapshot is rejected if it is not a JSON object. Inside
    /// an object, entries with unknown item names or values that are not
    /// non-negative integers are skipped individually. Returns the number
    /// of entries applied.
    pub fn merge_snapshot(&mut self, key: &str, raw: &str) -> Result<usize, SnapshotError> {
        let parsed: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| SnapshotError::Malformed {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        let serde_json::Value::Object(entries) = parsed else {
            return Err(SnapshotError::NotAnObject(key.to_string()));
        };

        let mut applied = 0;
        for (name, value) in entries {
            let Ok(item) = name.parse::<Item>() else {
                debug!(key, item = %name, "skipping unknown item in snapshot");
                continue;
            };
            match value.as_u64() {
                Some(v) => {
                    self.values.insert(item, v);
                    applied += 1;
                }
                None => warn!(key, %item, %value, "skipping non-integer snapshot value"),
            }
        }
        Ok(applied)
    }
}

impl FromIterator<(Item, u64)> for Ledger {
    fn from_iter<T: IntoIterator<Item = (Item, u64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
