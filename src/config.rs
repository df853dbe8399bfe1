//! Planner configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at
//! all) yields the standard setup.

use crate::catalog::EquipmentSlotKind;
use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key for the persisted price ledger.
pub const DEFAULT_PRICES_KEY: &str = "ti_item_prices";

/// Storage key for the persisted stock ledger.
pub const DEFAULT_STOCK_KEY: &str = "ti_item_stock";

/// Settings for an [`ImbuementStore`](crate::store::ImbuementStore).
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::{EquipmentSlotKind, PlannerConfig};
///
/// let config = PlannerConfig::from_json(r#"{ "initial_slots": { "Weapon": 1 } }"#).unwrap();
/// assert_eq!(config.prices_key, "ti_item_prices");
/// assert_eq!(config.initial_slot_quantity(EquipmentSlotKind::Weapon), 1);
/// assert_eq!(config.initial_slot_quantity(EquipmentSlotKind::Armor), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub prices_key: String,
    pub stock_key: String,
    /// Starting slot quantity per equipment kind, clamped to the kind's
    /// maximum. Kinds not listed use the standard value.
    pub initial_slots: BTreeMap<EquipmentSlotKind, usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            prices_key: DEFAULT_PRICES_KEY.to_string(),
            stock_key: DEFAULT_STOCK_KEY.to_string(),
            initial_slots: BTreeMap::new(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(raw: &str) -> Result<Self, PlannerError> {
        serde_json::from_str(raw).map_err(|e| PlannerError::Config(e.to_string()))
    }

    /// Starting slot quantity for `kind`, before clamping.
    pub fn initial_slot_quantity(&self, kind: EquipmentSlotKind) -> usize {
        self.initial_slots
            .get(&kind)
            .copied()
            .unwrap_or_else(|| standard_initial_slots(kind))
    }
}

fn standard_initial_slots(kind: EquipmentSlotKind) -> usize {
    match kind {
        EquipmentSlotKind::Helmet => 2,
        EquipmentSlotKind::Armor => 3,
        EquipmentSlotKind::Weapon => 3,
        EquipmentSlotKind::Shield => 1,
        EquipmentSlotKind::Boots => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PlannerConfig::from_json("{}").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_custom_keys() {
        let config = PlannerConfig::from_json(r#"{"prices_key": "p", "stock_key": "s"}"#).unwrap();
        assert_eq!(config.prices_key, "p");
        assert_eq!(config.stock_key, "s");
    }

    #[test]
    fn test_invalid_json() {
        let err = PlannerConfig::from_json("{\"initial_slots\": 3}").unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }
}
