//! # imbuement-planner - Deterministic Imbuement Cost Planner
//!
//! A planning engine for equipment imbuements that provides:
//! - **Deterministic** aggregation (same selections and ledgers → same output)
//! - **Cumulative** recipes (higher tiers carry every lower-tier material)
//! - **Targeted** repricing (a price change rebuilds only dependent imbuements)
//! - **Pluggable** persistence of prices and stock
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! ```text
//! [Catalog] + [PriceLedger] → build() → [Imbuement] → aggregate() → [Aggregate]
//! ```
//!
//! 1. **Catalog** holds immutable recipes, fees and slot limits
//! 2. **Imbuements** are priced records, rebuilt whenever an input changes
//! 3. **ImbuementStore** owns slot selections and ledgers and keeps them consistent
//! 4. **Aggregate** sums costs, consolidates materials and subtracts stock
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use imbuement_planner::catalog::build_catalog;
//! use imbuement_planner::storage::MemoryStorage;
//! use imbuement_planner::*;
//!
//! let mut store = ImbuementStore::new(Arc::new(build_catalog()), MemoryStorage::new());
//!
//! store.set_imbuement(EquipmentSlotKind::Helmet, 0, PowerTier::Basic, ImbuementType::Vampirism)?;
//! // Vampirism moves to the armor; the helmet slot is cleared.
//! store.set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)?;
//!
//! let summary = store.aggregate();
//! assert_eq!(summary.grand_total, 52_500); // 25 * 1500 + 5000 + 10000
//! assert!(store.slot(EquipmentSlotKind::Helmet).imbuements()[0].is_none());
//! # Ok::<(), PlannerError>(())
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Tiers, types, slots, recipes and fees
//! - [`item`] - Item identifiers
//! - [`ledger`] - Price and stock ledgers
//! - [`imbuement`] - The imbuement factory
//! - [`store`] - Slot assignments and mutation operations
//! - [`aggregate`] - Totals and consolidated needs
//! - [`graph`] - Item to imbuement price dependencies
//! - [`storage`] - Persistence backends
//! - [`config`] - Planner configuration
//! - [`error`] - Error types

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod gold;
pub mod graph;
pub mod imbuement;
pub mod item;
pub mod ledger;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use aggregate::{aggregate, item_overview, Aggregate, CostGroup, ItemRow, NetRequirement};
pub use catalog::{
    build_catalog, Catalog, EquipmentSlotKind, FixedFee, ImbuementType, ItemQuantity, PowerTier,
};
pub use config::PlannerConfig;
pub use error::{PlannerError, StorageError};
pub use gold::{format_gold, Gold};
pub use imbuement::Imbuement;
pub use item::{Item, Quantity};
pub use ledger::{Ledger, PriceLedger, StockLedger};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ImbuementStore, SlotAssignment};
