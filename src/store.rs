//! Slot assignment store module.
//!
//! Provides `ImbuementStore`, the single owner of the planner's mutable
//! state: which imbuement sits in which equipment slot, plus the price
//! and stock ledgers. All edits go through its operations so that
//!
//! - a non-empty imbuement type is held by at most one slot position,
//! - every stored `Imbuement` is priced against the current ledger, and
//! - the consolidated items-needed list matches the current selections.
//!
//! Ledger edits are written through to an injected [`Storage`].

use crate::aggregate::{self, Aggregate};
use crate::catalog::{Catalog, EquipmentSlotKind, ImbuementType, ItemQuantity, PowerTier};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::gold::Gold;
use crate::imbuement::{self, Imbuement};
use crate::item::{Item, Quantity};
use crate::ledger::{Ledger, PriceLedger, StockLedger};
use crate::storage::{MemoryStorage, Storage};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Ordered imbuements for one equipment slot kind.
///
/// The length is the configured slot quantity; empty positions hold
/// `None` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAssignment {
    imbuements: Vec<Imbuement>,
}

impl SlotAssignment {
    /// Imbuements in position order, placeholders included.
    pub fn imbuements(&self) -> &[Imbuement] {
        &self.imbuements
    }

    /// Number of positions currently configured.
    pub fn slot_quantity(&self) -> usize {
        self.imbuements.len()
    }

    pub fn get(&self, index: usize) -> Option<&Imbuement> {
        self.imbuements.get(index)
    }
}

/// The planner's mutable state and its mutation operations.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use imbuement_planner::catalog::build_catalog;
/// use imbuement_planner::storage::MemoryStorage;
/// use imbuement_planner::*;
///
/// let mut store = ImbuementStore::new(Arc::new(build_catalog()), MemoryStorage::new());
/// store
///     .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
///     .unwrap();
///
/// let summary = store.aggregate();
/// assert_eq!(summary.grand_total, 52_500);
/// assert_eq!(store.items_needed()[0].quantity, 25);
/// ```
pub struct ImbuementStore<S: Storage = MemoryStorage> {
    catalog: Arc<Catalog>,
    config: PlannerConfig,
    slots: BTreeMap<EquipmentSlotKind, SlotAssignment>,
    prices: PriceLedger,
    stock: StockLedger,
    items_needed: Vec<ItemQuantity>,
    storage: S,
}

impl<S: Storage> ImbuementStore<S> {
    /// Create a store with the default configuration.
    pub fn new(catalog: Arc<Catalog>, storage: S) -> Self {
        Self::with_config(catalog, PlannerConfig::default(), storage)
    }

    /// Create a store with default prices, zero stock and every slot
    /// filled with empty placeholders.
    ///
    /// Persisted state is not read; call
    /// [`load_persisted_state`](Self::load_persisted_state) for that.
    pub fn with_config(catalog: Arc<Catalog>, config: PlannerConfig, storage: S) -> Self {
        let prices = Ledger::default_prices();
        let mut slots = BTreeMap::new();
        for kind in EquipmentSlotKind::ALL {
            let quantity = config
                .initial_slot_quantity(kind)
                .min(catalog.max_slots(kind));
            let imbuements = (0..quantity)
                .map(|_| imbuement::build(&catalog, PowerTier::Basic, ImbuementType::None, &prices))
                .collect();
            slots.insert(kind, SlotAssignment { imbuements });
        }

        Self {
            catalog,
            config,
            slots,
            prices,
            stock: Ledger::empty_stock(),
            items_needed: Vec::new(),
            storage,
        }
    }

    /// The catalog this store prices against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The assignment for one equipment slot kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use imbuement_planner::storage::MemoryStorage;
    /// use imbuement_planner::*;
    ///
    /// let store = ImbuementStore::new(Arc::new(build_catalog()), MemoryStorage::new());
    /// let helmet = store.slot(EquipmentSlotKind::Helmet);
    /// assert_eq!(helmet.slot_quantity(), 2);
    /// assert!(helmet.imbuements().iter().all(Imbuement::is_none));
    /// ```
    pub fn slot(&self, kind: EquipmentSlotKind) -> &SlotAssignment {
        // Every kind is inserted at construction and never removed.
        &self.slots[&kind]
    }

    /// All slot assignments, in equipment order.
    pub fn slots(&self) -> impl Iterator<Item = (EquipmentSlotKind, &SlotAssignment)> {
        self.slots.iter().map(|(&kind, assignment)| (kind, assignment))
    }

    /// Every stored imbuement, placeholders included, in slot order.
    pub fn imbuements(&self) -> impl Iterator<Item = &Imbuement> {
        self.slots.values().flat_map(|slot| slot.imbuements.iter())
    }

    /// Current unit prices.
    pub fn prices(&self) -> &PriceLedger {
        &self.prices
    }

    /// Current owned quantities.
    pub fn stock(&self) -> &StockLedger {
        &self.stock
    }

    /// Consolidated materials for the current selections.
    pub fn items_needed(&self) -> &[ItemQuantity] {
        &self.items_needed
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Derive totals, needs and the grouped breakdown from the current state.
    pub fn aggregate(&self) -> Aggregate {
        aggregate::aggregate(self)
    }

    /// Resize a slot's imbuement list.
    ///
    /// `count` is clamped to `0..=max_slots`. Shrinking drops positions
    /// from the end; growing appends empty Basic placeholders.
    pub fn set_slot_quantity(&mut self, kind: EquipmentSlotKind, count: i64) {
        let max = self.catalog.max_slots(kind);
        let count = count.clamp(0, max as i64) as usize;

        let Some(assignment) = self.slots.get_mut(&kind) else {
            return;
        };
        let current = assignment.imbuements.len();
        if count < current {
            assignment.imbuements.truncate(count);
        } else {
            for _ in current..count {
                assignment.imbuements.push(imbuement::build(
                    &self.catalog,
                    PowerTier::Basic,
                    ImbuementType::None,
                    &self.prices,
                ));
            }
        }
        debug!(%kind, from = current, to = count, "slot quantity changed");

        self.refresh_items_needed();
    }

    /// Place an imbuement at `(slot, index)`.
    ///
    /// If another position already holds the same non-empty type, that
    /// position is reset to an empty placeholder (keeping its power)
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::SlotIndexOutOfRange`] if `index` is not
    /// below the slot's current quantity.
    pub fn set_imbuement(
        &mut self,
        slot: EquipmentSlotKind,
        index: usize,
        power: PowerTier,
        kind: ImbuementType,
    ) -> Result<(), PlannerError> {
        let len = self.slot(slot).slot_quantity();
        if index >= len {
            return Err(PlannerError::SlotIndexOutOfRange {
                kind: slot,
                index,
                len,
            });
        }

        if !kind.is_none() {
            for (&other_slot, assignment) in self.slots.iter_mut() {
                for (other_index, held) in assignment.imbuements.iter_mut().enumerate() {
                    if held.kind == kind && (other_slot, other_index) != (slot, index) {
                        debug!(%kind, from = %other_slot, index = other_index, "evicting duplicate imbuement");
                        *held = imbuement::build(
                            &self.catalog,
                            held.power,
                            ImbuementType::None,
                            &self.prices,
                        );
                    }
                }
            }
        }

        let built = imbuement::build(&self.catalog, power, kind, &self.prices);
        if let Some(assignment) = self.slots.get_mut(&slot) {
            assignment.imbuements[index] = built;
        }

        self.refresh_items_needed();
        Ok(())
    }

    /// Change an item's unit price and reprice dependent imbuements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use imbuement_planner::storage::MemoryStorage;
    /// use imbuement_planner::*;
    ///
    /// let mut store = ImbuementStore::new(Arc::new(build_catalog()), MemoryStorage::new());
    /// store
    ///     .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
    ///     .unwrap();
    /// store.set_item_price(Item::VampireTeeth, 2_000);
    ///
    /// assert_eq!(store.aggregate().grand_total, 65_000);
    /// ```
    ///
    /// An imbuement is repriced when its type's Powerful recipe consumes
    /// `item`; a gold token change reprices every non-empty imbuement.
    /// The price ledger is then persisted; a failed write is logged and
    /// leaves the in-memory state intact.
    pub fn set_item_price(&mut self, item: Item, price: Gold) {
        self.prices.set(item, price);

        let dependencies = self.catalog.dependencies();
        let mut rebuilt = 0;
        for assignment in self.slots.values_mut() {
            for held in assignment.imbuements.iter_mut() {
                if dependencies.depends_on(held.kind, item) {
                    *held = imbuement::build(&self.catalog, held.power, held.kind, &self.prices);
                    rebuilt += 1;
                }
            }
        }
        debug!(%item, price, rebuilt, "item price changed");

        self.persist_prices();
    }

    /// Change how many of `item` the user owns, and persist the stock ledger.
    pub fn set_item_stock(&mut self, item: Item, quantity: Quantity) {
        self.stock.set(item, quantity);
        debug!(%item, quantity, "item stock changed");
        self.persist_stock();
    }

    /// Overlay persisted ledgers onto the current ones.
    ///
    /// Missing snapshots are ignored. A snapshot that cannot be parsed is
    /// discarded and removed from storage. Stored imbuements are repriced
    /// afterwards.
    pub fn load_persisted_state(&mut self) {
        load_ledger(&mut self.storage, &self.config.prices_key, &mut self.prices);
        load_ledger(&mut self.storage, &self.config.stock_key, &mut self.stock);

        for assignment in self.slots.values_mut() {
            for held in assignment.imbuements.iter_mut() {
                if !held.is_none() {
                    *held = imbuement::build(&self.catalog, held.power, held.kind, &self.prices);
                }
            }
        }
    }

    fn refresh_items_needed(&mut self) {
        self.items_needed = aggregate::consolidate(self.imbuements());
    }

    fn persist_prices(&mut self) {
        let snapshot = self.prices.to_snapshot();
        if let Err(e) = self.storage.set(&self.config.prices_key, &snapshot) {
            warn!(error = %e, "failed to persist item prices");
        }
    }

    fn persist_stock(&mut self) {
        let snapshot = self.stock.to_snapshot();
        if let Err(e) = self.storage.set(&self.config.stock_key, &snapshot) {
            warn!(error = %e, "failed to persist item stock");
        }
    }
}

fn load_ledger<S: Storage>(storage: &mut S, key: &str, ledger: &mut Ledger) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return,
        Err(e) => {
            warn!(key, error = %e, "could not read persisted snapshot");
            return;
        }
    };

    match ledger.merge_snapshot(key, &raw) {
        Ok(applied) => info!(key, applied, "loaded persisted snapshot"),
        Err(e) => {
            warn!(error = %e, "discarding persisted snapshot");
            if let Err(e) = storage.remove(key) {
                warn!(key, error = %e, "could not remove corrupt snapshot");
            }
        }
    }
}
