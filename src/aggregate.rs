//! Aggregation engine.
//!
//! Derives everything the cost views show from a store's current state:
//! grand totals, the consolidated list of items needed, what is still
//! to buy after stock, and a breakdown grouped by `(power, type)`.
//!
//! All output orderings follow slot order and first occurrence, so the
//! same state always aggregates to the same result.

use crate::catalog::{ImbuementType, ItemQuantity, PowerTier};
use crate::gold::Gold;
use crate::imbuement::Imbuement;
use crate::item::{Item, Quantity};
use crate::storage::Storage;
use crate::store::ImbuementStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// How much of an item is needed versus owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetRequirement {
    pub item: Item,
    pub needed: Quantity,
    pub owned: Quantity,
    /// `needed - owned`; negative when stock exceeds the need.
    pub shortfall: i64,
    /// `shortfall` floored at zero.
    pub to_acquire: Quantity,
}

/// Imbuements sharing the same power and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostGroup {
    pub power: PowerTier,
    pub kind: ImbuementType,
    pub count: u64,
    pub unit_total: Gold,
    pub unit_materials_cost: Gold,
    pub unit_total_with_gold_tokens: Gold,
}

impl CostGroup {
    /// Combined cost of every imbuement in the group.
    ///
    /// Saturates at `Gold::MAX` rather than wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imbuement_planner::{CostGroup, ImbuementType, PowerTier};
    ///
    /// let group = CostGroup {
    ///     power: PowerTier::Basic,
    ///     kind: ImbuementType::Bash,
    ///     count: 2,
    ///     unit_total: 18_000,
    ///     unit_materials_cost: 3_000,
    ///     unit_total_with_gold_tokens: 95_000,
    /// };
    /// assert_eq!(group.total(), 36_000);
    /// ```
    pub fn total(&self) -> Gold {
        self.unit_total.saturating_mul(self.count)
    }

    pub fn materials_total(&self) -> Gold {
        self.unit_materials_cost.saturating_mul(self.count)
    }

    pub fn total_with_gold_tokens(&self) -> Gold {
        self.unit_total_with_gold_tokens.saturating_mul(self.count)
    }
}

/// Derived totals for a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Sum of `total_cost` over non-empty imbuements.
    pub grand_total: Gold,
    /// Same, paying with gold tokens instead of materials.
    pub grand_total_with_gold_tokens: Gold,
    /// Gold tokens that would replace every material.
    pub gold_tokens_needed: Quantity,
    pub items_needed: Vec<ItemQuantity>,
    pub net_to_acquire: Vec<NetRequirement>,
    pub groups: Vec<CostGroup>,
}

/// A row of the item price grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub item: Item,
    pub price: Gold,
    pub needed: Quantity,
    pub owned: Quantity,
    /// Cost of the part not covered by stock.
    pub remaining_cost: Gold,
}

/// Sum materials by item, in order of first occurrence.
///
/// Empty imbuements contribute nothing.
pub fn consolidate<'a>(imbuements: impl IntoIterator<Item = &'a Imbuement>) -> Vec<ItemQuantity> {
    let mut totals: Vec<ItemQuantity> = Vec::new();
    let mut index: HashMap<Item, usize> = HashMap::new();

    for imbuement in imbuements.into_iter().filter(|imb| !imb.is_none()) {
        for entry in &imbuement.materials {
            match index.get(&entry.item) {
                Some(&pos) => {
                    totals[pos].quantity = totals[pos].quantity.saturating_add(entry.quantity)
                }
                None => {
                    index.insert(entry.item, totals.len());
                    totals.push(*entry);
                }
            }
        }
    }
    totals
}

fn net_requirement(item: Item, needed: Quantity, owned: Quantity) -> NetRequirement {
    // Both sides fit in i128, so the difference is exact before clamping.
    let shortfall = (i128::from(needed) - i128::from(owned))
        .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
    NetRequirement {
        item,
        needed,
        owned,
        shortfall,
        to_acquire: needed.saturating_sub(owned),
    }
}

fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}

/// Aggregate a store's current selections.
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
///     .set_imbuement(EquipmentSlotKind::Weapon, 0, PowerTier::Basic, ImbuementType::Strike)
///     .unwrap();
/// store.set_item_stock(Item::ProtectiveCharms, 5);
///
/// let summary = aggregate::aggregate(&store);
/// assert_eq!(summary.net_to_acquire[0].to_acquire, 15);
/// ```
pub fn aggregate<S: Storage>(store: &ImbuementStore<S>) -> Aggregate {
    let active: Vec<&Imbuement> = store.imbuements().filter(|imb| !imb.is_none()).collect();

    let grand_total: Gold = saturating_sum(active.iter().map(|imb| imb.total_cost));
    let grand_total_with_gold_tokens: Gold =
        saturating_sum(active.iter().map(|imb| imb.total_with_gold_tokens));
    let gold_tokens_needed: Quantity = saturating_sum(active.iter().map(|imb| imb.gold_tokens()));

    let items_needed = consolidate(active.iter().copied());
    let net_to_acquire: Vec<NetRequirement> = items_needed
        .iter()
        .map(|entry| net_requirement(entry.item, entry.quantity, store.stock().get(entry.item)))
        .collect();

    let mut groups: Vec<CostGroup> = Vec::new();
    for imb in &active {
        match groups
            .iter_mut()
            .find(|group| group.power == imb.power && group.kind == imb.kind)
        {
            Some(group) => group.count += 1,
            None => groups.push(CostGroup {
                power: imb.power,
                kind: imb.kind,
                count: 1,
                unit_total: imb.total_cost,
                unit_materials_cost: imb.materials_cost,
                unit_total_with_gold_tokens: imb.total_with_gold_tokens,
            }),
        }
    }

    debug!(
        imbuements = active.len(),
        items = items_needed.len(),
        groups = groups.len(),
        "aggregated store"
    );

    Aggregate {
        grand_total,
        grand_total_with_gold_tokens,
        gold_tokens_needed,
        items_needed,
        net_to_acquire,
        groups,
    }
}

/// Rows for the item price grid.
///
/// Gold tokens come first when any are needed, then the items needed in
/// aggregate order. With `include_unneeded`, every other catalog item
/// follows with a zero need.
pub fn item_overview<S: Storage>(store: &ImbuementStore<S>, include_unneeded: bool) -> Vec<ItemRow> {
    let summary = aggregate(store);
    let prices = store.prices();
    let stock = store.stock();

    let mut needs: Vec<(Item, Quantity)> = Vec::new();
    if summary.gold_tokens_needed > 0 {
        needs.push((Item::GoldToken, summary.gold_tokens_needed));
    }
    needs.extend(summary.items_needed.iter().map(|e| (e.item, e.quantity)));
    if include_unneeded {
        for item in Item::ALL {
            if !needs.iter().any(|(listed, _)| *listed == item) {
                needs.push((item, 0));
            }
        }
    }

    needs
        .into_iter()
        .map(|(item, needed)| {
            let net = net_requirement(item, needed, stock.get(item));
            ItemRow {
                item,
                price: prices.get(item),
                needed,
                owned: net.owned,
                remaining_cost: net.to_acquire.saturating_mul(prices.get(item)),
            }
        })
        .collect()
}
