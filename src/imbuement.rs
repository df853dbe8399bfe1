//! Imbuement factory module.
//!
//! Contains the `Imbuement` record and [`build`], the pure function that
//! prices an imbuement against the catalog and a price ledger. Records
//! are never edited in place; any change to power, type or a relevant
//! price produces a fresh one.

use crate::catalog::{Catalog, ImbuementType, ItemQuantity, PowerTier};
use crate::gold::Gold;
use crate::item::Item;
use crate::ledger::PriceLedger;
use serde::{Deserialize, Serialize};

/// Gold tokens needed per tier step when paying with tokens instead of
/// materials.
pub const GOLD_TOKENS_PER_TIER: u64 = 2;

/// A priced imbuement, with its full cost breakdown.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::catalog::{build_catalog, ImbuementType, PowerTier};
/// use imbuement_planner::{imbuement, Ledger};
///
/// let catalog = build_catalog();
/// let prices = Ledger::default_prices();
/// let imb = imbuement::build(&catalog, PowerTier::Basic, ImbuementType::Vampirism, &prices);
///
/// assert_eq!(imb.materials_cost, 37_500);
/// assert_eq!(imb.total_cost, 52_500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imbuement {
    pub power: PowerTier,
    pub kind: ImbuementType,

    /// Cumulative recipe for `(kind, power)`. Empty for `None`.
    pub materials: Vec<ItemQuantity>,

    /// Sum of `price * quantity` over `materials`.
    pub materials_cost: Gold,

    /// Cost of paying with gold tokens instead of materials.
    pub gold_token_cost: Gold,

    /// Materials plus the tier's fixed fees. Zero for `None`.
    pub total_cost: Gold,

    /// Gold tokens plus the tier's fixed fees. Zero for `None`.
    pub total_with_gold_tokens: Gold,
}

impl Imbuement {
    /// Whether this is an empty placeholder.
    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    /// Gold tokens that replace this imbuement's materials.
    pub fn gold_tokens(&self) -> u64 {
        if self.is_none() {
            0
        } else {
            gold_tokens_for(self.power)
        }
    }
}

/// Gold tokens that replace the materials of one imbuement at `power`.
pub fn gold_tokens_for(power: PowerTier) -> u64 {
    GOLD_TOKENS_PER_TIER * (power.ordinal() as u64 + 1)
}

/// Price an imbuement.
///
/// `None` yields a zero-cost placeholder at the given power. Costs
/// saturate at `Gold::MAX`, so absurd persisted prices never overflow.
///
/// # Arguments
///
/// * `catalog` - Recipes and fees
/// * `power` - Tier to price
/// * `kind` - Imbuement type
/// * `prices` - Unit price of every item
///
/// # Panics
///
/// Panics if `kind` is not in the catalog.
pub fn build(
    catalog: &Catalog,
    power: PowerTier,
    kind: ImbuementType,
    prices: &PriceLedger,
) -> Imbuement {
    if kind.is_none() {
        return Imbuement {
            power,
            kind,
            materials: Vec::new(),
            materials_cost: 0,
            gold_token_cost: 0,
            total_cost: 0,
            total_with_gold_tokens: 0,
        };
    }

    let materials = catalog.recipe(kind, power).to_vec();
    let materials_cost: Gold = materials.iter().fold(0, |acc: Gold, entry| {
        acc.saturating_add(prices.get(entry.item).saturating_mul(entry.quantity))
    });
    let gold_token_cost = gold_tokens_for(power).saturating_mul(prices.get(Item::GoldToken));
    let fees = catalog.fee(power).total();

    Imbuement {
        power,
        kind,
        materials,
        materials_cost,
        gold_token_cost,
        total_cost: materials_cost.saturating_add(fees),
        total_with_gold_tokens: gold_token_cost.saturating_add(fees),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::ledger::Ledger;

    #[test]
    fn test_none_is_free() {
        let catalog = build_catalog();
        let mut prices = Ledger::default_prices();
        prices.set(Item::GoldToken, 1_000_000);
        for power in PowerTier::ALL {
            let imb = build(&catalog, power, ImbuementType::None, &prices);
            assert_eq!(imb.total_cost, 0);
            assert_eq!(imb.total_with_gold_tokens, 0);
            assert!(imb.materials.is_empty());
            assert_eq!(imb.power, power);
        }
    }

    #[test]
    fn test_basic_vampirism() {
        let catalog = build_catalog();
        let prices = Ledger::default_prices();
        let imb = build(&catalog, PowerTier::Basic, ImbuementType::Vampirism, &prices);
        assert_eq!(imb.materials, vec![ItemQuantity::new(Item::VampireTeeth, 25)]);
        assert_eq!(imb.materials_cost, 37_500);
        assert_eq!(imb.total_cost, 52_500);
    }

    #[test]
    fn test_powerful_strike() {
        let catalog = build_catalog();
        let prices = Ledger::default_prices();
        let imb = build(&catalog, PowerTier::Powerful, ImbuementType::Strike, &prices);
        // 5 * 1400 + 25 * 4200 + 20 * 2000
        assert_eq!(imb.materials_cost, 152_000);
        assert_eq!(imb.total_cost, 302_000);
    }

    #[test]
    fn test_gold_token_alternative() {
        let catalog = build_catalog();
        let prices = Ledger::default_prices();
        let imb = build(&catalog, PowerTier::Intricate, ImbuementType::Void, &prices);
        assert_eq!(imb.gold_tokens(), 4);
        assert_eq!(imb.gold_token_cost, 160_000);
        assert_eq!(imb.total_with_gold_tokens, 210_000);
    }

    #[test]
    fn test_extreme_prices_saturate() {
        let catalog = build_catalog();
        let mut prices = Ledger::default_prices();
        prices.set(Item::Sabreteeth, u64::MAX);
        prices.set(Item::GoldToken, u64::MAX);

        let imb = build(&catalog, PowerTier::Intricate, ImbuementType::Strike, &prices);
        assert_eq!(imb.materials_cost, u64::MAX);
        assert_eq!(imb.total_cost, u64::MAX);
        assert_eq!(imb.gold_token_cost, u64::MAX);
        assert_eq!(imb.total_with_gold_tokens, u64::MAX);
    }

    #[test]
    fn test_build_is_idempotent() {
        let catalog = build_catalog();
        let prices = Ledger::default_prices();
        let a = build(&catalog, PowerTier::Powerful, ImbuementType::Bash, &prices);
        let b = build(&catalog, PowerTier::Powerful, ImbuementType::Bash, &prices);
        assert_eq!(a, b);
    }
}
