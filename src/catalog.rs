//! Imbuement catalog module.
//!
//! The catalog holds the immutable game data the planner computes
//! against: power tiers and their fixed fees, imbuement types and their
//! recipes, and the equipment slots with their limits.
//!
//! Recipes accumulate across tiers: the recipe stored for a tier is that
//! tier's own materials followed by the full recipe of the tier below.
//! Accumulation happens once, in [`Catalog::new`].

use crate::data;
use crate::gold::Gold;
use crate::graph::PriceDependencyGraph;
use crate::item::{Item, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Strength level of an imbuement, ordered low to high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerTier {
    Basic,
    Intricate,
    Powerful,
}

impl PowerTier {
    /// Every tier, lowest first.
    pub const ALL: [PowerTier; 3] = [PowerTier::Basic, PowerTier::Intricate, PowerTier::Powerful];

    /// Zero-based position of the tier (Basic is 0).
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PowerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Kind of imbuement. `None` marks an empty slot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImbuementType {
    None,
    Vampirism,
    Void,
    Strike,
    Bash,
}

impl ImbuementType {
    pub const ALL: [ImbuementType; 5] = [
        ImbuementType::None,
        ImbuementType::Vampirism,
        ImbuementType::Void,
        ImbuementType::Strike,
        ImbuementType::Bash,
    ];

    /// Whether this marks an empty slot position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imbuement_planner::ImbuementType;
    ///
    /// assert!(ImbuementType::None.is_none());
    /// assert!(!ImbuementType::Void.is_none());
    /// ```
    pub fn is_none(self) -> bool {
        self == ImbuementType::None
    }
}

impl fmt::Display for ImbuementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Piece of equipment that can carry imbuements.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentSlotKind {
    Helmet,
    Armor,
    Weapon,
    Shield,
    Boots,
}

impl EquipmentSlotKind {
    pub const ALL: [EquipmentSlotKind; 5] = [
        EquipmentSlotKind::Helmet,
        EquipmentSlotKind::Armor,
        EquipmentSlotKind::Weapon,
        EquipmentSlotKind::Shield,
        EquipmentSlotKind::Boots,
    ];
}

impl fmt::Display for EquipmentSlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An item together with how many of it are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuantity {
    pub item: Item,
    pub quantity: Quantity,
}

impl ItemQuantity {
    pub fn new(item: Item, quantity: Quantity) -> Self {
        Self { item, quantity }
    }
}

/// Fixed gold fees charged for applying an imbuement of a given tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFee {
    /// Base application price.
    pub price: Gold,
    /// Surcharge that removes the chance of failure.
    pub no_failure_fee: Gold,
}

impl FixedFee {
    pub fn total(&self) -> Gold {
        self.price + self.no_failure_fee
    }
}

/// Source definition of an imbuement type, before recipe accumulation.
///
/// `base_recipes[t]` lists only the materials introduced at tier `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImbuementDefinition {
    pub kind: ImbuementType,
    pub effect_name: String,
    /// Display-only effect magnitude per tier, in percent.
    pub effect_values: [u32; 3],
    pub base_recipes: [Vec<ItemQuantity>; 3],
}

/// Accumulated, immutable data for one imbuement type.
#[derive(Debug, Clone, PartialEq)]
pub struct ImbuementTypeData {
    pub effect_name: String,
    pub effect_values: [u32; 3],
    recipes: [Vec<ItemQuantity>; 3],
}

impl ImbuementTypeData {
    /// The cumulative recipe for a tier.
    pub fn recipe(&self, power: PowerTier) -> &[ItemQuantity] {
        &self.recipes[power.ordinal()]
    }

    pub fn effect_value(&self, power: PowerTier) -> u32 {
        self.effect_values[power.ordinal()]
    }
}

/// Limits for one equipment slot kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRule {
    pub max_slots: usize,
    /// Types the game allows on this equipment.
    pub allowed: Vec<ImbuementType>,
}

/// Immutable imbuement catalog.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::catalog::{build_catalog, ImbuementType, PowerTier};
/// use imbuement_planner::Item;
///
/// let catalog = build_catalog();
/// let recipe = catalog.recipe(ImbuementType::Vampirism, PowerTier::Intricate);
///
/// // Intricate materials first, then everything Basic needs.
/// assert_eq!(recipe[0].item, Item::BloodyPincers);
/// assert_eq!(recipe[1].item, Item::VampireTeeth);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    types: HashMap<ImbuementType, ImbuementTypeData>,
    fees: [FixedFee; 3],
    slots: HashMap<EquipmentSlotKind, SlotRule>,
    dependencies: PriceDependencyGraph,
}

impl Catalog {
    /// Build a catalog, accumulating each definition's recipes across tiers.
    ///
    /// A `None` type with empty recipes is added when the definitions
    /// don't provide one.
    pub fn new(
        definitions: Vec<ImbuementDefinition>,
        fees: [FixedFee; 3],
        slots: Vec<(EquipmentSlotKind, SlotRule)>,
    ) -> Self {
        let mut types = HashMap::new();
        let mut dependencies = PriceDependencyGraph::new();

        for definition in definitions {
            let recipes = accumulate(definition.base_recipes);
            for entry in &recipes[PowerTier::Powerful.ordinal()] {
                dependencies.add_dependency(entry.item, definition.kind);
            }
            types.insert(
                definition.kind,
                ImbuementTypeData {
                    effect_name: definition.effect_name,
                    effect_values: definition.effect_values,
                    recipes,
                },
            );
        }

        types
            .entry(ImbuementType::None)
            .or_insert_with(|| ImbuementTypeData {
                effect_name: String::new(),
                effect_values: [0; 3],
                recipes: Default::default(),
            });

        Self {
            types,
            fees,
            slots: slots.into_iter().collect(),
            dependencies,
        }
    }

    /// Data for an imbuement type.
    ///
    /// # Panics
    ///
    /// Panics if the type is not in the catalog. Every enumerated type is
    /// expected to be defined, so a miss is a catalog bug.
    pub fn type_data(&self, kind: ImbuementType) -> &ImbuementTypeData {
        self.types
            .get(&kind)
            .unwrap_or_else(|| panic!("imbuement type {kind} is missing from the catalog"))
    }

    /// The cumulative recipe for `(kind, power)`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not in the catalog.
    pub fn recipe(&self, kind: ImbuementType, power: PowerTier) -> &[ItemQuantity] {
        self.type_data(kind).recipe(power)
    }

    /// Fixed fees charged for an imbuement at `power`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imbuement_planner::{build_catalog, PowerTier};
    ///
    /// let fee = build_catalog().fee(PowerTier::Basic);
    /// assert_eq!(fee.price, 5_000);
    /// assert_eq!(fee.total(), 15_000);
    /// ```
    pub fn fee(&self, power: PowerTier) -> FixedFee {
        self.fees[power.ordinal()]
    }

    /// Limits for an equipment slot kind.
    ///
    /// # Panics
    ///
    /// Panics if the kind has no rule in the catalog.
    pub fn slot_rule(&self, kind: EquipmentSlotKind) -> &SlotRule {
        self.slots
            .get(&kind)
            .unwrap_or_else(|| panic!("equipment slot {kind} is missing from the catalog"))
    }

    /// How many imbuement positions `kind` can carry.
    pub fn max_slots(&self, kind: EquipmentSlotKind) -> usize {
        self.slot_rule(kind).max_slots
    }

    /// Whether the game allows `imbuement` on `kind`. `None` is always allowed.
    pub fn allows(&self, kind: EquipmentSlotKind, imbuement: ImbuementType) -> bool {
        imbuement.is_none() || self.slot_rule(kind).allowed.contains(&imbuement)
    }

    /// Item to imbuement-type dependencies, derived from Powerful recipes.
    pub fn dependencies(&self) -> &PriceDependencyGraph {
        &self.dependencies
    }
}

/// Append each tier's predecessor recipe to its own materials.
fn accumulate(base: [Vec<ItemQuantity>; 3]) -> [Vec<ItemQuantity>; 3] {
    let [basic, mut intricate, mut powerful] = base;
    intricate.extend_from_slice(&basic);
    powerful.extend_from_slice(&intricate);
    [basic, intricate, powerful]
}

/// Build the standard catalog.
///
/// Call once at startup and share the result; the catalog is never
/// mutated afterwards.
pub fn build_catalog() -> Catalog {
    Catalog::new(
        data::standard_definitions(),
        data::standard_fees(),
        data::standard_slot_rules(),
    )
}
