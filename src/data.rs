//! Standard game data: recipes, fees, slot limits and default prices.

use crate::catalog::{
    EquipmentSlotKind, FixedFee, ImbuementDefinition, ImbuementType, ItemQuantity, SlotRule,
};
use crate::gold::Gold;
use crate::item::Item;

fn definition(
    kind: ImbuementType,
    effect_name: &str,
    effect_values: [u32; 3],
    materials: [(Item, u64); 3],
) -> ImbuementDefinition {
    ImbuementDefinition {
        kind,
        effect_name: effect_name.to_string(),
        effect_values,
        base_recipes: materials.map(|(item, quantity)| vec![ItemQuantity::new(item, quantity)]),
    }
}

pub fn standard_definitions() -> Vec<ImbuementDefinition> {
    vec![
        ImbuementDefinition {
            kind: ImbuementType::None,
            effect_name: String::new(),
            effect_values: [0; 3],
            base_recipes: Default::default(),
        },
        definition(
            ImbuementType::Vampirism,
            "Life Leech",
            [5, 10, 25],
            [
                (Item::VampireTeeth, 25),
                (Item::BloodyPincers, 15),
                (Item::DeadBrain, 5),
            ],
        ),
        definition(
            ImbuementType::Void,
            "Mana Leech",
            [3, 5, 8],
            [
                (Item::RopeBelt, 25),
                (Item::SilencerClaws, 25),
                (Item::GrimeleechWings, 5),
            ],
        ),
        definition(
            ImbuementType::Strike,
            "Critical damage (prob. 10%)",
            [15, 25, 50],
            [
                (Item::ProtectiveCharms, 20),
                (Item::Sabreteeth, 25),
                (Item::VexclawTalon, 5),
            ],
        ),
        definition(
            ImbuementType::Bash,
            "Club Fighting",
            [1, 2, 4],
            [
                (Item::CyclopsToes, 20),
                (Item::OgreNoseRing, 15),
                (Item::WarmastersWristguards, 10),
            ],
        ),
    ]
}

/// Fees indexed by tier ordinal.
pub fn standard_fees() -> [FixedFee; 3] {
    [
        FixedFee {
            price: 5_000,
            no_failure_fee: 10_000,
        },
        FixedFee {
            price: 25_000,
            no_failure_fee: 25_000,
        },
        FixedFee {
            price: 100_000,
            no_failure_fee: 50_000,
        },
    ]
}

pub fn standard_slot_rules() -> Vec<(EquipmentSlotKind, SlotRule)> {
    use ImbuementType::{Bash, Strike, Vampirism, Void};
    vec![
        (
            EquipmentSlotKind::Helmet,
            SlotRule {
                max_slots: 2,
                allowed: vec![Void, Bash],
            },
        ),
        (
            EquipmentSlotKind::Armor,
            SlotRule {
                max_slots: 3,
                allowed: vec![Vampirism],
            },
        ),
        (
            EquipmentSlotKind::Weapon,
            SlotRule {
                max_slots: 3,
                allowed: vec![Vampirism, Void, Strike, Bash],
            },
        ),
        (
            EquipmentSlotKind::Shield,
            SlotRule {
                max_slots: 1,
                allowed: Vec::new(),
            },
        ),
        (
            EquipmentSlotKind::Boots,
            SlotRule {
                max_slots: 1,
                allowed: Vec::new(),
            },
        ),
    ]
}

/// Market prices used until the user overrides them.
pub fn default_prices() -> Vec<(Item, Gold)> {
    vec![
        (Item::VampireTeeth, 1_500),
        (Item::BloodyPincers, 5_800),
        (Item::DeadBrain, 14_000),
        (Item::RopeBelt, 3_000),
        (Item::SilencerClaws, 2_500),
        (Item::GrimeleechWings, 1_500),
        (Item::ProtectiveCharms, 2_000),
        (Item::Sabreteeth, 4_200),
        (Item::VexclawTalon, 1_400),
        (Item::CyclopsToes, 150),
        (Item::OgreNoseRing, 1_000),
        (Item::WarmastersWristguards, 1_000),
        (Item::GoldToken, 40_000),
    ]
}
