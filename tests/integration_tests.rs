use imbuement_planner::catalog::build_catalog;
use imbuement_planner::imbuement;
use imbuement_planner::storage::MemoryStorage;
use imbuement_planner::*;
use std::collections::HashSet;
use std::sync::Arc;

fn new_store() -> ImbuementStore {
    ImbuementStore::new(Arc::new(build_catalog()), MemoryStorage::new())
}

/// Assert no non-empty type is held by two positions.
fn assert_unique(store: &ImbuementStore) {
    let mut seen = HashSet::new();
    for (kind, slot) in store.slots() {
        for (index, imb) in slot.imbuements().iter().enumerate() {
            if !imb.is_none() {
                assert!(
                    seen.insert(imb.kind),
                    "{} held twice (second at {kind}[{index}])",
                    imb.kind
                );
            }
        }
    }
}

/// Test the Basic Vampirism cost example end to end.
#[test]
fn test_basic_vampirism_cost() {
    let catalog = build_catalog();
    let mut prices = Ledger::new();
    prices.set(Item::VampireTeeth, 1_500);

    let imb = imbuement::build(&catalog, PowerTier::Basic, ImbuementType::Vampirism, &prices);

    assert_eq!(imb.materials_cost, 37_500);
    // 37500 + 5000 + 10000
    assert_eq!(imb.total_cost, 52_500);
}

/// Test that an empty Basic placeholder is free under any ledger.
#[test]
fn test_none_placeholder_is_free() {
    let catalog = build_catalog();
    let mut prices = Ledger::default_prices();
    for item in Item::ALL {
        prices.set(item, 999_999);
    }
    let imb = imbuement::build(&catalog, PowerTier::Basic, ImbuementType::None, &prices);
    assert_eq!(imb.total_cost, 0);
}

/// Test that selecting a type elsewhere evicts the previous holder.
#[test]
fn test_uniqueness_eviction() {
    let mut store = new_store();
    store.set_slot_quantity(EquipmentSlotKind::Helmet, 2);
    store
        .set_imbuement(EquipmentSlotKind::Helmet, 0, PowerTier::Basic, ImbuementType::Vampirism)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
        .unwrap();

    let helmet = &store.slot(EquipmentSlotKind::Helmet).imbuements()[0];
    let armor = &store.slot(EquipmentSlotKind::Armor).imbuements()[0];
    assert_eq!(helmet.kind, ImbuementType::None);
    assert_eq!(helmet.total_cost, 0);
    assert_eq!(armor.kind, ImbuementType::Vampirism);
    assert_unique(&store);
}

/// Test that uniqueness survives a long sequence of edits.
#[test]
fn test_uniqueness_over_sequence() {
    let mut store = new_store();
    let positions = [
        (EquipmentSlotKind::Helmet, 0),
        (EquipmentSlotKind::Helmet, 1),
        (EquipmentSlotKind::Armor, 0),
        (EquipmentSlotKind::Armor, 2),
        (EquipmentSlotKind::Weapon, 0),
        (EquipmentSlotKind::Weapon, 1),
        (EquipmentSlotKind::Weapon, 2),
        (EquipmentSlotKind::Shield, 0),
        (EquipmentSlotKind::Boots, 0),
    ];
    let kinds = ImbuementType::ALL;

    for step in 0..60 {
        let (slot, index) = positions[(step * 7) % positions.len()];
        let kind = kinds[(step * 3) % kinds.len()];
        let power = PowerTier::ALL[step % 3];
        store.set_imbuement(slot, index, power, kind).unwrap();
        assert_unique(&store);
    }
}

/// Test that a price change reprices only imbuements that use the item.
#[test]
fn test_price_change_targets_dependents() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 0, PowerTier::Intricate, ImbuementType::Strike)
        .unwrap();
    let strike_before = store.slot(EquipmentSlotKind::Weapon).imbuements()[0].clone();

    store.set_item_price(Item::VampireTeeth, 2_000);

    let vampirism = &store.slot(EquipmentSlotKind::Armor).imbuements()[0];
    assert_eq!(vampirism.materials_cost, 50_000);
    assert_eq!(vampirism.total_cost, 65_000);
    assert_eq!(store.slot(EquipmentSlotKind::Weapon).imbuements()[0], strike_before);
}

/// Test that a Powerful-only ingredient leaves a Basic imbuement of the type unchanged.
#[test]
fn test_price_change_uses_powerful_recipe() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
        .unwrap();
    let before = store.slot(EquipmentSlotKind::Armor).imbuements()[0].clone();

    // Dead Brain is only in the Powerful recipe, so the Basic cost is unchanged.
    store.set_item_price(Item::DeadBrain, 1);

    assert_eq!(store.slot(EquipmentSlotKind::Armor).imbuements()[0], before);
}

/// Test that items needed are consolidated across slots and tiers.
#[test]
fn test_items_needed_consolidated() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Armor, 0, PowerTier::Basic, ImbuementType::Vampirism)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 1, PowerTier::Intricate, ImbuementType::Void)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 0, PowerTier::Intricate, ImbuementType::Bash)
        .unwrap();

    let needed = store.items_needed();
    assert_eq!(
        needed,
        &[
            ItemQuantity::new(Item::VampireTeeth, 25),
            ItemQuantity::new(Item::OgreNoseRing, 15),
            ItemQuantity::new(Item::CyclopsToes, 20),
            ItemQuantity::new(Item::SilencerClaws, 25),
            ItemQuantity::new(Item::RopeBelt, 25),
        ]
    );
}

/// Test that two imbuements needing the same item produce one entry.
#[test]
fn test_shared_item_single_entry() {
    let catalog = build_catalog();
    let prices = Ledger::default_prices();
    let basic = imbuement::build(&catalog, PowerTier::Basic, ImbuementType::Vampirism, &prices);
    let intricate = imbuement::build(&catalog, PowerTier::Intricate, ImbuementType::Vampirism, &prices);

    let needed = aggregate::consolidate([&basic, &intricate]);

    let teeth: Vec<_> = needed
        .iter()
        .filter(|entry| entry.item == Item::VampireTeeth)
        .collect();
    assert_eq!(teeth.len(), 1);
    assert_eq!(teeth[0].quantity, 50);
}

/// Test that aggregation is deterministic on an unmodified store.
#[test]
fn test_aggregate_deterministic() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 0, PowerTier::Powerful, ImbuementType::Strike)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 1, PowerTier::Basic, ImbuementType::Bash)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Helmet, 1, PowerTier::Intricate, ImbuementType::Void)
        .unwrap();
    store.set_item_stock(Item::Sabreteeth, 30);

    let first = aggregate(&store);
    let second = aggregate(&store);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

/// Test totals, stock subtraction and grouping together.
#[test]
fn test_full_summary() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Helmet, 0, PowerTier::Basic, ImbuementType::Bash)
        .unwrap();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 2, PowerTier::Basic, ImbuementType::Strike)
        .unwrap();
    store.set_item_stock(Item::CyclopsToes, 12);

    let summary = store.aggregate();

    // Bash: 20 * 150 + 15000 = 18000; Strike: 20 * 2000 + 15000 = 55000
    assert_eq!(summary.grand_total, 73_000);
    // 2 tokens each at 40000, plus fees
    assert_eq!(summary.gold_tokens_needed, 4);
    assert_eq!(summary.grand_total_with_gold_tokens, 2 * (80_000 + 15_000));

    assert_eq!(summary.net_to_acquire[0].item, Item::CyclopsToes);
    assert_eq!(summary.net_to_acquire[0].to_acquire, 8);
    assert_eq!(summary.net_to_acquire[1].item, Item::ProtectiveCharms);
    assert_eq!(summary.net_to_acquire[1].to_acquire, 20);

    assert_eq!(summary.groups.len(), 2);
    assert!(summary.groups.iter().all(|group| group.count == 1));
}

/// Test that shrinking a slot drops its imbuements from the summary.
#[test]
fn test_shrink_updates_needs() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 2, PowerTier::Basic, ImbuementType::Strike)
        .unwrap();
    assert!(!store.items_needed().is_empty());

    store.set_slot_quantity(EquipmentSlotKind::Weapon, 2);

    assert!(store.items_needed().is_empty());
    assert_eq!(store.aggregate().grand_total, 0);
}

/// Test that a freed type can be placed again after its slot is truncated.
#[test]
fn test_truncated_type_reusable() {
    let mut store = new_store();
    store
        .set_imbuement(EquipmentSlotKind::Weapon, 2, PowerTier::Basic, ImbuementType::Void)
        .unwrap();
    store.set_slot_quantity(EquipmentSlotKind::Weapon, 0);
    store
        .set_imbuement(EquipmentSlotKind::Helmet, 0, PowerTier::Powerful, ImbuementType::Void)
        .unwrap();

    assert_unique(&store);
    assert_eq!(store.aggregate().groups[0].power, PowerTier::Powerful);
}
