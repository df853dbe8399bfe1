//! Planner example: plan a weapon and armor setup and print the costs
//!
//! This example demonstrates:
//! - Building the catalog and a store
//! - Assigning imbuements (and the one-type-once eviction)
//! - Overriding prices and stock
//! - Reading the aggregated summary
//!
//! Run with `RUST_LOG=debug` to see store events.

use imbuement_planner::storage::MemoryStorage;
use imbuement_planner::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PlannerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = Arc::new(build_catalog());
    let mut store = ImbuementStore::new(catalog, MemoryStorage::new());
    store.load_persisted_state();

    use EquipmentSlotKind::*;
    store.set_imbuement(Weapon, 0, PowerTier::Powerful, ImbuementType::Strike)?;
    store.set_imbuement(Weapon, 1, PowerTier::Intricate, ImbuementType::Void)?;
    store.set_imbuement(Weapon, 2, PowerTier::Intricate, ImbuementType::Vampirism)?;
    // Vampirism moves to the armor and the weapon slot is cleared.
    store.set_imbuement(Armor, 0, PowerTier::Powerful, ImbuementType::Vampirism)?;

    store.set_item_price(Item::Sabreteeth, 3_800);
    store.set_item_stock(Item::VampireTeeth, 10);

    println!("=== Slots ===");
    for (kind, slot) in store.slots() {
        for (index, imb) in slot.imbuements().iter().enumerate() {
            if !imb.is_none() {
                println!(
                    "  {kind}[{index}]: {} {} = {}",
                    imb.power,
                    imb.kind,
                    format_gold(imb.total_cost)
                );
            }
        }
    }

    let summary = store.aggregate();

    println!("\n=== Cost Detail ===");
    for group in &summary.groups {
        println!(
            "  {} {} x{}: {} (gold tokens: {})",
            group.power,
            group.kind,
            group.count,
            format_gold(group.total()),
            format_gold(group.total_with_gold_tokens())
        );
    }

    println!("\n=== Item Prices ===");
    for row in item_overview(&store, false) {
        println!(
            "  {:<24} need {:>3}, have {:>3}: {}",
            row.item.name(),
            row.needed,
            row.owned,
            format_gold(row.remaining_cost)
        );
    }

    println!("\nTotal (items):       {}", format_gold(summary.grand_total));
    println!(
        "Total (gold tokens): {}",
        format_gold(summary.grand_total_with_gold_tokens)
    );

    Ok(())
}
