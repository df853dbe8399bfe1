//! Item identifier module.
//!
//! Provides the `Item` type, the closed set of materials an imbuement
//! can consume, plus the gold token used as an alternative payment.
//! Items serialize as their display name, which is also the key used
//! in persisted ledger snapshots.

use crate::error::PlannerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A count of items, as required by a recipe or held in stock.
pub type Quantity = u64;

/// A tradeable item referenced by recipes and ledgers.
///
/// # Examples
///
/// ```rust
/// use imbuement_planner::Item;
///
/// let teeth: Item = "Vampire Teeth".parse().unwrap();
/// assert_eq!(teeth, Item::VampireTeeth);
/// assert_eq!(teeth.name(), "Vampire Teeth");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Item {
    VampireTeeth,
    BloodyPincers,
    DeadBrain,
    RopeBelt,
    SilencerClaws,
    GrimeleechWings,
    ProtectiveCharms,
    Sabreteeth,
    VexclawTalon,
    CyclopsToes,
    OgreNoseRing,
    WarmastersWristguards,
    /// Alternative payment accepted in place of every recipe material.
    GoldToken,
}

impl Item {
    /// Every item, in catalog order.
    pub const ALL: [Item; 13] = [
        Item::VampireTeeth,
        Item::BloodyPincers,
        Item::DeadBrain,
        Item::RopeBelt,
        Item::SilencerClaws,
        Item::GrimeleechWings,
        Item::ProtectiveCharms,
        Item::Sabreteeth,
        Item::VexclawTalon,
        Item::CyclopsToes,
        Item::OgreNoseRing,
        Item::WarmastersWristguards,
        Item::GoldToken,
    ];

    /// The display name, also used as the persistence key.
    pub fn name(self) -> &'static str {
        match self {
            Item::VampireTeeth => "Vampire Teeth",
            Item::BloodyPincers => "Bloody Pincers",
            Item::DeadBrain => "Dead Brain",
            Item::RopeBelt => "Rope Belt",
            Item::SilencerClaws => "Silencer Claws",
            Item::GrimeleechWings => "Grimeleech Wings",
            Item::ProtectiveCharms => "Protective Charms",
            Item::Sabreteeth => "Sabreteeth",
            Item::VexclawTalon => "Vexclaw Talon",
            Item::CyclopsToes => "Cyclops Toes",
            Item::OgreNoseRing => "Ogre Nose Ring",
            Item::WarmastersWristguards => "Warmaster's Wristguards",
            Item::GoldToken => "Gold Token",
        }
    }

    /// Whether this is the alternative-payment item.
    pub fn is_gold_token(self) -> bool {
        self == Item::GoldToken
    }
}

impl FromStr for Item {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Item::ALL
            .iter()
            .copied()
            .find(|item| item.name() == s)
            .ok_or_else(|| PlannerError::UnknownItem(s.to_string()))
    }
}

impl Serialize for Item {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.name().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
