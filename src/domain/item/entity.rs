use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A piece of equipment or loot from the wiki or a user submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,

    pub name: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    pub rarity: Rarity,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold_value: Option<u32>,

    // The four percentage-valued properties; absent means the item
    // does not carry that stat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dodge: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_resist: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elec_resist: Option<f32>,

    /// Where the item drops or how it is crafted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub date_added: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}

impl Item {
    pub fn property(&self, property: ItemProperty) -> Option<f32> {
        match property {
            ItemProperty::Crit => self.crit,
            ItemProperty::Dodge => self.dodge,
            ItemProperty::FireResist => self.fire_resist,
            ItemProperty::ElecResist => self.elec_resist,
        }
    }

    /// True when the item carries the property with a positive value
    pub fn has_property(&self, property: ItemProperty) -> bool {
        self.property(property).map_or(false, |value| value > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Accessory,
    Consumable,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Weapon => write!(f, "weapon"),
            ItemType::Armor => write!(f, "armor"),
            ItemType::Accessory => write!(f, "accessory"),
            ItemType::Consumable => write!(f, "consumable"),
        }
    }
}

/// Rarity tiers in ascending order; the derived `Ord` follows
/// declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Uncommon => write!(f, "uncommon"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Epic => write!(f, "epic"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

/// The percentage-valued property dimensions an item filter can require
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemProperty {
    Crit,
    Dodge,
    FireResist,
    ElecResist,
}
