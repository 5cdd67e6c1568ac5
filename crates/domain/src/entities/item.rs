//! Item entity - Consumables, contract balls and key items

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::value_objects::{Effect, ItemCategory, MultilingualText, UsageContext};

/// An item definition.
///
/// Plain data: any combination of field values is a valid item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: MultilingualText,
    pub description: MultilingualText,
    pub category: ItemCategory,
    pub usage_context: UsageContext,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub price: i32,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: MultilingualText,
        category: ItemCategory,
        usage_context: UsageContext,
    ) -> Self {
        Self {
            id,
            name,
            description: MultilingualText::default(),
            category,
            usage_context,
            effects: Vec::new(),
            price: 0,
        }
    }

    pub fn usable_in_battle(&self) -> bool {
        matches!(self.usage_context, UsageContext::Battle | UsageContext::Both)
    }

    pub fn usable_in_field(&self) -> bool {
        matches!(self.usage_context, UsageContext::Field | UsageContext::Both)
    }
}
