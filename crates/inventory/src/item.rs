//! The inventory record.

use serde::{Deserialize, Serialize};
use teashop_core::{Entity, InventoryItemId};

use crate::money::Price;
use crate::rating::StarRating;

/// A tea on the shelf.
///
/// Records are immutable; the repository replaces a record wholesale (see
/// [`InventoryItem::with_quantity`]) when stock changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    name: String,
    price: Price,
    quantity: u32,
    star_rating: StarRating,
}

impl InventoryItem {
    pub fn new(
        id: InventoryItemId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
        star_rating: StarRating,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            star_rating,
        }
    }

    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn star_rating(&self) -> StarRating {
        self.star_rating
    }

    /// In stock when at least one unit remains.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Value of the stock on hand (price × quantity).
    pub fn total_value(&self) -> Price {
        self.price.saturating_mul(self.quantity)
    }

    /// Same record, new stock level.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
