//! Fixtures shared by the unit tests.

use teashop_inventory::{InventoryItem, InventoryItemId, Price, StarRating};

use crate::query::InventoryQuery;

/// A query that returns a fixed list, standing in for the store.
#[derive(Debug, Clone)]
pub(crate) struct StubQuery(pub Vec<InventoryItem>);

impl InventoryQuery for StubQuery {
    fn execute(&self) -> Vec<InventoryItem> {
        self.0.clone()
    }

    fn describe(&self) -> Vec<String> {
        Vec::new()
    }
}

pub(crate) fn item(name: &str, cents: u64, quantity: u32, rating: i32) -> InventoryItem {
    InventoryItem::new(
        InventoryItemId::new(),
        name,
        Price::from_cents(cents),
        quantity,
        StarRating::new(rating).unwrap(),
    )
}

/// Green Tea $15 x10 4*, Black Tea $10 x0 5*, Oolong Tea $20 x5 3*, Matcha $30 x2 5*.
pub(crate) fn four_teas() -> StubQuery {
    StubQuery(vec![
        item("Green Tea", 1500, 10, 4),
        item("Black Tea", 1000, 0, 5),
        item("Oolong Tea", 2000, 5, 3),
        item("Matcha", 3000, 2, 5),
    ])
}

pub(crate) fn names(items: &[InventoryItem]) -> Vec<&str> {
    items.iter().map(InventoryItem::name).collect()
}
