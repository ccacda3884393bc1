//! In-memory record store.

use std::collections::HashMap;

use teashop_core::{DomainError, DomainResult, InventoryItemId};
use tracing::{debug, warn};

use crate::item::InventoryItem;
use crate::seed::seed_items;

/// Holds the shop's records in insertion order.
///
/// Records live in a `Vec` so listing order is stable; `index` maps ids to
/// slots. Quantity adjustments are the only mutation and require `&mut self`,
/// so no query borrowing the store can observe a half-applied change.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    items: Vec<InventoryItem>,
    index: HashMap<InventoryItemId, usize>,
}

impl InventoryRepository {
    /// Build a store from explicit records. Fails on duplicate ids.
    pub fn new(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let mut repository = Self::empty();
        for item in items {
            let id = item.id_typed();
            if repository.index.contains_key(&id) {
                return Err(DomainError::validation(format!("duplicate inventory item id {id}")));
            }
            repository.push(item);
        }
        Ok(repository)
    }

    /// The storefront catalogue every session starts from.
    pub fn with_seed_items() -> Self {
        let mut repository = Self::empty();
        // Seed records carry freshly generated ids.
        for item in seed_items() {
            repository.push(item);
        }
        repository
    }

    fn empty() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, item: InventoryItem) {
        self.index.insert(item.id_typed(), self.items.len());
        self.items.push(item);
    }

    /// All records, in insertion order.
    pub fn get_all(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.index.get(&id).map(|&slot| &self.items[slot])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Change a record's quantity by `delta` (positive restocks, negative sells).
    ///
    /// The record is left untouched when the id is unknown or the quantity
    /// would drop below zero.
    pub fn adjust_quantity(
        &mut self,
        id: InventoryItemId,
        delta: i64,
    ) -> DomainResult<&InventoryItem> {
        let Some(&slot) = self.index.get(&id) else {
            warn!(item_id = %id, delta, "Adjust rejected: unknown item");
            return Err(DomainError::not_found(format!("inventory item {id}")));
        };

        let current = self.items[slot].quantity();
        let next = i64::from(current)
            .checked_add(delta)
            .ok_or_else(|| DomainError::validation(format!("quantity delta out of range: {delta}")))?;

        if next < 0 {
            warn!(item_id = %id, delta, available = current, "Adjust rejected: insufficient quantity");
            return Err(DomainError::insufficient_quantity(delta.unsigned_abs(), current));
        }

        let quantity = u32::try_from(next).map_err(|_| {
            DomainError::validation(format!("quantity would exceed {} (got {next})", u32::MAX))
        })?;

        let updated = self.items[slot].with_quantity(quantity);
        self.items[slot] = updated;
        debug!(item_id = %id, delta, from = current, to = quantity, "Quantity adjusted");

        Ok(&self.items[slot])
    }
}

impl Default for InventoryRepository {
    fn default() -> Self {
        Self::with_seed_items()
    }
}
