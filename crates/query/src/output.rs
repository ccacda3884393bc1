//! Executed results, numbered for display and selection.

use serde::{Deserialize, Serialize};
use teashop_inventory::InventoryItem;

use crate::query::InventoryQuery;

/// A result row with its 1-based display index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueriedInventoryItem {
    pub index: usize,
    #[serde(flatten)]
    pub item: InventoryItem,
}

/// One query's results plus the operations that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryQueryOutput {
    pub items: Vec<QueriedInventoryItem>,
    pub applied_filters_and_sorts: Vec<String>,
}

impl InventoryQueryOutput {
    /// Execute `query` once and number its results from 1.
    pub fn from_query<Q>(query: &Q) -> Self
    where
        Q: InventoryQuery + ?Sized,
    {
        let items = query
            .execute()
            .into_iter()
            .enumerate()
            .map(|(i, item)| QueriedInventoryItem { index: i + 1, item })
            .collect();

        Self {
            items,
            applied_filters_and_sorts: query.describe(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a row by the number shown to the shopper.
    pub fn select(&self, index: usize) -> Option<&QueriedInventoryItem> {
        index.checked_sub(1).and_then(|i| self.items.get(i))
    }
}
