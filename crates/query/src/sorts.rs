//! Sort steps. All sorts are stable and always described.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};
use teashop_inventory::InventoryItem;

use crate::decorator::QueryStep;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// Orient a key comparison. Reversing the comparison, rather than the
    /// sorted output, keeps ties in their incoming order.
    fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortByPrice {
    direction: SortDirection,
}

impl SortByPrice {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

impl QueryStep for SortByPrice {
    fn label(&self) -> &'static str {
        "sort_by_price"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        items.sort_by(|a, b| self.direction.orient(a.price().cmp(&b.price())));
        items
    }

    fn description(&self) -> Option<String> {
        Some(format!("Sort: Price ({})", self.direction))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortByStarRating {
    direction: SortDirection,
}

impl SortByStarRating {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }
}

impl QueryStep for SortByStarRating {
    fn label(&self) -> &'static str {
        "sort_by_star_rating"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        items.sort_by(|a, b| self.direction.orient(a.star_rating().cmp(&b.star_rating())));
        items
    }

    fn description(&self) -> Option<String> {
        Some(format!("Sort: Star rating ({})", self.direction))
    }
}
