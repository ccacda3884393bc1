//! Filter steps. Each keeps the records it matches, in incoming order.

use serde::{Deserialize, Serialize};
use teashop_core::{DomainError, DomainResult};
use teashop_inventory::{InventoryItem, Price, StarRating};

use crate::decorator::QueryStep;

/// Case-insensitive substring match on the tea's name. Blank matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains {
    substring: String,
}

impl NameContains {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.substring.trim().is_empty()
    }
}

impl QueryStep for NameContains {
    fn label(&self) -> &'static str {
        "name_contains"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        if self.is_blank() {
            return items;
        }
        let needle = self.substring.to_lowercase();
        items.retain(|item| item.name().to_lowercase().contains(&needle));
        items
    }

    fn description(&self) -> Option<String> {
        (!self.is_blank()).then(|| format!("Filter: Name contains \"{}\"", self.substring))
    }
}

/// Which side of the stock line to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Quantity > 0.
    InStock,
    /// Quantity = 0.
    OutOfStock,
}

impl Availability {
    pub fn matches(self, item: &InventoryItem) -> bool {
        match self {
            Availability::InStock => item.is_available(),
            Availability::OutOfStock => !item.is_available(),
        }
    }
}

/// Availability filter; `None` keeps everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityFilter {
    availability: Option<Availability>,
}

impl AvailabilityFilter {
    pub fn new(availability: Option<Availability>) -> Self {
        Self { availability }
    }
}

impl QueryStep for AvailabilityFilter {
    fn label(&self) -> &'static str {
        "availability"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        if let Some(availability) = self.availability {
            items.retain(|item| availability.matches(item));
        }
        items
    }

    fn description(&self) -> Option<String> {
        self.availability.map(|availability| {
            match availability {
                Availability::InStock => "Filter: Availability = In Stock (Quantity > 0)",
                Availability::OutOfStock => "Filter: Availability = Out of Stock (Quantity = 0)",
            }
            .to_string()
        })
    }
}

/// Describes an optional inclusive range the way the shop prints it.
fn describe_range<T: core::fmt::Display>(
    subject: &str,
    min: Option<T>,
    max: Option<T>,
) -> Option<String> {
    match (min, max) {
        (None, None) => None,
        (Some(min), Some(max)) => Some(format!(
            "Filter: {subject} between {min} and {max} (inclusive)"
        )),
        (Some(min), None) => Some(format!("Filter: {subject} >= {min}")),
        (None, Some(max)) => Some(format!("Filter: {subject} <= {max}")),
    }
}

/// Inclusive price bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Option<Price>,
    max: Option<Price>,
}

impl PriceRange {
    /// Fails with [`DomainError::InvalidRange`] when `min > max`.
    pub fn new(min: Option<Price>, max: Option<Price>) -> DomainResult<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DomainError::invalid_range(min, max));
            }
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

impl QueryStep for PriceRange {
    fn label(&self) -> &'static str {
        "price_range"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        items.retain(|item| self.contains(item.price()));
        items
    }

    fn description(&self) -> Option<String> {
        describe_range("Price", self.min, self.max)
    }
}

/// Inclusive star-rating bounds within 1–5; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRatingRange {
    min: Option<StarRating>,
    max: Option<StarRating>,
}

impl StarRatingRange {
    pub fn new(min: Option<i32>, max: Option<i32>) -> DomainResult<Self> {
        let min = min.map(StarRating::new).transpose()?;
        let max = max.map(StarRating::new).transpose()?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DomainError::invalid_range(min.value(), max.value()));
            }
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, rating: StarRating) -> bool {
        self.min.is_none_or(|min| rating >= min) && self.max.is_none_or(|max| rating <= max)
    }
}

impl QueryStep for StarRatingRange {
    fn label(&self) -> &'static str {
        "star_rating_range"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        items.retain(|item| self.contains(item.star_rating()));
        items
    }

    fn description(&self) -> Option<String> {
        describe_range(
            "Star rating",
            self.min.map(StarRating::value),
            self.max.map(StarRating::value),
        )
    }
}

/// Ratings at or above a floor. Always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinStarRating {
    min: StarRating,
}

impl MinStarRating {
    pub fn new(min: i32) -> DomainResult<Self> {
        Ok(Self {
            min: StarRating::new(min)?,
        })
    }
}

impl QueryStep for MinStarRating {
    fn label(&self) -> &'static str {
        "min_star_rating"
    }

    fn apply(&self, mut items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        items.retain(|item| item.star_rating() >= self.min);
        items
    }

    fn description(&self) -> Option<String> {
        Some(format!("Filter: Star rating >= {}", self.min.value()))
    }
}
