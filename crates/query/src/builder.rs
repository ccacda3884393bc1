//! Assembles the storefront search chain from a set of criteria.

use serde::{Deserialize, Serialize};
use teashop_core::DomainResult;
use teashop_inventory::{InventoryRepository, Price};
use tracing::debug;

use crate::decorator::QueryExt;
use crate::filters::Availability;
use crate::query::{AllInventoryQuery, BoxedQuery};
use crate::sorts::SortDirection;

/// What a shopper asked for. `None` leaves a dimension unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub name_contains: Option<String>,
    pub availability: Option<Availability>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub price_sort: SortDirection,
    pub rating_sort: SortDirection,
}

impl SearchCriteria {
    /// The answers a shopper gets by accepting every prompt's default:
    /// in stock, $0 to $1,000, three to five stars, best rated first.
    pub fn storefront_defaults() -> Self {
        Self {
            name_contains: None,
            availability: Some(Availability::InStock),
            min_price: Some(Price::ZERO),
            max_price: Some(Price::from_cents(100_000)),
            min_rating: Some(3),
            max_rating: Some(5),
            price_sort: SortDirection::Ascending,
            rating_sort: SortDirection::Descending,
        }
    }
}

/// Builds query chains over one repository.
#[derive(Debug, Clone, Copy)]
pub struct InventoryQueryBuilder<'a> {
    repository: &'a InventoryRepository,
}

impl<'a> InventoryQueryBuilder<'a> {
    pub fn new(repository: &'a InventoryRepository) -> Self {
        Self { repository }
    }

    /// Wrap the base query as name → availability → price → rating → price
    /// sort → rating sort. Invalid bounds fail here, before anything runs.
    pub fn build(&self, criteria: &SearchCriteria) -> DomainResult<BoxedQuery<'a>> {
        let query = AllInventoryQuery::new(self.repository)
            .name_contains(criteria.name_contains.clone().unwrap_or_default())
            .availability(criteria.availability)
            .price_range(criteria.min_price, criteria.max_price)?
            .star_rating_range(criteria.min_rating, criteria.max_rating)?
            .sort_by_price(criteria.price_sort)
            .sort_by_star_rating(criteria.rating_sort);

        debug!(?criteria, "Inventory query built");
        Ok(Box::new(query))
    }
}
