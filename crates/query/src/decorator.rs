//! Decorator composition.
//!
//! [`Decorated`] pairs an inner query with one [`QueryStep`]. The step supplies
//! the transform and its description; the wrapper supplies the chaining:
//! inner results first, then this step.

use teashop_core::DomainResult;
use teashop_inventory::{InventoryItem, Price};
use tracing::trace;

use crate::filters::{
    Availability, AvailabilityFilter, MinStarRating, NameContains, PriceRange, StarRatingRange,
};
use crate::query::InventoryQuery;
use crate::sorts::{SortByPrice, SortByStarRating, SortDirection};

/// One filter or sort applied on top of an inner query.
pub trait QueryStep {
    /// Short label for logs.
    fn label(&self) -> &'static str;

    /// Narrow or reorder the records produced by the inner query.
    fn apply(&self, items: Vec<InventoryItem>) -> Vec<InventoryItem>;

    /// What this step did, or `None` when it restricts nothing.
    fn description(&self) -> Option<String>;
}

/// A query wrapped with one more step. Owns its inner query.
#[derive(Debug, Clone)]
pub struct Decorated<Q, S> {
    inner: Q,
    step: S,
}

impl<Q, S> Decorated<Q, S>
where
    Q: InventoryQuery,
    S: QueryStep,
{
    pub fn new(inner: Q, step: S) -> Self {
        Self { inner, step }
    }

    pub fn inner(&self) -> &Q {
        &self.inner
    }

    pub fn step(&self) -> &S {
        &self.step
    }
}

impl<Q, S> InventoryQuery for Decorated<Q, S>
where
    Q: InventoryQuery,
    S: QueryStep,
{
    fn execute(&self) -> Vec<InventoryItem> {
        let items = self.inner.execute();
        let before = items.len();
        let items = self.step.apply(items);
        trace!(step = self.step.label(), before, after = items.len(), "Step applied");
        items
    }

    fn describe(&self) -> Vec<String> {
        let mut applied = self.inner.describe();
        applied.extend(self.step.description());
        applied
    }
}

/// Fluent wrapping for any query.
///
/// Range constructors validate their bounds, so those helpers return a
/// `DomainResult` and fail before any record is read.
pub trait QueryExt: InventoryQuery + Sized {
    fn decorate<S: QueryStep>(self, step: S) -> Decorated<Self, S> {
        Decorated::new(self, step)
    }

    fn name_contains(self, substring: impl Into<String>) -> Decorated<Self, NameContains> {
        self.decorate(NameContains::new(substring))
    }

    fn availability(self, availability: Option<Availability>) -> Decorated<Self, AvailabilityFilter> {
        self.decorate(AvailabilityFilter::new(availability))
    }

    fn price_range(
        self,
        min: Option<Price>,
        max: Option<Price>,
    ) -> DomainResult<Decorated<Self, PriceRange>> {
        Ok(self.decorate(PriceRange::new(min, max)?))
    }

    fn star_rating_range(
        self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> DomainResult<Decorated<Self, StarRatingRange>> {
        Ok(self.decorate(StarRatingRange::new(min, max)?))
    }

    fn min_star_rating(self, min: i32) -> DomainResult<Decorated<Self, MinStarRating>> {
        Ok(self.decorate(MinStarRating::new(min)?))
    }

    fn sort_by_price(self, direction: SortDirection) -> Decorated<Self, SortByPrice> {
        self.decorate(SortByPrice::new(direction))
    }

    fn sort_by_star_rating(self, direction: SortDirection) -> Decorated<Self, SortByStarRating> {
        self.decorate(SortByStarRating::new(direction))
    }
}

impl<Q: InventoryQuery> QueryExt for Q {}
