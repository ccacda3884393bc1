//! Composable inventory queries.
//!
//! A query starts from [`AllInventoryQuery`] (every record in the store) and is
//! narrowed or reordered by wrapping it in decorators, one filter or sort per
//! layer:
//!
//! ```ignore
//! let query = AllInventoryQuery::new(&repository)
//!     .name_contains("tea")
//!     .availability(Some(Availability::InStock))
//!     .price_range(None, Some("20".parse()?))?
//!     .sort_by_price(SortDirection::Ascending);
//!
//! let teas = query.execute();
//! let applied = query.describe();
//! ```
//!
//! Each decorator owns the query it wraps. Executing pulls records from the
//! innermost query outward; describing lists the applied operations in the
//! order they were wrapped, skipping layers that restrict nothing.

pub mod builder;
pub mod decorator;
pub mod filters;
pub mod output;
pub mod query;
pub mod sorts;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::{InventoryQueryBuilder, SearchCriteria};
pub use decorator::{Decorated, QueryExt, QueryStep};
pub use filters::{
    Availability, AvailabilityFilter, MinStarRating, NameContains, PriceRange, StarRatingRange,
};
pub use output::{InventoryQueryOutput, QueriedInventoryItem};
pub use query::{AllInventoryQuery, BoxedQuery, InventoryQuery};
pub use sorts::{SortByPrice, SortByStarRating, SortDirection};
