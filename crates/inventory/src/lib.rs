//! Inventory domain module.
//!
//! Records, the in-memory record store and the checkout command that is the
//! store's only writer. Pure domain logic: no IO, no persistence.

pub mod checkout;
pub mod item;
pub mod money;
pub mod rating;
pub mod repository;
pub mod seed;

pub use checkout::{Purchase, PurchaseReceipt};
pub use item::InventoryItem;
pub use money::Price;
pub use rating::StarRating;
pub use repository::InventoryRepository;
pub use seed::seed_items;

pub use teashop_core::InventoryItemId;
