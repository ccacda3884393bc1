//! `teashop-core`: domain building blocks shared by the tea shop crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::InventoryItemId;
pub use value_object::ValueObject;
