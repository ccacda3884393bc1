//! The query capability and its base variant.

use teashop_inventory::{InventoryItem, InventoryRepository};

/// A read over the inventory that can report what it applied.
pub trait InventoryQuery {
    /// Run the query and return the matching records in result order.
    fn execute(&self) -> Vec<InventoryItem>;

    /// Human-readable descriptions of the filters and sorts applied, innermost first.
    fn describe(&self) -> Vec<String>;
}

impl<Q> InventoryQuery for Box<Q>
where
    Q: InventoryQuery + ?Sized,
{
    fn execute(&self) -> Vec<InventoryItem> {
        (**self).execute()
    }

    fn describe(&self) -> Vec<String> {
        (**self).describe()
    }
}

/// Type-erased query chain, as assembled at runtime.
pub type BoxedQuery<'a> = Box<dyn InventoryQuery + 'a>;

/// Every record in the store, in store order, with nothing applied.
#[derive(Debug, Clone, Copy)]
pub struct AllInventoryQuery<'a> {
    repository: &'a InventoryRepository,
}

impl<'a> AllInventoryQuery<'a> {
    pub fn new(repository: &'a InventoryRepository) -> Self {
        Self { repository }
    }
}

impl InventoryQuery for AllInventoryQuery<'_> {
    fn execute(&self) -> Vec<InventoryItem> {
        self.repository.get_all().to_vec()
    }

    fn describe(&self) -> Vec<String> {
        Vec::new()
    }
}
