//! Checkout: the one flow that writes to the record store.
//!
//! Payment itself happens elsewhere; a successful checkout hands back a
//! [`PurchaseReceipt`] for the payment collaborator to charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teashop_core::{DomainError, DomainResult, InventoryItemId};
use tracing::{info, warn};

use crate::money::Price;
use crate::repository::InventoryRepository;

/// Command: buy `quantity` units of one tea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub item_id: InventoryItemId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub item_id: InventoryItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Price,
    pub total_price: Price,
    pub remaining_quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

impl InventoryRepository {
    /// Price the purchase and take the units out of stock.
    pub fn checkout(&mut self, purchase: &Purchase) -> DomainResult<PurchaseReceipt> {
        if purchase.quantity == 0 {
            return Err(DomainError::validation("purchase quantity must be at least 1"));
        }

        let item = self
            .get(purchase.item_id)
            .ok_or_else(|| DomainError::not_found(format!("inventory item {}", purchase.item_id)))?;

        if purchase.quantity > item.quantity() {
            warn!(
                item_id = %purchase.item_id,
                requested = purchase.quantity,
                available = item.quantity(),
                "Checkout rejected"
            );
            return Err(DomainError::insufficient_quantity(
                u64::from(purchase.quantity),
                item.quantity(),
            ));
        }

        let name = item.name().to_string();
        let unit_price = item.price();
        let total_price = unit_price.checked_mul(purchase.quantity).ok_or_else(|| {
            DomainError::validation(format!("total for {} x {name} overflows", purchase.quantity))
        })?;

        let remaining_quantity = self
            .adjust_quantity(purchase.item_id, -i64::from(purchase.quantity))?
            .quantity();

        info!(
            item_id = %purchase.item_id,
            quantity = purchase.quantity,
            total = %total_price,
            remaining = remaining_quantity,
            "Checkout complete"
        );

        Ok(PurchaseReceipt {
            item_id: purchase.item_id,
            name,
            quantity: purchase.quantity,
            unit_price,
            total_price,
            remaining_quantity,
            occurred_at: purchase.occurred_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InventoryItem, StarRating};

    fn repository_with(quantity: u32) -> (InventoryRepository, InventoryItemId) {
        let item = InventoryItem::new(
            InventoryItemId::new(),
            "Oolong Tea",
            Price::from_cents(1800),
            quantity,
            StarRating::FIVE,
        );
        let id = item.id_typed();
        (InventoryRepository::new([item]).unwrap(), id)
    }

    fn purchase(item_id: InventoryItemId, quantity: u32) -> Purchase {
        Purchase {
            item_id,
            quantity,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn checkout_decrements_stock_and_prices_receipt() {
        let (mut repository, id) = repository_with(10);
        let order = purchase(id, 3);

        let receipt = repository.checkout(&order).unwrap();

        assert_eq!(receipt.name, "Oolong Tea");
        assert_eq!(receipt.quantity, 3);
        assert_eq!(receipt.unit_price, Price::from_cents(1800));
        assert_eq!(receipt.total_price, Price::from_cents(5400));
        assert_eq!(receipt.remaining_quantity, 7);
        assert_eq!(receipt.occurred_at, order.occurred_at);
        assert_eq!(repository.get(id).unwrap().quantity(), 7);
    }

    #[test]
    fn checkout_can_buy_the_last_unit() {
        let (mut repository, id) = repository_with(1);
        let receipt = repository.checkout(&purchase(id, 1)).unwrap();
        assert_eq!(receipt.remaining_quantity, 0);
        assert!(!repository.get(id).unwrap().is_available());
    }

    #[test]
    fn checkout_rejects_zero_quantity() {
        let (mut repository, id) = repository_with(10);
        let err = repository.checkout(&purchase(id, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn checkout_rejects_more_than_in_stock() {
        let (mut repository, id) = repository_with(10);
        let err = repository.checkout(&purchase(id, 11)).unwrap_err();
        assert_eq!(err, DomainError::insufficient_quantity(11, 10));
        assert_eq!(repository.get(id).unwrap().quantity(), 10);
    }

    #[test]
    fn checkout_rejects_unknown_item() {
        let (mut repository, _) = repository_with(10);
        let err = repository.checkout(&purchase(InventoryItemId::new(), 1)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
