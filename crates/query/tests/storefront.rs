//! Search → select → checkout → search again, against the seed catalogue.

use chrono::Utc;
use teashop_core::DomainError;
use teashop_inventory::{InventoryRepository, Price, Purchase};
use teashop_query::{
    Availability, InventoryQuery, InventoryQueryBuilder, InventoryQueryOutput, SearchCriteria,
    SortDirection,
};

fn search(repository: &InventoryRepository, criteria: &SearchCriteria) -> InventoryQueryOutput {
    let query = InventoryQueryBuilder::new(repository)
        .build(criteria)
        .expect("valid criteria");
    InventoryQueryOutput::from_query(&query)
}

#[test]
fn buying_out_a_tea_removes_it_from_in_stock_results() {
    let mut repository = InventoryRepository::with_seed_items();
    let criteria = SearchCriteria {
        name_contains: Some("gyokuro".to_string()),
        availability: Some(Availability::InStock),
        ..SearchCriteria::default()
    };

    let output = search(&repository, &criteria);
    assert_eq!(output.len(), 1);
    let selected = output.select(1).expect("row 1").item.clone();
    assert_eq!(selected.quantity(), 8);

    let receipt = repository
        .checkout(&Purchase {
            item_id: selected.id_typed(),
            quantity: 8,
            occurred_at: Utc::now(),
        })
        .expect("enough stock");
    assert_eq!(receipt.total_price, Price::from_cents(26_000));
    assert_eq!(receipt.remaining_quantity, 0);

    assert!(search(&repository, &criteria).is_empty());

    let sold_out = SearchCriteria {
        availability: Some(Availability::OutOfStock),
        ..criteria
    };
    let output = search(&repository, &sold_out);
    assert_eq!(output.len(), 1);
    assert_eq!(output.items[0].item.name(), "Gyokuro");
}

#[test]
fn failed_checkout_leaves_results_unchanged() {
    let mut repository = InventoryRepository::with_seed_items();
    let criteria = SearchCriteria {
        name_contains: Some("oolong".to_string()),
        ..SearchCriteria::default()
    };
    let before = search(&repository, &criteria);
    let oolong = before
        .items
        .iter()
        .find(|row| row.item.name() == "Oolong Tea")
        .expect("seeded")
        .item
        .clone();

    let err = repository
        .checkout(&Purchase {
            item_id: oolong.id_typed(),
            quantity: oolong.quantity() + 1,
            occurred_at: Utc::now(),
        })
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::insufficient_quantity(u64::from(oolong.quantity()) + 1, oolong.quantity())
    );

    assert_eq!(search(&repository, &criteria), before);
}

#[test]
fn filter_order_changes_description_not_results() {
    use teashop_query::{AllInventoryQuery, QueryExt};

    let repository = InventoryRepository::with_seed_items();
    let cheap = Some("12".parse::<Price>().unwrap());

    let availability_first = AllInventoryQuery::new(&repository)
        .availability(Some(Availability::InStock))
        .price_range(None, cheap)
        .unwrap()
        .sort_by_price(SortDirection::Descending);
    let price_first = AllInventoryQuery::new(&repository)
        .price_range(None, cheap)
        .unwrap()
        .availability(Some(Availability::InStock))
        .sort_by_price(SortDirection::Descending);

    assert_eq!(availability_first.execute(), price_first.execute());
    assert_eq!(
        availability_first.describe(),
        [
            "Filter: Availability = In Stock (Quantity > 0)",
            "Filter: Price <= $12.00",
            "Sort: Price (descending)",
        ]
    );
    assert_eq!(
        price_first.describe(),
        [
            "Filter: Price <= $12.00",
            "Filter: Availability = In Stock (Quantity > 0)",
            "Sort: Price (descending)",
        ]
    );
}
