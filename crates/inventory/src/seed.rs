//! The storefront catalogue a session starts with.

use teashop_core::InventoryItemId;

use crate::item::InventoryItem;
use crate::money::Price;
use crate::rating::StarRating;

/// (name, price in cents, quantity, rating)
const CATALOGUE: [(&str, u64, u32, StarRating); 50] = [
    ("Green Tea", 1599, 50, StarRating::FOUR),
    ("Black Tea", 1249, 75, StarRating::FIVE),
    ("Herbal Tea", 1429, 30, StarRating::THREE),
    ("Oolong Tea", 1800, 10, StarRating::FIVE),
    ("Matcha", 2999, 0, StarRating::FOUR),
    ("White Tea", 2250, 25, StarRating::FOUR),
    ("Chai Tea", 1099, 60, StarRating::THREE),
    ("Earl Grey", 1399, 45, StarRating::FIVE),
    ("Rooibos", 1710, 0, StarRating::FIVE),
    ("Mint Tea", 1189, 80, StarRating::ONE),
    ("Jasmine Green", 1675, 35, StarRating::FOUR),
    ("Genmaicha", 1410, 28, StarRating::THREE),
    ("Sencha", 1925, 40, StarRating::FOUR),
    ("Darjeeling", 2160, 18, StarRating::FIVE),
    ("Assam", 1340, 55, StarRating::FOUR),
    ("Ceylon", 1290, 62, StarRating::THREE),
    ("Lapsang Souchong", 2075, 12, StarRating::TWO),
    ("Keemun", 1735, 22, StarRating::FOUR),
    ("Pu-erh", 2680, 15, StarRating::FIVE),
    ("Hojicha", 1520, 48, StarRating::THREE),
    ("Gyokuro", 3250, 8, StarRating::FIVE),
    ("Bancha", 995, 90, StarRating::TWO),
    ("Yerba Mate", 1150, 70, StarRating::THREE),
    ("Tulsi", 1325, 33, StarRating::FOUR),
    ("Chamomile", 875, 120, StarRating::TWO),
    ("Lavender", 960, 44, StarRating::TWO),
    ("Lemongrass", 1040, 52, StarRating::THREE),
    ("Peppermint", 925, 0, StarRating::ONE),
    ("Spearmint", 910, 66, StarRating::TWO),
    ("Ginger Tea", 1215, 58, StarRating::THREE),
    ("Lemon Ginger", 1180, 47, StarRating::THREE),
    ("Turmeric Tea", 1395, 38, StarRating::FOUR),
    ("Hibiscus", 1025, 41, StarRating::TWO),
    ("Rosehip", 1055, 29, StarRating::THREE),
    ("Berry Blend", 1205, 34, StarRating::FOUR),
    ("Cinnamon Spice", 1135, 57, StarRating::THREE),
    ("Vanilla Chai", 1485, 26, StarRating::FOUR),
    ("Masala Chai", 1545, 21, StarRating::FIVE),
    ("Kashmiri Chai", 1890, 9, StarRating::FOUR),
    ("London Fog", 1370, 31, StarRating::THREE),
    ("Breakfast Blend", 1220, 63, StarRating::FOUR),
    ("English Breakfast", 1195, 77, StarRating::FOUR),
    ("Irish Breakfast", 1265, 54, StarRating::THREE),
    ("Scottish Breakfast", 1315, 0, StarRating::TWO),
    ("Smoky Earl Grey", 1455, 24, StarRating::FIVE),
    ("Orange Pekoe", 1085, 68, StarRating::THREE),
    ("Lemon Zest", 975, 83, StarRating::TWO),
    ("Peach Oolong", 1790, 14, StarRating::FOUR),
    ("Coconut Green", 1640, 0, StarRating::THREE),
    ("Caramel Rooibos", 1835, 19, StarRating::FOUR),
];

/// Fresh records for the seed catalogue, each with a newly generated id.
pub fn seed_items() -> Vec<InventoryItem> {
    CATALOGUE
        .iter()
        .map(|&(name, cents, quantity, rating)| {
            InventoryItem::new(
                InventoryItemId::new(),
                name,
                Price::from_cents(cents),
                quantity,
                rating,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_ids_are_unique() {
        let items = seed_items();
        let names: HashSet<_> = items.iter().map(InventoryItem::name).collect();
        let ids: HashSet<_> = items.iter().map(InventoryItem::id_typed).collect();
        assert_eq!(names.len(), items.len());
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn some_teas_start_out_of_stock() {
        let sold_out: Vec<_> = seed_items()
            .into_iter()
            .filter(|item| !item.is_available())
            .map(|item| item.name().to_string())
            .collect();
        assert_eq!(
            sold_out,
            ["Matcha", "Rooibos", "Peppermint", "Scottish Breakfast", "Coconut Green"]
        );
    }
}
