//! Product grid filtering and sorting.

use serde::Serialize;

use crate::models::ProductCard;
use crate::store::Store;

/// Category filter. `all` matches every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Category(s.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, card: &ProductCard) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => card.category == *category,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }
}

/// Grid sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending price.
    PriceLow,
    /// Descending price.
    PriceHigh,
    /// Descending rating.
    Rating,
    /// Keep the current order.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parse a sort key. Unknown keys leave the grid order unchanged.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            _ => Self::Unsorted,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Unsorted => "",
        }
    }
}

/// Cards matching a category, in grid order.
#[must_use]
pub fn filter_products<'a>(cards: &'a [ProductCard], filter: &CategoryFilter) -> Vec<&'a ProductCard> {
    tracing::info!(category = filter.as_str(), "Filtering products");
    cards.iter().filter(|card| filter.matches(card)).collect()
}

/// Sort cards in place. The sort is stable; ties keep their order.
pub fn sort_products(cards: &mut [ProductCard], key: SortKey) {
    tracing::info!(sort_by = key.as_str(), "Sorting products");
    match key {
        SortKey::PriceLow => {
            cards.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
        }
        SortKey::PriceHigh => {
            cards.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
        }
        SortKey::Rating => {
            cards.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        SortKey::Unsorted => {}
    }
}

/// The product grid after filtering and sorting.
#[derive(Debug, Clone, Serialize)]
pub struct ProductGrid {
    pub category: String,
    pub sort_by: String,
    pub products: Vec<ProductCard>,
    /// Cards hidden by the category filter.
    pub hidden: usize,
    /// Titles of visible cards that are on the wishlist.
    pub wishlisted: Vec<String>,
}

impl ProductGrid {
    /// Filter then sort `cards`.
    #[must_use]
    pub fn build(cards: &[ProductCard], filter: &CategoryFilter, key: SortKey) -> Self {
        let mut products: Vec<ProductCard> = filter_products(cards, filter)
            .into_iter()
            .cloned()
            .collect();
        sort_products(&mut products, key);

        Self {
            category: filter.as_str().to_owned(),
            sort_by: key.as_str().to_owned(),
            hidden: cards.len() - products.len(),
            products,
            wishlisted: Vec::new(),
        }
    }

    /// Record which visible cards are wishlisted, for their heart icons.
    pub fn mark_wishlisted<S>(&mut self, store: &Store<S>) {
        self.wishlisted = self
            .products
            .iter()
            .filter(|card| store.is_wishlisted(&card.title))
            .map(|card| card.title.clone())
            .collect();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gaming_odyssey_core::Price;

    use super::*;

    fn card(title: &str, price: &str, category: &str, rating: f64) -> ProductCard {
        ProductCard {
            id: format!("PROD-{title}"),
            title: title.to_string(),
            price: Price::parse(price).unwrap(),
            image: String::new(),
            category: category.to_string(),
            rating,
        }
    }

    fn titles(cards: &[ProductCard]) -> Vec<&str> {
        cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_sort_price_low() {
        let mut cards = vec![
            card("a", "$50", "x", 0.0),
            card("b", "$10", "x", 0.0),
            card("c", "$30", "x", 0.0),
        ];
        sort_products(&mut cards, SortKey::PriceLow);
        assert_eq!(titles(&cards), ["b", "c", "a"]);
    }

    #[test]
    fn test_sort_price_high() {
        let mut cards = vec![
            card("a", "$50", "x", 0.0),
            card("b", "$10", "x", 0.0),
            card("c", "$30", "x", 0.0),
        ];
        sort_products(&mut cards, SortKey::PriceHigh);
        assert_eq!(titles(&cards), ["a", "c", "b"]);
    }

    #[test]
    fn test_sort_rating_descending() {
        let mut cards = vec![
            card("three", "$1", "x", 3.0),
            card("five", "$1", "x", 5.0),
            card("four", "$1", "x", 4.0),
        ];
        sort_products(&mut cards, SortKey::Rating);
        assert_eq!(titles(&cards), ["five", "four", "three"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut cards = vec![
            card("first", "$10", "x", 4.0),
            card("second", "$10", "x", 4.0),
            card("cheap", "$5", "x", 1.0),
        ];
        sort_products(&mut cards, SortKey::PriceLow);
        assert_eq!(titles(&cards), ["cheap", "first", "second"]);
        sort_products(&mut cards, SortKey::Rating);
        assert_eq!(titles(&cards), ["first", "second", "cheap"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_order() {
        assert_eq!(SortKey::parse("newest"), SortKey::Unsorted);
        let mut cards = vec![card("b", "$2", "x", 1.0), card("a", "$1", "x", 2.0)];
        sort_products(&mut cards, SortKey::parse("newest"));
        assert_eq!(titles(&cards), ["b", "a"]);
    }

    #[test]
    fn test_filter_by_category() {
        let cards = vec![
            card("hoodie", "$50", "apparel", 4.0),
            card("mouse", "$20", "accessories", 4.0),
            card("tee", "$25", "apparel", 4.0),
        ];

        let apparel = filter_products(&cards, &CategoryFilter::parse("apparel"));
        let apparel: Vec<&str> = apparel.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(apparel, ["hoodie", "tee"]);

        let all = filter_products(&cards, &CategoryFilter::parse("all"));
        assert_eq!(all.len(), 3);

        let none = filter_products(&cards, &CategoryFilter::parse("Apparel"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_product_grid_build() {
        let cards = vec![
            card("hoodie", "$50", "apparel", 4.0),
            card("mouse", "$20", "accessories", 4.0),
            card("tee", "$25", "apparel", 4.0),
        ];

        let grid = ProductGrid::build(
            &cards,
            &CategoryFilter::parse("apparel"),
            SortKey::PriceLow,
        );
        assert_eq!(grid.category, "apparel");
        assert_eq!(grid.sort_by, "price-low");
        assert_eq!(grid.hidden, 1);
        assert_eq!(titles(&grid.products), ["tee", "hoodie"]);
        assert!(grid.wishlisted.is_empty());
    }

    #[test]
    fn test_mark_wishlisted_only_visible_cards() {
        use crate::storage::MemoryStorage;

        let cards = vec![
            card("hoodie", "$50", "apparel", 4.0),
            card("mouse", "$20", "accessories", 4.0),
        ];
        let mut store = Store::open(MemoryStorage::new());
        store.toggle_wishlist("hoodie");
        store.toggle_wishlist("mouse");

        let mut grid = ProductGrid::build(
            &cards,
            &CategoryFilter::parse("apparel"),
            SortKey::Unsorted,
        );
        grid.mark_wishlisted(&store);
        assert_eq!(grid.wishlisted, ["hoodie".to_string()]);
    }
}
