//! Фильтры коллекции.
//!
//! Каждый предикат независим и сохраняет порядок; результат не зависит от
//! порядка применения, поэтому `ProductQuery` проверяет их за один проход.

use super::item::CatalogItem;
use crate::domain::{CategorySelection, Price};
use crate::shared::normalize_search;
use serde::{Deserialize, Serialize};

/// Подпоследовательность товаров выбранной категории; для `All` вся коллекция
pub fn filter_by_category<T: CatalogItem + Clone>(items: &[T], selection: &CategorySelection) -> Vec<T> {
    if selection.is_all() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| selection.matches(item.category()))
        .cloned()
        .collect()
}

/// Диапазон цен, границы включительно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<Price>,
    pub max: Option<Price>,
}

impl PriceRange {
    pub fn new(min: Option<Price>, max: Option<Price>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Товар без цены проходит только через неограниченный диапазон
    pub fn contains(&self, price: Option<Price>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(price) = price else {
            return false;
        };
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Отдельный предикат фильтра
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Category(CategorySelection),
    Search(String),
    Price(PriceRange),
}

impl Predicate {
    /// Новая коллекция из подходящих товаров; вход не изменяется
    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> Vec<T> {
        let needle = normalize_search(&self.search);
        items
            .iter()
            .filter(|item| {
                self.category.matches(item.category())
                    && item.matches_search(&needle)
                    && self.price.contains(item.price())
            })
            .cloned()
            .collect()
    }
}
