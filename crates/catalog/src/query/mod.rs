//! Фильтрация и сортировка коллекций товаров

pub mod filter;
pub mod item;
pub mod sort;

pub use filter::{filter_by_category, filter_with, Predicate, PriceRange, ProductQuery};
pub use item::CatalogItem;
pub use sort::{sort_items, sorted, SortKey};
