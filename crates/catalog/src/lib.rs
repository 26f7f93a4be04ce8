//! Каталог букетов Bloome: построение каталога из набора изображений,
//! фильтрация, сортировка и состояние страниц каталога.
//!
//! Крейт не выполняет I/O: на вход подаётся список путей к ассетам,
//! собранный на этапе сборки фронтенда.

pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod query;
pub mod shared;
pub mod state;

// Re-exports
pub use config::SiteConfig;
pub use domain::category::CategorySelection;
pub use domain::decorated::{decorate, DecoratedProduct, DecorationTable, Price};
pub use domain::occasion::OccasionCatalogue;
pub use domain::product::Product;
pub use error::{CatalogError, Result};
pub use index::{AssetCatalogIndex, AssetManifest};
pub use query::{filter_by_category, sort_items, CatalogItem, PriceRange, ProductQuery, SortKey};
pub use state::{CatalogPageState, PageAction};
