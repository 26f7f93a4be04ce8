//! Доменные типы каталога

pub mod category;
pub mod decorated;
pub mod occasion;
pub mod product;

// Re-exports
pub use category::CategorySelection;
pub use decorated::{decorate, DecoratedProduct, DecorationTable, Price};
pub use occasion::OccasionCatalogue;
pub use product::Product;
