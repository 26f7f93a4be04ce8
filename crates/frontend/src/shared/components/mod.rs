pub mod catalog_toolbar;
pub mod category_bar;
pub mod error_panel;
pub mod product_card;
pub mod product_modal;

pub use catalog_toolbar::CatalogToolbar;
pub use category_bar::CategoryBar;
pub use error_panel::ErrorPanel;
pub use product_card::{ProductCard, ProductImage};
pub use product_modal::ProductModal;
