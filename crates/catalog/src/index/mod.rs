//! Индекс каталога, построенный по набору изображений

pub mod catalog_index;
pub mod manifest;

pub use catalog_index::AssetCatalogIndex;
pub use manifest::{AssetEntry, AssetManifest, IMAGE_EXTENSIONS};
