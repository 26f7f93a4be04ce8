//! Манифест изображений, собранный `build.rs` из `public/catalogue`.

use catalog::{AssetCatalogIndex, AssetManifest, SiteConfig};

const ASSET_MANIFEST_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/asset_manifest.json"));

/// Строит индекс каталога из встроенного манифеста.
///
/// Ошибка логируется один раз и возвращается строкой для диагностического блока;
/// повторных попыток нет.
pub fn load_index(config: &SiteConfig) -> Result<AssetCatalogIndex, String> {
    AssetManifest::from_json_with_extensions(ASSET_MANIFEST_JSON, config.catalog.image_extensions.as_slice())
        .and_then(|manifest| AssetCatalogIndex::build(&manifest))
        .map_err(|e| {
            log::error!("Failed to build catalogue index: {}", e);
            e.to_string()
        })
}

/// URL изображения относительно корня сайта
pub fn asset_url(path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
