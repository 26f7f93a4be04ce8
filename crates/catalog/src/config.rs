use crate::domain::{CategorySelection, DecorationTable, Price};
use crate::error::{CatalogError, Result};
use crate::index::IMAGE_EXTENSIONS;
use crate::query::SortKey;
use serde::Deserialize;

/// Настройки витрины
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub catalog: CatalogSettings,
    pub decoration: DecorationTable,
    pub contact: ContactSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    pub all_label: String,
    pub placeholder_image: String,
    pub default_sort: SortKey,
    pub image_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSettings {
    pub phone: String,
    pub whatsapp_url: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[catalog]
all_label = "All"
placeholder_image = "placeholder.svg"
default_sort = "natural"
image_extensions = ["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"]

[decoration]
titles = [
    "Blush Romance",
    "Crimson Elegance",
    "Garden Whisper",
    "Pastel Dream",
    "Sunlit Meadow",
    "Ivory Grace",
]
prices = [49.99, 79.99, 99.99, 129.99, 159.99, 199.99]
descriptions = [
    "Hand-tied by our florists with seasonal blooms",
    "A timeless arrangement for every celebration",
    "Fresh flowers wrapped in premium paper",
]

[contact]
phone = "+62 815-1122-9009"
whatsapp_url = "https://wa.me/6281511229009"
"#;

#[derive(Debug, Deserialize)]
struct RawConfig {
    catalog: RawCatalog,
    #[serde(default)]
    decoration: RawDecoration,
    contact: ContactSettings,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default = "default_all_label")]
    all_label: String,
    placeholder_image: String,
    #[serde(default)]
    default_sort: Option<String>,
    #[serde(default)]
    image_extensions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDecoration {
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    prices: Vec<f64>,
    #[serde(default)]
    descriptions: Vec<String>,
}

fn default_all_label() -> String {
    CategorySelection::ALL_SENTINEL.to_string()
}

impl SiteConfig {
    /// Встроенная конфигурация
    pub fn load_default() -> Result<Self> {
        log::debug!("Using default embedded configuration");
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Разбор и проверка конфигурации из TOML
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;

        let default_sort = match raw.catalog.default_sort.as_deref() {
            None => SortKey::default(),
            Some(code) => SortKey::from_code(code)
                .ok_or_else(|| CatalogError::Config(format!("unknown default_sort '{}'", code)))?,
        };

        let image_extensions = raw
            .catalog
            .image_extensions
            .unwrap_or_else(|| IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect());
        if image_extensions.is_empty() {
            return Err(CatalogError::Config("image_extensions must not be empty".into()));
        }

        let prices = raw
            .decoration
            .prices
            .iter()
            .map(|&amount| {
                Price::from_amount(amount)
                    .ok_or_else(|| CatalogError::Config(format!("invalid price {}", amount)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            catalog: CatalogSettings {
                all_label: raw.catalog.all_label,
                placeholder_image: raw.catalog.placeholder_image,
                default_sort,
                image_extensions,
            },
            decoration: DecorationTable {
                titles: raw.decoration.titles,
                prices,
                descriptions: raw.decoration.descriptions,
            },
            contact: raw.contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::load_default();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.catalog.all_label, "All");
        assert_eq!(config.catalog.default_sort, SortKey::Natural);
        assert_eq!(config.decoration.titles.len(), 6);
        assert_eq!(config.decoration.prices[0], Price::from_cents(4999));
        assert_eq!(config.contact.whatsapp_url, "https://wa.me/6281511229009");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[catalog]
placeholder_image = "p.png"

[contact]
phone = "1"
whatsapp_url = "https://wa.me/1"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.all_label, "All");
        assert_eq!(config.catalog.default_sort, SortKey::Natural);
        assert_eq!(config.catalog.image_extensions.len(), IMAGE_EXTENSIONS.len());
        assert!(config.decoration.is_empty());
    }

    #[test]
    fn test_unknown_sort_is_error() {
        let text = DEFAULT_CONFIG.replace("default_sort = \"natural\"", "default_sort = \"random\"");
        assert!(matches!(
            SiteConfig::from_toml_str(&text),
            Err(CatalogError::Config(msg)) if msg.contains("random")
        ));
    }

    #[test]
    fn test_negative_price_is_error() {
        let text = DEFAULT_CONFIG.replace("49.99", "-5.0");
        assert!(matches!(SiteConfig::from_toml_str(&text), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            SiteConfig::from_toml_str("[catalog"),
            Err(CatalogError::Config(_))
        ));
    }
}
