use thiserror::Error;

/// Ошибки построения каталога
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Asset manifest is empty: no catalogue images were bundled")]
    EmptyManifest,

    #[error("Malformed asset path '{path}': {reason}")]
    MalformedAssetPath { path: String, reason: &'static str },

    #[error("Too many catalogue assets: position {0} does not fit a product id")]
    TooManyAssets(usize),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown catalogue: {0}")]
    UnknownCatalogue(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidManifest(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
