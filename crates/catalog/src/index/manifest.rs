//! Манифест ассетов: список путей к изображениям каталога.
//!
//! Путь имеет вид `<...>/<Категория>/<файл>`; категорией считается непосредственная
//! родительская папка файла. Порядок записей совпадает с порядком входного
//! списка; если источник не гарантирует порядок (обход файловой системы),
//! манифест нужно упорядочить через `sorted()`.

use crate::error::{CatalogError, Result};
use crate::shared::file_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Расширения, которые считаются изображениями
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"];

/// Одна запись манифеста
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Нормализованный путь (разделитель `/`, без ведущих `./` и `/`)
    pub path: String,
    /// Имя родительской папки как в источнике
    pub category: String,
}

impl AssetEntry {
    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    entries: Vec<AssetEntry>,
}

impl AssetManifest {
    /// Манифест из набора путей; учитываются только изображения
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_paths_with_extensions(paths, IMAGE_EXTENSIONS)
    }

    /// Манифест из набора путей с явным списком расширений
    pub fn from_paths_with_extensions<I, S, E>(paths: I, extensions: &[E]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let mut entries = Vec::new();
        for raw in paths {
            let raw = raw.as_ref();
            let path = normalize_path(raw);
            let entry = parse_entry(&path)?;
            if !has_extension(entry.file_name(), extensions) {
                log::debug!("Skipping non-image asset: {}", path);
                continue;
            }
            entries.push(entry);
        }

        let before = entries.len();
        let mut seen = HashSet::new();
        entries.retain(|e| seen.insert(e.path.clone()));
        if entries.len() != before {
            log::warn!(
                "Asset manifest contains {} duplicate path(s), collapsed",
                before - entries.len()
            );
        }

        if entries.is_empty() {
            return Err(CatalogError::EmptyManifest);
        }

        Ok(Self { entries })
    }

    /// Манифест из JSON-массива строк
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_json_with_extensions(text, IMAGE_EXTENSIONS)
    }

    pub fn from_json_with_extensions<E: AsRef<str>>(text: &str, extensions: &[E]) -> Result<Self> {
        let paths: Vec<String> = serde_json::from_str(text)?;
        Self::from_paths_with_extensions(paths, extensions)
    }

    /// Лексический порядок по пути
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| a.path.cmp(&b.path));
        self
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_path(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let mut path = unified.as_str();
    loop {
        if let Some(rest) = path.strip_prefix("./") {
            path = rest;
        } else if let Some(rest) = path.strip_prefix('/') {
            path = rest;
        } else {
            break;
        }
    }
    path.to_string()
}

fn parse_entry(path: &str) -> Result<AssetEntry> {
    let malformed = |reason: &'static str| CatalogError::MalformedAssetPath {
        path: path.to_string(),
        reason,
    };

    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(malformed("empty path segment"));
    }
    if segments.len() < 2 {
        return Err(malformed("missing category folder"));
    }

    let category = segments[segments.len() - 2];
    if category.trim().is_empty() {
        return Err(malformed("blank category folder"));
    }
    if segments[segments.len() - 1].trim().is_empty() {
        return Err(malformed("blank file name"));
    }

    Ok(AssetEntry {
        path: path.to_string(),
        category: category.to_string(),
    })
}

// Имя без точки расширения изображением не считается
fn has_extension<E: AsRef<str>>(file_name: &str, extensions: &[E]) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    extensions
        .iter()
        .any(|e| e.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paths_keeps_input_order() {
        let m = AssetManifest::from_paths(["RoseCategory/2.jpg", "LilyCategory/1.jpg"]).unwrap();
        assert_eq!(m.entries()[0].path, "RoseCategory/2.jpg");
        assert_eq!(m.entries()[1].category, "LilyCategory");
    }

    #[test]
    fn test_sorted_is_lexical() {
        let m = AssetManifest::from_paths([
            "RoseCategory/2.jpg",
            "LilyCategory/1.jpg",
            "RoseCategory/1.jpg",
        ])
        .unwrap()
        .sorted();
        let paths: Vec<&str> = m.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["LilyCategory/1.jpg", "RoseCategory/1.jpg", "RoseCategory/2.jpg"]
        );
        assert_eq!(m.entries()[0].category, "LilyCategory");
    }

    #[test]
    fn test_normalizes_separators_and_prefixes() {
        let m = AssetManifest::from_paths(["./catalogue\\Roses\\1.jpg", "/catalogue/Roses/2.jpg"])
            .unwrap();
        assert_eq!(m.entries()[0].path, "catalogue/Roses/1.jpg");
        assert_eq!(m.entries()[1].path, "catalogue/Roses/2.jpg");
        assert_eq!(m.entries()[1].category, "Roses");
    }

    #[test]
    fn test_category_keeps_source_whitespace() {
        let m = AssetManifest::from_paths(["Money Bouquet /1.jpg"]).unwrap();
        assert_eq!(m.entries()[0].category, "Money Bouquet ");
    }

    #[test]
    fn test_empty_manifest_is_error() {
        let empty: [&str; 0] = [];
        assert_eq!(AssetManifest::from_paths(empty), Err(CatalogError::EmptyManifest));
    }

    #[test]
    fn test_only_non_images_is_empty() {
        assert_eq!(
            AssetManifest::from_paths(["Roses/readme.txt", "Roses/.DS_Store"]),
            Err(CatalogError::EmptyManifest)
        );
    }

    #[test]
    fn test_non_images_are_skipped() {
        let m = AssetManifest::from_paths(["Roses/1.JPG", "Roses/notes.txt", "Roses/2.webp"])
            .unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_file_without_extension_is_skipped() {
        assert_eq!(AssetManifest::from_paths(["Roses/7"]), Err(CatalogError::EmptyManifest));

        let m = AssetManifest::from_paths(["Roses/7", "Roses/8.jpg"]).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.entries()[0].file_name(), "8.jpg");
    }

    #[test]
    fn test_malformed_paths() {
        assert_eq!(
            AssetManifest::from_paths(["1.jpg"]),
            Err(CatalogError::MalformedAssetPath {
                path: "1.jpg".to_string(),
                reason: "missing category folder",
            })
        );
        assert!(matches!(
            AssetManifest::from_paths(["Roses//1.jpg"]),
            Err(CatalogError::MalformedAssetPath { reason: "empty path segment", .. })
        ));
        assert!(matches!(
            AssetManifest::from_paths(["  /1.jpg"]),
            Err(CatalogError::MalformedAssetPath { reason: "blank category folder", .. })
        ));
        assert!(matches!(
            AssetManifest::from_paths(["Roses/"]),
            Err(CatalogError::MalformedAssetPath { reason: "empty path segment", .. })
        ));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let m = AssetManifest::from_paths(["Roses/1.jpg", "./Roses/1.jpg"]).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_from_json() {
        let m = AssetManifest::from_json(r#"["Roses/1.jpg", "Roses/2.jpg"]"#).unwrap();
        assert_eq!(m.len(), 2);
        assert!(matches!(
            AssetManifest::from_json("{not json"),
            Err(CatalogError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_custom_extensions() {
        let m = AssetManifest::from_paths_with_extensions(["Roses/1.heic", "Roses/2.jpg"], &[".heic"])
            .unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.entries()[0].file_name(), "1.heic");
    }
}
