use super::manifest::AssetManifest;
use crate::domain::{decorate, DecoratedProduct, DecorationTable, Product};
use crate::error::{CatalogError, Result};
use crate::shared::{normalize_category, prefix_key};
use std::collections::HashSet;

/// Индекс каталога: категории и товары, полученные за один проход по манифесту.
///
/// Строится один раз при открытии страницы и дальше не изменяется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalogIndex {
    categories: Vec<String>,
    products: Vec<Product>,
}

impl AssetCatalogIndex {
    /// Ошибка `TooManyAssets`, если номер товара не помещается в `u32`.
    pub fn build(manifest: &AssetManifest) -> Result<Self> {
        let mut categories = Vec::new();
        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(manifest.len());

        for (i, entry) in manifest.entries().iter().enumerate() {
            let name = normalize_category(&entry.category);
            if seen.insert(name.to_string()) {
                categories.push(name.to_string());
            }
            let id = product_id(i)?;
            products.push(Product::new(
                id,
                entry.category.clone(),
                entry.path.clone(),
            ));
        }

        log::info!(
            "Catalogue index built: {} products in {} categories",
            products.len(),
            categories.len()
        );

        Ok(Self {
            categories,
            products,
        })
    }

    /// Индекс сразу из списка путей
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let manifest = AssetManifest::from_paths(paths)?;
        Self::build(&manifest)
    }

    /// Категории в порядке первого появления при обходе манифеста
    pub fn list_categories(&self) -> &[String] {
        &self.categories
    }

    /// Товары в порядке манифеста, `id` с 1
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Количество товаров по каждой категории, в порядке категорий
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.products.iter().filter(|p| p.in_category(c)).count();
                (c.clone(), count)
            })
            .collect()
    }

    /// Товары одной категории, упорядоченные по числовому префиксу имени файла.
    /// Нечисловой префикс считается нулём; при равных ключах порядок манифеста сохраняется.
    pub fn products_sorted_by_prefix(&self, category: &str) -> Vec<Product> {
        let mut group: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect();
        group.sort_by_key(|p| prefix_key(p.file_name()));
        group
    }

    /// Товары с полями витрины
    pub fn decorated(&self, table: &DecorationTable) -> Vec<DecoratedProduct> {
        self.products.iter().map(|p| decorate(p, table)).collect()
    }
}

/// Номер товара с 1 по позиции в манифесте
fn product_id(position: usize) -> Result<u32> {
    position
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(CatalogError::TooManyAssets(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategorySelection;
    use crate::query::filter_by_category;

    fn sample() -> AssetCatalogIndex {
        AssetCatalogIndex::from_paths(["RoseCategory/1.jpg", "RoseCategory/2.jpg", "LilyCategory/1.jpg"])
            .unwrap()
    }

    #[test]
    fn test_list_categories_first_appearance_order() {
        let index = sample();
        assert_eq!(index.list_categories(), &["RoseCategory", "LilyCategory"]);
    }

    #[test]
    fn test_list_categories_insertion_order_not_sorted() {
        let manifest = AssetManifest::from_paths(["b/Zinnia/1.jpg", "c/Aster/1.jpg", "a/Zinnia/2.jpg"])
            .unwrap()
            .sorted();
        let index = AssetCatalogIndex::build(&manifest).unwrap();
        assert_eq!(index.list_categories(), &["Zinnia", "Aster"]);
    }

    #[test]
    fn test_list_products_ids_and_order() {
        let index = sample();
        let ids: Vec<u32> = index.list_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(index.list_products()[0].image, "RoseCategory/1.jpg");
        assert_eq!(index.list_products()[2].image, "LilyCategory/1.jpg");
        assert_eq!(index.list_products()[2].category, "LilyCategory");
    }

    #[test]
    fn test_filter_rose_category() {
        let index = sample();
        let roses = filter_by_category(index.list_products(), &CategorySelection::parse("RoseCategory"));
        let images: Vec<&str> = roses.iter().map(|p| p.image.as_str()).collect();
        assert_eq!(images, vec!["RoseCategory/1.jpg", "RoseCategory/2.jpg"]);

        let padded = filter_by_category(index.list_products(), &CategorySelection::parse(" RoseCategory "));
        assert_eq!(padded, roses);
    }

    #[test]
    fn test_lowercase_all_folder_is_selectable() {
        let index = AssetCatalogIndex::from_paths(["all/1.jpg", "Roses/1.jpg", "Roses/2.jpg"]).unwrap();
        assert_eq!(index.list_categories(), &["all", "Roses"]);

        let selection = CategorySelection::Named(index.list_categories()[0].clone());
        let picked = filter_by_category(index.list_products(), &selection);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].image, "all/1.jpg");
    }

    #[test]
    fn test_product_id_is_one_based_and_checked() {
        assert_eq!(product_id(0), Ok(1));
        assert_eq!(product_id(41), Ok(42));
        assert_eq!(product_id(u32::MAX as usize - 1), Ok(u32::MAX));
        assert_eq!(
            product_id(u32::MAX as usize),
            Err(CatalogError::TooManyAssets(u32::MAX as usize))
        );
    }

    #[test]
    fn test_categories_have_no_duplicates_and_cover_products() {
        let index = AssetCatalogIndex::from_paths([
            "Roses/1.jpg",
            "Roses /2.jpg",
            "Lilies/1.jpg",
            "Tulips/3.jpg",
            "Roses/4.jpg",
        ])
        .unwrap();
        let cats = index.list_categories();
        let unique: HashSet<&String> = cats.iter().collect();
        assert_eq!(unique.len(), cats.len());
        for p in index.list_products() {
            let matching = cats.iter().filter(|c| p.in_category(c)).count();
            assert_eq!(matching, 1, "product {} must map to exactly one category", p.id);
        }
    }

    #[test]
    fn test_category_counts() {
        let index = sample();
        assert_eq!(
            index.category_counts(),
            vec![("RoseCategory".to_string(), 2), ("LilyCategory".to_string(), 1)]
        );
    }

    #[test]
    fn test_products_sorted_by_prefix() {
        let index = AssetCatalogIndex::from_paths([
            "Money/10.jpg",
            "Money/2.jpg",
            "Money/abc.jpg",
            "Money/1.jpg",
            "Roses/0.jpg",
        ])
        .unwrap();
        let group = index.products_sorted_by_prefix("Money");
        let names: Vec<&str> = group.iter().map(|p| p.file_name()).collect();
        assert_eq!(names, vec!["abc.jpg", "1.jpg", "2.jpg", "10.jpg"]);
    }

    #[test]
    fn test_empty_paths_fail() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(AssetCatalogIndex::from_paths(empty), Err(CatalogError::EmptyManifest));
    }

    #[test]
    fn test_decorated_keeps_ids() {
        let index = sample();
        let table = DecorationTable {
            titles: vec!["A".into(), "B".into()],
            ..Default::default()
        };
        let decorated = index.decorated(&table);
        assert_eq!(decorated.len(), 3);
        assert_eq!(decorated[0].id(), 1);
        assert_eq!(decorated[0].title.as_deref(), Some("B"));
        assert_eq!(decorated[1].title.as_deref(), Some("A"));
        assert_eq!(decorated[2].filename.as_deref(), Some("1.jpg"));
    }
}
