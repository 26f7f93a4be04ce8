use crate::domain::{DecoratedProduct, Price, Product};

/// Элемент коллекции, над которым работают фильтры и сортировки
pub trait CatalogItem {
    fn id(&self) -> u32;

    fn category(&self) -> &str;

    fn file_name(&self) -> &str;

    fn price(&self) -> Option<Price> {
        None
    }

    fn title(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    /// Проверяет, соответствует ли элемент поисковому запросу.
    /// `needle` уже нормализован (trim + lowercase); пустой запрос подходит всем.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        self.title().is_some_and(hit)
            || hit(self.category())
            || self.description().is_some_and(hit)
    }
}

impl CatalogItem for Product {
    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn file_name(&self) -> &str {
        Product::file_name(self)
    }
}

impl CatalogItem for DecoratedProduct {
    fn id(&self) -> u32 {
        self.product.id
    }

    fn category(&self) -> &str {
        &self.product.category
    }

    fn file_name(&self) -> &str {
        match self.filename.as_deref() {
            Some(name) => name,
            None => self.product.file_name(),
        }
    }

    fn price(&self) -> Option<Price> {
        self.price
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_over_title_category_description() {
        let mut d = DecoratedProduct::plain(Product::new(1, "Roses", "Roses/1.jpg"));
        d.title = Some("Crimson Dream".into());
        d.description = Some("Deep red petals".into());

        assert!(d.matches_search("crimson"));
        assert!(d.matches_search("roses"));
        assert!(d.matches_search("red petals"));
        assert!(d.matches_search(""));
        assert!(!d.matches_search("tulip"));
    }

    #[test]
    fn test_plain_product_searches_category_only() {
        let p = Product::new(1, "Money Bouquet", "Money Bouquet/1.jpg");
        assert!(p.matches_search("money"));
        assert!(!p.matches_search("1.jpg"));
    }
}
