use crate::shared::{normalize_category, same_category};
use serde::{Deserialize, Serialize};

/// Выбранная категория на странице каталога
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategorySelection {
    /// Все товары, без фильтра
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// Строковое значение выбора "все категории"; подпись кнопки задаётся
    /// в конфигурации отдельно (`catalog.all_label`)
    pub const ALL_SENTINEL: &'static str = "All";

    /// Парсинг из строки: пустая строка и ровно "All" дают все товары.
    /// Регистр учитывается, как и при сравнении категорий; кнопки категорий
    /// из индекса строят `Named` напрямую.
    pub fn parse(value: &str) -> Self {
        let name = normalize_category(value);
        if name.is_empty() || name == Self::ALL_SENTINEL {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// Проходит ли категория товара через выбор
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(name) => same_category(name, category),
        }
    }

    /// Выбрана ли именно эта категория (для подсветки кнопки)
    pub fn is_selected(&self, category: &str) -> bool {
        match self {
            CategorySelection::All => false,
            CategorySelection::Named(name) => same_category(name, category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(CategorySelection::parse("All"), CategorySelection::All);
        assert_eq!(CategorySelection::parse(" All "), CategorySelection::All);
        assert_eq!(CategorySelection::parse(""), CategorySelection::All);
    }

    #[test]
    fn test_parse_named_keeps_source_value() {
        assert_eq!(
            CategorySelection::parse(" Roses "),
            CategorySelection::Named(" Roses ".to_string())
        );
    }

    #[test]
    fn test_matches() {
        let all = CategorySelection::All;
        assert!(all.matches("anything"));

        let roses = CategorySelection::parse(" RoseCategory ");
        assert!(roses.matches("RoseCategory"));
        assert!(roses.matches("RoseCategory  "));
        assert!(!roses.matches("LilyCategory"));
        assert!(!roses.matches("rosecategory"));
    }

    #[test]
    fn test_lowercase_all_is_a_category() {
        assert_eq!(CategorySelection::parse("all"), CategorySelection::Named("all".to_string()));
        assert_eq!(CategorySelection::parse("ALL"), CategorySelection::Named("ALL".to_string()));
        assert!(!CategorySelection::parse("all").matches("Roses"));
    }

    #[test]
    fn test_is_selected() {
        let lily = CategorySelection::parse(" Lily ");
        assert!(lily.is_selected("Lily"));
        assert!(!CategorySelection::All.is_selected("Lily"));
    }
}
