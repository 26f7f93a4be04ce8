//! Единая нормализация категорий.
//!
//! Все сравнения категорий проходят через `same_category`: пробелы по краям
//! отбрасываются, регистр учитывается. Поиск по тексту выполняет отдельная функция
//! и регистр не учитывает.

/// Нормализованное имя категории (без пробелов по краям)
pub fn normalize_category(name: &str) -> &str {
    name.trim()
}

/// Совпадают ли две категории после нормализации
pub fn same_category(a: &str, b: &str) -> bool {
    normalize_category(a) == normalize_category(b)
}

/// Поисковая строка в виде для сравнения: trim + lowercase
pub fn normalize_search(query: &str) -> String {
    query.trim().to_lowercase()
}
