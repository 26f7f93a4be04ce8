/// Имя файла: последний сегмент пути через `/`
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Числовой префикс имени файла: текст до первой точки, если он целое число.
///
/// `"12.jpg"` -> `Some(12)`, `"abc.jpg"` -> `None`, `"7"` -> `Some(7)`.
pub fn numeric_prefix(file_name: &str) -> Option<u64> {
    let head = file_name.split('.').next().unwrap_or(file_name);
    head.trim().parse::<u64>().ok()
}

/// Ключ сортировки по префиксу; нечисловой префикс даёт 0
pub fn prefix_key(file_name: &str) -> u64 {
    numeric_prefix(file_name).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("catalogue/Roses/1.jpg"), "1.jpg");
        assert_eq!(file_name("1.jpg"), "1.jpg");
        assert_eq!(file_name("a/b/"), "");
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("12.jpg"), Some(12));
        assert_eq!(numeric_prefix("3.final.png"), Some(3));
        assert_eq!(numeric_prefix("7"), Some(7));
        assert_eq!(numeric_prefix("abc.jpg"), None);
        assert_eq!(numeric_prefix("12a.jpg"), None);
        assert_eq!(numeric_prefix(".jpg"), None);
    }

    #[test]
    fn test_prefix_key_defaults_to_zero() {
        assert_eq!(prefix_key("abc.jpg"), 0);
        assert_eq!(prefix_key("-1.jpg"), 0);
        assert_eq!(prefix_key("42.webp"), 42);
    }
}
