use super::item::CatalogItem;
use crate::shared::{numeric_prefix, prefix_key};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Варианты сортировки витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// По числовому префиксу имени файла, затем по имени файла
    #[default]
    Natural,
    PriceAsc,
    PriceDesc,
    /// Новые первыми: по `id` по убыванию
    Newest,
}

impl SortKey {
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Natural => "natural",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
        }
    }

    /// Подпись для выпадающего списка
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Natural => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest",
        }
    }

    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::Natural,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Newest,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "natural" | "default" => Some(SortKey::Natural),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }

    /// Сравнивает два элемента по ключу сортировки.
    ///
    /// Для `Natural` ключ только числовой префикс (нечисловой даёт 0);
    /// имена файлов без префикса упорядочивает `sort_items` отдельным проходом.
    pub fn compare<T: CatalogItem>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Natural => prefix_key(a.file_name()).cmp(&prefix_key(b.file_name())),
            SortKey::PriceAsc => compare_prices(a, b, false),
            SortKey::PriceDesc => compare_prices(a, b, true),
            SortKey::Newest => b.id().cmp(&a.id()),
        }
    }
}

// Товары без цены всегда в конце, в любом направлении
fn compare_prices<T: CatalogItem>(a: &T, b: &T, descending: bool) -> Ordering {
    match (a.price(), b.price()) {
        (Some(pa), Some(pb)) => {
            if descending {
                pb.cmp(&pa)
            } else {
                pa.cmp(&pb)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Стабильная сортировка на месте
pub fn sort_items<T: CatalogItem>(items: &mut [T], key: SortKey) {
    items.sort_by(|a, b| key.compare(a, b));
    if key == SortKey::Natural {
        order_unprefixed_by_name(items);
    }
}

// Файлы без числового префикса (все с ключом 0, стоят в начале) сравниваются
// между собой по имени; их места в группе ключа 0 сохраняются, файлы
// с префиксом `0` остаются на своих позициях.
fn order_unprefixed_by_name<T: CatalogItem>(items: &mut [T]) {
    let zero_run = items
        .iter()
        .take_while(|item| prefix_key(item.file_name()) == 0)
        .count();
    let slots: Vec<usize> = (0..zero_run)
        .filter(|&i| numeric_prefix(items[i].file_name()).is_none())
        .collect();
    // устойчивая сортировка вставками по слотам
    for k in 1..slots.len() {
        let mut j = k;
        while j > 0 && items[slots[j - 1]].file_name() > items[slots[j]].file_name() {
            items.swap(slots[j - 1], slots[j]);
            j -= 1;
        }
    }
}

/// Отсортированная копия
pub fn sorted<T: CatalogItem + Clone>(items: &[T], key: SortKey) -> Vec<T> {
    let mut out = items.to_vec();
    sort_items(&mut out, key);
    out
}
