//! Декорирование товаров для витрины.
//!
//! Название, цена и описание не являются частью каталога: они выбираются
//! детерминированно по `id % N` из статических списков конфигурации.

use super::product::Product;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Цена в центах
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u32 {
        self.0
    }

    /// Цена из суммы в долларах (например, `299.99`), с округлением до цента
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > u32::MAX as f64 {
            return None;
        }
        Some(Self(cents as u32))
    }

    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Статические списки, из которых берутся поля витрины
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecorationTable {
    pub titles: Vec<String>,
    pub prices: Vec<Price>,
    pub descriptions: Vec<String>,
}

impl DecorationTable {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.prices.is_empty() && self.descriptions.is_empty()
    }
}

/// Товар с необязательными полями витрины
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub title: Option<String>,
    pub price: Option<Price>,
    pub description: Option<String>,
    pub filename: Option<String>,
}

impl DecoratedProduct {
    /// Товар без декораций
    pub fn plain(product: Product) -> Self {
        Self {
            product,
            title: None,
            price: None,
            description: None,
            filename: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.product.id
    }

    /// Заголовок карточки: название, иначе имя категории
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.product.category.trim())
    }
}

impl From<Product> for DecoratedProduct {
    fn from(product: Product) -> Self {
        Self::plain(product)
    }
}

fn pick<T: Clone>(items: &[T], id: u32) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(id as usize % items.len()).cloned()
}

/// Добавляет к товару поля витрины. Чистая функция: одинаковый `id`
/// всегда получает одинаковые поля.
pub fn decorate(product: &Product, table: &DecorationTable) -> DecoratedProduct {
    DecoratedProduct {
        title: pick(&table.titles, product.id),
        price: pick(&table.prices, product.id),
        description: pick(&table.descriptions, product.id),
        filename: Some(product.file_name().to_string()).filter(|f| !f.is_empty()),
        product: product.clone(),
    }
}
