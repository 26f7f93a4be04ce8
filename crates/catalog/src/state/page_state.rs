//! Состояние страницы каталога.
//!
//! Каждая страница владеет своим состоянием; переходы выполняет чистая функция
//! `reduce`, без глобальных синглтонов.

use crate::domain::CategorySelection;
use crate::query::{sort_items, CatalogItem, PriceRange, ProductQuery, SortKey};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogPageState {
    // filters
    pub selection: CategorySelection,
    pub search: String,
    pub price: PriceRange,

    // client sorting
    pub sort: SortKey,

    // modal: id открытого товара
    pub open_product: Option<u32>,
}

/// Действия пользователя на странице
#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    SelectCategory(CategorySelection),
    ClearCategory,
    SetSearch(String),
    SetSort(SortKey),
    SetPriceRange(PriceRange),
    OpenProduct(u32),
    CloseProduct,
    Reset,
}

impl CatalogPageState {
    pub fn with_sort(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn reduce(self, action: PageAction) -> Self {
        match action {
            PageAction::SelectCategory(selection) => Self { selection, ..self },
            PageAction::ClearCategory => Self {
                selection: CategorySelection::All,
                ..self
            },
            PageAction::SetSearch(search) => Self { search, ..self },
            PageAction::SetSort(sort) => Self { sort, ..self },
            PageAction::SetPriceRange(price) => Self { price, ..self },
            PageAction::OpenProduct(id) => Self {
                open_product: Some(id),
                ..self
            },
            PageAction::CloseProduct => Self {
                open_product: None,
                ..self
            },
            PageAction::Reset => Self::with_sort(self.sort),
        }
    }

    /// Применить действие на месте (для `RwSignal::update`)
    pub fn dispatch(&mut self, action: PageAction) {
        *self = std::mem::take(self).reduce(action);
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            category: self.selection.clone(),
            search: self.search.clone(),
            price: self.price,
        }
    }

    /// Фильтр, затем сортировка; исходная коллекция не изменяется
    pub fn apply<T: CatalogItem + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut visible = self.query().apply(items);
        sort_items(&mut visible, self.sort);
        visible
    }

    /// Открытый в модальном окне товар, если он есть в коллекции
    pub fn open_item<'a, T: CatalogItem>(&self, items: &'a [T]) -> Option<&'a T> {
        let id = self.open_product?;
        items.iter().find(|item| item.id() == id)
    }

    pub fn is_filtered(&self) -> bool {
        !self.selection.is_all() || !self.search.trim().is_empty() || !self.price.is_unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecoratedProduct, Price, Product};

    fn items() -> Vec<DecoratedProduct> {
        vec![
            Product::new(1, "Roses", "Roses/2.jpg"),
            Product::new(2, "Lilies", "Lilies/1.jpg"),
            Product::new(3, "Roses", "Roses/1.jpg"),
        ]
        .into_iter()
        .map(|p| {
            let mut d = DecoratedProduct::plain(p);
            d.price = Some(Price::from_cents(1000 * d.product.id));
            d
        })
        .collect()
    }

    #[test]
    fn test_default_state_shows_everything() {
        let state = CatalogPageState::default();
        assert!(!state.is_filtered());
        let ids: Vec<u32> = state.apply(&items()).iter().map(|d| d.id()).collect();
        // натуральный порядок: 1.jpg (id 2, 3) раньше 2.jpg (id 1)
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_select_and_clear_category() {
        let state = CatalogPageState::default()
            .reduce(PageAction::SelectCategory(CategorySelection::parse("Roses")));
        assert!(state.is_filtered());
        let ids: Vec<u32> = state.apply(&items()).iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![3, 1]);

        let cleared = state.reduce(PageAction::ClearCategory);
        assert_eq!(cleared.selection, CategorySelection::All);
    }

    #[test]
    fn test_sort_and_search_transitions() {
        let state = CatalogPageState::default()
            .reduce(PageAction::SetSort(SortKey::PriceDesc))
            .reduce(PageAction::SetSearch("roses".into()));
        let ids: Vec<u32> = state.apply(&items()).iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_modal_open_close() {
        let list = items();
        let mut state = CatalogPageState::default();
        state.dispatch(PageAction::OpenProduct(2));
        assert_eq!(state.open_item(&list).map(|d| d.id()), Some(2));

        state.dispatch(PageAction::OpenProduct(99));
        assert!(state.open_item(&list).is_none());

        state.dispatch(PageAction::CloseProduct);
        assert_eq!(state.open_product, None);
    }

    #[test]
    fn test_reset_keeps_sort() {
        let state = CatalogPageState::with_sort(SortKey::Newest)
            .reduce(PageAction::SetSearch("x".into()))
            .reduce(PageAction::SetPriceRange(PriceRange::new(
                Some(Price::from_cents(1)),
                None,
            )))
            .reduce(PageAction::OpenProduct(1))
            .reduce(PageAction::Reset);
        assert_eq!(state, CatalogPageState::with_sort(SortKey::Newest));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let list = items();
        let snapshot = list.clone();
        let _ = CatalogPageState::with_sort(SortKey::Newest).apply(&list);
        assert_eq!(list, snapshot);
    }
}
