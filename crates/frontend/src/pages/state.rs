use catalog::{CatalogPageState, PageAction, SortKey};
use leptos::prelude::*;

/// Состояние страницы каталога; создаётся заново при каждом монтировании страницы
pub fn create_state(default_sort: SortKey) -> RwSignal<CatalogPageState> {
    RwSignal::new(CatalogPageState::with_sort(default_sort))
}

pub fn dispatch(state: RwSignal<CatalogPageState>, action: PageAction) {
    log::debug!("Page action: {:?}", action);
    state.update(|s| s.dispatch(action));
}
