use crate::pages::state::dispatch;
use crate::shared::list_utils::{PriceRangeInput, SearchInput, SortSelect};
use catalog::{CatalogPageState, PageAction};
use leptos::prelude::*;

/// Поиск, диапазон цен, сортировка и сброс фильтров
#[component]
pub fn CatalogToolbar(
    state: RwSignal<CatalogPageState>,
    /// Показывать ли фильтр по цене
    #[prop(optional)]
    with_price: bool,
) -> impl IntoView {
    view! {
        <div class="toolbar">
            <SearchInput
                value=Signal::derive(move || state.with(|s| s.search.clone()))
                on_change=Callback::new(move |text| dispatch(state, PageAction::SetSearch(text)))
            />
            {with_price.then(|| view! {
                <PriceRangeInput
                    value=Signal::derive(move || state.with(|s| s.price))
                    on_change=Callback::new(move |range| dispatch(state, PageAction::SetPriceRange(range)))
                />
            })}
            <SortSelect
                value=Signal::derive(move || state.with(|s| s.sort))
                on_change=Callback::new(move |key| dispatch(state, PageAction::SetSort(key)))
            />
            <Show when=move || state.with(|s| s.is_filtered())>
                <button class="button button--ghost" on:click=move |_| dispatch(state, PageAction::Reset)>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
