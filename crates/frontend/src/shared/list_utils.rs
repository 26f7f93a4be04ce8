/// Элементы управления списком товаров: поиск, сортировка, диапазон цен
use catalog::{Price, PriceRange, SortKey};
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search bouquets...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class:active=is_filter_active
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button class="search-input__clear" title="Clear" on:click=move |_| on_change.run(String::new())>
                    "✕"
                </button>
            </Show>
        </div>
    }
}

/// Выпадающий список вариантов сортировки
#[component]
pub fn SortSelect(
    #[prop(into)]
    value: Signal<SortKey>,
    #[prop(into)]
    on_change: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            prop:value=move || value.get().code()
            on:change=move |ev| {
                let code = event_target_value(&ev);
                match SortKey::from_code(&code) {
                    Some(key) => on_change.run(key),
                    None => log::warn!("Unknown sort code '{}'", code),
                }
            }
        >
            {SortKey::all()
                .into_iter()
                .map(|key| {
                    view! {
                        <option value=key.code() selected=move || value.get() == key>
                            {key.display_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Разбор границы цены из поля ввода: при пустом или некорректном значении граница не задана
pub fn parse_price_bound(text: &str) -> Option<Price> {
    let text = text.trim().trim_start_matches('$');
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().and_then(Price::from_amount)
}

fn bound_text(bound: Option<Price>) -> String {
    bound
        .map(|p| format!("{:.2}", p.amount()))
        .unwrap_or_default()
}

/// Минимальная и максимальная цена
#[component]
pub fn PriceRangeInput(
    #[prop(into)]
    value: Signal<PriceRange>,
    #[prop(into)]
    on_change: Callback<PriceRange>,
) -> impl IntoView {
    view! {
        <div class="price-range">
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Min $"
                prop:value=move || bound_text(value.get().min)
                on:change=move |ev| {
                    let min = parse_price_bound(&event_target_value(&ev));
                    on_change.run(PriceRange::new(min, value.get_untracked().max));
                }
            />
            <span>"–"</span>
            <input
                type="number"
                min="0"
                step="0.01"
                placeholder="Max $"
                prop:value=move || bound_text(value.get().max)
                on:change=move |ev| {
                    let max = parse_price_bound(&event_target_value(&ev));
                    on_change.run(PriceRange::new(value.get_untracked().min, max));
                }
            />
        </div>
    }
}
