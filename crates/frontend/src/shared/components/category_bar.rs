use catalog::CategorySelection;
use leptos::prelude::*;

/// Кнопки категорий с количеством товаров; первая кнопка показывает все товары
#[component]
pub fn CategoryBar(
    /// (категория, количество) в порядке индекса
    categories: Vec<(String, usize)>,
    total: usize,
    #[prop(into)]
    all_label: String,
    #[prop(into)]
    selection: Signal<CategorySelection>,
    #[prop(into)]
    on_select: Callback<CategorySelection>,
) -> impl IntoView {
    view! {
        <nav class="category-bar">
            <button
                class="category-bar__item"
                class:active=move || selection.get().is_all()
                on:click=move |_| on_select.run(CategorySelection::All)
            >
                {format!("{} ({})", all_label, total)}
            </button>
            {categories
                .into_iter()
                .map(|(name, count)| {
                    let label = format!("{} ({})", name, count);
                    let selected_name = name.clone();
                    view! {
                        <button
                            class="category-bar__item"
                            class:active=move || selection.get().is_selected(&selected_name)
                            on:click=move |_| on_select.run(CategorySelection::Named(name.clone()))
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
