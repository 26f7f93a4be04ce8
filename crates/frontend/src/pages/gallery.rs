use super::state::{create_state, dispatch};
use crate::assets::load_index;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::{CatalogToolbar, CategoryBar, ErrorPanel, ProductCard, ProductModal};
use catalog::{DecoratedProduct, PageAction};
use leptos::prelude::*;

/// Галерея: все изображения из `public/catalogue`, сгруппированные по папкам
#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = ctx.config();

    let index = match load_index(&config) {
        Ok(index) => index,
        Err(message) => {
            return view! {
                <section class="page">
                    <ErrorPanel title="Catalogue unavailable" message=message />
                </section>
            }
            .into_any();
        }
    };

    let categories = index.category_counts();
    let total = index.len();
    let products: StoredValue<Vec<DecoratedProduct>> = StoredValue::new(index.decorated(&config.decoration));
    let placeholder = config.catalog.placeholder_image.clone();
    let modal_placeholder = placeholder.clone();

    let state = create_state(config.catalog.default_sort);

    let visible = Memo::new(move |_| state.with(|s| products.with_value(|items| s.apply(items))));
    let open_product = Memo::new(move |_| {
        state.with(|s| products.with_value(|items| s.open_item(items).cloned()))
    });

    let on_open = Callback::new(move |id| dispatch(state, PageAction::OpenProduct(id)));
    let on_close = Callback::new(move |_: ()| dispatch(state, PageAction::CloseProduct));
    let on_order = Callback::new(move |id: u32| {
        log::info!("Order requested for product {}", id);
        ctx.navigate(Page::Contact);
    });

    view! {
        <section class="page gallery">
            <header class="page-header">
                <h1>"Our Gallery"</h1>
                <p>"Every bouquet we have made, grouped by collection"</p>
            </header>

            <CategoryBar
                categories=categories
                total=total
                all_label=config.catalog.all_label.clone()
                selection=Signal::derive(move || state.with(|s| s.selection.clone()))
                on_select=Callback::new(move |selection| dispatch(state, PageAction::SelectCategory(selection)))
            />

            <CatalogToolbar state=state with_price=true />

            <p class="result-count">
                {move || format!("Showing {} of {} bouquets", visible.with(|v| v.len()), total)}
            </p>

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="empty-state">"No bouquets match your filters."</p>
            </Show>

            <div class="product-grid">
                <For
                    each=move || visible.get()
                    key=|product| product.id()
                    children=move |product| {
                        view! {
                            <ProductCard
                                product=product
                                placeholder=placeholder.clone()
                                on_open=on_open
                                on_order=on_order
                            />
                        }
                    }
                />
            </div>

            {move || {
                open_product
                    .get()
                    .map(|product| {
                        view! {
                            <ProductModal
                                product=product
                                placeholder=modal_placeholder.clone()
                                on_close=on_close
                                on_order=on_order
                            />
                        }
                    })
            }}
        </section>
    }
    .into_any()
}
