use super::state::{create_state, dispatch};
use crate::assets::{asset_url, load_index};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::components::{CatalogToolbar, ProductCard, ProductImage, ProductModal};
use catalog::{OccasionCatalogue, PageAction, Product};
use leptos::prelude::*;

/// Тематический каталог с фиксированным ассортиментом
#[component]
pub fn OccasionPage(catalogue: OccasionCatalogue) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = ctx.config();

    let products = StoredValue::new(catalogue.products());
    let placeholder = config.catalog.placeholder_image.clone();
    let modal_placeholder = placeholder.clone();
    let state = create_state(config.catalog.default_sort);

    // Фото готовых работ из папки каталога, по номеру в имени файла
    let studio_photos: Vec<Product> = catalogue
        .asset_folder()
        .and_then(|folder| {
            load_index(&config)
                .ok()
                .map(|index| index.products_sorted_by_prefix(folder))
        })
        .unwrap_or_default();

    let visible = Memo::new(move |_| state.with(|s| products.with_value(|items| s.apply(items))));
    let open_product = Memo::new(move |_| {
        state.with(|s| products.with_value(|items| s.open_item(items).cloned()))
    });

    let on_open = Callback::new(move |id| dispatch(state, PageAction::OpenProduct(id)));
    let on_close = Callback::new(move |_: ()| dispatch(state, PageAction::CloseProduct));
    let on_order = Callback::new(move |id: u32| {
        log::info!("Order requested for {} item {}", catalogue.code(), id);
        ctx.navigate(Page::Contact);
    });

    let photos_view = (!studio_photos.is_empty()).then(|| {
        let photo_placeholder = placeholder.clone();
        view! {
            <div class="studio-photos">
                <h2>"From our studio"</h2>
                <div class="studio-photos__strip">
                    {studio_photos
                        .into_iter()
                        .map(|photo| {
                            view! {
                                <a class="studio-photos__item" href=asset_url(&photo.image) target="_blank">
                                    <ProductImage
                                        src=photo.image.clone()
                                        placeholder=photo_placeholder.clone()
                                        alt=photo.file_name().to_string()
                                    />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <section class="page occasion">
            <header class="page-header">
                <h1>{catalogue.title()}</h1>
                <p>{catalogue.tagline()}</p>
            </header>

            <CatalogToolbar state=state with_price=true />

            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="empty-state">"No items match your filters."</p>
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

            {photos_view}

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
}
