use crate::assets::asset_url;
use catalog::DecoratedProduct;
use leptos::prelude::*;

/// Изображение товара; при ошибке загрузки или пустом пути показывается заглушка
#[component]
pub fn ProductImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    placeholder: String,
    #[prop(into)]
    alt: String,
) -> impl IntoView {
    let failed = RwSignal::new(src.is_empty());
    let src = asset_url(&src);
    let placeholder = asset_url(&placeholder);

    let current = move || {
        if failed.get() {
            placeholder.clone()
        } else {
            src.clone()
        }
    };

    view! {
        <img
            class="product-image"
            src=current
            alt=alt
            loading="lazy"
            on:error=move |_| {
                if !failed.get_untracked() {
                    log::warn!("Image failed to load, using placeholder");
                    failed.set(true);
                }
            }
        />
    }
}

#[component]
pub fn ProductCard(
    product: DecoratedProduct,
    #[prop(into)]
    placeholder: String,
    /// Открыть подробности товара
    on_open: Callback<u32>,
    /// Кнопка заказа
    on_order: Callback<u32>,
) -> impl IntoView {
    let id = product.id();
    let title = product.display_title().to_string();
    let price = product.price.map(|p| p.to_string());
    let description = product.description.clone();

    view! {
        <article class="product-card">
            <button class="product-card__image" on:click=move |_| on_open.run(id)>
                <ProductImage
                    src=product.product.image.clone()
                    placeholder=placeholder
                    alt=title.clone()
                />
            </button>
            <div class="product-card__body">
                <h3 class="product-card__title">{title}</h3>
                <span class="product-card__category">{product.product.category.trim().to_string()}</span>
                {description.map(|d| view! { <p class="product-card__description">{d}</p> })}
                <div class="product-card__footer">
                    {price.map(|p| view! { <span class="product-card__price">{p}</span> })}
                    <button class="button button--primary" on:click=move |_| on_order.run(id)>
                        "Order Now"
                    </button>
                </div>
            </div>
        </article>
    }
}
