use super::product_card::ProductImage;
use crate::shared::modal::Modal;
use catalog::DecoratedProduct;
use leptos::prelude::*;

/// Подробности товара в модальном окне
#[component]
pub fn ProductModal(
    product: DecoratedProduct,
    #[prop(into)]
    placeholder: String,
    on_close: Callback<()>,
    on_order: Callback<u32>,
) -> impl IntoView {
    let id = product.id();
    let title = product.display_title().to_string();

    view! {
        <Modal title=title.clone() on_close=on_close>
            <div class="product-detail">
                <ProductImage src=product.product.image.clone() placeholder=placeholder alt=title />
                <div class="product-detail__info">
                    <span class="product-card__category">{product.product.category.trim().to_string()}</span>
                    {product.price.map(|p| view! { <p class="product-detail__price">{p.to_string()}</p> })}
                    {product.description.clone().map(|d| view! { <p>{d}</p> })}
                    {product.filename.clone().map(|f| view! { <p class="product-detail__file">{f}</p> })}
                    <button class="button button--primary" on:click=move |_| on_order.run(id)>
                        "Order via WhatsApp"
                    </button>
                </div>
            </div>
        </Modal>
    }
}
