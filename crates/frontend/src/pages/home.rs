use crate::layout::global_context::{AppGlobalContext, Page};
use catalog::OccasionCatalogue;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section class="page home">
            <div class="hero">
                <h1>"Fresh flowers for every moment"</h1>
                <p>"Hand-made bouquets, delivered with care."</p>
                <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Gallery)>
                    "Shop now"
                </button>
            </div>

            <h2 class="section-title">"Catalogues"</h2>
            <div class="catalogue-grid">
                {OccasionCatalogue::all()
                    .into_iter()
                    .map(|catalogue| {
                        view! {
                            <button
                                class="catalogue-tile"
                                on:click=move |_| ctx.navigate(Page::Occasion(catalogue))
                            >
                                <h3>{catalogue.title()}</h3>
                                <p>{catalogue.tagline()}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
