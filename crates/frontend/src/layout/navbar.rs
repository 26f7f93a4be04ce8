use crate::layout::global_context::{AppGlobalContext, Page};
use catalog::OccasionCatalogue;
use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (catalogues_open, set_catalogues_open) = signal(false);

    let link = move |page: Page| {
        view! {
            <li>
                <button
                    class="nav-link"
                    class:active=move || ctx.page.get() == page
                    on:click=move |_| ctx.navigate(page)
                >
                    {page.label()}
                </button>
            </li>
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__content">
                <button class="navbar__brand" on:click=move |_| ctx.navigate(Page::Home)>
                    "Bloome"
                </button>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_menu()
                >
                    {move || if ctx.menu_open.get() { "✕" } else { "☰" }}
                </button>
                <ul class="navbar__links" class:open=move || ctx.menu_open.get()>
                    {link(Page::Home)}
                    {link(Page::Gallery)}
                    <li
                        class="dropdown"
                        on:mouseenter=move |_| set_catalogues_open.set(true)
                        on:mouseleave=move |_| set_catalogues_open.set(false)
                    >
                        <button
                            class="nav-link"
                            class:active=move || matches!(ctx.page.get(), Page::Occasion(_))
                            on:click=move |_| set_catalogues_open.update(|v| *v = !*v)
                        >
                            "Catalogues ▾"
                        </button>
                        <Show when=move || catalogues_open.get()>
                            <ul class="dropdown__menu">
                                {OccasionCatalogue::all()
                                    .into_iter()
                                    .map(|catalogue| {
                                        view! {
                                            <li>
                                                <button
                                                    class="dropdown__item"
                                                    on:click=move |_| {
                                                        set_catalogues_open.set(false);
                                                        ctx.navigate(Page::Occasion(catalogue));
                                                    }
                                                >
                                                    {catalogue.title()}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </li>
                    {link(Page::About)}
                    {link(Page::Contact)}
                </ul>
            </div>
        </header>
    }
}
