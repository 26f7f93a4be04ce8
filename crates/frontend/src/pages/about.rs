use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about">
            <header class="page-header">
                <h1>"About us"</h1>
            </header>
            <p>
                "Bloome is a small florist studio. We arrange fresh, artificial and themed "
                "bouquets by hand, from graduation gifts to money bouquets."
            </p>
            <p>"Every arrangement in our gallery was made in the studio."</p>
        </section>
    }
}
