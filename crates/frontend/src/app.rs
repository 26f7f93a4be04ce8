use crate::layout::footer::Footer;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::navbar::NavBar;
use crate::pages::{AboutPage, ContactPage, GalleryPage, HomePage, OccasionPage};
use crate::shared::components::ErrorPanel;
use catalog::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match SiteConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load site configuration: {}", e);
            return view! {
                <ErrorPanel title="Configuration error" message=e.to_string() />
            }
            .into_any();
        }
    };

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    view! {
        <NavBar />
        <main class="site-main">
            {move || render_page(ctx.page.get())}
        </main>
        <Footer />
    }
    .into_any()
}

// Каждая смена страницы монтирует её заново вместе с собственным состоянием
fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Gallery => view! { <GalleryPage /> }.into_any(),
        Page::Occasion(catalogue) => view! { <OccasionPage catalogue=catalogue /> }.into_any(),
        Page::About => view! { <AboutPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
    }
}
