use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let contact = ctx.config.with_value(|c| c.contact.clone());

    view! {
        <footer class="footer">
            <div class="footer__content">
                <span class="footer__brand">"Bloome Florist"</span>
                <span>{contact.phone}</span>
                <a href=contact.whatsapp_url target="_blank" rel="noopener">"WhatsApp"</a>
                <button class="footer__link" on:click=move |_| ctx.navigate(Page::Contact)>
                    "Contact us"
                </button>
            </div>
        </footer>
    }
}
