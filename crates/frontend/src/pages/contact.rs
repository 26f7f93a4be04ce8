use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let contact = ctx.config.with_value(|c| c.contact.clone());

    view! {
        <section class="page contact">
            <header class="page-header">
                <h1>"Contact"</h1>
                <p>"Orders are taken by phone or WhatsApp."</p>
            </header>
            <dl class="contact-list">
                <dt>"Phone"</dt>
                <dd>{contact.phone}</dd>
                <dt>"WhatsApp"</dt>
                <dd>
                    <a class="button button--primary" href=contact.whatsapp_url target="_blank" rel="noopener">
                        "Chat with us"
                    </a>
                </dd>
            </dl>
        </section>
    }
}
