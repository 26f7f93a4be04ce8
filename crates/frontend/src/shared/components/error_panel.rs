use leptos::prelude::*;

/// Диагностический блок вместо содержимого страницы
#[component]
pub fn ErrorPanel(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2>{title}</h2>
            <p>{message}</p>
        </div>
    }
}
