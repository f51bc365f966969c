use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Right-aligned actions
    children: Children,
) -> impl IntoView {
    let subtitle_line = move || {
        subtitle
            .get()
            .filter(|s| !s.is_empty())
            .map(|s| view! { <p class="page-header__subtitle">{s}</p> })
    };

    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {subtitle_line}
            </div>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}
