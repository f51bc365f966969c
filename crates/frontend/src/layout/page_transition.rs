use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

/// Fades the routed content in whenever the path changes
#[component]
pub fn PageTransition(duration_ms: u32, children: Children) -> impl IntoView {
    let location = use_location();
    let entering = RwSignal::new(true);
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        location.pathname.track();
        let current = generation.get_value() + 1;
        generation.set_value(current);
        entering.set(true);
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            // A newer navigation owns the flag now
            if generation.try_get_value() == Some(current) {
                let _ = entering.try_set(false);
            }
        });
    });

    view! {
        <div
            class="page-transition"
            class:page-transition--entering=move || entering.get()
            style=format!("--page-transition-ms: {}ms;", duration_ms)
        >
            {children()}
        </div>
    }
}
