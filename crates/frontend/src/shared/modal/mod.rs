use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog over a dimmed overlay. Closes on Escape, overlay click, or the
/// close button.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Optional icon name shown before the title
    #[prop(optional)]
    title_icon: Option<&'static str>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {title_icon.map(icon)}
                        {title}
                    </h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
