use crate::shared::components::tone_badge::tone_class;
use crate::shared::icons::icon;
use contracts::domain::common::StatusTone;
use leptos::prelude::*;

/// Headline counter with an icon, e.g. "Active Cases 2"
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    tone: StatusTone,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", tone_class(tone))>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
            <div class="stat-card__icon">{icon(icon_name)}</div>
        </div>
    }
}
