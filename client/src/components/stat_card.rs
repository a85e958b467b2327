//! Single-number summary card.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(optional)] tone: Option<&'static str>,
) -> impl IntoView {
    let class = tone.map_or_else(|| "stat-card".to_owned(), |tone| format!("stat-card stat-card--{tone}"));
    view! {
        <div class=class>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
