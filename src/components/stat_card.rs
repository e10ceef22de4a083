//! Statistics card component.

use leptos::prelude::*;

/// Value + label card, with an optional share bar (0-100)
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    value: usize,
    #[prop(optional)] share: Option<f64>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{value}</div>
            {share.map(|pct| view! {
                <div class="progress-bar" title=format!("{:.0}%", pct)>
                    <div class="progress-bar-fill" style=format!("width: {:.1}%;", pct)></div>
                </div>
            })}
        </div>
    }
}
