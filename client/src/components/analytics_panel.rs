//! Analytics slot content: fixed metric cards.

use leptos::prelude::*;

use crate::data::dashboard::{ANALYTICS_METRICS, ANALYTICS_NOTES};

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    view! {
        <div class="analytics">
            {ANALYTICS_METRICS
                .into_iter()
                .map(|metric| {
                    view! {
                        <div class=format!("metric {}", metric.tone.modifier())>
                            <h3 class="metric__label">{metric.label}</h3>
                            <p class="metric__value">{metric.value}</p>
                            <p class="metric__change">{metric.change}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <div class="analytics__notes">
                {ANALYTICS_NOTES.into_iter().map(|note| view! { <p>{note}</p> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
