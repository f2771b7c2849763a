//! Main content for the dashboard route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered into the dashboard layout's outlet, next to the analytics and
//! team slots. It owns none of their data.

use leptos::prelude::*;

use crate::data::dashboard::{QUICK_ACTIONS, RECENT_ACTIVITY};

/// Bullet points explaining the slot layout.
const SLOT_NOTES: [&str; 4] = [
    "Analytics slot - Shows real-time metrics",
    "Team slot - Displays team members and status",
    "Main content - This area you're reading now",
    "All rendered in parallel within the same layout",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h2 class="dashboard-page__title">"Welcome to Dashboard"</h2>
                    <p class="dashboard-page__subtitle">
                        "Monitor your application's performance and team activity"
                    </p>
                </div>
                <a href="/" class="link">
                    "← Back to Home"
                </a>
            </header>

            <div class="dashboard-page__cards">
                <div class="dashboard-card dashboard-card--actions">
                    <h3 class="dashboard-card__title">"Quick Actions"</h3>
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|action| {
                            view! {
                                <button class="dashboard-card__action" type="button">
                                    {action}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="dashboard-card dashboard-card--activity">
                    <h3 class="dashboard-card__title">"Recent Activity"</h3>
                    {RECENT_ACTIVITY
                        .into_iter()
                        .map(|(icon, text)| {
                            view! {
                                <div class="dashboard-card__activity">
                                    <span>{icon}</span>
                                    <span>{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="dashboard-page__explainer">
                <h3>"Parallel Slots Demo"</h3>
                <p>
                    "This dashboard fills three regions of one layout at once. The Analytics and Team sections are passed in as named slots next to this main content."
                </p>
                <div class="callout">
                    <h4 class="callout__title">"Key Features:"</h4>
                    <ul class="callout__list">
                        {SLOT_NOTES.into_iter().map(|note| view! { <li>{note}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
