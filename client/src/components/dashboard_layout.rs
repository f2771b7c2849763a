//! Dashboard layout with one outlet and two named slots.
//!
//! DESIGN
//! ======
//! The child route renders into the "Main Content" region through `Outlet`.
//! The analytics and team regions are independent subtrees passed in as Leptos
//! slots, so all three regions render in the same pass and none of them knows
//! about the others.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::analytics_panel::AnalyticsPanel;
use crate::components::team_panel::TeamPanel;

/// Content for the analytics region.
#[slot]
pub struct Analytics {
    children: Children,
}

/// Content for the team region.
#[slot]
pub struct Team {
    children: Children,
}

#[component]
pub fn DashboardLayout(analytics: Analytics, team: Team) -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <div class="dashboard-layout__container">
                <h1 class="dashboard-layout__title">"Dashboard"</h1>

                <div class="dashboard-layout__grid">
                    <section class="dashboard-layout__main">
                        <div class="panel">
                            <h2 class="panel__title">"Main Content"</h2>
                            <Outlet/>
                        </div>
                    </section>

                    <section class="dashboard-layout__analytics">
                        <div class="panel">
                            <h2 class="panel__title">"Analytics"</h2>
                            {(analytics.children)()}
                        </div>
                    </section>
                </div>

                <section class="dashboard-layout__team">
                    <div class="panel">
                        <h2 class="panel__title">"Team"</h2>
                        {(team.children)()}
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Route view for `/dashboard`: the layout with both slots filled.
#[component]
pub fn DashboardRoute() -> impl IntoView {
    view! {
        <DashboardLayout>
            <Analytics slot>
                <AnalyticsPanel/>
            </Analytics>
            <Team slot>
                <TeamPanel/>
            </Team>
        </DashboardLayout>
    }
}
