//! Team slot content: fixed member list with presence dots.

use leptos::prelude::*;

use crate::data::dashboard::{TEAM_MEMBERS, TeamMember, member_count_label};

#[component]
pub fn TeamPanel() -> impl IntoView {
    view! {
        <div class="team">
            <div class="team__header">
                <h3 class="team__title">"Team Members"</h3>
                <span class="team__count">{member_count_label(TEAM_MEMBERS.len())}</span>
            </div>

            <div class="team__members">
                {TEAM_MEMBERS.into_iter().map(|member| view! { <TeamMemberRow member=member/> }).collect::<Vec<_>>()}
            </div>

            <div class="team__chat">
                <p class="team__chat-title">"💬 Team chat available"</p>
                <p class="team__chat-hint">"Click on any member to start a conversation"</p>
            </div>
        </div>
    }
}

#[component]
fn TeamMemberRow(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-member" data-member-id=member.id.to_string()>
            <div class="team-member__avatar">{member.avatar}</div>
            <div class="team-member__body">
                <div class="team-member__name-row">
                    <h4 class="team-member__name">{member.name}</h4>
                    <span class=member.status.indicator_class() title=member.status.as_str()></span>
                </div>
                <p class="team-member__role">{member.role}</p>
                <p class="team-member__last-active">{format!("Last active: {}", member.last_active)}</p>
            </div>
        </div>
    }
}
