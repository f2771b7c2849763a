//! Mock analytics and team data shown in the dashboard slots.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
}

impl Tone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Blue => "metric--blue",
            Self::Green => "metric--green",
            Self::Purple => "metric--purple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub tone: Tone,
}

pub const ANALYTICS_METRICS: [Metric; 3] = [
    Metric { label: "Page Views", value: "12,847", change: "+12% from last month", tone: Tone::Blue },
    Metric { label: "Conversion Rate", value: "3.2%", change: "+0.8% from last month", tone: Tone::Green },
    Metric { label: "Revenue", value: "$45,231", change: "+20% from last month", tone: Tone::Purple },
];

pub const ANALYTICS_NOTES: [&str; 2] = ["📊 Real-time analytics data", "🔄 Updates every 30 seconds"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Online,
    Away,
    Offline,
}

impl MemberStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }

    /// CSS modifier for the presence dot.
    #[must_use]
    pub fn indicator_class(self) -> &'static str {
        match self {
            Self::Online => "team-member__status team-member__status--online",
            Self::Away => "team-member__status team-member__status--away",
            Self::Offline => "team-member__status team-member__status--offline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub status: MemberStatus,
    pub last_active: &'static str,
}

pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        id: 1,
        name: "Sarah Johnson",
        role: "Product Manager",
        avatar: "👩‍💼",
        status: MemberStatus::Online,
        last_active: "2 min ago",
    },
    TeamMember {
        id: 2,
        name: "Mike Chen",
        role: "Frontend Developer",
        avatar: "👨‍💻",
        status: MemberStatus::Online,
        last_active: "5 min ago",
    },
    TeamMember {
        id: 3,
        name: "Emily Davis",
        role: "UX Designer",
        avatar: "👩‍🎨",
        status: MemberStatus::Away,
        last_active: "15 min ago",
    },
    TeamMember {
        id: 4,
        name: "Alex Rodriguez",
        role: "Backend Developer",
        avatar: "👨‍🔧",
        status: MemberStatus::Offline,
        last_active: "1 hour ago",
    },
];

/// Header text for the team panel, e.g. `"4 members"`.
#[must_use]
pub fn member_count_label(count: usize) -> String {
    if count == 1 { "1 member".to_owned() } else { format!("{count} members") }
}

pub const QUICK_ACTIONS: [&str; 3] = ["📊 View Detailed Analytics", "👥 Manage Team", "⚙️ Settings"];

pub const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("🔄", "System backup completed"),
    ("📧", "New user registration"),
    ("🔔", "Performance alert resolved"),
];

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
