use super::*;

#[test]
fn analytics_metrics_keep_display_order() {
    let labels: Vec<&str> = ANALYTICS_METRICS.iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Page Views", "Conversion Rate", "Revenue"]);
    assert_eq!(ANALYTICS_METRICS[0].value, "12,847");
}

#[test]
fn metric_tones_map_to_distinct_modifiers() {
    assert_eq!(Tone::Blue.modifier(), "metric--blue");
    assert_eq!(Tone::Green.modifier(), "metric--green");
    assert_eq!(Tone::Purple.modifier(), "metric--purple");
}

#[test]
fn team_member_ids_are_unique() {
    let mut ids: Vec<u32> = TEAM_MEMBERS.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), TEAM_MEMBERS.len());
}

#[test]
fn status_indicator_classes() {
    assert!(MemberStatus::Online.indicator_class().ends_with("--online"));
    assert!(MemberStatus::Away.indicator_class().ends_with("--away"));
    assert!(MemberStatus::Offline.indicator_class().ends_with("--offline"));
}

#[test]
fn status_names() {
    let statuses: Vec<&str> = TEAM_MEMBERS.iter().map(|m| m.status.as_str()).collect();
    assert_eq!(statuses, vec!["online", "online", "away", "offline"]);
}

#[test]
fn member_count_label_pluralizes() {
    assert_eq!(member_count_label(TEAM_MEMBERS.len()), "4 members");
    assert_eq!(member_count_label(1), "1 member");
    assert_eq!(member_count_label(0), "0 members");
}
