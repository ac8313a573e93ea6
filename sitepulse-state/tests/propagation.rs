use std::cell::RefCell;
use std::rc::Rc;

use sitepulse_state::domain::{
    AlertSeverity, IssueStatus, Project, RecommendationCategory, SafetySummary,
};
use sitepulse_state::{node, NodeId, Seed, SiteState};

fn versions(state: &SiteState) -> Vec<(NodeId, u64)> {
    NodeId::ALL
        .iter()
        .map(|&node| (node, state.version_of(node)))
        .collect()
}

fn bumped(before: &[(NodeId, u64)], state: &SiteState) -> Vec<NodeId> {
    before
        .iter()
        .filter(|(node, version)| state.version_of(*node) != *version)
        .map(|(node, _)| *node)
        .collect()
}

#[test]
fn mock_state_matches_expected_analytics() {
    let state = SiteState::with_mock_data();

    let projects = state.project_analytics();
    assert_eq!(projects.total_budget, 26_300_000.0);
    assert_eq!(projects.total_spent, 17_459_000.0);
    assert!((projects.avg_progress - 67.0).abs() < 1e-9);
    assert!(projects.budget_variance < 0.0);

    let safety = state.safety_analytics();
    assert_eq!(safety.critical_alerts, 1);
    assert_eq!(safety.high_alerts, 1);
    assert_eq!(safety.safety_score, 70);
    assert_eq!(safety.incident_risk, 60);

    let quality = state.quality_analytics();
    assert_eq!(quality.quality_score, 90);
    assert_eq!(quality.critical_issues, 0);
    assert_eq!(quality.major_issues, 1);
    assert!((quality.avg_confidence - 93.0).abs() < 1e-9);

    let equipment = state.equipment_analytics();
    assert_eq!(equipment.operational, 2);
    assert_eq!(equipment.in_maintenance, 1);

    let metrics = state.dashboard_metrics();
    assert_eq!(metrics.active_projects.len(), 3);
    assert_eq!(metrics.recent_safety_alerts.len(), 3);
    assert_eq!(metrics.budget_trend, 2.5);
    assert_eq!(metrics.progress_trend, 5.2);
    assert_eq!(metrics.alerts_trend, -8.5);
    assert_eq!(metrics.efficiency_trend, 3.1);
}

#[test]
fn recomputing_without_mutation_is_deterministic() {
    let a = SiteState::with_mock_data();
    let b = SiteState::with_mock_data();
    assert_eq!(a.ai_analytics(), b.ai_analytics());
    assert_eq!(a.recommendations(), b.recommendations());
    assert_eq!(a.dashboard_metrics(), b.dashboard_metrics());
}

#[test]
fn quality_mutation_leaves_other_domains_alone() {
    let mut state = SiteState::with_mock_data();
    let before = versions(&state);
    let safety_before: SafetySummary = *state.safety_analytics();

    state.fix_quality_issue("QI001");

    assert_eq!(
        bumped(&before, &state),
        vec![
            NodeId::QualityIssues,
            NodeId::QualityAnalytics,
            NodeId::AiAnalytics,
            NodeId::AiRecommendations,
            NodeId::DashboardMetrics,
        ]
    );
    assert_eq!(*state.safety_analytics(), safety_before);
    assert_eq!(state.quality_analytics().fixed_issues, 2);
    assert_eq!(state.quality_analytics().quality_score, 100);
}

#[test]
fn resolving_an_alert_touches_only_that_record() {
    let mut state = SiteState::with_mock_data();
    let before = state.safety_alerts().to_vec();
    let unresolved_before = before.iter().filter(|a| !a.resolved).count();

    state.resolve_alert("SA001");

    let after = state.safety_alerts();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        if old.id == "SA001" {
            assert!(new.resolved);
            assert_eq!(new.severity, old.severity);
            assert_eq!(new.description, old.description);
        } else {
            assert_eq!(old, new);
        }
    }
    let unresolved_after = after.iter().filter(|a| !a.resolved).count();
    assert_eq!(unresolved_after, unresolved_before - 1);
    assert_eq!(state.safety_analytics().safety_score, 85);
    assert_eq!(state.safety_analytics().high_alerts, 0);
}

#[test]
fn unknown_alert_id_is_a_no_op() {
    let mut state = SiteState::with_mock_data();
    let before = state.safety_alerts().to_vec();
    let summary = *state.safety_analytics();

    state.resolve_alert("nonexistent");

    assert_eq!(state.safety_alerts(), before.as_slice());
    assert_eq!(*state.safety_analytics(), summary);
}

#[test]
fn review_then_fix_walks_the_status() {
    let mut state = SiteState::with_mock_data();

    state.review_quality_issue("QI001");
    assert_eq!(state.quality_issues()[0].status, IssueStatus::Reviewing);
    // still outstanding, no longer open
    assert_eq!(state.quality_analytics().major_issues, 1);
    assert_eq!(state.quality_analytics().quality_score, 100);

    state.fix_quality_issue("QI001");
    assert_eq!(state.quality_issues()[0].status, IssueStatus::Fixed);
    assert_eq!(state.quality_analytics().major_issues, 0);
    assert!((state.ai_analytics().compliance_score - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn overspent_projects_flip_budget_trend() {
    let mut state = SiteState::with_mock_data();
    state.update::<node::Projects>(|projects| {
        projects
            .iter()
            .take(1)
            .map(|p| Project {
                budget: 100.0,
                spent: 120.0,
                ..p.clone()
            })
            .collect()
    });

    assert!((state.ai_analytics().budget_variance - 20.0).abs() < 1e-9);
    assert_eq!(state.dashboard_metrics().budget_trend, -2.1);
}

#[test]
fn empty_seed_yields_zeroed_averages() {
    let state = SiteState::new(Seed::default());

    assert_eq!(state.project_analytics().avg_progress, 0.0);
    assert_eq!(state.project_analytics().budget_variance, 0.0);
    assert_eq!(state.quality_analytics().avg_confidence, 0.0);
    assert_eq!(state.equipment_analytics().avg_efficiency, 0.0);
    assert_eq!(state.equipment_analytics().avg_health, 0.0);
    assert_eq!(state.safety_analytics().critical_alerts, 0);

    let metrics = state.dashboard_metrics();
    assert!(metrics.active_projects.is_empty());
    assert!(metrics.progress_trend.is_finite());
    assert_eq!(metrics.progress_trend, -2.1);
    assert_eq!(state.recommendations().len(), 6);
}

#[test]
fn empty_seed_totals_are_positive_zero() {
    let state = SiteState::new(Seed::default());

    let ai = state.ai_analytics();
    assert!(ai.total_budget.is_sign_positive());
    assert!(ai.total_spent.is_sign_positive());

    let json = serde_json::to_value(state.dashboard_metrics()).unwrap();
    assert_eq!(json["totalBudget"].to_string(), "0.0");
}

#[test]
fn subscribers_see_current_value_then_changes() {
    let mut state = SiteState::with_mock_data();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&seen);
    state.subscribe::<node::SafetyAnalytics>(move |summary| {
        log.borrow_mut().push(summary.critical_alerts)
    });
    assert_eq!(*seen.borrow(), vec![1]);

    state.resolve_alert("SA002");
    assert_eq!(*seen.borrow(), vec![1, 0]);

    // quality writes never reach safety subscribers
    state.fix_quality_issue("QI001");
    assert_eq!(*seen.borrow(), vec![1, 0]);
}

#[test]
fn unchanged_values_do_not_notify() {
    let mut state = SiteState::with_mock_data();
    let hits = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&hits);
    state.subscribe::<node::DashboardMetrics>(move |_| *counter.borrow_mut() += 1);
    assert_eq!(*hits.borrow(), 1);

    let recomputed_before = state.version_of(NodeId::DashboardMetrics);
    state.resolve_alert("nonexistent");

    assert_eq!(state.version_of(NodeId::DashboardMetrics), recomputed_before + 1);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn each_changed_node_notifies_once_in_registration_order() {
    let mut state = SiteState::with_mock_data();
    let observed = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&observed);
    state.subscribe::<node::AiAnalytics>(move |analytics| {
        log.borrow_mut().push(("analytics", analytics.critical_alerts))
    });
    let log = Rc::clone(&observed);
    state.subscribe::<node::AiRecommendations>(move |recs| {
        let safety = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::Safety)
            .map(|r| r.priority as u32)
            .unwrap_or_default();
        log.borrow_mut().push(("recommendations", safety))
    });
    observed.borrow_mut().clear();

    state.resolve_alert("SA002");

    assert_eq!(
        *observed.borrow(),
        vec![("analytics", 0), ("recommendations", 0)]
    );
}

#[test]
fn unsubscribed_callbacks_stop_firing() {
    let mut state = SiteState::with_mock_data();
    let hits = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&hits);
    let id = state.subscribe::<node::SafetyAlerts>(move |_| *counter.borrow_mut() += 1);
    assert_eq!(state.subscriber_count(NodeId::SafetyAlerts), 1);
    assert!(state.unsubscribe(id));
    assert_eq!(state.subscriber_count(NodeId::SafetyAlerts), 0);

    state.resolve_alert("SA001");
    assert_eq!(*hits.borrow(), 1);
    assert!(!state.unsubscribe(id));
}

#[test]
fn set_replaces_a_whole_leaf() {
    let mut state = SiteState::with_mock_data();
    let mut alerts = state.safety_alerts().to_vec();
    alerts.retain(|a| a.severity != AlertSeverity::Critical);

    state.set::<node::SafetyAlerts>(alerts);

    assert_eq!(state.safety_alerts().len(), 2);
    assert_eq!(state.ai_analytics().critical_alerts, 0);
    assert_eq!(state.dashboard_metrics().alerts_trend, 3.2);
    assert_eq!(state.dashboard_metrics().recent_safety_alerts.len(), 2);
}
