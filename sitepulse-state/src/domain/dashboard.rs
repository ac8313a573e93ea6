use serde::Serialize;
use tracing::warn;

use super::{AiAnalyticsData, AlertSeverity, Project, SafetyAlert};

/// How many safety alerts the dashboard shows, taken from the front of the store.
pub const RECENT_ALERTS_LIMIT: usize = 5;

/// Everything the dashboard overview renders.
///
/// Trends are step values derived from the current state only; there is no
/// history behind them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_budget: f64,
    pub avg_progress: f64,
    pub critical_alerts: u32,
    pub equipment_efficiency: f64,
    pub active_projects: Vec<Project>,
    pub recent_safety_alerts: Vec<SafetyAlert>,
    pub budget_trend: f64,
    pub progress_trend: f64,
    pub alerts_trend: f64,
    pub efficiency_trend: f64,
}

impl DashboardMetrics {
    pub fn compute(
        projects: &[Project],
        alerts: &[SafetyAlert],
        analytics: &AiAnalyticsData,
    ) -> Self {
        let active_projects = projects
            .iter()
            .filter(|p| p.status.is_in_flight())
            .cloned()
            .collect();
        let recent_safety_alerts = alerts.iter().take(RECENT_ALERTS_LIMIT).cloned().collect();

        Self {
            total_budget: analytics.total_budget,
            avg_progress: analytics.avg_progress,
            critical_alerts: analytics.critical_alerts,
            equipment_efficiency: analytics.equipment_efficiency,
            active_projects,
            recent_safety_alerts,
            budget_trend: budget_trend(analytics),
            progress_trend: progress_trend(projects),
            alerts_trend: alerts_trend(alerts),
            efficiency_trend: efficiency_trend(analytics.equipment_efficiency),
        }
    }
}

pub fn budget_trend(analytics: &AiAnalyticsData) -> f64 {
    if analytics.budget_variance > 0.0 {
        -2.1
    } else {
        2.5
    }
}

/// Trend from the raw mean project progress.
///
/// An empty project list has no mean; it is reported and treated as "not
/// above 60", which yields the same -2.1 an unguarded NaN comparison would.
pub fn progress_trend(projects: &[Project]) -> f64 {
    if projects.is_empty() {
        warn!("progress trend requested for an empty project list");
        return -2.1;
    }
    let avg_progress = projects.iter().map(|p| p.progress).sum::<f64>() / projects.len() as f64;
    if avg_progress > 60.0 {
        5.2
    } else {
        -2.1
    }
}

pub fn alerts_trend(alerts: &[SafetyAlert]) -> f64 {
    if alerts.iter().any(|a| a.is_open(AlertSeverity::Critical)) {
        -8.5
    } else {
        3.2
    }
}

pub fn efficiency_trend(efficiency: f64) -> f64 {
    if efficiency > 85.0 {
        3.1
    } else {
        -1.5
    }
}
