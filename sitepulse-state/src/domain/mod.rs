//! Record types, per-domain analytics and the display-facing aggregates built
//! on top of them.
//!
//! Everything in here is a pure function of its inputs; the reactive wiring
//! lives in [`crate::state`].

mod dashboard;
mod equipment;
mod ids;
mod insights;
mod navigation;
mod project;
mod quality;
mod safety;

pub use dashboard::{
    alerts_trend, budget_trend, efficiency_trend, progress_trend, DashboardMetrics,
    RECENT_ALERTS_LIMIT,
};
pub use equipment::{
    maintenance_advice, Equipment, EquipmentStatus, EquipmentSummary, MaintenanceAdvice,
};
pub use ids::{AlertId, EquipmentId, IssueId, ProjectId};
pub use insights::{
    generate_recommendations, AiAnalyticsData, AiRecommendation, Priority,
    RecommendationCategory,
};
pub use navigation::Tab;
pub use project::{
    budget_optimization, predict_project_delay, Project, ProjectStatus, ProjectSummary, RiskLevel,
};
pub use quality::{
    compliance_score, quality_risk, quality_score, IssueKind, IssueSeverity, IssueStatus,
    QualityIssue, QualitySummary,
};
pub use safety::{
    incident_risk, safety_score, AlertKind, AlertSeverity, SafetyAlert, SafetySummary,
    AVERAGE_RESPONSE_TIME_HOURS,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Arithmetic mean, or 0 for an empty input.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Rounds half-way values towards positive infinity, like `Math.round`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats a value with no decimals, rounding half away from zero.
pub(crate) fn fixed0(value: f64) -> String {
    format!("{:.0}", value.round())
}
