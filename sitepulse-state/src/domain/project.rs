use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{mean, round_half_up, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProjectStatus {
    Planning,
    Active,
    Delayed,
    Completed,
}

impl ProjectStatus {
    /// Whether the project shows up in the dashboard's active list.
    pub fn is_in_flight(self) -> bool {
        matches!(self, ProjectStatus::Active | ProjectStatus::Delayed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A construction project. `spent` may exceed `budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0.0–100.0
    pub progress: f64,
    pub budget: f64,
    pub spent: f64,
    #[serde(with = "crate::domain::iso_date")]
    pub start_date: Date,
    #[serde(with = "crate::domain::iso_date")]
    pub end_date: Date,
    pub risk_level: RiskLevel,
}

impl Project {
    /// Share of the budget already spent, or 0 when there is no budget.
    pub fn burn_ratio(&self) -> f64 {
        if self.budget > 0.0 {
            self.spent / self.budget
        } else {
            0.0
        }
    }
}

/// Aggregate over the project collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub avg_progress: f64,
    /// Percent over (positive) or under (negative) budget across all projects.
    pub budget_variance: f64,
}

impl ProjectSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        // fold from +0.0: `Sum for f64` starts at -0.0
        let total_budget = projects.iter().fold(0.0, |sum, p| sum + p.budget);
        let total_spent = projects.iter().fold(0.0, |sum, p| sum + p.spent);
        let avg_progress = mean(projects.iter().map(|p| p.progress));

        let budget_variance = if total_budget > 0.0 {
            (total_spent / total_budget - 1.0) * 100.0
        } else {
            0.0
        };

        Self {
            total_budget,
            total_spent,
            avg_progress,
            budget_variance,
        }
    }
}

/// Predicted delay risk for a project, as a whole percentage.
pub fn predict_project_delay(project: &Project) -> u32 {
    let risk = match project.risk_level {
        RiskLevel::High => 0.3,
        RiskLevel::Medium => 0.15,
        RiskLevel::Low => 0.05,
    };
    let pace = if project.progress < 50.0 { 0.2 } else { 0.1 };
    let burn = if project.burn_ratio() > 0.8 { 0.25 } else { 0.1 };

    round_half_up((risk + pace + burn) * 100.0) as u32
}

/// Estimated budget that could be freed (positive) or is at risk (negative)
/// given how far progress runs ahead of spend.
///
/// Returns 0 when nothing has been spent yet or the project has no budget.
pub fn budget_optimization(project: &Project) -> i64 {
    let burn = project.burn_ratio();
    if burn <= 0.0 {
        return 0;
    }
    let efficiency = project.progress / burn;
    round_half_up((efficiency - 1.0) * project.budget) as i64
}
