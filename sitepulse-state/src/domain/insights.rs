use serde::Serialize;
use strum::{Display, EnumString};

use super::{fixed0, EquipmentSummary, ProjectSummary, QualitySummary, SafetySummary};

/// Every per-domain metric the dashboard needs, flattened into one record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalyticsData {
    // Projects
    pub total_budget: f64,
    pub total_spent: f64,
    pub avg_progress: f64,
    pub budget_variance: f64,

    // Safety
    pub critical_alerts: u32,
    pub high_alerts: u32,
    pub safety_score: u32,

    // Quality
    pub critical_issues: u32,
    pub quality_score: u32,
    pub compliance_score: f64,
    pub avg_confidence: f64,

    // Equipment
    pub equipment_efficiency: f64,
    pub total_equipment: u32,
    pub operational: u32,
    pub in_maintenance: u32,
    pub down: u32,
    pub avg_health: f64,
}

impl AiAnalyticsData {
    /// Merges the per-domain summaries. A missing summary contributes zeros.
    pub fn merge(
        projects: Option<&ProjectSummary>,
        safety: Option<&SafetySummary>,
        quality: Option<&QualitySummary>,
        equipment: Option<&EquipmentSummary>,
    ) -> Self {
        let projects = projects.copied().unwrap_or_default();
        let safety = safety.copied().unwrap_or_default();
        let quality = quality.copied().unwrap_or_default();
        let equipment = equipment.copied().unwrap_or_default();

        Self {
            total_budget: projects.total_budget,
            total_spent: projects.total_spent,
            avg_progress: projects.avg_progress,
            budget_variance: projects.budget_variance,
            critical_alerts: safety.critical_alerts,
            high_alerts: safety.high_alerts,
            safety_score: safety.safety_score,
            critical_issues: quality.critical_issues,
            quality_score: quality.quality_score,
            compliance_score: quality.compliance_score,
            avg_confidence: quality.avg_confidence,
            equipment_efficiency: equipment.avg_efficiency,
            total_equipment: equipment.total_equipment,
            operational: equipment.operational,
            in_maintenance: equipment.in_maintenance,
            down: equipment.down,
            avg_health: equipment.avg_health,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationCategory {
    Schedule,
    Cost,
    Safety,
    Quality,
    Equipment,
    Performance,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub id: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    /// 0.0–100.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl AiRecommendation {
    fn new(
        id: &str,
        category: RecommendationCategory,
        priority: Priority,
        title: &str,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            priority,
            title: title.to_string(),
            description: description.into(),
            impact: None,
            confidence: None,
        }
    }

    fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 100.0));
        self
    }
}

/// Builds the six dashboard recommendations, always in category order
/// schedule, cost, safety, quality, equipment, performance.
pub fn generate_recommendations(analytics: &AiAnalyticsData) -> Vec<AiRecommendation> {
    use RecommendationCategory as C;

    let has_critical_alerts = analytics.critical_alerts > 0;
    let efficiency = analytics.equipment_efficiency;

    vec![
        AiRecommendation::new(
            "schedule-1",
            C::Schedule,
            Priority::Medium,
            "💡 Schedule Optimization",
            "Consider reallocating resources from Highway Bridge Extension to Residential Tower A to reduce delay risk by 15%.",
        )
        .with_impact("15% delay reduction")
        .with_confidence(87.0),
        AiRecommendation::new(
            "cost-1",
            C::Cost,
            Priority::High,
            "💰 Cost Savings",
            "Implement predictive maintenance on Excavator CAT-320 to avoid potential $45K in downtime costs.",
        )
        .with_impact("$45K savings")
        .with_confidence(92.0),
        (if has_critical_alerts {
            AiRecommendation::new(
                "safety-1",
                C::Safety,
                Priority::Critical,
                "⚠️ Safety Priority",
                "Address critical scaffolding issue immediately. Predicted incident probability: 78% within 24 hours.",
            )
            .with_impact("Prevent incident")
        } else {
            AiRecommendation::new(
                "safety-1",
                C::Safety,
                Priority::Low,
                "⚠️ Safety Priority",
                "Safety systems operating normally. Continue regular monitoring protocols.",
            )
            .with_impact("Maintain safety")
        })
        .with_confidence(89.0),
        AiRecommendation::new(
            "quality-1",
            C::Quality,
            if analytics.critical_issues > 0 {
                Priority::High
            } else {
                Priority::Medium
            },
            "🔍 Quality Focus",
            format!(
                "Review structural issues in Column C-12. AI confidence: {}%. Immediate inspection recommended.",
                fixed0(analytics.avg_confidence)
            ),
        )
        .with_impact("Quality assurance")
        .with_confidence(analytics.avg_confidence),
        AiRecommendation::new(
            "equipment-1",
            C::Equipment,
            if efficiency < 80.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            "🔧 Equipment Alert",
            format!(
                "Equipment efficiency at {}%. Schedule maintenance for optimal performance.",
                fixed0(efficiency)
            ),
        )
        .with_impact(format!(
            "{}% efficiency gain potential",
            fixed0(90.0 - efficiency)
        ))
        .with_confidence(85.0),
        AiRecommendation::new(
            "performance-1",
            C::Performance,
            Priority::Medium,
            "📊 Performance Insight",
            format!(
                "Overall project progress: {}%. Quality compliance at {}%.",
                fixed0(analytics.avg_progress),
                fixed0(analytics.compliance_score)
            ),
        )
        .with_impact("Performance optimization")
        .with_confidence(91.0),
    ]
}
