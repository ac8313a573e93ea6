//! Typed handles for the nodes of the derivation graph.
//!
//! Each marker type names one node and fixes the type of its value, so
//! `state.get::<node::SafetyAnalytics>()` returns a `&SafetySummary` and
//! `state.update::<node::Projects>(..)` only accepts a project list.

use super::Nodes;
use crate::domain::{
    self, AiAnalyticsData, AiRecommendation, EquipmentSummary, Project, ProjectSummary,
    QualityIssue, QualitySummary, SafetyAlert, SafetySummary, Tab,
};
use crate::graph::{NodeId, Versioned};

/// A readable node of the graph.
pub trait Node: 'static {
    const ID: NodeId;
    type Value: PartialEq + 'static;

    fn slot(nodes: &Nodes) -> &Versioned<Self::Value>;
}

/// A node that holds source data and can be written to.
pub trait Leaf: Node {
    fn slot_mut(nodes: &mut Nodes) -> &mut Versioned<Self::Value>;
}

macro_rules! node {
    ($(#[$meta:meta])* $marker:ident => $field:ident : $value:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $marker;

        impl Node for $marker {
            const ID: NodeId = NodeId::$marker;
            type Value = $value;

            fn slot(nodes: &Nodes) -> &Versioned<Self::Value> {
                &nodes.$field
            }
        }
    };
}

macro_rules! leaf {
    ($(#[$meta:meta])* $marker:ident => $field:ident : $value:ty) => {
        node!($(#[$meta])* $marker => $field: $value);

        impl Leaf for $marker {
            fn slot_mut(nodes: &mut Nodes) -> &mut Versioned<Self::Value> {
                &mut nodes.$field
            }
        }
    };
}

leaf!(
    /// Currently selected dashboard tab.
    ActiveTab => active_tab: Tab
);
leaf!(Projects => projects: Vec<Project>);
leaf!(SafetyAlerts => safety_alerts: Vec<SafetyAlert>);
leaf!(QualityIssues => quality_issues: Vec<QualityIssue>);
leaf!(Equipment => equipment: Vec<domain::Equipment>);

node!(ProjectAnalytics => project_analytics: ProjectSummary);
node!(SafetyAnalytics => safety_analytics: SafetySummary);
node!(QualityAnalytics => quality_analytics: QualitySummary);
node!(EquipmentAnalytics => equipment_analytics: EquipmentSummary);
node!(AiAnalytics => ai_analytics: AiAnalyticsData);
node!(
    /// The six recommendations, in fixed category order.
    AiRecommendations => ai_recommendations: Vec<AiRecommendation>
);
node!(DashboardMetrics => dashboard_metrics: domain::DashboardMetrics);
