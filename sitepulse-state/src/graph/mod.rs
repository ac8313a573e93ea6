//! Shape of the derivation graph.
//!
//! The graph is fixed: five leaves and seven derived nodes. Each node declares
//! its direct inputs and [`NodeId::ALL`] lists every node in an order where
//! inputs always come before their dependents.

mod subscription;
mod versioned;

pub use subscription::SubscriptionId;
pub(crate) use subscription::Subscribers;
pub use versioned::Versioned;

use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeId {
    ActiveTab,
    Projects,
    SafetyAlerts,
    QualityIssues,
    Equipment,
    ProjectAnalytics,
    SafetyAnalytics,
    QualityAnalytics,
    EquipmentAnalytics,
    AiAnalytics,
    AiRecommendations,
    DashboardMetrics,
}

impl NodeId {
    pub const COUNT: usize = 12;

    /// All nodes in topological order.
    pub const ALL: [NodeId; NodeId::COUNT] = [
        NodeId::ActiveTab,
        NodeId::Projects,
        NodeId::SafetyAlerts,
        NodeId::QualityIssues,
        NodeId::Equipment,
        NodeId::ProjectAnalytics,
        NodeId::SafetyAnalytics,
        NodeId::QualityAnalytics,
        NodeId::EquipmentAnalytics,
        NodeId::AiAnalytics,
        NodeId::AiRecommendations,
        NodeId::DashboardMetrics,
    ];

    /// Direct inputs of this node. Empty for leaves.
    pub fn inputs(self) -> &'static [NodeId] {
        match self {
            NodeId::ActiveTab
            | NodeId::Projects
            | NodeId::SafetyAlerts
            | NodeId::QualityIssues
            | NodeId::Equipment => &[],
            NodeId::ProjectAnalytics => &[NodeId::Projects],
            NodeId::SafetyAnalytics => &[NodeId::SafetyAlerts],
            NodeId::QualityAnalytics => &[NodeId::QualityIssues],
            NodeId::EquipmentAnalytics => &[NodeId::Equipment],
            NodeId::AiAnalytics => &[
                NodeId::ProjectAnalytics,
                NodeId::SafetyAnalytics,
                NodeId::QualityAnalytics,
                NodeId::EquipmentAnalytics,
            ],
            NodeId::AiRecommendations => &[NodeId::AiAnalytics],
            NodeId::DashboardMetrics => &[
                NodeId::Projects,
                NodeId::SafetyAlerts,
                NodeId::AiAnalytics,
            ],
        }
    }

    pub fn is_leaf(self) -> bool {
        self.inputs().is_empty()
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Every node that depends on `changed`, directly or transitively, in the
/// order they must be recomputed. `changed` itself is not included.
pub fn dependents_of(changed: NodeId) -> Vec<NodeId> {
    let mut dirty = [false; NodeId::COUNT];
    dirty[changed.index()] = true;

    let mut order = Vec::new();
    for node in NodeId::ALL {
        if node.inputs().iter().any(|input| dirty[input.index()]) {
            dirty[node.index()] = true;
            order.push(node);
        }
    }
    order
}
