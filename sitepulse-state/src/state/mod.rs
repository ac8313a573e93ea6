//! The application state: leaf stores, memoized derived nodes and the
//! subscribers watching them.

pub mod node;

use tracing::{debug, info, trace};

use crate::domain::{
    generate_recommendations, AiAnalyticsData, AiRecommendation, DashboardMetrics, Equipment,
    EquipmentSummary, IssueStatus, Project, ProjectSummary, QualityIssue, QualitySummary,
    SafetyAlert, SafetySummary, Tab,
};
use crate::graph::{dependents_of, NodeId, Subscribers, SubscriptionId, Versioned};
use crate::seed::Seed;
use node::{Leaf, Node};

/// Current value of every node in the graph.
#[derive(Debug)]
pub struct Nodes {
    active_tab: Versioned<Tab>,
    projects: Versioned<Vec<Project>>,
    safety_alerts: Versioned<Vec<SafetyAlert>>,
    quality_issues: Versioned<Vec<QualityIssue>>,
    equipment: Versioned<Vec<Equipment>>,

    project_analytics: Versioned<ProjectSummary>,
    safety_analytics: Versioned<SafetySummary>,
    quality_analytics: Versioned<QualitySummary>,
    equipment_analytics: Versioned<EquipmentSummary>,
    ai_analytics: Versioned<AiAnalyticsData>,
    ai_recommendations: Versioned<Vec<AiRecommendation>>,
    dashboard_metrics: Versioned<DashboardMetrics>,
}

impl Nodes {
    fn seeded(seed: Seed) -> Self {
        let mut nodes = Self {
            active_tab: Versioned::new(Tab::default()),
            projects: Versioned::new(seed.projects),
            safety_alerts: Versioned::new(seed.safety_alerts),
            quality_issues: Versioned::new(seed.quality_issues),
            equipment: Versioned::new(seed.equipment),
            project_analytics: Versioned::default(),
            safety_analytics: Versioned::default(),
            quality_analytics: Versioned::default(),
            equipment_analytics: Versioned::default(),
            ai_analytics: Versioned::default(),
            ai_recommendations: Versioned::default(),
            dashboard_metrics: Versioned::default(),
        };
        for node in NodeId::ALL.into_iter().filter(|node| !node.is_leaf()) {
            nodes.recompute(node);
        }
        nodes
    }

    /// Recomputes a derived node from its inputs. Returns whether its value
    /// changed. Leaves are never recomputed.
    fn recompute(&mut self, node: NodeId) -> bool {
        trace!(%node, "recomputing");
        match node {
            NodeId::ActiveTab
            | NodeId::Projects
            | NodeId::SafetyAlerts
            | NodeId::QualityIssues
            | NodeId::Equipment => false,
            NodeId::ProjectAnalytics => self
                .project_analytics
                .replace(ProjectSummary::from_projects(self.projects.get())),
            NodeId::SafetyAnalytics => self
                .safety_analytics
                .replace(SafetySummary::from_alerts(self.safety_alerts.get())),
            NodeId::QualityAnalytics => self
                .quality_analytics
                .replace(QualitySummary::from_issues(self.quality_issues.get())),
            NodeId::EquipmentAnalytics => self
                .equipment_analytics
                .replace(EquipmentSummary::from_equipment(self.equipment.get())),
            NodeId::AiAnalytics => {
                let merged = AiAnalyticsData::merge(
                    Some(self.project_analytics.get()),
                    Some(self.safety_analytics.get()),
                    Some(self.quality_analytics.get()),
                    Some(self.equipment_analytics.get()),
                );
                self.ai_analytics.replace(merged)
            }
            NodeId::AiRecommendations => self
                .ai_recommendations
                .replace(generate_recommendations(self.ai_analytics.get())),
            NodeId::DashboardMetrics => {
                let metrics = DashboardMetrics::compute(
                    self.projects.get(),
                    self.safety_alerts.get(),
                    self.ai_analytics.get(),
                );
                self.dashboard_metrics.replace(metrics)
            }
        }
    }

    pub fn version_of(&self, node: NodeId) -> u64 {
        match node {
            NodeId::ActiveTab => self.active_tab.version(),
            NodeId::Projects => self.projects.version(),
            NodeId::SafetyAlerts => self.safety_alerts.version(),
            NodeId::QualityIssues => self.quality_issues.version(),
            NodeId::Equipment => self.equipment.version(),
            NodeId::ProjectAnalytics => self.project_analytics.version(),
            NodeId::SafetyAnalytics => self.safety_analytics.version(),
            NodeId::QualityAnalytics => self.quality_analytics.version(),
            NodeId::EquipmentAnalytics => self.equipment_analytics.version(),
            NodeId::AiAnalytics => self.ai_analytics.version(),
            NodeId::AiRecommendations => self.ai_recommendations.version(),
            NodeId::DashboardMetrics => self.dashboard_metrics.version(),
        }
    }
}

/// Dashboard state built from a [`Seed`].
///
/// Writing to a leaf recomputes every dependent node in topological order
/// before the call returns. Subscribers are notified once the whole pass is
/// done, and only for nodes whose value actually changed. Callbacks only get a
/// shared reference to their node, so they cannot write back into the state
/// mid-propagation.
pub struct SiteState {
    nodes: Nodes,
    subscribers: Subscribers<Nodes>,
}

impl SiteState {
    pub fn new(seed: Seed) -> Self {
        debug!(
            projects = seed.projects.len(),
            safety_alerts = seed.safety_alerts.len(),
            quality_issues = seed.quality_issues.len(),
            equipment = seed.equipment.len(),
            "seeding site state"
        );
        Self {
            nodes: Nodes::seeded(seed),
            subscribers: Subscribers::default(),
        }
    }

    /// State seeded with the built-in demo records.
    pub fn with_mock_data() -> Self {
        Self::new(Seed::mock())
    }

    pub fn get<N: Node>(&self) -> &N::Value {
        N::slot(&self.nodes).get()
    }

    pub fn version<N: Node>(&self) -> u64 {
        N::slot(&self.nodes).version()
    }

    pub fn version_of(&self, node: NodeId) -> u64 {
        self.nodes.version_of(node)
    }

    /// Replaces a leaf's value and propagates.
    pub fn set<L: Leaf>(&mut self, value: L::Value) {
        let changed = L::slot_mut(&mut self.nodes).replace(value);
        self.propagate(L::ID, changed);
    }

    /// Computes a leaf's next value from its current one, then behaves like
    /// [`SiteState::set`].
    pub fn update<L: Leaf>(&mut self, f: impl FnOnce(&L::Value) -> L::Value) {
        let next = f(self.get::<L>());
        self.set::<L>(next);
    }

    /// Registers `callback` on node `N`. It runs immediately with the current
    /// value, then after every propagation pass that changes the value.
    pub fn subscribe<N: Node>(
        &mut self,
        mut callback: impl FnMut(&N::Value) + 'static,
    ) -> SubscriptionId {
        callback(self.get::<N>());
        let id = self.subscribers.insert(
            N::ID,
            Box::new(move |nodes: &Nodes| callback(N::slot(nodes).get())),
        );
        let node = N::ID;
        debug!(%node, subscription = %id, "subscribed");
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id);
        debug!(subscription = %id, removed, "unsubscribed");
        removed
    }

    pub fn subscriber_count(&self, node: NodeId) -> usize {
        self.subscribers.count(node)
    }

    fn propagate(&mut self, leaf: NodeId, leaf_changed: bool) {
        let mut changed = Vec::new();
        if leaf_changed {
            changed.push(leaf);
        }

        let dirty = dependents_of(leaf);
        for &node in &dirty {
            if self.nodes.recompute(node) {
                changed.push(node);
            }
        }

        let notified = self.subscribers.notify(&changed, &self.nodes);
        debug!(
            %leaf,
            recomputed = dirty.len(),
            changed = changed.len(),
            notified,
            "propagation pass complete"
        );
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.set::<node::ActiveTab>(tab);
    }

    /// Marks a safety alert as resolved. Unknown ids leave the alerts as they are.
    pub fn resolve_alert(&mut self, alert_id: &str) {
        if self.safety_alerts().iter().any(|a| a.id == alert_id) {
            info!(alert_id, "resolving safety alert");
        } else {
            debug!(alert_id, "no safety alert with this id");
        }

        self.update::<node::SafetyAlerts>(|alerts| {
            alerts
                .iter()
                .map(|alert| {
                    if alert.id == alert_id {
                        SafetyAlert {
                            resolved: true,
                            ..alert.clone()
                        }
                    } else {
                        alert.clone()
                    }
                })
                .collect()
        });
    }

    pub fn review_quality_issue(&mut self, issue_id: &str) {
        self.set_issue_status(issue_id, IssueStatus::Reviewing);
    }

    pub fn fix_quality_issue(&mut self, issue_id: &str) {
        self.set_issue_status(issue_id, IssueStatus::Fixed);
    }

    fn set_issue_status(&mut self, issue_id: &str, status: IssueStatus) {
        if self.quality_issues().iter().any(|i| i.id == issue_id) {
            info!(issue_id, %status, "updating quality issue");
        } else {
            debug!(issue_id, "no quality issue with this id");
        }

        self.update::<node::QualityIssues>(|issues| {
            issues
                .iter()
                .map(|issue| {
                    if issue.id == issue_id {
                        QualityIssue {
                            status,
                            ..issue.clone()
                        }
                    } else {
                        issue.clone()
                    }
                })
                .collect()
        });
    }

    pub fn active_tab(&self) -> Tab {
        *self.get::<node::ActiveTab>()
    }

    pub fn projects(&self) -> &[Project] {
        self.get::<node::Projects>()
    }

    pub fn safety_alerts(&self) -> &[SafetyAlert] {
        self.get::<node::SafetyAlerts>()
    }

    pub fn quality_issues(&self) -> &[QualityIssue] {
        self.get::<node::QualityIssues>()
    }

    pub fn equipment(&self) -> &[Equipment] {
        self.get::<node::Equipment>()
    }

    pub fn project_analytics(&self) -> &ProjectSummary {
        self.get::<node::ProjectAnalytics>()
    }

    pub fn safety_analytics(&self) -> &SafetySummary {
        self.get::<node::SafetyAnalytics>()
    }

    pub fn quality_analytics(&self) -> &QualitySummary {
        self.get::<node::QualityAnalytics>()
    }

    pub fn equipment_analytics(&self) -> &EquipmentSummary {
        self.get::<node::EquipmentAnalytics>()
    }

    pub fn ai_analytics(&self) -> &AiAnalyticsData {
        self.get::<node::AiAnalytics>()
    }

    pub fn recommendations(&self) -> &[AiRecommendation] {
        self.get::<node::AiRecommendations>()
    }

    pub fn dashboard_metrics(&self) -> &DashboardMetrics {
        self.get::<node::DashboardMetrics>()
    }
}

impl Default for SiteState {
    fn default() -> Self {
        Self::with_mock_data()
    }
}
