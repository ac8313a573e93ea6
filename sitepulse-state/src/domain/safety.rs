use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::AlertId;

/// Mean hours from alert to response. Not yet measured on site.
pub const AVERAGE_RESPONSE_TIME_HOURS: f64 = 4.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlertKind {
    Ppe,
    Hazard,
    Equipment,
    Behavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAlert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub description: String,
    pub resolved: bool,
}

impl SafetyAlert {
    /// Unresolved alert of the given severity.
    pub fn is_open(&self, severity: AlertSeverity) -> bool {
        !self.resolved && self.severity == severity
    }
}

/// Aggregate over the safety alert collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySummary {
    pub total_alerts: u32,
    pub critical_alerts: u32,
    pub high_alerts: u32,
    pub resolved_today: u32,
    pub safety_score: u32,
    pub incident_risk: u32,
    pub average_response_time: f64,
}

impl SafetySummary {
    pub fn from_alerts(alerts: &[SafetyAlert]) -> Self {
        Self {
            total_alerts: alerts.len() as u32,
            critical_alerts: count_open(alerts, AlertSeverity::Critical),
            high_alerts: count_open(alerts, AlertSeverity::High),
            resolved_today: alerts.iter().filter(|a| a.resolved).count() as u32,
            safety_score: safety_score(alerts),
            incident_risk: incident_risk(alerts),
            average_response_time: AVERAGE_RESPONSE_TIME_HOURS,
        }
    }
}

fn count_open(alerts: &[SafetyAlert], severity: AlertSeverity) -> u32 {
    alerts.iter().filter(|a| a.is_open(severity)).count() as u32
}

/// 100 minus 15 points per unresolved alert, floored at 0.
pub fn safety_score(alerts: &[SafetyAlert]) -> u32 {
    let unresolved = alerts.iter().filter(|a| !a.resolved).count() as u32;
    100u32.saturating_sub(unresolved.saturating_mul(15))
}

/// 40 points per open critical alert plus 20 per open high alert, capped at 100.
pub fn incident_risk(alerts: &[SafetyAlert]) -> u32 {
    let critical = count_open(alerts, AlertSeverity::Critical);
    let high = count_open(alerts, AlertSeverity::High);
    critical
        .saturating_mul(40)
        .saturating_add(high.saturating_mul(20))
        .min(100)
}
