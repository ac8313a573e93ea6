use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::{mean, IssueId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IssueKind {
    Structural,
    Material,
    Alignment,
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IssueSeverity {
    Minor,
    Major,
    Critical,
}

/// Review progression is open -> reviewing -> fixed, but any status may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IssueStatus {
    Open,
    Reviewing,
    Fixed,
}

/// A defect flagged by site inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssue {
    pub id: IssueId,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub location: String,
    #[serde(with = "time::serde::rfc3339")]
    pub detected: OffsetDateTime,
    /// Detection confidence, 0.0–100.0
    pub confidence: f64,
    pub status: IssueStatus,
}

/// Aggregate over the quality issue collection.
///
/// `critical_issues`/`major_issues` count everything not yet fixed, while
/// `quality_score` only penalises issues still in `open`. Issues under review
/// therefore show up as outstanding without dragging the score down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualitySummary {
    pub total_issues: u32,
    pub critical_issues: u32,
    pub major_issues: u32,
    pub fixed_issues: u32,
    pub open_issues: u32,
    pub avg_confidence: f64,
    pub quality_score: u32,
    pub quality_risk: f64,
    pub compliance_score: f64,
}

impl QualitySummary {
    pub fn from_issues(issues: &[QualityIssue]) -> Self {
        let outstanding = |severity: IssueSeverity| {
            issues
                .iter()
                .filter(|i| i.severity == severity && i.status != IssueStatus::Fixed)
                .count() as u32
        };

        Self {
            total_issues: issues.len() as u32,
            critical_issues: outstanding(IssueSeverity::Critical),
            major_issues: outstanding(IssueSeverity::Major),
            fixed_issues: count_status(issues, IssueStatus::Fixed),
            open_issues: count_status(issues, IssueStatus::Open),
            avg_confidence: mean(issues.iter().map(|i| i.confidence)),
            quality_score: quality_score(issues),
            quality_risk: quality_risk(issues),
            compliance_score: compliance_score(issues),
        }
    }
}

fn count_status(issues: &[QualityIssue], status: IssueStatus) -> u32 {
    issues.iter().filter(|i| i.status == status).count() as u32
}

fn open_issues(issues: &[QualityIssue]) -> impl Iterator<Item = &QualityIssue> + '_ {
    issues.iter().filter(|i| i.status == IssueStatus::Open)
}

/// 100 minus 25 per open critical and 10 per open major issue, floored at 0.
pub fn quality_score(issues: &[QualityIssue]) -> u32 {
    let critical = open_issues(issues)
        .filter(|i| i.severity == IssueSeverity::Critical)
        .count() as u32;
    let major = open_issues(issues)
        .filter(|i| i.severity == IssueSeverity::Major)
        .count() as u32;

    100u32
        .saturating_sub(critical.saturating_mul(25))
        .saturating_sub(major.saturating_mul(10))
}

/// Risk from open issues weighted by detection confidence, capped at 100.
pub fn quality_risk(issues: &[QualityIssue]) -> f64 {
    let open: Vec<&QualityIssue> = open_issues(issues).collect();
    let avg_confidence = mean(open.iter().map(|i| i.confidence));
    let risk_factor = open.len() as f64 * (avg_confidence / 100.0);

    (risk_factor * 20.0).min(100.0)
}

/// Percentage of issues already fixed; 100 when there are no issues at all.
pub fn compliance_score(issues: &[QualityIssue]) -> f64 {
    if issues.is_empty() {
        return 100.0;
    }
    count_status(issues, IssueStatus::Fixed) as f64 / issues.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn issue(
        id: &str,
        severity: IssueSeverity,
        status: IssueStatus,
        confidence: f64,
    ) -> QualityIssue {
        QualityIssue {
            id: IssueId::new(id),
            kind: IssueKind::Structural,
            severity,
            location: "Column C-12".to_string(),
            detected: datetime!(2025-06-27 09:20 UTC),
            confidence,
            status,
        }
    }

    #[test]
    fn fixed_critical_does_not_hurt_score() {
        let issues = vec![
            issue("QI001", IssueSeverity::Critical, IssueStatus::Open, 90.0),
            issue("QI002", IssueSeverity::Major, IssueStatus::Open, 80.0),
            issue("QI003", IssueSeverity::Critical, IssueStatus::Fixed, 70.0),
        ];
        let summary = QualitySummary::from_issues(&issues);
        assert_eq!(summary.quality_score, 65);
        assert_eq!(summary.critical_issues, 1);
        assert_eq!(summary.major_issues, 1);
        assert!((summary.compliance_score - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.avg_confidence, 80.0);
    }

    #[test]
    fn reviewing_counts_as_outstanding_but_not_for_score() {
        let issues = vec![issue("QI001", IssueSeverity::Critical, IssueStatus::Reviewing, 90.0)];
        let summary = QualitySummary::from_issues(&issues);
        assert_eq!(summary.critical_issues, 1);
        assert_eq!(summary.quality_score, 100);
        assert_eq!(summary.open_issues, 0);
    }

    #[test]
    fn empty_collection() {
        let summary = QualitySummary::from_issues(&[]);
        assert_eq!(summary.total_issues, 0);
        assert_eq!(summary.avg_confidence, 0.0);
        assert_eq!(summary.quality_risk, 0.0);
        assert_eq!(summary.compliance_score, 100.0);
        assert_eq!(summary.quality_score, 100);
    }

    #[test]
    fn quality_risk_uses_open_issues_only() {
        let issues = vec![
            issue("QI001", IssueSeverity::Major, IssueStatus::Open, 94.0),
            issue("QI002", IssueSeverity::Minor, IssueStatus::Reviewing, 87.0),
        ];
        assert!((quality_risk(&issues) - 18.8).abs() < 1e-9);

        let many: Vec<_> = (0..10)
            .map(|i| issue(&format!("QI{i}"), IssueSeverity::Minor, IssueStatus::Open, 100.0))
            .collect();
        assert_eq!(quality_risk(&many), 100.0);
    }

    #[test]
    fn score_floors_at_zero() {
        let issues: Vec<_> = (0..5)
            .map(|i| issue(&format!("QI{i}"), IssueSeverity::Critical, IssueStatus::Open, 50.0))
            .collect();
        assert_eq!(quality_score(&issues), 0);
    }
}
