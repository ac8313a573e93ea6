//! Plain-text views of the dashboard state.

use std::fmt::Write;

use sitepulse_state::domain::{
    budget_optimization, maintenance_advice, predict_project_delay, AiAnalyticsData,
    AiRecommendation, DashboardMetrics, Equipment, Project, QualityIssue, SafetyAlert,
};

/// Compact currency, e.g. "$26.3M" or "$45.0K".
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.1}K", abs / 1_000.0)
    } else {
        format!("{sign}${abs:.0}")
    }
}

/// Signed trend with an arrow, e.g. "▲ +5.2%".
pub fn trend(value: f64) -> String {
    let arrow = if value >= 0.0 { "▲" } else { "▼" };
    format!("{arrow} {value:+.1}%")
}

pub fn dashboard(metrics: &DashboardMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Site overview");
    let _ = writeln!(
        out,
        "  Total budget         {:>10}  {}",
        money(metrics.total_budget),
        trend(metrics.budget_trend)
    );
    let _ = writeln!(
        out,
        "  Average progress     {:>9.0}%  {}",
        metrics.avg_progress,
        trend(metrics.progress_trend)
    );
    let _ = writeln!(
        out,
        "  Critical alerts      {:>10}  {}",
        metrics.critical_alerts,
        trend(metrics.alerts_trend)
    );
    let _ = writeln!(
        out,
        "  Equipment efficiency {:>9.0}%  {}",
        metrics.equipment_efficiency,
        trend(metrics.efficiency_trend)
    );

    let _ = writeln!(out, "\nActive projects ({})", metrics.active_projects.len());
    for p in &metrics.active_projects {
        let _ = writeln!(out, "  {:<28} {:>8} {:>4.0}%", p.name, p.status, p.progress);
    }

    let _ = writeln!(out, "\nRecent safety alerts");
    for alert in &metrics.recent_safety_alerts {
        let _ = writeln!(out, "  {}", alert_line(alert));
    }
    out
}

pub fn analytics(data: &AiAnalyticsData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Projects");
    let _ = writeln!(
        out,
        "  budget {} / spent {}",
        money(data.total_budget),
        money(data.total_spent)
    );
    let _ = writeln!(
        out,
        "  progress {:.1}%, variance {:+.1}%",
        data.avg_progress, data.budget_variance
    );
    let _ = writeln!(out, "Safety");
    let _ = writeln!(
        out,
        "  score {}, {} critical, {} high",
        data.safety_score, data.critical_alerts, data.high_alerts
    );
    let _ = writeln!(out, "Quality");
    let _ = writeln!(
        out,
        "  score {}, compliance {:.1}%, confidence {:.1}%, {} critical outstanding",
        data.quality_score, data.compliance_score, data.avg_confidence, data.critical_issues
    );
    let _ = writeln!(out, "Equipment");
    let _ = writeln!(
        out,
        "  {} total: {} operational, {} in maintenance, {} down",
        data.total_equipment, data.operational, data.in_maintenance, data.down
    );
    let _ = writeln!(
        out,
        "  efficiency {:.1}%, health {:.1}%",
        data.equipment_efficiency, data.avg_health
    );
    out
}

pub fn recommendations(recs: &[AiRecommendation]) -> String {
    let mut out = String::new();
    for rec in recs {
        let _ = writeln!(out, "[{}] {}", rec.priority, rec.title);
        let _ = writeln!(out, "    {}", rec.description);
        if let Some(impact) = &rec.impact {
            let _ = write!(out, "    impact: {impact}");
            if let Some(confidence) = rec.confidence {
                let _ = write!(out, " (confidence {confidence:.0}%)");
            }
            let _ = writeln!(out);
        }
    }
    out
}

pub fn projects(projects: &[Project]) -> String {
    let mut out = String::new();
    for p in projects {
        let _ = writeln!(
            out,
            "{:<4} {:<28} {:<10} {:>4.0}%  {} of {}  risk {:<6} delay {}%  outlook {}",
            p.id,
            p.name,
            p.status,
            p.progress,
            money(p.spent),
            money(p.budget),
            p.risk_level,
            predict_project_delay(p),
            money(budget_optimization(p) as f64)
        );
    }
    out
}

fn alert_line(alert: &SafetyAlert) -> String {
    format!(
        "{} {:<8} {:<8} {} ({}){}",
        alert.id,
        alert.severity,
        alert.kind,
        alert.description,
        alert.location,
        if alert.resolved { " [resolved]" } else { "" }
    )
}

pub fn alerts(alerts: &[SafetyAlert]) -> String {
    alerts.iter().map(|a| alert_line(a) + "\n").collect()
}

pub fn issues(issues: &[QualityIssue]) -> String {
    issues
        .iter()
        .map(|i| {
            format!(
                "{} {:<8} {:<10} {:<9} {:>3.0}%  {}\n",
                i.id, i.severity, i.kind, i.status, i.confidence, i.location
            )
        })
        .collect()
}

pub fn equipment(fleet: &[Equipment]) -> String {
    fleet
        .iter()
        .map(|e| {
            format!(
                "{} {:<24} {:<11} health {:>3.0}%  efficiency {:>3.0}%  next service {}  {}\n",
                e.id,
                e.name,
                e.status,
                e.health,
                e.efficiency,
                e.next_maintenance,
                maintenance_advice(e)
            )
        })
        .collect()
}
