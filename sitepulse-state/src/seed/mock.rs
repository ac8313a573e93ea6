//! Demo records the dashboard starts with when no seed file is given.

use time::macros::{date, datetime};

use crate::domain::{
    AlertId, AlertKind, AlertSeverity, Equipment, EquipmentId, EquipmentStatus, IssueId,
    IssueKind, IssueSeverity, IssueStatus, Project, ProjectId, ProjectStatus, QualityIssue,
    RiskLevel, SafetyAlert,
};

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::new("1"),
            name: "Downtown Office Complex".to_string(),
            status: ProjectStatus::Active,
            progress: 67.0,
            budget: 12_500_000.0,
            spent: 8_375_000.0,
            start_date: date!(2024 - 01 - 15),
            end_date: date!(2025 - 08 - 30),
            risk_level: RiskLevel::Medium,
        },
        Project {
            id: ProjectId::new("2"),
            name: "Residential Tower A".to_string(),
            status: ProjectStatus::Delayed,
            progress: 45.0,
            budget: 8_200_000.0,
            spent: 4_100_000.0,
            start_date: date!(2024 - 03 - 01),
            end_date: date!(2025 - 12 - 15),
            risk_level: RiskLevel::High,
        },
        Project {
            id: ProjectId::new("3"),
            name: "Highway Bridge Extension".to_string(),
            status: ProjectStatus::Active,
            progress: 89.0,
            budget: 5_600_000.0,
            spent: 4_984_000.0,
            start_date: date!(2023 - 09 - 01),
            end_date: date!(2025 - 03 - 15),
            risk_level: RiskLevel::Low,
        },
    ]
}

pub fn safety_alerts() -> Vec<SafetyAlert> {
    vec![
        SafetyAlert {
            id: AlertId::new("SA001"),
            kind: AlertKind::Ppe,
            severity: AlertSeverity::High,
            location: "Floor 15, Zone A".to_string(),
            timestamp: datetime!(2025-06-27 08:30 UTC),
            description: "Worker without hard hat detected".to_string(),
            resolved: false,
        },
        SafetyAlert {
            id: AlertId::new("SA002"),
            kind: AlertKind::Hazard,
            severity: AlertSeverity::Critical,
            location: "Ground Level, East Side".to_string(),
            timestamp: datetime!(2025-06-27 10:15 UTC),
            description: "Unstable scaffolding detected".to_string(),
            resolved: false,
        },
        SafetyAlert {
            id: AlertId::new("SA003"),
            kind: AlertKind::Equipment,
            severity: AlertSeverity::Medium,
            location: "Crane Operation Zone".to_string(),
            timestamp: datetime!(2025-06-27 07:45 UTC),
            description: "Equipment operating outside safe parameters".to_string(),
            resolved: true,
        },
    ]
}

pub fn quality_issues() -> Vec<QualityIssue> {
    vec![
        QualityIssue {
            id: IssueId::new("QI001"),
            kind: IssueKind::Structural,
            severity: IssueSeverity::Major,
            location: "Column C-12, Floor 8".to_string(),
            detected: datetime!(2025-06-27 09:20 UTC),
            confidence: 94.0,
            status: IssueStatus::Open,
        },
        QualityIssue {
            id: IssueId::new("QI002"),
            kind: IssueKind::Alignment,
            severity: IssueSeverity::Minor,
            location: "Wall Section W-45".to_string(),
            detected: datetime!(2025-06-27 11:30 UTC),
            confidence: 87.0,
            status: IssueStatus::Reviewing,
        },
        QualityIssue {
            id: IssueId::new("QI003"),
            kind: IssueKind::Material,
            severity: IssueSeverity::Critical,
            location: "Foundation Block F-8".to_string(),
            detected: datetime!(2025-06-26 16:45 UTC),
            confidence: 98.0,
            status: IssueStatus::Fixed,
        },
    ]
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: EquipmentId::new("EQ001"),
            name: "Tower Crane TC-1".to_string(),
            status: EquipmentStatus::Operational,
            health: 87.0,
            last_maintenance: date!(2025 - 06 - 15),
            next_maintenance: date!(2025 - 07 - 15),
            efficiency: 92.0,
        },
        Equipment {
            id: EquipmentId::new("EQ002"),
            name: "Excavator CAT-320".to_string(),
            status: EquipmentStatus::Maintenance,
            health: 65.0,
            last_maintenance: date!(2025 - 06 - 20),
            next_maintenance: date!(2025 - 06 - 28),
            efficiency: 78.0,
        },
        Equipment {
            id: EquipmentId::new("EQ003"),
            name: "Concrete Mixer CM-500".to_string(),
            status: EquipmentStatus::Operational,
            health: 94.0,
            last_maintenance: date!(2025 - 06 - 10),
            next_maintenance: date!(2025 - 07 - 10),
            efficiency: 96.0,
        },
    ]
}
