use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{mean, EquipmentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EquipmentStatus {
    Operational,
    Maintenance,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub status: EquipmentStatus,
    /// Condition, 0.0–100.0
    pub health: f64,
    #[serde(with = "crate::domain::iso_date")]
    pub last_maintenance: Date,
    #[serde(with = "crate::domain::iso_date")]
    pub next_maintenance: Date,
    /// Output relative to rated capacity, 0.0–100.0
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummary {
    pub total_equipment: u32,
    pub operational: u32,
    pub in_maintenance: u32,
    pub down: u32,
    pub avg_efficiency: f64,
    pub avg_health: f64,
}

impl EquipmentSummary {
    pub fn from_equipment(equipment: &[Equipment]) -> Self {
        let count = |status: EquipmentStatus| {
            equipment.iter().filter(|e| e.status == status).count() as u32
        };

        Self {
            total_equipment: equipment.len() as u32,
            operational: count(EquipmentStatus::Operational),
            in_maintenance: count(EquipmentStatus::Maintenance),
            down: count(EquipmentStatus::Down),
            avg_efficiency: mean(equipment.iter().map(|e| e.efficiency)),
            avg_health: mean(equipment.iter().map(|e| e.health)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceAdvice {
    Immediate,
    WithinWeek,
    Optimal,
}

impl MaintenanceAdvice {
    pub fn message(self) -> &'static str {
        match self {
            MaintenanceAdvice::Immediate => "Immediate maintenance required",
            MaintenanceAdvice::WithinWeek => "Schedule maintenance within 1 week",
            MaintenanceAdvice::Optimal => "Equipment running optimally",
        }
    }
}

impl std::fmt::Display for MaintenanceAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Maintenance urgency from equipment health.
pub fn maintenance_advice(equipment: &Equipment) -> MaintenanceAdvice {
    if equipment.health < 70.0 {
        MaintenanceAdvice::Immediate
    } else if equipment.health < 85.0 {
        MaintenanceAdvice::WithinWeek
    } else {
        MaintenanceAdvice::Optimal
    }
}
