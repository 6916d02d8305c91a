//! Record types for the GRAHA dashboard modules
//!
//! Pure data structures, one per dashboard module. A module's record
//! store is populated once from the data provider and read thereafter;
//! the structs carry no behavior beyond what the filter pipeline needs.

use crate::enums::*;
use crate::identity::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Facility asset tracked by the space/asset registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: AssetId,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    /// Building / floor / room designation, e.g. "Menara Graha, Lt. 12".
    pub location: String,
    pub installed_on: NaiveDate,
    /// Expected useful life in years. Must be positive for lifecycle math.
    pub lifespan_years: f64,
    /// Purchase cost in whole Rupiah.
    pub purchase_cost: i64,
    pub warranty_until: Option<NaiveDate>,
    /// Opaque link to the asset's manual or purchase document.
    pub document_url: Option<String>,
    pub created_at: Timestamp,
}

/// Maintenance request raised against a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub request_id: RequestId,
    pub title: String,
    pub description: Option<String>,
    pub category: RequestCategory,
    pub priority: Priority,
    pub status: RequestStatus,
    pub location: String,
    pub requested_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Recurring preventive maintenance task for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub schedule_id: ScheduleId,
    pub asset_id: AssetId,
    pub task: String,
    pub frequency: Frequency,
    pub status: ScheduleStatus,
    pub next_due: NaiveDate,
    pub assigned_to: Option<String>,
}

/// Financial transaction in the facility ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub description: String,
    pub kind: TransactionKind,
    /// Amount in whole Rupiah. Income and expense are distinguished by
    /// `kind`, not by sign.
    pub amount: i64,
    pub cost_center: String,
    pub transacted_on: NaiveDate,
}

/// Capital project tracked through delivery stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalProject {
    pub project_id: ProjectId,
    pub name: String,
    pub stage: ProjectStage,
    pub budget: i64,
    pub spent: i64,
    pub start_on: NaiveDate,
    pub target_on: Option<NaiveDate>,
    pub manager: String,
    pub location: String,
}

/// Monthly consumption reading for a metered resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    pub reading_id: ReadingId,
    pub meter: String,
    pub resource: ResourceKind,
    /// First day of the billing month.
    pub period: NaiveDate,
    pub consumption: f64,
    /// Unit label for `consumption`, e.g. "kWh" or "m3".
    pub unit: String,
    /// Billed cost in whole Rupiah, when the invoice has arrived.
    pub cost: Option<i64>,
}

/// Green building certification held or pursued by a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub certification_id: CertificationId,
    pub building: String,
    pub scheme: CertScheme,
    pub level: CertLevel,
    pub status: CertStatus,
    pub valid_until: Option<NaiveDate>,
    /// Opaque link to the assessment report.
    pub report_url: Option<String>,
}

/// Workplace experience feedback from an occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub feedback_id: FeedbackId,
    pub subject: String,
    pub category: FeedbackCategory,
    pub status: FeedbackStatus,
    /// Occupant rating, 1 (worst) to 5 (best).
    pub rating: u8,
    pub comment: Option<String>,
    pub location: String,
    pub submitted_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_asset_serde_round_trip() {
        let asset = Asset {
            asset_id: AssetId::generate(),
            name: "Chiller Unit 2".to_string(),
            category: AssetCategory::Hvac,
            status: AssetStatus::Operational,
            location: "Menara Graha, Lt. B1".to_string(),
            installed_on: NaiveDate::from_ymd_opt(2019, 3, 14).unwrap(),
            lifespan_years: 15.0,
            purchase_cost: 850_000_000,
            warranty_until: Some(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()),
            document_url: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&asset).unwrap();
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asset);
    }

    #[test]
    fn test_transaction_amount_sign_is_not_semantic() {
        let tx = Transaction {
            transaction_id: TransactionId::generate(),
            description: "PLN invoice, July".to_string(),
            kind: TransactionKind::UtilityPayment,
            amount: 125_400_000,
            cost_center: "FAC-OPS".to_string(),
            transacted_on: NaiveDate::from_ymd_opt(2025, 7, 28).unwrap(),
        };
        assert!(tx.amount > 0);
        assert_eq!(tx.kind, TransactionKind::UtilityPayment);
    }
}
