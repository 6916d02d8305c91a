//! GRAHA Test Kit
//!
//! Shared test infrastructure for the workspace: record fixtures,
//! proptest generators, and a provider that always fails, for
//! exercising the load failure path.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use graha_core::enums::*;
use graha_core::identity::*;
use graha_core::{
    Asset, AssetFilter, CapitalProject, Certification, CertificationFilter, EnergyReading,
    FeedbackEntry, FeedbackFilter, MaintenanceRequest, MaintenanceSchedule, ProjectFilter,
    ProviderError, ReadingFilter, RequestFilter, ScheduleFilter, Transaction, TransactionFilter,
};
use graha_provider::{DataProvider, ProviderResult};
use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// Asset with sensible defaults; override fields as needed per test.
pub fn sample_asset(name: &str, category: AssetCategory, status: AssetStatus) -> Asset {
    Asset {
        asset_id: AssetId::generate(),
        name: name.to_string(),
        category,
        status,
        location: "Menara Graha, Lt. 5".to_string(),
        installed_on: NaiveDate::from_ymd_opt(2020, 1, 15).expect("fixture date"),
        lifespan_years: 10.0,
        purchase_cost: 50_000_000,
        warranty_until: None,
        document_url: None,
        created_at: Utc::now(),
    }
}

pub fn sample_request(title: &str, priority: Priority, status: RequestStatus) -> MaintenanceRequest {
    MaintenanceRequest {
        request_id: RequestId::generate(),
        title: title.to_string(),
        description: None,
        category: RequestCategory::Repair,
        priority,
        status,
        location: "Menara Graha, Lt. 7".to_string(),
        requested_by: "Rina Wulandari".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_schedule(task: &str, status: ScheduleStatus) -> MaintenanceSchedule {
    MaintenanceSchedule {
        schedule_id: ScheduleId::generate(),
        asset_id: AssetId::generate(),
        task: task.to_string(),
        frequency: Frequency::Monthly,
        status,
        next_due: NaiveDate::from_ymd_opt(2025, 8, 1).expect("fixture date"),
        assigned_to: None,
    }
}

pub fn sample_transaction(description: &str, kind: TransactionKind, amount: i64) -> Transaction {
    Transaction {
        transaction_id: TransactionId::generate(),
        description: description.to_string(),
        kind,
        amount,
        cost_center: "FAC-OPS".to_string(),
        transacted_on: NaiveDate::from_ymd_opt(2025, 7, 15).expect("fixture date"),
    }
}

pub fn sample_project(name: &str, stage: ProjectStage) -> CapitalProject {
    CapitalProject {
        project_id: ProjectId::generate(),
        name: name.to_string(),
        stage,
        budget: 5_000_000_000,
        spent: 1_000_000_000,
        start_on: NaiveDate::from_ymd_opt(2025, 1, 6).expect("fixture date"),
        target_on: Some(NaiveDate::from_ymd_opt(2025, 12, 19).expect("fixture date")),
        manager: "Dewi Lestari".to_string(),
        location: "Menara Graha".to_string(),
    }
}

pub fn sample_reading(meter: &str, resource: ResourceKind) -> EnergyReading {
    EnergyReading {
        reading_id: ReadingId::generate(),
        meter: meter.to_string(),
        resource,
        period: NaiveDate::from_ymd_opt(2025, 7, 1).expect("fixture date"),
        consumption: 1_000.0,
        unit: "kWh".to_string(),
        cost: None,
    }
}

pub fn sample_certification(building: &str, status: CertStatus) -> Certification {
    Certification {
        certification_id: CertificationId::generate(),
        building: building.to_string(),
        scheme: CertScheme::Greenship,
        level: CertLevel::Gold,
        status,
        valid_until: Some(NaiveDate::from_ymd_opt(2027, 3, 31).expect("fixture date")),
        report_url: None,
    }
}

pub fn sample_feedback(subject: &str, status: FeedbackStatus, rating: u8) -> FeedbackEntry {
    FeedbackEntry {
        feedback_id: FeedbackId::generate(),
        subject: subject.to_string(),
        category: FeedbackCategory::Comfort,
        status,
        rating,
        comment: None,
        location: "Menara Graha, Lt. 8".to_string(),
        submitted_at: Utc::now(),
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_asset_category() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::Hvac),
        Just(AssetCategory::Electrical),
        Just(AssetCategory::Plumbing),
        Just(AssetCategory::Elevator),
        Just(AssetCategory::FireSafety),
        Just(AssetCategory::Furniture),
    ]
}

pub fn arb_asset_status() -> impl Strategy<Value = AssetStatus> {
    prop_oneof![
        Just(AssetStatus::Operational),
        Just(AssetStatus::UnderMaintenance),
        Just(AssetStatus::Faulty),
        Just(AssetStatus::Decommissioned),
    ]
}

pub fn arb_asset() -> impl Strategy<Value = Asset> {
    (
        "[a-zA-Z0-9 ]{1,24}",
        arb_asset_category(),
        arb_asset_status(),
        1i64..100_000_000_000,
    )
        .prop_map(|(name, category, status, purchase_cost)| {
            let mut asset = sample_asset(&name, category, status);
            asset.purchase_cost = purchase_cost;
            asset
        })
}

pub fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

pub fn arb_request_status() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Draft),
        Just(RequestStatus::Submitted),
        Just(RequestStatus::Approved),
        Just(RequestStatus::InProgress),
        Just(RequestStatus::Completed),
        Just(RequestStatus::Rejected),
    ]
}

pub fn arb_request() -> impl Strategy<Value = MaintenanceRequest> {
    ("[a-zA-Z0-9 ]{1,32}", arb_priority(), arb_request_status()).prop_map(
        |(title, priority, status)| sample_request(&title, priority, status),
    )
}

// ============================================================================
// FAILING PROVIDER
// ============================================================================

/// Provider whose every fetch fails with the same reason. For testing
/// how callers behave when the backend is down.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    reason: String,
}

impl FailingProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail(&self, domain: &'static str) -> ProviderError {
        ProviderError::FetchFailed {
            domain,
            reason: self.reason.clone(),
        }
    }
}

#[async_trait]
impl DataProvider for FailingProvider {
    async fn fetch_assets(&self, _criteria: &AssetFilter) -> ProviderResult<Vec<Asset>> {
        Err(self.fail("assets"))
    }

    async fn fetch_requests(
        &self,
        _criteria: &RequestFilter,
    ) -> ProviderResult<Vec<MaintenanceRequest>> {
        Err(self.fail("requests"))
    }

    async fn fetch_schedules(
        &self,
        _criteria: &ScheduleFilter,
    ) -> ProviderResult<Vec<MaintenanceSchedule>> {
        Err(self.fail("schedules"))
    }

    async fn fetch_transactions(
        &self,
        _criteria: &TransactionFilter,
    ) -> ProviderResult<Vec<Transaction>> {
        Err(self.fail("transactions"))
    }

    async fn fetch_projects(
        &self,
        _criteria: &ProjectFilter,
    ) -> ProviderResult<Vec<CapitalProject>> {
        Err(self.fail("projects"))
    }

    async fn fetch_readings(
        &self,
        _criteria: &ReadingFilter,
    ) -> ProviderResult<Vec<EnergyReading>> {
        Err(self.fail("readings"))
    }

    async fn fetch_certifications(
        &self,
        _criteria: &CertificationFilter,
    ) -> ProviderResult<Vec<Certification>> {
        Err(self.fail("certifications"))
    }

    async fn fetch_feedback(
        &self,
        _criteria: &FeedbackFilter,
    ) -> ProviderResult<Vec<FeedbackEntry>> {
        Err(self.fail("feedback"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_asset_overridable() {
        let mut asset = sample_asset("Genset", AssetCategory::Electrical, AssetStatus::Faulty);
        asset.purchase_cost = 123;
        assert_eq!(asset.purchase_cost, 123);
        assert_eq!(asset.status, AssetStatus::Faulty);
    }

    #[tokio::test]
    async fn test_failing_provider_reports_domain_and_reason() {
        let provider = FailingProvider::new("gateway down");
        let err = provider.fetch_assets(&AssetFilter::new()).await.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("assets"), "{text}");
        assert!(text.contains("gateway down"), "{text}");
    }
}
