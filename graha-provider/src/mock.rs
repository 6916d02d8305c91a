//! Fixture-backed provider for demos and tests.

use crate::{DataProvider, ProviderResult};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use graha_core::enums::*;
use graha_core::filter::*;
use graha_core::identity::*;
use graha_core::{
    Asset, CapitalProject, Certification, EnergyReading, FeedbackEntry, MaintenanceRequest,
    MaintenanceSchedule, Timestamp, Transaction,
};

/// In-memory provider returning cloned fixture data. Never fails.
///
/// Criteria are honored before returning, which mimics a backend that
/// pre-filters; the dashboard still re-filters client-side.
#[derive(Debug, Clone)]
pub struct MockProvider {
    assets: Vec<Asset>,
    requests: Vec<MaintenanceRequest>,
    schedules: Vec<MaintenanceSchedule>,
    transactions: Vec<Transaction>,
    projects: Vec<CapitalProject>,
    readings: Vec<EnergyReading>,
    certifications: Vec<Certification>,
    feedback: Vec<FeedbackEntry>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn stamp(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            assets: Self::asset_fixtures(),
            requests: Self::request_fixtures(),
            schedules: Self::schedule_fixtures(),
            transactions: Self::transaction_fixtures(),
            projects: Self::project_fixtures(),
            readings: Self::reading_fixtures(),
            certifications: Self::certification_fixtures(),
            feedback: Self::feedback_fixtures(),
        }
    }

    fn asset_fixtures() -> Vec<Asset> {
        vec![
            Asset {
                asset_id: AssetId::generate(),
                name: "Chiller York YK-01".to_string(),
                category: AssetCategory::Hvac,
                status: AssetStatus::Operational,
                location: "Menara Graha, Lt. B2".to_string(),
                installed_on: date(2018, 4, 2),
                lifespan_years: 15.0,
                purchase_cost: 2_450_000_000,
                warranty_until: Some(date(2023, 4, 2)),
                document_url: Some("https://docs.graha.id/assets/yk-01.pdf".to_string()),
                created_at: stamp(2018, 4, 2),
            },
            Asset {
                asset_id: AssetId::generate(),
                name: "Panel Distribusi Utama".to_string(),
                category: AssetCategory::Electrical,
                status: AssetStatus::Faulty,
                location: "Menara Graha, Lt. B1".to_string(),
                installed_on: date(2016, 9, 20),
                lifespan_years: 20.0,
                purchase_cost: 890_000_000,
                warranty_until: None,
                document_url: None,
                created_at: stamp(2016, 9, 20),
            },
            Asset {
                asset_id: AssetId::generate(),
                name: "Lift Penumpang 3".to_string(),
                category: AssetCategory::Elevator,
                status: AssetStatus::UnderMaintenance,
                location: "Menara Graha, Core A".to_string(),
                installed_on: date(2015, 1, 12),
                lifespan_years: 25.0,
                purchase_cost: 3_100_000_000,
                warranty_until: Some(date(2020, 1, 12)),
                document_url: None,
                created_at: stamp(2015, 1, 12),
            },
            Asset {
                asset_id: AssetId::generate(),
                name: "Pompa Hydrant Timur".to_string(),
                category: AssetCategory::FireSafety,
                status: AssetStatus::Operational,
                location: "Wisma Kemang, Lt. 1".to_string(),
                installed_on: date(2021, 7, 5),
                lifespan_years: 10.0,
                purchase_cost: 420_000_000,
                warranty_until: Some(date(2026, 7, 5)),
                document_url: None,
                created_at: stamp(2021, 7, 5),
            },
        ]
    }

    fn request_fixtures() -> Vec<MaintenanceRequest> {
        vec![
            MaintenanceRequest {
                request_id: RequestId::generate(),
                title: "AC bocor di ruang rapat Cendana".to_string(),
                description: Some("Air menetes dari unit kaset di atas meja rapat".to_string()),
                category: RequestCategory::Repair,
                priority: Priority::High,
                status: RequestStatus::InProgress,
                location: "Menara Graha, Lt. 12".to_string(),
                requested_by: "Rina Wulandari".to_string(),
                created_at: stamp(2025, 7, 21),
                updated_at: stamp(2025, 7, 22),
            },
            MaintenanceRequest {
                request_id: RequestId::generate(),
                title: "Lampu koridor sayap timur mati".to_string(),
                description: None,
                category: RequestCategory::Repair,
                priority: Priority::Medium,
                status: RequestStatus::Submitted,
                location: "Wisma Kemang, Lt. 3".to_string(),
                requested_by: "Budi Santoso".to_string(),
                created_at: stamp(2025, 7, 25),
                updated_at: stamp(2025, 7, 25),
            },
            MaintenanceRequest {
                request_id: RequestId::generate(),
                title: "Inspeksi APAR triwulan".to_string(),
                description: Some("Jadwal inspeksi rutin tabung pemadam".to_string()),
                category: RequestCategory::Inspection,
                priority: Priority::Low,
                status: RequestStatus::Completed,
                location: "Menara Graha".to_string(),
                requested_by: "Tim K3".to_string(),
                created_at: stamp(2025, 6, 30),
                updated_at: stamp(2025, 7, 2),
            },
        ]
    }

    fn schedule_fixtures() -> Vec<MaintenanceSchedule> {
        let assets = Self::asset_fixtures();
        vec![
            MaintenanceSchedule {
                schedule_id: ScheduleId::generate(),
                asset_id: assets[0].asset_id,
                task: "Pembersihan kondensor chiller".to_string(),
                frequency: Frequency::Monthly,
                status: ScheduleStatus::Due,
                next_due: date(2025, 8, 1),
                assigned_to: Some("PT Mitra Teknik".to_string()),
            },
            MaintenanceSchedule {
                schedule_id: ScheduleId::generate(),
                asset_id: assets[2].asset_id,
                task: "Uji beban lift tahunan".to_string(),
                frequency: Frequency::Annual,
                status: ScheduleStatus::Planned,
                next_due: date(2026, 1, 15),
                assigned_to: None,
            },
            MaintenanceSchedule {
                schedule_id: ScheduleId::generate(),
                asset_id: assets[3].asset_id,
                task: "Tes pompa hydrant mingguan".to_string(),
                frequency: Frequency::Weekly,
                status: ScheduleStatus::Overdue,
                next_due: date(2025, 7, 14),
                assigned_to: Some("Teknisi Gedung".to_string()),
            },
        ]
    }

    fn transaction_fixtures() -> Vec<Transaction> {
        vec![
            Transaction {
                transaction_id: TransactionId::generate(),
                description: "Tagihan PLN Juli 2025".to_string(),
                kind: TransactionKind::UtilityPayment,
                amount: 812_350_000,
                cost_center: "FAC-OPS".to_string(),
                transacted_on: date(2025, 7, 28),
            },
            Transaction {
                transaction_id: TransactionId::generate(),
                description: "Sewa lantai 9 PT Nusantara Digital".to_string(),
                kind: TransactionKind::LeaseIncome,
                amount: 1_650_000_000,
                cost_center: "LEASE".to_string(),
                transacted_on: date(2025, 7, 1),
            },
            Transaction {
                transaction_id: TransactionId::generate(),
                description: "Penggantian panel distribusi".to_string(),
                kind: TransactionKind::CapitalExpense,
                amount: 925_000_000,
                cost_center: "CAP-2025".to_string(),
                transacted_on: date(2025, 6, 18),
            },
        ]
    }

    fn project_fixtures() -> Vec<CapitalProject> {
        vec![
            CapitalProject {
                project_id: ProjectId::generate(),
                name: "Jakarta HQ Renovation".to_string(),
                stage: ProjectStage::Construction,
                budget: 48_000_000_000,
                spent: 31_200_000_000,
                start_on: date(2024, 11, 4),
                target_on: Some(date(2026, 2, 27)),
                manager: "Dewi Lestari".to_string(),
                location: "Menara Graha, Lt. 10-14".to_string(),
            },
            CapitalProject {
                project_id: ProjectId::generate(),
                name: "Rooftop Solar Phase 1".to_string(),
                stage: ProjectStage::Procurement,
                budget: 9_500_000_000,
                spent: 1_100_000_000,
                start_on: date(2025, 3, 10),
                target_on: Some(date(2025, 12, 19)),
                manager: "Agus Pratama".to_string(),
                location: "Wisma Kemang, Atap".to_string(),
            },
            CapitalProject {
                project_id: ProjectId::generate(),
                name: "Lobby Wayfinding Refresh".to_string(),
                stage: ProjectStage::Completed,
                budget: 1_800_000_000,
                spent: 1_730_000_000,
                start_on: date(2024, 5, 2),
                target_on: Some(date(2024, 10, 31)),
                manager: "Dewi Lestari".to_string(),
                location: "Menara Graha, Lobi Utama".to_string(),
            },
        ]
    }

    fn reading_fixtures() -> Vec<EnergyReading> {
        vec![
            EnergyReading {
                reading_id: ReadingId::generate(),
                meter: "PLN-MG-01".to_string(),
                resource: ResourceKind::Electricity,
                period: date(2025, 7, 1),
                consumption: 412_800.0,
                unit: "kWh".to_string(),
                cost: Some(812_350_000),
            },
            EnergyReading {
                reading_id: ReadingId::generate(),
                meter: "PDAM-MG-01".to_string(),
                resource: ResourceKind::Water,
                period: date(2025, 7, 1),
                consumption: 6_420.0,
                unit: "m3".to_string(),
                cost: None,
            },
            EnergyReading {
                reading_id: ReadingId::generate(),
                meter: "PGN-WK-02".to_string(),
                resource: ResourceKind::Gas,
                period: date(2025, 6, 1),
                consumption: 980.5,
                unit: "m3".to_string(),
                cost: Some(14_200_000),
            },
        ]
    }

    fn certification_fixtures() -> Vec<Certification> {
        vec![
            Certification {
                certification_id: CertificationId::generate(),
                building: "Menara Graha".to_string(),
                scheme: CertScheme::Greenship,
                level: CertLevel::Gold,
                status: CertStatus::Active,
                valid_until: Some(date(2027, 3, 31)),
                report_url: Some("https://docs.graha.id/cert/greenship-2024.pdf".to_string()),
            },
            Certification {
                certification_id: CertificationId::generate(),
                building: "Wisma Kemang".to_string(),
                scheme: CertScheme::Edge,
                level: CertLevel::Certified,
                status: CertStatus::InAssessment,
                valid_until: None,
                report_url: None,
            },
        ]
    }

    fn feedback_fixtures() -> Vec<FeedbackEntry> {
        vec![
            FeedbackEntry {
                feedback_id: FeedbackId::generate(),
                subject: "Musala lantai 8 terlalu panas".to_string(),
                category: FeedbackCategory::Comfort,
                status: FeedbackStatus::Acknowledged,
                rating: 2,
                comment: Some("AC tidak terasa sejak minggu lalu".to_string()),
                location: "Menara Graha, Lt. 8".to_string(),
                submitted_at: stamp(2025, 7, 24),
            },
            FeedbackEntry {
                feedback_id: FeedbackId::generate(),
                subject: "Pantry bersih dan rapi".to_string(),
                category: FeedbackCategory::Cleanliness,
                status: FeedbackStatus::Resolved,
                rating: 5,
                comment: None,
                location: "Wisma Kemang, Lt. 2".to_string(),
                submitted_at: stamp(2025, 7, 20),
            },
        ]
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn apply<T: Clone, F: RecordFilter<T>>(records: &[T], criteria: &F) -> Vec<T> {
    filter_records(records, criteria).into_iter().cloned().collect()
}

#[async_trait]
impl DataProvider for MockProvider {
    async fn fetch_assets(&self, criteria: &AssetFilter) -> ProviderResult<Vec<Asset>> {
        Ok(apply(&self.assets, criteria))
    }

    async fn fetch_requests(
        &self,
        criteria: &RequestFilter,
    ) -> ProviderResult<Vec<MaintenanceRequest>> {
        Ok(apply(&self.requests, criteria))
    }

    async fn fetch_schedules(
        &self,
        criteria: &ScheduleFilter,
    ) -> ProviderResult<Vec<MaintenanceSchedule>> {
        Ok(apply(&self.schedules, criteria))
    }

    async fn fetch_transactions(
        &self,
        criteria: &TransactionFilter,
    ) -> ProviderResult<Vec<Transaction>> {
        Ok(apply(&self.transactions, criteria))
    }

    async fn fetch_projects(
        &self,
        criteria: &ProjectFilter,
    ) -> ProviderResult<Vec<CapitalProject>> {
        Ok(apply(&self.projects, criteria))
    }

    async fn fetch_readings(
        &self,
        criteria: &ReadingFilter,
    ) -> ProviderResult<Vec<EnergyReading>> {
        Ok(apply(&self.readings, criteria))
    }

    async fn fetch_certifications(
        &self,
        criteria: &CertificationFilter,
    ) -> ProviderResult<Vec<Certification>> {
        Ok(apply(&self.certifications, criteria))
    }

    async fn fetch_feedback(
        &self,
        criteria: &FeedbackFilter,
    ) -> ProviderResult<Vec<FeedbackEntry>> {
        Ok(apply(&self.feedback, criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_core::{AssetStatus, Priority};

    #[tokio::test]
    async fn test_fetch_assets_returns_fixtures() {
        let provider = MockProvider::new();
        let assets = provider.fetch_assets(&AssetFilter::new()).await.unwrap();
        assert_eq!(assets.len(), 4);
        assert!(assets.iter().any(|a| a.name.contains("Chiller")));
    }

    #[tokio::test]
    async fn test_criteria_are_honored_server_side() {
        let provider = MockProvider::new();
        let criteria = AssetFilter {
            status: Some(AssetStatus::Faulty),
            ..AssetFilter::new()
        };
        let assets = provider.fetch_assets(&criteria).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "Panel Distribusi Utama");
    }

    #[tokio::test]
    async fn test_fetches_are_independent_clones() {
        let provider = MockProvider::new();
        let mut first = provider.fetch_requests(&RequestFilter::new()).await.unwrap();
        first[0].priority = Priority::Critical;
        let second = provider.fetch_requests(&RequestFilter::new()).await.unwrap();
        assert_ne!(second[0].priority, Priority::Critical);
    }

    #[tokio::test]
    async fn test_every_domain_has_fixtures() {
        let provider = MockProvider::new();
        assert!(!provider.fetch_assets(&AssetFilter::new()).await.unwrap().is_empty());
        assert!(!provider.fetch_requests(&RequestFilter::new()).await.unwrap().is_empty());
        assert!(!provider.fetch_schedules(&ScheduleFilter::new()).await.unwrap().is_empty());
        assert!(!provider
            .fetch_transactions(&TransactionFilter::new())
            .await
            .unwrap()
            .is_empty());
        assert!(!provider.fetch_projects(&ProjectFilter::new()).await.unwrap().is_empty());
        assert!(!provider.fetch_readings(&ReadingFilter::new()).await.unwrap().is_empty());
        assert!(!provider
            .fetch_certifications(&CertificationFilter::new())
            .await
            .unwrap()
            .is_empty());
        assert!(!provider.fetch_feedback(&FeedbackFilter::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_schedules_reference_known_asset_categories() {
        let provider = MockProvider::new();
        let schedules = provider.fetch_schedules(&ScheduleFilter::new()).await.unwrap();
        for schedule in &schedules {
            assert!(!schedule.task.is_empty());
            assert!(schedule.frequency.interval_days() >= 1);
        }
    }
}
