//! GRAHA Provider - Data Provider Seam
//!
//! The dashboard fetches each module's records once at mount through
//! this trait. Implementations may honor the filter criteria
//! server-side or ignore them; the dashboard re-filters client-side
//! either way, so honoring criteria is purely an optimization.

use async_trait::async_trait;
use graha_core::{
    Asset, AssetFilter, CapitalProject, Certification, CertificationFilter, EnergyReading,
    FeedbackEntry, FeedbackFilter, MaintenanceRequest, MaintenanceSchedule, ProjectFilter,
    ProviderError, ReadingFilter, RequestFilter, ScheduleFilter, Transaction, TransactionFilter,
};

pub mod mock;

pub use mock::MockProvider;

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Source of a module's records.
///
/// One fetch per domain, returning the full ordered record sequence.
/// Implementations must be thread-safe (Send + Sync). There is no
/// retry or cancellation contract here: a failed fetch is terminal for
/// that load and the dashboard keeps whatever it already had.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_assets(&self, criteria: &AssetFilter) -> ProviderResult<Vec<Asset>>;

    async fn fetch_requests(
        &self,
        criteria: &RequestFilter,
    ) -> ProviderResult<Vec<MaintenanceRequest>>;

    async fn fetch_schedules(
        &self,
        criteria: &ScheduleFilter,
    ) -> ProviderResult<Vec<MaintenanceSchedule>>;

    async fn fetch_transactions(
        &self,
        criteria: &TransactionFilter,
    ) -> ProviderResult<Vec<Transaction>>;

    async fn fetch_projects(&self, criteria: &ProjectFilter)
        -> ProviderResult<Vec<CapitalProject>>;

    async fn fetch_readings(&self, criteria: &ReadingFilter)
        -> ProviderResult<Vec<EnergyReading>>;

    async fn fetch_certifications(
        &self,
        criteria: &CertificationFilter,
    ) -> ProviderResult<Vec<Certification>>;

    async fn fetch_feedback(&self, criteria: &FeedbackFilter)
        -> ProviderResult<Vec<FeedbackEntry>>;
}
