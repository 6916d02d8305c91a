//! Client-side filter pipeline
//!
//! Every dashboard module derives its visible rows the same way: a
//! search string matched case-insensitively against a record's
//! designated text fields, plus zero or more categorical selections
//! where `None` is the wildcard. Constraints compose conjunctively and
//! the result preserves record-store order (stable filter, not a sort).
//!
//! The pipeline recomputes from scratch on every query change. At the
//! volumes a module holds (tens to low hundreds of records) that is
//! cheaper than maintaining an index.

use crate::entities::*;
use crate::enums::*;
use serde::{Deserialize, Serialize};

/// Case-insensitive substring match.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_choice<T: PartialEq>(selected: &Option<T>, value: &T) -> bool {
    match selected {
        Some(choice) => choice == value,
        None => true,
    }
}

/// Designates which text fields of a record participate in search.
pub trait SearchText {
    fn search_fields(&self) -> Vec<&str>;

    /// An empty query matches everything; otherwise at least one
    /// designated field must contain the query, case-insensitively.
    fn matches_search(&self, query: &str) -> bool {
        query.is_empty() || self.search_fields().iter().any(|f| contains_ci(f, query))
    }
}

/// A module's query state applied to one record at a time.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Apply a filter to a record store, preserving store order.
pub fn filter_records<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T>,
{
    records.iter().filter(|r| filter.matches(r)).collect()
}

// ============================================================================
// SEARCH FIELD DESIGNATIONS
// ============================================================================

impl SearchText for Asset {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location]
    }
}

impl SearchText for MaintenanceRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.location.as_str(),
            self.requested_by.as_str(),
        ];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
}

impl SearchText for MaintenanceSchedule {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.task.as_str()];
        if let Some(assignee) = &self.assigned_to {
            fields.push(assignee);
        }
        fields
    }
}

impl SearchText for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.cost_center]
    }
}

impl SearchText for CapitalProject {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.manager, &self.location]
    }
}

impl SearchText for EnergyReading {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.meter]
    }
}

impl SearchText for Certification {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.building]
    }
}

impl SearchText for FeedbackEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.subject.as_str(), self.location.as_str()];
        if let Some(comment) = &self.comment {
            fields.push(comment);
        }
        fields
    }
}

// ============================================================================
// PER-MODULE QUERY STATE
// ============================================================================

/// Query state for the asset registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetFilter {
    pub search: String,
    pub category: Option<AssetCategory>,
    pub status: Option<AssetStatus>,
}

impl AssetFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<Asset> for AssetFilter {
    fn matches(&self, record: &Asset) -> bool {
        record.matches_search(&self.search)
            && matches_choice(&self.category, &record.category)
            && matches_choice(&self.status, &record.status)
    }
}

/// Query state for the maintenance request list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub search: String,
    pub category: Option<RequestCategory>,
    pub priority: Option<Priority>,
    pub status: Option<RequestStatus>,
}

impl RequestFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<MaintenanceRequest> for RequestFilter {
    fn matches(&self, record: &MaintenanceRequest) -> bool {
        record.matches_search(&self.search)
            && matches_choice(&self.category, &record.category)
            && matches_choice(&self.priority, &record.priority)
            && matches_choice(&self.status, &record.status)
    }
}

/// Query state for the preventive maintenance schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFilter {
    pub search: String,
    pub frequency: Option<Frequency>,
    pub status: Option<ScheduleStatus>,
}

impl ScheduleFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<MaintenanceSchedule> for ScheduleFilter {
    fn matches(&self, record: &MaintenanceSchedule) -> bool {
        record.matches_search(&self.search)
            && matches_choice(&self.frequency, &record.frequency)
            && matches_choice(&self.status, &record.status)
    }
}

/// Query state for the financial ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub search: String,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<Transaction> for TransactionFilter {
    fn matches(&self, record: &Transaction) -> bool {
        record.matches_search(&self.search) && matches_choice(&self.kind, &record.kind)
    }
}

/// Query state for the capital project portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub search: String,
    pub stage: Option<ProjectStage>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<CapitalProject> for ProjectFilter {
    fn matches(&self, record: &CapitalProject) -> bool {
        record.matches_search(&self.search) && matches_choice(&self.stage, &record.stage)
    }
}

/// Query state for energy readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingFilter {
    pub search: String,
    pub resource: Option<ResourceKind>,
}

impl ReadingFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<EnergyReading> for ReadingFilter {
    fn matches(&self, record: &EnergyReading) -> bool {
        record.matches_search(&self.search) && matches_choice(&self.resource, &record.resource)
    }
}

/// Query state for green building certifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationFilter {
    pub search: String,
    pub scheme: Option<CertScheme>,
    pub level: Option<CertLevel>,
    pub status: Option<CertStatus>,
}

impl CertificationFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<Certification> for CertificationFilter {
    fn matches(&self, record: &Certification) -> bool {
        record.matches_search(&self.search)
            && matches_choice(&self.scheme, &record.scheme)
            && matches_choice(&self.level, &record.level)
            && matches_choice(&self.status, &record.status)
    }
}

/// Query state for workplace feedback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFilter {
    pub search: String,
    pub category: Option<FeedbackCategory>,
    pub status: Option<FeedbackStatus>,
}

impl FeedbackFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordFilter<FeedbackEntry> for FeedbackFilter {
    fn matches(&self, record: &FeedbackEntry) -> bool {
        record.matches_search(&self.search)
            && matches_choice(&self.category, &record.category)
            && matches_choice(&self.status, &record.status)
    }
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::identity::AssetId;
    use chrono::{NaiveDate, Utc};
    use proptest::prelude::*;

    fn arb_category() -> impl Strategy<Value = AssetCategory> {
        prop_oneof![
            Just(AssetCategory::Hvac),
            Just(AssetCategory::Electrical),
            Just(AssetCategory::Plumbing),
            Just(AssetCategory::Elevator),
        ]
    }

    fn arb_status() -> impl Strategy<Value = AssetStatus> {
        prop_oneof![
            Just(AssetStatus::Operational),
            Just(AssetStatus::Faulty),
            Just(AssetStatus::UnderMaintenance),
            Just(AssetStatus::Decommissioned),
        ]
    }

    fn arb_asset() -> impl Strategy<Value = Asset> {
        ("[a-zA-Z0-9 ]{1,24}", arb_category(), arb_status()).prop_map(
            |(name, category, status)| Asset {
                asset_id: AssetId::generate(),
                name,
                category,
                status,
                location: "Gedung A".to_string(),
                installed_on: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
                lifespan_years: 10.0,
                purchase_cost: 10_000_000,
                warranty_until: None,
                document_url: None,
                created_at: Utc::now(),
            },
        )
    }

    fn arb_filter() -> impl Strategy<Value = AssetFilter> {
        (
            prop_oneof![Just(String::new()), "[a-z]{1,4}"],
            proptest::option::of(arb_category()),
            proptest::option::of(arb_status()),
        )
            .prop_map(|(search, category, status)| AssetFilter {
                search,
                category,
                status,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The visible set is always an order-preserving subsequence of
        /// the record store.
        #[test]
        fn prop_filter_preserves_store_order(
            store in prop::collection::vec(arb_asset(), 0..20),
            filter in arb_filter(),
        ) {
            let visible = filter_records(&store, &filter);
            let mut cursor = 0usize;
            for record in visible {
                let pos = store[cursor..]
                    .iter()
                    .position(|a| a.asset_id == record.asset_id);
                prop_assert!(pos.is_some(), "visible record out of store order");
                cursor += pos.unwrap() + 1;
            }
        }

        /// Every visible record satisfies the filter; every hidden one
        /// fails it.
        #[test]
        fn prop_filter_partitions_exactly(
            store in prop::collection::vec(arb_asset(), 0..20),
            filter in arb_filter(),
        ) {
            let visible = filter_records(&store, &filter);
            for record in &store {
                let shown = visible.iter().any(|v| v.asset_id == record.asset_id);
                prop_assert_eq!(shown, filter.matches(record));
            }
        }

        /// The default query state is the identity.
        #[test]
        fn prop_default_filter_is_identity(
            store in prop::collection::vec(arb_asset(), 0..20),
        ) {
            let visible = filter_records(&store, &AssetFilter::new());
            prop_assert_eq!(visible.len(), store.len());
        }
    }
}
