//! GRAHA Core - Record Types and Filter Pipeline
//!
//! Typed domain records for an Indonesian workplace management
//! dashboard, the closed categorical enums they carry, and the
//! client-side filter pipeline every module shares. Pure data and pure
//! functions; I/O lives in `graha-provider` and view state in
//! `graha-dashboard`.

pub mod config;
pub mod entities;
pub mod enums;
pub mod error;
pub mod filter;
pub mod identity;

pub use config::{ConfigError, DashboardConfig, Locale};
pub use entities::{
    Asset, CapitalProject, Certification, EnergyReading, FeedbackEntry, MaintenanceRequest,
    MaintenanceSchedule, Transaction,
};
pub use enums::{
    AssetCategory, AssetStatus, CertLevel, CertScheme, CertStatus, FeedbackCategory,
    FeedbackStatus, Frequency, Priority, ProjectStage, RequestCategory, RequestStatus,
    ResourceKind, ScheduleStatus, TransactionKind,
};
pub use error::{GrahaError, GrahaResult, MetricsError, ParseError, ProviderError};
pub use filter::{
    contains_ci, filter_records, AssetFilter, CertificationFilter, FeedbackFilter, ProjectFilter,
    ReadingFilter, RecordFilter, RequestFilter, ScheduleFilter, SearchText, TransactionFilter,
};
pub use identity::{
    new_record_id, AssetId, CertificationId, FeedbackId, ProjectId, ReadingId, RequestId,
    ScheduleId, Timestamp, TransactionId,
};
