//! GRAHA Dashboard - Module Orchestration
//!
//! Navigation across the eight dashboard modules, the shared view
//! state engine, record loading through the provider seam, per-module
//! failure boundaries, and the derived detail views.

pub mod boundary;
pub mod detail;
pub mod error;
pub mod loader;
pub mod nav;
pub mod notifications;
pub mod state;

pub use boundary::ModuleBoundary;
pub use detail::{asset_detail, project_detail, AssetDetail, ProjectDetail};
pub use error::DashboardError;
pub use nav::Module;
pub use notifications::{Notification, NotificationAction, NotificationLevel};
pub use state::{
    App, AssetViewState, CertificationViewState, FeedbackViewState, HasRecordId,
    ProjectViewState, ReadingViewState, RequestViewState, ScheduleViewState,
    TransactionViewState, ViewState,
};
