//! Application state and the shared view state engine.
//!
//! Every module holds the same shape of state: a record store, its
//! query state, an optional selection, and a loading flag. The shape is
//! generic rather than repeated per module; the per-module types below
//! are aliases over it.

use crate::boundary::ModuleBoundary;
use crate::nav::Module;
use crate::notifications::{Notification, NotificationLevel};
use graha_core::filter::{filter_records, RecordFilter};
use graha_core::{
    Asset, AssetFilter, CapitalProject, Certification, CertificationFilter, DashboardConfig,
    EnergyReading, FeedbackEntry, FeedbackFilter, MaintenanceRequest, MaintenanceSchedule,
    ProjectFilter, ReadingFilter, RequestFilter, ScheduleFilter, Transaction, TransactionFilter,
};
use graha_provider::DataProvider;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Access to a record's identity as a plain UUID, for selection
/// tracking that does not care which module it serves.
pub trait HasRecordId {
    fn record_id(&self) -> Uuid;
}

impl HasRecordId for Asset {
    fn record_id(&self) -> Uuid {
        self.asset_id.as_uuid()
    }
}

impl HasRecordId for MaintenanceRequest {
    fn record_id(&self) -> Uuid {
        self.request_id.as_uuid()
    }
}

impl HasRecordId for MaintenanceSchedule {
    fn record_id(&self) -> Uuid {
        self.schedule_id.as_uuid()
    }
}

impl HasRecordId for Transaction {
    fn record_id(&self) -> Uuid {
        self.transaction_id.as_uuid()
    }
}

impl HasRecordId for CapitalProject {
    fn record_id(&self) -> Uuid {
        self.project_id.as_uuid()
    }
}

impl HasRecordId for EnergyReading {
    fn record_id(&self) -> Uuid {
        self.reading_id.as_uuid()
    }
}

impl HasRecordId for Certification {
    fn record_id(&self) -> Uuid {
        self.certification_id.as_uuid()
    }
}

impl HasRecordId for FeedbackEntry {
    fn record_id(&self) -> Uuid {
        self.feedback_id.as_uuid()
    }
}

// ============================================================================
// VIEW STATE ENGINE
// ============================================================================

/// Record store plus query state for one module.
///
/// Selection and keyboard navigation operate over the *visible* rows,
/// in store order. Changing the filter never mutates the store; it only
/// changes which rows `visible()` yields.
#[derive(Debug, Clone)]
pub struct ViewState<T, F> {
    pub records: Vec<T>,
    pub filter: F,
    pub selected: Option<Uuid>,
    pub loading: bool,
}

impl<T, F> ViewState<T, F>
where
    T: HasRecordId,
    F: RecordFilter<T> + Default,
{
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            filter: F::default(),
            selected: None,
            loading: false,
        }
    }

    /// Replace the record store wholesale, dropping a selection that no
    /// longer points at a stored record.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        if let Some(id) = self.selected {
            if !self.records.iter().any(|r| r.record_id() == id) {
                self.selected = None;
            }
        }
    }

    /// The rows the current query state admits, in store order.
    pub fn visible(&self) -> Vec<&T> {
        filter_records(&self.records, &self.filter)
    }

    pub fn clear_filter(&mut self) {
        self.filter = F::default();
    }

    pub fn selected_record(&self) -> Option<&T> {
        let id = self.selected?;
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Move the selection to the next visible row, wrapping at the end.
    /// A selection hidden by the current filter restarts from the top.
    pub fn select_next(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            self.selected = None;
            return;
        }
        let index = self
            .selected
            .and_then(|id| visible.iter().position(|r| r.record_id() == id));
        let next = match index {
            Some(i) => (i + 1) % visible.len(),
            None => 0,
        };
        self.selected = Some(visible[next].record_id());
    }

    /// Move the selection to the previous visible row, wrapping at the
    /// top.
    pub fn select_previous(&mut self) {
        let visible = self.visible();
        if visible.is_empty() {
            self.selected = None;
            return;
        }
        let index = self
            .selected
            .and_then(|id| visible.iter().position(|r| r.record_id() == id))
            .unwrap_or(0);
        let prev = if index == 0 { visible.len() - 1 } else { index - 1 };
        self.selected = Some(visible[prev].record_id());
    }
}

impl<T, F> Default for ViewState<T, F>
where
    T: HasRecordId,
    F: RecordFilter<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

pub type AssetViewState = ViewState<Asset, AssetFilter>;
pub type RequestViewState = ViewState<MaintenanceRequest, RequestFilter>;
pub type ScheduleViewState = ViewState<MaintenanceSchedule, ScheduleFilter>;
pub type TransactionViewState = ViewState<Transaction, TransactionFilter>;
pub type ProjectViewState = ViewState<CapitalProject, ProjectFilter>;
pub type ReadingViewState = ViewState<EnergyReading, ReadingFilter>;
pub type CertificationViewState = ViewState<Certification, CertificationFilter>;
pub type FeedbackViewState = ViewState<FeedbackEntry, FeedbackFilter>;

// ============================================================================
// APPLICATION STATE
// ============================================================================

pub struct App {
    pub config: DashboardConfig,
    pub provider: Arc<dyn DataProvider>,
    pub active_module: Module,

    pub asset_view: AssetViewState,
    pub request_view: RequestViewState,
    pub schedule_view: ScheduleViewState,
    pub transaction_view: TransactionViewState,
    pub project_view: ProjectViewState,
    pub reading_view: ReadingViewState,
    pub certification_view: CertificationViewState,
    pub feedback_view: FeedbackViewState,

    pub notifications: Vec<Notification>,
    boundaries: Vec<ModuleBoundary>,
}

impl App {
    pub fn new(config: DashboardConfig, provider: Arc<dyn DataProvider>) -> Self {
        let active_module =
            Module::from_str(&config.initial_module).unwrap_or(Module::Assets);
        Self {
            config,
            provider,
            active_module,
            asset_view: AssetViewState::new(),
            request_view: RequestViewState::new(),
            schedule_view: ScheduleViewState::new(),
            transaction_view: TransactionViewState::new(),
            project_view: ProjectViewState::new(),
            reading_view: ReadingViewState::new(),
            certification_view: CertificationViewState::new(),
            feedback_view: FeedbackViewState::new(),
            notifications: Vec::new(),
            boundaries: vec![ModuleBoundary::new(); Module::all().len()],
        }
    }

    /// Switch the active module. State in the module left behind is
    /// kept as-is.
    pub fn switch_to(&mut self, module: Module) {
        self.active_module = module;
    }

    pub fn next_module(&mut self) {
        self.active_module = self.active_module.next();
    }

    pub fn previous_module(&mut self) {
        self.active_module = self.active_module.previous();
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn dismiss_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn boundary(&self, module: Module) -> &ModuleBoundary {
        &self.boundaries[module.index()]
    }

    pub fn boundary_mut(&mut self, module: Module) -> &mut ModuleBoundary {
        &mut self.boundaries[module.index()]
    }

    /// Whether the active module's records are currently being fetched.
    pub fn active_loading(&self) -> bool {
        match self.active_module {
            Module::Assets => self.asset_view.loading,
            Module::Requests => self.request_view.loading,
            Module::Schedules => self.schedule_view.loading,
            Module::Finance => self.transaction_view.loading,
            Module::Projects => self.project_view.loading,
            Module::Energy => self.reading_view.loading,
            Module::Certifications => self.certification_view.loading,
            Module::Experience => self.feedback_view.loading,
        }
    }

    pub fn select_next(&mut self) {
        match self.active_module {
            Module::Assets => self.asset_view.select_next(),
            Module::Requests => self.request_view.select_next(),
            Module::Schedules => self.schedule_view.select_next(),
            Module::Finance => self.transaction_view.select_next(),
            Module::Projects => self.project_view.select_next(),
            Module::Energy => self.reading_view.select_next(),
            Module::Certifications => self.certification_view.select_next(),
            Module::Experience => self.feedback_view.select_next(),
        }
    }

    pub fn select_previous(&mut self) {
        match self.active_module {
            Module::Assets => self.asset_view.select_previous(),
            Module::Requests => self.request_view.select_previous(),
            Module::Schedules => self.schedule_view.select_previous(),
            Module::Finance => self.transaction_view.select_previous(),
            Module::Projects => self.project_view.select_previous(),
            Module::Energy => self.reading_view.select_previous(),
            Module::Certifications => self.certification_view.select_previous(),
            Module::Experience => self.feedback_view.select_previous(),
        }
    }
}
