//! Record loading through the data provider.
//!
//! Each module loads once when asked (at startup or on an explicit
//! refresh). A failed load keeps whatever the module already shows,
//! raises an error notification with a retry action, and clears the
//! loading flag so the module is not stuck in a spinner.

use crate::nav::Module;
use crate::notifications::{Notification, NotificationAction, NotificationLevel};
use crate::state::App;
use std::sync::Arc;

impl App {
    pub async fn load_assets(&mut self) {
        self.asset_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.asset_view.filter.clone();
        let result = provider.fetch_assets(&criteria).await;
        self.asset_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded assets");
                self.asset_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Assets, &err.to_string()),
        }
    }

    pub async fn load_requests(&mut self) {
        self.request_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.request_view.filter.clone();
        let result = provider.fetch_requests(&criteria).await;
        self.request_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded maintenance requests");
                self.request_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Requests, &err.to_string()),
        }
    }

    pub async fn load_schedules(&mut self) {
        self.schedule_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.schedule_view.filter.clone();
        let result = provider.fetch_schedules(&criteria).await;
        self.schedule_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded maintenance schedules");
                self.schedule_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Schedules, &err.to_string()),
        }
    }

    pub async fn load_transactions(&mut self) {
        self.transaction_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.transaction_view.filter.clone();
        let result = provider.fetch_transactions(&criteria).await;
        self.transaction_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded transactions");
                self.transaction_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Finance, &err.to_string()),
        }
    }

    pub async fn load_projects(&mut self) {
        self.project_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.project_view.filter.clone();
        let result = provider.fetch_projects(&criteria).await;
        self.project_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded capital projects");
                self.project_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Projects, &err.to_string()),
        }
    }

    pub async fn load_readings(&mut self) {
        self.reading_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.reading_view.filter.clone();
        let result = provider.fetch_readings(&criteria).await;
        self.reading_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded energy readings");
                self.reading_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Energy, &err.to_string()),
        }
    }

    pub async fn load_certifications(&mut self) {
        self.certification_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.certification_view.filter.clone();
        let result = provider.fetch_certifications(&criteria).await;
        self.certification_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded certifications");
                self.certification_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Certifications, &err.to_string()),
        }
    }

    pub async fn load_feedback(&mut self) {
        self.feedback_view.loading = true;
        let provider = Arc::clone(&self.provider);
        let criteria = self.feedback_view.filter.clone();
        let result = provider.fetch_feedback(&criteria).await;
        self.feedback_view.loading = false;
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded feedback entries");
                self.feedback_view.set_records(records);
            }
            Err(err) => self.record_load_failure(Module::Experience, &err.to_string()),
        }
    }

    /// Load (or reload) one module's records.
    pub async fn load_module(&mut self, module: Module) {
        match module {
            Module::Assets => self.load_assets().await,
            Module::Requests => self.load_requests().await,
            Module::Schedules => self.load_schedules().await,
            Module::Finance => self.load_transactions().await,
            Module::Projects => self.load_projects().await,
            Module::Energy => self.load_readings().await,
            Module::Certifications => self.load_certifications().await,
            Module::Experience => self.load_feedback().await,
        }
    }

    /// Load every module. Failures are per-module; one module failing
    /// never aborts the others.
    pub async fn load_all(&mut self) {
        for module in Module::all() {
            self.load_module(*module).await;
        }
    }

    fn record_load_failure(&mut self, module: Module, reason: &str) {
        tracing::warn!(module = %module, reason, "record load failed");
        self.notifications.push(
            Notification::new(
                NotificationLevel::Error,
                format!("Gagal memuat data {}: {reason}", module.title()),
            )
            .with_action(NotificationAction::Retry),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_core::{AssetStatus, DashboardConfig, Locale};
    use graha_provider::MockProvider;
    use graha_testkit::FailingProvider;

    fn config() -> DashboardConfig {
        DashboardConfig {
            locale: Locale::indonesian(),
            refresh_interval_ms: 30_000,
            initial_module: "assets".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_all_populates_every_module() {
        let mut app = App::new(config(), Arc::new(MockProvider::new()));
        app.load_all().await;
        assert!(!app.asset_view.records.is_empty());
        assert!(!app.request_view.records.is_empty());
        assert!(!app.schedule_view.records.is_empty());
        assert!(!app.transaction_view.records.is_empty());
        assert!(!app.project_view.records.is_empty());
        assert!(!app.reading_view.records.is_empty());
        assert!(!app.certification_view.records.is_empty());
        assert!(!app.feedback_view.records.is_empty());
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_load_clears_loading_flag_on_success() {
        let mut app = App::new(config(), Arc::new(MockProvider::new()));
        app.load_assets().await;
        assert!(!app.asset_view.loading);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_records() {
        let mut app = App::new(config(), Arc::new(MockProvider::new()));
        app.load_assets().await;
        let before = app.asset_view.records.clone();
        assert!(!before.is_empty());

        app.provider = Arc::new(FailingProvider::new("koneksi terputus"));
        app.load_assets().await;
        assert_eq!(app.asset_view.records, before);
        assert!(!app.asset_view.loading);
    }

    #[tokio::test]
    async fn test_failed_load_raises_retry_notification() {
        let mut app = App::new(config(), Arc::new(FailingProvider::new("timeout")));
        app.load_requests().await;
        assert_eq!(app.notifications.len(), 1);
        let n = &app.notifications[0];
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.action, Some(NotificationAction::Retry));
        assert!(n.message.contains("timeout"));
    }

    #[tokio::test]
    async fn test_one_failing_module_does_not_abort_others() {
        let mut app = App::new(config(), Arc::new(FailingProvider::new("rusak")));
        app.load_all().await;
        // Every module failed independently, one notification each.
        assert_eq!(app.notifications.len(), Module::all().len());
    }

    #[tokio::test]
    async fn test_load_honors_current_filter_criteria() {
        let mut app = App::new(config(), Arc::new(MockProvider::new()));
        app.asset_view.filter.status = Some(AssetStatus::Faulty);
        app.load_assets().await;
        assert!(app
            .asset_view
            .records
            .iter()
            .all(|a| a.status == AssetStatus::Faulty));
    }
}
