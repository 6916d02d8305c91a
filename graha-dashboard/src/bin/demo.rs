//! Headless demo: load every module from the mock provider and print
//! what each one shows.

use chrono::Utc;
use graha_core::{AssetStatus, DashboardConfig};
use graha_dashboard::detail::asset_detail;
use graha_dashboard::nav::Module;
use graha_dashboard::state::App;
use graha_provider::MockProvider;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = DashboardConfig::default();
    let mut app = App::new(config, Arc::new(MockProvider::new()));
    app.load_all().await;

    for module in Module::all() {
        println!("== {} ==", module.title());
        match module {
            Module::Assets => {
                for asset in app.asset_view.visible() {
                    println!("  {} [{}] @ {}", asset.name, asset.status, asset.location);
                }
            }
            Module::Requests => {
                for request in app.request_view.visible() {
                    println!("  {} ({}, {})", request.title, request.priority, request.status);
                }
            }
            Module::Schedules => {
                for schedule in app.schedule_view.visible() {
                    println!("  {} — {} ({})", schedule.task, schedule.next_due, schedule.status);
                }
            }
            Module::Finance => {
                for tx in app.transaction_view.visible() {
                    println!("  {} [{}]", tx.description, tx.kind);
                }
            }
            Module::Projects => {
                for project in app.project_view.visible() {
                    println!("  {} ({})", project.name, project.stage);
                }
            }
            Module::Energy => {
                for reading in app.reading_view.visible() {
                    println!("  {} {} {}", reading.meter, reading.consumption, reading.unit);
                }
            }
            Module::Certifications => {
                for cert in app.certification_view.visible() {
                    println!("  {} {} {}", cert.building, cert.scheme, cert.level);
                }
            }
            Module::Experience => {
                for entry in app.feedback_view.visible() {
                    println!("  {} ({}/5)", entry.subject, entry.rating);
                }
            }
        }
    }

    // Drill into the faulty assets to show the filter + detail path.
    app.asset_view.filter.status = Some(AssetStatus::Faulty);
    let today = Utc::now().date_naive();
    println!("\n== Aset bermasalah ==");
    for asset in app.asset_view.visible() {
        let detail = asset_detail(asset, &app.config.locale, today);
        println!(
            "  {} — {} — nilai kini {}",
            detail.name,
            detail.cost_label,
            detail.current_value_label.as_deref().unwrap_or("N/A"),
        );
    }
}
