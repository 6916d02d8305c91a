//! Derived detail views.
//!
//! Pure builders turning a record plus locale and clock into the
//! display values its detail panel shows. Nothing here touches the
//! provider or mutates state; the loader and view state decide *which*
//! record, these decide *what it looks like*.

use chrono::NaiveDate;
use graha_core::{Asset, CapitalProject, Locale};
use graha_metrics::{
    format_rupiah, format_short_date, lifecycle_percentage, straight_line_value, warranty_expired,
    Badge, BadgeTier,
};

/// Display values for an asset's detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub name: String,
    pub category_label: String,
    pub status_label: String,
    pub status_tier: BadgeTier,
    pub location: String,
    pub installed_label: String,
    pub warranty_label: String,
    pub warranty_expired: bool,
    pub cost_label: String,
    /// Share of expected life consumed. `None` when the asset's
    /// lifespan is not positive, in which case no depreciation is shown
    /// either.
    pub lifecycle_percent: Option<f64>,
    pub current_value_label: Option<String>,
}

pub fn asset_detail(asset: &Asset, locale: &Locale, today: NaiveDate) -> AssetDetail {
    let lifecycle_percent =
        lifecycle_percentage(asset.installed_on, asset.lifespan_years, today).ok();
    let current_value_label = lifecycle_percent
        .map(|pct| format_rupiah(straight_line_value(asset.purchase_cost, pct), locale));
    AssetDetail {
        name: asset.name.clone(),
        category_label: asset.category.to_string(),
        status_label: asset.status.to_string(),
        status_tier: asset.status.badge(),
        location: asset.location.clone(),
        installed_label: format_short_date(Some(asset.installed_on), locale),
        warranty_label: format_short_date(asset.warranty_until, locale),
        warranty_expired: warranty_expired(asset.warranty_until, today),
        cost_label: format_rupiah(asset.purchase_cost, locale),
        lifecycle_percent,
        current_value_label,
    }
}

/// Display values for a capital project's detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub name: String,
    pub stage_label: String,
    pub stage_tier: BadgeTier,
    pub manager: String,
    pub location: String,
    pub budget_label: String,
    pub spent_label: String,
    pub remaining_label: String,
    /// Spend as a share of budget. `None` when the budget is zero.
    pub spent_percent: Option<f64>,
    pub over_budget: bool,
    pub start_label: String,
    pub target_label: String,
}

pub fn project_detail(project: &CapitalProject, locale: &Locale) -> ProjectDetail {
    let spent_percent = if project.budget != 0 {
        Some(project.spent as f64 / project.budget as f64 * 100.0)
    } else {
        None
    };
    ProjectDetail {
        name: project.name.clone(),
        stage_label: project.stage.to_string(),
        stage_tier: project.stage.badge(),
        manager: project.manager.clone(),
        location: project.location.clone(),
        budget_label: format_rupiah(project.budget, locale),
        spent_label: format_rupiah(project.spent, locale),
        remaining_label: format_rupiah(project.budget - project.spent, locale),
        spent_percent,
        over_budget: project.spent > project.budget,
        start_label: format_short_date(Some(project.start_on), locale),
        target_label: format_short_date(project.target_on, locale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graha_core::{AssetCategory, AssetStatus, ProjectStage};
    use graha_testkit::{sample_asset, sample_project};

    fn locale() -> Locale {
        Locale::indonesian()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 30).unwrap()
    }

    #[test]
    fn test_asset_detail_formats_cost_and_dates() {
        let mut asset = sample_asset("Genset Cadangan", AssetCategory::Electrical, AssetStatus::Operational);
        asset.installed_on = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        asset.purchase_cost = 1_250_000_000;
        asset.warranty_until = None;

        let detail = asset_detail(&asset, &locale(), today());
        assert_eq!(detail.cost_label, "Rp 1.250.000.000");
        assert_eq!(detail.installed_label, "15/01/2020");
        assert_eq!(detail.warranty_label, "N/A");
        assert!(!detail.warranty_expired);
        assert_eq!(detail.status_tier, BadgeTier::Positive);
    }

    #[test]
    fn test_asset_detail_derives_depreciated_value() {
        let mut asset = sample_asset("Chiller", AssetCategory::Hvac, AssetStatus::Operational);
        asset.installed_on = NaiveDate::from_ymd_opt(2020, 7, 30).unwrap();
        asset.lifespan_years = 10.0;
        asset.purchase_cost = 1_000_000_000;

        let detail = asset_detail(&asset, &locale(), today());
        let pct = detail.lifecycle_percent.unwrap();
        assert!((pct - 50.0).abs() < 1.0, "pct {pct}");
        // Roughly half the life consumed, so roughly half the value left.
        assert!(detail.current_value_label.unwrap().starts_with("Rp 5"));
    }

    #[test]
    fn test_asset_detail_with_bad_lifespan_omits_lifecycle() {
        let mut asset = sample_asset("Meja Rapat", AssetCategory::Furniture, AssetStatus::Operational);
        asset.lifespan_years = 0.0;
        let detail = asset_detail(&asset, &locale(), today());
        assert!(detail.lifecycle_percent.is_none());
        assert!(detail.current_value_label.is_none());
    }

    #[test]
    fn test_expired_warranty_is_flagged() {
        let mut asset = sample_asset("Lift", AssetCategory::Elevator, AssetStatus::Operational);
        asset.warranty_until = Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let detail = asset_detail(&asset, &locale(), today());
        assert!(detail.warranty_expired);
        assert_eq!(detail.warranty_label, "01/01/2023");
    }

    #[test]
    fn test_project_detail_budget_math() {
        let mut project = sample_project("Rooftop Solar", ProjectStage::Construction);
        project.budget = 10_000_000_000;
        project.spent = 7_500_000_000;

        let detail = project_detail(&project, &locale());
        assert_eq!(detail.budget_label, "Rp 10.000.000.000");
        assert_eq!(detail.remaining_label, "Rp 2.500.000.000");
        assert_eq!(detail.spent_percent, Some(75.0));
        assert!(!detail.over_budget);
    }

    #[test]
    fn test_project_detail_over_budget() {
        let mut project = sample_project("Lobby Refresh", ProjectStage::Handover);
        project.budget = 1_000_000_000;
        project.spent = 1_200_000_000;

        let detail = project_detail(&project, &locale());
        assert!(detail.over_budget);
        assert_eq!(detail.remaining_label, "-Rp 200.000.000");
    }

    #[test]
    fn test_project_detail_zero_budget_has_no_percent() {
        let mut project = sample_project("Studi Kelayakan", ProjectStage::Planning);
        project.budget = 0;
        project.spent = 0;
        let detail = project_detail(&project, &locale());
        assert!(detail.spent_percent.is_none());
        assert!(!detail.over_budget);
    }

    #[test]
    fn test_missing_target_date_shows_placeholder() {
        let mut project = sample_project("Kajian Awal", ProjectStage::Planning);
        project.target_on = None;
        let detail = project_detail(&project, &locale());
        assert_eq!(detail.target_label, "N/A");
    }
}
