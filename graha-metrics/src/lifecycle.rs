//! Asset lifecycle percentage and straight-line depreciation.
//!
//! Both functions take the reference date explicitly so callers (and
//! tests) control the clock.

use chrono::NaiveDate;
use graha_core::MetricsError;

const DAYS_PER_YEAR: f64 = 365.25;

/// Elapsed fraction of an asset's expected useful life, as a percentage.
///
/// Clamped at 100 on the upper bound only. An installation date in the
/// future yields a negative percentage; callers that treat that as "not
/// yet in service" can check the sign. Lifespan must be positive.
pub fn lifecycle_percentage(
    installed_on: NaiveDate,
    lifespan_years: f64,
    today: NaiveDate,
) -> Result<f64, MetricsError> {
    if !(lifespan_years > 0.0) {
        return Err(MetricsError::NonPositiveLifespan {
            years: lifespan_years,
        });
    }
    let elapsed_days = (today - installed_on).num_days() as f64;
    let total_days = lifespan_years * DAYS_PER_YEAR;
    Ok((elapsed_days / total_days * 100.0).min(100.0))
}

/// Straight-line depreciated value: cost scaled by the unused fraction
/// of the lifecycle. `percent_used` above 100 is treated as 100; there
/// is no further floor, so a negative percentage (future installation)
/// yields a value above cost.
pub fn straight_line_value(purchase_cost: i64, percent_used: f64) -> i64 {
    let used = percent_used.min(100.0);
    let remaining = 1.0 - used / 100.0;
    (purchase_cost as f64 * remaining).round() as i64
}

/// Whether a warranty has lapsed as of `today`. Missing warranty dates
/// are never considered expired.
pub fn warranty_expired(warranty_until: Option<NaiveDate>, today: NaiveDate) -> bool {
    match warranty_until {
        Some(until) => until < today,
        None => false,
    }
}
