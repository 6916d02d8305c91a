//! GRAHA Metrics - Derived View Values
//!
//! Pure functions computing the presentational values the dashboard
//! derives per record: Rupiah formatting, short dates, lifecycle
//! percentage, straight-line depreciation, and badge classification.
//! Everything takes its locale and clock explicitly; nothing here reads
//! ambient state.

pub mod badge;
pub mod currency;
pub mod dates;
pub mod lifecycle;

pub use badge::{Badge, BadgeTier};
pub use currency::{format_rupiah, format_rupiah_opt, rupiah_from_f64};
pub use dates::{format_date, format_short_date};
pub use lifecycle::{lifecycle_percentage, straight_line_value, warranty_expired};
