//! Categorical enums for GRAHA records
//!
//! Every attribute the dashboard filters or badges on is a closed enum.
//! Unrecognized strings never flow past the parse boundary: `FromStr`
//! returns a typed [`ParseError`] instead of falling through to a
//! free-form value.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! enum_strings {
    ($name:ident { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match normalize_token(s).as_str() {
                    $(t if t == normalize_token($label) $(|| t == $alias)* => Ok($name::$variant),)+
                    _ => Err(ParseError::new(stringify!($name), s)),
                }
            }
        }
    };
}

// ============================================================================
// ASSET REGISTRY
// ============================================================================

/// Functional category of a facility asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    Hvac,
    Electrical,
    Plumbing,
    FireSafety,
    Elevator,
    Furniture,
    ItEquipment,
}

enum_strings!(AssetCategory {
    Hvac => "HVAC",
    Electrical => "Electrical",
    Plumbing => "Plumbing",
    FireSafety => "Fire Safety",
    Elevator => "Elevator" | "lift",
    Furniture => "Furniture",
    ItEquipment => "IT Equipment",
});

/// Operational status of a facility asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AssetStatus {
    #[default]
    Operational,
    Faulty,
    UnderMaintenance,
    Decommissioned,
}

enum_strings!(AssetStatus {
    Operational => "Operational",
    Faulty => "Faulty" | "broken",
    UnderMaintenance => "Under Maintenance" | "maintenance",
    Decommissioned => "Decommissioned" | "retired",
});

// ============================================================================
// FACILITY MAINTENANCE
// ============================================================================

/// Kind of work a maintenance request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestCategory {
    Repair,
    Cleaning,
    Safety,
    Relocation,
    Inspection,
}

enum_strings!(RequestCategory {
    Repair => "Repair",
    Cleaning => "Cleaning",
    Safety => "Safety",
    Relocation => "Relocation",
    Inspection => "Inspection",
});

/// Urgency of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

enum_strings!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical" | "urgent",
});

/// Workflow position of a maintenance request.
///
/// Statuses are plain data: nothing here enforces legal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Draft,
    Submitted,
    Approved,
    InProgress,
    Completed,
    Rejected,
}

enum_strings!(RequestStatus {
    Draft => "Draft",
    Submitted => "Submitted",
    Approved => "Approved",
    InProgress => "In Progress",
    Completed => "Completed" | "done",
    Rejected => "Rejected",
});

/// Recurrence of a preventive maintenance schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl Frequency {
    /// Nominal interval length in days, for due-date arithmetic.
    pub fn interval_days(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::Quarterly => 91,
            Frequency::SemiAnnual => 182,
            Frequency::Annual => 365,
        }
    }
}

enum_strings!(Frequency {
    Daily => "Daily",
    Weekly => "Weekly",
    Monthly => "Monthly",
    Quarterly => "Quarterly",
    SemiAnnual => "Semi-Annual" | "biannual",
    Annual => "Annual" | "yearly",
});

/// Status of a preventive maintenance schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Planned,
    Due,
    Overdue,
    Completed,
}

enum_strings!(ScheduleStatus {
    Planned => "Planned",
    Due => "Due",
    Overdue => "Overdue",
    Completed => "Completed",
});

// ============================================================================
// FINANCIAL TRACKING
// ============================================================================

/// Ledger classification of a facility transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    CapitalExpense,
    OperationalExpense,
    UtilityPayment,
    LeaseIncome,
}

enum_strings!(TransactionKind {
    CapitalExpense => "Capital Expense" | "capex",
    OperationalExpense => "Operational Expense" | "opex",
    UtilityPayment => "Utility Payment",
    LeaseIncome => "Lease Income",
});

// ============================================================================
// CAPITAL PROJECTS
// ============================================================================

/// Delivery stage of a capital project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStage {
    Planning,
    Design,
    Procurement,
    Construction,
    Handover,
    Completed,
}

enum_strings!(ProjectStage {
    Planning => "Planning",
    Design => "Design",
    Procurement => "Procurement",
    Construction => "Construction",
    Handover => "Handover",
    Completed => "Completed",
});

// ============================================================================
// ENVIRONMENTAL / ENERGY
// ============================================================================

/// Metered resource for environmental tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Electricity,
    Water,
    Gas,
}

enum_strings!(ResourceKind {
    Electricity => "Electricity" | "power",
    Water => "Water",
    Gas => "Gas",
});

// ============================================================================
// GREEN BUILDING CERTIFICATION
// ============================================================================

/// Certification scheme a building is assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertScheme {
    Greenship,
    Edge,
    Leed,
}

enum_strings!(CertScheme {
    Greenship => "Greenship",
    Edge => "EDGE",
    Leed => "LEED",
});

/// Awarded certification tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CertLevel {
    Certified,
    Silver,
    Gold,
    Platinum,
}

enum_strings!(CertLevel {
    Certified => "Certified",
    Silver => "Silver",
    Gold => "Gold",
    Platinum => "Platinum",
});

/// Assessment status of a certification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertStatus {
    InAssessment,
    Active,
    Expired,
}

enum_strings!(CertStatus {
    InAssessment => "In Assessment",
    Active => "Active",
    Expired => "Expired",
});

// ============================================================================
// WORKPLACE EXPERIENCE
// ============================================================================

/// Topic of a workplace feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackCategory {
    Cleanliness,
    Comfort,
    Safety,
    Amenities,
}

enum_strings!(FeedbackCategory {
    Cleanliness => "Cleanliness",
    Comfort => "Comfort",
    Safety => "Safety",
    Amenities => "Amenities",
});

/// Handling status of a workplace feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FeedbackStatus {
    #[default]
    New,
    Acknowledged,
    Resolved,
}

enum_strings!(FeedbackStatus {
    New => "New",
    Acknowledged => "Acknowledged",
    Resolved => "Resolved",
});

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every Display label parses back to the same variant.
        #[test]
        fn prop_status_display_parse_round_trip(idx in 0usize..4) {
            let status = AssetStatus::all()[idx];
            let parsed: AssetStatus = status.to_string().parse().unwrap();
            prop_assert_eq!(parsed, status);
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn prop_parse_total_over_strings(s in ".*") {
            let _ = s.parse::<AssetStatus>();
            let _ = s.parse::<RequestStatus>();
            let _ = s.parse::<Priority>();
            let _ = s.parse::<ProjectStage>();
        }
    }
}
