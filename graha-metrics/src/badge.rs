//! Badge classification for status values.
//!
//! Maps every status enum onto a presentation tier. The mappings are
//! exhaustive matches over closed enums, so an unclassifiable status
//! cannot exist at runtime.

use graha_core::{
    AssetStatus, CertStatus, FeedbackStatus, Priority, ProjectStage, RequestStatus, ScheduleStatus,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation tier for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    /// Healthy / done.
    Positive,
    /// Needs attention.
    Caution,
    /// Broken / rejected / overdue.
    Negative,
    /// Informational, no judgement.
    Neutral,
}

impl BadgeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Positive => "positive",
            BadgeTier::Caution => "caution",
            BadgeTier::Negative => "negative",
            BadgeTier::Neutral => "neutral",
        }
    }
}

impl fmt::Display for BadgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a status value into a [`BadgeTier`].
pub trait Badge {
    fn badge(&self) -> BadgeTier;
}

impl Badge for AssetStatus {
    fn badge(&self) -> BadgeTier {
        match self {
            AssetStatus::Operational => BadgeTier::Positive,
            AssetStatus::UnderMaintenance => BadgeTier::Caution,
            AssetStatus::Faulty => BadgeTier::Negative,
            AssetStatus::Decommissioned => BadgeTier::Neutral,
        }
    }
}

impl Badge for RequestStatus {
    fn badge(&self) -> BadgeTier {
        match self {
            RequestStatus::Draft => BadgeTier::Neutral,
            RequestStatus::Submitted => BadgeTier::Caution,
            RequestStatus::Approved => BadgeTier::Positive,
            RequestStatus::InProgress => BadgeTier::Caution,
            RequestStatus::Completed => BadgeTier::Positive,
            RequestStatus::Rejected => BadgeTier::Negative,
        }
    }
}

impl Badge for ScheduleStatus {
    fn badge(&self) -> BadgeTier {
        match self {
            ScheduleStatus::Planned => BadgeTier::Neutral,
            ScheduleStatus::Due => BadgeTier::Caution,
            ScheduleStatus::Overdue => BadgeTier::Negative,
            ScheduleStatus::Completed => BadgeTier::Positive,
        }
    }
}

impl Badge for Priority {
    fn badge(&self) -> BadgeTier {
        match self {
            Priority::Low => BadgeTier::Neutral,
            Priority::Medium => BadgeTier::Caution,
            Priority::High => BadgeTier::Caution,
            Priority::Critical => BadgeTier::Negative,
        }
    }
}

impl Badge for ProjectStage {
    fn badge(&self) -> BadgeTier {
        match self {
            ProjectStage::Planning => BadgeTier::Neutral,
            ProjectStage::Design => BadgeTier::Neutral,
            ProjectStage::Procurement => BadgeTier::Neutral,
            ProjectStage::Construction => BadgeTier::Caution,
            ProjectStage::Handover => BadgeTier::Caution,
            ProjectStage::Completed => BadgeTier::Positive,
        }
    }
}

impl Badge for CertStatus {
    fn badge(&self) -> BadgeTier {
        match self {
            CertStatus::InAssessment => BadgeTier::Caution,
            CertStatus::Active => BadgeTier::Positive,
            CertStatus::Expired => BadgeTier::Negative,
        }
    }
}

impl Badge for FeedbackStatus {
    fn badge(&self) -> BadgeTier {
        match self {
            FeedbackStatus::New => BadgeTier::Caution,
            FeedbackStatus::Acknowledged => BadgeTier::Neutral,
            FeedbackStatus::Resolved => BadgeTier::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_status_tiers() {
        assert_eq!(AssetStatus::Operational.badge(), BadgeTier::Positive);
        assert_eq!(AssetStatus::Faulty.badge(), BadgeTier::Negative);
        assert_eq!(AssetStatus::Decommissioned.badge(), BadgeTier::Neutral);
    }

    #[test]
    fn test_every_request_status_classifies() {
        use graha_core::RequestStatus::*;
        for status in [Draft, Submitted, Approved, InProgress, Completed, Rejected] {
            // Exhaustive by construction; the call itself is the assertion.
            let _ = status.badge();
        }
    }

    #[test]
    fn test_terminal_states_are_positive() {
        assert_eq!(RequestStatus::Completed.badge(), BadgeTier::Positive);
        assert_eq!(ScheduleStatus::Completed.badge(), BadgeTier::Positive);
        assert_eq!(ProjectStage::Completed.badge(), BadgeTier::Positive);
        assert_eq!(FeedbackStatus::Resolved.badge(), BadgeTier::Positive);
    }

    #[test]
    fn test_badge_tier_serializes_lowercase() {
        let json = serde_json::to_string(&BadgeTier::Caution).unwrap();
        assert_eq!(json, "\"caution\"");
    }

    #[test]
    fn test_badge_tier_display() {
        assert_eq!(BadgeTier::Negative.to_string(), "negative");
    }
}
