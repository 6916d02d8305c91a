//! Identity types for GRAHA records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 (timestamp-sortable) for a record id.
pub fn new_record_id() -> Uuid {
    Uuid::now_v7()
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh UUIDv7-backed id.
            pub fn generate() -> Self {
                Self(new_record_id())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

record_id!(
    /// Identifier for a facility asset.
    AssetId
);
record_id!(
    /// Identifier for a maintenance request.
    RequestId
);
record_id!(
    /// Identifier for a preventive maintenance schedule.
    ScheduleId
);
record_id!(
    /// Identifier for a financial transaction.
    TransactionId
);
record_id!(
    /// Identifier for a capital project.
    ProjectId
);
record_id!(
    /// Identifier for an energy meter reading.
    ReadingId
);
record_id!(
    /// Identifier for a green building certification.
    CertificationId
);
record_id!(
    /// Identifier for a workplace feedback entry.
    FeedbackId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_id_is_v7() {
        let id = new_record_id();
        assert_eq!(id.get_version_num(), 7);
    }

    #[test]
    fn test_record_ids_are_sortable() {
        let id1 = AssetId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = AssetId::generate();
        // UUIDv7 ids sort by creation time
        assert!(id1.to_string() < id2.to_string());
    }

    #[test]
    fn test_record_id_display_matches_uuid() {
        let raw = Uuid::now_v7();
        let id = RequestId::new(raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.as_uuid(), raw);
    }

    #[test]
    fn test_record_id_serde_is_transparent() {
        let id = ProjectId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
