use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Backend identifier for a listed house. Houses are keyed by uuid on every
/// resource path and mutation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseId(Uuid);

impl HouseId {
    pub const fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for HouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A host's listed house as returned by the backend. Everything past the uuid
/// is optional: a freshly created house carries almost none of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub uuid: HouseId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub structure: Option<String>,
    #[serde(default)]
    pub reservation: Option<ReservationSettings>,
    #[serde(rename = "weekendType", default)]
    pub weekend_type: Option<WeekendType>,
}

impl House {
    pub fn new(uuid: HouseId) -> Self {
        Self {
            uuid,
            name: None,
            structure: None,
            reservation: None,
            weekend_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservationSettings {
    #[serde(default)]
    pub discount: Option<DiscountSettings>,
    /// Partial per-weekday map; the form layer backfills missing keys.
    #[serde(default)]
    pub minimum_length_stay: Option<IndexMap<String, u32>>,
    #[serde(default)]
    pub timing: Option<Timing>,
    #[serde(default)]
    pub capacity: Option<Capacity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountSettings {
    #[serde(default)]
    pub short_term: Option<DiscountTier>,
    #[serde(default)]
    pub long_term: Option<DiscountTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    #[serde(default)]
    pub minimum_length_stay: Option<u32>,
    /// Percentage, owned by the backend; the dashboard only round-trips it.
    #[serde(default)]
    pub discount: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default)]
    pub enter: Option<EntryWindow>,
    #[serde(default)]
    pub leave: Option<String>,
}

/// Check-in window, "HH:MM" wall-clock strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryWindow {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    #[serde(default)]
    pub normal: Option<u32>,
    #[serde(default)]
    pub maximum: Option<u32>,
}

/// Weekend-days option selectable per house (e.g. Thursday/Friday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendType {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Structure option used when creating a house (villa, cottage, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseType {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Minimal success payload of a mutation: the persisted entity's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntity {
    pub uuid: HouseId,
}
