//! Well-known query identities used across the dashboard.

use crate::domain::HouseId;

use super::QueryKey;

pub const fn user() -> QueryKey {
    QueryKey::of("get-user")
}

pub const fn houses() -> QueryKey {
    QueryKey::of("get-houses")
}

pub const fn house(id: HouseId) -> QueryKey {
    QueryKey::scoped("get-house", id.as_uuid())
}

pub const fn house_types() -> QueryKey {
    QueryKey::of("get-house-types")
}

pub const fn weekend_types() -> QueryKey {
    QueryKey::of("get-weekend-types")
}
