use serde::Serialize;
use serde_json::Value;

use crate::domain::{HouseId, SavedEntity};

use super::error::MutationError;

/// Body of the create-house mutation: only the structure key is chosen up
/// front, everything else is filled in through the edit screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateHouse {
    pub structure: String,
}

/// Create/update/delete seam against the backend, keyed by entity id.
/// Success minimally carries the persisted identifier; rejection carries the
/// structured error payload.
pub trait MutationService {
    fn create_house(&mut self, request: &CreateHouse) -> Result<SavedEntity, MutationError>;
    fn update_house(&mut self, id: HouseId, payload: &Value) -> Result<SavedEntity, MutationError>;
    fn delete_house(&mut self, id: HouseId) -> Result<(), MutationError>;
}
