mod edit_house;
mod reservation_rules;

pub use edit_house::EditHouseScreen;
pub use reservation_rules::{ReservationRulesEditor, fields as rules_fields};

use crate::domain::House;
use crate::form::SubmissionResult;
use crate::notify::Notifier;
use crate::query::{Fetch, QueryCache};
use crate::service::MutationService;

/// Collaborators a submit needs, passed down by the owning screen so editors
/// hold no long-lived references themselves.
pub struct EditorContext<'a> {
    pub service: &'a mut dyn MutationService,
    pub houses: &'a mut QueryCache<House>,
    pub house_fetch: &'a mut dyn Fetch<House>,
    pub notifier: &'a mut dyn Notifier,
}

/// Capability a child editor hands its parent: exactly one operation, so a
/// shared save action can trigger a tab's submission without reaching into
/// the editor's internals.
pub trait SubmitHandle {
    fn submit(&mut self, ctx: &mut EditorContext<'_>) -> SubmissionResult;
}
