#![deny(rust_2018_idioms)]

mod domain;
mod editor;
mod form;
mod notify;
mod query;
mod service;

pub use domain::{
    Capacity, DiscountSettings, DiscountTier, EntryWindow, House, HouseId, HouseType,
    ReservationSettings, STAY_ALL_KEY, SavedEntity, Timing, User, Weekday, WeekendType,
};
pub use editor::{
    EditHouseScreen, EditorContext, ReservationRulesEditor, SubmitHandle, rules_fields,
};
pub use form::{
    FormController, FormPhase, FormState, SubmissionResult, ValidationErrors, ValidationPolicy,
};
pub use notify::{
    GENERIC_FAILURE_MESSAGE, Notice, NotificationLog, Notifier, REVIEW_ERRORS_MESSAGE,
    SAVED_MESSAGE,
};
pub use query::{Fetch, QueryCache, QueryKey, QueryStatus, keys};
pub use service::{
    API_BASE, ApiClient, CreateHouse, HttpRequest, HttpResponse, Method, MutationError,
    MutationService, Rejection, Transport,
};

pub mod prelude {
    pub use super::{
        ApiClient, EditorContext, Fetch, FormController, FormState, House, HouseId,
        MutationService, Notifier, QueryCache, ReservationRulesEditor, SubmissionResult,
        SubmitHandle, Transport, ValidationPolicy,
    };
}
