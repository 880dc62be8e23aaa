//! Reservation-rules editor: discounts, check-in/out times, capacities, and
//! the per-weekday minimum-stay table of one house.

use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::{House, HouseId, STAY_ALL_KEY, Weekday};
use crate::form::{FormController, FormPhase, FormState, SubmissionResult, ValidationPolicy};
use crate::query::keys;

use super::{EditorContext, SubmitHandle};

pub mod fields {
    pub const SHORT_TERM_LENGTH: &str = "short_term_booking_length";
    pub const SHORT_TERM_DISCOUNT: &str = "short_term_booking_discount";
    pub const LONG_TERM_LENGTH: &str = "long_term_booking_length";
    pub const LONG_TERM_DISCOUNT: &str = "long_term_booking_discount";
    pub const MINIMUM_STAY: &str = "minimum_length_stay";
    pub const ENTER_FROM: &str = "enter_from";
    pub const ENTER_UNTIL: &str = "enter_until";
    pub const DISCHARGE_TIME: &str = "discharge_time";
    pub const CAPACITY: &str = "capacity";
    pub const MAXIMUM_CAPACITY: &str = "maximum_capacity";
    pub const WEEKEND_TYPE: &str = "weekendType";
}

const DEFAULT_ENTER_FROM: &str = "14:00";
const DEFAULT_ENTER_UNTIL: &str = "23:00";
const DEFAULT_DISCHARGE_TIME: &str = "12:00";
const DEFAULT_MINIMUM_STAY: &str = "1";

pub struct ReservationRulesEditor {
    house_id: HouseId,
    controller: FormController,
}

impl ReservationRulesEditor {
    pub fn new(house: &House) -> Self {
        Self::with_policy(house, default_policy())
    }

    pub fn with_policy(house: &House, policy: ValidationPolicy) -> Self {
        Self {
            house_id: house.uuid,
            controller: FormController::new(seed_form(house), policy),
        }
    }

    /// Replaces the form from a fresh snapshot, e.g. after the backing query
    /// refetched. Pending edits are dropped.
    pub fn reseed(&mut self, house: &House) {
        self.house_id = house.uuid;
        self.controller.reset(seed_form(house));
    }

    pub fn house_id(&self) -> HouseId {
        self.house_id
    }

    pub fn form(&self) -> &FormState {
        self.controller.state()
    }

    pub fn phase(&self) -> FormPhase {
        self.controller.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    pub fn error_list(&self) -> &[String] {
        self.controller.error_list()
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
        self.controller.set_field(field, value.into());
    }

    /// Edits one row of the minimum-stay table; `day` is a weekday key or
    /// [`STAY_ALL_KEY`].
    pub fn set_minimum_stay(&mut self, day: &str, value: impl Into<String>) {
        self.controller
            .set_nested_field(fields::MINIMUM_STAY, day, value.into());
    }

    pub fn submit(&mut self, ctx: &mut EditorContext<'_>) -> SubmissionResult {
        let id = self.house_id;
        let EditorContext {
            service,
            houses,
            house_fetch,
            notifier,
        } = ctx;
        self.controller.submit(
            &mut **notifier,
            |payload| service.update_house(id, payload),
            || houses.refetch(keys::house(id), &mut **house_fetch).map(|_| ()),
        )
    }
}

impl SubmitHandle for ReservationRulesEditor {
    fn submit(&mut self, ctx: &mut EditorContext<'_>) -> SubmissionResult {
        Self::submit(self, ctx)
    }
}

fn default_policy() -> ValidationPolicy {
    ValidationPolicy::new()
        .require(fields::ENTER_FROM, "Enter the start of the check-in window")
        .require(fields::ENTER_UNTIL, "Enter the end of the check-in window")
        .require(fields::DISCHARGE_TIME, "Enter the checkout time")
        .require(fields::CAPACITY, "Enter the standard capacity")
        .require(fields::MAXIMUM_CAPACITY, "Enter the maximum capacity")
        .require(fields::WEEKEND_TYPE, "Choose the weekend days")
}

/// Projects the persisted house into editable fields, applying the fixed
/// fallbacks for anything the backend left out.
fn seed_form(house: &House) -> FormState {
    let reservation = house.reservation.as_ref();
    let discount = reservation.and_then(|r| r.discount.as_ref());
    let short_term = discount.and_then(|d| d.short_term.as_ref());
    let long_term = discount.and_then(|d| d.long_term.as_ref());
    let timing = reservation.and_then(|r| r.timing.as_ref());
    let enter = timing.and_then(|t| t.enter.as_ref());
    let capacity = reservation.and_then(|r| r.capacity.as_ref());

    let mut form = IndexMap::new();
    form.insert(
        fields::SHORT_TERM_LENGTH.to_string(),
        number_or_empty(short_term.and_then(|t| t.minimum_length_stay)),
    );
    form.insert(
        fields::SHORT_TERM_DISCOUNT.to_string(),
        number_or_empty(short_term.and_then(|t| t.discount)),
    );
    form.insert(
        fields::LONG_TERM_LENGTH.to_string(),
        number_or_empty(long_term.and_then(|t| t.minimum_length_stay)),
    );
    form.insert(
        fields::LONG_TERM_DISCOUNT.to_string(),
        number_or_empty(long_term.and_then(|t| t.discount)),
    );
    form.insert(
        fields::MINIMUM_STAY.to_string(),
        stay_map(reservation.and_then(|r| r.minimum_length_stay.as_ref())),
    );
    form.insert(
        fields::ENTER_FROM.to_string(),
        text_or(enter.and_then(|e| e.from.as_deref()), DEFAULT_ENTER_FROM),
    );
    form.insert(
        fields::ENTER_UNTIL.to_string(),
        text_or(enter.and_then(|e| e.to.as_deref()), DEFAULT_ENTER_UNTIL),
    );
    form.insert(
        fields::DISCHARGE_TIME.to_string(),
        text_or(
            timing.and_then(|t| t.leave.as_deref()),
            DEFAULT_DISCHARGE_TIME,
        ),
    );
    form.insert(
        fields::CAPACITY.to_string(),
        number_or_empty(capacity.and_then(|c| c.normal)),
    );
    form.insert(
        fields::MAXIMUM_CAPACITY.to_string(),
        number_or_empty(capacity.and_then(|c| c.maximum)),
    );
    form.insert(
        fields::WEEKEND_TYPE.to_string(),
        text_or(
            house.weekend_type.as_ref().map(|w| w.key.as_str()),
            "",
        ),
    );
    FormState::seed(form)
}

/// Merges the backend's partial stay map over the complete default template:
/// the aggregate key plus all seven weekdays, `"1"` wherever the backend is
/// silent. Keys never drop out of the template.
fn stay_map(partial: Option<&IndexMap<String, u32>>) -> Value {
    let mut map = serde_json::Map::with_capacity(8);
    map.insert(
        STAY_ALL_KEY.to_string(),
        Value::String(DEFAULT_MINIMUM_STAY.to_string()),
    );
    for day in Weekday::ALL {
        map.insert(
            day.key().to_string(),
            Value::String(DEFAULT_MINIMUM_STAY.to_string()),
        );
    }
    if let Some(partial) = partial {
        for (key, nights) in partial {
            map.insert(key.clone(), Value::String(nights.to_string()));
        }
    }
    Value::Object(map)
}

fn text_or(value: Option<&str>, fallback: &str) -> Value {
    Value::String(value.unwrap_or(fallback).to_string())
}

fn number_or_empty(value: Option<u32>) -> Value {
    Value::String(value.map(|n| n.to_string()).unwrap_or_default())
}
