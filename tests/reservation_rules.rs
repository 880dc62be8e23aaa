//! End-to-end flow of the reservation-rules editor against stubbed
//! collaborators: mutation service, house cache, and notification log.

use hostdesk::{
    EditorContext, Fetch, House, HouseId, MutationError, MutationService, NotificationLog,
    QueryCache, QueryKey, ReservationRulesEditor, SavedEntity, SubmissionResult, SubmitHandle,
    rules_fields as fields,
};
use indexmap::IndexMap;
use serde_json::Value;

struct StubService {
    updates: Vec<Value>,
    next: Option<MutationError>,
}

impl StubService {
    fn succeeding() -> Self {
        Self {
            updates: Vec::new(),
            next: None,
        }
    }

    fn rejecting(rejection: hostdesk::Rejection) -> Self {
        Self {
            updates: Vec::new(),
            next: Some(MutationError::Rejected(rejection)),
        }
    }
}

impl MutationService for StubService {
    fn create_house(
        &mut self,
        _request: &hostdesk::CreateHouse,
    ) -> Result<SavedEntity, MutationError> {
        unreachable!("the rules editor never creates")
    }

    fn update_house(&mut self, id: HouseId, payload: &Value) -> Result<SavedEntity, MutationError> {
        self.updates.push(payload.clone());
        match self.next.take() {
            Some(err) => Err(err),
            None => Ok(SavedEntity { uuid: id }),
        }
    }

    fn delete_house(&mut self, _id: HouseId) -> Result<(), MutationError> {
        unreachable!("the rules editor never deletes")
    }
}

struct CountingFetch {
    house: House,
    calls: usize,
}

impl Fetch<House> for CountingFetch {
    fn fetch(&mut self, _key: &QueryKey) -> anyhow::Result<House> {
        self.calls += 1;
        Ok(self.house.clone())
    }
}

struct Harness {
    service: StubService,
    houses: QueryCache<House>,
    fetch: CountingFetch,
    notifier: NotificationLog,
}

impl Harness {
    fn new(house: &House, service: StubService) -> Self {
        Self {
            service,
            houses: QueryCache::new(),
            fetch: CountingFetch {
                house: house.clone(),
                calls: 0,
            },
            notifier: NotificationLog::new(),
        }
    }

    fn submit(&mut self, editor: &mut ReservationRulesEditor) -> SubmissionResult {
        let mut ctx = EditorContext {
            service: &mut self.service,
            houses: &mut self.houses,
            house_fetch: &mut self.fetch,
            notifier: &mut self.notifier,
        };
        SubmitHandle::submit(editor, &mut ctx)
    }
}

fn house() -> House {
    House::new(HouseId::generate())
}

fn fill_required(editor: &mut ReservationRulesEditor) {
    editor.set_field(fields::CAPACITY, "4");
    editor.set_field(fields::MAXIMUM_CAPACITY, "8");
    editor.set_field(fields::WEEKEND_TYPE, "thu-fri");
}

#[test]
fn unmodified_form_submits_without_any_network_call() {
    let house = house();
    let mut editor = ReservationRulesEditor::new(&house);
    let mut harness = Harness::new(&house, StubService::succeeding());

    let result = harness.submit(&mut editor);

    assert_eq!(result, SubmissionResult::Saved);
    assert!(harness.service.updates.is_empty());
    assert_eq!(harness.fetch.calls, 0);
    assert!(harness.notifier.notices().is_empty());
}

#[test]
fn each_required_field_blocks_submission_on_its_own() {
    let required = [
        fields::ENTER_FROM,
        fields::ENTER_UNTIL,
        fields::DISCHARGE_TIME,
        fields::CAPACITY,
        fields::MAXIMUM_CAPACITY,
        fields::WEEKEND_TYPE,
    ];
    for blank in required {
        let house = house();
        let mut editor = ReservationRulesEditor::new(&house);
        fill_required(&mut editor);
        editor.set_field(blank, "");
        let mut harness = Harness::new(&house, StubService::succeeding());

        let result = harness.submit(&mut editor);

        assert_eq!(result, SubmissionResult::Invalid, "field {blank}");
        assert_eq!(
            editor.form().errors().len(),
            1,
            "only {blank} should fail"
        );
        assert!(!editor.form().field_errors(blank).is_empty());
        assert!(editor.form().is_dirty());
        assert!(harness.service.updates.is_empty());
        assert_eq!(harness.fetch.calls, 0);
    }
}

#[test]
fn successful_save_refetches_once_and_notifies_once() {
    let house = house();
    let mut editor = ReservationRulesEditor::new(&house);
    fill_required(&mut editor);
    let mut harness = Harness::new(&house, StubService::succeeding());

    let result = harness.submit(&mut editor);

    assert_eq!(result, SubmissionResult::Saved);
    assert_eq!(harness.service.updates.len(), 1);
    assert_eq!(harness.fetch.calls, 1);
    assert_eq!(harness.notifier.success_count(), 1);
    assert_eq!(harness.notifier.notices().len(), 1);
    assert!(!editor.form().is_dirty());

    // the payload carries the full field map, stay template included
    let payload = &harness.service.updates[0];
    assert_eq!(payload[fields::CAPACITY], "4");
    assert_eq!(payload[fields::MINIMUM_STAY]["Saturday"], "1");
}

#[test]
fn server_rejection_lands_on_the_rejected_field_exactly_once() {
    let house = house();
    let mut editor = ReservationRulesEditor::new(&house);
    fill_required(&mut editor);
    let mut fields_map = IndexMap::new();
    fields_map.insert(fields::CAPACITY.to_string(), vec!["too low".to_string()]);
    let mut harness = Harness::new(
        &house,
        StubService::rejecting(hostdesk::Rejection {
            message: None,
            field_errors: fields_map,
        }),
    );

    let result = harness.submit(&mut editor);

    assert_eq!(result, SubmissionResult::Rejected);
    assert_eq!(
        editor.form().field_errors(fields::CAPACITY),
        ["too low".to_string()]
    );
    let occurrences = editor
        .error_list()
        .iter()
        .filter(|message| message.as_str() == "too low")
        .count();
    assert_eq!(occurrences, 1);
    assert!(editor.form().is_dirty());
    assert_eq!(harness.fetch.calls, 0);
}

#[test]
fn editing_a_field_clears_only_its_own_error() {
    let house = house();
    let mut editor = ReservationRulesEditor::new(&house);
    fill_required(&mut editor);
    editor.set_field(fields::CAPACITY, "");
    editor.set_field(fields::WEEKEND_TYPE, "");
    let mut harness = Harness::new(&house, StubService::succeeding());

    assert_eq!(harness.submit(&mut editor), SubmissionResult::Invalid);
    assert!(!editor.form().field_errors(fields::CAPACITY).is_empty());
    assert!(!editor.form().field_errors(fields::WEEKEND_TYPE).is_empty());

    editor.set_field(fields::CAPACITY, "5");

    assert!(editor.form().field_errors(fields::CAPACITY).is_empty());
    assert!(!editor.form().field_errors(fields::WEEKEND_TYPE).is_empty());
    assert!(editor.form().is_dirty());
}

#[test]
fn retry_after_rejection_succeeds() {
    let house = house();
    let mut editor = ReservationRulesEditor::new(&house);
    fill_required(&mut editor);
    let mut fields_map = IndexMap::new();
    fields_map.insert(fields::CAPACITY.to_string(), vec!["too low".to_string()]);
    let mut harness = Harness::new(
        &house,
        StubService::rejecting(hostdesk::Rejection {
            message: Some("validation failed".to_string()),
            field_errors: fields_map,
        }),
    );

    assert_eq!(harness.submit(&mut editor), SubmissionResult::Rejected);
    assert_eq!(harness.notifier.error_count(), 1);

    editor.set_field(fields::CAPACITY, "6");
    assert_eq!(harness.submit(&mut editor), SubmissionResult::Saved);
    assert_eq!(harness.service.updates.len(), 2);
    assert_eq!(harness.notifier.success_count(), 1);
}
