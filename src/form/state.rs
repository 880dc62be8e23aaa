use indexmap::IndexMap;
use serde_json::Value;

/// Field name mapped to an ordered list of human-readable messages.
pub type ValidationErrors = IndexMap<String, Vec<String>>;

/// Editable snapshot of one entity-edit screen: an ordered field map seeded
/// from the persisted entity, plus per-field errors and a dirty flag.
///
/// Values are JSON so a field may hold a nested per-key substructure (the
/// weekday minimum-stay map); everything the user types stays a string until
/// the backend interprets it. The state lives and dies with a single editor
/// instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: IndexMap<String, Value>,
    errors: ValidationErrors,
    dirty: bool,
}

impl FormState {
    pub fn seed(fields: IndexMap<String, Value>) -> Self {
        Self {
            fields,
            errors: ValidationErrors::new(),
            dirty: false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The field as user-visible text; absent and non-string values read as "".
    pub fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn nested_text(&self, field: &str, key: &str) -> &str {
        self.fields
            .get(field)
            .and_then(|value| value.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Replaces one field, clears exactly that field's errors, marks dirty.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
        self.errors.shift_remove(field);
        self.dirty = true;
    }

    /// Replaces one key inside a nested map field. Errors are scoped to the
    /// parent field, so the whole parent's errors clear on any key edit.
    pub fn set_nested(&mut self, field: &str, key: &str, value: impl Into<Value>) {
        let entry = self
            .fields
            .entry(field.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(serde_json::Map::new());
        }
        if let Value::Object(map) = entry {
            map.insert(key.to_string(), value.into());
        }
        self.errors.shift_remove(field);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn replace_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// The full field map as one JSON object, ready for the mutation payload.
    pub fn to_payload(&self) -> Value {
        let mut object = serde_json::Map::with_capacity(self.fields.len());
        for (field, value) in &self.fields {
            object.insert(field.clone(), value.clone());
        }
        Value::Object(object)
    }
}
