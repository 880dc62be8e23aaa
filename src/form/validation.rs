use serde_json::Value;

use super::state::{FormState, ValidationErrors};

/// Client-side validation rules for one editor: a fixed set of required
/// fields, plus an opt-in cross-field check that the maximum capacity is not
/// below the standard one. The cross-field check defaults off; whether the
/// backend owns that rule is an open point, so callers choose.
#[derive(Debug, Clone, Default)]
pub struct ValidationPolicy {
    required: Vec<RequiredField>,
    capacity_order: Option<CapacityOrder>,
}

#[derive(Debug, Clone)]
struct RequiredField {
    field: String,
    message: String,
}

#[derive(Debug, Clone)]
struct CapacityOrder {
    standard_field: String,
    maximum_field: String,
    message: String,
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.required.push(RequiredField {
            field: field.into(),
            message: message.into(),
        });
        self
    }

    pub fn enforce_capacity_order(
        mut self,
        standard_field: impl Into<String>,
        maximum_field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.capacity_order = Some(CapacityOrder {
            standard_field: standard_field.into(),
            maximum_field: maximum_field.into(),
            message: message.into(),
        });
        self
    }

    /// Runs synchronously over the form; an empty result means valid.
    pub fn validate(&self, state: &FormState) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for rule in &self.required {
            if is_blank(state.get(&rule.field)) {
                errors
                    .entry(rule.field.clone())
                    .or_default()
                    .push(rule.message.clone());
            }
        }
        if let Some(order) = &self.capacity_order {
            let standard = numeric(state.get(&order.standard_field));
            let maximum = numeric(state.get(&order.maximum_field));
            if let (Some(standard), Some(maximum)) = (standard, maximum)
                && maximum < standard
            {
                errors
                    .entry(order.maximum_field.clone())
                    .or_default()
                    .push(order.message.clone());
            }
        }
        errors
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

// Unparsable text is left to the required check; the order check only fires
// when both sides are numbers.
fn numeric(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;

    fn state(capacity: &str, maximum: &str) -> FormState {
        let mut fields = IndexMap::new();
        fields.insert("capacity".to_string(), json!(capacity));
        fields.insert("maximum_capacity".to_string(), json!(maximum));
        FormState::seed(fields)
    }

    fn policy() -> ValidationPolicy {
        ValidationPolicy::new()
            .require("capacity", "enter the standard capacity")
            .require("maximum_capacity", "enter the maximum capacity")
    }

    #[test]
    fn empty_required_field_fails_with_its_own_message() {
        let errors = policy().validate(&state("", "8"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["capacity"], vec!["enter the standard capacity"]);
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let errors = policy().validate(&state("  ", "8"));
        assert!(errors.contains_key("capacity"));
    }

    #[test]
    fn capacity_order_is_not_checked_by_default() {
        let errors = policy().validate(&state("10", "2"));
        assert!(errors.is_empty());
    }

    #[test]
    fn capacity_order_fails_on_the_maximum_field_when_opted_in() {
        let errors = policy()
            .enforce_capacity_order("capacity", "maximum_capacity", "maximum below standard")
            .validate(&state("10", "2"));
        assert_eq!(errors["maximum_capacity"], vec!["maximum below standard"]);
    }

    #[test]
    fn capacity_order_skips_unparsable_values() {
        let errors = policy()
            .enforce_capacity_order("capacity", "maximum_capacity", "maximum below standard")
            .validate(&state("ten", "2"));
        assert!(errors.is_empty());
    }
}
