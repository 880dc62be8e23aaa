use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Structured server rejection: an optional general message and field-scoped
/// error lists, in the backend's `{message?, errors: {fields?}}` shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rejection {
    pub message: Option<String>,
    pub field_errors: IndexMap<String, Vec<String>>,
}

impl Rejection {
    /// Parses a rejection out of an error-response body. Anything that does
    /// not match the structured shape degrades to an empty rejection, which
    /// the controller surfaces as the generic failure.
    pub fn from_body(body: Option<&Value>) -> Self {
        let Some(body) = body else {
            return Self::default();
        };
        let parsed: ErrorBody = serde_json::from_value(body.clone()).unwrap_or_default();
        Self {
            message: parsed.message,
            field_errors: parsed
                .errors
                .and_then(|errors| errors.fields)
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.field_errors.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<ErrorFields>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorFields {
    #[serde(default)]
    fields: Option<IndexMap<String, Vec<String>>>,
}

/// Tagged outcome of a mutation, making the reconciliation branches
/// exhaustive: a structured server rejection versus an opaque transport or
/// protocol failure.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("server rejected the mutation")]
    Rejected(Rejection),
    #[error("transport failure: {0}")]
    Transport(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_message_and_field_errors() {
        let body = json!({
            "message": "validation failed",
            "errors": { "fields": { "capacity": ["too low", "not a number"] } }
        });
        let rejection = Rejection::from_body(Some(&body));
        assert_eq!(rejection.message.as_deref(), Some("validation failed"));
        assert_eq!(
            rejection.field_errors["capacity"],
            vec!["too low", "not a number"]
        );
    }

    #[test]
    fn message_only_body_has_no_field_errors() {
        let body = json!({ "message": "house is locked" });
        let rejection = Rejection::from_body(Some(&body));
        assert_eq!(rejection.message.as_deref(), Some("house is locked"));
        assert!(rejection.field_errors.is_empty());
    }

    #[test]
    fn unstructured_body_degrades_to_empty() {
        assert!(Rejection::from_body(Some(&json!("teapot"))).is_empty());
        assert!(Rejection::from_body(None).is_empty());
    }
}
