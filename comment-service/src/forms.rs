/// Submission form for new comments.
///
/// A transient validation wrapper around the posted payload: bound from the
/// request body, validated, rendered back into the response as the `form`
/// context, and discarded. Never persisted.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommentForm {
    /// Comment text. Absent fields bind as empty so they surface as a
    /// validation error on this field rather than a deserialization failure.
    #[serde(default)]
    #[validate(length(min = 1, message = "this field is required"))]
    pub text: String,
}

impl CommentForm {
    /// An unbound form, as rendered on GET.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Field-level validation errors, keyed by field name.
    pub fn errors(&self) -> BTreeMap<String, Vec<String>> {
        match self.validate() {
            Ok(()) => BTreeMap::new(),
            Err(errors) => errors
                .field_errors()
                .iter()
                .map(|(field, field_errors)| {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    (field.to_string(), messages)
                })
                .collect(),
        }
    }

    /// The form rendered as a response context: bound data plus errors.
    pub fn context(&self) -> FormContext<'_> {
        FormContext {
            data: self,
            errors: self.errors(),
        }
    }
}

/// Serialized shape of a form in a response body.
#[derive(Debug, Serialize)]
pub struct FormContext<'a> {
    pub data: &'a CommentForm,
    pub errors: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_is_valid() {
        let form = CommentForm { text: "Hey".into() };
        assert!(form.is_valid());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn empty_text_reports_error_keyed_text() {
        let form = CommentForm::empty();
        assert!(!form.is_valid());

        let errors = form.errors();
        assert_eq!(
            errors.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["text"]
        );
        assert!(!errors["text"].is_empty());
    }

    #[test]
    fn absent_text_field_binds_as_empty() {
        let form: CommentForm = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(form.text, "");
        assert!(!form.is_valid());
    }

    #[test]
    fn context_carries_data_and_errors() {
        let form = CommentForm::empty();
        let rendered = serde_json::to_value(form.context()).unwrap();

        assert_eq!(rendered["data"]["text"], "");
        assert!(rendered["errors"]["text"].is_array());
    }
}
