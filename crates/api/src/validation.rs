//! Validation gate: declarative per-field rules over request input.
//!
//! Every declared rule is evaluated (no short-circuit) and each failure adds
//! one entry, in declaration order. A missing field is checked as `""`.

use async_trait::async_trait;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use validator::ValidateEmail;

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Check {
    Email,
    MinLength(usize),
    NotEmpty,
}

impl Check {
    fn passes(self, value: &str) -> bool {
        match self {
            Check::Email => value.validate_email(),
            Check::MinLength(min) => value.chars().count() >= min,
            Check::NotEmpty => !value.is_empty(),
        }
    }

    fn message(self) -> String {
        match self {
            Check::Email => "must be a valid email address".to_string(),
            Check::MinLength(min) => format!("must be at least {min} characters long"),
            Check::NotEmpty => "must not be empty".to_string(),
        }
    }
}

#[derive(Debug)]
struct Rule<'a> {
    field: &'static str,
    value: &'a str,
    check: Check,
}

/// Ordered rule set, built per request.
#[derive(Debug, Default)]
pub struct Rules<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> Rules<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(self, field: &'static str, value: Option<&'a str>) -> Self {
        self.push(field, value, Check::Email)
    }

    pub fn min_length(self, field: &'static str, value: Option<&'a str>, min: usize) -> Self {
        self.push(field, value, Check::MinLength(min))
    }

    pub fn not_empty(self, field: &'static str, value: Option<&'a str>) -> Self {
        self.push(field, value, Check::NotEmpty)
    }

    fn push(mut self, field: &'static str, value: Option<&'a str>, check: Check) -> Self {
        self.rules.push(Rule {
            field,
            value: value.unwrap_or_default(),
            check,
        });
        self
    }

    pub fn violations(&self) -> Vec<FieldViolation> {
        self.rules
            .iter()
            .filter(|rule| !rule.check.passes(rule.value))
            .map(|rule| FieldViolation::new(rule.field, rule.check.message()))
            .collect()
    }
}

/// Request input that declares its own validation rules.
pub trait Validate {
    fn rules(&self) -> Rules<'_>;
}

/// 400 response carrying every violation: `{"errors": [{field, message}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRejection {
    pub errors: Vec<FieldViolation>,
}

impl ValidationRejection {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldViolation::new(field, message)],
        }
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

fn check<T: Validate>(value: T) -> Result<T, ValidationRejection> {
    let errors = value.rules().violations();
    if errors.is_empty() {
        Ok(value)
    } else {
        tracing::debug!(violations = errors.len(), "request failed validation");
        Err(ValidationRejection { errors })
    }
}

/// JSON body that passed its [`Validate`] rules.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ValidationRejection::single("body", e.body_text()))?;
        check(value).map(ValidatedJson)
    }
}

/// Query string that passed its [`Validate`] rules.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationRejection::single("query", e.body_text()))?;
        check(value).map(ValidatedQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn passing_rules_produce_no_violations() {
        let rules = Rules::new()
            .email("email", Some("a@b.com"))
            .min_length("password", Some("secret"), 6)
            .not_empty("firstName", Some("A"));
        assert!(rules.violations().is_empty());
    }

    #[test]
    fn every_rule_is_evaluated_in_declaration_order() {
        let rules = Rules::new()
            .email("email", Some("not-an-email"))
            .min_length("password", Some("12345"), 6)
            .not_empty("firstName", None)
            .not_empty("lastName", Some(""));

        let violations = rules.violations();
        assert_eq!(fields(&violations), vec!["email", "password", "firstName", "lastName"]);
        assert_eq!(violations[1].message, "must be at least 6 characters long");
    }

    #[test]
    fn missing_values_fail_every_rule_on_the_field() {
        let rules = Rules::new()
            .email("email", None)
            .not_empty("email", None);
        assert_eq!(fields(&rules.violations()), vec!["email", "email"]);
    }

    #[test]
    fn min_length_counts_characters() {
        assert!(Check::MinLength(6).passes("pässwd"));
        assert!(!Check::MinLength(6).passes("päss"));
    }

    #[test]
    fn not_empty_does_not_trim() {
        assert!(Check::NotEmpty.passes(" "));
        assert!(!Check::NotEmpty.passes(""));
    }
}
