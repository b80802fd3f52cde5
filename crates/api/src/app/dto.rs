use serde::{Deserialize, Serialize};

use crate::validation::{Rules, Validate};

// -------------------------
// Request DTOs
// -------------------------

/// Fields are optional so that absent ones reach the validation rules
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

impl Validate for RegisterRequest {
    fn rules(&self) -> Rules<'_> {
        Rules::new()
            .email("email", self.email.as_deref())
            .min_length("password", self.password.as_deref(), 6)
            .not_empty("firstName", self.first_name.as_deref())
            .not_empty("lastName", self.last_name.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for LoginRequest {
    fn rules(&self) -> Rules<'_> {
        Rules::new()
            .not_empty("email", self.email.as_deref())
            .not_empty("password", self.password.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteUserQuery {
    pub id: Option<String>,
}

impl Validate for DeleteUserQuery {
    fn rules(&self) -> Rules<'_> {
        Rules::new().not_empty("id", self.id.as_deref())
    }
}

/// Borrow a validated field (absent fields never get past the rules).
pub fn field(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_reads_camel_case_and_tolerates_missing_fields() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"email":"a@b.com","firstName":"A"}"#).unwrap();
        assert_eq!(req.first_name.as_deref(), Some("A"));
        assert_eq!(req.last_name, None);

        let fields: Vec<_> = req.rules().violations().into_iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["password", "lastName"]);
    }

    #[test]
    fn login_request_requires_both_fields() {
        let req = LoginRequest::default();
        assert_eq!(req.rules().violations().len(), 2);
    }
}
