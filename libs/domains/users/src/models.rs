use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// OpenAPI tag shared by every user management route.
pub const TAG: &str = "users";

/// A stored user.
///
/// `id` and `created_at` are assigned by the repository and never change.
/// `updated_at` stays `null` until the first successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sequential identifier, never reused
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "Ann Smith")]
    pub name: String,
    /// Email address, unique ignoring case
    #[schema(example = "ann@example.com")]
    pub email: String,
    /// Department the user belongs to
    #[schema(example = "Engineering")]
    pub department: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a new user from a validated request. The repository supplies the id.
    pub fn new(id: i64, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            department: input.department,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply every present, non-blank field and stamp `updated_at`.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name.filter(|v| !v.trim().is_empty()) {
            self.name = name;
        }
        if let Some(email) = update.email.filter(|v| !v.trim().is_empty()) {
            self.email = email;
        }
        if let Some(department) = update.department.filter(|v| !v.trim().is_empty()) {
            self.department = department;
        }
        self.updated_at = Some(Utc::now());
    }

    /// Case-insensitive email comparison used for the uniqueness rule.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// DTO for creating a new user.
///
/// Missing and `null` fields deserialize as empty strings so they are reported
/// by the validation rules with a field-level message instead of a JSON error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateUser {
    #[validate(
        custom(function = "name_present"),
        length(min = 2, max = 100, message = "Name must be between 2 and 100 characters")
    )]
    #[schema(example = "Ann Smith", min_length = 2, max_length = 100)]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[validate(
        custom(function = "email_present"),
        email(message = "Invalid email format")
    )]
    #[schema(example = "ann@example.com")]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[validate(custom(function = "department_present"))]
    #[schema(example = "Engineering")]
    #[serde(deserialize_with = "null_as_empty")]
    pub department: String,
}

/// DTO for updating an existing user.
///
/// Absent, `null`, empty and whitespace-only fields all deserialize to `None`
/// and leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[schema(example = "Ann Smith", min_length = 2, max_length = 100)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ann@example.com")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(example = "Operations")]
    pub department: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn name_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Name is required")
}

fn email_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Email is required")
}

fn department_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Department is required")
}
