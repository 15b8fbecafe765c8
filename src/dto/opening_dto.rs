use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{param_is_required, Error, Result};
use crate::models::opening::{NewOpening, Opening};

pub const TAG_CREATE_OPENING: &str = "create-opening";
pub const TAG_OPENING_FOUND: &str = "opening-found";
pub const TAG_OPENINGS_FOUND: &str = "openings-found";
pub const TAG_UPDATE_OPENING: &str = "update-opening";
pub const TAG_DELETED_OPENING: &str = "deleted-opening";

/// Body of `POST /openings`. Every field is optional at the wire level so that
/// a missing field surfaces as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOpeningPayload {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub link: Option<String>,
    pub salary: Option<f64>,
}

impl CreateOpeningPayload {
    /// Reports the first missing or invalid field. The checking order is
    /// role, company, location, link, remote, salary.
    pub fn validate(&self) -> Result<()> {
        if text(&self.role).is_none() {
            return Err(required("role", "string"));
        }
        if text(&self.company).is_none() {
            return Err(required("company", "string"));
        }
        if text(&self.location).is_none() {
            return Err(required("location", "string"));
        }
        if text(&self.link).is_none() {
            return Err(required("link", "string"));
        }
        if self.remote.is_none() {
            return Err(required("remote", "boolean"));
        }
        if positive(self.salary).is_none() {
            return Err(required("salary", "number"));
        }
        Ok(())
    }

    pub fn into_new_opening(self) -> Result<NewOpening> {
        self.validate()?;
        Ok(NewOpening {
            role: self.role.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            remote: self.remote.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            salary: self.salary.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /openings`. Empty strings and non-positive salaries count as
/// absent, so an update can never blank a field or set a salary to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOpeningPayload {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub remote: Option<bool>,
    pub link: Option<String>,
    pub salary: Option<f64>,
}

impl UpdateOpeningPayload {
    pub fn validate(&self) -> Result<()> {
        let any_present = text(&self.role).is_some()
            || text(&self.company).is_some()
            || text(&self.location).is_some()
            || self.remote.is_some()
            || text(&self.link).is_some()
            || positive(self.salary).is_some();

        if any_present {
            Ok(())
        } else {
            Err(Error::Validation(
                "at least one valid field must be provided".to_string(),
            ))
        }
    }

    /// Overwrites the fields of `opening` that this payload carries.
    pub fn apply_to(&self, opening: &mut Opening) {
        if let Some(role) = text(&self.role) {
            opening.role = role.to_string();
        }
        if let Some(company) = text(&self.company) {
            opening.company = company.to_string();
        }
        if let Some(location) = text(&self.location) {
            opening.location = location.to_string();
        }
        if let Some(remote) = self.remote {
            opening.remote = remote;
        }
        if let Some(link) = text(&self.link) {
            opening.link = link.to_string();
        }
        if let Some(salary) = positive(self.salary) {
            opening.salary = salary;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct OpeningIdQuery {
    /// Opening ID
    pub id: Option<String>,
}

impl OpeningIdQuery {
    pub fn require_id(&self) -> Result<i64> {
        let raw = match self.id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                return Err(Error::MissingParameter(param_is_required(
                    "id",
                    "queryParameter",
                )))
            }
        };
        raw.parse().map_err(|_| {
            Error::BadRequest(format!("param id (type: integer) is invalid: {}", raw))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpeningResponse {
    pub message: String,
    pub data: Opening,
}

impl OpeningResponse {
    pub fn new(operation: &str, data: Opening) -> Self {
        Self {
            message: handler_message(operation),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpeningListResponse {
    pub message: String,
    pub data: Vec<Opening>,
}

impl OpeningListResponse {
    pub fn new(operation: &str, data: Vec<Opening>) -> Self {
        Self {
            message: handler_message(operation),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn handler_message(operation: &str) -> String {
    format!("operation from handler: {} successful", operation)
}

fn required(name: &str, typ: &str) -> Error {
    Error::Validation(param_is_required(name, typ))
}

fn text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}
