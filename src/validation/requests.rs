//! Request and response schemas for the routes resource.
//!
//! Each inbound record is checked against its named schema (Collection,
//! Create, Update, Delete) with the `validator` derive before any store
//! access. `MessageResponse` is the shared Message schema returned by all
//! mutating operations.

use crate::storage::Route;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Paths must be absolute: a leading slash followed by URL path characters.
static PATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[A-Za-z0-9\-_~!\$&'\(\)\*\+,;=:@/%\.]*$").expect("valid regex"));

/// Controllers are accepted in dash display form; the already-internal
/// backslash form is tolerated since the transform is idempotent.
static CONTROLLER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+(?:[-\\][A-Za-z0-9_]+)*$").expect("valid regex"));

const KNOWN_METHODS: &[&str] =
    &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE"];

fn validate_methods(methods: &[String]) -> Result<(), ValidationError> {
    if methods.is_empty() {
        return Err(ValidationError::new("methods")
            .with_message("At least one HTTP method is required".into()));
    }

    for method in methods {
        if !KNOWN_METHODS.contains(&method.as_str()) {
            return Err(ValidationError::new("methods")
                .with_message(format!("Unknown HTTP method '{}'", method).into()));
        }
    }

    Ok(())
}

/// Collection schema: query parameters accepted by the listing operation.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteCollectionQuery {
    /// Zero-based offset into the result set.
    pub start_index: u64,

    /// Substring filter on route paths; empty means unfiltered.
    pub search: Option<String>,
}

/// Create schema: body of the create operation. The id is never accepted
/// here, the store assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRouteBody {
    #[validate(custom(function = "validate_methods"))]
    pub methods: Vec<String>,

    #[validate(regex(path = *PATH_PATTERN, message = "Path must start with '/'"))]
    pub path: String,

    #[validate(regex(path = *CONTROLLER_PATTERN, message = "Invalid controller name"))]
    pub controller: String,

    #[schema(value_type = Object)]
    pub config: serde_json::Value,
}

/// Update schema: full replacement of the mutable fields, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRouteBody {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,

    #[validate(custom(function = "validate_methods"))]
    pub methods: Vec<String>,

    #[validate(regex(path = *PATH_PATTERN, message = "Path must start with '/'"))]
    pub path: String,

    #[validate(regex(path = *CONTROLLER_PATTERN, message = "Invalid controller name"))]
    pub controller: String,

    #[schema(value_type = Object)]
    pub config: serde_json::Value,
}

/// Delete schema: only the id of the row to remove.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteRouteBody {
    #[validate(range(min = 1, message = "Id must be a positive integer"))]
    pub id: i64,
}

/// Message schema: the uniform response shape of every mutating operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self { success: true, message: message.into() }
    }
}

/// Listing response: total count, echoed offset, and the page of entries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteCollection {
    pub total_items: i64,
    pub start_index: u64,
    pub entry: Vec<Route>,
}
