use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    NotFound,
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(e) => storage_status(e),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Storage(e) => match e {
                StorageError::NotFound => json!({
                    "error": "Resource not found"
                }),
                StorageError::ConstraintViolation(_)
                | StorageError::InvalidTransition { .. }
                | StorageError::InvalidState(_)
                | StorageError::WindowClosed
                | StorageError::EventFull
                | StorageError::InvalidClass
                | StorageError::VehicleRequired => json!({
                    "error": e.to_string()
                }),
                _ => {
                    tracing::error!("Storage error: {:?}", e);
                    json!({
                        "error": "An internal error occurred"
                    })
                }
            },
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
            Self::Forbidden(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::NotFound => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "error": "An internal error occurred"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Lifecycle and uniqueness violations are conflicts; malformed domain
/// input is a bad request; anything unexpected stays a 500.
fn storage_status(error: &StorageError) -> StatusCode {
    match error {
        StorageError::NotFound => StatusCode::NOT_FOUND,
        StorageError::ConstraintViolation(_)
        | StorageError::InvalidTransition { .. }
        | StorageError::InvalidState(_)
        | StorageError::WindowClosed
        | StorageError::EventFull => StatusCode::CONFLICT,
        StorageError::InvalidClass | StorageError::VehicleRequired => StatusCode::BAD_REQUEST,
        StorageError::Database(_) | StorageError::Migration(_) | StorageError::InvalidValue { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_violations_are_conflicts() {
        let err = StorageError::InvalidTransition {
            action: "approve",
            from: "DRAFT".to_string(),
            required: "SUBMITTED",
        };
        assert_eq!(storage_status(&err), StatusCode::CONFLICT);
        assert_eq!(storage_status(&StorageError::WindowClosed), StatusCode::CONFLICT);
        assert_eq!(storage_status(&StorageError::EventFull), StatusCode::CONFLICT);
    }

    #[test]
    fn test_domain_input_errors_are_bad_requests() {
        assert_eq!(storage_status(&StorageError::InvalidClass), StatusCode::BAD_REQUEST);
        assert_eq!(
            storage_status(&StorageError::VehicleRequired),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_and_conflict() {
        assert_eq!(storage_status(&StorageError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            storage_status(&StorageError::ConstraintViolation(String::from("dup"))),
            StatusCode::CONFLICT
        );
    }
}
