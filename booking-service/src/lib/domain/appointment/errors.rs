use thiserror::Error;

use crate::domain::appointment::models::AppointmentId;
use crate::domain::errors::ValidationErrors;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;

/// Error type for AppointmentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppointmentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error type for all appointment-related operations
#[derive(Debug, Clone, Error)]
pub enum AppointmentError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid appointment ID: {0}")]
    InvalidAppointmentId(#[from] AppointmentIdError),

    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    #[error("Professional not found: {0}")]
    ProfessionalNotFound(UserId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for AppointmentError {
    fn from(err: UserError) -> Self {
        AppointmentError::DatabaseError(err.to_string())
    }
}
