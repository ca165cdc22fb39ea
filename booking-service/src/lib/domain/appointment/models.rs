use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::appointment::errors::AppointmentIdError;
use crate::domain::errors::ValidationErrors;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;

/// Appointment unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    /// Generate a new random appointment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an appointment ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AppointmentIdError> {
        Uuid::parse_str(s)
            .map(AppointmentId)
            .map_err(|e| AppointmentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A booking of a professional by a client at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub client_id: UserId,
    pub professional_id: UserId,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether `user_id` is the client or the professional of this appointment.
    pub fn is_participant(&self, user_id: &UserId) -> bool {
        self.client_id == *user_id || self.professional_id == *user_id
    }
}

/// Public summary of the professional attached to an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionalSummary {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
}

impl From<&User> for ProfessionalSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Appointment with its professional populated.
///
/// `professional` is `None` when the professional's account no longer exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub professional: Option<ProfessionalSummary>,
}

/// Command to book an appointment with a professional.
#[derive(Debug)]
pub struct BookAppointmentCommand {
    pub professional_id: UserId,
    pub date: DateTime<Utc>,
}

impl BookAppointmentCommand {
    /// Validate raw booking input: a UUID professional id and an RFC 3339 date.
    pub fn parse(professional_id: &str, date: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let professional_id = errors.check("professional_id", UserId::from_string(professional_id));
        let date = errors.check("date", parse_date(date));

        match (professional_id, date) {
            (Some(professional_id), Some(date)) => Ok(Self {
                professional_id,
                date,
            }),
            _ => Err(errors),
        }
    }
}

/// Command to move an appointment to a new date.
#[derive(Debug)]
pub struct RescheduleAppointmentCommand {
    pub date: DateTime<Utc>,
}

impl RescheduleAppointmentCommand {
    pub fn parse(date: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match errors.check("date", parse_date(date)) {
            Some(date) => Ok(Self { date }),
            None => Err(errors),
        }
    }
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| format!("Invalid date (expected RFC 3339): {}", e))
}
