use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::appointment::models::AppointmentDetails;
use crate::domain::appointment::models::ProfessionalSummary;

pub mod book;
pub mod cancel;
pub mod get;
pub mod list;
pub mod reschedule;

/// Appointment as returned to clients, professional populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentData {
    pub id: String,
    pub client_id: String,
    pub professional: Option<ProfessionalData>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionalData {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&ProfessionalSummary> for ProfessionalData {
    fn from(professional: &ProfessionalSummary) -> Self {
        Self {
            id: professional.id.to_string(),
            name: professional.name.as_str().to_string(),
            email: professional.email.as_str().to_string(),
        }
    }
}

impl From<&AppointmentDetails> for AppointmentData {
    fn from(details: &AppointmentDetails) -> Self {
        let appointment = &details.appointment;
        Self {
            id: appointment.id.to_string(),
            client_id: appointment.client_id.to_string(),
            professional: details.professional.as_ref().map(ProfessionalData::from),
            date: appointment.date,
            created_at: appointment.created_at,
        }
    }
}
