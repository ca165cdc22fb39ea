use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use super::errors::AppointmentError;
use super::models::Appointment;
use super::models::AppointmentDetails;
use super::models::AppointmentId;
use super::models::BookAppointmentCommand;
use super::models::RescheduleAppointmentCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Port for appointment domain service operations.
///
/// Every operation is scoped by the caller's identity. Appointments the caller
/// does not take part in are reported as `NotFound`.
#[async_trait]
pub trait AppointmentServicePort: Send + Sync + 'static {
    /// Book an appointment for `client_id`.
    ///
    /// # Errors
    /// * `ProfessionalNotFound` - Target is missing or not a professional
    /// * `DatabaseError` - Database operation failed
    async fn book(
        &self,
        client_id: UserId,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentDetails, AppointmentError>;

    /// List the caller's appointments ordered by date, earliest first.
    ///
    /// Clients see what they booked. Professionals additionally see what was
    /// booked with them.
    async fn list(
        &self,
        user_id: UserId,
        role: Role,
    ) -> Result<Vec<AppointmentDetails>, AppointmentError>;

    /// Retrieve one appointment the caller takes part in.
    ///
    /// # Errors
    /// * `NotFound` - Missing, or caller is not a participant
    async fn get(
        &self,
        user_id: UserId,
        id: AppointmentId,
    ) -> Result<AppointmentDetails, AppointmentError>;

    /// Move an appointment to a new date.
    ///
    /// # Errors
    /// * `NotFound` - Missing, or caller is not a participant
    async fn reschedule(
        &self,
        user_id: UserId,
        id: AppointmentId,
        command: RescheduleAppointmentCommand,
    ) -> Result<AppointmentDetails, AppointmentError>;

    /// Delete an appointment.
    ///
    /// # Errors
    /// * `NotFound` - Missing, or caller is not a participant
    async fn cancel(&self, user_id: UserId, id: AppointmentId) -> Result<(), AppointmentError>;
}

/// Persistence operations for appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync + 'static {
    /// Persist a new appointment.
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError>;

    /// Retrieve appointment by identifier.
    ///
    /// # Returns
    /// Optional appointment (None if not found)
    async fn find_by_id(&self, id: AppointmentId)
        -> Result<Option<Appointment>, AppointmentError>;

    /// Appointments booked by a client, ordered by date ascending.
    async fn find_by_client(&self, client_id: UserId)
        -> Result<Vec<Appointment>, AppointmentError>;

    /// Appointments booked with a professional, ordered by date ascending.
    async fn find_by_professional(
        &self,
        professional_id: UserId,
    ) -> Result<Vec<Appointment>, AppointmentError>;

    /// Set a new date on an existing appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    async fn update_date(
        &self,
        id: AppointmentId,
        date: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError>;

    /// Remove an appointment.
    ///
    /// # Errors
    /// * `NotFound` - Appointment does not exist
    async fn delete(&self, id: AppointmentId) -> Result<(), AppointmentError>;
}
