use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::AppointmentError;
use super::models::Appointment;
use super::models::AppointmentDetails;
use super::models::AppointmentId;
use super::models::BookAppointmentCommand;
use super::models::ProfessionalSummary;
use super::models::RescheduleAppointmentCommand;
use super::ports::AppointmentRepository;
use super::ports::AppointmentServicePort;
use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Concrete implementation of AppointmentServicePort.
///
/// Reads users only to validate and populate the professional side of a booking.
pub struct AppointmentService<AR, UR>
where
    AR: AppointmentRepository,
    UR: UserRepository,
{
    appointment_repository: Arc<AR>,
    user_repository: Arc<UR>,
}

impl<AR, UR> AppointmentService<AR, UR>
where
    AR: AppointmentRepository,
    UR: UserRepository,
{
    pub fn new(appointment_repository: Arc<AR>, user_repository: Arc<UR>) -> Self {
        Self {
            appointment_repository,
            user_repository,
        }
    }

    async fn find_for_participant(
        &self,
        user_id: UserId,
        id: AppointmentId,
    ) -> Result<Appointment, AppointmentError> {
        self.appointment_repository
            .find_by_id(id)
            .await?
            .filter(|appointment| appointment.is_participant(&user_id))
            .ok_or(AppointmentError::NotFound(id))
    }

    async fn with_professional(
        &self,
        appointment: Appointment,
    ) -> Result<AppointmentDetails, AppointmentError> {
        let professional = self
            .user_repository
            .find_by_id(&appointment.professional_id)
            .await?;

        Ok(AppointmentDetails {
            professional: professional.as_ref().map(ProfessionalSummary::from),
            appointment,
        })
    }
}

#[async_trait]
impl<AR, UR> AppointmentServicePort for AppointmentService<AR, UR>
where
    AR: AppointmentRepository,
    UR: UserRepository,
{
    async fn book(
        &self,
        client_id: UserId,
        command: BookAppointmentCommand,
    ) -> Result<AppointmentDetails, AppointmentError> {
        let professional = self
            .user_repository
            .find_by_id(&command.professional_id)
            .await?
            .filter(|user| user.role == Role::Professional)
            .ok_or(AppointmentError::ProfessionalNotFound(
                command.professional_id,
            ))?;

        let appointment = Appointment {
            id: AppointmentId::new(),
            client_id,
            professional_id: professional.id,
            date: command.date,
            created_at: Utc::now(),
        };

        let created = self.appointment_repository.create(appointment).await?;

        tracing::info!(
            appointment_id = %created.id,
            client_id = %created.client_id,
            professional_id = %created.professional_id,
            "Appointment booked"
        );

        Ok(AppointmentDetails {
            appointment: created,
            professional: Some(ProfessionalSummary::from(&professional)),
        })
    }

    async fn list(
        &self,
        user_id: UserId,
        role: Role,
    ) -> Result<Vec<AppointmentDetails>, AppointmentError> {
        let mut appointments = self.appointment_repository.find_by_client(user_id).await?;
        // Professionals may also book other professionals.
        if role == Role::Professional {
            let booked_with = self
                .appointment_repository
                .find_by_professional(user_id)
                .await?;
            let seen: HashSet<AppointmentId> = appointments.iter().map(|a| a.id).collect();
            appointments.extend(booked_with.into_iter().filter(|a| !seen.contains(&a.id)));
        }

        let mut professional_ids: Vec<UserId> =
            appointments.iter().map(|a| a.professional_id).collect();
        professional_ids.sort_by_key(|id| id.0);
        professional_ids.dedup();

        let professionals: HashMap<UserId, ProfessionalSummary> = self
            .user_repository
            .find_by_ids(&professional_ids)
            .await?
            .iter()
            .map(|user| (user.id, ProfessionalSummary::from(user)))
            .collect();

        let mut details: Vec<AppointmentDetails> = appointments
            .into_iter()
            .map(|appointment| AppointmentDetails {
                professional: professionals.get(&appointment.professional_id).cloned(),
                appointment,
            })
            .collect();
        details.sort_by_key(|d| d.appointment.date);

        Ok(details)
    }

    async fn get(
        &self,
        user_id: UserId,
        id: AppointmentId,
    ) -> Result<AppointmentDetails, AppointmentError> {
        let appointment = self.find_for_participant(user_id, id).await?;
        self.with_professional(appointment).await
    }

    async fn reschedule(
        &self,
        user_id: UserId,
        id: AppointmentId,
        command: RescheduleAppointmentCommand,
    ) -> Result<AppointmentDetails, AppointmentError> {
        self.find_for_participant(user_id, id).await?;

        let updated = self
            .appointment_repository
            .update_date(id, command.date)
            .await?;

        tracing::info!(appointment_id = %id, date = %updated.date, "Appointment rescheduled");

        self.with_professional(updated).await
    }

    async fn cancel(&self, user_id: UserId, id: AppointmentId) -> Result<(), AppointmentError> {
        self.find_for_participant(user_id, id).await?;
        self.appointment_repository.delete(id).await?;

        tracing::info!(appointment_id = %id, "Appointment cancelled");

        Ok(())
    }
}
