use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::Appointment;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::ports::AppointmentRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAppointmentRepository {
    pool: PgPool,
}

impl PostgresAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_appointment(row: &PgRow) -> Appointment {
        Appointment {
            id: AppointmentId(row.get("id")),
            client_id: UserId(row.get("client_id")),
            professional_id: UserId(row.get("professional_id")),
            date: row.get("date"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        sqlx::query(
            r#"
            INSERT INTO appointments (id, client_id, professional_id, date, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(appointment.id.0)
        .bind(appointment.client_id.0)
        .bind(appointment.professional_id.0)
        .bind(appointment.date)
        .bind(appointment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("appointments_professional_id_fkey")
                {
                    return AppointmentError::ProfessionalNotFound(appointment.professional_id);
                }
            }
            AppointmentError::DatabaseError(e.to_string())
        })?;

        Ok(appointment)
    }

    async fn find_by_id(
        &self,
        id: AppointmentId,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let row = sqlx::query(
            r#"
            SELECT id, client_id, professional_id, date, created_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Ok(row.as_ref().map(Self::row_to_appointment))
    }

    async fn find_by_client(
        &self,
        client_id: UserId,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_id, professional_id, date, created_at
            FROM appointments
            WHERE client_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(client_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_appointment).collect())
    }

    async fn find_by_professional(
        &self,
        professional_id: UserId,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_id, professional_id, date, created_at
            FROM appointments
            WHERE professional_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(professional_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(Self::row_to_appointment).collect())
    }

    async fn update_date(
        &self,
        id: AppointmentId,
        date: DateTime<Utc>,
    ) -> Result<Appointment, AppointmentError> {
        let row = sqlx::query(
            r#"
            UPDATE appointments
            SET date = $2
            WHERE id = $1
            RETURNING id, client_id, professional_id, date, created_at
            "#,
        )
        .bind(id.0)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(Self::row_to_appointment)
            .ok_or(AppointmentError::NotFound(id))
    }

    async fn delete(&self, id: AppointmentId) -> Result<(), AppointmentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppointmentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppointmentError::NotFound(id));
        }

        Ok(())
    }
}
