use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::AppointmentData;
use crate::domain::appointment::models::BookAppointmentCommand;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn book_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    WithRejection(Json(body), _): WithRejection<Json<BookAppointmentRequest>, ApiError>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let command = BookAppointmentCommand::parse(&body.professional_id, &body.date)?;

    state
        .appointment_service
        .book(identity.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::CREATED, details.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(default)]
    professional_id: String,
    #[serde(default)]
    date: String,
}
