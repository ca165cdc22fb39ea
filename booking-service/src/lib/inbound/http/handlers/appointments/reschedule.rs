use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::AppointmentData;
use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::models::RescheduleAppointmentCommand;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn reschedule_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(appointment_id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<RescheduleAppointmentRequest>, ApiError>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&appointment_id).map_err(AppointmentError::from)?;
    let command = RescheduleAppointmentCommand::parse(&body.date)?;

    state
        .appointment_service
        .reschedule(identity.user_id, appointment_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RescheduleAppointmentRequest {
    #[serde(default)]
    date: String,
}
