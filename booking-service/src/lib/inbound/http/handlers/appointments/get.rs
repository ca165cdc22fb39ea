use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AppointmentData;
use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(appointment_id): Path<String>,
) -> Result<ApiSuccess<AppointmentData>, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&appointment_id).map_err(AppointmentError::from)?;

    state
        .appointment_service
        .get(identity.user_id, appointment_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
