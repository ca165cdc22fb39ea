use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::appointment::errors::AppointmentError;
use crate::domain::appointment::models::AppointmentId;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn cancel_appointment(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(appointment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let appointment_id =
        AppointmentId::from_string(&appointment_id).map_err(AppointmentError::from)?;

    state
        .appointment_service
        .cancel(identity.user_id, appointment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
