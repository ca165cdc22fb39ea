use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::AppointmentData;
use crate::domain::appointment::ports::AppointmentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<AppointmentData>>, ApiError> {
    let appointments = state
        .appointment_service
        .list(identity.user_id, identity.role)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        appointments.iter().map(AppointmentData::from).collect(),
    ))
}
