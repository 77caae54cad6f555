use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::{
    AppState, handlers,
    models::{assignment::StudyPlanResult, common::ErrorMessage},
};

#[utoipa::path(
    post,
    path = "/generate-plan",
    tag = "plans",
    request_body = crate::models::assignment::GeneratePlanRequest,
    responses(
        (status = 200, description = "One study plan per assignment, in input order", body = [StudyPlanResult]),
        (status = 400, description = "Bad Request - assignments is not a list", body = ErrorMessage)
    )
)]
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<Json<Vec<StudyPlanResult>>, (StatusCode, Json<ErrorMessage>)> {
    let assignments = handlers::parse_assignments(&payload).map_err(|err| {
        warn!("Rejected study plan request: {err}");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage::new(err.to_string())),
        )
    })?;

    let results = handlers::generate_plans(&state, assignments).await;
    Ok(Json(results))
}
