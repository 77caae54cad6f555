use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    AppState,
    models::assignment::{AssignmentInput, StudyPlanResult},
    services::planner::generate_plan,
};

#[derive(Debug, Error, PartialEq)]
pub enum HandleError {
    #[error("Invalid format: request body should be a JSON object.")]
    BodyNotObject,

    #[error("Invalid format: assignments should be a list.")]
    AssignmentsNotList,

    #[error("Invalid format: each assignment should be an object.")]
    AssignmentNotObject,
}

/// Validates the batch shape. A missing `assignments` key is an empty batch.
pub fn parse_assignments(payload: &Value) -> Result<Vec<AssignmentInput>, HandleError> {
    let body = payload.as_object().ok_or(HandleError::BodyNotObject)?;

    let items = match body.get("assignments") {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(HandleError::AssignmentsNotList),
    };

    items
        .iter()
        .map(|item| AssignmentInput::from_loose(item).ok_or(HandleError::AssignmentNotObject))
        .collect()
}

/// Generates one plan per assignment, one after another, in input order.
pub async fn generate_plans(
    state: &AppState,
    assignments: Vec<AssignmentInput>,
) -> Vec<StudyPlanResult> {
    info!("Generating study plans for {} assignment(s)", assignments.len());

    let mut results = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        debug!("Generating study plan (title={:?})", assignment.title);
        let outcome = generate_plan(
            state.completion.as_ref(),
            &state.cfg.openai_model,
            &assignment,
        )
        .await;
        results.push(StudyPlanResult::new(assignment, outcome.into_study_plan()));
    }
    results
}
