use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One caller-supplied assignment. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInput {
    pub title: Option<String>,
    pub due_date: Option<String>,
    #[serde(rename = "type")]
    pub assignment_type: Option<String>,
    pub content: Option<String>,
}

impl AssignmentInput {
    /// Lenient constructor from arbitrary JSON. Returns `None` when the value
    /// is not an object; individual fields are never a reason to reject.
    pub fn from_loose(v: &Value) -> Option<Self> {
        let obj = v.as_object()?;
        let field = |key: &str| obj.get(key).and_then(loose_string);

        Some(Self {
            title: field("title"),
            due_date: field("dueDate"),
            assignment_type: field("type"),
            content: field("content"),
        })
    }
}

/// Strings pass through, `null` is absent, anything else keeps its JSON text.
fn loose_string(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Request body of `POST /generate-plan` (documentation only; the route
/// reads the body loosely).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub assignments: Vec<AssignmentInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanResult {
    pub title: Option<String>,
    /// Always exactly one entry: the plan text or a placeholder message.
    pub study_plan: Vec<String>,
    pub due_date: Option<String>,
    #[serde(rename = "type")]
    pub assignment_type: Option<String>,
}

impl StudyPlanResult {
    pub fn new(assignment: AssignmentInput, study_plan: Vec<String>) -> Self {
        Self {
            title: assignment.title,
            study_plan,
            due_date: assignment.due_date,
            assignment_type: assignment.assignment_type,
        }
    }
}
