use tracing::{debug, error};

use crate::{
    models::{
        assignment::AssignmentInput,
        completion::{ChatCompletionRequest, ChatMessage},
    },
    services::completion::CompletionService,
};

pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f32 = 0.4;
pub const NO_RESPONSE: &str = "No response from the model.";

/// Result of one generation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Generated(String),
    Failed(String),
}

impl PlanOutcome {
    /// Display form handed back to callers: always a single entry.
    pub fn into_study_plan(self) -> Vec<String> {
        match self {
            PlanOutcome::Generated(text) => vec![text],
            PlanOutcome::Failed(reason) => vec![format!("Error: {reason}")],
        }
    }
}

pub fn build_prompt(assignment: &AssignmentInput) -> String {
    let title = assignment.title.as_deref().unwrap_or_default();
    let assignment_type = assignment.assignment_type.as_deref().unwrap_or_default();
    let due_date = assignment.due_date.as_deref().unwrap_or_default();
    let content = assignment.content.as_deref().unwrap_or_default();

    format!(
        "I have an assignment titled '{title}', which is a {assignment_type}. \
         The due date is {due_date}. The assignment content is: {content}. \
         Can you create a study plan that outlines tasks but includes no dates? \
         Your token limit is {MAX_TOKENS}."
    )
}

pub async fn generate_plan(
    service: &dyn CompletionService,
    model: &str,
    assignment: &AssignmentInput,
) -> PlanOutcome {
    let req = ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage::user(build_prompt(assignment))],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let res = match service.complete(&req).await {
        Ok(res) => res,
        Err(err) => {
            error!(
                "Study plan generation failed (title={:?}): {}",
                assignment.title, err
            );
            return PlanOutcome::Failed(err.to_string());
        }
    };

    let Some(choice) = res.choices.into_iter().next() else {
        debug!("Model returned no choices (title={:?})", assignment.title);
        return PlanOutcome::Generated(NO_RESPONSE.to_string());
    };

    match choice.message.content {
        Some(content) => PlanOutcome::Generated(content.trim().to_string()),
        None => {
            error!(
                "Model returned a choice without content (title={:?})",
                assignment.title
            );
            PlanOutcome::Failed("model returned a choice without content".to_string())
        }
    }
}


#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::testutil::{Reply, StubCompletion};
    use super::*;

    fn essay() -> AssignmentInput {
        AssignmentInput {
            title: Some("Essay".into()),
            due_date: Some("2024-10-01".into()),
            assignment_type: Some("homework".into()),
            content: Some("Compare two poems.".into()),
        }
    }

    #[test]
    fn prompt_states_every_field() {
        assert_eq!(
            build_prompt(&essay()),
            "I have an assignment titled 'Essay', which is a homework. \
             The due date is 2024-10-01. The assignment content is: Compare two poems.. \
             Can you create a study plan that outlines tasks but includes no dates? \
             Your token limit is 300."
        );
    }

    #[test]
    fn prompt_renders_missing_fields_as_empty() {
        let prompt = build_prompt(&AssignmentInput {
            title: Some("Quiz".into()),
            ..Default::default()
        });
        assert!(prompt.starts_with("I have an assignment titled 'Quiz', which is a . "));
        assert!(prompt.contains("The due date is . The assignment content is: . "));
    }

    #[tokio::test]
    async fn sends_single_user_message_with_fixed_sampling() {
        let stub = StubCompletion::new(vec![Reply::Text("plan")]);
        generate_plan(&stub, "gpt-4o-mini", &essay()).await;

        let requests = stub.requests.lock().await;
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.max_tokens, 300);
        assert_eq!(req.temperature, 0.4);
        assert_eq!(req.messages, vec![ChatMessage::user(build_prompt(&essay()))]);
    }

    #[tokio::test]
    async fn trims_generated_text_without_splitting() {
        let stub = StubCompletion::new(vec![Reply::Text("  Step 1\nStep 2\n\n")]);
        let outcome = generate_plan(&stub, "m", &essay()).await;

        assert_eq!(outcome, PlanOutcome::Generated("Step 1\nStep 2".into()));
        assert_eq!(outcome.into_study_plan(), vec!["Step 1\nStep 2".to_string()]);
    }

    #[tokio::test]
    async fn zero_choices_yield_placeholder() {
        let stub = StubCompletion::new(vec![Reply::Empty]);
        let outcome = generate_plan(&stub, "m", &essay()).await;

        assert_eq!(outcome.into_study_plan(), vec![NO_RESPONSE.to_string()]);
    }

    #[tokio::test]
    async fn errors_are_folded_into_the_plan() {
        let stub = StubCompletion::new(vec![Reply::Status(
            StatusCode::TOO_MANY_REQUESTS,
            "quota exceeded",
        )]);
        let outcome = generate_plan(&stub, "m", &essay()).await;

        assert!(matches!(outcome, PlanOutcome::Failed(_)));
        let plan = outcome.into_study_plan();
        assert_eq!(plan.len(), 1);
        assert!(plan[0].starts_with("Error: "), "got {:?}", plan);
        assert!(plan[0].contains("quota exceeded"));
    }

    #[tokio::test]
    async fn choice_without_content_is_a_failure() {
        let stub = StubCompletion::new(vec![Reply::NoContent]);
        let outcome = generate_plan(&stub, "m", &essay()).await;

        assert_eq!(
            outcome,
            PlanOutcome::Failed("model returned a choice without content".into())
        );
    }
}
