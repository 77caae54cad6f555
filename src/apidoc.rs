use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Study Plan Adapter",
        version = "0.1.0",
        description = "Turns assignment descriptions into LLM-generated study plans."
    ),
    servers(
        (url = "http://localhost:5000", description = "Local dev")
    ),
    tags(
        (name = "plans", description = "Study plan generation")
    ),
    // Handlers (paths)
    paths(
        crate::routes::plan::generate_plan,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::assignment::GeneratePlanRequest,
            crate::models::assignment::AssignmentInput,
            crate::models::assignment::StudyPlanResult,
            crate::models::common::ErrorMessage
        )
    )
)]
pub struct ApiDoc;
