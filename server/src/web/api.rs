use std::sync::Arc;

use crate::project::ProjectState;

use axum::Router;

/// Creates the API routes for JSON API endpoints.
pub fn create_api_router(project_state: Arc<ProjectState>) -> axum::Router {
    Router::new().merge(crate::project::api::v1::create_api_router(project_state))
}

pub mod v1 {
    use serde::Serialize;
    use utoipa::{OpenApi, ToSchema};

    /// OpenAPI document covering the project endpoints.
    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::project::api::v1::list_projects_handler,
            crate::project::api::v1::create_project_handler,
            crate::project::api::v1::update_project_handler,
            crate::project::api::v1::delete_project_handler,
        ),
        tags(
            (name = "Projects", description = "Project tracking operations")
        )
    )]
    pub struct ApiDoc;

    /// Generic error payload returned by the JSON API.
    #[derive(Debug, Serialize, ToSchema)]
    pub struct ServerErrorResponse {
        /// Human-readable description of the failure
        message: String,
    }

    impl ServerErrorResponse {
        /// Creates a new error response with the given message.
        pub fn new(message: String) -> Self {
            Self { message }
        }
    }
}
