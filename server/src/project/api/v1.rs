use crate::project::{Project, ProjectService, ProjectServiceError, ProjectState};
use crate::web::api::v1::ServerErrorResponse;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// JSON representation of a Project for API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectJson {
    /// Unique identifier assigned by the store
    id: u32,
    /// Project name
    name: String,
    /// Client the project is for
    client: String,
    /// Free-text description
    description: String,
    /// Deadline date, formatted as YYYY-MM-DD
    deadline: String,
    /// Creation date, formatted as YYYY-MM-DD
    created_at: String,
}

impl From<Project> for ProjectJson {
    fn from(project: Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            client: project.client().to_string(),
            description: project.description().to_string(),
            deadline: project.deadline().format("%Y-%m-%d").to_string(),
            created_at: project.created_at().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Request body shared by the create and update endpoints.
///
/// Fields default to empty strings so that an omitted field reaches service
/// validation as a missing value instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectRequest {
    /// Project name
    #[serde(default)]
    name: String,
    /// Client the project is for
    #[serde(default)]
    client: String,
    /// Free-text description
    #[serde(default)]
    description: String,
    /// Deadline date as a YYYY-MM-DD string
    #[serde(default)]
    deadline: String,
}

/// API response for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteProjectResponse {
    /// Confirmation message
    message: String,
}

/// Maps a service failure to its HTTP status code and error body.
///
/// Store failures are logged here and surfaced as a generic message; the
/// other variants echo the service error text to the client.
fn service_error_response(err: ProjectServiceError) -> (StatusCode, Json<ServerErrorResponse>) {
    match &err {
        ProjectServiceError::MissingField(_) | ProjectServiceError::InvalidDeadline(_) => (
            StatusCode::BAD_REQUEST,
            Json(ServerErrorResponse::new(err.to_string())),
        ),
        ProjectServiceError::ProjectNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ServerErrorResponse::new(err.to_string())),
        ),
        ProjectServiceError::Database(db_err) => {
            tracing::error!("Database failure: {}", db_err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ServerErrorResponse::new("Internal server error".to_string())),
            )
        }
    }
}

/// Handler for GET /projects - returns every stored project.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "Successfully retrieved projects", body = [ProjectJson]),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn list_projects_handler(
    State(state): State<Arc<ProjectState>>,
) -> Result<Json<Vec<ProjectJson>>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = ProjectService::new(&state.db);

    match service.get_all_projects().await {
        Ok(projects) => Ok(Json(
            projects.into_iter().map(ProjectJson::from).collect(),
        )),
        Err(err) => Err(service_error_response(err)),
    }
}

/// Handler for POST /projects - creates a project from a JSON body.
#[tracing::instrument(skip(state, request))]
#[utoipa::path(
    post,
    path = "/projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectJson),
        (status = 400, description = "Missing or invalid field", body = ServerErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn create_project_handler(
    State(state): State<Arc<ProjectState>>,
    Json(request): Json<ProjectRequest>,
) -> Result<(StatusCode, Json<ProjectJson>), (StatusCode, Json<ServerErrorResponse>)> {
    let service = ProjectService::new(&state.db);

    match service
        .create_project(
            request.name,
            request.client,
            request.description,
            request.deadline,
        )
        .await
    {
        Ok(project) => Ok((StatusCode::CREATED, Json(ProjectJson::from(project)))),
        Err(err) => Err(service_error_response(err)),
    }
}

/// Handler for PUT /projects/{id} - overwrites the four mutable fields.
#[tracing::instrument(skip(state, request))]
#[utoipa::path(
    put,
    path = "/projects/{id}",
    params(
        ("id" = u32, Path, description = "ID of the project to update")
    ),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectJson),
        (status = 400, description = "Missing or invalid field", body = ServerErrorResponse),
        (status = 404, description = "Project not found", body = ServerErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn update_project_handler(
    State(state): State<Arc<ProjectState>>,
    Path(id): Path<u32>,
    Json(request): Json<ProjectRequest>,
) -> Result<Json<ProjectJson>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = ProjectService::new(&state.db);

    match service
        .update_project(
            id,
            request.name,
            request.client,
            request.description,
            request.deadline,
        )
        .await
    {
        Ok(project) => Ok(Json(ProjectJson::from(project))),
        Err(err) => Err(service_error_response(err)),
    }
}

/// Handler for DELETE /projects/{id} - removes a project permanently.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    params(
        ("id" = u32, Path, description = "ID of the project to delete")
    ),
    responses(
        (status = 200, description = "Project deleted", body = DeleteProjectResponse),
        (status = 404, description = "Project not found", body = ServerErrorResponse),
        (status = 500, description = "Internal server error", body = ServerErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn delete_project_handler(
    State(state): State<Arc<ProjectState>>,
    Path(id): Path<u32>,
) -> Result<Json<DeleteProjectResponse>, (StatusCode, Json<ServerErrorResponse>)> {
    let service = ProjectService::new(&state.db);

    match service.delete_project_by_id(id).await {
        Ok(_) => Ok(Json(DeleteProjectResponse {
            message: "Project deleted successfully".to_string(),
        })),
        Err(err) => Err(service_error_response(err)),
    }
}

/// Creates and returns the projects API router.
pub fn create_api_router(state: Arc<ProjectState>) -> Router {
    Router::new()
        .route(
            "/projects",
            get(list_projects_handler).post(create_project_handler),
        )
        .route(
            "/projects/{id}",
            put(update_project_handler).delete(delete_project_handler),
        )
        .with_state(state)
}
