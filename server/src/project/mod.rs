use crate::entities::*;
use sea_orm::*;
use std::sync::Arc;

pub mod api;

/// A tracked project: a client engagement with a name, description and deadline.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Project {
    id: u32,
    name: String,
    client: String,
    description: String,
    deadline: chrono::NaiveDate,
    created_at: chrono::NaiveDateTime,
}

impl Project {
    pub fn new(
        id: u32,
        name: String,
        client: String,
        description: String,
        deadline: chrono::NaiveDate,
        created_at: chrono::NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name,
            client,
            description,
            deadline,
            created_at,
        }
    }

    /// Returns the ID of the project.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client the project is for.
    pub fn client(&self) -> &str {
        &self.client
    }

    /// Returns the project description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the project deadline.
    pub fn deadline(&self) -> chrono::NaiveDate {
        self.deadline
    }

    /// Returns the creation timestamp assigned by the store.
    pub fn created_at(&self) -> chrono::NaiveDateTime {
        self.created_at
    }
}

impl From<project::Model> for Project {
    fn from(model: project::Model) -> Self {
        Project::new(
            model.id as u32,
            model.name,
            model.client,
            model.description,
            model.deadline,
            model.created_at,
        )
    }
}

/// Error type for ProjectService operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    /// Represents a required field that is absent or blank.
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    /// Represents a deadline that is present but not a YYYY-MM-DD date.
    #[error("Invalid deadline '{0}': expected a YYYY-MM-DD date")]
    InvalidDeadline(String),
    /// Represents a project not found error.
    #[error("Project with ID {0} not found")]
    ProjectNotFound(u32),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Shared handler state holding the store connection.
#[derive(Clone, Debug)]
pub struct ProjectState {
    pub db: Arc<DatabaseConnection>,
}

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl ProjectService<'_> {
    pub fn new(db: &DatabaseConnection) -> ProjectService {
        ProjectService { db }
    }

    /// Creates a new project in the database.
    ///
    /// # Arguments
    ///
    /// * `name` - The project name.
    /// * `client` - The client the project is for.
    /// * `description` - A free-text description.
    /// * `deadline` - The deadline as a `YYYY-MM-DD` string.
    ///
    /// # Returns
    ///
    /// A `Result` containing the stored `Project` (with its store-assigned ID
    /// and creation timestamp) if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_project(
        &self,
        name: String,
        client: String,
        description: String,
        deadline: String,
    ) -> Result<Project, ProjectServiceError> {
        let deadline = validate_fields(&name, &client, &description, &deadline)?;

        let active_model = project::ActiveModel {
            name: ActiveValue::Set(name),
            client: ActiveValue::Set(client),
            description: ActiveValue::Set(description),
            deadline: ActiveValue::Set(deadline),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Project::from(created_model))
    }

    /// Retrieves all projects from the database, in store-native order.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        let projects = project::Entity::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Project::from)
            .collect();
        Ok(projects)
    }

    /// Retrieves a project by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_project_by_id(&self, id: u32) -> Result<Project, ProjectServiceError> {
        let project_model = project::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;
        Ok(Project::from(project_model))
    }

    /// Overwrites the four mutable fields of a project by its ID.
    ///
    /// The ID and creation timestamp are never touched by an update.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the project to update.
    /// * `name` - The new project name.
    /// * `client` - The new client.
    /// * `description` - The new description.
    /// * `deadline` - The new deadline as a `YYYY-MM-DD` string.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Project` if successful, or an error
    /// otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn update_project(
        &self,
        id: u32,
        name: String,
        client: String,
        description: String,
        deadline: String,
    ) -> Result<Project, ProjectServiceError> {
        let deadline = validate_fields(&name, &client, &description, &deadline)?;

        let project_to_update = project::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;

        let mut active_model: project::ActiveModel = project_to_update.into();
        active_model.name = ActiveValue::Set(name);
        active_model.client = ActiveValue::Set(client);
        active_model.description = ActiveValue::Set(description);
        active_model.deadline = ActiveValue::Set(deadline);
        let updated_model = active_model.update(self.db).await?;

        Ok(Project::from(updated_model))
    }

    /// Deletes a project by its ID.
    ///
    /// Deletion is irreversible and leaves no tombstone.
    ///
    /// # Returns
    ///
    /// A `Result` containing the removed `Project` if successful, or an error
    /// otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project_by_id(&self, id: u32) -> Result<Project, ProjectServiceError> {
        let project_to_delete = project::Entity::find_by_id(id as i32)
            .one(self.db)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(id))?;

        let removed = Project::from(project_to_delete);
        project::Entity::delete_by_id(id as i32).exec(self.db).await?;
        Ok(removed)
    }
}

/// Checks the four required fields and parses the deadline.
fn validate_fields(
    name: &str,
    client: &str,
    description: &str,
    deadline: &str,
) -> Result<chrono::NaiveDate, ProjectServiceError> {
    require_field("name", name)?;
    require_field("client", client)?;
    require_field("description", description)?;
    require_field("deadline", deadline)?;
    chrono::NaiveDate::parse_from_str(deadline.trim(), "%Y-%m-%d")
        .map_err(|_| ProjectServiceError::InvalidDeadline(deadline.to_string()))
}

fn require_field(field: &'static str, value: &str) -> Result<(), ProjectServiceError> {
    if value.trim().is_empty() {
        return Err(ProjectServiceError::MissingField(field));
    }
    Ok(())
}
