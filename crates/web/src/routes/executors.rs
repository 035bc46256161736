//! Executor directory route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use gigmarket_core::ExecutorId;

use crate::db::ExecutorRepository;
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Executor display data.
pub struct ExecutorView {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub bio: String,
}

/// Executor listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "executors/executor_list.html")]
pub struct ExecutorListTemplate {
    pub executors: Vec<ExecutorView>,
    pub current_user: Option<CurrentUser>,
}

/// Executor detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "executors/executor_detail.html")]
pub struct ExecutorDetailTemplate {
    pub executor: ExecutorView,
    pub current_user: Option<CurrentUser>,
}

/// Display the executor listing.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> Result<impl IntoResponse> {
    let executors = ExecutorRepository::new(state.pool()).list().await?;

    let executors = executors
        .into_iter()
        .map(|e| ExecutorView {
            id: e.id.as_i64(),
            name: e.name,
            specialty: e.specialty,
            bio: e.bio,
        })
        .collect();

    Ok(ExecutorListTemplate {
        executors,
        current_user,
    })
}

/// Display a single executor profile.
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let executor_id = ExecutorId::new(id);
    let executor = ExecutorRepository::new(state.pool())
        .get_by_id(executor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("executor {executor_id}")))?;

    Ok(ExecutorDetailTemplate {
        executor: ExecutorView {
            id: executor.id.as_i64(),
            name: executor.name,
            specialty: executor.specialty,
            bio: executor.bio,
        },
        current_user,
    })
}
