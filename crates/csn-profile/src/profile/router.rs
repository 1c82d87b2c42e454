use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::completion::CompletionResult;
use super::domain::UserId;
use super::reader::ProfileRecordReader;
use super::service::ProfileCompletionService;
use crate::error::AppError;

/// Public description of one checklist rule.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntryView {
    pub key: &'static str,
    pub label: &'static str,
    pub points: u32,
    pub route: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistView {
    pub total_points: u32,
    pub rules: Vec<ChecklistEntryView>,
}

/// Router builder exposing completion scoring and the checklist definition.
pub fn completion_router<R>(service: Arc<ProfileCompletionService<R>>) -> Router
where
    R: ProfileRecordReader + 'static,
{
    Router::new()
        .route("/api/v1/profile/checklist", get(checklist_handler::<R>))
        .route(
            "/api/v1/profile/:user_id/completion",
            get(completion_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn completion_handler<R>(
    State(service): State<Arc<ProfileCompletionService<R>>>,
    Path(user_id): Path<String>,
) -> Result<Json<CompletionResult>, AppError>
where
    R: ProfileRecordReader + 'static,
{
    let result = service.compute_completion(&UserId(user_id))?;
    Ok(Json(result))
}

pub(crate) async fn checklist_handler<R>(
    State(service): State<Arc<ProfileCompletionService<R>>>,
) -> Json<ChecklistView>
where
    R: ProfileRecordReader + 'static,
{
    let rules = service.engine().rules();
    Json(ChecklistView {
        total_points: rules.total_points(),
        rules: rules
            .rules()
            .iter()
            .map(|rule| ChecklistEntryView {
                key: rule.key,
                label: rule.label,
                points: rule.points,
                route: rule.route,
            })
            .collect(),
    })
}
