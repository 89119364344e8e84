//! Groups API endpoints.

use api_types::group::{GroupNew, GroupUpdate, GroupView, GroupsResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::EngineError;
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

pub async fn group_new(
    State(state): State<ServerState>,
    Json(payload): Json<GroupNew>,
) -> Result<(StatusCode, Json<GroupView>), ServerError> {
    let mut engine = state.engine.write().await;
    let group = engine.add_group(&payload.name, &payload.participants)?;
    tracing::info!(group_id = %group.id, name = %group.name, "group created");

    let summary = engine.group_summary(group.id)?;
    Ok((
        StatusCode::CREATED,
        Json(views::group(summary, engine.currency())),
    ))
}

pub async fn list(State(state): State<ServerState>) -> Json<GroupsResponse> {
    let engine = state.engine.read().await;
    let currency = engine.currency();
    let groups = engine
        .group_summaries()
        .into_iter()
        .map(|summary| views::group(summary, currency))
        .collect();

    Json(GroupsResponse { groups })
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupView>, ServerError> {
    let engine = state.engine.read().await;
    let summary = engine.group_summary(id)?;
    Ok(Json(views::group(summary, engine.currency())))
}

pub async fn group_update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GroupUpdate>,
) -> Result<Json<GroupView>, ServerError> {
    if payload.name.is_none() && payload.participants.is_none() {
        return Err(ServerError::Generic(
            "provide at least one of name or participants".to_string(),
        ));
    }

    let mut engine = state.engine.write().await;
    let updated = engine.update_group(id, engine::GroupUpdate {
        name: payload.name,
        participants: payload.participants,
    })?;
    if updated.is_none() {
        return Err(EngineError::KeyNotFound(format!("group {id}")).into());
    }
    tracing::info!(group_id = %id, "group updated");

    let summary = engine.group_summary(id)?;
    Ok(Json(views::group(summary, engine.currency())))
}

pub async fn group_delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    let mut engine = state.engine.write().await;
    if engine.delete_group(id) {
        tracing::info!(
            group_id = %id,
            policy = ?engine.group_delete_policy(),
            "group deleted"
        );
    }
    StatusCode::NO_CONTENT
}
