//! Payment reminder API endpoints.
//!
//! Statuses are projected at request time: a pending reminder read after its
//! due date comes back as overdue.

use api_types::reminder::{ReminderQuery, RemindersResponse};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use engine::ReminderFilter;
use uuid::Uuid;

use crate::{server::ServerState, views};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ReminderQuery>,
) -> Json<RemindersResponse> {
    let filter = ReminderFilter {
        status: query.status.map(views::parse_status),
        group_id: query.group_id,
    };
    let now = Utc::now();

    let engine = state.engine.read().await;
    let currency = engine.currency();
    let reminders = engine.list_reminders(&filter, now);
    let summary = engine::ReminderSummary::from_reminders(&reminders);

    Json(RemindersResponse {
        reminders: reminders
            .into_iter()
            .map(|r| views::reminder(r, currency))
            .collect(),
        summary: views::reminder_summary(summary, currency),
    })
}

pub async fn mark_paid(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    if state.engine.write().await.mark_reminder_paid(id, Utc::now()) {
        tracing::info!(reminder_id = %id, "reminder marked as paid");
    } else {
        tracing::debug!(reminder_id = %id, "mark as paid on unknown reminder");
    }
    StatusCode::NO_CONTENT
}

pub async fn reminder_delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> StatusCode {
    if state.engine.write().await.delete_reminder(id) {
        tracing::info!(reminder_id = %id, "reminder deleted");
    }
    StatusCode::NO_CONTENT
}
