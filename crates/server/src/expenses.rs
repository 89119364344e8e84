//! Expenses API endpoints.

use api_types::{
    expense::{ExpenseNew, ExpenseView, ExpensesResponse},
    settlement::ScopeQuery,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use engine::{Money, NewExpense, Scope};
use uuid::Uuid;

use crate::{ServerError, server::ServerState, views};

pub async fn expense_new(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let occurred_at = payload
        .occurred_at
        .map_or_else(Utc::now, |dt| dt.with_timezone(&Utc));

    let mut engine = state.engine.write().await;
    let expense = engine.add_expense(NewExpense {
        title: payload.title,
        amount: Money::new(payload.amount_minor),
        participants: payload.participants,
        group_id: payload.group_id,
        occurred_at,
    })?;
    tracing::info!(
        expense_id = %expense.id,
        amount_minor = expense.amount.minor(),
        participants = expense.participants.len(),
        "expense added"
    );

    Ok((
        StatusCode::CREATED,
        Json(views::expense(&expense, engine.currency())),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ExpensesResponse>, ServerError> {
    let engine = state.engine.read().await;
    let currency = engine.currency();
    let expenses = engine
        .expenses(Scope::from(query.group_id))?
        .into_iter()
        .map(|e| views::expense(e, currency))
        .collect();

    Ok(Json(ExpensesResponse { expenses }))
}

pub async fn expense_delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.engine.write().await.delete_expense(id) {
        tracing::info!(expense_id = %id, "expense deleted");
    }
    StatusCode::NO_CONTENT
}
