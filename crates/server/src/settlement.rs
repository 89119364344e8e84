//! Settlement API endpoints: debts, leaderboard and per-person balances.
//!
//! Every response is recomputed from the current expenses.

use api_types::settlement::{BalanceResponse, DebtsResponse, LeaderboardResponse, ScopeQuery};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::Scope;

use crate::{ServerError, server::ServerState, views};

pub async fn debts(
    State(state): State<ServerState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DebtsResponse>, ServerError> {
    let engine = state.engine.read().await;
    let currency = engine.currency();
    let debts = engine.compute_debts(Scope::from(query.group_id))?;
    tracing::debug!(debts = debts.len(), "debts computed");

    Ok(Json(DebtsResponse {
        currency: views::map_currency(currency),
        debts: debts.into_iter().map(|d| views::debt(d, currency)).collect(),
    }))
}

pub async fn leaderboard(
    State(state): State<ServerState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<LeaderboardResponse>, ServerError> {
    let engine = state.engine.read().await;
    let currency = engine.currency();
    let entries = engine
        .compute_leaderboard(Scope::from(query.group_id))?
        .into_iter()
        .map(|e| views::leaderboard_entry(e, currency))
        .collect();

    Ok(Json(LeaderboardResponse {
        currency: views::map_currency(currency),
        entries,
    }))
}

pub async fn balance(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<BalanceResponse>, ServerError> {
    let engine = state.engine.read().await;
    let currency = engine.currency();
    let summary = engine.balance_summary(Scope::from(query.group_id), &name)?;

    Ok(Json(BalanceResponse {
        name: summary.name,
        owes: views::amount(summary.owes, currency),
        owed_to: views::amount(summary.owed_to, currency),
        net: views::amount(summary.net, currency),
        debts: summary
            .debts
            .into_iter()
            .map(|d| views::debt(d, currency))
            .collect(),
    }))
}
