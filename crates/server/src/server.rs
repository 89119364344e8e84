use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{expenses, groups, reminders, settlement};
use engine::Engine;

/// Shared handler state.
///
/// The engine is the single owner of every expense; the lock serializes writes
/// while letting derivation queries run side by side.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/expenses",
            post(expenses::expense_new).get(expenses::list),
        )
        .route("/expenses/{id}", delete(expenses::expense_delete))
        .route("/groups", post(groups::group_new).get(groups::list))
        .route(
            "/groups/{id}",
            get(groups::get)
                .patch(groups::group_update)
                .delete(groups::group_delete),
        )
        .route("/debts", get(settlement::debts))
        .route("/leaderboard", get(settlement::leaderboard))
        .route("/balances/{name}", get(settlement::balance))
        .route("/reminders", get(reminders::list))
        .route("/reminders/{id}", delete(reminders::reminder_delete))
        .route("/reminders/{id}/paid", post(reminders::mark_paid))
        .with_state(state)
}

/// Build the HTTP application around `engine`.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(RwLock::new(engine)),
    })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}
