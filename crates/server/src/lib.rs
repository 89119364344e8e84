use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{ServerState, app, run_with_listener};

mod expenses;
mod groups;
mod reminders;
mod server;
mod settlement;
mod views;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpenseNew, ExpenseView, ExpensesResponse};
    }

    pub mod group {
        pub use api_types::group::{GroupNew, GroupUpdate, GroupView, GroupsResponse};
    }

    pub mod settlement {
        pub use api_types::settlement::{
            BalanceResponse, DebtView, DebtsResponse, LeaderboardEntryView, LeaderboardResponse,
            ScopeQuery,
        };
    }

    pub mod reminder {
        pub use api_types::reminder::{
            ReminderQuery, ReminderStatus, ReminderSummaryView, ReminderView, RemindersResponse,
        };
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidAmount(_)
        | EngineError::InvalidDate(_)
        | EngineError::NoParticipants(_)
        | EngineError::MissingTitle(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        for err in [
            EngineError::InvalidAmount("x".to_string()),
            EngineError::InvalidDate("x".to_string()),
            EngineError::NoParticipants("x".to_string()),
            EngineError::MissingTitle("x".to_string()),
        ] {
            let res = ServerError::from(err).into_response();
            assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
