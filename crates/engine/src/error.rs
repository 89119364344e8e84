//! The module contains the errors the engine can throw.
//!
//! All of them are input-validation rejections raised at the store boundary:
//!
//! - [`InvalidAmount`] thrown when an amount is not positive or above
//!   [`MAX_EXPENSE_AMOUNT`](crate::MAX_EXPENSE_AMOUNT).
//! - [`InvalidDate`] thrown when an expense date leaves no room for its
//!   reminder due date.
//! - [`NoParticipants`] thrown when an expense or group has nobody in it.
//! - [`MissingTitle`] thrown when an expense title or group name is empty.
//! - [`KeyNotFound`] thrown when a read addresses an unknown group or expense.
//!
//! Mutations addressing an unknown id (marking a reminder paid, deleting a
//! reminder, group or expense) are no-ops and never produce an error.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`NoParticipants`]: EngineError::NoParticipants
//!  [`MissingTitle`]: EngineError::MissingTitle
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("No participants: {0}")]
    NoParticipants(String),
    #[error("Missing title: {0}")]
    MissingTitle(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
}
