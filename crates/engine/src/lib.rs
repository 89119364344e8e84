//! SplitSync engine: the expense store and everything derived from it.
//!
//! The [`Engine`] owns the canonical lists of expenses, groups and stored
//! reminders. Debts, leaderboards, balance summaries and reminder statuses are
//! recomputed from those lists on every query by the pure functions in
//! [`settlement`] and [`reminders`].
//!
//! The engine performs no I/O and never blocks; callers sharing one engine
//! between threads wrap it in a lock (reads take `&self`, writes `&mut self`).

pub use currency::Currency;
pub use error::EngineError;
pub use expenses::{
    Expense, ExpenseGroup, GroupDeletePolicy, GroupSummary, GroupUpdate, MAX_EXPENSE_AMOUNT,
    NewExpense, Scope,
};
pub use format::format_money;
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use reminders::{
    PaymentReminder, ReminderFilter, ReminderPolicy, ReminderStatus, ReminderSummary,
};
pub use settlement::{BalanceSummary, Debt, LeaderboardEntry};

mod currency;
mod error;
mod expenses;
mod format;
mod money;
mod ops;
mod participants;
pub mod reminders;
pub mod settlement;

pub type ResultEngine<T> = Result<T, EngineError>;
