use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    Currency, EngineError, Expense, ExpenseGroup, GroupDeletePolicy, PaymentReminder,
    ReminderPolicy, ResultEngine,
};

mod expenses;
mod groups;
mod reminders;
mod settlement;

/// The expense store.
///
/// Starts empty. Every write validates its input before touching the lists, so
/// a rejected call leaves the store unchanged.
#[derive(Debug, Default)]
pub struct Engine {
    expenses: Vec<Expense>,
    groups: Vec<ExpenseGroup>,
    /// Reminders with a stored state (today: the completed ones).
    reminders: Vec<PaymentReminder>,
    /// Derived reminders the user deleted, mapped to their expense; they are
    /// not re-derived.
    dismissed: HashMap<Uuid, Uuid>,
    currency: Currency,
    reminder_policy: ReminderPolicy,
    group_delete: GroupDeletePolicy,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Currency every amount of this engine is expressed in.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    #[must_use]
    pub fn reminder_policy(&self) -> ReminderPolicy {
        self.reminder_policy
    }

    #[must_use]
    pub fn group_delete_policy(&self) -> GroupDeletePolicy {
        self.group_delete
    }
}

fn normalize_required_title(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingTitle(format!(
            "{label} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    currency: Currency,
    reminder_policy: ReminderPolicy,
    group_delete: GroupDeletePolicy,
}

impl EngineBuilder {
    /// Currency used to format amounts.
    pub fn currency(mut self, currency: Currency) -> EngineBuilder {
        self.currency = currency;
        self
    }

    /// When derived reminders fall due.
    pub fn reminder_policy(mut self, policy: ReminderPolicy) -> EngineBuilder {
        self.reminder_policy = policy;
        self
    }

    /// What deleting a group does to its expenses.
    pub fn group_delete_policy(mut self, policy: GroupDeletePolicy) -> EngineBuilder {
        self.group_delete = policy;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            currency: self.currency,
            reminder_policy: self.reminder_policy,
            group_delete: self.group_delete,
            ..Engine::default()
        }
    }
}
