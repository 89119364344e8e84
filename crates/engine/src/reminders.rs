//! Payment reminders: time-bound, stateful projections of what each
//! participant of a grouped expense owes its payer.
//!
//! ## Status lifecycle
//!
//! - `pending` is the initial state.
//! - `pending -> overdue` happens automatically whenever the reminder is read
//!   after its due date. It is a projection, nothing is written.
//! - `pending | overdue -> completed` only happens through an explicit
//!   "mark as paid", which is stored.
//! - Nothing leaves `completed`.

use std::collections::HashSet;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Expense, ExpenseGroup, Money};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Pending,
    Overdue,
    Completed,
}

/// A reminder that `debtor_name` has to pay `creditor_name` back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReminder {
    pub id: Uuid,
    pub debtor_name: String,
    pub creditor_name: String,
    pub amount: Money,
    pub due_date: DateTime<Utc>,
    pub expense_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    /// Name of the group, when it still exists.
    pub group_name: Option<String>,
    pub status: ReminderStatus,
    pub paid_at: Option<DateTime<Utc>>,
}

impl PaymentReminder {
    /// Status as seen at `now`: a pending reminder past its due date reads as
    /// overdue.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> ReminderStatus {
        match self.status {
            ReminderStatus::Pending if self.due_date < now => ReminderStatus::Overdue,
            status => status,
        }
    }

    /// Mark the reminder as paid. Completing twice keeps the first `paid_at`.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        if self.status != ReminderStatus::Completed {
            self.status = ReminderStatus::Completed;
            self.paid_at = Some(now);
        }
    }

    fn dedup_key(&self) -> (String, String, Money, Option<Uuid>) {
        (
            self.debtor_name.clone(),
            self.creditor_name.clone(),
            self.amount,
            self.expense_id,
        )
    }
}

/// When synthesized reminders fall due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReminderPolicy {
    /// Time between the expense date and the reminder due date.
    pub due_after: TimeDelta,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            due_after: TimeDelta::days(7),
        }
    }
}

/// Stable id of the reminder derived for `(expense, debtor, creditor)`.
///
/// Derived reminders are recomputed on every read, so their id must come out
/// the same every time for "mark as paid" and "delete" to address them.
#[must_use]
pub fn reminder_id(expense_id: Uuid, debtor: &str, creditor: &str) -> Uuid {
    let name = format!("{debtor}\u{0}{creditor}");
    Uuid::new_v5(&expense_id, name.as_bytes())
}

/// Derive the reminder list at `now`.
///
/// Every grouped expense yields one reminder per non-payer participant, owed
/// to the payer, for an equal share of the amount, unless `existing` already
/// holds one for the same `(debtor, creditor, expense)`. Existing reminders
/// come first, then synthesized ones; duplicates on
/// `(debtor, creditor, amount, expense)` keep the first occurrence. Statuses are
/// projected at `now` and the result is sorted by due date.
#[must_use]
pub fn derive_reminders(
    expenses: &[Expense],
    groups: &[ExpenseGroup],
    existing: &[PaymentReminder],
    policy: &ReminderPolicy,
    now: DateTime<Utc>,
) -> Vec<PaymentReminder> {
    let known: HashSet<(&str, &str, Uuid)> = existing
        .iter()
        .filter_map(|r| {
            r.expense_id
                .map(|id| (r.debtor_name.as_str(), r.creditor_name.as_str(), id))
        })
        .collect();

    let group_name = |group_id: Option<Uuid>| {
        group_id.and_then(|id| groups.iter().find(|g| g.id == id).map(|g| g.name.clone()))
    };

    let mut synthesized = Vec::new();
    for expense in expenses {
        let Some(group_id) = expense.group_id else {
            continue;
        };
        let Some((payer, others)) = expense.participants.split_first() else {
            continue;
        };
        let share = expense.amount.as_minor_f64() / expense.participants.len() as f64;
        let Some(due_date) = expense.date.checked_add_signed(policy.due_after) else {
            continue;
        };

        for debtor in others {
            if debtor == payer || known.contains(&(debtor.as_str(), payer.as_str(), expense.id)) {
                continue;
            }
            synthesized.push(PaymentReminder {
                id: reminder_id(expense.id, debtor, payer),
                debtor_name: debtor.clone(),
                creditor_name: payer.clone(),
                amount: Money::from_minor_f64(share),
                due_date,
                expense_id: Some(expense.id),
                group_id: Some(group_id),
                group_name: group_name(Some(group_id)),
                status: ReminderStatus::Pending,
                paid_at: None,
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reminders: Vec<PaymentReminder> = existing
        .iter()
        .cloned()
        .chain(synthesized)
        .filter(|r| seen.insert(r.dedup_key()))
        .map(|mut r| {
            r.status = r.status_at(now);
            if r.group_id.is_some() {
                r.group_name = group_name(r.group_id);
            }
            r
        })
        .collect();
    reminders.sort_by_key(|r| r.due_date);
    reminders
}

/// Optional filters for listing reminders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReminderFilter {
    pub status: Option<ReminderStatus>,
    pub group_id: Option<Uuid>,
}

impl ReminderFilter {
    /// `reminder` is expected to carry its projected status already.
    #[must_use]
    pub fn matches(&self, reminder: &PaymentReminder) -> bool {
        self.status.is_none_or(|status| reminder.status == status)
            && self.group_id.is_none_or(|id| reminder.group_id == Some(id))
    }
}

/// Counts and totals of a reminder list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSummary {
    pub pending: usize,
    pub overdue: usize,
    pub completed: usize,
    /// Amount still to be paid (pending + overdue).
    pub outstanding: Money,
    /// Amount already settled.
    pub settled: Money,
}

impl ReminderSummary {
    #[must_use]
    pub fn from_reminders(reminders: &[PaymentReminder]) -> Self {
        reminders.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                ReminderStatus::Pending => {
                    acc.pending += 1;
                    acc.outstanding += r.amount;
                }
                ReminderStatus::Overdue => {
                    acc.overdue += 1;
                    acc.outstanding += r.amount;
                }
                ReminderStatus::Completed => {
                    acc.completed += 1;
                    acc.settled += r.amount;
                }
            }
            acc
        })
    }
}
