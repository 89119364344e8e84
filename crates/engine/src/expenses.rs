//! The module contains the canonical records owned by the store: `Expense`
//! and `ExpenseGroup`, plus the commands used to create and edit them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Money;

/// Largest amount a single expense may carry, in minor units (ten billion
/// major units). Equal shares of it stay exact as `f64` minor units.
pub const MAX_EXPENSE_AMOUNT: Money = Money::new(1_000_000_000_000);

/// A shared expense. The first participant fronted the money (the payer) and
/// the amount is split evenly across every listed participant, payer included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: Money,
    pub participants: Vec<String>,
    pub date: DateTime<Utc>,
    pub group_id: Option<Uuid>,
}

/// A named set of participants partitioning the settlement math.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseGroup {
    pub id: Uuid,
    pub name: String,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A group together with aggregates folded live over its expenses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSummary {
    pub group: ExpenseGroup,
    pub total_expenses: usize,
    pub total_amount: Money,
}

/// Command for [`Engine::add_expense`](crate::Engine::add_expense).
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub title: String,
    pub amount: Money,
    pub participants: Vec<String>,
    pub group_id: Option<Uuid>,
    pub occurred_at: DateTime<Utc>,
}

/// Partial update for [`Engine::update_group`](crate::Engine::update_group).
#[derive(Clone, Debug, Default)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub participants: Option<Vec<String>>,
}

/// Which expenses a query looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every expense, grouped or not, with no membership filtering.
    #[default]
    All,
    /// Only the expenses of one group, restricted to its members.
    Group(Uuid),
}

impl From<Option<Uuid>> for Scope {
    fn from(value: Option<Uuid>) -> Self {
        value.map_or(Scope::All, Scope::Group)
    }
}

/// What happens to a group's expenses when the group is deleted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupDeletePolicy {
    /// Expenses stay, pointing at a group that no longer exists.
    #[default]
    Orphan,
    /// Expenses (and their stored reminders) are removed with the group.
    Cascade,
}
