use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

/// An amount as integer minor units plus its formatted rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub amount_minor: i64,
    /// e.g. `€1,200` or `€33.33`.
    pub display: String,
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub title: String,
        /// Must be > 0.
        pub amount_minor: i64,
        /// First participant is the payer.
        pub participants: Vec<String>,
        pub group_id: Option<Uuid>,
        /// RFC3339 timestamp. Optional: if absent, server uses now().
        pub occurred_at: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: Uuid,
        pub title: String,
        pub amount: Amount,
        pub participants: Vec<String>,
        pub date: DateTime<FixedOffset>,
        pub group_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpensesResponse {
        pub expenses: Vec<ExpenseView>,
    }
}

pub mod group {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupNew {
        pub name: String,
        pub participants: Vec<String>,
    }

    /// At least one field is required.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupUpdate {
        pub name: Option<String>,
        pub participants: Option<Vec<String>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupView {
        pub id: Uuid,
        pub name: String,
        pub participants: Vec<String>,
        pub created_at: DateTime<FixedOffset>,
        pub total_expenses: usize,
        pub total_amount: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupsResponse {
        pub groups: Vec<GroupView>,
    }
}

pub mod settlement {
    use super::*;

    /// Optional scope of a settlement query; absent means every expense.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ScopeQuery {
        pub group_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebtView {
        pub debtor: String,
        pub creditor: String,
        pub amount: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DebtsResponse {
        pub currency: Currency,
        pub debts: Vec<DebtView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LeaderboardEntryView {
        pub rank: usize,
        pub name: String,
        pub paid: Amount,
        pub owed: Amount,
        pub net: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LeaderboardResponse {
        pub currency: Currency,
        pub entries: Vec<LeaderboardEntryView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalanceResponse {
        pub name: String,
        pub owes: Amount,
        pub owed_to: Amount,
        pub net: Amount,
        pub debts: Vec<DebtView>,
    }
}

pub mod reminder {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ReminderStatus {
        Pending,
        Overdue,
        Completed,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ReminderQuery {
        pub status: Option<ReminderStatus>,
        pub group_id: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReminderView {
        pub id: Uuid,
        pub debtor_name: String,
        pub creditor_name: String,
        pub amount: Amount,
        pub due_date: DateTime<FixedOffset>,
        pub expense_id: Option<Uuid>,
        pub group_id: Option<Uuid>,
        pub group_name: Option<String>,
        pub status: ReminderStatus,
        pub paid_at: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReminderSummaryView {
        pub pending: usize,
        pub overdue: usize,
        pub completed: usize,
        pub outstanding: Amount,
        pub settled: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RemindersResponse {
        pub reminders: Vec<ReminderView>,
        pub summary: ReminderSummaryView,
    }
}
