//! Mapping from engine records to API views.

use api_types::{
    Amount,
    expense::ExpenseView,
    group::GroupView,
    reminder::{ReminderStatus as ApiStatus, ReminderSummaryView, ReminderView},
    settlement::{DebtView, LeaderboardEntryView},
};
use engine::{
    Currency, Debt, Expense, GroupSummary, LeaderboardEntry, Money, PaymentReminder,
    ReminderStatus, ReminderSummary, format_money,
};

pub(crate) fn amount(money: Money, currency: Currency) -> Amount {
    Amount {
        amount_minor: money.minor(),
        display: format_money(money, currency),
    }
}

pub(crate) fn map_currency(currency: Currency) -> api_types::Currency {
    match currency {
        Currency::Eur => api_types::Currency::Eur,
        Currency::Usd => api_types::Currency::Usd,
        Currency::Gbp => api_types::Currency::Gbp,
    }
}

pub(crate) fn map_status(status: ReminderStatus) -> ApiStatus {
    match status {
        ReminderStatus::Pending => ApiStatus::Pending,
        ReminderStatus::Overdue => ApiStatus::Overdue,
        ReminderStatus::Completed => ApiStatus::Completed,
    }
}

pub(crate) fn parse_status(status: ApiStatus) -> ReminderStatus {
    match status {
        ApiStatus::Pending => ReminderStatus::Pending,
        ApiStatus::Overdue => ReminderStatus::Overdue,
        ApiStatus::Completed => ReminderStatus::Completed,
    }
}

pub(crate) fn expense(expense: &Expense, currency: Currency) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        title: expense.title.clone(),
        amount: amount(expense.amount, currency),
        participants: expense.participants.clone(),
        date: expense.date.fixed_offset(),
        group_id: expense.group_id,
    }
}

pub(crate) fn group(summary: GroupSummary, currency: Currency) -> GroupView {
    GroupView {
        id: summary.group.id,
        name: summary.group.name,
        participants: summary.group.participants,
        created_at: summary.group.created_at.fixed_offset(),
        total_expenses: summary.total_expenses,
        total_amount: amount(summary.total_amount, currency),
    }
}

pub(crate) fn debt(debt: Debt, currency: Currency) -> DebtView {
    DebtView {
        debtor: debt.debtor,
        creditor: debt.creditor,
        amount: amount(debt.amount, currency),
    }
}

pub(crate) fn leaderboard_entry(
    entry: LeaderboardEntry,
    currency: Currency,
) -> LeaderboardEntryView {
    LeaderboardEntryView {
        rank: entry.rank,
        name: entry.name,
        paid: amount(entry.paid, currency),
        owed: amount(entry.owed, currency),
        net: amount(entry.net, currency),
    }
}

pub(crate) fn reminder(reminder: PaymentReminder, currency: Currency) -> ReminderView {
    ReminderView {
        id: reminder.id,
        debtor_name: reminder.debtor_name,
        creditor_name: reminder.creditor_name,
        amount: amount(reminder.amount, currency),
        due_date: reminder.due_date.fixed_offset(),
        expense_id: reminder.expense_id,
        group_id: reminder.group_id,
        group_name: reminder.group_name,
        status: map_status(reminder.status),
        paid_at: reminder.paid_at.map(|dt| dt.fixed_offset()),
    }
}

pub(crate) fn reminder_summary(
    summary: ReminderSummary,
    currency: Currency,
) -> ReminderSummaryView {
    ReminderSummaryView {
        pending: summary.pending,
        overdue: summary.overdue,
        completed: summary.completed,
        outstanding: amount(summary.outstanding, currency),
        settled: amount(summary.settled, currency),
    }
}
