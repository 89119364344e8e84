use uuid::Uuid;

use crate::{
    EngineError, Expense, MAX_EXPENSE_AMOUNT, NewExpense, ResultEngine, Scope,
    participants::normalize_participants,
};

use super::{Engine, normalize_required_title};

impl Engine {
    /// Validates and appends a new expense, returning the stored record.
    ///
    /// Rejections:
    /// - `InvalidAmount` unless `0 < amount <= MAX_EXPENSE_AMOUNT`.
    /// - `NoParticipants` if no non-blank participant name is left.
    /// - `MissingTitle` if the title is blank.
    /// - `InvalidDate` if the reminder due date would fall outside the
    ///   representable range.
    /// - `KeyNotFound` if `group_id` names no existing group.
    /// - `InvalidAmount` if the sum of every stored amount would overflow.
    ///   Any total folded over a subset of the store therefore fits.
    ///
    /// Participant names are normalized and de-duplicated, keeping the payer
    /// first.
    pub fn add_expense(&mut self, cmd: NewExpense) -> ResultEngine<Expense> {
        if !cmd.amount.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be > 0, got {}",
                cmd.amount
            )));
        }
        if cmd.amount > MAX_EXPENSE_AMOUNT {
            return Err(EngineError::InvalidAmount(format!(
                "amount must be <= {MAX_EXPENSE_AMOUNT}, got {}",
                cmd.amount
            )));
        }
        let participants = normalize_participants(&cmd.participants);
        if participants.is_empty() {
            return Err(EngineError::NoParticipants(
                "an expense needs at least one participant".to_string(),
            ));
        }
        let title = normalize_required_title(&cmd.title, "expense title")?;
        if cmd
            .occurred_at
            .checked_add_signed(self.reminder_policy.due_after)
            .is_none()
        {
            return Err(EngineError::InvalidDate(format!(
                "{} leaves no room for a reminder due date",
                cmd.occurred_at
            )));
        }
        if let Some(group_id) = cmd.group_id {
            self.group(group_id)?;
        }
        self.expenses
            .iter()
            .try_fold(cmd.amount, |total, e| total.checked_add(e.amount))
            .ok_or_else(|| {
                EngineError::InvalidAmount("total of stored expenses would overflow".to_string())
            })?;

        let expense = Expense {
            id: Uuid::new_v4(),
            title,
            amount: cmd.amount,
            participants,
            date: cmd.occurred_at,
            group_id: cmd.group_id,
        };
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Returns one expense by id.
    pub fn expense(&self, id: Uuid) -> ResultEngine<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("expense {id}")))
    }

    /// Expenses in `scope`, in insertion order.
    ///
    /// `Scope::Group` fails with `KeyNotFound` for an unknown group; expenses
    /// orphaned by a deleted group are only visible in `Scope::All`.
    pub fn expenses(&self, scope: Scope) -> ResultEngine<Vec<&Expense>> {
        match scope {
            Scope::All => Ok(self.expenses.iter().collect()),
            Scope::Group(group_id) => {
                self.group(group_id)?;
                Ok(self
                    .expenses
                    .iter()
                    .filter(|e| e.group_id == Some(group_id))
                    .collect())
            }
        }
    }

    /// Removes an expense together with the stored and dismissed reminders
    /// pointing at it.
    ///
    /// Unknown ids are a no-op; returns whether something was removed.
    pub fn delete_expense(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return false;
        }
        self.reminders.retain(|r| r.expense_id != Some(id));
        self.dismissed.retain(|_, expense_id| *expense_id != id);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::Money;

    use super::*;

    fn new_expense(title: &str, amount: i64, participants: &[&str]) -> NewExpense {
        NewExpense {
            title: title.to_string(),
            amount: Money::new(amount),
            participants: participants.iter().map(ToString::to_string).collect(),
            group_id: None,
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let mut engine = Engine::default();
        for amount in [0, -100] {
            let err = engine
                .add_expense(new_expense("Lunch", amount, &["You"]))
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidAmount(_)));
        }
        assert!(engine.expenses(Scope::All).unwrap().is_empty());
    }

    #[test]
    fn caps_single_amounts_and_keeps_totals_readable() {
        let mut engine = Engine::default();
        let group = engine
            .add_group("Trip", &["You".to_string(), "Alice".to_string()])
            .unwrap();

        let mut too_big = new_expense("Yacht", i64::MAX, &["You", "Alice"]);
        too_big.group_id = Some(group.id);
        let err = engine.add_expense(too_big).unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));

        for _ in 0..2 {
            let mut cmd = new_expense("Yacht", MAX_EXPENSE_AMOUNT.minor(), &["You", "Alice"]);
            cmd.group_id = Some(group.id);
            engine.add_expense(cmd).unwrap();
        }

        let summary = engine.group_summary(group.id).unwrap();
        assert_eq!(summary.total_amount.minor(), 2 * MAX_EXPENSE_AMOUNT.minor());
        let board = engine.compute_leaderboard(Scope::All).unwrap();
        assert_eq!(board[0].paid.minor(), 2 * MAX_EXPENSE_AMOUNT.minor());
        assert_eq!(board[1].owed.minor(), MAX_EXPENSE_AMOUNT.minor());
    }

    #[test]
    fn rejects_dates_without_room_for_a_due_date() {
        let mut engine = Engine::default();
        let group = engine
            .add_group("Trip", &["You".to_string(), "Alice".to_string()])
            .unwrap();

        let mut cmd = new_expense("Tickets", 5_000, &["You", "Alice"]);
        cmd.group_id = Some(group.id);
        cmd.occurred_at = chrono::DateTime::<Utc>::MAX_UTC;
        let err = engine.add_expense(cmd).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDate(_)));

        assert!(engine.expenses(Scope::All).unwrap().is_empty());
        let reminders = engine.list_reminders(&crate::ReminderFilter::default(), Utc::now());
        assert!(reminders.is_empty());
    }

    #[test]
    fn rejects_blank_participants_and_title() {
        let mut engine = Engine::default();
        let err = engine
            .add_expense(new_expense("Lunch", 100, &["  ", ""]))
            .unwrap_err();
        assert!(matches!(err, EngineError::NoParticipants(_)));

        let err = engine
            .add_expense(new_expense("   ", 100, &["You"]))
            .unwrap_err();
        assert!(matches!(err, EngineError::MissingTitle(_)));
    }

    #[test]
    fn rejects_unknown_group() {
        let mut engine = Engine::default();
        let mut cmd = new_expense("Lunch", 100, &["You"]);
        cmd.group_id = Some(Uuid::new_v4());
        assert!(matches!(
            engine.add_expense(cmd),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[test]
    fn normalizes_and_stores() {
        let mut engine = Engine::default();
        let expense = engine
            .add_expense(new_expense(" Lunch ", 1_500, &[" You", "Alice", "You "]))
            .unwrap();
        assert_eq!(expense.title, "Lunch");
        assert_eq!(expense.participants, vec!["You", "Alice"]);
        assert_eq!(engine.expense(expense.id).unwrap(), &expense);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut engine = Engine::default();
        let expense = engine
            .add_expense(new_expense("Lunch", 1_500, &["You", "Alice"]))
            .unwrap();
        assert!(engine.delete_expense(expense.id));
        assert!(!engine.delete_expense(expense.id));
        assert!(engine.expense(expense.id).is_err());
    }
}
