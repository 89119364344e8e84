use crate::{
    BalanceSummary, Debt, EngineError, Expense, LeaderboardEntry, ResultEngine, Scope,
    participants::normalize_name, settlement,
};

use super::Engine;

impl Engine {
    /// Expenses of `scope` plus the member list restricting them.
    ///
    /// The global view applies no membership filter.
    fn settlement_input(&self, scope: Scope) -> ResultEngine<(Vec<&Expense>, Option<&[String]>)> {
        let expenses = self.expenses(scope)?;
        let members = match scope {
            Scope::All => None,
            Scope::Group(id) => Some(self.group(id)?.participants.as_slice()),
        };
        Ok((expenses, members))
    }

    /// Pairwise debts of `scope`, recomputed from the current expenses.
    pub fn compute_debts(&self, scope: Scope) -> ResultEngine<Vec<Debt>> {
        let (expenses, members) = self.settlement_input(scope)?;
        Ok(settlement::compute_debts(expenses, members))
    }

    /// Net leaderboard of `scope`, recomputed from the current expenses.
    pub fn compute_leaderboard(&self, scope: Scope) -> ResultEngine<Vec<LeaderboardEntry>> {
        let (expenses, members) = self.settlement_input(scope)?;
        Ok(settlement::compute_leaderboard(expenses, members))
    }

    /// What `name` owes and is owed in `scope`.
    pub fn balance_summary(&self, scope: Scope, name: &str) -> ResultEngine<BalanceSummary> {
        let name = normalize_name(name)
            .ok_or_else(|| EngineError::NoParticipants("participant name is empty".to_string()))?;
        let debts = self.compute_debts(scope)?;
        Ok(settlement::balance_summary(&debts, &name))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{Money, NewExpense};

    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn add(engine: &mut Engine, amount: i64, participants: &[&str], group_id: Option<Uuid>) {
        engine
            .add_expense(NewExpense {
                title: "Dinner".to_string(),
                amount: Money::new(amount),
                participants: names(participants),
                group_id,
                occurred_at: Utc::now(),
            })
            .unwrap();
    }

    #[test]
    fn group_scope_only_sees_group_expenses() {
        let mut engine = Engine::default();
        let trip = engine.add_group("Trip", &names(&["You", "Alice"])).unwrap();
        add(&mut engine, 10_000, &["You", "Alice"], Some(trip.id));
        add(&mut engine, 4_000, &["Bob", "You"], None);

        let group_debts = engine.compute_debts(Scope::Group(trip.id)).unwrap();
        assert_eq!(group_debts.len(), 1);
        assert_eq!(group_debts[0].debtor, "Alice");

        let all_debts = engine.compute_debts(Scope::All).unwrap();
        assert_eq!(all_debts.len(), 2);
    }

    #[test]
    fn unknown_group_scope_is_not_found() {
        let engine = Engine::default();
        assert!(matches!(
            engine.compute_leaderboard(Scope::Group(Uuid::new_v4())),
            Err(EngineError::KeyNotFound(_))
        ));
    }

    #[test]
    fn members_removed_later_drop_out_of_group_math() {
        let mut engine = Engine::default();
        let trip = engine
            .add_group("Trip", &names(&["You", "Alice", "Bob"]))
            .unwrap();
        add(&mut engine, 9_000, &["You", "Alice", "Bob"], Some(trip.id));
        engine
            .update_group(trip.id, crate::GroupUpdate {
                name: None,
                participants: Some(names(&["You", "Alice"])),
            })
            .unwrap();

        let debts = engine.compute_debts(Scope::Group(trip.id)).unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].amount.minor(), 4_500);
    }

    #[test]
    fn balance_summary_normalizes_name() {
        let mut engine = Engine::default();
        add(&mut engine, 10_000, &["You", "Alice"], None);
        let summary = engine.balance_summary(Scope::All, "  You ").unwrap();
        assert_eq!(summary.owed_to.minor(), 5_000);
        assert_eq!(summary.net.minor(), 5_000);
    }
}
