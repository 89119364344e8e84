use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    PaymentReminder, ReminderFilter, ReminderSummary,
    reminders::{derive_reminders, reminder_id},
};

use super::Engine;

impl Engine {
    /// Every live reminder at `now`: stored ones plus the ones derived from
    /// grouped expenses, minus the dismissed ones.
    fn current_reminders(&self, now: DateTime<Utc>) -> Vec<PaymentReminder> {
        let mut reminders = derive_reminders(
            &self.expenses,
            &self.groups,
            &self.reminders,
            &self.reminder_policy,
            now,
        );
        reminders.retain(|r| !self.dismissed.contains_key(&r.id));
        reminders
    }

    /// Reminders matching `filter`, statuses projected at `now`, sorted by due
    /// date.
    #[must_use]
    pub fn list_reminders(
        &self,
        filter: &ReminderFilter,
        now: DateTime<Utc>,
    ) -> Vec<PaymentReminder> {
        let mut reminders = self.current_reminders(now);
        reminders.retain(|r| filter.matches(r));
        reminders
    }

    /// Counts and totals of the reminders matching `filter` at `now`.
    #[must_use]
    pub fn reminder_summary(
        &self,
        filter: &ReminderFilter,
        now: DateTime<Utc>,
    ) -> ReminderSummary {
        ReminderSummary::from_reminders(&self.list_reminders(filter, now))
    }

    /// Marks a reminder as paid. The completed state is stored and never
    /// reverts, whatever `now` later reads use.
    ///
    /// Unknown ids are a no-op; returns whether the reminder was found.
    pub fn mark_reminder_paid(&mut self, id: Uuid, now: DateTime<Utc>) -> bool {
        if let Some(stored) = self.reminders.iter_mut().find(|r| r.id == id) {
            stored.complete(now);
            return true;
        }

        let Some(mut derived) = self.current_reminders(now).into_iter().find(|r| r.id == id)
        else {
            return false;
        };
        derived.complete(now);
        self.reminders.push(derived);
        true
    }

    /// Deletes a reminder whatever its state.
    ///
    /// A derived reminder is dismissed so it does not come back on the next
    /// read. Unknown ids are a no-op; returns whether anything was removed.
    pub fn delete_reminder(&mut self, id: Uuid) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        let removed = self.reminders.len() != before;

        let source = self
            .expenses
            .iter()
            .find(|expense| {
                expense.group_id.is_some()
                    && expense.participants.split_first().is_some_and(|(payer, others)| {
                        others
                            .iter()
                            .any(|debtor| reminder_id(expense.id, debtor, payer) == id)
                    })
            })
            .map(|expense| expense.id);
        let dismissed = source.is_some_and(|expense_id| {
            self.dismissed.insert(id, expense_id).is_none()
        });

        removed || dismissed
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::{Money, NewExpense, ReminderStatus};

    use super::*;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, day, 9, 0, 0).unwrap()
    }

    fn engine_with_trip() -> Engine {
        let mut engine = Engine::default();
        let trip = engine
            .add_group("Trip", &["You".to_string(), "Alice".to_string(), "Bob".to_string()])
            .unwrap();
        engine
            .add_expense(NewExpense {
                title: "Hotel".to_string(),
                amount: Money::new(30_000),
                participants: vec!["You".into(), "Alice".into(), "Bob".into()],
                group_id: Some(trip.id),
                occurred_at: at(1),
            })
            .unwrap();
        engine
    }

    #[test]
    fn mark_paid_on_derived_reminder_is_terminal() {
        let mut engine = engine_with_trip();
        let all = ReminderFilter::default();
        let reminders = engine.list_reminders(&all, at(2));
        let alice = reminders
            .iter()
            .find(|r| r.debtor_name == "Alice")
            .unwrap()
            .id;

        assert!(engine.mark_reminder_paid(alice, at(3)));
        assert!(engine.mark_reminder_paid(alice, at(4)));

        for day in [5, 20, 28] {
            let reminders = engine.list_reminders(&all, at(day));
            assert_eq!(reminders.len(), 2);
            let paid = reminders.iter().find(|r| r.id == alice).unwrap();
            assert_eq!(paid.status, ReminderStatus::Completed);
            assert_eq!(paid.paid_at, Some(at(3)));
        }
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut engine = engine_with_trip();
        let before = engine.list_reminders(&ReminderFilter::default(), at(2));
        assert!(!engine.mark_reminder_paid(Uuid::new_v4(), at(2)));
        assert!(!engine.delete_reminder(Uuid::new_v4()));
        assert_eq!(engine.list_reminders(&ReminderFilter::default(), at(2)), before);
    }

    #[test]
    fn deleted_reminder_is_not_rederived() {
        let mut engine = engine_with_trip();
        let all = ReminderFilter::default();
        let bob = engine
            .list_reminders(&all, at(2))
            .into_iter()
            .find(|r| r.debtor_name == "Bob")
            .unwrap()
            .id;

        assert!(engine.delete_reminder(bob));
        assert!(!engine.delete_reminder(bob));
        let reminders = engine.list_reminders(&all, at(2));
        assert_eq!(reminders.len(), 1);
        assert!(reminders.iter().all(|r| r.id != bob));
    }

    #[test]
    fn deleting_the_expense_forgets_dismissed_reminders() {
        let mut engine = engine_with_trip();
        let all = ReminderFilter::default();
        let reminders = engine.list_reminders(&all, at(2));
        let expense_id = reminders[0].expense_id.unwrap();
        for reminder in &reminders {
            assert!(engine.delete_reminder(reminder.id));
        }
        assert_eq!(engine.dismissed.len(), 2);

        assert!(engine.delete_expense(expense_id));
        assert!(engine.dismissed.is_empty());
    }

    #[test]
    fn cascading_group_delete_forgets_dismissed_reminders() {
        let mut engine = Engine::builder()
            .group_delete_policy(crate::GroupDeletePolicy::Cascade)
            .build();
        let trip = engine
            .add_group("Trip", &["You".to_string(), "Alice".to_string()])
            .unwrap();
        engine
            .add_expense(NewExpense {
                title: "Tickets".to_string(),
                amount: Money::new(4_000),
                participants: vec!["You".into(), "Alice".into()],
                group_id: Some(trip.id),
                occurred_at: at(1),
            })
            .unwrap();
        let id = engine.list_reminders(&ReminderFilter::default(), at(2))[0].id;
        assert!(engine.delete_reminder(id));

        assert!(engine.delete_group(trip.id));
        assert!(engine.dismissed.is_empty());
        assert!(engine.expenses.is_empty());
    }

    #[test]
    fn deleting_a_paid_reminder_removes_it() {
        let mut engine = engine_with_trip();
        let all = ReminderFilter::default();
        let id = engine.list_reminders(&all, at(2))[0].id;
        engine.mark_reminder_paid(id, at(2));

        assert!(engine.delete_reminder(id));
        assert!(engine.list_reminders(&all, at(2)).iter().all(|r| r.id != id));
    }

    #[test]
    fn filter_by_projected_status() {
        let mut engine = engine_with_trip();
        let all = ReminderFilter::default();
        let id = engine.list_reminders(&all, at(2))[0].id;
        engine.mark_reminder_paid(id, at(2));

        let overdue = ReminderFilter {
            status: Some(ReminderStatus::Overdue),
            group_id: None,
        };
        assert!(engine.list_reminders(&overdue, at(3)).is_empty());
        assert_eq!(engine.list_reminders(&overdue, at(20)).len(), 1);

        let summary = engine.reminder_summary(&all, at(20));
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.completed, 1);
    }
}
