use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    EngineError, ExpenseGroup, GroupDeletePolicy, GroupSummary, GroupUpdate, Money, ResultEngine,
    participants::normalize_participants,
};

use super::{Engine, normalize_required_title};

fn validated_members(participants: &[String]) -> ResultEngine<Vec<String>> {
    let members = normalize_participants(participants);
    if members.is_empty() {
        return Err(EngineError::NoParticipants(
            "a group needs at least one participant".to_string(),
        ));
    }
    Ok(members)
}

impl Engine {
    /// Creates a group. Names are required, members are normalized and must not
    /// be empty.
    pub fn add_group(&mut self, name: &str, participants: &[String]) -> ResultEngine<ExpenseGroup> {
        let name = normalize_required_title(name, "group name")?;
        let participants = validated_members(participants)?;

        let group = ExpenseGroup {
            id: Uuid::new_v4(),
            name,
            participants,
            created_at: Utc::now(),
        };
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Applies `update` to a group.
    ///
    /// Returns `Ok(None)` for an unknown id. Provided fields are validated like
    /// in [`Engine::add_group`] before anything changes.
    pub fn update_group(
        &mut self,
        id: Uuid,
        update: GroupUpdate,
    ) -> ResultEngine<Option<ExpenseGroup>> {
        let name = update
            .name
            .as_deref()
            .map(|name| normalize_required_title(name, "group name"))
            .transpose()?;
        let participants = update
            .participants
            .as_deref()
            .map(validated_members)
            .transpose()?;

        let Some(group) = self.groups.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            group.name = name;
        }
        if let Some(participants) = participants {
            group.participants = participants;
        }
        Ok(Some(group.clone()))
    }

    /// Deletes a group according to the engine's [`GroupDeletePolicy`].
    ///
    /// Unknown ids are a no-op; returns whether a group was removed.
    pub fn delete_group(&mut self, id: Uuid) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        if self.groups.len() == before {
            return false;
        }
        if self.group_delete == GroupDeletePolicy::Cascade {
            let removed: HashSet<Uuid> = self
                .expenses
                .iter()
                .filter(|e| e.group_id == Some(id))
                .map(|e| e.id)
                .collect();
            self.expenses.retain(|e| !removed.contains(&e.id));
            self.reminders.retain(|r| r.group_id != Some(id));
            self.dismissed.retain(|_, expense_id| !removed.contains(expense_id));
        }
        true
    }

    #[must_use]
    pub fn groups(&self) -> &[ExpenseGroup] {
        &self.groups
    }

    pub fn group(&self, id: Uuid) -> ResultEngine<&ExpenseGroup> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(format!("group {id}")))
    }

    /// A group with its totals folded over the current expenses.
    pub fn group_summary(&self, id: Uuid) -> ResultEngine<GroupSummary> {
        let group = self.group(id)?;
        Ok(self.summarize(group))
    }

    /// Every group with its totals, in creation order.
    #[must_use]
    pub fn group_summaries(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(|g| self.summarize(g)).collect()
    }

    fn summarize(&self, group: &ExpenseGroup) -> GroupSummary {
        let expenses = self
            .expenses
            .iter()
            .filter(|e| e.group_id == Some(group.id));
        let (total_expenses, total_amount) = expenses
            .fold((0, Money::ZERO), |(count, total), e| {
                (count + 1, total.saturating_add(e.amount))
            });

        GroupSummary {
            group: group.clone(),
            total_expenses,
            total_amount,
        }
    }
}
