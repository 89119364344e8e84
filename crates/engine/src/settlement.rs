//! Debt settlement: turns a list of expenses into pairwise debts, a per-person
//! leaderboard and per-person balance summaries.
//!
//! Everything here is a pure function of its inputs. Nothing is cached: the
//! store calls these on every query so balances can never drift away from the
//! expenses they are derived from.
//!
//! Shares are accumulated as `f64` minor units and rounded half-up once, when
//! the accumulator is materialized into [`Money`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{Expense, Money};

/// "`debtor` owes `creditor` `amount`", aggregated over every expense the two
/// share. `amount` is always positive and `debtor != creditor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub debtor: String,
    pub creditor: String,
    pub amount: Money,
}

/// Net position of one participant across a set of expenses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Full amounts of the expenses this person paid for.
    pub paid: Money,
    /// Shares of other people's expenses this person took part in.
    pub owed: Money,
    /// `paid - owed`.
    pub net: Money,
    /// 1-based; equal nets share a rank.
    pub rank: usize,
}

/// What one person owes and is owed within a set of debts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub name: String,
    /// Sum of debts where the person is the debtor.
    pub owes: Money,
    /// Sum of debts where the person is the creditor.
    pub owed_to: Money,
    /// `owed_to - owes`.
    pub net: Money,
    pub debts: Vec<Debt>,
}

/// Participants of `expense` that count for settlement, in order.
///
/// With `members` set, names outside the member list are dropped; the payer is
/// then the first *remaining* participant.
pub(crate) fn valid_participants<'a>(
    expense: &'a Expense,
    members: Option<&[String]>,
) -> Vec<&'a str> {
    expense
        .participants
        .iter()
        .filter(|name| members.is_none_or(|members| members.contains(*name)))
        .map(String::as_str)
        .collect()
}

/// Compute the pairwise debts produced by `expenses`.
///
/// Callers pick the expenses (one group, or all of them); `members`, when
/// given, restricts every expense to the group's participants. Expenses left
/// with nobody are skipped.
///
/// Debts in opposite directions between the same two people are netted, so
/// each pair yields at most one debt. The result is sorted by
/// `(debtor, creditor)` and identical input always gives identical output.
#[must_use]
pub fn compute_debts<'a, I>(expenses: I, members: Option<&[String]>) -> Vec<Debt>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut owes: BTreeMap<(&str, &str), f64> = BTreeMap::new();

    for expense in expenses {
        let valid = valid_participants(expense, members);
        let Some((payer, others)) = valid.split_first() else {
            continue;
        };
        let share = expense.amount.as_minor_f64() / valid.len() as f64;
        for debtor in others {
            *owes.entry((*debtor, *payer)).or_insert(0.0) += share;
        }
    }

    let mut debts = Vec::new();
    for (&(debtor, creditor), &amount) in &owes {
        let reverse = owes.get(&(creditor, debtor)).copied();
        // The pair is handled once, from the lexicographically smaller key.
        if reverse.is_some() && creditor < debtor {
            continue;
        }
        let net = amount - reverse.unwrap_or(0.0);
        let (debtor, creditor, net) = if net >= 0.0 {
            (debtor, creditor, net)
        } else {
            (creditor, debtor, -net)
        };
        let amount = Money::from_minor_f64(net);
        if amount.is_positive() {
            debts.push(Debt {
                debtor: debtor.to_string(),
                creditor: creditor.to_string(),
                amount,
            });
        }
    }
    debts.sort_by(|a, b| (&a.debtor, &a.creditor).cmp(&(&b.debtor, &b.creditor)));
    debts
}

/// Compute the net leaderboard of `expenses`.
///
/// The payer's `paid` grows by the full amount, every other valid participant's
/// `owed` grows by their share. Entries are sorted by `net` descending with a
/// stable sort, so ties keep first-seen order.
#[must_use]
pub fn compute_leaderboard<'a, I>(
    expenses: I,
    members: Option<&[String]>,
) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut rows: Vec<(&str, Money, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for expense in expenses {
        let valid = valid_participants(expense, members);
        let Some((payer, others)) = valid.split_first() else {
            continue;
        };
        let share = expense.amount.as_minor_f64() / valid.len() as f64;

        let idx = row(&mut rows, &mut index, *payer);
        rows[idx].1 = rows[idx].1.saturating_add(expense.amount);
        for name in others {
            let idx = row(&mut rows, &mut index, *name);
            rows[idx].2 += share;
        }
    }

    let mut entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .map(|(name, paid, owed)| {
            let owed = Money::from_minor_f64(owed);
            LeaderboardEntry {
                name: name.to_string(),
                paid,
                owed,
                net: paid - owed,
                rank: 0,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.net.cmp(&a.net));
    let nets: Vec<Money> = entries.iter().map(|e| e.net).collect();
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = 1 + nets[..idx].iter().filter(|net| **net > entry.net).count();
    }
    entries
}

/// Index of `name` in the leaderboard accumulator, appending it on first sight.
fn row<'a>(
    rows: &mut Vec<(&'a str, Money, f64)>,
    index: &mut HashMap<&'a str, usize>,
    name: &'a str,
) -> usize {
    *index.entry(name).or_insert_with(|| {
        rows.push((name, Money::ZERO, 0.0));
        rows.len() - 1
    })
}

/// Fold `debts` into the balance summary of `name`.
#[must_use]
pub fn balance_summary(debts: &[Debt], name: &str) -> BalanceSummary {
    let debts: Vec<Debt> = debts
        .iter()
        .filter(|d| d.debtor == name || d.creditor == name)
        .cloned()
        .collect();
    let owes: Money = debts
        .iter()
        .filter(|d| d.debtor == name)
        .map(|d| d.amount)
        .sum();
    let owed_to: Money = debts
        .iter()
        .filter(|d| d.creditor == name)
        .map(|d| d.amount)
        .sum();

    BalanceSummary {
        name: name.to_string(),
        owes,
        owed_to,
        net: owed_to - owes,
        debts,
    }
}
