use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Serialize};

/// Signed money amount represented as **integer minor units** (cents).
///
/// Every stored amount (expense totals, materialized debts, reminder amounts)
/// uses this type. Equal-split shares are fractional, so they are accumulated
/// as `f64` minor units and turned into `Money` exactly once through
/// [`Money::from_minor_f64`], which rounds half-up.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Rounds a fractional number of minor units half-up into `Money`.
    ///
    /// `0.5` rounds to `1`, `-0.5` rounds to `0`. A tiny epsilon absorbs the
    /// representation error of sums such as `100 / 3 * 3`.
    #[must_use]
    pub fn from_minor_f64(minor: f64) -> Self {
        Self(round_half_up(minor) as i64)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns the value as a fractional number of minor units.
    #[must_use]
    pub fn as_minor_f64(self) -> f64 {
        self.0 as f64
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Addition clamped at the `i64` bounds.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

/// Round-half-up shared by every place that turns fractional minor units into
/// stored or displayed amounts.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5 + 1e-9).floor()
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let minor = abs % 100;
        write!(f, "{sign}{major}.{minor:02}")
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_plain_decimal() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(1050).to_string(), "10.50");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn checked_and_saturating_add_stop_at_the_bounds() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(Money::new(1).checked_add(Money::new(2)), Some(Money::new(3)));
        assert_eq!(max.saturating_add(Money::new(1)), max);
    }

    #[test]
    fn from_minor_f64_rounds_half_up() {
        assert_eq!(Money::from_minor_f64(0.5).minor(), 1);
        assert_eq!(Money::from_minor_f64(0.49).minor(), 0);
        assert_eq!(Money::from_minor_f64(33_333.333_333).minor(), 33_333);
        assert_eq!(Money::from_minor_f64(16_666.5).minor(), 16_667);
        assert_eq!(Money::from_minor_f64(100.0 / 3.0 * 3.0).minor(), 100);
        assert_eq!(Money::from_minor_f64(-0.5).minor(), 0);
        assert_eq!(Money::from_minor_f64(-1.5).minor(), -1);
    }
}
