//! Rider-category discounts.
//!
//! No rates are built in. Integrators supply a [`DiscountTable`]; a
//! category with no configured rule pays the full fare.

use serde::{Deserialize, Serialize};

use super::FareError;

/// Rider classification that may gate a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiderCategory {
    Adult,
    Youth,
    Child,
    #[default]
    None,
}

/// A discount: subtract `deduction`, then take `percent_off` off the rest.
///
/// Results round down to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Flat amount removed before the percentage applies.
    #[serde(default)]
    pub deduction: u64,

    /// Percentage taken off the remainder, 0..=100.
    pub percent_off: u8,
}

impl DiscountRule {
    /// Apply the rule to `fare`.
    pub fn apply(&self, fare: u64) -> u64 {
        let remainder = fare.saturating_sub(self.deduction);
        remainder * u64::from(100 - self.percent_off.min(100)) / 100
    }
}

/// Configured discount rules per rider category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountTable {
    /// Rule for youth riders
    pub youth: Option<DiscountRule>,
    /// Rule for child riders
    pub child: Option<DiscountRule>,
}

impl DiscountTable {
    /// Check every configured rule is a real percentage.
    pub fn validate(&self) -> Result<(), FareError> {
        let over_100 = [self.youth, self.child]
            .into_iter()
            .flatten()
            .any(|rule| rule.percent_off > 100);
        if over_100 {
            return Err(FareError::InvalidTable("percent_off must be at most 100"));
        }
        Ok(())
    }

    /// Returns the rule configured for `category`, if any.
    pub fn rule_for(&self, category: RiderCategory) -> Option<DiscountRule> {
        match category {
            RiderCategory::Youth => self.youth,
            RiderCategory::Child => self.child,
            RiderCategory::Adult | RiderCategory::None => None,
        }
    }

    /// Apply the discount for `category` to `fare`.
    ///
    /// Adults, unclassified riders, and categories without a rule pay `fare`.
    pub fn apply(&self, fare: u64, category: RiderCategory) -> u64 {
        self.rule_for(category).map_or(fare, |rule| rule.apply(fare))
    }
}
