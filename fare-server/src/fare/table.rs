//! Tiered distance pricing.

use serde::{Deserialize, Serialize};

use super::LineSurcharges;

/// Errors from fare calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// Upstream aggregation produced a negative distance
    #[error("total distance must not be negative, got {0}")]
    NegativeDistance(i64),

    /// Distance too large to price
    #[error("total distance {0} is out of range")]
    DistanceOutOfRange(u64),

    /// Fare table parameters are unusable
    #[error("invalid fare table: {0}")]
    InvalidTable(&'static str),
}

/// Fare table parameters.
///
/// Trips up to `free_distance` pay only the base fare. Beyond that, each
/// started `short_tier_step` costs `step_fare` until `short_tier_limit`;
/// past the limit, each started `long_tier_step` costs `step_fare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareTable {
    /// Fare charged for any trip.
    pub base_fare: u64,

    /// Distance covered by the base fare.
    pub free_distance: u64,

    /// Total distance where the short tier ends.
    pub short_tier_limit: u64,

    /// Distance increment billed in the short tier.
    pub short_tier_step: u64,

    /// Distance increment billed beyond the short tier.
    pub long_tier_step: u64,

    /// Amount charged per started increment.
    pub step_fare: u64,
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            free_distance: 10,
            short_tier_limit: 50,
            short_tier_step: 5,
            long_tier_step: 8,
            step_fare: 100,
        }
    }
}

/// The components of a computed fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareBreakdown {
    /// Base fare
    pub base: u64,
    /// Tiered distance surcharge
    pub distance_surcharge: u64,
    /// Sum of distinct line surcharges
    pub line_surcharge: u64,
}

impl FareBreakdown {
    /// Final fare before any rider discount.
    pub fn total(&self) -> u64 {
        self.base
            .saturating_add(self.distance_surcharge)
            .saturating_add(self.line_surcharge)
    }
}

impl FareTable {
    /// Check that the table can price every distance.
    pub fn validate(&self) -> Result<(), FareError> {
        if self.short_tier_step == 0 || self.long_tier_step == 0 {
            return Err(FareError::InvalidTable("tier steps must be positive"));
        }
        if self.short_tier_limit < self.free_distance {
            return Err(FareError::InvalidTable(
                "short tier limit must not be below the free distance",
            ));
        }
        Ok(())
    }

    /// Surcharge owed for `total_distance` on top of the base fare.
    ///
    /// Uses exact integer ceiling division, so boundaries step where the
    /// table says: with the defaults 10 → 0, 11 → 100, 50 → 800, 51 → 900.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the table fails [`FareTable::validate`].
    pub fn distance_surcharge(&self, total_distance: u64) -> Result<u64, FareError> {
        self.validate()?;

        if total_distance <= self.free_distance {
            return Ok(0);
        }

        let over = total_distance - self.free_distance;
        let span = self.short_tier_limit - self.free_distance;

        if over <= span {
            return Ok(over.div_ceil(self.short_tier_step).saturating_mul(self.step_fare));
        }

        let short_tier = span.div_ceil(self.short_tier_step).saturating_mul(self.step_fare);
        Ok(short_tier.saturating_add(
            (over - span)
                .div_ceil(self.long_tier_step)
                .saturating_mul(self.step_fare),
        ))
    }

    /// Compute the fare for a trip of `total_distance` touching the given lines.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `total_distance` is negative or the table is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_server::fare::{FareTable, LineSurcharges};
    ///
    /// let table = FareTable::default();
    /// let fare = table.calculate(35, &LineSurcharges::new()).unwrap();
    /// assert_eq!(fare.total(), 1750);
    /// ```
    pub fn calculate(
        &self,
        total_distance: i64,
        surcharges: &LineSurcharges,
    ) -> Result<FareBreakdown, FareError> {
        let distance =
            u64::try_from(total_distance).map_err(|_| FareError::NegativeDistance(total_distance))?;

        Ok(FareBreakdown {
            base: self.base_fare,
            distance_surcharge: self.distance_surcharge(distance)?,
            line_surcharge: surcharges.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineId;

    fn fare(distance: i64) -> u64 {
        FareTable::default()
            .calculate(distance, &LineSurcharges::new())
            .unwrap()
            .total()
    }

    #[test]
    fn default_table() {
        let table = FareTable::default();
        assert_eq!(table.base_fare, 1250);
        assert_eq!(table.free_distance, 10);
        assert_eq!(table.short_tier_limit, 50);
        assert_eq!(table.short_tier_step, 5);
        assert_eq!(table.long_tier_step, 8);
        assert_eq!(table.step_fare, 100);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn base_fare_up_to_ten() {
        for d in 0..=10 {
            assert_eq!(fare(d), 1250, "distance {d}");
        }
    }

    #[test]
    fn regression_values() {
        assert_eq!(fare(2), 1250);
        assert_eq!(fare(35), 1750);
        assert_eq!(fare(60), 2250);
    }

    #[test]
    fn tier_boundaries() {
        let table = FareTable::default();
        assert_eq!(table.distance_surcharge(10), Ok(0));
        assert_eq!(table.distance_surcharge(11), Ok(100));
        assert_eq!(table.distance_surcharge(12), Ok(100));
        assert_eq!(table.distance_surcharge(15), Ok(100));
        assert_eq!(table.distance_surcharge(16), Ok(200));
        assert_eq!(table.distance_surcharge(50), Ok(800));
        assert_eq!(table.distance_surcharge(51), Ok(900));
        assert_eq!(table.distance_surcharge(58), Ok(900));
        assert_eq!(table.distance_surcharge(59), Ok(1000));
    }

    #[test]
    fn negative_distance_rejected() {
        let result = FareTable::default().calculate(-1, &LineSurcharges::new());
        assert_eq!(result, Err(FareError::NegativeDistance(-1)));
    }

    #[test]
    fn line_surcharge_added_once() {
        let surcharges: LineSurcharges = [(LineId::new(2), 500)].into_iter().collect();
        let breakdown = FareTable::default().calculate(2, &surcharges).unwrap();
        assert_eq!(breakdown.line_surcharge, 500);
        assert_eq!(breakdown.total(), 1750);
    }

    #[test]
    fn breakdown_components() {
        let surcharges: LineSurcharges = [(LineId::new(1), 200), (LineId::new(2), 300)]
            .into_iter()
            .collect();
        let breakdown = FareTable::default().calculate(60, &surcharges).unwrap();
        assert_eq!(
            breakdown,
            FareBreakdown {
                base: 1250,
                distance_surcharge: 1000,
                line_surcharge: 500,
            }
        );
    }

    #[test]
    fn invalid_tables_rejected() {
        let zero_step = FareTable {
            short_tier_step: 0,
            ..FareTable::default()
        };
        assert!(zero_step.validate().is_err());

        let inverted = FareTable {
            short_tier_limit: 5,
            ..FareTable::default()
        };
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn calculate_rejects_zero_step() {
        let short = FareTable {
            short_tier_step: 0,
            ..FareTable::default()
        };
        assert!(matches!(
            short.calculate(35, &LineSurcharges::new()),
            Err(FareError::InvalidTable(_))
        ));

        let long = FareTable {
            long_tier_step: 0,
            ..FareTable::default()
        };
        assert!(matches!(
            long.calculate(60, &LineSurcharges::new()),
            Err(FareError::InvalidTable(_))
        ));
    }

    #[test]
    fn calculate_rejects_inverted_limit() {
        let inverted = FareTable {
            short_tier_limit: 5,
            ..FareTable::default()
        };
        assert!(matches!(
            inverted.calculate(35, &LineSurcharges::new()),
            Err(FareError::InvalidTable(_))
        ));
        assert!(matches!(
            inverted.distance_surcharge(2),
            Err(FareError::InvalidTable(_))
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let table: FareTable = serde_json::from_str(r#"{"base_fare": 1350}"#).unwrap();
        assert_eq!(table.base_fare, 1350);
        assert_eq!(table.step_fare, 100);
    }
}
