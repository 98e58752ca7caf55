//! Fare derivation.
//!
//! Turns a path's total distance and the lines it touched into the fare
//! owed: a base fare, a tiered distance surcharge, a flat surcharge per
//! distinct line, and finally an optional rider-category discount.

mod discount;
mod surcharge;
mod table;

pub use discount::{DiscountRule, DiscountTable, RiderCategory};
pub use surcharge::LineSurcharges;
pub use table::{FareBreakdown, FareError, FareTable};
