//! Station identifier and display types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station in the transit network.
///
/// # Examples
///
/// ```
/// use fare_server::domain::StationId;
///
/// let gangnam = StationId::new(2);
/// assert_eq!(gangnam.get(), 2);
/// assert_eq!(gangnam.to_string(), "2");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw station identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a traveler sees for a station in a path summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDisplay {
    /// Station identifier
    pub id: StationId,

    /// Human-readable station name
    pub name: String,
}

impl StationDisplay {
    /// Creates a display record.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", StationId::new(42)), "42");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StationId::new(7)), "StationId(7)");
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&StationId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: StationId = serde_json::from_str("11").unwrap();
        assert_eq!(id, StationId::new(11));
    }

    #[test]
    fn display_record_json_shape() {
        let station = StationDisplay::new(StationId::new(1), "교대역");
        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "교대역" }));
    }
}
