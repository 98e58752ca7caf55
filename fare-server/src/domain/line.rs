//! Transit line identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the line that owns an edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Wrap a raw line identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_raw_id() {
        assert!(LineId::new(1) < LineId::new(2));
        assert_eq!(LineId::new(5).get(), 5);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", LineId::new(3)), "LineId(3)");
    }
}
