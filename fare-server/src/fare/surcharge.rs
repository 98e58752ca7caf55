//! Per-line surcharges touched by a path.

use std::collections::BTreeMap;

use crate::domain::{LineId, Path};

/// Surcharges keyed by line, so each line is charged at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSurcharges {
    by_line: BTreeMap<LineId, u32>,
}

impl LineSurcharges {
    /// Create an empty set of surcharges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the surcharge of every distinct line on `path`.
    pub fn for_path<F>(path: &Path, surcharge_of: F) -> Self
    where
        F: Fn(LineId) -> u32,
    {
        path.distinct_lines()
            .into_iter()
            .map(|line| (line, surcharge_of(line)))
            .collect()
    }

    /// Record a line's surcharge. A repeated line replaces the earlier entry.
    pub fn insert(&mut self, line: LineId, surcharge: u32) {
        self.by_line.insert(line, surcharge);
    }

    /// Sum over all recorded lines.
    pub fn total(&self) -> u64 {
        self.by_line.values().map(|&s| u64::from(s)).sum()
    }

    /// Number of distinct lines recorded.
    pub fn len(&self) -> usize {
        self.by_line.len()
    }

    /// Check if no lines are recorded.
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

impl FromIterator<(LineId, u32)> for LineSurcharges {
    fn from_iter<I: IntoIterator<Item = (LineId, u32)>>(iter: I) -> Self {
        Self {
            by_line: iter.into_iter().collect(),
        }
    }
}
