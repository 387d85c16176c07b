use serde::{Deserialize, Serialize};

use crate::core::entry::Entry;
use crate::utils::validation::ValidationError;

/// Inclusive, 1-based range of hit ranks to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRange {
    /// First rank to keep (1 = first hit)
    pub from: usize,

    /// Last rank to keep, `None` reads through the end of the table
    pub to: Option<usize>,
}

impl HitRange {
    /// Build a validated range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ZeroRank` if either bound is 0, or
    /// `ValidationError::InvertedRange` if `to` is smaller than `from`.
    pub fn new(from: usize, to: Option<usize>) -> Result<Self, ValidationError> {
        if from == 0 || to == Some(0) {
            return Err(ValidationError::ZeroRank);
        }
        if let Some(to) = to {
            if to < from {
                return Err(ValidationError::InvertedRange { from, to });
            }
        }
        Ok(Self { from, to })
    }

    /// Every hit of the table
    #[must_use]
    pub fn all() -> Self {
        Self { from: 1, to: None }
    }

    #[must_use]
    pub fn contains(&self, rank: usize) -> bool {
        rank >= self.from && !self.is_past(rank)
    }

    /// True once `rank` lies beyond the upper bound
    #[must_use]
    pub fn is_past(&self, rank: usize) -> bool {
        self.to.is_some_and(|to| rank > to)
    }
}

impl Default for HitRange {
    fn default() -> Self {
        Self::all()
    }
}

impl std::fmt::Display for HitRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}-{to}", self.from),
            None => write!(f, "{}-end", self.from),
        }
    }
}

/// Entries extracted from a report together with the lines that could not be parsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Accepted identifiers, in table order
    pub entries: Vec<Entry>,

    /// One diagnostic per unparsable hit line, in encounter order
    pub errors: Vec<String>,
}

impl SummaryReport {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of candidate hit lines examined within the range
    #[must_use]
    pub fn examined(&self) -> usize {
        self.entries.len() + self.errors.len()
    }
}
