use serde::{Deserialize, Serialize};

/// A sequence identifier extracted from one hit of a report
///
/// Two entries are equal when both the database tag and the accession match.
/// Multi-chain structure hits produce several equal entries, which are kept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Database tag (e.g. "sp", "gb", "pdb")
    pub database: String,

    /// Accession within that database (e.g. "Q61285", "4f4c")
    pub accession: String,
}

impl Entry {
    pub fn new(database: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            accession: accession.into(),
        }
    }
}

/// Renders the USA address, `database:accession`
impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.database, self.accession)
    }
}

impl From<(&str, &str)> for Entry {
    fn from((database, accession): (&str, &str)) -> Self {
        Self::new(database, accession)
    }
}
