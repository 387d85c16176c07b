//! Centralized validation and helper functions.

/// Validate a generic database tag (e.g. "sp", "gb", "embl", "ref").
///
/// # Examples
///
/// ```
/// use blast2seqids::utils::validation::is_valid_database_tag;
///
/// assert!(is_valid_database_tag("sp"));
/// assert!(is_valid_database_tag("tr_new"));
/// assert!(!is_valid_database_tag("9sp"));
/// assert!(!is_valid_database_tag(""));
/// ```
#[must_use]
pub fn is_valid_database_tag(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a PDB structure identifier (one digit followed by three alphanumerics).
///
/// # Examples
///
/// ```
/// use blast2seqids::utils::validation::is_valid_pdb_id;
///
/// assert!(is_valid_pdb_id("4f4c"));
/// assert!(is_valid_pdb_id("1ABC"));
/// assert!(!is_valid_pdb_id("9450_pdb"));
/// assert!(!is_valid_pdb_id("abcd"));
/// ```
#[must_use]
pub fn is_valid_pdb_id(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 4
        && bytes[0].is_ascii_digit()
        && bytes[1..].iter().all(u8::is_ascii_alphanumeric)
}

/// Normalize a PDB identifier to lowercase.
/// Returns None if the input is not a valid PDB identifier.
#[must_use]
pub fn normalize_pdb_id(s: &str) -> Option<String> {
    if is_valid_pdb_id(s) {
        Some(s.to_ascii_lowercase())
    } else {
        None
    }
}

/// Input validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Hit ranks start at 1")]
    ZeroRank,
    #[error("Invalid hit range: --to ({to}) is smaller than --from ({from})")]
    InvertedRange { from: usize, to: usize },
}
