//! Tokenizer for a single summary table line.
//!
//! Two layouts are recognized:
//!
//! | Layout | Example | Entry |
//! |--------|---------|-------|
//! | Generic, pipe-delimited | `sp\|Q61285\|ABCD2_MOUSE RecName: ...  1508   0.0` | `sp:Q61285` |
//! | Structure (PDB seqres) | `4f4c_A mol:protein length:1284  MULTIDRUG ...  1000   0.0` | `pdb:4f4c` |
//!
//! BLAST+ prints PDB hits in the generic layout (`pdb|4F4C|A Chain A, ...`),
//! which therefore yields `pdb:4F4C`.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::entry::Entry;
use crate::utils::validation::{is_valid_database_tag, normalize_pdb_id};

/// Database tag used for structure hits
pub const PDB_DATABASE: &str = "pdb";

/// `<pdb id>_<chain> mol:<type>`; the identifier is checked separately
fn structure_hit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9]+)_([A-Za-z0-9]{1,2})\s+mol:\S+")
            .expect("structure hit regex is valid")
    })
}

/// Extract the identifier of a summary line
///
/// Returns None when no known layout matches, including lines that look like
/// structure hits but carry an invalid PDB identifier (e.g. `9450_pdb mol:protein ...`).
#[must_use]
pub fn parse_hit_line(line: &str) -> Option<Entry> {
    let line = line.trim_start();
    parse_generic_hit(line).or_else(|| parse_structure_hit(line))
}

/// `db|accession|description`
fn parse_generic_hit(line: &str) -> Option<Entry> {
    let token = line.split_whitespace().next()?;
    let mut fields = token.split('|');

    let database = fields.next()?;
    let accession = fields.next()?;

    if !is_valid_database_tag(database) || accession.is_empty() {
        return None;
    }

    Some(Entry::new(database, accession))
}

/// `1abc_A mol:protein length:123  DESCRIPTION`
fn parse_structure_hit(line: &str) -> Option<Entry> {
    let caps = structure_hit_regex().captures(line)?;
    let pdb_id = normalize_pdb_id(caps.get(1)?.as_str())?;
    Some(Entry::new(PDB_DATABASE, pdb_id))
}

/// Diagnostic recorded for a summary line that cannot be parsed
#[must_use]
pub fn hit_error_message(line: &str) -> String {
    format!("ERROR cannot parse hit {} : skip this Hit", line.trim())
}
