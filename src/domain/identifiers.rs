//! Gene and NCBI locus identifier normalization.
//!
//! Multi-identifier text fields accept any mix of commas and whitespace as
//! separators. The normalized form is trimmed, free of empty tokens and free of
//! duplicates, serialized as a comma-joined string for downstream calls.

use std::collections::HashSet;
use std::fmt;

/// Which kind of identifier a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Internal gene identifier, e.g. `Ca_00001`.
    Gene,
    /// NCBI-assigned locus identifier, e.g. `LOC101511858`.
    Locus,
}

impl IdentifierKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Gene => "Gene ID",
            Self::Locus => "NCBI ID",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalized, typed set of identifiers parsed from one input field.
///
/// Entries are unique and non-empty. Order is not part of the contract;
/// the first occurrence of each identifier determines its position so that
/// output stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSet {
    kind: IdentifierKind,
    ids: Vec<String>,
}

impl IdentifierSet {
    /// Parses a raw multi-identifier field.
    ///
    /// Whitespace-only input yields an empty set, which callers treat as
    /// "field not provided". No format validation is performed.
    pub fn parse(kind: IdentifierKind, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self {
                kind,
                ids: Vec::new(),
            };
        }

        let mut seen = HashSet::new();
        let ids = trimmed
            .replace(',', " ")
            .split_whitespace()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter(|token| seen.insert(token.to_string()))
            .map(str::to_string)
            .collect();

        Self { kind, ids }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Comma-joined canonical form passed to the backend.
    pub fn canonical(&self) -> String {
        self.ids.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonicalize(raw: &str) -> String {
        IdentifierSet::parse(IdentifierKind::Gene, raw).canonical()
    }

    fn sorted(canonical: &str) -> Vec<String> {
        let mut ids: Vec<String> = canonical.split(',').map(str::to_string).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_dedup_mixed_separators() {
        let canonical = canonicalize("Ca_00002, Ca_00001,Ca_00001");
        assert_eq!(sorted(&canonical), vec!["Ca_00001", "Ca_00002"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("   \t\n "), "");
        assert!(IdentifierSet::parse(IdentifierKind::Locus, "  ").is_empty());
    }

    #[test]
    fn test_separators_only_is_empty() {
        assert_eq!(canonicalize(" , ,, "), "");
    }

    #[test]
    fn test_no_empty_tokens() {
        let set = IdentifierSet::parse(IdentifierKind::Gene, ",,Ca_00001 ,\t, Ca_00003,,");
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|id| !id.is_empty()));
        assert!(!set.canonical().contains(",,"));
    }

    #[test]
    fn test_reparse_is_idempotent() {
        let inputs = [
            "Ca_00001 Ca_00002 Ca_00003",
            "LOC101511858, LOC101496413 ,LOC101511858",
            "a,b\tc\nd , a",
        ];

        for input in inputs {
            let once = canonicalize(input);
            let twice = canonicalize(&once);
            assert_eq!(sorted(&once), sorted(&twice), "input: {input:?}");
        }
    }

    #[test]
    fn test_each_distinct_id_exactly_once() {
        let set = IdentifierSet::parse(IdentifierKind::Gene, "x y x z y x");
        let mut ids: Vec<&str> = set.iter().collect();
        ids.sort();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_malformed_ids_pass_through() {
        assert_eq!(canonicalize("not-an-id!!"), "not-an-id!!");
    }

    #[test]
    fn test_kind_is_kept() {
        let set = IdentifierSet::parse(IdentifierKind::Locus, "LOC1");
        assert_eq!(set.kind(), IdentifierKind::Locus);
        assert_eq!(set.kind().to_string(), "NCBI ID");
    }
}
