//! Start Task input fields and query selection.

use serde::Deserialize;

use crate::domain::identifiers::{IdentifierKind, IdentifierSet};

/// Raw values of the four Start Task text fields.
///
/// Field names match the HTML form controls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartTaskInput {
    /// Single Gene ID.
    #[serde(default)]
    pub tid: String,
    /// Multiple Gene IDs, comma and/or whitespace separated.
    #[serde(default)]
    pub mtid: String,
    /// Single NCBI Locus ID.
    #[serde(default)]
    pub locid: String,
    /// Multiple NCBI Locus IDs, comma and/or whitespace separated.
    #[serde(default)]
    pub mlocid: String,
}

/// The one query chosen from a submitted Start Task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskQuery {
    /// Single Gene ID, trimmed.
    Gene(String),
    /// Canonical comma-joined Gene IDs.
    Genes(String),
    /// Single NCBI Locus ID, trimmed.
    Locus(String),
    /// Canonical comma-joined NCBI Locus IDs.
    Loci(String),
}

impl TaskQuery {
    /// Short name of the branch, used in logs.
    pub fn branch(&self) -> &'static str {
        match self {
            Self::Gene(_) => "single_gene",
            Self::Genes(_) => "multi_gene",
            Self::Locus(_) => "single_locus",
            Self::Loci(_) => "multi_locus",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Gene(v) | Self::Genes(v) | Self::Locus(v) | Self::Loci(v) => v,
        }
    }
}

impl StartTaskInput {
    /// Selects the query to run.
    ///
    /// Precedence is single gene, multi gene, single locus, multi locus.
    /// Only the first non-empty field is used; the rest are ignored even when
    /// populated. Returns `None` when every field is empty after
    /// normalization.
    pub fn select_query(&self) -> Option<TaskQuery> {
        let tid = self.tid.trim();
        if !tid.is_empty() {
            return Some(TaskQuery::Gene(tid.to_string()));
        }

        let mtid = IdentifierSet::parse(IdentifierKind::Gene, &self.mtid);
        if !mtid.is_empty() {
            return Some(TaskQuery::Genes(mtid.canonical()));
        }

        let locid = self.locid.trim();
        if !locid.is_empty() {
            return Some(TaskQuery::Locus(locid.to_string()));
        }

        let mlocid = IdentifierSet::parse(IdentifierKind::Locus, &self.mlocid);
        if !mlocid.is_empty() {
            return Some(TaskQuery::Loci(mlocid.canonical()));
        }

        None
    }

    /// True when the single Gene ID field holds something besides whitespace.
    pub fn has_gene_id(&self) -> bool {
        !self.tid.trim().is_empty()
    }
}
