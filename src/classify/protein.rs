//! Protein change classification
//!
//! Two-stage decision table: a general stage keyed on the length-delta
//! shape of the residue strings, then a specific stage that refines the
//! general tag. Classification only ever refines; the stop-retained reset
//! to `None` lives in the notation builder, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Protein-level change kind (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// No protein-level effect
    None,
    /// Single (or equal-length) residue replacement
    Substitution,
    /// In-frame residue deletion
    Deletion,
    /// In-frame residue insertion
    Insertion,
    /// Insertion duplicating the residues immediately 5' of it
    Duplication,
    /// Combined deletion-insertion (`delins`)
    DeletionInsertion,
    /// Reading-frame change
    Frameshift,
    /// Not classifiable (start-lost and similar overrides)
    Unknown,
}

impl ChangeKind {
    /// Canonical lowercase token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::None => "none",
            ChangeKind::Substitution => "substitution",
            ChangeKind::Deletion => "deletion",
            ChangeKind::Insertion => "insertion",
            ChangeKind::Duplication => "duplication",
            ChangeKind::DeletionInsertion => "delins",
            ChangeKind::Frameshift => "frameshift",
            ChangeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Length-delta shape of a residue change (general stage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Unchanged,
    PureInsertion,
    PureDeletion,
    Other,
}

fn shape_of(reference: &str, alternate: &str) -> Shape {
    if reference == alternate {
        Shape::Unchanged
    } else if reference.is_empty() && !alternate.is_empty() {
        Shape::PureInsertion
    } else if !reference.is_empty() && alternate.is_empty() {
        Shape::PureDeletion
    } else {
        Shape::Other
    }
}

/// Classify a trimmed residue change.
///
/// Pure and total: every (length, length) combination maps to exactly one
/// kind. The frameshift flag dominates everything except the no-change
/// case.
pub fn classify_protein_change(reference: &str, alternate: &str, frameshift: bool) -> ChangeKind {
    match shape_of(reference, alternate) {
        Shape::Unchanged => ChangeKind::None,
        _ if frameshift => ChangeKind::Frameshift,
        Shape::PureInsertion => ChangeKind::Insertion,
        Shape::PureDeletion => ChangeKind::Deletion,
        Shape::Other if reference.len() == 1 && alternate.len() == 1 => ChangeKind::Substitution,
        Shape::Other if alternate.len() > reference.len() && alternate.contains(reference) => {
            ChangeKind::Duplication
        }
        Shape::Other if reference.len() != alternate.len() => ChangeKind::DeletionInsertion,
        Shape::Other => ChangeKind::Substitution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_residues_are_none() {
        assert_eq!(classify_protein_change("K", "K", false), ChangeKind::None);
        assert_eq!(classify_protein_change("", "", false), ChangeKind::None);
        // no-change wins even under a frameshift flag
        assert_eq!(classify_protein_change("K", "K", true), ChangeKind::None);
    }

    #[test]
    fn test_frameshift_dominates() {
        assert_eq!(
            classify_protein_change("K", "", true),
            ChangeKind::Frameshift
        );
        assert_eq!(
            classify_protein_change("", "A", true),
            ChangeKind::Frameshift
        );
        assert_eq!(
            classify_protein_change("K", "E", true),
            ChangeKind::Frameshift
        );
    }

    #[test]
    fn test_pure_indels() {
        assert_eq!(classify_protein_change("", "A", false), ChangeKind::Insertion);
        assert_eq!(classify_protein_change("K", "", false), ChangeKind::Deletion);
        assert_eq!(classify_protein_change("KV", "", false), ChangeKind::Deletion);
    }

    #[test]
    fn test_single_residue_substitution() {
        assert_eq!(
            classify_protein_change("K", "E", false),
            ChangeKind::Substitution
        );
    }

    #[test]
    fn test_duplication_requires_containment_and_growth() {
        assert_eq!(
            classify_protein_change("K", "VKV", false),
            ChangeKind::Duplication
        );
        // growth without containment is a delins
        assert_eq!(
            classify_protein_change("K", "VEV", false),
            ChangeKind::DeletionInsertion
        );
    }

    #[test]
    fn test_length_change_is_delins() {
        assert_eq!(
            classify_protein_change("KV", "E", false),
            ChangeKind::DeletionInsertion
        );
    }

    #[test]
    fn test_equal_length_defaults_to_substitution() {
        assert_eq!(
            classify_protein_change("KV", "EA", false),
            ChangeKind::Substitution
        );
    }
}
