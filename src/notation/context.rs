//! Input records for one variant × transcript annotation
//!
//! # Coordinate System
//!
//! | Field | Basis | Notes |
//! |-------|-------|-------|
//! | `protein_begin` / `protein_end` | 1-based | Inclusive |
//! | `coding_begin` / `coding_end` | 1-based | Inclusive CDS positions |
//!
//! Insertions follow the `begin = end + 1` convention at both levels; the
//! transient inverted range is resolved by the notation builder.

use serde::{Deserialize, Serialize};

/// Per-variant, per-transcript change context supplied by the surrounding
/// annotation pipeline. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptChangeContext {
    /// First affected protein position (1-based)
    pub protein_begin: u64,
    /// Last affected protein position (1-based)
    pub protein_end: u64,
    /// First affected CDS position (1-based)
    pub coding_begin: i64,
    /// Last affected CDS position (1-based)
    pub coding_end: i64,
    /// Transcript-level reference allele (empty for insertions)
    pub reference_allele: String,
    /// Transcript-level alternate allele (empty for deletions)
    pub alternate_allele: String,
    /// Whether `coding_begin` is a valid CDS coordinate
    pub coding_begin_valid: bool,
    /// Whether `coding_end` is a valid CDS coordinate
    pub coding_end_valid: bool,
}

impl TranscriptChangeContext {
    /// Create a context with both CDS boundaries marked valid.
    pub fn new(
        protein_begin: u64,
        protein_end: u64,
        coding_begin: i64,
        coding_end: i64,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
    ) -> Self {
        Self {
            protein_begin,
            protein_end,
            coding_begin,
            coding_end,
            reference_allele: reference_allele.into(),
            alternate_allele: alternate_allele.into(),
            coding_begin_valid: true,
            coding_end_valid: true,
        }
    }

    /// A no-op reference call: alternate identical to reference.
    pub fn is_reference_call(&self) -> bool {
        self.reference_allele == self.alternate_allele
    }

    /// Both CDS boundaries usable.
    pub fn has_valid_cds(&self) -> bool {
        self.coding_begin_valid && self.coding_end_valid
    }

    /// Whether the alternate allele consists solely of canonical bases.
    ///
    /// Symbolic alleles (`<DEL>`, breakend notation) and ambiguity codes
    /// fail this check and keep the variant out of protein notation.
    pub fn alternate_is_canonical(&self) -> bool {
        self.alternate_allele
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T'))
    }
}

/// Transcript-level effect predicates computed upstream.
///
/// This crate consumes these classifications; it never derives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantEffectFlags {
    /// Variant shifts the reading frame
    pub frameshift: bool,
    /// Variant removes the stop codon
    pub stop_lost: bool,
    /// Variant changes the stop codon to another stop codon
    pub stop_retained: bool,
    /// Variant disrupts the start codon
    pub start_lost: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_call() {
        let ctx = TranscriptChangeContext::new(2, 2, 4, 4, "A", "A");
        assert!(ctx.is_reference_call());
        let ctx = TranscriptChangeContext::new(2, 2, 4, 4, "A", "G");
        assert!(!ctx.is_reference_call());
    }

    #[test]
    fn test_canonical_alternate() {
        assert!(TranscriptChangeContext::new(2, 2, 4, 4, "A", "acgt").alternate_is_canonical());
        // empty alternate (deletion) passes
        assert!(TranscriptChangeContext::new(2, 2, 4, 6, "AAA", "").alternate_is_canonical());
        assert!(!TranscriptChangeContext::new(2, 2, 4, 4, "A", "N").alternate_is_canonical());
        assert!(!TranscriptChangeContext::new(2, 2, 4, 4, "A", "<DEL>").alternate_is_canonical());
    }

    #[test]
    fn test_cds_validity() {
        let mut ctx = TranscriptChangeContext::new(2, 2, 4, 4, "A", "G");
        assert!(ctx.has_valid_cds());
        ctx.coding_end_valid = false;
        assert!(!ctx.has_valid_cds());
    }
}
