//! Genomic/coding-level variant type classification
//!
//! Two classification conventions coexist here on purpose. Convention A
//! folds every length change into an insertion or deletion by direction;
//! the canonical Convention B distinguishes pure indels from combined
//! ones. Downstream consumers depend on each independently, so the two
//! functions must never be merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant kind at the genomic/coding level (closed set)
///
/// Small-variant tags come from allele lengths; the structural tags come
/// from symbolic allele type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    /// Single nucleotide variant
    SingleNucleotide,
    /// Multi-nucleotide variant (equal allele lengths > 1)
    MultiNucleotide,
    /// Pure insertion
    Insertion,
    /// Pure deletion
    Deletion,
    /// Combined insertion-deletion
    Indel,
    /// Not classifiable
    Unknown,
    /// Copy number above the ploidy baseline
    CopyNumberGain,
    /// Copy number below the ploidy baseline
    CopyNumberLoss,
    /// Copy number event at the ploidy baseline
    CopyNumberFlat,
    /// Tandem duplication
    TandemDuplication,
    /// Inversion
    Inversion,
    /// Translocation breakend
    TranslocationBreakend,
    /// Mobile element insertion
    MobileElementInsertion,
}

impl VariantKind {
    /// Canonical token for this kind, Sequence-Ontology style.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::SingleNucleotide => "SNV",
            VariantKind::MultiNucleotide => "MNV",
            VariantKind::Insertion => "insertion",
            VariantKind::Deletion => "deletion",
            VariantKind::Indel => "indel",
            VariantKind::Unknown => "unknown",
            VariantKind::CopyNumberGain => "copy_number_gain",
            VariantKind::CopyNumberLoss => "copy_number_loss",
            VariantKind::CopyNumberFlat => "copy_number_variation",
            VariantKind::TandemDuplication => "tandem_duplication",
            VariantKind::Inversion => "inversion",
            VariantKind::TranslocationBreakend => "translocation_breakend",
            VariantKind::MobileElementInsertion => "mobile_element_insertion",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convention A: fold any length change into insertion/deletion by
/// direction.
pub fn classify_by_length_direction(ref_len: usize, alt_len: usize) -> VariantKind {
    if alt_len != ref_len {
        if alt_len > ref_len {
            VariantKind::Insertion
        } else {
            VariantKind::Deletion
        }
    } else if ref_len == 1 {
        VariantKind::SingleNucleotide
    } else {
        VariantKind::MultiNucleotide
    }
}

/// Convention B (canonical): pure indels by emptiness, `Indel` for mixed
/// length changes.
pub fn classify_canonical(ref_len: usize, alt_len: usize) -> VariantKind {
    if alt_len == 0 && ref_len > 0 {
        VariantKind::Deletion
    } else if alt_len > 0 && ref_len == 0 {
        VariantKind::Insertion
    } else if alt_len != ref_len {
        VariantKind::Indel
    } else if ref_len == 1 {
        VariantKind::SingleNucleotide
    } else {
        VariantKind::MultiNucleotide
    }
}

/// Structural-variant type token from a symbolic allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructuralType {
    Deletion,
    Duplication {
        /// Whether the record carried an explicit tandem mark
        tandem: bool,
    },
    Inversion,
    Insertion,
    Breakend,
    MobileElement,
    CopyNumberVariation,
    LossOfHeterozygosity,
}

/// Upstream tool-specific copy-number call, when one was provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CopyNumberCall {
    Gain,
    Loss,
    /// Copy number at reference ploidy
    Reference,
}

/// Copy-number evidence attached to a structural record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CopyNumberInfo {
    /// Explicit upstream call; wins over the extracted copy number
    pub call: Option<CopyNumberCall>,
    /// Extracted integer copy number
    pub copy_number: Option<u32>,
    /// Whether the record sits on a sex chromosome (ploidy baseline 1)
    pub on_allosome: bool,
}

/// Resolve a structural type token to a variant kind.
pub fn resolve_structural(ty: StructuralType, copy_number: &CopyNumberInfo) -> VariantKind {
    match ty {
        StructuralType::Deletion => VariantKind::Deletion,
        StructuralType::Duplication { tandem: true } => VariantKind::TandemDuplication,
        StructuralType::Duplication { tandem: false } => VariantKind::CopyNumberGain,
        StructuralType::Inversion => VariantKind::Inversion,
        StructuralType::Insertion => VariantKind::Insertion,
        StructuralType::Breakend => VariantKind::TranslocationBreakend,
        StructuralType::MobileElement => VariantKind::MobileElementInsertion,
        StructuralType::CopyNumberVariation | StructuralType::LossOfHeterozygosity => {
            resolve_copy_number(copy_number)
        }
    }
}

/// Resolve a copy-number event against the ploidy baseline.
///
/// An explicit upstream GAIN/LOSS/REF call wins. Otherwise the extracted
/// copy number is compared against a baseline of 1 on allosomes and 2
/// elsewhere; with neither piece of evidence the kind is unknown.
pub fn resolve_copy_number(info: &CopyNumberInfo) -> VariantKind {
    match info.call {
        Some(CopyNumberCall::Gain) => return VariantKind::CopyNumberGain,
        Some(CopyNumberCall::Loss) => return VariantKind::CopyNumberLoss,
        Some(CopyNumberCall::Reference) => return VariantKind::CopyNumberFlat,
        None => {}
    }

    let baseline = if info.on_allosome { 1 } else { 2 };
    match info.copy_number {
        Some(cn) if cn < baseline => VariantKind::CopyNumberLoss,
        Some(cn) if cn > baseline => VariantKind::CopyNumberGain,
        Some(_) => VariantKind::CopyNumberFlat,
        None => VariantKind::Unknown,
    }
}
