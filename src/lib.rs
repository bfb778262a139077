// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-protein: protein-level HGVS notation builder
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Given a variant already mapped to transcript coordinates, this crate
//! resolves the protein-level consequence and renders the HGVS `p.`
//! notation: substitutions, deletions, insertions, duplications, delins,
//! frameshifts and the stop/start special forms.
//!
//! # Example
//!
//! ```
//! use ferro_protein::{
//!     NotationBuilder, SimpleTranscript, TranscriptChangeContext, VariantEffectFlags,
//! };
//!
//! // A toy transcript: CDS plus empty 3' UTR
//! let transcript = SimpleTranscript::new("NP_TEST.1", "ATGAAACCCGGGTTTTGA", "").unwrap();
//!
//! // c.4A>G changes codon 2 from AAA (Lys) to GAA (Glu)
//! let context = TranscriptChangeContext::new(2, 2, 4, 4, "A", "G");
//! let effects = VariantEffectFlags::default();
//!
//! let builder = NotationBuilder::new();
//! let notation = builder
//!     .build(&transcript, &context, &effects, "NM_TEST.1:c.4A>G")
//!     .unwrap();
//! assert_eq!(notation.to_string(), "NP_TEST.1:p.Lys2Glu");
//! ```

pub mod classify;
pub mod codec;
pub mod codons;
pub mod error;
pub mod notation;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod transcript;

// Re-export commonly used types
pub use classify::protein::ChangeKind;
pub use classify::variant::{
    classify_by_length_direction, classify_canonical, resolve_copy_number, resolve_structural,
    CopyNumberCall, CopyNumberInfo, StructuralType, VariantKind,
};
pub use codec::AminoAcid;
pub use error::ProteinError;
pub use notation::{
    ChangeNotation, NotationBuilder, NotationConfig, TranscriptChangeContext, VariantEffectFlags,
};
pub use transcript::{SimpleTranscript, TranscriptSource};

/// Result type alias for ferro-protein operations
pub type Result<T> = std::result::Result<T, ProteinError>;
