//! Parallel processing support for ferro-protein
//!
//! This module provides parallel variants of notation building using
//! rayon. Enable with the `parallel` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use ferro_protein::parallel::{annotate_parallel, AnnotationCall};
//! use ferro_protein::{
//!     NotationBuilder, SimpleTranscript, TranscriptChangeContext, VariantEffectFlags,
//! };
//!
//! let transcript = SimpleTranscript::new("NP_TEST.1", "ATGAAACCCGGGTTTTGA", "").unwrap();
//! let builder = NotationBuilder::new();
//!
//! let calls = vec![AnnotationCall {
//!     context: TranscriptChangeContext::new(2, 2, 4, 4, "A", "G"),
//!     effects: VariantEffectFlags::default(),
//!     coding_notation: "NM_TEST.1:c.4A>G".to_string(),
//! }];
//!
//! let notations = annotate_parallel(&builder, &transcript, &calls);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::notation::{
    ChangeNotation, NotationBuilder, TranscriptChangeContext, VariantEffectFlags,
};
use crate::transcript::TranscriptSource;

/// One variant worth of builder input against a shared transcript.
#[derive(Debug, Clone)]
pub struct AnnotationCall {
    /// Transcript-level change coordinates and alleles
    pub context: TranscriptChangeContext,
    /// Upstream effect predicates
    pub effects: VariantEffectFlags,
    /// Coding-level notation, used verbatim in silent outputs
    pub coding_notation: String,
}

/// Build notations for multiple variants in parallel
///
/// Returns one entry per input call, `None` where no protein notation
/// applies. Order is preserved.
pub fn annotate_parallel<T: TranscriptSource + Sync>(
    builder: &NotationBuilder,
    transcript: &T,
    calls: &[AnnotationCall],
) -> Vec<Option<ChangeNotation>> {
    calls
        .par_iter()
        .map(|call| builder.build(transcript, &call.context, &call.effects, &call.coding_notation))
        .collect()
}

/// Build notations for multiple variants in parallel, keeping only the
/// variants that produced one.
pub fn annotate_parallel_ok<T: TranscriptSource + Sync>(
    builder: &NotationBuilder,
    transcript: &T,
    calls: &[AnnotationCall],
) -> Vec<ChangeNotation> {
    calls
        .par_iter()
        .filter_map(|call| {
            builder.build(transcript, &call.context, &call.effects, &call.coding_notation)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::SimpleTranscript;

    fn fixture() -> SimpleTranscript {
        SimpleTranscript::new("NP_TEST.1", "ATGAAACCCGGGTTTTGA", "").unwrap()
    }

    #[test]
    fn test_order_preserved() {
        let transcript = fixture();
        let builder = NotationBuilder::new();
        let calls = vec![
            AnnotationCall {
                context: TranscriptChangeContext::new(2, 2, 4, 4, "A", "G"),
                effects: VariantEffectFlags::default(),
                coding_notation: "NM_TEST.1:c.4A>G".to_string(),
            },
            AnnotationCall {
                // reference call, filtered out
                context: TranscriptChangeContext::new(2, 2, 4, 4, "A", "A"),
                effects: VariantEffectFlags::default(),
                coding_notation: "NM_TEST.1:c.4A>A".to_string(),
            },
            AnnotationCall {
                context: TranscriptChangeContext::new(3, 3, 8, 8, "C", "T"),
                effects: VariantEffectFlags::default(),
                coding_notation: "NM_TEST.1:c.8C>T".to_string(),
            },
        ];

        let results = annotate_parallel(&builder, &transcript, &calls);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().map(|n| n.notation.clone()),
            Some("NP_TEST.1:p.Lys2Glu".to_string())
        );
        assert!(results[1].is_none());
        assert_eq!(
            results[2].as_ref().map(|n| n.notation.clone()),
            Some("NP_TEST.1:p.Pro3Leu".to_string())
        );

        let kept = annotate_parallel_ok(&builder, &transcript, &calls);
        assert_eq!(kept.len(), 2);
    }
}
