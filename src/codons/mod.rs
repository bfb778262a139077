//! Codon assignment around a coding-level change
//!
//! Rebuilds the reference and alternate codon strings spanning the affected
//! protein positions by padding the transcript alleles with flanking coding
//! bases, and flags padded lengths that break the reading frame.
//!
//! # Coordinate System
//!
//! | Parameter | Basis | Notes |
//! |-----------|-------|-------|
//! | `protein_begin` / `protein_end` | 1-based | Inclusive |
//! | `coding_begin` / `coding_end` | 1-based | Inclusive CDS positions |

use crate::notation::context::TranscriptChangeContext;
use crate::transcript::TranscriptSource;

/// Padded codons for one transcript change.
///
/// Flanking bases are lower-cased and the allele portion upper-cased, so a
/// codon string like `aaG` shows at a glance which base the variant touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonAssignment {
    /// Padded reference codon string (may be empty for a pure insertion)
    pub ref_codon: String,
    /// Padded alternate codon string
    pub alt_codon: String,
    /// Whether either padded codon breaks the reading frame
    pub frameshift: bool,
    /// Whether the suffix window was truncated at the end of the
    /// translatable sequence
    pub at_tail_end: bool,
}

/// Compute the padded codons for a change context.
///
/// Returns `None` when either CDS boundary is invalid; per the error model
/// this is a silent no-op, not an error. A zero-length allele with no
/// padding yields an empty codon string.
pub fn assign<T: TranscriptSource>(
    context: &TranscriptChangeContext,
    transcript: &T,
) -> Option<CodonAssignment> {
    if !context.has_valid_cds() {
        return None;
    }

    let coding = transcript.coding_sequence().as_bytes();
    let coding_begin = context.coding_begin as usize;
    let coding_end = context.coding_end as usize;

    // Codon-aligned window implied by the protein coordinates
    let aa_start = context.protein_begin * 3 - 2;
    let aa_end = context.protein_end * 3;

    let prefix_len = (context.coding_begin - aa_start as i64).max(0) as usize;
    let suffix_len = (aa_end as i64 - context.coding_end).max(0) as usize;

    let prefix_start = coding_begin.saturating_sub(1).saturating_sub(prefix_len);
    let prefix_end = coding_begin.saturating_sub(1).min(coding.len());
    let prefix = lowercase(&coding[prefix_start.min(prefix_end)..prefix_end]);

    // Tolerate a suffix window that runs off the end of the transcript;
    // the partial trailing codon is kept and not counted as a frameshift.
    let suffix_start = coding_end.min(coding.len());
    let suffix_end = coding_end + suffix_len;
    let at_tail_end = suffix_end > coding.len();
    let suffix = lowercase(&coding[suffix_start..suffix_end.min(coding.len())]);

    let ref_codon = format!(
        "{}{}{}",
        prefix,
        context.reference_allele.to_ascii_uppercase(),
        suffix
    );
    let alt_codon = format!(
        "{}{}{}",
        prefix,
        context.alternate_allele.to_ascii_uppercase(),
        suffix
    );

    let frameshift = !at_tail_end && (ref_codon.len() % 3 != 0 || alt_codon.len() % 3 != 0);

    Some(CodonAssignment {
        ref_codon,
        alt_codon,
        frameshift,
        at_tail_end,
    })
}

fn lowercase(bases: &[u8]) -> String {
    String::from_utf8(bases.to_ascii_lowercase()).expect("coding sequences are ASCII")
}
