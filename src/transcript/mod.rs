//! Transcript data seam
//!
//! Defines the interface through which the notation core reads transcript
//! data supplied by external collaborators, plus a simple in-memory
//! implementation used by tests and examples.
//!
//! Implementations must be immutable for the duration of an annotation
//! call; the core never writes through this trait.

use crate::codec;
use crate::error::ProteinError;

/// Trait for supplying transcript-level sequence data
///
/// Implementations might include:
/// - [`SimpleTranscript`] for tests and small in-memory use
/// - adapters over a transcript database in the surrounding pipeline
pub trait TranscriptSource {
    /// Versioned protein accession (e.g. `NP_000079.2`)
    fn protein_accession(&self) -> &str;

    /// Translated peptide, without a trailing stop marker
    fn peptide(&self) -> &str;

    /// Translatable coding sequence (CDS), stop codon included when the
    /// transcript has one
    fn coding_sequence(&self) -> &str;

    /// Coding sequence with the alternate allele spliced over the 1-based
    /// inclusive CDS range `coding_begin..=coding_end`, including whatever
    /// 3' context the implementation has downstream of the CDS.
    ///
    /// The default implementation splices into [`coding_sequence`]
    /// (no extra 3' context); implementations holding 3' UTR sequence
    /// should override it so stop-lost and frameshift scans can run past
    /// the reference stop.
    ///
    /// [`coding_sequence`]: TranscriptSource::coding_sequence
    fn alternate_coding_sequence(
        &self,
        coding_begin: i64,
        coding_end: i64,
        alternate_allele: &str,
    ) -> String {
        splice(self.coding_sequence(), coding_begin, coding_end, alternate_allele)
    }
}

/// Splice an allele over a 1-based inclusive range of a sequence.
pub(crate) fn splice(sequence: &str, begin: i64, end: i64, allele: &str) -> String {
    let begin = (begin.max(1) - 1) as usize;
    let end = end.max(0) as usize;
    let mut out = String::with_capacity(sequence.len() + allele.len());
    out.push_str(&sequence[..begin.min(sequence.len())]);
    out.push_str(allele);
    if end < sequence.len() {
        out.push_str(&sequence[end..]);
    }
    out
}

/// Blanket implementation for boxed trait objects
impl TranscriptSource for Box<dyn TranscriptSource> {
    fn protein_accession(&self) -> &str {
        (**self).protein_accession()
    }

    fn peptide(&self) -> &str {
        (**self).peptide()
    }

    fn coding_sequence(&self) -> &str {
        (**self).coding_sequence()
    }

    fn alternate_coding_sequence(
        &self,
        coding_begin: i64,
        coding_end: i64,
        alternate_allele: &str,
    ) -> String {
        (**self).alternate_coding_sequence(coding_begin, coding_end, alternate_allele)
    }
}

/// In-memory transcript backed by owned sequences.
///
/// The peptide is translated once at construction; a trailing stop marker
/// from the CDS is not part of the stored peptide.
#[derive(Debug, Clone)]
pub struct SimpleTranscript {
    protein_id: String,
    coding: String,
    downstream: String,
    peptide: String,
}

impl SimpleTranscript {
    /// Build a transcript from a protein accession, a CDS and the sequence
    /// downstream of the CDS (3' UTR; may be empty).
    pub fn new(
        protein_id: impl Into<String>,
        coding: impl Into<String>,
        downstream: impl Into<String>,
    ) -> Result<Self, ProteinError> {
        let coding = coding.into();
        let downstream = downstream.into();

        if coding.len() < 3 {
            return Err(ProteinError::InvalidCodingSequence {
                accession: String::new(),
                msg: format!("coding sequence too short ({} bases)", coding.len()),
            });
        }
        if let Some(bad) = coding
            .chars()
            .chain(downstream.chars())
            .find(|c| !matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T' | 'N'))
        {
            return Err(ProteinError::InvalidCodingSequence {
                accession: String::new(),
                msg: format!("unexpected base {:?}", bad),
            });
        }

        let mut peptide = codec::translate(&coding);
        if peptide.ends_with('*') {
            peptide.pop();
        }

        Ok(Self {
            protein_id: protein_id.into(),
            coding,
            downstream,
            peptide,
        })
    }
}

impl TranscriptSource for SimpleTranscript {
    fn protein_accession(&self) -> &str {
        &self.protein_id
    }

    fn peptide(&self) -> &str {
        &self.peptide
    }

    fn coding_sequence(&self) -> &str {
        &self.coding
    }

    fn alternate_coding_sequence(
        &self,
        coding_begin: i64,
        coding_end: i64,
        alternate_allele: &str,
    ) -> String {
        let mut out = splice(&self.coding, coding_begin, coding_end, alternate_allele);
        out.push_str(&self.downstream);
        out
    }
}
