//! Error types for ferro-protein
//!
//! The notation pipeline itself signals every non-fatal outcome by
//! returning an absent notation, never an error. `ProteinError` covers
//! collaborator-contract violations only: malformed transcript data and
//! out-of-range sequence requests surfaced by [`crate::transcript`]
//! implementations.

use thiserror::Error;

/// Errors surfaced by transcript data collaborators
#[derive(Debug, Error)]
pub enum ProteinError {
    /// The supplied coding sequence cannot be translated
    #[error("invalid coding sequence for {accession}: {msg}")]
    InvalidCodingSequence {
        /// Transcript or protein accession, when known
        accession: String,
        /// What was wrong with the sequence
        msg: String,
    },

    /// A sequence request fell outside the transcript
    #[error("coding positions {begin}..{end} out of range for {accession} (length {length})")]
    PositionOutOfRange {
        /// Transcript or protein accession
        accession: String,
        /// 1-based begin position requested
        begin: i64,
        /// 1-based end position requested
        end: i64,
        /// Available sequence length
        length: usize,
    },

    /// The transcript carries no usable CDS annotation
    #[error("transcript {accession} has no coding sequence")]
    MissingCds {
        /// Transcript accession
        accession: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProteinError::PositionOutOfRange {
            accession: "NP_TEST.1".to_string(),
            begin: 40,
            end: 45,
            length: 18,
        };
        assert_eq!(
            err.to_string(),
            "coding positions 40..45 out of range for NP_TEST.1 (length 18)"
        );
    }

    #[test]
    fn test_missing_cds_display() {
        let err = ProteinError::MissingCds {
            accession: "NM_TEST.1".to_string(),
        };
        assert!(err.to_string().contains("no coding sequence"));
    }
}
