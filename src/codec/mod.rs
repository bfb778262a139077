//! Amino-acid codec: translation, abbreviation, trimming and rotation.

pub mod amino_acid;
pub mod peptide;

pub use amino_acid::AminoAcid;
pub use peptide::{
    rotate_three_prime, to_three_letter, translate, trim_shared_ends, RotatedChange, TrimmedChange,
};
