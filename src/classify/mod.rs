//! Change-kind and variant-kind classification.

pub mod protein;
pub mod variant;

pub use protein::{classify_protein_change, ChangeKind};
pub use variant::{
    classify_by_length_direction, classify_canonical, resolve_copy_number, resolve_structural,
    CopyNumberCall, CopyNumberInfo, StructuralType, VariantKind,
};
