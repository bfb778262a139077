//! Protein-level HGVS notation assembly
//!
//! The [`builder`] module carries the pipeline; [`context`] defines its
//! inputs and [`config`] its knobs.

pub mod builder;
pub mod config;
pub mod context;

pub use builder::{extra_residues, ChangeNotation, NotationBuilder};
pub use config::NotationConfig;
pub use context::{TranscriptChangeContext, VariantEffectFlags};
