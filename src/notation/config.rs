//! Notation builder configuration options

use serde::{Deserialize, Serialize};

/// Configuration for protein notation building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotationConfig {
    /// Wrap predicted consequences in parentheses (`p.(Arg97fs)` instead
    /// of `p.Arg97fs`), as the HGVS recommendation allows for
    /// predictions made without experimental RNA/protein evidence.
    pub parenthesize_predictions: bool,

    /// Apply the 3' rule to ambiguous insertion/deletion placement.
    /// Disabling this keeps indels at their left-aligned input position.
    pub rotate_indels: bool,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            parenthesize_predictions: false,
            rotate_indels: true,
        }
    }
}

impl NotationConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether predicted consequences are parenthesized
    pub fn with_parenthesized_predictions(mut self, enabled: bool) -> Self {
        self.parenthesize_predictions = enabled;
        self
    }

    /// Set whether the 3' rule is applied to indels
    pub fn with_indel_rotation(mut self, enabled: bool) -> Self {
        self.rotate_indels = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotationConfig::default();
        assert!(!config.parenthesize_predictions);
        assert!(config.rotate_indels);
    }

    #[test]
    fn test_builder_methods() {
        let config = NotationConfig::new()
            .with_parenthesized_predictions(true)
            .with_indel_rotation(false);
        assert!(config.parenthesize_predictions);
        assert!(!config.rotate_indels);
    }
}
