//! Formatting configuration for bracefmt
//!
//! Only the substitution strategy is configurable; placeholder syntax is fixed.

use bracefmt_core::SubstitutionMode;

/// Formatting configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// How text produced by earlier substitutions is treated
    pub mode: SubstitutionMode,
}

impl FormatOptions {
    /// Create a new config with default settings (single-pass substitution)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the substitution mode
    pub fn with_mode(mut self, mode: SubstitutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use the legacy sequential (re-scanning) strategy
    pub fn sequential(self) -> Self {
        self.with_mode(SubstitutionMode::Sequential)
    }

    /// Use the single-pass strategy
    pub fn single_pass(self) -> Self {
        self.with_mode(SubstitutionMode::SinglePass)
    }
}
