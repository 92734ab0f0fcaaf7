//! Tunable limits of the verifier.

/// Topmost layer a wire may use.
pub const MAX_LAYER: u32 = 7;

/// Cost added for every pair of nets sharing a cell.
pub const OVERLAP_PENALTY: u64 = 300;

/// Verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Topmost legal layer, inclusive.
    pub max_layer: u32,
    /// Cost per overlap.
    pub overlap_penalty: u64,
    /// Cells a wire may stray outside the terminal footprint.
    pub bounds_margin: i64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_layer: MAX_LAYER,
            overlap_penalty: OVERLAP_PENALTY,
            bounds_margin: 1,
        }
    }
}

impl VerifyConfig {
    /// Default configuration with a different layer limit.
    #[must_use]
    pub fn with_max_layer(max_layer: u32) -> Self {
        Self { max_layer, ..Self::default() }
    }
}
