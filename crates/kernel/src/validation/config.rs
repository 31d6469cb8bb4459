//! Configuration for CSG tree validation.

/// Configuration controlling which checks are run and their parameters.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Trees deeper than this get an `ExcessiveDepth` warning.
    pub max_depth: usize,
    /// Whether warnings are collected at all.
    pub report_warnings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_depth: 16,
            report_warnings: true,
        }
    }
}

impl ValidationConfig {
    /// Only errors; structural oddities are ignored.
    pub fn errors_only() -> Self {
        Self {
            report_warnings: false,
            ..Self::default()
        }
    }

    /// Everything, with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}
