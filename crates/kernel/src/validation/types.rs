//! Shared types for CSG tree validation.
//!
//! Defines issue codes, severity levels, node paths, validation issues,
//! tree metrics, and the unified `ValidationReport`.

use std::fmt;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Queries against this tree are not meaningful.
    Error,
    /// Informational; the tree still evaluates, but probably not as intended.
    Warning,
}

/// Enumeration of all validation issue codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// Extrusion has fewer than three points.
    TooFewPoints,
    /// Extrusion polygon is not convex, or all its points are collinear.
    NonConvexPolygon,
    /// Extrusion has equal or inverted axial bounds.
    DegenerateExtrusion,
    /// Union with no children; it contains no points.
    EmptyUnion,
    /// Difference with nothing to subtract; it equals its base.
    NothingSubtracted,
    /// Tree is deeper than the configured limit.
    ExcessiveDepth,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Child indices from the root to the offending node. For a difference,
    /// index 0 is the base and `i + 1` is `subtract[i]`.
    pub path: Vec<usize>,
    pub code: IssueCode,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        let path: Vec<String> = self.path.iter().map(usize::to_string).collect();
        write!(f, "[{}] /{}: {} (code: {})", sev, path.join("/"), self.message, self.code)
    }
}

/// Counts of nodes in a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounts {
    pub leaves: usize,
    pub unions: usize,
    pub differences: usize,
    pub depth: usize,
}

/// The report produced by `validate_tree`.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether the tree has no errors. Warnings do not affect this.
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub counts: NodeCounts,
}

impl ValidationReport {
    /// Filter errors and warnings by a specific issue code.
    pub fn issues_of(&self, code: IssueCode) -> Vec<&ValidationIssue> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(|e| e.code == code)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ValidationReport: valid={}, errors={}, warnings={}, depth={}",
            self.valid,
            self.errors.len(),
            self.warnings.len(),
            self.counts.depth
        )?;
        for e in &self.errors {
            writeln!(f, "  {e}")?;
        }
        for w in &self.warnings {
            writeln!(f, "  {w}")?;
        }
        Ok(())
    }
}
