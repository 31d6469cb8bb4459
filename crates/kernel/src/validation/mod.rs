pub mod config;
pub mod types;

pub use config::*;
pub use types::*;

use tracing::{info, instrument};

use crate::csg::{ConvexPolygonExtrusion, CsgNode};

/// Walk a tree and report structural problems.
///
/// Errors mark trees whose queries are not meaningful (an invalid
/// extrusion). Warnings mark trees that evaluate fine but are probably not
/// what the caller meant: an empty union, a difference with nothing to
/// subtract, or a tree deeper than `config.max_depth`.
#[instrument(skip_all)]
pub fn validate_tree(root: &CsgNode, config: &ValidationConfig) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut counts = NodeCounts::default();
    let mut path = Vec::new();

    check_node(root, config, &mut path, &mut counts, &mut errors, &mut warnings);

    counts.depth = root.depth();
    if config.report_warnings && counts.depth > config.max_depth {
        warnings.push(ValidationIssue {
            path: Vec::new(),
            code: IssueCode::ExcessiveDepth,
            message: format!(
                "tree depth {} exceeds limit of {}",
                counts.depth, config.max_depth
            ),
            severity: Severity::Warning,
        });
    }

    let valid = errors.is_empty();
    info!(
        valid,
        depth = counts.depth,
        error_count = errors.len(),
        warning_count = warnings.len(),
        "validation complete"
    );

    ValidationReport {
        valid,
        errors,
        warnings,
        counts,
    }
}

fn check_node(
    node: &CsgNode,
    config: &ValidationConfig,
    path: &mut Vec<usize>,
    counts: &mut NodeCounts,
    errors: &mut Vec<ValidationIssue>,
    warnings: &mut Vec<ValidationIssue>,
) {
    let mut warn = |code: IssueCode, message: String, path: &[usize]| {
        if config.report_warnings {
            warnings.push(ValidationIssue {
                path: path.to_vec(),
                code,
                message,
                severity: Severity::Warning,
            });
        }
    };

    match node {
        CsgNode::ConvexPolygonExtrusion(e) => {
            counts.leaves += 1;
            if let Some((code, message)) = extrusion_issue(e) {
                errors.push(ValidationIssue {
                    path: path.clone(),
                    code,
                    message,
                    severity: Severity::Error,
                });
            }
        }
        CsgNode::HalfSpace(_) | CsgNode::RectangularPrism(_) | CsgNode::Cylinder(_) => {
            counts.leaves += 1;
        }
        CsgNode::SolidUnion(u) => {
            counts.unions += 1;
            if u.is_empty() {
                warn(IssueCode::EmptyUnion, "union has no children".into(), path);
            }
        }
        CsgNode::Difference(d) => {
            counts.differences += 1;
            if d.subtract().is_empty() {
                warn(
                    IssueCode::NothingSubtracted,
                    "difference subtracts nothing".into(),
                    path,
                );
            }
        }
    }

    for (i, child) in node.children().into_iter().enumerate() {
        path.push(i);
        check_node(child, config, path, counts, errors, warnings);
        path.pop();
    }
}

fn extrusion_issue(extrusion: &ConvexPolygonExtrusion) -> Option<(IssueCode, String)> {
    let err = extrusion.validate().err()?;
    let code = if extrusion.points().len() < 3 {
        IssueCode::TooFewPoints
    } else if matches!((extrusion.start(), extrusion.end()), (Some(s), Some(e)) if s >= e) {
        IssueCode::DegenerateExtrusion
    } else {
        IssueCode::NonConvexPolygon
    };
    Some((code, err.to_string()))
}
