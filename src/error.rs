//! Crate-local error model (C10).
//!
//! `render` never panics on a type-valid but structurally malformed AST;
//! instead it returns a [`RenderError`] describing which kind of
//! programming error occurred and, where known, the path of
//! [`SegmentKind`]s from the statement root to the offending node. These
//! errors are not meant for end users — they describe bugs in the caller's
//! AST construction, not bad SQL.

use std::fmt;

use crate::ast::SegmentKind;

/// Something went wrong building or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A required segment was missing or empty where construction disallows it.
    InvalidArgument {
        /// What was expected, e.g. `"non-empty select list"`.
        expected: String,
        path: Vec<SegmentKind>,
    },
    /// A sub-visitor was popped by a party other than the one that pushed it,
    /// or popped when it was not the stack's top delegate.
    InvariantViolation {
        detail: String,
        path: Vec<SegmentKind>,
    },
    /// A renderer encountered a segment kind it does not know how to emit.
    UnsupportedNode {
        kind: SegmentKind,
        path: Vec<SegmentKind>,
    },
}

impl RenderError {
    /// The path of segment kinds from the statement root to the offending
    /// node, innermost last. Empty when no path was known at the failure site.
    pub fn path(&self) -> &[SegmentKind] {
        match self {
            RenderError::InvalidArgument { path, .. } => path,
            RenderError::InvariantViolation { path, .. } => path,
            RenderError::UnsupportedNode { path, .. } => path,
        }
    }
}

fn fmt_path(path: &[SegmentKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if path.is_empty() {
        return Ok(());
    }
    write!(f, " (at ")?;
    for (i, kind) in path.iter().enumerate() {
        if i > 0 {
            write!(f, " > ")?;
        }
        write!(f, "{kind:?}")?;
    }
    write!(f, ")")
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidArgument { expected, path } => {
                write!(f, "invalid argument: expected {expected}")?;
                fmt_path(path, f)
            }
            RenderError::InvariantViolation { detail, path } => {
                write!(f, "invariant violation: {detail}")?;
                fmt_path(path, f)
            }
            RenderError::UnsupportedNode { kind, path } => {
                write!(f, "unsupported segment kind {kind:?}")?;
                fmt_path(path, f)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl miette::Diagnostic for RenderError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            RenderError::InvalidArgument { .. } => "sql::invalid_argument",
            RenderError::InvariantViolation { .. } => "sql::invariant_violation",
            RenderError::UnsupportedNode { .. } => "sql::unsupported_node",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            RenderError::InvalidArgument { .. } => {
                "construct this segment through the checked constructors in `build`, \
                 which reject empty/missing arguments before an AST is ever built"
            }
            RenderError::InvariantViolation { .. } => {
                "this indicates a bug in the renderer's stack discipline, not in the \
                 AST being rendered; please file an issue with the statement shape"
            }
            RenderError::UnsupportedNode { .. } => {
                "this renderer version predates this segment kind; upgrade the crate \
                 or render through a dialect that implements it"
            }
        };
        Some(Box::new(help))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_when_present() {
        let err = RenderError::UnsupportedNode {
            kind: SegmentKind::ConstantCondition,
            path: vec![SegmentKind::Select, SegmentKind::Where],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("ConstantCondition"));
        assert!(rendered.contains("Select > Where"));
    }

    #[test]
    fn display_omits_path_suffix_when_empty() {
        let err = RenderError::InvalidArgument {
            expected: "non-empty select list".into(),
            path: Vec::new(),
        };
        assert_eq!(err.to_string(), "invalid argument: expected non-empty select list");
    }
}
