//! Small helpers shared across part renderers.

use crate::ast::{BindMarker, Named, SegmentRef};

/// `:name` for a named bind marker, `?` for an anonymous one.
pub(crate) fn bind_marker_text(marker: &BindMarker) -> String {
    match marker.name() {
        Some(name) => format!(":{name}"),
        None => "?".to_string(),
    }
}

/// Whether `segment` is an [`crate::ast::Expression`] child (any variant).
/// Distinct from a bare [`SegmentRef::Column`] (e.g. an `ORDER BY` field's
/// column), which is never wrapped as an `Expression`.
pub(crate) fn is_expression(segment: SegmentRef<'_>) -> bool {
    matches!(segment, SegmentRef::Expression(_))
}

/// Whether `segment` is any [`crate::ast::Condition`] variant.
pub(crate) fn is_condition(segment: SegmentRef<'_>) -> bool {
    matches!(segment, SegmentRef::Condition(_))
}
