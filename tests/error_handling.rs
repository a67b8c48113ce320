//! §7's error paths: every structural failure surfaces through
//! `Result<_, RenderError>` rather than a panic.

use relsql::RenderError;
use relsql::build;

#[test]
fn empty_select_list_is_an_invalid_argument() {
    let err = build::select_list(Vec::new()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument { .. }));
    assert!(err.to_string().contains("invalid argument"));
}

#[test]
fn empty_in_list_is_an_invalid_argument() {
    let t = relsql::ast::Table::new("employee");
    let left = relsql::ast::Expression::Column(relsql::ast::Column::new("id", t));
    let err = build::in_list(left, Vec::new()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument { .. }));
}

#[test]
fn error_display_never_panics_regardless_of_path() {
    let err = RenderError::InvariantViolation {
        detail: "pop requested by a delegate that was not on top".into(),
        path: vec![],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("invariant violation"));
}

#[test]
fn render_errors_carry_a_stable_miette_diagnostic_code() {
    use miette::Diagnostic;

    let err = RenderError::UnsupportedNode {
        kind: relsql::ast::SegmentKind::ConstantCondition,
        path: vec![relsql::ast::SegmentKind::Select],
    };
    let code = err.code().expect("UnsupportedNode should carry a code");
    assert_eq!(code.to_string(), "sql::unsupported_node");
}
