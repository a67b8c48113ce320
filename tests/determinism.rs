//! §8's purity properties: `render` is a pure function of the AST, and two
//! structurally equal trees render identically.

use relsql::ast::{Column, Direction, Expression, From, OrderByField, Select, Table};
use relsql::build;
use relsql::render;

fn sample_select() -> Select {
    let t = Table::aliased("employee", "e");
    let list = build::select_list(vec![
        Expression::Column(Column::new("id", t.clone())),
        Expression::Column(Column::aliased("name", t.clone(), "n")),
    ])
    .unwrap();
    Select::builder(list)
        .from(From::new(vec![t.clone()]))
        .order_by(OrderByField::new(Column::new("id", t), Direction::Ascending))
        .build()
}

#[test]
fn rendering_the_same_statement_twice_is_byte_identical() {
    let select = sample_select();
    assert_eq!(render(&select).unwrap(), render(&select).unwrap());
}

#[test]
fn a_deep_clone_renders_identically_to_the_original() {
    let select = sample_select();
    let clone = select.clone();
    assert_eq!(render(&select).unwrap(), render(&clone).unwrap());
}

#[test]
fn rendered_output_never_contains_double_spaces() {
    let select = sample_select();
    let rendered = render(&select).unwrap();
    assert!(!rendered.contains("  "), "found a double space in {rendered:?}");
}

#[test]
fn absent_clauses_never_leave_a_trace_in_the_output() {
    let t = Table::new("employee");
    let list = build::select_list(vec![Expression::Column(Column::new("id", t.clone()))]).unwrap();
    let select = Select::builder(list).from(From::new(vec![t])).build();
    let rendered = render(&select).unwrap();

    for absent in [" WHERE ", " JOIN ", " ORDER BY ", " LIMIT", " OFFSET", "DISTINCT"] {
        assert!(!rendered.contains(absent), "unexpected {absent:?} in {rendered:?}");
    }
}
