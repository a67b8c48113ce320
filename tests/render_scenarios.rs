//! The §8 concrete scenarios, plus the aliasing/projection-vs-condition
//! checks the same section calls out.

use relsql::ast::{
    Column, Direction, Expression, From, Join, JoinType, OrderByField, Select, SubselectExpression,
    Table,
};
use relsql::build;
use relsql::render;

#[test]
fn scenario_1_minimal_projection() {
    let t = Table::new("employee");
    let list = build::select_list(vec![Expression::Column(Column::new("id", t.clone()))]).unwrap();
    let select = Select::builder(list).from(From::new(vec![t])).build();

    assert_eq!(render(&select).unwrap(), "SELECT employee.id FROM employee");
}

#[test]
fn scenario_2_explicit_from_with_alias() {
    let t = Table::aliased("employee", "e");
    let list = build::select_list(vec![Expression::Column(Column::new("id", t.clone()))]).unwrap();
    let select = Select::builder(list).from(From::new(vec![t])).build();

    assert_eq!(render(&select).unwrap(), "SELECT e.id FROM employee AS e");
}

#[test]
fn scenario_3_distinct_and_order_by() {
    let t = Table::new("employee");
    let list = build::select_list(vec![Expression::Column(Column::new("name", t.clone()))]).unwrap();
    let select = Select::builder(list)
        .from(From::new(vec![t.clone()]))
        .distinct()
        .order_by(OrderByField::new(Column::new("name", t), Direction::Descending))
        .build();

    assert_eq!(
        render(&select).unwrap(),
        "SELECT DISTINCT employee.name FROM employee ORDER BY name DESC"
    );
}

#[test]
fn scenario_4_where_with_and() {
    let t = Table::new("employee");
    let a = Expression::Column(Column::new("a", t.clone()));
    let b = Expression::Column(Column::new("b", t.clone()));
    let list = build::select_list(vec![a.clone()]).unwrap();
    let condition = build::and(
        build::equals(a, build::named_bind("n")),
        build::is_null(b, false),
    );
    let select = Select::builder(list)
        .from(From::new(vec![t]))
        .r#where(condition)
        .build();

    assert_eq!(
        render(&select).unwrap(),
        "SELECT employee.a FROM employee WHERE employee.a = :n AND employee.b IS NULL"
    );
}

#[test]
fn scenario_5_where_with_or_is_parenthesized() {
    let t = Table::new("employee");
    let a = Expression::Column(Column::new("a", t.clone()));
    let b = Expression::Column(Column::new("b", t.clone()));
    let list = build::select_list(vec![a.clone()]).unwrap();
    let condition = build::or(
        build::equals(a, build::named_bind("x")),
        build::equals(b, build::named_bind("y")),
    );
    let select = Select::builder(list)
        .from(From::new(vec![t]))
        .r#where(condition)
        .build();

    assert_eq!(
        render(&select).unwrap(),
        "SELECT employee.a FROM employee WHERE (employee.a = :x OR employee.b = :y)"
    );
}

#[test]
fn scenario_6_join_and_subselect_in() {
    let t = Table::new("employee");
    let u = Table::aliased("dept", "u");
    let v = Table::new("v");

    let a = Expression::Column(Column::new("a", t.clone()));
    let list = build::select_list(vec![a.clone()]).unwrap();

    let join_condition = build::equals(
        Expression::Column(Column::new("id", t.clone())),
        Expression::Column(Column::new("tid", u.clone())),
    );

    let inner_list = build::select_list(vec![Expression::Column(Column::new("a", v.clone()))]).unwrap();
    let inner_select = Select::builder(inner_list).from(From::new(vec![v])).build();
    let subselect = Expression::Subselect(SubselectExpression::new(inner_select));

    let where_condition = build::in_list(a, vec![subselect]).unwrap();

    let select = Select::builder(list)
        .from(From::new(vec![t]))
        .join(Join::new(JoinType::Inner, u, join_condition))
        .r#where(where_condition)
        .limit(10)
        .offset(5)
        .build();

    assert_eq!(
        render(&select).unwrap(),
        "SELECT employee.a FROM employee JOIN dept AS u ON employee.id = u.tid \
         WHERE employee.a IN (SELECT v.a FROM v) LIMIT 10 OFFSET 5"
    );
}

#[test]
fn aliased_column_renders_differently_in_projection_versus_condition() {
    let t = Table::new("employee");
    let projected = Expression::Column(Column::aliased("id", t.clone(), "emp_id"));
    let list = build::select_list(vec![projected]).unwrap();

    let condition_column = Expression::Column(Column::aliased("id", t.clone(), "emp_id"));
    let condition = build::equals(condition_column, build::named_bind("n"));

    let select = Select::builder(list)
        .from(From::new(vec![t]))
        .r#where(condition)
        .build();

    let rendered = render(&select).unwrap();
    assert!(rendered.contains("SELECT employee.id AS emp_id FROM employee"));
    assert!(rendered.contains("WHERE employee.emp_id = :n"));
}

#[test]
fn outer_join_keyword_is_emitted() {
    let t = Table::new("employee");
    let u = Table::new("dept");
    let a = Expression::Column(Column::new("a", t.clone()));
    let list = build::select_list(vec![a]).unwrap();
    let join_condition = build::equals(
        Expression::Column(Column::new("id", t.clone())),
        Expression::Column(Column::new("tid", u.clone())),
    );
    let select = Select::builder(list)
        .from(From::new(vec![t]))
        .join(Join::new(JoinType::LeftOuter, u, join_condition))
        .build();

    assert!(render(&select).unwrap().contains(" LEFT OUTER JOIN dept "));
}
