//! Render Benchmarks
//!
//! Measures `render()` over a small family of representative statement
//! shapes:
//!
//! - **Flat projection**: a bare `SELECT ... FROM ...`.
//! - **Joined + filtered**: a join plus an `AND`-combined `WHERE`.
//! - **Nested subselect**: an `IN` right-hand side that is itself a statement.
//!
//! ```bash
//! cargo bench
//! ```

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use relsql::ast::{
    Column, Direction, Expression, From, Join, JoinType, OrderByField, Select, Table,
};
use relsql::build;
use relsql::render;

fn flat_projection() -> Select {
    let employee = Table::new("employee");
    let id = Expression::Column(Column::new("id", employee.clone()));
    let name = Expression::Column(Column::new("name", employee.clone()));
    let list = build::select_list(vec![id, name]).unwrap();
    Select::builder(list)
        .from(From::new(vec![employee.clone()]))
        .order_by(OrderByField::new(Column::new("name", employee), Direction::Ascending))
        .build()
}

fn joined_and_filtered() -> Select {
    let employee = Table::new("employee");
    let dept = Table::aliased("dept", "d");
    let a = Expression::Column(Column::new("a", employee.clone()));
    let list = build::select_list(vec![a.clone()]).unwrap();

    let join_condition = build::equals(
        Expression::Column(Column::new("id", employee.clone())),
        Expression::Column(Column::new("tid", dept.clone())),
    );
    let where_condition = build::and(
        build::equals(a, build::named_bind("n")),
        build::is_null(
            Expression::Column(Column::new("manager_id", employee.clone())),
            false,
        ),
    );

    Select::builder(list)
        .from(From::new(vec![employee]))
        .join(Join::new(JoinType::Inner, dept, join_condition))
        .r#where(where_condition)
        .build()
}

fn nested_subselect() -> Select {
    let employee = Table::new("employee");
    let v = Table::new("v");
    let a = Expression::Column(Column::new("a", employee.clone()));
    let list = build::select_list(vec![a.clone()]).unwrap();

    let inner_list = build::select_list(vec![Expression::Column(Column::new("a", v.clone()))]).unwrap();
    let inner = Select::builder(inner_list).from(From::new(vec![v])).build();
    let subselect = Expression::Subselect(relsql::ast::SubselectExpression::new(inner));
    let where_condition = build::in_list(a, vec![subselect]).unwrap();

    Select::builder(list)
        .from(From::new(vec![employee]))
        .r#where(where_condition)
        .limit(10)
        .offset(5)
        .build()
}

fn bench_render_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let flat = flat_projection();
    group.bench_function("flat_projection", |b| {
        b.iter(|| render(black_box(&flat)));
    });

    let joined = joined_and_filtered();
    group.bench_function("joined_and_filtered", |b| {
        b.iter(|| render(black_box(&joined)));
    });

    let nested = nested_subselect();
    group.bench_function("nested_subselect", |b| {
        b.iter(|| render(black_box(&nested)));
    });

    group.finish();
}

criterion_group!(benches, bench_render_shapes);
criterion_main!(benches);
