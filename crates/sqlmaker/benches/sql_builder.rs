use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlmaker::qb::{self, SelectQb, SqlMaker, desc, eq};
use sqlmaker::expand;

/// Build a SelectQb with `n` columns and `n` equality conditions:
/// SELECT col0, col1, ... FROM t WHERE col0=:col0 AND col1=:col1 ...
fn build_select(n: usize) -> SelectQb {
    let mut stmt = qb::select((0..n).map(|i| format!("col{i}"))).from("t");
    for i in 0..n {
        stmt = stmt.and_where(eq(format!("col{i}"), i as i64));
    }
    stmt.order_by(desc("col0")).limit(20)
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).to_sql()));
        });
    }

    group.finish();
}

fn bench_expand_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/expand_in_list");

    for n in [5, 20, 100, 500] {
        let ids: Vec<i64> = (0..n).collect();
        let built = qb::select_all()
            .from("t")
            .eq("id", ids)
            .to_sql()
            .expect("render");
        group.bench_with_input(BenchmarkId::from_parameter(n), &built, |b, built| {
            b.iter(|| black_box(expand(built)));
        });
    }

    group.finish();
}

fn bench_insert_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert_rows");

    for n in [1, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let stmt = qb::insert_into("t")
                    .columns(["a", "b", "c"])
                    .values_many((0..n).map(|i| (i as i64, "x", i % 2 == 0)));
                black_box(stmt.to_sql().and_then(|q| expand(&q)))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_expand_in_list,
    bench_insert_rows
);
criterion_main!(benches);
