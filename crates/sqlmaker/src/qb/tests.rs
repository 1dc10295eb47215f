//! Cross-builder scenarios for the qb module.

use crate::error::SqlError;
use crate::qb::{
    JoinKind, SqlMaker, alias, asc, delete_from, derive_param_name, desc, eq, gt, insert_into,
    join, raw_eq, select, select_all, update,
};
use crate::value::{Bound, Value};

#[test]
fn test_scalar_eq_contains_derived_name() {
    for col in ["id", "u.id", "`u`.`id`", "a.b.c"] {
        let built = select_all().from("t").eq(col, 42i64).to_sql().unwrap();
        let name = derive_param_name(col);
        assert!(built.sql.contains(&format!("{col}=:{name}")));
        assert_eq!(built.params.len(), 1);
        assert_eq!(built.params[&name], Bound::Scalar(Value::Int(42)));
    }
}

#[test]
fn test_sequence_eq_binds_whole_list() {
    let built = select_all()
        .from("t")
        .eq("t.kind", vec!["a", "b"])
        .to_sql()
        .unwrap();
    assert!(built.sql.contains("t.kind IN (:t_kind)"));
    assert_eq!(
        built.params["t_kind"],
        Bound::Sequence(vec![Value::Text("a".into()), Value::Text("b".into())])
    );
}

#[test]
fn test_select_where_limit_offset() {
    let built = select_all()
        .from("t")
        .and_where(eq("col", 1i32))
        .limit(10)
        .offset(5)
        .to_sql()
        .unwrap();
    assert_eq!(
        built.sql,
        "SELECT\n    *\nFROM\n    t\nWHERE\n    col=:col\nLIMIT 5, 10"
    );
    assert_eq!(built.params.len(), 1);
    assert_eq!(built.params["col"], Bound::Scalar(Value::Int(1)));
}

#[test]
fn test_select_with_projection_helpers() {
    let built = select([alias("COUNT(*)", "total")])
        .column("MAX(created_at)")
        .from("orders")
        .and_where(gt("amount", 100i32))
        .group_by(["user_id", "state"])
        .order_by(desc("total"))
        .order_by(asc("user_id"))
        .to_sql()
        .unwrap();
    assert_eq!(
        built.sql,
        "SELECT\n    COUNT(*) AS total,\n    MAX(created_at)\nFROM\n    orders\n\
         WHERE\n    amount>:amount\n\
         GROUP BY\n    user_id, state\n\
         ORDER BY\n    total DESC, user_id"
    );
}

#[test]
fn test_parameter_collision_last_wins() {
    let built = select_all()
        .from("t")
        .eq("a.b", 1i32)
        .eq("a_b", 2i32)
        .to_sql()
        .unwrap();
    assert_eq!(built.params.len(), 1);
    assert_eq!(built.params["a_b"], Bound::Scalar(Value::Int(2)));
    assert!(built.sql.contains("a.b=:a_b"));
    assert!(built.sql.contains("AND a_b=:a_b"));
}

#[test]
fn test_insert_two_rows() {
    let built = insert_into("t")
        .columns(["a", "b"])
        .values((1i32, "x"))
        .values((2i32, "y"))
        .to_sql()
        .unwrap();
    assert_eq!(built.sql, "INSERT INTO t (a, b) VALUES (:value0), (:value1)");
    assert_eq!(
        built.params["value0"],
        Bound::Sequence(vec![Value::Int(1), Value::Text("x".into())])
    );
    assert_eq!(
        built.params["value1"],
        Bound::Sequence(vec![Value::Int(2), Value::Text("y".into())])
    );
}

#[test]
fn test_update_errors_before_text() {
    assert!(matches!(
        update("t").eq("id", 1i32).to_sql(),
        Err(SqlError::EmptySet)
    ));
    assert!(matches!(
        update("").set("a", 1i32).to_sql(),
        Err(SqlError::MissingTable(_))
    ));
}

#[test]
fn test_unconditional_delete() {
    let built = delete_from("t").to_sql().unwrap();
    assert_eq!(built.sql, "DELETE FROM t");
    assert!(built.params.is_empty());
}

#[test]
fn test_join_in_select_merges_params() {
    let built = select(["u.id"])
        .from("users u")
        .join(
            join(JoinKind::Inner, "orders o")
                .on(raw_eq("o.user_id", "u.id"))
                .on(eq("o.state", vec![1i32, 2])),
        )
        .eq("u.id", 5i64)
        .to_sql()
        .unwrap();
    assert_eq!(built.params.len(), 2);
    assert!(built.params["o_state"].is_sequence());
    assert_eq!(built.params["u_id"], Bound::Scalar(Value::Int(5)));
}

#[test]
fn test_errors_are_build_errors() {
    let errs = [
        select_all().to_sql().unwrap_err(),
        insert_into("t").to_sql().unwrap_err(),
        update("t").to_sql().unwrap_err(),
        delete_from("").to_sql().unwrap_err(),
        select_all()
            .from("t")
            .eq("id", Vec::<i32>::new())
            .to_sql()
            .unwrap_err(),
    ];
    for err in errs {
        assert!(err.is_build_error(), "{err}");
    }
}
