//! Named-parameter expansion.
//!
//! Turns builder output (`:name` placeholders plus a name-to-value map) into
//! the positional `?` form MySQL drivers take. Scalars become one `?`;
//! sequences become `?, ?, ...`, one per element, which covers both `IN` lists
//! and whole INSERT rows.
//!
//! ```ignore
//! let built = qb::select_all().from("t").eq("id", vec![1, 2]).to_sql()?;
//! let q = expand(&built)?;
//! assert_eq!(q.sql, "SELECT\n    *\nFROM\n    t\nWHERE\n    id IN (?, ?)");
//! assert_eq!(q.args.len(), 2);
//! ```

use crate::error::{SqlError, SqlResult};
use crate::qb::{BuiltQuery, Params};
use crate::value::{Bound, Value};
use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

/// SQL with positional placeholders and its arguments in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpandedQuery {
    /// SQL text using `?` placeholders.
    pub sql: String,
    /// One argument per placeholder.
    pub args: Vec<Value>,
}

/// Expand a rendered statement.
pub fn expand(built: &BuiltQuery) -> SqlResult<ExpandedQuery> {
    expand_named(&built.sql, &built.params)
}

/// Expand `sql` against `params`.
///
/// - `::` is an escaped colon and renders as `:`.
/// - Quoted runs (`'...'`, `"..."`, `` `...` ``) are copied verbatim.
/// - Names are runs of Unicode letters, digits and `_`.
/// - A placeholder without a binding fails with [`SqlError::MissingParam`];
///   an empty sequence fails with [`SqlError::EmptySequence`]; a binding no
///   placeholder refers to fails with [`SqlError::UnusedParam`].
pub fn expand_named(sql: &str, params: &Params) -> SqlResult<ExpandedQuery> {
    let mut out = String::with_capacity(sql.len());
    let mut args = Vec::with_capacity(params.len());
    let mut used = BTreeSet::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' | '`' => copy_quoted(&mut out, &mut chars, c),
            ':' => match chars.peek() {
                Some(':') => {
                    chars.next();
                    out.push(':');
                }
                Some(&n) if is_name_char(n) => {
                    let name = take_name(&mut chars);
                    let (key, bound) = params
                        .get_key_value(&name)
                        .ok_or_else(|| SqlError::MissingParam(name.clone()))?;
                    push_placeholders(&mut out, &mut args, &name, bound)?;
                    used.insert(key.as_str());
                }
                _ => out.push(':'),
            },
            _ => out.push(c),
        }
    }

    if let Some(unused) = params.keys().find(|k| !used.contains(k.as_str())) {
        return Err(SqlError::UnusedParam(unused.clone()));
    }

    Ok(ExpandedQuery { sql: out, args })
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn take_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if !is_name_char(c) {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

fn copy_quoted(out: &mut String, chars: &mut Peekable<Chars<'_>>, quote: char) {
    out.push(quote);
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' && quote != '`' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            // A doubled quote stays inside the run.
            if chars.peek() == Some(&quote) {
                out.push(quote);
                chars.next();
            } else {
                return;
            }
        }
    }
}

fn push_placeholders(
    out: &mut String,
    args: &mut Vec<Value>,
    name: &str,
    bound: &Bound,
) -> SqlResult<()> {
    match bound {
        Bound::Scalar(v) => {
            out.push('?');
            args.push(v.clone());
        }
        Bound::Sequence(values) if values.is_empty() => {
            return Err(SqlError::EmptySequence(name.to_string()));
        }
        Bound::Sequence(values) => {
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push('?');
                args.push(v.clone());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::{self, SqlMaker};

    #[test]
    fn test_scalar_and_sequence() {
        let built = qb::select_all()
            .from("t")
            .eq("a", 1i32)
            .eq("b", vec!["x", "y", "z"])
            .to_sql()
            .unwrap();
        let q = expand(&built).unwrap();
        assert_eq!(
            q.sql,
            "SELECT\n    *\nFROM\n    t\nWHERE\n    a=?\n    AND b IN (?, ?, ?)"
        );
        assert_eq!(
            q.args,
            vec![
                Value::Int(1),
                Value::Text("x".into()),
                Value::Text("y".into()),
                Value::Text("z".into()),
            ]
        );
    }

    #[test]
    fn test_insert_rows_expand_to_tuples() {
        let built = qb::insert_into("t")
            .columns(["a", "b"])
            .values((1i32, "x"))
            .values((2i32, "y"))
            .to_sql()
            .unwrap();
        let q = expand(&built).unwrap();
        assert_eq!(q.sql, "INSERT INTO t (a, b) VALUES (?, ?), (?, ?)");
        assert_eq!(q.args.len(), 4);
        assert_eq!(q.args[2], Value::Int(2));
    }

    #[test]
    fn test_placeholder_order_follows_text() {
        let mut params = Params::new();
        params.insert("b".into(), Bound::Scalar(Value::Int(2)));
        params.insert("a".into(), Bound::Scalar(Value::Int(1)));
        let q = expand_named("x=:b AND y=:a AND z=:b", &params).unwrap();
        assert_eq!(q.sql, "x=? AND y=? AND z=?");
        assert_eq!(q.args, vec![Value::Int(2), Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_missing_param() {
        let err = expand_named("a=:a", &Params::new()).unwrap_err();
        assert!(matches!(err, SqlError::MissingParam(ref n) if n == "a"));
    }

    #[test]
    fn test_empty_sequence() {
        let mut params = Params::new();
        params.insert("ids".into(), Bound::Sequence(vec![]));
        let err = expand_named("id IN (:ids)", &params).unwrap_err();
        assert!(matches!(err, SqlError::EmptySequence(ref n) if n == "ids"));
    }

    #[test]
    fn test_unicode_placeholder_names() {
        let built = qb::select_all()
            .from("t")
            .eq("名字", 1i32)
            .eq("u.état", vec![2i32, 3])
            .to_sql()
            .unwrap();
        let q = expand(&built).unwrap();
        assert_eq!(
            q.sql,
            "SELECT\n    *\nFROM\n    t\nWHERE\n    名字=?\n    AND u.état IN (?, ?)"
        );
        assert_eq!(q.args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn test_unused_param() {
        let mut params = Params::new();
        params.insert("a".into(), Bound::Scalar(Value::Int(1)));
        params.insert("b".into(), Bound::Scalar(Value::Int(2)));
        let err = expand_named("x=:a", &params).unwrap_err();
        assert!(matches!(err, SqlError::UnusedParam(ref n) if n == "b"));
        assert!(err.is_build_error());

        // A placeholder hidden in a quoted run does not consume its binding.
        let err = expand_named("x=':a'", &params).unwrap_err();
        assert!(matches!(err, SqlError::UnusedParam(ref n) if n == "a"));
    }

    #[test]
    fn test_escapes_and_quotes() {
        let mut params = Params::new();
        params.insert("v".into(), Bound::Scalar(Value::Int(1)));
        let q = expand_named(
            "SELECT '::not' AS \"a:b\", `c:d`, 'it''s :x', 'x\\':y', t::v, :v, a : b",
            &params,
        )
        .unwrap();
        assert_eq!(
            q.sql,
            "SELECT '::not' AS \"a:b\", `c:d`, 'it''s :x', 'x\\':y', t:v, ?, a : b"
        );
        assert_eq!(q.args, vec![Value::Int(1)]);
    }
}
