//! Renderable statement fragments: conditions, column references, orderings.

use crate::error::{SqlError, SqlResult};
use crate::qb::param::{BuiltQuery, Params, derive_param_name};
use crate::qb::traits::SqlMaker;
use crate::value::{Bound, IntoBound, Value};

/// Comparison operator of a [`Fragment::Compare`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
}

impl CmpOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Ne => "!=",
        }
    }
}

/// A piece of a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    /// `column=:name`, or `column IN (:name)` for a sequence.
    Eq { column: String, value: Bound },

    /// `column=<expr>` with literal SQL on the right, e.g. `count=count+1`.
    RawEq { column: String, expr: String },

    /// `column<op>:name`, always scalar.
    Compare {
        column: String,
        op: CmpOp,
        value: Value,
    },

    /// Literal column or expression text.
    Column(String),

    /// `column AS alias`
    Alias { column: String, alias: String },

    /// `column=VALUES(column)` for `ON DUPLICATE KEY UPDATE`.
    Duplicate(String),

    /// Ascending ordering term (bare column).
    Asc(String),

    /// `column DESC`
    Desc(String),
}

impl Fragment {
    /// Column name this fragment refers to, if it has one.
    pub fn column_name(&self) -> &str {
        match self {
            Fragment::Eq { column, .. }
            | Fragment::RawEq { column, .. }
            | Fragment::Compare { column, .. }
            | Fragment::Alias { column, .. } => column,
            Fragment::Column(column)
            | Fragment::Duplicate(column)
            | Fragment::Asc(column)
            | Fragment::Desc(column) => column,
        }
    }
}

impl SqlMaker for Fragment {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        match self {
            Fragment::Eq { column, value } => {
                let name = derive_param_name(column);
                let sql = match value {
                    Bound::Sequence(values) if values.is_empty() => {
                        return Err(SqlError::EmptyInList {
                            column: column.clone(),
                        });
                    }
                    Bound::Sequence(_) => format!("{column} IN (:{name})"),
                    Bound::Scalar(_) => format!("{column}=:{name}"),
                };
                let mut params = Params::new();
                params.insert(name, value.clone());
                Ok(BuiltQuery::new(sql, params))
            }
            Fragment::RawEq { column, expr } => Ok(BuiltQuery::text(format!("{column}={expr}"))),
            Fragment::Compare { column, op, value } => {
                let name = derive_param_name(column);
                let sql = format!("{column}{}:{name}", op.as_str());
                let mut params = Params::new();
                params.insert(name, Bound::Scalar(value.clone()));
                Ok(BuiltQuery::new(sql, params))
            }
            Fragment::Column(column) => Ok(BuiltQuery::text(column.as_str())),
            Fragment::Alias { column, alias } => {
                Ok(BuiltQuery::text(format!("{column} AS {alias}")))
            }
            Fragment::Duplicate(column) => {
                Ok(BuiltQuery::text(format!("{column}=VALUES({column})")))
            }
            Fragment::Asc(column) => Ok(BuiltQuery::text(column.as_str())),
            Fragment::Desc(column) => Ok(BuiltQuery::text(format!("{column} DESC"))),
        }
    }
}

impl From<&str> for Fragment {
    fn from(column: &str) -> Self {
        Fragment::Column(column.to_string())
    }
}

impl From<String> for Fragment {
    fn from(column: String) -> Self {
        Fragment::Column(column)
    }
}

/// `column=:column`, or `column IN (:column)` when `value` is a sequence.
pub fn eq(column: impl Into<String>, value: impl IntoBound) -> Fragment {
    Fragment::Eq {
        column: column.into(),
        value: value.into_bound(),
    }
}

/// `column=<expr>`; `expr` is copied verbatim.
pub fn raw_eq(column: impl Into<String>, expr: impl Into<String>) -> Fragment {
    Fragment::RawEq {
        column: column.into(),
        expr: expr.into(),
    }
}

fn compare(column: impl Into<String>, op: CmpOp, value: impl Into<Value>) -> Fragment {
    Fragment::Compare {
        column: column.into(),
        op,
        value: value.into(),
    }
}

/// `column>:column`
pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Fragment {
    compare(column, CmpOp::Gt, value)
}

/// `column>=:column`
pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Fragment {
    compare(column, CmpOp::Gte, value)
}

/// `column<:column`
pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Fragment {
    compare(column, CmpOp::Lt, value)
}

/// `column<=:column`
pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Fragment {
    compare(column, CmpOp::Lte, value)
}

/// `column!=:column`
pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Fragment {
    compare(column, CmpOp::Ne, value)
}

/// Bare column or expression.
pub fn column(expr: impl Into<String>) -> Fragment {
    Fragment::Column(expr.into())
}

/// `column AS alias`
pub fn alias(column: impl Into<String>, alias: impl Into<String>) -> Fragment {
    Fragment::Alias {
        column: column.into(),
        alias: alias.into(),
    }
}

/// `column=VALUES(column)`
pub fn duplicate(column: impl Into<String>) -> Fragment {
    Fragment::Duplicate(column.into())
}

/// Ascending ordering.
pub fn asc(column: impl Into<String>) -> Fragment {
    Fragment::Asc(column.into())
}

/// Descending ordering.
pub fn desc(column: impl Into<String>) -> Fragment {
    Fragment::Desc(column.into())
}
