//! JOIN construct.

use crate::error::{SqlError, SqlResult};
use crate::qb::fragment::Fragment;
use crate::qb::param::{BuiltQuery, Params};
use crate::qb::traits::{SqlMaker, and_line, render_each};

/// Supported join kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i64)]
pub enum JoinKind {
    Inner = 1,
}

impl JoinKind {
    /// Numeric code of this kind.
    pub fn code(self) -> i64 {
        self as i64
    }

    fn keyword(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
        }
    }
}

impl TryFrom<i64> for JoinKind {
    type Error = SqlError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(JoinKind::Inner),
            other => Err(SqlError::UnsupportedJoinKind(other)),
        }
    }
}

/// A join against `target` with ANDed ON conditions.
///
/// ```ignore
/// let j = join(JoinKind::Inner, "orders o")
///     .on(raw_eq("o.user_id", "u.id"))
///     .on(eq("o.state", 1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Join {
    /// Kind, or the rejected code when built from an unknown one.
    kind: Result<JoinKind, i64>,
    target: String,
    on_parts: Vec<Fragment>,
}

impl Join {
    /// Create a join with no conditions.
    pub fn new(kind: JoinKind, target: impl Into<String>) -> Self {
        Self {
            kind: Ok(kind),
            target: target.into(),
            on_parts: Vec::new(),
        }
    }

    /// Create a join from a numeric kind code.
    ///
    /// Unknown codes are accepted here and reported when the join is rendered.
    pub fn from_code(code: i64, target: impl Into<String>) -> Self {
        Self {
            kind: JoinKind::try_from(code).map_err(|_| code),
            target: target.into(),
            on_parts: Vec::new(),
        }
    }

    /// Append an ON condition.
    pub fn on(mut self, cond: Fragment) -> Self {
        self.on_parts.push(cond);
        self
    }

    /// Target table (with optional alias).
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl SqlMaker for Join {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        let kind = self.kind.map_err(SqlError::UnsupportedJoinKind)?;
        if self.target.is_empty() {
            return Err(SqlError::EmptyJoinTarget);
        }
        if self.on_parts.is_empty() {
            return Err(SqlError::NoJoinConditions {
                target: self.target.clone(),
            });
        }

        let mut sql = String::with_capacity(32 + self.target.len());
        let mut params = Params::new();
        sql.push_str(kind.keyword());
        sql.push(' ');
        sql.push_str(&self.target);
        sql.push_str(" ON (");
        render_each(&mut sql, &mut params, &self.on_parts, and_line)?;
        sql.push_str("\n)");
        Ok(BuiltQuery::new(sql, params))
    }
}

/// Create a join of `kind` against `target`.
pub fn join(kind: JoinKind, target: impl Into<String>) -> Join {
    Join::new(kind, target)
}
