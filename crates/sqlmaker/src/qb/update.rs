//! UPDATE statement builder.

use crate::error::{SqlError, SqlResult};
use crate::qb::fragment::{self, Fragment};
use crate::qb::param::{BuiltQuery, Params};
use crate::qb::traits::{SqlMaker, and_inline, comma, render_each};
use crate::value::IntoBound;

/// UPDATE statement builder.
///
/// At least one SET fragment is required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateQb {
    /// Table name
    table: String,
    /// SET fragments
    set_parts: Vec<Fragment>,
    /// WHERE conditions
    where_parts: Vec<Fragment>,
}

impl UpdateQb {
    /// Create an UPDATE builder for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set the target table.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Append a SET fragment (usually [`fragment::eq`] or [`fragment::raw_eq`]).
    pub fn set_part(mut self, part: Fragment) -> Self {
        self.set_parts.push(part);
        self
    }

    /// SET column = value
    pub fn set(self, column: &str, value: impl IntoBound) -> Self {
        self.set_part(fragment::eq(column, value))
    }

    /// SET column = <raw expression>
    pub fn set_raw(self, column: &str, expr: &str) -> Self {
        self.set_part(fragment::raw_eq(column, expr))
    }

    /// Append a WHERE condition (ANDed with the others).
    pub fn and_where(mut self, cond: Fragment) -> Self {
        self.where_parts.push(cond);
        self
    }

    /// Add WHERE: column = value (or IN for sequences)
    pub fn eq(self, column: &str, value: impl IntoBound) -> Self {
        self.and_where(fragment::eq(column, value))
    }
}

impl SqlMaker for UpdateQb {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        if self.table.is_empty() {
            return Err(SqlError::MissingTable("update"));
        }
        if self.set_parts.is_empty() {
            return Err(SqlError::EmptySet);
        }

        let mut params = Params::new();
        let mut sql = format!("UPDATE {} SET ", self.table);
        render_each(&mut sql, &mut params, &self.set_parts, comma)?;

        if !self.where_parts.is_empty() {
            sql.push_str(" WHERE ");
            render_each(&mut sql, &mut params, &self.where_parts, and_inline)?;
        }

        Ok(BuiltQuery::new(sql, params))
    }
}
