//! DELETE statement builder.

use crate::error::{SqlError, SqlResult};
use crate::qb::fragment::{self, Fragment};
use crate::qb::param::{BuiltQuery, Params};
use crate::qb::traits::{SqlMaker, and_inline, render_each};
use crate::value::IntoBound;

/// DELETE statement builder.
///
/// # Caution
/// Without WHERE conditions this renders `DELETE FROM <table>`, which removes
/// every row. Callers must add conditions themselves when they need them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteQb {
    /// Table name
    table: String,
    /// WHERE conditions
    where_parts: Vec<Fragment>,
}

impl DeleteQb {
    /// Create a DELETE builder for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_parts: Vec::new(),
        }
    }

    /// Set the target table.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
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

    /// Whether any WHERE condition was added.
    pub fn has_where(&self) -> bool {
        !self.where_parts.is_empty()
    }
}

impl SqlMaker for DeleteQb {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        if self.table.is_empty() {
            return Err(SqlError::MissingTable("delete"));
        }

        let mut params = Params::new();
        let mut sql = format!("DELETE FROM {}", self.table);
        if !self.where_parts.is_empty() {
            sql.push_str(" WHERE ");
            render_each(&mut sql, &mut params, &self.where_parts, and_inline)?;
        }
        Ok(BuiltQuery::new(sql, params))
    }
}
