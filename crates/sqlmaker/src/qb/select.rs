//! SELECT statement builder.

use crate::error::{SqlError, SqlResult};
use crate::qb::fragment::{self, Fragment};
use crate::qb::join::Join;
use crate::qb::param::{BuiltQuery, Params, merge};
use crate::qb::traits::{SqlMaker, and_line, comma, render_each};
use crate::value::{IntoBound, Value};

/// SELECT statement builder.
///
/// Clauses are always emitted in the same order: columns, FROM, joins, WHERE,
/// GROUP BY, ORDER BY, LIMIT, FOR UPDATE.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectQb {
    /// Projected columns (empty renders `*`)
    columns: Vec<Fragment>,
    /// Source table or FROM expression
    from: String,
    /// JOIN clauses
    joins: Vec<Join>,
    /// WHERE conditions
    where_parts: Vec<Fragment>,
    /// GROUP BY columns
    group_bys: Vec<String>,
    /// ORDER BY terms
    order_parts: Vec<Fragment>,
    /// LIMIT (ignored unless positive)
    limit: i64,
    /// OFFSET (ignored unless LIMIT is positive)
    offset: i64,
    /// Append `FOR UPDATE`
    for_update: bool,
}

impl SelectQb {
    /// Create an empty SELECT builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Columns & source ====================

    /// Append one projected column.
    pub fn column(mut self, col: impl Into<Fragment>) -> Self {
        self.columns.push(col.into());
        self
    }

    /// Append projected columns.
    pub fn columns<I, F>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.columns.extend(cols.into_iter().map(Into::into));
        self
    }

    /// Set the source table.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = table.into();
        self
    }

    /// Append a JOIN; joins render in append order.
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    // ==================== WHERE ====================

    /// Append a WHERE condition (ANDed with the others).
    pub fn and_where(mut self, cond: Fragment) -> Self {
        self.where_parts.push(cond);
        self
    }

    /// Add WHERE: column = value (or IN for sequences)
    pub fn eq(self, column: &str, value: impl IntoBound) -> Self {
        self.and_where(fragment::eq(column, value))
    }

    /// Add WHERE: column > value
    pub fn gt(self, column: &str, value: impl Into<Value>) -> Self {
        self.and_where(fragment::gt(column, value))
    }

    /// Add WHERE: column < value
    pub fn lt(self, column: &str, value: impl Into<Value>) -> Self {
        self.and_where(fragment::lt(column, value))
    }

    // ==================== Grouping & ordering ====================

    /// Set GROUP BY columns.
    pub fn group_by<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_bys = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Append an ORDER BY term.
    pub fn order_by(mut self, order: Fragment) -> Self {
        self.order_parts.push(order);
        self
    }

    // ==================== Pagination & locking ====================

    /// Set LIMIT.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = n;
        self
    }

    /// Set OFFSET. Only rendered together with a positive LIMIT.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = n;
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1. The offset saturates at `i64::MAX`.
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit = size;
        self.offset = (p - 1).saturating_mul(size);
        self
    }

    /// Lock selected rows (`FOR UPDATE`).
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    /// Source table, if set.
    pub fn table(&self) -> &str {
        &self.from
    }
}

impl SqlMaker for SelectQb {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        if self.from.is_empty() {
            return Err(SqlError::MissingTable("select"));
        }

        let mut sql = String::from("SELECT");
        let mut params = Params::new();

        if self.columns.is_empty() {
            sql.push_str("\n    *");
        } else {
            render_each(&mut sql, &mut params, &self.columns, |i| {
                if i == 0 { "\n    " } else { ",\n    " }
            })?;
        }

        sql.push_str("\nFROM\n    ");
        sql.push_str(&self.from);

        for join in &self.joins {
            let built = join.to_sql()?;
            sql.push('\n');
            sql.push_str(&built.sql);
            merge(&mut params, built.params);
        }

        if !self.where_parts.is_empty() {
            sql.push_str("\nWHERE");
            render_each(&mut sql, &mut params, &self.where_parts, and_line)?;
        }

        if !self.group_bys.is_empty() {
            sql.push_str("\nGROUP BY\n    ");
            sql.push_str(&self.group_bys.join(", "));
        }

        if !self.order_parts.is_empty() {
            sql.push_str("\nORDER BY\n    ");
            render_each(&mut sql, &mut params, &self.order_parts, comma)?;
        }

        if self.limit > 0 {
            if self.offset > 0 {
                sql.push_str(&format!("\nLIMIT {}, {}", self.offset, self.limit));
            } else {
                sql.push_str(&format!("\nLIMIT {}", self.limit));
            }
        }

        if self.for_update {
            sql.push_str("\nFOR UPDATE");
        }

        Ok(BuiltQuery::new(sql, params))
    }
}
