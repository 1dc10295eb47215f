//! Execution-layer interface.
//!
//! sqlmaker ships no driver. Applications implement [`Executor`] over their
//! MySQL client (a pooled connection or a transaction) and get
//! render-expand-execute for free through [`StatementExt`].

use crate::error::{SqlError, SqlResult};
use crate::expand::expand;
use crate::qb::SqlMaker;
use crate::value::Value;
use std::future::Future;

/// Outcome of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Rows changed by the statement.
    pub rows_affected: u64,
    /// `LAST_INSERT_ID()` after the statement, if the driver reports one.
    pub last_insert_id: Option<u64>,
}

/// One result row: column names and values in select order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Build a row from `(column, value)` pairs.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Value of `column`, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Value of `column`, or [`SqlError::Decode`] if the row has no such column.
    pub fn try_get(&self, column: &str) -> SqlResult<&Value> {
        self.get(column)
            .ok_or_else(|| SqlError::decode(column, "column not found in row"))
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A MySQL connection or transaction that runs positional (`?`) SQL.
///
/// Implementations report driver and connectivity failures as
/// [`SqlError::Execution`]; an empty result set is `Ok(vec![])`, never an
/// error.
pub trait Executor: Send + Sync {
    /// Execute a statement and report affected rows.
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl Future<Output = SqlResult<ExecResult>> + Send;

    /// Execute a query and return all rows.
    fn query(&self, sql: &str, args: &[Value]) -> impl Future<Output = SqlResult<Vec<Row>>> + Send;
}

/// Render, expand and run any [`SqlMaker`].
///
/// Render and expansion errors are returned before the executor is called.
pub trait StatementExt: SqlMaker + Sync {
    /// Execute and return the affected row count.
    fn execute(&self, conn: &impl Executor) -> impl Future<Output = SqlResult<u64>> + Send {
        async move {
            let q = expand(&self.to_sql()?)?;
            Ok(conn.execute(&q.sql, &q.args).await?.rows_affected)
        }
    }

    /// Execute and return the last insert id.
    fn insert_id(&self, conn: &impl Executor) -> impl Future<Output = SqlResult<u64>> + Send {
        async move {
            let q = expand(&self.to_sql()?)?;
            conn.execute(&q.sql, &q.args)
                .await?
                .last_insert_id
                .ok_or_else(|| SqlError::execution("driver did not report a last insert id"))
        }
    }

    /// Query and return all rows.
    fn fetch_all(&self, conn: &impl Executor) -> impl Future<Output = SqlResult<Vec<Row>>> + Send {
        async move {
            let q = expand(&self.to_sql()?)?;
            conn.query(&q.sql, &q.args).await
        }
    }

    /// Query and return the first row, or `None` when there are no rows.
    fn fetch_opt(
        &self,
        conn: &impl Executor,
    ) -> impl Future<Output = SqlResult<Option<Row>>> + Send {
        async move {
            let rows = self.fetch_all(conn).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Query and return the first row; no rows is [`SqlError::NotFound`].
    fn fetch_one(&self, conn: &impl Executor) -> impl Future<Output = SqlResult<Row>> + Send {
        async move {
            self.fetch_opt(conn)
                .await?
                .ok_or_else(|| SqlError::not_found("Expected 1 row, got 0"))
        }
    }
}

impl<T: SqlMaker + Sync + ?Sized> StatementExt for T {}
