//! INSERT statement builder.

use crate::error::{SqlError, SqlResult};
use crate::qb::fragment::{self, Fragment};
use crate::qb::param::{BuiltQuery, Params};
use crate::qb::traits::{SqlMaker, comma, render_each};
use crate::value::{Bound, IntoRow, Value};

/// INSERT statement builder with MySQL `IGNORE` and
/// `ON DUPLICATE KEY UPDATE` support.
///
/// Each row is bound whole under `value<i>`; the expansion step turns it into
/// a parenthesized placeholder list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsertQb {
    /// Table name
    table: String,
    /// `INSERT IGNORE`
    ignore: bool,
    /// Column names
    columns: Vec<String>,
    /// Value rows, in append order
    rows: Vec<Vec<Value>>,
    /// ON DUPLICATE KEY UPDATE fragments
    duplicates: Vec<Fragment>,
}

impl InsertQb {
    /// Create an INSERT builder for `table`.
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

    /// Render `INSERT IGNORE` instead of `INSERT`.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Set the column list.
    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Append one row of values.
    pub fn values(mut self, row: impl IntoRow) -> Self {
        self.rows.push(row.into_row());
        self
    }

    /// Append several rows.
    pub fn values_many<I, R>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoRow,
    {
        self.rows.extend(rows.into_iter().map(IntoRow::into_row));
        self
    }

    /// Append an ON DUPLICATE KEY UPDATE fragment.
    pub fn on_duplicate(mut self, frag: Fragment) -> Self {
        self.duplicates.push(frag);
        self
    }

    /// Append `column=VALUES(column)` for each column.
    pub fn on_duplicate_values<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.duplicates
            .extend(cols.into_iter().map(fragment::duplicate));
        self
    }

    /// Number of rows appended so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl SqlMaker for InsertQb {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        if self.table.is_empty() {
            return Err(SqlError::MissingTable("insert"));
        }
        if self.columns.is_empty() {
            return Err(SqlError::EmptyColumns);
        }
        if self.rows.is_empty() {
            return Err(SqlError::NoRows);
        }
        let expected = self.columns.len();
        if let Some((row, values)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != expected)
        {
            return Err(SqlError::RowArity {
                row,
                expected,
                got: values.len(),
            });
        }

        let mut params = Params::new();
        let mut sql = String::from(if self.ignore {
            "INSERT IGNORE INTO "
        } else {
            "INSERT INTO "
        });
        sql.push_str(&self.table);
        sql.push_str(" (");
        sql.push_str(&self.columns.join(", "));
        sql.push_str(") VALUES ");

        for (i, row) in self.rows.iter().enumerate() {
            let name = format!("value{i}");
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str("(:");
            sql.push_str(&name);
            sql.push(')');
            params.insert(name, Bound::Sequence(row.clone()));
        }

        if !self.duplicates.is_empty() {
            sql.push_str(" ON DUPLICATE KEY UPDATE ");
            render_each(&mut sql, &mut params, &self.duplicates, comma)?;
        }

        Ok(BuiltQuery::new(sql, params))
    }
}
