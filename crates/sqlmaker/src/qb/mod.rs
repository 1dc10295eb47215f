//! Statement builder (QB) for MySQL named-parameter SQL.
//!
//! Statements are assembled from [`Fragment`]s and rendered through the
//! [`SqlMaker`] trait into a [`BuiltQuery`]: SQL text with `:name`
//! placeholders plus a name-to-value map.
//!
//! # Features
//!
//! - **Shape-driven equality**: `eq` renders `col=:col` for scalars and
//!   `col IN (:col)` for sequences; the choice is made by the value's type
//! - **Derived names**: placeholder names come from the column with `.` and
//!   `` ` `` replaced by `_`
//! - **Fixed clause order**: SELECT always renders columns, FROM, joins,
//!   WHERE, GROUP BY, ORDER BY, LIMIT, FOR UPDATE
//! - **All-or-nothing rendering**: any fragment error aborts the whole render
//!
//! # Usage
//!
//! ```ignore
//! use sqlmaker::qb::{self, JoinKind, desc, eq, raw_eq};
//!
//! // SELECT
//! let q = qb::select(["u.id", "u.name"])
//!     .from("users u")
//!     .join(qb::join(JoinKind::Inner, "orders o").on(raw_eq("o.user_id", "u.id")))
//!     .and_where(eq("u.status", vec![1, 2]))
//!     .order_by(desc("u.id"))
//!     .limit(20)
//!     .to_sql()?;
//!
//! // INSERT ... ON DUPLICATE KEY UPDATE
//! let q = qb::insert_into("stock")
//!     .columns(["sku", "qty"])
//!     .values(("a1", 3))
//!     .on_duplicate(raw_eq("qty", "qty+VALUES(qty)"))
//!     .to_sql()?;
//!
//! // UPDATE
//! let q = qb::update("users").set("status", 0).eq("id", 7).to_sql()?;
//!
//! // DELETE
//! let q = qb::delete_from("sessions").eq("user_id", 7).to_sql()?;
//! ```

mod delete;
mod fragment;
mod insert;
mod join;
mod param;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use fragment::{
    CmpOp, Fragment, alias, asc, column, desc, duplicate, eq, gt, gte, lt, lte, ne, raw_eq,
};
pub use insert::InsertQb;
pub use join::{Join, JoinKind, join};
pub use param::{BuiltQuery, Params, derive_param_name};
pub use select::SelectQb;
pub use traits::SqlMaker;
pub use update::UpdateQb;

/// Create a SELECT builder projecting `columns`.
///
/// An empty column list renders `*`.
///
/// # Example
/// ```ignore
/// let qb = sqlmaker::qb::select(["id", "name"]).from("users");
/// ```
pub fn select<I, F>(columns: I) -> SelectQb
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    SelectQb::new().columns(columns)
}

/// Create a `SELECT *` builder.
pub fn select_all() -> SelectQb {
    SelectQb::new()
}

/// Create an INSERT builder for the given table.
///
/// # Example
/// ```ignore
/// let qb = sqlmaker::qb::insert_into("users")
///     .columns(["name", "email"])
///     .values(("alice", "alice@example.com"));
/// ```
pub fn insert_into(table: &str) -> InsertQb {
    InsertQb::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder for the given table.
///
/// # Caution
/// A DELETE without WHERE conditions removes every row.
pub fn delete_from(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}

#[cfg(test)]
mod tests;
