//! Key/value shortcuts for single-table writes.
//!
//! `update_kv` and `delete_kv` build an UPDATE or DELETE whose WHERE clause is
//! an AND of equalities over `keys`, then execute it. A key bound to an empty
//! sequence matches nothing, so the statement is skipped and `0` is returned
//! instead of rendering `IN ()`.
//!
//! ```ignore
//! use sqlmaker::kv;
//! use sqlmaker::value::IntoBound;
//!
//! let n = kv::update_kv(
//!     &conn,
//!     "users",
//!     [("state", 2.into_bound())],
//!     [("id", vec![1, 2, 3].into_bound())],
//! )
//! .await?;
//! ```

use crate::client::{Executor, StatementExt};
use crate::error::{SqlError, SqlResult};
use crate::qb::{self, eq};
use crate::value::Bound;

/// Collect keys, failing on an empty list.
///
/// Returns `Ok(None)` when some key is an empty sequence.
fn collect_keys<'a, K>(keys: K) -> SqlResult<Option<Vec<(&'a str, Bound)>>>
where
    K: IntoIterator<Item = (&'a str, Bound)>,
{
    let keys: Vec<_> = keys.into_iter().collect();
    if keys.is_empty() {
        return Err(SqlError::validation("kv write requires at least one key"));
    }
    if keys.iter().any(|(_, b)| b.is_sequence() && b.is_empty()) {
        return Ok(None);
    }
    Ok(Some(keys))
}

/// `UPDATE table SET updates... WHERE keys...`; returns the affected row count.
///
/// Updates and keys share one parameter namespace. A column that appears in
/// both derives the same name and the key value wins, so
/// `SET state=:state WHERE state=:state` binds the old state twice. Use
/// [`qb::update`] with [`UpdateQb::set_raw`](crate::qb::UpdateQb::set_raw) or
/// a distinct column spelling (`` `state` `` vs `state`) for state transitions.
pub async fn update_kv<'a, C, U, K>(conn: &C, table: &str, updates: U, keys: K) -> SqlResult<u64>
where
    C: Executor,
    U: IntoIterator<Item = (&'a str, Bound)>,
    K: IntoIterator<Item = (&'a str, Bound)>,
{
    let Some(keys) = collect_keys(keys)? else {
        tracing::debug!(target: "sqlmaker.sql", table, "update_kv skipped: empty key sequence");
        return Ok(0);
    };

    let mut stmt = qb::update(table);
    for (column, value) in updates {
        stmt = stmt.set(column, value);
    }
    for (column, value) in keys {
        stmt = stmt.and_where(eq(column, value));
    }
    stmt.execute(conn).await
}

/// `DELETE FROM table WHERE keys...`; returns the affected row count.
pub async fn delete_kv<'a, C, K>(conn: &C, table: &str, keys: K) -> SqlResult<u64>
where
    C: Executor,
    K: IntoIterator<Item = (&'a str, Bound)>,
{
    let Some(keys) = collect_keys(keys)? else {
        tracing::debug!(target: "sqlmaker.sql", table, "delete_kv skipped: empty key sequence");
        return Ok(0);
    };

    let mut stmt = qb::delete_from(table);
    for (column, value) in keys {
        stmt = stmt.and_where(eq(column, value));
    }
    stmt.execute(conn).await
}
