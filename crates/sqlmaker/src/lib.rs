//! # sqlmaker
//!
//! A composable MySQL statement builder that renders named-parameter SQL.
//!
//! ## Features
//!
//! - **Fragments**: equality (scalar or `IN` list, chosen by the value's type),
//!   raw expressions, comparisons, aliases, ordering and upsert columns
//! - **Statements**: SELECT (with joins, grouping, ordering, paging and
//!   `FOR UPDATE`), INSERT (`IGNORE`, multi-row, `ON DUPLICATE KEY UPDATE`),
//!   UPDATE and DELETE
//! - **Expansion**: `:name` placeholders and sequence bindings turned into the
//!   positional `?` form MySQL drivers take
//! - **Bring your own driver**: implement [`Executor`] and every statement
//!   gains `execute` / `fetch_*` through [`StatementExt`]
//! - **SQL logging**: wrap an executor in [`LoggingExecutor`] to emit
//!   `tracing` events per statement
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use sqlmaker::qb::{self, desc, eq};
//! use sqlmaker::StatementExt;
//!
//! let rows = qb::select(["id", "name"])
//!     .from("users")
//!     .and_where(eq("status", vec![1, 2]))
//!     .order_by(desc("id"))
//!     .limit(10)
//!     .fetch_all(&conn)
//!     .await?;
//!
//! qb::update("users")
//!     .set("status", 0)
//!     .eq("id", user_id)
//!     .execute(&conn)
//!     .await?;
//! ```

pub mod client;
pub mod error;
pub mod expand;
pub mod kv;
pub mod monitor;
pub mod prelude;
pub mod qb;
pub mod value;

pub use client::{ExecResult, Executor, Row, StatementExt};
pub use error::{SqlError, SqlResult};
pub use expand::{ExpandedQuery, expand, expand_named};
pub use kv::{delete_kv, update_kv};
pub use monitor::{LogLevel, LoggingExecutor, MonitorConfig, StatementKind};

// Re-export the builder entry points for easy access
pub use qb::{
    BuiltQuery, DeleteQb, Fragment, InsertQb, JoinKind, SelectQb, SqlMaker, UpdateQb, delete_from,
    insert_into, select, select_all, update,
};
pub use value::{Bound, IntoBound, IntoRow, Value};
