//! Convenient imports for typical `sqlmaker` usage.
//!
//! ```ignore
//! use sqlmaker::prelude::*;
//! ```

pub use crate::qb::{
    JoinKind, SqlMaker, alias, asc, delete_from, desc, eq, gt, gte, insert_into, join, lt, lte,
    ne, raw_eq, select, select_all, update,
};
pub use crate::{
    Bound, Executor, IntoBound, LoggingExecutor, MonitorConfig, Row, SqlError, SqlResult,
    StatementExt, Value,
};
