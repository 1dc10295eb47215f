//! SQL logging for executors.
//!
//! [`LoggingExecutor`] wraps any [`Executor`] and, when
//! [`MonitorConfig::show_sql`] is on, emits a `tracing` event on target
//! `sqlmaker.sql` before each statement runs. The setting travels with the
//! wrapper; there is no process-wide switch.
//!
//! ```ignore
//! let conn = LoggingExecutor::new(pool_conn, MonitorConfig::new().with_show_sql(true));
//! qb::update("users").set("state", 1).eq("id", 9).execute(&conn).await?;
//! ```

use crate::client::{ExecResult, Executor, Row};
use crate::error::SqlResult;
use crate::value::Value;
use serde::Deserialize;
use std::future::Future;
use tracing::Level;

/// The type of SQL statement being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    /// Anything else (DDL, SHOW, CALL, ...)
    Other,
}

impl StatementKind {
    /// Classify by the first keyword, ignoring leading whitespace and `(`.
    pub fn from_sql(sql: &str) -> Self {
        let trimmed = sql.trim_start_matches(|c: char| c.is_whitespace() || c == '(');
        let keyword: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        match keyword.to_ascii_uppercase().as_str() {
            "SELECT" => StatementKind::Select,
            "INSERT" | "REPLACE" => StatementKind::Insert,
            "UPDATE" => StatementKind::Update,
            "DELETE" => StatementKind::Delete,
            _ => StatementKind::Other,
        }
    }
}

/// Event level for logged SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Configuration for SQL logging.
///
/// Logging is off by default. Embeddable in application config:
///
/// ```toml
/// [sql]
/// show_sql = true
/// max_sql_length = 500
/// level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Log every statement before it runs.
    pub show_sql: bool,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
    /// Tracing event level.
    pub level: LogLevel,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            show_sql: false,
            max_sql_length: Some(1000),
            level: LogLevel::Debug,
        }
    }
}

impl MonitorConfig {
    /// Create a new configuration with defaults (logging off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn SQL logging on or off.
    pub fn with_show_sql(mut self, show: bool) -> Self {
        self.show_sql = show;
        self
    }

    /// Set maximum SQL length to display.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    /// Override the tracing event level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn truncate_sql<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.max_sql_length {
            Some(max) if sql.len() > max => {
                format!("{}...", truncate_sql_bytes(sql, max)).into()
            }
            _ => sql.into(),
        }
    }
}

/// Longest prefix of `sql` that is at most `max` bytes and ends on a char boundary.
fn truncate_sql_bytes(sql: &str, max: usize) -> &str {
    let mut end = max.min(sql.len());
    while !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn format_args_list(args: &[Value]) -> String {
    let parts: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// An [`Executor`] that logs SQL before delegating to `inner`.
#[derive(Debug, Clone)]
pub struct LoggingExecutor<E> {
    inner: E,
    config: MonitorConfig,
}

impl<E: Executor> LoggingExecutor<E> {
    pub fn new(inner: E, config: MonitorConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }

    fn log(&self, sql: &str, args: &[Value]) {
        if !self.config.show_sql {
            return;
        }

        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let kind = StatementKind::from_sql(sql);
        let shown_sql = self.config.truncate_sql(sql);
        let shown_args = format_args_list(args);
        emit_at_level!(
            Level::from(self.config.level),
            target: "sqlmaker.sql",
            kind = ?kind,
            param_count = args.len(),
            sql = %shown_sql,
            args = %shown_args,
            "exec sql"
        );
    }
}

impl<E: Executor> Executor for LoggingExecutor<E> {
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl Future<Output = SqlResult<ExecResult>> + Send {
        self.log(sql, args);
        self.inner.execute(sql, args)
    }

    fn query(&self, sql: &str, args: &[Value]) -> impl Future<Output = SqlResult<Vec<Row>>> + Send {
        self.log(sql, args);
        self.inner.query(sql, args)
    }
}
