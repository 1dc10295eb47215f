//! Error types for sqlmaker

use thiserror::Error;

/// Result type alias for sqlmaker operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while rendering, expanding, or executing a statement
#[derive(Debug, Error)]
pub enum SqlError {
    /// Equality bound to an empty sequence (`IN ()` is not valid SQL)
    #[error("empty IN-list for column '{column}'")]
    EmptyInList { column: String },

    /// Join kind code outside the supported set
    #[error("unsupported join kind: {0}")]
    UnsupportedJoinKind(i64),

    /// Join without a target table
    #[error("join target is empty")]
    EmptyJoinTarget,

    /// Join without any ON condition
    #[error("join on '{target}' has no ON condition")]
    NoJoinConditions { target: String },

    /// Statement without a table name
    #[error("{0} statement has no table")]
    MissingTable(&'static str),

    /// INSERT without a column list
    #[error("insert has no columns")]
    EmptyColumns,

    /// UPDATE without any SET fragment
    #[error("update has no SET values")]
    EmptySet,

    /// INSERT without any VALUES row
    #[error("insert has no value rows")]
    NoRows,

    /// INSERT row whose arity does not match the column list
    #[error("insert row {row} has {got} values, expected {expected}")]
    RowArity {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Named placeholder without a bound value
    #[error("missing value for parameter ':{0}'")]
    MissingParam(String),

    /// Bound parameter that no placeholder refers to
    #[error("parameter ':{0}' is bound but never used")]
    UnusedParam(String),

    /// Sequence parameter with no elements at expansion time
    #[error("empty sequence bound to parameter ':{0}'")]
    EmptySequence(String),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error reported by the execution layer
    #[error("Execution error: {0}")]
    Execution(String),
}

impl SqlError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error was raised while rendering or expanding a statement,
    /// i.e. before anything reached the database.
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInList { .. }
                | Self::UnsupportedJoinKind(_)
                | Self::EmptyJoinTarget
                | Self::NoJoinConditions { .. }
                | Self::MissingTable(_)
                | Self::EmptyColumns
                | Self::EmptySet
                | Self::NoRows
                | Self::RowArity { .. }
                | Self::MissingParam(_)
                | Self::UnusedParam(_)
                | Self::EmptySequence(_)
        )
    }
}

impl From<serde_json::Error> for SqlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
