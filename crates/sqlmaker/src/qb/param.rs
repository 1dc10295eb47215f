//! Named-parameter bookkeeping.

use crate::value::Bound;
use std::collections::BTreeMap;

/// Named parameters of a rendered statement, keyed by derived name.
pub type Params = BTreeMap<String, Bound>;

/// Derive a placeholder name from a column or key.
///
/// `.` (table qualification) and `` ` `` (identifier quoting) are both mapped
/// to `_`. Distinct columns may derive the same name (`a.b` and `a_b`); when
/// they meet in one statement the later binding replaces the earlier one.
pub fn derive_param_name(raw: &str) -> String {
    raw.replace(['.', '`'], "_")
}

/// Merge `from` into `into`. Later names overwrite earlier ones.
pub(crate) fn merge(into: &mut Params, from: Params) {
    into.extend(from);
}

/// The result of rendering a statement or fragment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuiltQuery {
    /// SQL text using `:name` placeholders.
    pub sql: String,
    /// Values bound to the placeholders.
    pub params: Params,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: String, params: Params) -> Self {
        Self { sql, params }
    }

    /// A fragment of literal SQL with no bindings.
    pub fn text(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Params::new(),
        }
    }

    /// Split into SQL text and parameters.
    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }
}
