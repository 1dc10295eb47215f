//! Trait definitions for statement pieces.

use crate::error::SqlResult;
use crate::qb::param::{BuiltQuery, Params, merge};

/// Anything that renders to parameterized SQL.
///
/// Rendering is a pure function of the current state: calling it twice on the
/// same value yields the same text and bindings. A failed render returns no
/// partial output.
pub trait SqlMaker {
    /// Render SQL text and its named bindings.
    fn to_sql(&self) -> SqlResult<BuiltQuery>;
}

impl<T: SqlMaker + ?Sized> SqlMaker for &T {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        (**self).to_sql()
    }
}

impl<T: SqlMaker + ?Sized> SqlMaker for Box<T> {
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        (**self).to_sql()
    }
}

/// Render `parts` into `buf`, writing `lead(i)` before each one and merging
/// their bindings into `params`.
pub(crate) fn render_each<'a, M, I>(
    buf: &mut String,
    params: &mut Params,
    parts: I,
    mut lead: impl FnMut(usize) -> &'static str,
) -> SqlResult<()>
where
    M: SqlMaker + 'a,
    I: IntoIterator<Item = &'a M>,
{
    for (i, part) in parts.into_iter().enumerate() {
        let built = part.to_sql()?;
        buf.push_str(lead(i));
        buf.push_str(&built.sql);
        merge(params, built.params);
    }
    Ok(())
}

/// Leads for `AND`-joined conditions on indented lines.
pub(crate) fn and_line(i: usize) -> &'static str {
    if i == 0 { "\n    " } else { "\n    AND " }
}

/// Leads for `AND`-joined conditions on one line.
pub(crate) fn and_inline(i: usize) -> &'static str {
    if i == 0 { "" } else { " AND " }
}

/// Leads for a comma-separated list on one line.
pub(crate) fn comma(i: usize) -> &'static str {
    if i == 0 { "" } else { ", " }
}
