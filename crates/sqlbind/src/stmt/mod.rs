//! Composable SQL statement fragments with shared bind registration.
//!
//! Every fragment renders through [`Statement::statement`]: it appends its
//! literal values to a caller-owned [`BindParamList`] and returns SQL text
//! referencing them as `:name` placeholders. Sub-fragments (a `Select`
//! inside an [`Exists`], say) render into the same list, so bind names stay
//! globally unique across the whole composite statement.

mod delete;
mod exists;
mod expr;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use exists::Exists;
pub use expr::{Expr, ExprGroup};
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::bind::BindParamList;

/// A renderable SQL fragment.
pub trait Statement {
    /// Render this fragment, registering literal values into `binds`.
    ///
    /// Returns `None` when the fragment has nothing to execute (an UPDATE
    /// without assignments, a SELECT without a table); no binds are
    /// registered in that case. With `encapsulate` the rendered text is
    /// wrapped as `( <sql> )` so it composes as a sub-expression.
    ///
    /// Rendering is a pure projection of the fragment's construction-time
    /// data, but the bind list is not: rendering twice into the same list
    /// registers every literal again under fresh auto names. Call
    /// [`BindParamList::reset`] between rebuilds when reusing a list.
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String>;

    /// Render into a fresh bind list, yielding the `(sql, binds)` pair the
    /// prepared-statement executor consumes.
    fn build(&self) -> Option<(String, BindParamList)> {
        let mut binds = BindParamList::new();
        let sql = self.statement(&mut binds, false)?;
        tracing::debug!(sql = %sql, binds = binds.len(), "built statement");
        Some((sql, binds))
    }
}

/// Create an empty SELECT statement builder.
pub fn select() -> Select {
    Select::new()
}

/// Create a SELECT statement builder for the given table.
pub fn select_from(table: &str) -> Select {
    Select::new().from(table)
}

/// Create an INSERT statement builder for the given table.
pub fn insert_into(table: &str) -> Insert {
    Insert::new().into(table)
}

/// Create an UPDATE statement builder for the given table.
pub fn update(table: &str) -> Update {
    Update::new().from(table)
}

/// Create a DELETE statement builder for the given table.
///
/// By default a DELETE without WHERE conditions renders `WHERE 1=0` (no-op);
/// use `allow_delete_all(true)` to delete all rows.
pub fn delete_from(table: &str) -> Delete {
    Delete::new().from(table)
}

pub(crate) fn encapsulated(sql: String, encapsulate: bool) -> String {
    if encapsulate { format!("( {sql} )") } else { sql }
}
