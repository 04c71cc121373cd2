//! DELETE statement fragment.

use crate::bind::{BindParamList, Value};
use crate::stmt::expr::{Expr, ExprGroup};
use crate::stmt::{Statement, encapsulated};

/// DELETE statement builder.
///
/// Without WHERE conditions the rendered statement is a `WHERE 1=0` no-op
/// unless [`allow_delete_all`](Self::allow_delete_all) was set.
#[derive(Clone, Debug, Default)]
pub struct Delete {
    table: Option<String>,
    where_group: ExprGroup,
    allow_delete_all: bool,
}

impl Delete {
    /// Create an empty DELETE builder; it renders `None` until a table is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Allow a DELETE without WHERE conditions to target all rows.
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
        self
    }

    /// Add WHERE: `column op value` with an arbitrary operator.
    pub fn where_cmp(mut self, column: &str, op: &str, value: impl Into<Value>) -> Self {
        self.where_group.cmp(column, op, value);
        self
    }

    /// Add WHERE: `column = value`
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.eq(column, value);
        self
    }

    /// Add WHERE: `column IN (values...)`
    pub fn in_list<V: Into<Value>>(mut self, column: &str, values: Vec<V>) -> Self {
        self.where_group.in_list(column, values);
        self
    }

    /// Add a custom WHERE expression.
    pub fn where_expr(mut self, expr: Expr) -> Self {
        self.where_group.push(expr);
        self
    }

    /// OR an expression with the previously added WHERE condition.
    pub fn or_where(mut self, expr: Expr) -> Self {
        self.where_group.or_push(expr);
        self
    }
}

impl Statement for Delete {
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String> {
        let table = self.table.as_deref()?;
        let mut sql = format!("DELETE FROM {table}");
        if self.where_group.is_empty() {
            if !self.allow_delete_all {
                sql.push_str(" WHERE 1=0");
            }
        } else {
            let clause = self.where_group.render(binds);
            if !clause.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clause);
            }
        }
        Some(encapsulated(sql, encapsulate))
    }
}
