//! UPDATE statement fragment.

use crate::bind::{BindParamList, Value};
use crate::error::BuildResult;
use crate::stmt::expr::{Expr, ExprGroup};
use crate::stmt::{Statement, encapsulated};

/// SET clause value.
#[derive(Clone, Debug)]
enum Assign {
    /// Parameterized value
    Value(Value),
    /// Raw SQL expression
    Raw(String),
}

/// UPDATE statement builder.
#[derive(Clone, Debug, Default)]
pub struct Update {
    table: Option<String>,
    assignments: Vec<(String, Assign)>,
    where_group: ExprGroup,
}

impl Update {
    /// Create an empty UPDATE builder; it renders `None` until it has a
    /// table and at least one assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Assign a column a parameterized value.
    pub fn assign(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.assignments
            .push((column.to_string(), Assign::Value(value.into())));
        self
    }

    /// Assign a column a raw SQL expression (e.g. `"NOW()"`).
    pub fn assign_raw(mut self, column: &str, expr: &str) -> Self {
        self.assignments
            .push((column.to_string(), Assign::Raw(expr.to_string())));
        self
    }

    /// Assign a column a JSON-serialized value.
    pub fn assign_json<T: serde::Serialize>(self, column: &str, value: &T) -> BuildResult<Self> {
        let json = serde_json::to_value(value)?;
        Ok(self.assign(column, json))
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

    /// Add WHERE: `column IS NULL`
    pub fn is_null(mut self, column: &str) -> Self {
        self.where_group.is_null(column);
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

impl Statement for Update {
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String> {
        // Nothing to execute without a table or assignments; the bind list
        // must stay untouched in that case.
        let table = self.table.as_deref()?;
        if self.assignments.is_empty() {
            return None;
        }

        let mut set_parts = Vec::with_capacity(self.assignments.len());
        for (column, assign) in &self.assignments {
            match assign {
                Assign::Value(value) => {
                    let placeholder = binds.add(value.clone()).placeholder();
                    set_parts.push(format!("{column} = {placeholder}"));
                }
                Assign::Raw(expr) => set_parts.push(format!("{column} = {expr}")),
            }
        }

        let mut sql = format!("UPDATE {table} SET {}", set_parts.join(", "));
        if !self.where_group.is_empty() {
            let clause = self.where_group.render(binds);
            if !clause.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clause);
            }
        }
        Some(encapsulated(sql, encapsulate))
    }
}
