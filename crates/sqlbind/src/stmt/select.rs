//! SELECT statement fragment.

use crate::bind::{BindParamList, Value};
use crate::stmt::expr::{Expr, ExprGroup};
use crate::stmt::{Statement, encapsulated};

/// SELECT statement builder.
#[derive(Clone, Debug, Default)]
pub struct Select {
    table: Option<String>,
    columns: Vec<String>,
    where_group: ExprGroup,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Create an empty SELECT builder; it renders `None` until a table is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the FROM target.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Add a projected column; without any the builder selects `*`.
    pub fn column(mut self, column: &str) -> Self {
        self.columns.push(column.to_string());
        self
    }

    /// Set the projected columns.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| (*c).to_string()).collect();
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

    /// Add WHERE: `column != value`
    pub fn ne(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.ne(column, value);
        self
    }

    /// Add WHERE: `column > value`
    pub fn gt(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.gt(column, value);
        self
    }

    /// Add WHERE: `column >= value`
    pub fn gte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.gte(column, value);
        self
    }

    /// Add WHERE: `column < value`
    pub fn lt(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.lt(column, value);
        self
    }

    /// Add WHERE: `column <= value`
    pub fn lte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.where_group.lte(column, value);
        self
    }

    /// Add WHERE: `column LIKE pattern`
    pub fn like(mut self, column: &str, pattern: impl Into<Value>) -> Self {
        self.where_group.like(column, pattern);
        self
    }

    /// Add WHERE: `column IS NULL`
    pub fn is_null(mut self, column: &str) -> Self {
        self.where_group.is_null(column);
        self
    }

    /// Add WHERE: `column IN (values...)`
    pub fn in_list<V: Into<Value>>(mut self, column: &str, values: Vec<V>) -> Self {
        self.where_group.in_list(column, values);
        self
    }

    /// Add a custom WHERE expression (use [`Expr::or`] for OR branches).
    pub fn where_expr(mut self, expr: Expr) -> Self {
        self.where_group.push(expr);
        self
    }

    /// OR an expression with the previously added WHERE condition.
    pub fn or_where(mut self, expr: Expr) -> Self {
        self.where_group.or_push(expr);
        self
    }

    /// Add a GROUP BY clause.
    pub fn group_by(mut self, clause: &str) -> Self {
        self.group_by.push(clause.to_string());
        self
    }

    /// Add an ORDER BY clause (e.g. `"created_at DESC"`).
    pub fn order_by(mut self, clause: &str) -> Self {
        self.order_by.push(clause.to_string());
        self
    }

    /// Set LIMIT.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set OFFSET.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Statement for Select {
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String> {
        let table = self.table.as_deref()?;
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };
        let mut sql = format!("SELECT {columns} FROM {table}");
        if !self.where_group.is_empty() {
            let clause = self.where_group.render(binds);
            if !clause.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clause);
            }
        }
        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }
        Some(encapsulated(sql, encapsulate))
    }
}
