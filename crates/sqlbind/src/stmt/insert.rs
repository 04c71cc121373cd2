//! INSERT statement fragment.

use crate::bind::{BindParamList, Value};
use crate::stmt::{Statement, encapsulated};

/// INSERT statement builder.
#[derive(Clone, Debug, Default)]
pub struct Insert {
    table: Option<String>,
    values: Vec<(String, Value)>,
}

impl Insert {
    /// Create an empty INSERT builder; it renders `None` until it has a
    /// table and at least one column value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn into(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Set a column value.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.values.push((column.to_string(), value.into()));
        self
    }

    /// Set an optional column value (`None` skips the column).
    pub fn set_opt<V: Into<Value>>(self, column: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }
}

impl Statement for Insert {
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String> {
        let table = self.table.as_deref()?;
        if self.values.is_empty() {
            return None;
        }

        let mut columns = Vec::with_capacity(self.values.len());
        let mut placeholders = Vec::with_capacity(self.values.len());
        for (column, value) in &self.values {
            columns.push(column.as_str());
            placeholders.push(binds.add(value.clone()).placeholder());
        }

        let sql = format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        );
        Some(encapsulated(sql, encapsulate))
    }
}
