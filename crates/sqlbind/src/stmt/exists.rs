//! EXISTS predicate fragment.

use std::fmt;

use crate::bind::BindParamList;
use crate::stmt::{Statement, encapsulated};

/// `EXISTS( .. )` predicate over raw SQL or a sub-statement.
///
/// A sub-statement renders into the same shared bind list as the enclosing
/// statement, keeping bind names globally unique across the composite.
pub struct Exists {
    inner: Inner,
}

enum Inner {
    Raw(String),
    Sub(Box<dyn Statement + Send + Sync>),
}

impl Exists {
    /// Wrap a sub-statement, typically a [`Select`](crate::stmt::Select).
    pub fn new(stmt: impl Statement + Send + Sync + 'static) -> Self {
        Self {
            inner: Inner::Sub(Box::new(stmt)),
        }
    }

    /// Wrap raw SQL text.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            inner: Inner::Raw(sql.into()),
        }
    }
}

impl Statement for Exists {
    fn statement(&self, binds: &mut BindParamList, encapsulate: bool) -> Option<String> {
        let inner = match &self.inner {
            Inner::Raw(sql) => sql.clone(),
            Inner::Sub(stmt) => stmt.statement(binds, false)?,
        };
        Some(encapsulated(format!("EXISTS( {inner} )"), encapsulate))
    }
}

impl fmt::Debug for Exists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Raw(sql) => f.debug_tuple("Exists").field(sql).finish(),
            Inner::Sub(_) => f.debug_tuple("Exists").field(&"<sub-statement>").finish(),
        }
    }
}
