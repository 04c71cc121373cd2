//! Condition-expression layer for WHERE clauses.
//!
//! `Expr` supports AND/OR/NOT grouping, comparison operators, NULL checks,
//! IN lists and BETWEEN ranges. Rendering registers every literal into the
//! shared bind list and references it by its `:name` placeholder; there is
//! no string replacement after the fact.

use crate::bind::{BindParamList, Value};

/// Expression node for building WHERE clauses.
#[derive(Clone, Debug)]
pub enum Expr {
    /// AND group: all conditions must hold.
    And(Vec<Expr>),

    /// OR group: at least one condition must hold.
    Or(Vec<Expr>),

    /// NOT: negate the inner expression.
    Not(Box<Expr>),

    /// Simple comparison: `column op :name`
    Compare {
        column: String,
        op: String,
        value: Value,
    },

    /// `column IS NULL` / `column IS NOT NULL`
    NullCheck { column: String, is_null: bool },

    /// `column IN (:a, :b, ...)` or `column NOT IN (...)`
    InList {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// `column BETWEEN :from AND :to`
    Between {
        column: String,
        from: Value,
        to: Value,
        negated: bool,
    },

    /// Raw SQL fragment without parameters.
    Raw(String),

    /// Always true (used for empty NOT IN lists).
    True,

    /// Always false (used for empty IN lists).
    False,
}

impl Expr {
    /// AND expression over a list of expressions.
    pub fn and(exprs: Vec<Expr>) -> Self {
        Expr::And(exprs)
    }

    /// OR expression over a list of expressions.
    pub fn or(exprs: Vec<Expr>) -> Self {
        Expr::Or(exprs)
    }

    /// Negate an expression.
    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    /// Comparison with an arbitrary operator: `column op value`
    pub fn cmp(column: impl Into<String>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Compare {
            column: column.into(),
            op: op.into(),
            value: value.into(),
        }
    }

    /// `column = value`
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, "=", value)
    }

    /// `column != value`
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, "!=", value)
    }

    /// `column > value`
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, ">", value)
    }

    /// `column >= value`
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, ">=", value)
    }

    /// `column < value`
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, "<", value)
    }

    /// `column <= value`
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::cmp(column, "<=", value)
    }

    /// `column LIKE pattern`
    pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Expr::cmp(column, "LIKE", pattern)
    }

    /// `column IS NULL`
    pub fn is_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            is_null: true,
        }
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Expr::NullCheck {
            column: column.into(),
            is_null: false,
        }
    }

    /// `column IN (values...)`; empty lists collapse to always-false.
    pub fn in_list<V: Into<Value>>(column: impl Into<String>, values: Vec<V>) -> Self {
        if values.is_empty() {
            return Expr::False;
        }
        Expr::InList {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: false,
        }
    }

    /// `column NOT IN (values...)`; empty lists collapse to always-true.
    pub fn not_in<V: Into<Value>>(column: impl Into<String>, values: Vec<V>) -> Self {
        if values.is_empty() {
            return Expr::True;
        }
        Expr::InList {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
            negated: true,
        }
    }

    /// `column BETWEEN from AND to`
    pub fn between<V: Into<Value>>(column: impl Into<String>, from: V, to: V) -> Self {
        Expr::Between {
            column: column.into(),
            from: from.into(),
            to: to.into(),
            negated: false,
        }
    }

    /// Raw SQL fragment.
    pub fn raw(sql: impl Into<String>) -> Self {
        Expr::Raw(sql.into())
    }

    /// Check whether this expression contains no conditions.
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::And(exprs) | Expr::Or(exprs) => {
                exprs.is_empty() || exprs.iter().all(Expr::is_empty)
            }
            Expr::Not(inner) => inner.is_empty(),
            _ => false,
        }
    }

    /// Render the SQL fragment, registering parameters into `binds`.
    pub fn render(&self, binds: &mut BindParamList) -> String {
        match self {
            Expr::And(exprs) => join_group(exprs, " AND ", binds, |e| matches!(e, Expr::Or(_))),
            Expr::Or(exprs) => join_group(exprs, " OR ", binds, |e| matches!(e, Expr::And(_))),
            Expr::Not(inner) => {
                let sql = inner.render(binds);
                if sql.is_empty() {
                    String::new()
                } else {
                    format!("NOT ({sql})")
                }
            }
            Expr::Compare { column, op, value } => {
                let placeholder = binds.add(value.clone()).placeholder();
                format!("{column} {op} {placeholder}")
            }
            Expr::NullCheck { column, is_null } => {
                if *is_null {
                    format!("{column} IS NULL")
                } else {
                    format!("{column} IS NOT NULL")
                }
            }
            Expr::InList {
                column,
                values,
                negated,
            } => {
                let placeholders: Vec<String> = values
                    .iter()
                    .map(|v| binds.add(v.clone()).placeholder())
                    .collect();
                let op = if *negated { "NOT IN" } else { "IN" };
                format!("{column} {op} ({})", placeholders.join(", "))
            }
            Expr::Between {
                column,
                from,
                to,
                negated,
            } => {
                let from_ph = binds.add(from.clone()).placeholder();
                let to_ph = binds.add(to.clone()).placeholder();
                let op = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                format!("{column} {op} {from_ph} AND {to_ph}")
            }
            Expr::Raw(sql) => sql.clone(),
            Expr::True => "1=1".to_string(),
            Expr::False => "1=0".to_string(),
        }
    }
}

/// Join a group's members with `sep`, parenthesizing opposite-conjunction
/// children so operator precedence is preserved.
fn join_group(
    exprs: &[Expr],
    sep: &str,
    binds: &mut BindParamList,
    needs_parens: impl Fn(&Expr) -> bool,
) -> String {
    let parts: Vec<String> = exprs
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let sql = e.render(binds);
            if needs_parens(e) && !sql.is_empty() {
                format!("({sql})")
            } else {
                sql
            }
        })
        .filter(|s| !s.is_empty())
        .collect();
    parts.join(sep)
}

/// Incremental builder for WHERE clauses.
///
/// Members are joined with the group's conjunction (AND by default); embed
/// an [`Expr::or`] group for explicit OR branches.
#[derive(Clone, Debug, Default)]
pub struct ExprGroup {
    exprs: Vec<Expr>,
    any: bool,
}

impl ExprGroup {
    /// Create an empty AND-joined group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty OR-joined group.
    pub fn any() -> Self {
        Self {
            exprs: Vec::new(),
            any: true,
        }
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Add an arbitrary expression.
    pub fn push(&mut self, expr: Expr) {
        self.exprs.push(expr);
    }

    /// OR the expression with the most recently added condition, extending
    /// an existing OR branch in place. With an empty group this behaves
    /// like [`push`](Self::push).
    pub fn or_push(&mut self, expr: Expr) {
        match self.exprs.pop() {
            Some(Expr::Or(mut branches)) => {
                branches.push(expr);
                self.exprs.push(Expr::Or(branches));
            }
            Some(last) => self.exprs.push(Expr::or(vec![last, expr])),
            None => self.exprs.push(expr),
        }
    }

    /// Add `column op value` with an arbitrary operator.
    pub fn cmp(&mut self, column: &str, op: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::cmp(column, op, value));
    }

    /// Add `column = value`.
    pub fn eq(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::eq(column, value));
    }

    /// Add `column != value`.
    pub fn ne(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::ne(column, value));
    }

    /// Add `column > value`.
    pub fn gt(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::gt(column, value));
    }

    /// Add `column >= value`.
    pub fn gte(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::gte(column, value));
    }

    /// Add `column < value`.
    pub fn lt(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::lt(column, value));
    }

    /// Add `column <= value`.
    pub fn lte(&mut self, column: &str, value: impl Into<Value>) {
        self.exprs.push(Expr::lte(column, value));
    }

    /// Add `column LIKE pattern`.
    pub fn like(&mut self, column: &str, pattern: impl Into<Value>) {
        self.exprs.push(Expr::like(column, pattern));
    }

    /// Add `column IS NULL`.
    pub fn is_null(&mut self, column: &str) {
        self.exprs.push(Expr::is_null(column));
    }

    /// Add `column IS NOT NULL`.
    pub fn is_not_null(&mut self, column: &str) {
        self.exprs.push(Expr::is_not_null(column));
    }

    /// Add `column IN (values...)`.
    pub fn in_list<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) {
        self.exprs.push(Expr::in_list(column, values));
    }

    /// Add `column NOT IN (values...)`.
    pub fn not_in<V: Into<Value>>(&mut self, column: &str, values: Vec<V>) {
        self.exprs.push(Expr::not_in(column, values));
    }

    /// Add `column BETWEEN from AND to`.
    pub fn between<V: Into<Value>>(&mut self, column: &str, from: V, to: V) {
        self.exprs.push(Expr::between(column, from, to));
    }

    /// Add a raw SQL condition.
    pub fn raw(&mut self, sql: &str) {
        self.exprs.push(Expr::raw(sql));
    }

    /// Render the clause content (without the `WHERE` keyword), registering
    /// parameters into `binds`. Empty groups render to an empty string.
    pub fn render(&self, binds: &mut BindParamList) -> String {
        if self.exprs.is_empty() {
            return String::new();
        }
        let root = if self.any {
            Expr::Or(self.exprs.clone())
        } else {
            Expr::And(self.exprs.clone())
        };
        root.render(binds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::Value;

    #[test]
    fn test_simple_eq() {
        let expr = Expr::eq("name", "alice");
        let mut binds = BindParamList::new();
        assert_eq!(expr.render(&mut binds), "name = :_h_0");
        assert_eq!(binds.len(), 1);
    }

    #[test]
    fn test_nested_and_or() {
        let expr = Expr::and(vec![
            Expr::eq("status", "active"),
            Expr::or(vec![Expr::eq("role", "admin"), Expr::eq("role", "superuser")]),
        ]);
        let mut binds = BindParamList::new();
        assert_eq!(
            expr.render(&mut binds),
            "status = :_h_0 AND (role = :_h_1 OR role = :_h_2)"
        );
        assert_eq!(binds.len(), 3);
    }

    #[test]
    fn test_in_list() {
        let expr = Expr::in_list("id", vec![1i64, 2, 3]);
        let mut binds = BindParamList::new();
        assert_eq!(expr.render(&mut binds), "id IN (:_h_0, :_h_1, :_h_2)");
        let values: Vec<&Value> = binds.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![&Value::Int(1), &Value::Int(2), &Value::Int(3)]);
    }

    #[test]
    fn test_empty_in_lists_collapse() {
        let mut binds = BindParamList::new();
        assert_eq!(Expr::in_list::<i64>("id", vec![]).render(&mut binds), "1=0");
        assert_eq!(Expr::not_in::<i64>("id", vec![]).render(&mut binds), "1=1");
        assert!(binds.is_empty());
    }

    #[test]
    fn test_between() {
        let expr = Expr::between("age", 18i64, 65i64);
        let mut binds = BindParamList::new();
        assert_eq!(expr.render(&mut binds), "age BETWEEN :_h_0 AND :_h_1");
    }

    #[test]
    fn test_not() {
        let expr = Expr::not(Expr::eq("banned", true));
        let mut binds = BindParamList::new();
        assert_eq!(expr.render(&mut binds), "NOT (banned = :_h_0)");
    }

    #[test]
    fn test_null_checks_register_no_binds() {
        let mut binds = BindParamList::new();
        assert_eq!(Expr::is_null("deleted_at").render(&mut binds), "deleted_at IS NULL");
        assert_eq!(
            Expr::is_not_null("deleted_at").render(&mut binds),
            "deleted_at IS NOT NULL"
        );
        assert!(binds.is_empty());
    }

    #[test]
    fn test_or_push_extends_last_branch() {
        let mut group = ExprGroup::new();
        group.eq("status", "active");
        group.or_push(Expr::eq("role", "admin"));
        group.or_push(Expr::eq("role", "superuser"));
        let mut binds = BindParamList::new();
        assert_eq!(
            group.render(&mut binds),
            "(status = :_h_0 OR role = :_h_1 OR role = :_h_2)"
        );
        assert_eq!(binds.len(), 3);
    }

    #[test]
    fn test_or_push_on_empty_group() {
        let mut group = ExprGroup::new();
        group.or_push(Expr::eq("role", "admin"));
        let mut binds = BindParamList::new();
        assert_eq!(group.render(&mut binds), "role = :_h_0");
    }

    #[test]
    fn test_group_conjunction_choice() {
        let mut all = ExprGroup::new();
        all.eq("a", 1i64);
        all.eq("b", 2i64);
        let mut binds = BindParamList::new();
        assert_eq!(all.render(&mut binds), "a = :_h_0 AND b = :_h_1");

        let mut any = ExprGroup::any();
        any.eq("a", 1i64);
        any.eq("b", 2i64);
        binds.reset();
        assert_eq!(any.render(&mut binds), "a = :_h_0 OR b = :_h_1");
    }
}
