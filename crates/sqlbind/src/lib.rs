//! # sqlbind
//!
//! A parameterized SQL statement builder with driver-capability-aware
//! generation.
//!
//! ## Features
//!
//! - **Bind registry**: insertion-ordered bind parameters with collision-free
//!   auto names (`_h_0`, `_h_1`, ...) and inferred wire-level data types
//! - **Driver capabilities**: one capability set per engine family
//!   (MySQL/MariaDB/SQLite/PostgreSQL) with a conservative fallback for
//!   anything unrecognized
//! - **Composable fragments**: SELECT/INSERT/UPDATE/DELETE/EXISTS render into
//!   a shared bind list, so names stay unique across nested statements
//!
//! The output of a build is a `(sql, binds)` pair using `:name` placeholders,
//! ready for any prepared-statement execution layer:
//!
//! ```
//! use sqlbind::stmt::{self, Statement};
//!
//! let (sql, binds) = stmt::update("users")
//!     .assign("status", "inactive")
//!     .eq("id", 7i64)
//!     .build()
//!     .expect("statement has a table and assignments");
//! assert_eq!(sql, "UPDATE users SET status = :_h_0 WHERE id = :_h_1");
//! assert_eq!(binds.len(), 2);
//! ```
//!
//! Capability checks let higher-level query builders branch on dialect SQL:
//!
//! ```
//! use sqlbind::DriverInfo;
//!
//! let caps = DriverInfo::from_connection("mysql", "5.5.5-10.6.5-MariaDB").capabilities();
//! assert!(caps.has_lock_and_skip());
//! ```

pub mod bind;
pub mod driver;
pub mod error;
pub mod stmt;

pub use bind::{BindName, BindParam, BindParamList, DataType, Value};
pub use driver::{Capabilities, DriverInfo};
pub use error::{BuildError, BuildResult};
pub use stmt::{
    Delete, Exists, Expr, ExprGroup, Insert, Select, Statement, Update, delete_from, insert_into,
    select, select_from, update,
};
