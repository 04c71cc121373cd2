//! Per-engine capability sets.

use super::DriverInfo;
use super::version;

/// Capability set for an engine family, selected by
/// [`DriverInfo::capabilities`].
///
/// Each variant is a pure function of its backing (driver, version) pair.
/// Adding an engine means adding one variant and its gate rows; callers only
/// ever see the five boolean queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capabilities {
    /// Oracle MySQL
    MySql(DriverInfo),
    /// MariaDB (reports itself behind a MySQL-compatibility version)
    MariaDb(DriverInfo),
    /// SQLite
    Sqlite(DriverInfo),
    /// PostgreSQL
    Postgres(DriverInfo),
    /// Conservative fallback: every capability is off
    Unknown(DriverInfo),
}

impl Capabilities {
    /// The backing driver info.
    pub fn driver_info(&self) -> &DriverInfo {
        match self {
            Self::MySql(info)
            | Self::MariaDb(info)
            | Self::Sqlite(info)
            | Self::Postgres(info)
            | Self::Unknown(info) => info,
        }
    }

    /// Row-level lock clauses (`SELECT .. FOR UPDATE`).
    pub fn has_lock(&self) -> bool {
        match self {
            Self::MySql(_) | Self::MariaDb(_) | Self::Postgres(_) => true,
            Self::Sqlite(_) | Self::Unknown(_) => false,
        }
    }

    /// `FOR UPDATE SKIP LOCKED`. MySQL gained it in 8.0, MariaDB in 10.6.
    pub fn has_lock_and_skip(&self) -> bool {
        match self {
            Self::MySql(info) => version::at_least(info.version(), "8.0.0"),
            Self::MariaDb(info) => version::at_least(info.version(), "10.6.0"),
            Self::Postgres(_) => true,
            Self::Sqlite(_) | Self::Unknown(_) => false,
        }
    }

    /// Window functions. MySQL 8.0, MariaDB 10.2, SQLite 3.25.
    pub fn has_window_functions(&self) -> bool {
        match self {
            Self::MySql(info) => version::at_least(info.version(), "8.0.0"),
            Self::MariaDb(info) => version::at_least(info.version(), "10.2.0"),
            Self::Sqlite(info) => version::at_least(info.version(), "3.25.0"),
            Self::Postgres(_) => true,
            Self::Unknown(_) => false,
        }
    }

    /// Native JSON functions.
    pub fn has_json(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Strict SQL mode (rejecting instead of coercing invalid data).
    pub fn has_strict_mode(&self) -> bool {
        matches!(self, Self::MySql(_) | Self::MariaDb(_) | Self::Postgres(_))
    }
}
