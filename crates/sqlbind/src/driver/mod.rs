//! Driver identification and capability detection.
//!
//! [`DriverInfo`] normalizes the raw (driver id, server version) pair a
//! connection reports into a canonical engine family and a clean version,
//! and [`DriverInfo::capabilities`] selects the matching [`Capabilities`]
//! variant. Unrecognized engines degrade to the conservative all-false set
//! instead of failing.

mod capabilities;
pub(crate) mod version;

pub use capabilities::Capabilities;

use std::sync::LazyLock;

use regex::Regex;

/// Strips the MySQL-compatibility prefix MariaDB and Vitess report in their
/// version strings, e.g. `5.5.5-10.5.13-MariaDB` -> `10.5.13`.
static COMPAT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:5\.5\.5-)?(\d+\.\d+\.\d+).*$").expect("compat version pattern is valid")
});

/// Canonical (driver family, version) pair for a connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverInfo {
    driver: String,
    version: String,
}

impl DriverInfo {
    /// Create from an already-canonical driver name and version.
    pub fn new(driver: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            version: version.into(),
        }
    }

    /// Normalize the raw driver id and server version a connection reports.
    ///
    /// MariaDB and Vitess identify themselves through markers in the driver
    /// id or the version string rather than a dedicated driver id, and both
    /// prepend a `5.5.5-` MySQL-compatibility version prefix that is
    /// stripped here. Other drivers keep their version verbatim.
    pub fn from_connection(raw_driver: &str, raw_version: &str) -> Self {
        let driver_id = raw_driver.to_lowercase();
        let marker = format!("{driver_id} {}", raw_version.to_lowercase());
        let driver = if marker.contains("mariadb") {
            "mariadb".to_string()
        } else if marker.contains("vitess") {
            "vitess".to_string()
        } else {
            driver_id
        };
        let version = if driver == "mariadb" || driver == "vitess" {
            match COMPAT_VERSION.captures(raw_version) {
                Some(caps) => caps[1].to_string(),
                None => raw_version.to_string(),
            }
        } else {
            raw_version.to_string()
        };
        Self { driver, version }
    }

    /// Canonical driver family name.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Normalized server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Select the capability set for this driver.
    ///
    /// Anything unrecognized (vitess deliberately included, it advertises
    /// MySQL compatibility it does not fully deliver) yields the
    /// conservative [`Capabilities::Unknown`] variant.
    pub fn capabilities(self) -> Capabilities {
        match self.driver.as_str() {
            "mysql" => Capabilities::MySql(self),
            "mariadb" => Capabilities::MariaDb(self),
            "sqlite" => Capabilities::Sqlite(self),
            "pgsql" | "postgres" | "postgresql" => Capabilities::Postgres(self),
            _ => Capabilities::Unknown(self),
        }
    }
}

#[cfg(test)]
mod tests;
