//! Driver normalization and capability matrix tests.

use super::{Capabilities, DriverInfo};

fn flags(caps: &Capabilities) -> [bool; 5] {
    [
        caps.has_lock(),
        caps.has_lock_and_skip(),
        caps.has_window_functions(),
        caps.has_json(),
        caps.has_strict_mode(),
    ]
}

#[test]
fn test_mariadb_compat_prefix_stripped() {
    let info = DriverInfo::from_connection("mysql", "5.5.5-10.5.13-MariaDB");
    assert_eq!(info.driver(), "mariadb");
    assert_eq!(info.version(), "10.5.13");
}

#[test]
fn test_mariadb_without_compat_prefix() {
    let info = DriverInfo::from_connection("mysql", "10.6.5-MariaDB");
    assert_eq!(info.driver(), "mariadb");
    assert_eq!(info.version(), "10.6.5");
}

#[test]
fn test_plain_mysql_untouched() {
    let info = DriverInfo::from_connection("mysql", "8.0.31");
    assert_eq!(info.driver(), "mysql");
    assert_eq!(info.version(), "8.0.31");
}

#[test]
fn test_vitess_compat_prefix_stripped() {
    let info = DriverInfo::from_connection("vitess", "5.5.5-8.0.0-vitess");
    assert_eq!(info.driver(), "vitess");
    assert_eq!(info.version(), "8.0.0");
}

#[test]
fn test_driver_id_is_lowercased() {
    let info = DriverInfo::from_connection("PgSQL", "15.2");
    assert_eq!(info.driver(), "pgsql");
    assert_eq!(info.version(), "15.2");
}

#[test]
fn test_unmatched_mariadb_version_kept_verbatim() {
    let info = DriverInfo::from_connection("mysql", "mariadb-nightly");
    assert_eq!(info.driver(), "mariadb");
    assert_eq!(info.version(), "mariadb-nightly");
}

#[test]
fn test_mysql_8_capabilities() {
    let caps = DriverInfo::new("mysql", "8.0.31").capabilities();
    assert_eq!(flags(&caps), [true, true, true, true, true]);
}

#[test]
fn test_mysql_5_capabilities() {
    let caps = DriverInfo::new("mysql", "5.7.44").capabilities();
    assert_eq!(flags(&caps), [true, false, false, true, true]);
}

#[test]
fn test_mariadb_10_6_capabilities() {
    let caps = DriverInfo::new("mariadb", "10.6.0").capabilities();
    assert_eq!(flags(&caps), [true, true, true, true, true]);
}

#[test]
fn test_mariadb_10_2_capabilities() {
    let caps = DriverInfo::new("mariadb", "10.2.0").capabilities();
    assert_eq!(flags(&caps), [true, false, true, true, true]);
}

#[test]
fn test_mariadb_10_1_has_no_window_functions() {
    let caps = DriverInfo::new("mariadb", "10.1.48").capabilities();
    assert!(!caps.has_window_functions());
}

#[test]
fn test_sqlite_capabilities() {
    let caps = DriverInfo::new("sqlite", "3.35.0").capabilities();
    assert_eq!(flags(&caps), [false, false, true, true, false]);

    let old = DriverInfo::new("sqlite", "3.8.0").capabilities();
    assert!(!old.has_window_functions());
}

#[test]
fn test_postgres_capabilities() {
    let caps = DriverInfo::new("pgsql", "15.2").capabilities();
    assert_eq!(flags(&caps), [true, true, true, true, true]);
}

#[test]
fn test_vitess_degrades_to_unknown() {
    let caps = DriverInfo::from_connection("vitess", "5.5.5-8.0.0-vitess").capabilities();
    assert!(matches!(caps, Capabilities::Unknown(_)));
    assert_eq!(flags(&caps), [false, false, false, false, false]);
}

#[test]
fn test_unrecognized_driver_is_not_an_error() {
    let caps = DriverInfo::from_connection("cockroach", "23.1.0").capabilities();
    assert_eq!(flags(&caps), [false, false, false, false, false]);
    assert_eq!(caps.driver_info().driver(), "cockroach");
}
