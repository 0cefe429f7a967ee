mod support;

use std::fs;
use std::path::PathBuf;

use bikeshare_dashboard::config::{DashboardConfig, CONFIG_ENV};
use bikeshare_dashboard::DashboardError;
use support::with_scoped_env;

fn clear_overrides<'a>() -> Vec<(&'a str, Option<&'a str>)> {
    vec![
        ("HOST", None),
        ("PORT", None),
        ("DASHBOARD_DAILY_CSV", None),
        ("DASHBOARD_HOURLY_CSV", None),
        ("DASHBOARD_LOGO", None),
    ]
}

#[test]
fn test_env_overrides_replace_file_values() {
    let mut changes = clear_overrides();
    changes.extend([
        ("PORT", Some("9100")),
        ("DASHBOARD_DAILY_CSV", Some("/data/day.csv")),
    ]);

    let config = with_scoped_env(&changes, || {
        DashboardConfig::default().apply_env_overrides().unwrap()
    });

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.data.daily_csv, PathBuf::from("/data/day.csv"));
    assert_eq!(config.data.hourly_csv, PathBuf::from("dashboard/hour_clean.csv"));
}

#[test]
fn test_invalid_port_is_configuration_error() {
    let mut changes = clear_overrides();
    changes.push(("PORT", Some("not-a-port")));

    let result = with_scoped_env(&changes, || DashboardConfig::default().apply_env_overrides());
    assert!(matches!(result, Err(DashboardError::Configuration(_))));
}

#[test]
fn test_load_reads_explicit_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 7000\n").unwrap();
    let path_str = path.to_string_lossy().to_string();

    let mut changes = clear_overrides();
    changes.push((CONFIG_ENV, Some(path_str.as_str())));

    let config = with_scoped_env(&changes, DashboardConfig::load).unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:7000");
}

#[test]
fn test_load_fails_on_missing_explicit_file() {
    let mut changes = clear_overrides();
    changes.push((CONFIG_ENV, Some("/nonexistent/dashboard.toml")));

    let result = with_scoped_env(&changes, DashboardConfig::load);
    assert!(matches!(result, Err(DashboardError::Configuration(_))));
}
