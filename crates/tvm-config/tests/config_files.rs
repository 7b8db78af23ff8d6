//! Loading engine configuration from files.

use std::io::Write;

use tempfile::NamedTempFile;

use tvm_config::{ConfigError, EngineConfig};
use tvm_core::{CompoundingBasis, DayBasis, TimeUnit};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_file_with_overrides() {
    let file = write_config(
        r#"
        [yield_solver]
        tolerance = 1e-7

        [rate_solver]
        lower_pct = 1.0
        upper_pct = 31.0

        [periods]
        daily_basis = 360
        "#,
    );

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(config.yield_solver.tolerance, 1e-7);
    assert_eq!(config.yield_solver.max_iterations, 200);
    assert_eq!(config.periods.day_basis().unwrap(), DayBasis::Days360);

    let i = config
        .annuities()
        .unwrap()
        .implied_rate_from_pv(
            24000.0,
            500.0,
            CompoundingBasis::Monthly,
            60.0,
            TimeUnit::Months,
            config.rate_solver.bracket(),
        )
        .unwrap();
    assert!((i * 100.0 - 0.7628634).abs() < 1e-5);
}

#[test]
fn written_file_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tvm.toml");

    let mut config = EngineConfig::default();
    config.periods.daily_basis = 360;
    config.write_to_file(&path).unwrap();

    assert_eq!(EngineConfig::from_file(&path).unwrap(), config);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn invalid_file_is_rejected() {
    let file = write_config("[rate_solver]\nlower_pct = 10.0\nupper_pct = 5.0\n");
    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation { ref field, .. } if field == "rate_solver.upper_pct"
    ));
}

#[test]
fn shipped_sample_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/tvm.toml");
    let config = EngineConfig::from_file(path).unwrap();
    assert_eq!(config, EngineConfig::default());
}
