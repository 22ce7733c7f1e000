/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::str::FromStr;
use mpl2srt::app_config::{Config, LineEnding, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.line_ending, LineEnding::Native);
    assert_eq!(config.log_level, LogLevel::Warn);
}

/// Native resolves to the platform separator
#[test]
fn test_line_ending_resolve_withNative_shouldFollowPlatform() {
    let expected: &[u8] = if cfg!(windows) { b"\r\n" } else { b"\n" };
    assert_eq!(LineEnding::Native.as_bytes(), expected);
    assert_eq!(LineEnding::Lf.as_bytes(), b"\n");
    assert_eq!(LineEnding::CrLf.as_bytes(), b"\r\n");
    assert_ne!(LineEnding::Native.resolve(), LineEnding::Native);
}

#[test]
fn test_line_ending_fromStr_withAliases_shouldParse() {
    assert_eq!(LineEnding::from_str("LF").unwrap(), LineEnding::Lf);
    assert_eq!(LineEnding::from_str("dos").unwrap(), LineEnding::CrLf);
    assert_eq!(LineEnding::from_str("native").unwrap(), LineEnding::Native);
    assert!(LineEnding::from_str("cr").is_err());
    assert_eq!(LineEnding::CrLf.to_string(), "crlf");
}

/// Partial files fall back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"line_ending": "crlf"}"#)?;
    assert_eq!(config.line_ending, LineEnding::CrLf);
    assert_eq!(config.log_level, LogLevel::Warn);

    let config: Config = serde_json::from_str("{}")?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Test saving and loading a configuration file
#[test]
fn test_config_saveAndLoad_withTempFile_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config {
        line_ending: LineEnding::Lf,
        log_level: LogLevel::Debug,
    };
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_config_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "bad.json", b"{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Config error"));
    Ok(())
}

#[test]
fn test_log_level_into_levelFilter_shouldMapOneToOne() {
    assert_eq!(log::LevelFilter::from(LogLevel::Error), log::LevelFilter::Error);
    assert_eq!(log::LevelFilter::from(LogLevel::Trace), log::LevelFilter::Trace);
}
