//! Configuration validation.
//!
//! Validates every config field before an analysis runs. Missing keys are
//! fine wherever a default exists; present keys must be well formed.

use crate::domain::draw::parse_draw_date;
use crate::domain::error::RuotaError;
use crate::domain::suggester::{MAX_PLAY_COUNT, MIN_PLAY_COUNT};
use crate::domain::wheel::Wheel;
use crate::ports::config_port::ConfigPort;

pub const REPORT_FORMATS: [&str; 2] = ["markdown", "csv"];

/// Upper bound for `[scoring] recent_window_days` (about a century).
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    validate_analysis_config(config)?;
    validate_scoring_config(config)?;
    validate_report_config(config)?;
    Ok(())
}

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    validate_wheel(config)?;
    validate_date(config, "date")?;
    validate_date(config, "as_of")?;
    validate_count(config)?;
    validate_skip_rows(config)?;
    Ok(())
}

pub fn validate_scoring_config(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    for key in ["frequency_weight", "delay_weight", "repetition_weight"] {
        validate_weight(config, key)?;
    }
    validate_positive_int(config, "recent_window_days")?;
    validate_positive_int(config, "recent_draws")?;
    if config.get_int("scoring", "recent_window_days", 0) > MAX_RECENT_WINDOW_DAYS {
        return Err(invalid(
            "scoring",
            "recent_window_days",
            format!("recent_window_days must be at most {}", MAX_RECENT_WINDOW_DAYS),
        ));
    }
    Ok(())
}

pub fn validate_report_config(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    match config.get_non_empty("report", "format") {
        Some(format) if !REPORT_FORMATS.contains(&format.trim().to_lowercase().as_str()) => {
            Err(invalid(
                "report",
                "format",
                format!("unknown format '{}', expected markdown or csv", format.trim()),
            ))
        }
        _ => Ok(()),
    }
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> RuotaError {
    RuotaError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn validate_wheel(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    match config.get_non_empty("analysis", "wheel") {
        Some(name) => name
            .parse::<Wheel>()
            .map(|_| ())
            .map_err(|_| invalid("analysis", "wheel", format!("unknown wheel '{}'", name))),
        None => Ok(()),
    }
}

fn validate_date(config: &dyn ConfigPort, key: &str) -> Result<(), RuotaError> {
    match config.get_non_empty("analysis", key) {
        Some(value) if parse_draw_date(&value).is_none() => Err(invalid(
            "analysis",
            key,
            format!("invalid {} format, expected YYYY-MM-DD", key),
        )),
        _ => Ok(()),
    }
}

fn validate_count(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    if config.get_non_empty("analysis", "count").is_none() {
        return Ok(());
    }
    let count = config.get_int("analysis", "count", -1);
    if count < MIN_PLAY_COUNT as i64 || count > MAX_PLAY_COUNT as i64 {
        return Err(invalid(
            "analysis",
            "count",
            format!("count must be between {} and {}", MIN_PLAY_COUNT, MAX_PLAY_COUNT),
        ));
    }
    Ok(())
}

fn validate_skip_rows(config: &dyn ConfigPort) -> Result<(), RuotaError> {
    if config.get_non_empty("analysis", "skip_rows").is_none() {
        return Ok(());
    }
    if config.get_int("analysis", "skip_rows", -1) < 0 {
        return Err(invalid(
            "analysis",
            "skip_rows",
            "skip_rows must be a non-negative integer",
        ));
    }
    Ok(())
}

fn validate_weight(config: &dyn ConfigPort, key: &str) -> Result<(), RuotaError> {
    if config.get_non_empty("scoring", key).is_none() {
        return Ok(());
    }
    let value = config.get_double("scoring", key, f64::NAN);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            "scoring",
            key,
            format!("{} must be a non-negative number", key),
        ));
    }
    Ok(())
}

fn validate_positive_int(config: &dyn ConfigPort, key: &str) -> Result<(), RuotaError> {
    if config.get_non_empty("scoring", key).is_none() {
        return Ok(());
    }
    if config.get_int("scoring", key, 0) <= 0 {
        return Err(invalid(
            "scoring",
            key,
            format!("{} must be a positive integer", key),
        ));
    }
    Ok(())
}
