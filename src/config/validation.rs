// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! All checks run and every problem is reported, so a broken file is fixed
//! in one round trip.

use crate::config::Config;
use crate::processor::FileIdProperty;

/// Validate a loaded configuration, returning one message per problem.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(e) = FileIdProperty::parse(&cfg.file_id) {
        errors.push(format!("file_id: {}", e));
    }

    if let Some(prefix) = &cfg.attribute_prefix {
        if let Err(e) = validate_prefix(prefix) {
            errors.push(format!("attribute_prefix: {}", e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check an attribute prefix. Empty is allowed and means no prefix.
pub fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix.is_empty() {
        return Ok(());
    }
    if prefix.starts_with('.') || prefix.ends_with('.') {
        return Err(format!("'{}' must not start or end with '.'", prefix));
    }
    if prefix.contains("..") {
        return Err(format!("'{}' must not contain empty segments", prefix));
    }
    if prefix.chars().any(char::is_whitespace) {
        return Err(format!("'{}' must not contain whitespace", prefix));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(file_id: &str, prefix: Option<&str>) -> Config {
        Config {
            file_id: file_id.to_string(),
            attribute_prefix: prefix.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn test_valid_configs() {
        assert!(validate_config(&Config::default()).is_ok());
        assert!(validate_config(&config("12345", Some("box.collaborations"))).is_ok());
        assert!(validate_config(&config("${box.id}", Some(""))).is_ok());
    }

    #[test]
    fn test_empty_file_id() {
        let errors = validate_config(&config("", None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("file_id:"));
    }

    #[test]
    fn test_bad_prefixes() {
        for prefix in [".box", "box.", "box..collab", "box collab"] {
            let errors = validate_config(&config("1", Some(prefix))).unwrap_err();
            assert!(errors[0].starts_with("attribute_prefix:"), "{}", prefix);
        }
    }

    #[test]
    fn test_reports_every_problem() {
        let errors = validate_config(&config("${}", Some("box."))).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
