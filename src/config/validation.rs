//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (positive limits, positive windows)
//! - Reject custom policy names that shadow the built-in ones
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use thiserror::Error;

use crate::config::schema::{GuardConfig, RatePolicy};

/// A single semantic violation in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rate limit policy '{name}': max_requests must be positive")]
    ZeroMaxRequests { name: String },

    #[error("rate limit policy '{name}': window_ms must be positive")]
    ZeroWindow { name: String },

    #[error("custom rate limit policy name must not be empty")]
    EmptyPolicyName,

    #[error("custom rate limit policy '{name}' shadows a built-in policy")]
    ReservedPolicyName { name: String },

    #[error("sanitizer max_length must be positive")]
    ZeroMaxLength,
}

/// Check every semantic rule, accumulating all violations.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_policy("login", &config.rate_limits.login, &mut errors);
    check_policy("register", &config.rate_limits.register, &mut errors);

    for (name, policy) in &config.rate_limits.custom {
        if name.is_empty() {
            errors.push(ValidationError::EmptyPolicyName);
        } else if name == "login" || name == "register" {
            errors.push(ValidationError::ReservedPolicyName { name: name.clone() });
        }
        check_policy(name, policy, &mut errors);
    }

    if config.sanitizer.max_length == 0 {
        errors.push(ValidationError::ZeroMaxLength);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_policy(name: &str, policy: &RatePolicy, errors: &mut Vec<ValidationError>) {
    if policy.max_requests == 0 {
        errors.push(ValidationError::ZeroMaxRequests {
            name: name.to_string(),
        });
    }
    if policy.window_ms == 0 {
        errors.push(ValidationError::ZeroWindow {
            name: name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GuardConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let mut config = GuardConfig::default();
        config.rate_limits.login.max_requests = 0;
        config.rate_limits.register.window_ms = 0;
        config.sanitizer.max_length = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroMaxRequests {
            name: "login".to_string()
        }));
        assert!(errors.contains(&ValidationError::ZeroWindow {
            name: "register".to_string()
        }));
        assert!(errors.contains(&ValidationError::ZeroMaxLength));
    }

    #[test]
    fn test_reserved_custom_name_rejected() {
        let mut config = GuardConfig::default();
        config
            .rate_limits
            .custom
            .insert("login".to_string(), RatePolicy::default());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::ReservedPolicyName {
                name: "login".to_string()
            }]
        );
    }

    #[test]
    fn test_custom_policy_values_checked() {
        let mut config = GuardConfig::default();
        config.rate_limits.custom.insert(
            "checkout".to_string(),
            RatePolicy {
                max_requests: 0,
                window_ms: 0,
            },
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
