//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// Bare `$VAR` is left alone, so titles containing a dollar sign survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.name),
    })
}

/// Lookup failure for an unset variable.
struct UnsetVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_host_from_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LECTERN_TEST_HOST", "0.0.0.0");
        }
        let result = expand_env("${LECTERN_TEST_HOST}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
        unsafe {
            std::env::remove_var("LECTERN_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_TEST_UNSET");
        }
        let result = expand_env("${LECTERN_TEST_UNSET:-127.0.0.1}", "server.host").unwrap();
        assert_eq!(result, "127.0.0.1");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_TEST_MISSING");
        }
        let err = expand_env("${LECTERN_TEST_MISSING}", "site.title").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LECTERN_TEST_MISSING"));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LECTERN_TEST_EDITION", "KJV");
        }
        let result = expand_env("Commentary (${LECTERN_TEST_EDITION})", "site.title").unwrap();
        assert_eq!(result, "Commentary (KJV)");
        unsafe {
            std::env::remove_var("LECTERN_TEST_EDITION");
        }
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("Lectern", "site.title").unwrap(), "Lectern");
        assert_eq!(expand_env("$5 notes", "site.title").unwrap(), "$5 notes");
    }
}
