//! Environment variable helpers.
//!
//! ```ignore
//! use errval::env::{env_get_bool, env_get_opt};
//!
//! let table: Option<PathBuf> = env_get_opt("ERRVAL_CODE_TABLE");
//! let flush = env_get_bool("ERRVAL_FLUSH_LOG", false);
//! ```

use std::str::FromStr;

/// Get an environment variable parsed as `T`.
///
/// Returns `None` if the variable is unset, empty or fails to parse.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

/// Get an environment variable as boolean.
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_env_get_opt_none() {
        let val: Option<usize> = env_get_opt("__ERRVAL_TEST_UNSET__");
        assert!(val.is_none());
    }

    #[test]
    fn test_env_get_opt_parses() {
        std::env::set_var("__ERRVAL_TEST_PATH__", "/tmp/codes.tbl");
        let val: Option<PathBuf> = env_get_opt("__ERRVAL_TEST_PATH__");
        assert_eq!(val, Some(PathBuf::from("/tmp/codes.tbl")));

        std::env::set_var("__ERRVAL_TEST_PATH__", "");
        let val: Option<PathBuf> = env_get_opt("__ERRVAL_TEST_PATH__");
        assert!(val.is_none());
        std::env::remove_var("__ERRVAL_TEST_PATH__");
    }

    #[test]
    fn test_env_get_opt_invalid_parse() {
        std::env::set_var("__ERRVAL_TEST_NUM__", "not_a_number");
        let val: Option<u32> = env_get_opt("__ERRVAL_TEST_NUM__");
        assert!(val.is_none());
        std::env::remove_var("__ERRVAL_TEST_NUM__");
    }

    #[test]
    fn test_env_get_bool_variants() {
        assert!(env_get_bool("__ERRVAL_TEST_UNSET__", true));
        assert!(!env_get_bool("__ERRVAL_TEST_UNSET__", false));

        for yes in ["1", "true", "TRUE", "yes", "on"] {
            std::env::set_var("__ERRVAL_TEST_BOOL__", yes);
            assert!(env_get_bool("__ERRVAL_TEST_BOOL__", false), "{}", yes);
        }
        for no in ["0", "false", "garbage"] {
            std::env::set_var("__ERRVAL_TEST_BOOL__", no);
            assert!(!env_get_bool("__ERRVAL_TEST_BOOL__", true), "{}", no);
        }
        std::env::remove_var("__ERRVAL_TEST_BOOL__");
    }
}
