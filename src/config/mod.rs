//! Configuration structures and loading utilities.
//!
//! Every concern has its own struct with a `Default` and a `from_env()`
//! constructor. Missing or unparsable variables fall back to the default
//! value, so a bare environment always yields a usable development setup.

pub mod app;
pub mod auth;
pub mod database;
pub mod rate_limit;
pub mod routing;
pub mod security;
pub mod server;

pub use app::*;
pub use auth::*;
pub use database::*;
pub use rate_limit::*;
pub use routing::*;
pub use security::*;
pub use server::*;

use std::{env, str::FromStr};

/// Read and parse an environment variable, returning `None` when it is unset
/// or does not parse.
pub(crate) fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read a boolean flag; only a case-insensitive `"true"` counts as set.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

/// Split a comma separated list, dropping empty items.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_drops_blanks() {
        assert_eq!(
            split_list(" http://a:3000, ,http://b:3000,"),
            vec!["http://a:3000".to_string(), "http://b:3000".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
