//! Config schema and the validated rule options built from it.

use serde::Deserialize;
use std::collections::HashSet;

/// Default assertion limit, also the fallback for invalid configured values
pub const DEFAULT_ASSERTS_LIMIT: usize = 3;

/// Default test-file suffix patterns
pub const DEFAULT_TEST_PATTERNS: &[&str] = &[
    ".test.js",
    ".test.jsx",
    ".test.ts",
    ".test.tsx",
    ".spec.js",
    ".spec.jsx",
    ".spec.ts",
    ".spec.tsx",
];

/// Root config structure for .assertlintrc.json. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Maximum allowed assertions per test (default 3; values < 1 fall back)
    #[serde(default)]
    pub asserts_limit: Option<i64>,

    /// Exempt syntactically skipped tests from both policies (default false)
    #[serde(default)]
    pub skip_skipped: Option<bool>,

    /// Exempt tests that declare a completion-callback parameter from the
    /// zero-assertions policy (default true)
    #[serde(default)]
    pub ignore_zero_assertions_if_done_exists: Option<bool>,

    /// Calling-context names exempt from the zero-assertions policy
    #[serde(default)]
    pub ignore_zero_assertions_for: Option<Vec<String>>,

    /// Glob patterns for files to skip entirely
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Test file suffix patterns (default: .test/.spec with js/jsx/ts/tsx)
    #[serde(default)]
    pub test_patterns: Option<Vec<String>>,
}

impl Config {
    /// Test file suffixes to match, from config or the defaults.
    pub fn get_test_patterns(&self) -> Vec<&str> {
        match self.test_patterns {
            Some(ref patterns) => patterns.iter().map(String::as_str).collect(),
            None => DEFAULT_TEST_PATTERNS.to_vec(),
        }
    }

    /// Apply a CLI limit override on top of the config file value.
    pub fn merge_with_cli(mut self, limit: Option<i64>) -> Self {
        if limit.is_some() {
            self.asserts_limit = limit;
        }
        self
    }
}

/// Validated rule options, defaulted once at construction. The engine reads
/// these fields directly during the walk; nothing is probed ad hoc.
#[derive(Debug, Clone)]
pub struct RuleOptions {
    /// Maximum allowed assertions per test, always >= 1
    pub asserts_limit: usize,
    /// Exempt syntactically skipped tests
    pub skip_skipped: bool,
    /// Exempt tests with a completion-callback parameter from the
    /// zero-assertions policy
    pub ignore_zero_assertions_if_done_exists: bool,
    /// Calling-context names exempt from the zero-assertions policy;
    /// `None` when the exemption is disabled
    pub exempt_callers: Option<HashSet<String>>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            asserts_limit: DEFAULT_ASSERTS_LIMIT,
            skip_skipped: false,
            ignore_zero_assertions_if_done_exists: true,
            exempt_callers: None,
        }
    }
}

impl From<&Config> for RuleOptions {
    fn from(config: &Config) -> Self {
        let asserts_limit = match config.asserts_limit {
            Some(v) if v >= 1 => v as usize,
            // 0 or negative limits fall back to the default, never error
            _ => DEFAULT_ASSERTS_LIMIT,
        };
        Self {
            asserts_limit,
            skip_skipped: config.skip_skipped.unwrap_or(false),
            ignore_zero_assertions_if_done_exists: config
                .ignore_zero_assertions_if_done_exists
                .unwrap_or(true),
            exempt_callers: config
                .ignore_zero_assertions_for
                .as_ref()
                .map(|names| names.iter().cloned().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_config_empty() {
        let options = RuleOptions::from(&Config::default());
        assert_eq!(options.asserts_limit, 3);
        assert!(!options.skip_skipped);
        assert!(options.ignore_zero_assertions_if_done_exists);
        assert!(options.exempt_callers.is_none());
    }

    #[test]
    fn invalid_limit_falls_back_to_default() {
        for raw in [Some(0), Some(-5), None] {
            let config = Config {
                asserts_limit: raw,
                ..Default::default()
            };
            assert_eq!(RuleOptions::from(&config).asserts_limit, 3);
        }
    }

    #[test]
    fn valid_limit_is_kept() {
        let config = Config {
            asserts_limit: Some(1),
            ..Default::default()
        };
        assert_eq!(RuleOptions::from(&config).asserts_limit, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{ "assertsLimit": 2, "bogus": true }"#);
        assert!(result.is_err());
    }

    #[test]
    fn camel_case_keys_deserialize() {
        let config: Config = serde_json::from_str(
            r#"{
                "assertsLimit": 5,
                "skipSkipped": true,
                "ignoreZeroAssertionsIfDoneExists": false,
                "ignoreZeroAssertionsFor": ["retryable"]
            }"#,
        )
        .unwrap();
        let options = RuleOptions::from(&config);
        assert_eq!(options.asserts_limit, 5);
        assert!(options.skip_skipped);
        assert!(!options.ignore_zero_assertions_if_done_exists);
        assert!(options.exempt_callers.unwrap().contains("retryable"));
    }
}
