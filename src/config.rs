//! Mask configuration from the environment.
//!
//! Command-line flags are applied on top of this by the binary.

use anyhow::{Context, Result};

use crate::formatter::MaskFormatter;
use crate::placeholder::CaseRule;

pub const PATTERN_VAR: &str = "MASK_PATTERN";
pub const PREFIX_VAR: &str = "MASK_PREFIX";
pub const CASE_VAR: &str = "MASK_CASE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaskConfig {
    pub pattern: String,
    pub prefix: String,
    pub case_rule: CaseRule,
}

impl MaskConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Missing keys fall back to
    /// the defaults: no pattern, no prefix, case folding.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let pattern = lookup(PATTERN_VAR).unwrap_or_default();
        let prefix = lookup(PREFIX_VAR).unwrap_or_default();
        let case_rule = match lookup(CASE_VAR) {
            Some(value) => value
                .parse::<CaseRule>()
                .with_context(|| format!("Invalid {}", CASE_VAR))?,
            None => CaseRule::default(),
        };

        Ok(Self {
            pattern,
            prefix,
            case_rule,
        })
    }

    pub fn formatter(&self) -> MaskFormatter {
        MaskFormatter::new(&self.pattern)
            .with_prefix(&self.prefix)
            .with_case_rule(self.case_rule)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MaskConfig::from_lookup(lookup_in(&[])).unwrap();
        assert_eq!(config, MaskConfig::default());
        assert!(!config.formatter().is_enabled());
    }

    #[test]
    fn test_all_vars() {
        let config = MaskConfig::from_lookup(lookup_in(&[
            (PATTERN_VAR, "#####-####"),
            (PREFIX_VAR, "+55 "),
            (CASE_VAR, "strict"),
        ]))
        .unwrap();
        assert_eq!(config.pattern, "#####-####");
        assert_eq!(config.prefix, "+55 ");
        assert_eq!(config.case_rule, CaseRule::Strict);
        assert_eq!(config.formatter().format("0123456789"), "+55 01234-5678");
    }

    #[test]
    fn test_bad_case_rule() {
        let err = MaskConfig::from_lookup(lookup_in(&[(CASE_VAR, "shout")])).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains(CASE_VAR), "{msg}");
        assert!(msg.contains("shout"), "{msg}");
    }
}
