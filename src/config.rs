use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level tyche configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TycheConfig {
    /// Settings for the `expect` subcommand.
    #[serde(default)]
    pub expect: ExpectToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectToml {
    pub alphabet_size: Option<u16>,
    pub pattern_length: Option<usize>,
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<TycheConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let cfg: TycheConfig = toml::from_str(
            r#"
            [expect]
            alphabet_size = 3
            pattern_length = 2
            "#,
        )
        .unwrap();
        assert_eq!(cfg.expect.alphabet_size, Some(3));
        assert_eq!(cfg.expect.pattern_length, Some(2));
    }

    #[test]
    fn parse_empty_config() {
        let cfg: TycheConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.expect.alphabet_size, None);
        assert_eq!(cfg.expect.pattern_length, None);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<TycheConfig, _> = toml::from_str("[expect]\nalphabet = 2\n");
        assert!(result.is_err());
    }
}
