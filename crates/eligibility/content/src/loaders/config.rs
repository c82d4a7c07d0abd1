//! Engine configuration loader.

use std::env;
use std::path::Path;

use eligibility_core::{EngineConfig, EvaluationMode};

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults (standard mode, strict kinds, every
    /// restriction table).
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Apply process environment overrides.
    ///
    /// Environment variables:
    /// - `ELIGIBILITY_MODE` - `standard` or `experimental`
    /// - `ELIGIBILITY_STRICT_KINDS` - assert on uninitialised tables (debug builds)
    pub fn apply_env(config: EngineConfig) -> EngineConfig {
        Self::apply_overrides(config, |key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_overrides<F>(mut config: EngineConfig, lookup: F) -> EngineConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("ELIGIBILITY_MODE") {
            match raw.parse::<EvaluationMode>() {
                Ok(mode) => config.mode = mode,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid ELIGIBILITY_MODE"),
            }
        }
        if let Some(strict) = lookup("ELIGIBILITY_STRICT_KINDS").as_deref().and_then(parse_bool) {
            config.strict_kinds = strict;
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eligibility_core::RestrictionKind;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: EngineConfig = toml::from_str("mode = \"experimental\"").unwrap();

        assert_eq!(config.mode, EvaluationMode::Experimental);
        assert!(config.strict_kinds);
        assert_eq!(config.kinds, EngineConfig::new().kinds);
    }

    #[test]
    fn kinds_are_snake_case() {
        let config: EngineConfig =
            toml::from_str("kinds = [\"equipment\", \"apparel_whitelist\"]").unwrap();

        assert_eq!(
            config.kinds,
            vec![RestrictionKind::Equipment, RestrictionKind::ApparelWhitelist]
        );
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = ConfigLoader::apply_overrides(
            EngineConfig::new(),
            lookup(&[
                ("ELIGIBILITY_MODE", "Experimental"),
                ("ELIGIBILITY_STRICT_KINDS", "off"),
            ]),
        );

        assert_eq!(config.mode, EvaluationMode::Experimental);
        assert!(!config.strict_kinds);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config = ConfigLoader::apply_overrides(
            EngineConfig::experimental(),
            lookup(&[
                ("ELIGIBILITY_MODE", "chaotic"),
                ("ELIGIBILITY_STRICT_KINDS", "maybe"),
            ]),
        );

        assert_eq!(config, EngineConfig::experimental());
    }
}
