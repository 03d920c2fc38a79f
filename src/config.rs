use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level loadcast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadcastConfig {
    /// Model shape and interval settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Optimizer settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Synthetic data settings.
    #[serde(default)]
    pub synth: SynthToml,
}

impl LoadcastConfig {
    /// Reads a TOML file, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config TOML: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_order")]
    pub order: [usize; 3],
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    #[serde(default = "default_frequency_minutes")]
    pub frequency_minutes: i64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            order: default_order(),
            confidence_level: default_confidence_level(),
            frequency_minutes: default_frequency_minutes(),
        }
    }
}

fn default_order() -> [usize; 3] {
    [2, 1, 2]
}
fn default_confidence_level() -> f64 {
    0.95
}
fn default_frequency_minutes() -> i64 {
    60
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            max_iters: default_max_iters(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_max_iters() -> u64 {
    5_000
}
fn default_tolerance() -> f64 {
    1e-8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthToml {
    #[serde(default = "default_days")]
    pub days: usize,
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
    #[serde(default = "default_base_load")]
    pub base_load: f64,
    #[serde(default = "default_per_person_load")]
    pub per_person_load: f64,
    #[serde(default = "default_peak_bump")]
    pub peak_bump: f64,
    #[serde(default = "default_noise_sd")]
    pub noise_sd: f64,
    #[serde(default = "default_floor")]
    pub floor: f64,
}

impl Default for SynthToml {
    fn default() -> Self {
        Self {
            days: default_days(),
            seed: default_seed(),
            base_load: default_base_load(),
            per_person_load: default_per_person_load(),
            peak_bump: default_peak_bump(),
            noise_sd: default_noise_sd(),
            floor: default_floor(),
        }
    }
}

fn default_days() -> usize {
    30
}
fn default_seed() -> Option<u64> {
    Some(42)
}
fn default_base_load() -> f64 {
    2.0
}
fn default_per_person_load() -> f64 {
    0.05
}
fn default_peak_bump() -> f64 {
    1.5
}
fn default_noise_sd() -> f64 {
    0.2
}
fn default_floor() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: LoadcastConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.order, [2, 1, 2]);
        assert_eq!(config.model.confidence_level, 0.95);
        assert_eq!(config.model.frequency_minutes, 60);
        assert_eq!(config.fit.max_iters, 5_000);
        assert_eq!(config.synth.days, 30);
        assert_eq!(config.synth.seed, Some(42));
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: LoadcastConfig = toml::from_str(
            r#"
            [model]
            order = [1, 0, 1]

            [synth]
            days = 7
            noise_sd = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(config.model.order, [1, 0, 1]);
        assert_eq!(config.model.confidence_level, 0.95);
        assert_eq!(config.synth.days, 7);
        assert_eq!(config.synth.noise_sd, 0.1);
        assert_eq!(config.synth.base_load, 2.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<LoadcastConfig>("[model]\nseasonal = true\n").is_err());
        assert!(toml::from_str::<LoadcastConfig>("[plot]\n").is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        let config = LoadcastConfig::load(None).unwrap();
        assert_eq!(config.fit.tolerance, 1e-8);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadcast.toml");
        std::fs::write(&path, "[fit]\nmax_iters = 200\n").unwrap();
        let config = LoadcastConfig::load(Some(&path)).unwrap();
        assert_eq!(config.fit.max_iters, 200);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = LoadcastConfig::load(Some(Path::new("/tmp/loadcast-no-such.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("loadcast-no-such.toml"));
    }
}
