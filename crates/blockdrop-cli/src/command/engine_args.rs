use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use blockdrop_engine::EngineConfig;

/// Engine settings shared by every mode.
///
/// Values given on the command line override the config file.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EngineArgs {
    /// JSON file with engine settings
    #[clap(long)]
    pub(crate) config: Option<PathBuf>,
    /// Milliseconds between automatic drops
    #[clap(long)]
    pub(crate) drop_interval_ms: Option<u64>,
    /// Seed for piece selection (random if omitted)
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

impl EngineArgs {
    pub(crate) fn resolve(&self) -> anyhow::Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => read_config_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(millis) = self.drop_interval_ms {
            config.drop_interval = Duration::from_millis(millis);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate().context("invalid engine configuration")?;
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> anyhow::Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = EngineArgs::default().resolve().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_command_line_overrides() {
        let args = EngineArgs {
            config: None,
            drop_interval_ms: Some(250),
            seed: Some(5),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.drop_interval, Duration::from_millis(250));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let args = EngineArgs {
            drop_interval_ms: Some(0),
            ..EngineArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert_eq!(err.to_string(), "invalid engine configuration");
    }

    #[test]
    fn test_config_file_with_override() {
        let path = std::env::temp_dir().join(format!("blockdrop-{}.json", std::process::id()));
        fs::write(&path, r#"{ "drop_interval_ms": 900, "seed": 1 }"#).unwrap();
        let args = EngineArgs {
            config: Some(path.clone()),
            seed: Some(2),
            ..EngineArgs::default()
        };
        let config = args.resolve();
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.drop_interval, Duration::from_millis(900));
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_missing_config_file_names_path() {
        let args = EngineArgs {
            config: Some(PathBuf::from("/nonexistent/blockdrop.json")),
            ..EngineArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/blockdrop.json"));
    }
}
