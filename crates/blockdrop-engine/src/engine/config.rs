use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Drop interval used when none is configured.
pub const DEFAULT_DROP_INTERVAL: Duration = Duration::from_millis(600);

/// Tunable engine parameters.
///
/// Serialized with the drop interval as whole milliseconds:
///
/// ```
/// use std::time::Duration;
///
/// use blockdrop_engine::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "drop_interval_ms": 250 }"#).unwrap();
/// assert_eq!(config.drop_interval, Duration::from_millis(250));
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Time the falling piece waits before each automatic one-row drop.
    #[serde(rename = "drop_interval_ms", with = "duration_millis")]
    pub drop_interval: Duration,
    /// Seed for piece selection. A fresh random seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drop_interval: DEFAULT_DROP_INTERVAL,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drop_interval.is_zero() {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("drop interval must be greater than zero")]
    ZeroDropInterval,
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize as _, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
