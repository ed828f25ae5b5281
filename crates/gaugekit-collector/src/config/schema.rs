use serde::Deserialize;
use gaugekit_core::error::{MetricsError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectorConfig {
    pub version: u32,

    #[serde(default)]
    pub collect: CollectSection,
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.collect.validate()?;

        Ok(())
    }
}

/// Snapshot output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectSection {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Only metrics whose name starts with this prefix are snapshotted.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for CollectSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            prefix: default_prefix(),
            format: OutputFormat::default(),
        }
    }
}

impl CollectSection {
    pub fn validate(&self) -> Result<()> {
        if !(1_000..=3_600_000).contains(&self.interval_ms) {
            return Err(MetricsError::Config(
                "collect.interval_ms must be between 1000 and 3600000".into(),
            ));
        }
        if !self.prefix.starts_with('/') {
            return Err(MetricsError::Config(
                "collect.prefix must start with '/'".into(),
            ));
        }
        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    10_000
}
fn default_prefix() -> String {
    "/".into()
}
