use crate::colors::Rgb;
use crate::error::ConfigError;
use crate::logger::ColorLogger;
use crate::output_format::Markup;
use crate::palette::ColorGenerator;
use crate::sink::ConsoleSink;
use crate::type_key::TypeKey;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Logger settings loaded from YAML:
///
/// ```yaml
/// markup: ansi
/// colors:
///   PlayerController: "FF8800"
///   EnemySpawner: "33CC99"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub markup: Option<Markup>,
    /// Colors assigned up front, keyed by type display name
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl LoggerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(LoggerConfig::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Pre-assign every configured color and apply the markup, if set.
    /// Colors that are not `RRGGBB` are kept but reported.
    pub fn apply<S: ConsoleSink, G: ColorGenerator>(&self, logger: &mut ColorLogger<S, G>) {
        if let Some(markup) = self.markup {
            logger.set_markup(markup);
        }

        for (name, hex) in &self.colors {
            if Rgb::from_hex(hex).is_none() {
                tracing::warn!(type_name = %name, color = %hex, "configured color is not a 6-digit hex value");
            }
            logger.set_color(&TypeKey::named(name.clone()), hex.clone());
        }
    }
}
