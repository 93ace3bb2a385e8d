use crate::config::{AirtableConfig, AirtableSettings, VarSource};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct TomlDocument {
    #[serde(default)]
    airtable: AirtableSettings,
}

/// File-based settings, e.g.
///
/// ```toml
/// [airtable]
/// api_token = "${AIRTABLE_API_TOKEN}"
/// base_id = "${AIRTABLE_BASE_ID}"
/// table_name = "Team"
/// ```
///
/// `${VAR}` placeholders are expanded on every `resolve()`, so a rotated
/// token is picked up without reloading the file.
#[derive(Debug, Clone)]
pub struct TomlConfig {
    template: String,
    vars: VarSource,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::with_vars(content, VarSource::Process)
    }

    pub fn with_vars(content: &str, vars: VarSource) -> Result<Self> {
        let config = Self {
            template: content.to_string(),
            vars,
        };
        // surface syntax errors at load time rather than on the first fetch
        config.parse_document()?;
        Ok(config)
    }

    /// Expands `${VAR}` placeholders; unset variables become empty strings.
    fn substitute_env_vars(&self) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(&self.template, |caps: &regex::Captures| {
            let var_name = &caps[1];
            self.vars.get(var_name).unwrap_or_else(|| {
                tracing::debug!("Config placeholder ${{{}}} is not set", var_name);
                String::new()
            })
        });

        Ok(result.into_owned())
    }

    fn parse_document(&self) -> Result<TomlDocument> {
        let processed = self.substitute_env_vars()?;
        toml::from_str(&processed).map_err(|e| DirectoryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn resolve(&self) -> Result<AirtableConfig> {
        self.parse_document()?.airtable.into_config()
    }
}
