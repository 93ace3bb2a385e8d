#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

pub const API_TOKEN_VAR: &str = "AIRTABLE_API_TOKEN";
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
pub const TABLE_NAME_VAR: &str = "AIRTABLE_TABLE_NAME";
pub const ENDPOINT_URL_VAR: &str = "AIRTABLE_ENDPOINT_URL";
pub const PAGE_SIZE_VAR: &str = "AIRTABLE_PAGE_SIZE";
pub const REQUEST_TIMEOUT_VAR: &str = "AIRTABLE_REQUEST_TIMEOUT_SECONDS";

pub const DEFAULT_TABLE_NAME: &str = "Team";
pub const DEFAULT_ENDPOINT_URL: &str = "https://api.airtable.com";
/// Airtable rejects list requests with a larger `pageSize`.
pub const MAX_PAGE_SIZE: usize = 100;
pub const MAX_REQUEST_TIMEOUT_SECONDS: u64 = 600;

/// Resolved settings for one query against the team table.
#[derive(Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    pub api_token: String,
    pub base_id: String,
    pub table_name: String,
    pub endpoint_url: String,
    pub page_size: Option<usize>,
    pub request_timeout_seconds: Option<u64>,
}

impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_token", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("endpoint_url", &self.endpoint_url)
            .field("page_size", &self.page_size)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}

impl Validate for AirtableConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("api_token", &self.api_token)?;
        validation::validate_non_empty_string("base_id", &self.base_id)?;
        validation::validate_non_empty_string("table_name", &self.table_name)?;
        validation::validate_url("endpoint_url", &self.endpoint_url)?;

        if let Some(page_size) = self.page_size {
            validation::validate_range("page_size", page_size, 1, MAX_PAGE_SIZE)?;
        }
        if let Some(timeout) = self.request_timeout_seconds {
            validation::validate_range(
                "request_timeout_seconds",
                timeout,
                1,
                MAX_REQUEST_TIMEOUT_SECONDS,
            )?;
        }

        Ok(())
    }
}

/// Unvalidated settings as read from the environment or a config file.
/// Blank strings count as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirtableSettings {
    pub api_token: Option<String>,
    pub base_id: Option<String>,
    pub table_name: Option<String>,
    pub endpoint_url: Option<String>,
    pub page_size: Option<usize>,
    pub request_timeout_seconds: Option<u64>,
}

impl AirtableSettings {
    pub fn into_config(self) -> Result<AirtableConfig> {
        let api_token = non_blank(self.api_token);
        let base_id = non_blank(self.base_id);

        let config = AirtableConfig {
            api_token: validation::validate_required_field(API_TOKEN_VAR, &api_token)?.clone(),
            base_id: validation::validate_required_field(BASE_ID_VAR, &base_id)?.clone(),
            table_name: non_blank(self.table_name)
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: non_blank(self.endpoint_url)
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            page_size: self.page_size,
            request_timeout_seconds: self.request_timeout_seconds,
        };

        config.validate()?;
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Where variable lookups go: the live process environment, or a fixed map.
#[derive(Debug, Clone, Default)]
pub enum VarSource {
    #[default]
    Process,
    Fixed(HashMap<String, String>),
}

impl VarSource {
    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            VarSource::Process => std::env::var(key).ok(),
            VarSource::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

/// Reads the `AIRTABLE_*` variables on every `resolve()`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    vars: VarSource,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: VarSource::Fixed(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn parse_var<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>> {
        match non_blank(self.vars.get(key)) {
            None => Ok(None),
            Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
                DirectoryError::InvalidConfigValueError {
                    field: key.to_string(),
                    value: raw.clone(),
                    reason: "Value must be a positive integer".to_string(),
                }
            }),
        }
    }

    pub fn settings(&self) -> Result<AirtableSettings> {
        Ok(AirtableSettings {
            api_token: self.vars.get(API_TOKEN_VAR),
            base_id: self.vars.get(BASE_ID_VAR),
            table_name: self.vars.get(TABLE_NAME_VAR),
            endpoint_url: self.vars.get(ENDPOINT_URL_VAR),
            page_size: self.parse_var(PAGE_SIZE_VAR)?,
            request_timeout_seconds: self.parse_var(REQUEST_TIMEOUT_VAR)?,
        })
    }
}

impl ConfigProvider for EnvConfig {
    fn resolve(&self) -> Result<AirtableConfig> {
        self.settings()?.into_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_defaults() {
        let config = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.page_size, None);
        assert_eq!(config.request_timeout_seconds, None);
    }

    #[test]
    fn test_empty_table_name_uses_default() {
        let config = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
            (TABLE_NAME_VAR, ""),
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.table_name, "Team");
    }

    #[test]
    fn test_missing_token_is_configuration_error() {
        let result = EnvConfig::from_vars([(API_TOKEN_VAR, ""), (BASE_ID_VAR, "appTest")]).resolve();

        assert!(matches!(
            result,
            Err(DirectoryError::MissingConfigError { field }) if field == API_TOKEN_VAR
        ));
    }

    #[test]
    fn test_missing_base_id_is_configuration_error() {
        let result = EnvConfig::from_vars([(API_TOKEN_VAR, "test-token")]).resolve();

        assert!(matches!(
            result,
            Err(DirectoryError::MissingConfigError { field }) if field == BASE_ID_VAR
        ));
    }

    #[test]
    fn test_numeric_settings() {
        let config = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
            (PAGE_SIZE_VAR, "50"),
            (REQUEST_TIMEOUT_VAR, "15"),
        ])
        .resolve()
        .unwrap();

        assert_eq!(config.page_size, Some(50));
        assert_eq!(config.request_timeout_seconds, Some(15));
    }

    #[test]
    fn test_invalid_numeric_settings() {
        let unparsable = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
            (PAGE_SIZE_VAR, "lots"),
        ])
        .resolve();
        assert!(matches!(
            unparsable,
            Err(DirectoryError::InvalidConfigValueError { .. })
        ));

        let too_large = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
            (PAGE_SIZE_VAR, "500"),
        ])
        .resolve();
        assert!(too_large.is_err());
    }

    #[test]
    fn test_request_timeout_bounds() {
        let with_timeout = |seconds: &str| {
            EnvConfig::from_vars([
                (API_TOKEN_VAR, "test-token"),
                (BASE_ID_VAR, "appTest"),
                (REQUEST_TIMEOUT_VAR, seconds),
            ])
            .resolve()
        };

        assert_eq!(
            with_timeout("600").unwrap().request_timeout_seconds,
            Some(MAX_REQUEST_TIMEOUT_SECONDS)
        );
        assert!(matches!(
            with_timeout("601"),
            Err(DirectoryError::InvalidConfigValueError { .. })
        ));
        assert!(with_timeout("0").is_err());
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let result = EnvConfig::from_vars([
            (API_TOKEN_VAR, "test-token"),
            (BASE_ID_VAR, "appTest"),
            (ENDPOINT_URL_VAR, "ftp://api.airtable.com"),
        ])
        .resolve();

        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = EnvConfig::from_vars([
            (API_TOKEN_VAR, "patSECRET"),
            (BASE_ID_VAR, "appTest"),
        ])
        .resolve()
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("patSECRET"));
        assert!(debug.contains("appTest"));
    }
}
