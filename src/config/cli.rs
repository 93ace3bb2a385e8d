use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "team-directory")]
#[command(about = "Export the community team directory for the site build")]
pub struct CliConfig {
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "team.json")]
    pub filename: String,

    #[arg(long, help = "TOML file with an [airtable] table; AIRTABLE_* variables are used when omitted")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("filename", &self.filename)?;
        validation::validate_file_extension("filename", &self.filename, &["json"])?;

        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["team-directory"]);

        assert_eq!(config.output_path, "./output");
        assert_eq!(config.filename, "team.json");
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_json_filename() {
        let config = CliConfig::parse_from(["team-directory", "--filename", "team.csv"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_flag() {
        let config = CliConfig::parse_from([
            "team-directory",
            "--config",
            "site/team-directory.toml",
            "--json-logs",
        ]);

        assert_eq!(config.config.as_deref(), Some("site/team-directory.toml"));
        assert!(config.json_logs);
        assert!(config.validate().is_ok());
    }
}
