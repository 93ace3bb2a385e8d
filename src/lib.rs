pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{AirtableSource, LocalStorage};
pub use config::{AirtableConfig, EnvConfig, TomlConfig};
pub use crate::core::{export::DirectoryExporter, provider::TeamDirectoryProvider};
pub use domain::model::{DirectoryOrigin, FallbackReason, SocialPlatform, TeamDirectory, TeamMember};
pub use utils::error::{DirectoryError, Result};
