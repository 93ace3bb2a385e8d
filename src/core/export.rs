use crate::core::provider::TeamDirectoryProvider;
use crate::core::{RecordSource, Storage};
use crate::domain::model::{DirectoryOrigin, TeamMember};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_FILENAME: &str = "team.json";

/// Shape of the file the site build reads.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DirectoryFile<'a> {
    generated_at: DateTime<Utc>,
    origin: DirectoryOrigin,
    members: &'a [TeamMember],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub location: String,
    pub origin: DirectoryOrigin,
    pub member_count: usize,
}

/// Fetches the directory and writes it as JSON through a `Storage`.
pub struct DirectoryExporter<S: Storage, R: RecordSource> {
    storage: S,
    provider: TeamDirectoryProvider<R>,
    filename: String,
}

impl<S: Storage, R: RecordSource> DirectoryExporter<S, R> {
    pub fn new(storage: S, provider: TeamDirectoryProvider<R>) -> Self {
        Self::with_filename(storage, provider, DEFAULT_FILENAME)
    }

    pub fn with_filename(storage: S, provider: TeamDirectoryProvider<R>, filename: &str) -> Self {
        Self {
            storage,
            provider,
            filename: filename.to_string(),
        }
    }

    pub async fn run(&self) -> Result<ExportSummary> {
        tracing::info!("Building team directory");
        let directory = self.provider.fetch_directory().await;

        let file = DirectoryFile {
            generated_at: Utc::now(),
            origin: directory.origin,
            members: &directory.members,
        };
        let json = serde_json::to_vec_pretty(&file)?;

        tracing::debug!("Writing {} ({} bytes)", self.filename, json.len());
        self.storage.write_file(&self.filename, &json).await?;

        let summary = ExportSummary {
            location: self.storage.location(&self.filename),
            origin: directory.origin,
            member_count: directory.members.len(),
        };
        tracing::info!(
            "Wrote {} team members to {}",
            summary.member_count,
            summary.location
        );
        Ok(summary)
    }
}
