use crate::core::{RecordSource, SelectQuery, SortDirection};
use crate::domain::fallback::fallback_members;
use crate::domain::model::{DirectoryOrigin, FallbackReason, TeamDirectory, TeamMember};
use crate::domain::services::normalize_records;
use crate::utils::error::{ErrorCategory, Result};

pub const ORDER_FIELD: &str = "Order";

/// Produces a team list that is always safe to render.
///
/// Failures of the record source are logged and never returned: templates
/// only ever see a list of members, and the list from
/// [`fetch_team_members_with_fallback`](Self::fetch_team_members_with_fallback)
/// is never empty.
pub struct TeamDirectoryProvider<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> TeamDirectoryProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    async fn query_members(&self) -> Result<Vec<TeamMember>> {
        let query = SelectQuery::sorted_by(ORDER_FIELD, SortDirection::Asc);
        let records = self.source.select(&query).await?;
        Ok(normalize_records(records))
    }

    /// Reads the source once. Errors are logged and erased; the reason
    /// describes why the list would be empty.
    async fn read_source(&self) -> (Vec<TeamMember>, FallbackReason) {
        match self.query_members().await {
            Ok(members) => {
                tracing::info!("Fetched {} team members from Airtable", members.len());
                (members, FallbackReason::EmptySource)
            }
            Err(e) => {
                log_source_error(&e);
                let reason = match e.category() {
                    ErrorCategory::Configuration => FallbackReason::Configuration,
                    _ => FallbackReason::SourceQuery,
                };
                (Vec::new(), reason)
            }
        }
    }

    /// Members from the source, or an empty list when it cannot be read.
    pub async fn fetch_team_members(&self) -> Vec<TeamMember> {
        self.read_source().await.0
    }

    pub async fn fetch_team_members_with_fallback(&self) -> Vec<TeamMember> {
        self.fetch_directory().await.members
    }

    /// Like `fetch_team_members_with_fallback`, but also reports whether the
    /// members are live data or the embedded roster, and why.
    pub async fn fetch_directory(&self) -> TeamDirectory {
        let (members, empty_reason) = self.read_source().await;

        if !members.is_empty() {
            return TeamDirectory {
                members,
                origin: DirectoryOrigin::Live,
            };
        }

        let members = fallback_members();
        tracing::warn!(
            "No team members found ({}), using {} fallback members",
            empty_reason,
            members.len()
        );
        TeamDirectory {
            members,
            origin: DirectoryOrigin::Fallback {
                reason: empty_reason,
            },
        }
    }
}

fn log_source_error(error: &crate::utils::error::DirectoryError) {
    match error.category() {
        ErrorCategory::Configuration => {
            tracing::warn!("Team directory source is not configured: {}", error)
        }
        _ => tracing::error!("Error fetching team members from Airtable: {}", error),
    }
}
