use crate::config::AirtableConfig;
use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn location(&self, path: &str) -> String;
}

/// Resolves source settings. Called once per fetch, never cached.
pub trait ConfigProvider: Send + Sync {
    fn resolve(&self) -> Result<AirtableConfig>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub sort: Vec<SortSpec>,
    pub max_records: Option<usize>,
}

impl SelectQuery {
    pub fn sorted_by(field: &str, direction: SortDirection) -> Self {
        Self {
            sort: vec![SortSpec {
                field: field.to_string(),
                direction,
            }],
            max_records: None,
        }
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every record matching `query`, in the order the source returns them.
    async fn select(&self, query: &SelectQuery) -> Result<Vec<RawRecord>>;
}
