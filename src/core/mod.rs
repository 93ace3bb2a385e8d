pub mod export;
pub mod provider;

pub use crate::domain::model::{TeamDirectory, TeamMember};
pub use crate::domain::ports::{ConfigProvider, RecordSource, SelectQuery, SortDirection, Storage};
pub use crate::utils::error::Result;
