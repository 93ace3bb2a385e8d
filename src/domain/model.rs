use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A row as returned by the Airtable list-records endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fields: RawFields,
}

/// The team table's columns, keyed by their human-authored labels.
///
/// Every column is optional. Text columns accept any JSON scalar so that a
/// column retyped in the Airtable UI (e.g. to a number) still normalizes.
/// A `Photo` that is not an attachment list reads as no photo, and
/// unreadable entries inside the list are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFields {
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "Bio", default, deserialize_with = "lenient_text")]
    pub bio: Option<String>,
    #[serde(rename = "Homepage URL", default, deserialize_with = "lenient_text")]
    pub homepage_url: Option<String>,
    #[serde(rename = "Twitter username", default, deserialize_with = "lenient_text")]
    pub twitter_username: Option<String>,
    #[serde(rename = "GitHub username", default, deserialize_with = "lenient_text")]
    pub github_username: Option<String>,
    #[serde(rename = "Instagram username", default, deserialize_with = "lenient_text")]
    pub instagram_username: Option<String>,
    #[serde(rename = "YouTube URL", default, deserialize_with = "lenient_text")]
    pub youtube_url: Option<String>,
    #[serde(rename = "Photo", default, deserialize_with = "lenient_attachments")]
    pub photo: Option<Vec<Attachment>>,
    #[serde(rename = "Order", default, deserialize_with = "lenient_number")]
    pub order: Option<f64>,
}

impl RawFields {
    /// Source column backing a social platform.
    pub fn social(&self, platform: SocialPlatform) -> Option<&str> {
        let value = match platform {
            SocialPlatform::Homepage => &self.homepage_url,
            SocialPlatform::Twitter => &self.twitter_username,
            SocialPlatform::Github => &self.github_username,
            SocialPlatform::Instagram => &self.instagram_username,
            SocialPlatform::Youtube => &self.youtube_url,
        };
        value.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Option<String>,
    #[serde(default)]
    pub url: String,
    pub filename: Option<String>,
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    pub small: Option<Thumbnail>,
    pub large: Option<Thumbnail>,
    pub full: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Homepage,
    Twitter,
    Github,
    Instagram,
    Youtube,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Homepage,
        SocialPlatform::Twitter,
        SocialPlatform::Github,
        SocialPlatform::Instagram,
        SocialPlatform::Youtube,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Homepage => "homepage",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Github => "github",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Youtube => "youtube",
        }
    }

    /// Column label in the team table.
    pub fn field_label(&self) -> &'static str {
        match self {
            SocialPlatform::Homepage => "Homepage URL",
            SocialPlatform::Twitter => "Twitter username",
            SocialPlatform::Github => "GitHub username",
            SocialPlatform::Instagram => "Instagram username",
            SocialPlatform::Youtube => "YouTube URL",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized team member handed to page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub image: String,
    pub image_alt: String,
    #[serde(default)]
    pub social: BTreeMap<SocialPlatform, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    EmptySource,
    Configuration,
    SourceQuery,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FallbackReason::EmptySource => "source returned no records",
            FallbackReason::Configuration => "source is not configured",
            FallbackReason::SourceQuery => "source query failed",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryOrigin {
    Live,
    Fallback { reason: FallbackReason },
}

/// A retrieval result together with where its members came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamDirectory {
    pub members: Vec<TeamMember>,
    pub origin: DirectoryOrigin,
}

impl TeamDirectory {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, DirectoryOrigin::Fallback { .. })
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => Some(text),
        Some(serde_json::Value::Number(number)) => Some(number.to_string()),
        Some(serde_json::Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_attachments<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Attachment>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_f64(),
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
