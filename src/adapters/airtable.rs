use crate::config::AirtableConfig;
use crate::domain::model::RawRecord;
use crate::domain::ports::{ConfigProvider, RecordSource, SelectQuery};
use crate::utils::error::{DirectoryError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct ListRecordsPage {
    #[serde(default)]
    records: Vec<RawRecord>,
    offset: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

// Airtable uses both shapes: {"error": "NOT_FOUND"} and {"error": {"type": ..., "message": ...}}
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Typed {
        #[serde(rename = "type")]
        kind: String,
        message: Option<String>,
    },
    Code(String),
}

/// Reads a table through the Airtable list-records REST endpoint.
pub struct AirtableSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> AirtableSource<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    async fn fetch_page(
        &self,
        config: &AirtableConfig,
        url: &Url,
        query: &SelectQuery,
        offset: Option<&str>,
    ) -> Result<ListRecordsPage> {
        let mut request = self
            .client
            .get(url.clone())
            .bearer_auth(&config.api_token)
            .query(&query_pairs(query, config.page_size, offset));

        if let Some(seconds) = config.request_timeout_seconds {
            request = request.timeout(Duration::from_secs(seconds));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Airtable response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(DirectoryError::SourceQueryError {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| DirectoryError::MalformedResponseError {
            message: format!("list records body: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> RecordSource for AirtableSource<C> {
    async fn select(&self, query: &SelectQuery) -> Result<Vec<RawRecord>> {
        let config = self.config.resolve()?;
        let url = records_url(&config)?;
        tracing::debug!("Querying Airtable table '{}' at {}", config.table_name, url);

        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut seen_offsets = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self
                .fetch_page(&config, &url, query, offset.as_deref())
                .await?;
            pages += 1;
            tracing::debug!("Page {} returned {} records", pages, page.records.len());

            records.extend(page.records);

            if let Some(max_records) = query.max_records {
                if records.len() >= max_records {
                    records.truncate(max_records);
                    break;
                }
            }

            // A cursor seen before means the pages cycle.
            match page.offset {
                None => break,
                Some(next) if !seen_offsets.insert(next.clone()) => {
                    return Err(DirectoryError::MalformedResponseError {
                        message: format!("pagination offset '{}' repeated", next),
                    });
                }
                Some(next) => offset = Some(next),
            }
        }

        tracing::debug!("Read {} records in {} page(s)", records.len(), pages);
        Ok(records)
    }
}

/// `{endpoint}/v0/{base_id}/{table_name}`, with the table name percent-encoded.
pub fn records_url(config: &AirtableConfig) -> Result<Url> {
    let invalid = |reason: &str| DirectoryError::InvalidConfigValueError {
        field: "endpoint_url".to_string(),
        value: config.endpoint_url.clone(),
        reason: reason.to_string(),
    };

    let mut url = Url::parse(&config.endpoint_url).map_err(|e| invalid(&e.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| invalid("URL cannot be a base"))?;
        segments
            .pop_if_empty()
            .push("v0")
            .push(&config.base_id)
            .push(&config.table_name);
    }
    Ok(url)
}

fn query_pairs(
    query: &SelectQuery,
    page_size: Option<usize>,
    offset: Option<&str>,
) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (index, sort) in query.sort.iter().enumerate() {
        pairs.push((format!("sort[{}][field]", index), sort.field.clone()));
        pairs.push((
            format!("sort[{}][direction]", index),
            sort.direction.as_str().to_string(),
        ));
    }
    if let Some(max_records) = query.max_records {
        pairs.push(("maxRecords".to_string(), max_records.to_string()));
    }
    if let Some(page_size) = page_size {
        pairs.push(("pageSize".to_string(), page_size.to_string()));
    }
    if let Some(offset) = offset {
        pairs.push(("offset".to_string(), offset.to_string()));
    }

    pairs
}

fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: ErrorDetail::Typed {
                kind,
                message: Some(message),
            },
        }) => format!("{}: {}", kind, message),
        Ok(ErrorBody {
            error: ErrorDetail::Typed { kind, message: None },
        }) => kind,
        Ok(ErrorBody {
            error: ErrorDetail::Code(code),
        }) => code,
        Err(_) if !body.trim().is_empty() => body.trim().chars().take(200).collect(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SortDirection;

    fn config(endpoint_url: &str, table_name: &str) -> AirtableConfig {
        AirtableConfig {
            api_token: "test-token".to_string(),
            base_id: "appTest".to_string(),
            table_name: table_name.to_string(),
            endpoint_url: endpoint_url.to_string(),
            page_size: None,
            request_timeout_seconds: None,
        }
    }

    #[test]
    fn test_records_url() {
        let url = records_url(&config("https://api.airtable.com", "Team")).unwrap();
        assert_eq!(url.as_str(), "https://api.airtable.com/v0/appTest/Team");
    }

    #[test]
    fn test_records_url_encodes_table_name() {
        let url = records_url(&config("https://api.airtable.com/", "Team Members")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.airtable.com/v0/appTest/Team%20Members"
        );
    }

    #[test]
    fn test_query_pairs() {
        let query = SelectQuery::sorted_by("Order", SortDirection::Asc).with_max_records(3);
        let pairs = query_pairs(&query, Some(50), Some("itrNext"));

        assert_eq!(
            pairs,
            vec![
                ("sort[0][field]".to_string(), "Order".to_string()),
                ("sort[0][direction]".to_string(), "asc".to_string()),
                ("maxRecords".to_string(), "3".to_string()),
                ("pageSize".to_string(), "50".to_string()),
                ("offset".to_string(), "itrNext".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_message_shapes() {
        assert_eq!(
            error_message(
                StatusCode::UNAUTHORIZED,
                r#"{"error":{"type":"AUTHENTICATION_REQUIRED","message":"Authentication required"}}"#
            ),
            "AUTHENTICATION_REQUIRED: Authentication required"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, r#"{"error":"NOT_FOUND"}"#),
            "NOT_FOUND"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream unavailable"),
            "upstream unavailable"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }
}
