use super::Operation;
use crate::{
    client::DatadogClient,
    error::DatadogResult,
    models::{
        ContentEncoding, HTTPLogItem, Log, LogsAggregateRequest, LogsAggregateResponse,
        LogsListRequest, LogsListRequestPage, LogsListResponse, LogsSort, LogsStorageTier,
    },
};
use chrono::{DateTime, Utc};
use futures_util::{stream, Stream, StreamExt};
use log::{debug, info};
use reqwest::Method;

const AGGREGATE_LOGS: Operation = Operation::new("LogsApi", "AggregateLogs", &[400, 403, 429]);
const LIST_LOGS: Operation = Operation::new("LogsApi", "ListLogs", &[400, 403, 429]);
const LIST_LOGS_GET: Operation = Operation::new("LogsApi", "ListLogsGet", &[400, 403, 429]);
const SUBMIT_LOG: Operation = Operation::intake(
    "LogsApi",
    "SubmitLog",
    &[400, 401, 403, 408, 413, 429, 500, 503],
);

const DEFAULT_PAGE_LIMIT: i32 = 10;

/// Optional parameters for [`LogsApi::list_logs`]
#[derive(Debug, Clone, Default)]
pub struct ListLogsOptionalParams {
    pub body: Option<LogsListRequest>,
}

impl ListLogsOptionalParams {
    pub fn body(mut self, value: LogsListRequest) -> Self {
        self.body = Some(value);
        self
    }
}

/// Optional parameters for [`LogsApi::list_logs_get`]
#[derive(Debug, Clone, Default)]
pub struct ListLogsGetOptionalParams {
    pub filter_query: Option<String>,
    pub filter_index: Option<String>,
    pub filter_from: Option<DateTime<Utc>>,
    pub filter_to: Option<DateTime<Utc>>,
    pub filter_storage_tier: Option<LogsStorageTier>,
    pub sort: Option<LogsSort>,
    pub page_cursor: Option<String>,
    pub page_limit: Option<i32>,
}

impl ListLogsGetOptionalParams {
    /// Search query following logs syntax.
    pub fn filter_query(mut self, value: impl Into<String>) -> Self {
        self.filter_query = Some(value.into());
        self
    }

    /// For customers with multiple indexes, the indexes to search.
    pub fn filter_index(mut self, value: impl Into<String>) -> Self {
        self.filter_index = Some(value.into());
        self
    }

    /// Minimum timestamp for requested logs.
    pub fn filter_from(mut self, value: DateTime<Utc>) -> Self {
        self.filter_from = Some(value);
        self
    }

    /// Maximum timestamp for requested logs.
    pub fn filter_to(mut self, value: DateTime<Utc>) -> Self {
        self.filter_to = Some(value);
        self
    }

    pub fn filter_storage_tier(mut self, value: LogsStorageTier) -> Self {
        self.filter_storage_tier = Some(value);
        self
    }

    pub fn sort(mut self, value: LogsSort) -> Self {
        self.sort = Some(value);
        self
    }

    /// List following results with a cursor provided in the previous query.
    pub fn page_cursor(mut self, value: impl Into<String>) -> Self {
        self.page_cursor = Some(value.into());
        self
    }

    /// Maximum number of logs in the response.
    pub fn page_limit(mut self, value: i32) -> Self {
        self.page_limit = Some(value);
        self
    }
}

/// Optional parameters for [`LogsApi::submit_log`]
#[derive(Debug, Clone, Default)]
pub struct SubmitLogOptionalParams {
    pub content_encoding: Option<ContentEncoding>,
    pub ddtags: Option<String>,
}

impl SubmitLogOptionalParams {
    /// Compress the payload and send the matching `Content-Encoding` header.
    pub fn content_encoding(mut self, value: ContentEncoding) -> Self {
        self.content_encoding = Some(value);
        self
    }

    /// Log tags can be passed as query parameters with `text/plain` content type.
    pub fn ddtags(mut self, value: impl Into<String>) -> Self {
        self.ddtags = Some(value.into());
        self
    }
}

/// Logs API operations
pub struct LogsApi<'a> {
    client: &'a DatadogClient,
}

impl<'a> LogsApi<'a> {
    pub fn new(client: &'a DatadogClient) -> Self {
        Self { client }
    }

    /// Aggregate events into buckets and compute metrics and timeseries
    pub async fn aggregate_logs(
        &self,
        body: &LogsAggregateRequest,
    ) -> DatadogResult<LogsAggregateResponse> {
        info!("Aggregating logs");
        let path = "/api/v2/logs/analytics/aggregate";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &AGGREGATE_LOGS, path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &AGGREGATE_LOGS).await
    }

    /// Search logs matching a complex query
    ///
    /// Without a body the server applies its default filter, page and sort.
    pub async fn list_logs(&self, params: ListLogsOptionalParams) -> DatadogResult<LogsListResponse> {
        info!("Listing logs");
        let path = "/api/v2/logs/events/search";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &LIST_LOGS, path).await?;
        let req = match &params.body {
            Some(body) => DatadogClient::json_body(req, body, None)?,
            None => req,
        };
        self.client.execute(req, &LIST_LOGS).await
    }

    /// Stream every log matching the request, following `meta.page.after` cursors
    pub fn list_logs_with_pagination(
        &self,
        params: ListLogsOptionalParams,
    ) -> impl Stream<Item = DatadogResult<Log>> + 'a {
        let client = self.client;
        let mut body = params.body.unwrap_or_default();
        let limit = *body
            .page
            .get_or_insert_with(LogsListRequestPage::default)
            .limit
            .get_or_insert(DEFAULT_PAGE_LIMIT);

        stream::unfold(Some(body), move |state| async move {
            let mut body = state?;
            let api = LogsApi::new(client);
            let page = api
                .list_logs(ListLogsOptionalParams::default().body(body.clone()))
                .await;

            Some(match page {
                Ok(response) => {
                    let next = next_cursor(&response, limit).map(|cursor| {
                        body.page.get_or_insert_with(LogsListRequestPage::default).cursor =
                            Some(cursor);
                        body
                    });
                    (page_items(response), next)
                }
                Err(err) => (vec![Err(err)], None),
            })
        })
        .flat_map(stream::iter)
    }

    /// Get logs matching a search query
    pub async fn list_logs_get(
        &self,
        params: ListLogsGetOptionalParams,
    ) -> DatadogResult<LogsListResponse> {
        info!("Listing logs with query parameters");
        let path = "/api/v2/logs/events";
        debug!("HTTP GET {}", path);

        let mut req = self.client.request(Method::GET, &LIST_LOGS_GET, path).await?;
        if let Some(query) = &params.filter_query {
            req = req.query(&[("filter[query]", query.as_str())]);
        }
        if let Some(index) = &params.filter_index {
            req = req.query(&[("filter[index]", index.as_str())]);
        }
        if let Some(from) = &params.filter_from {
            req = req.query(&[("filter[from]", DatadogClient::format_time(from))]);
        }
        if let Some(to) = &params.filter_to {
            req = req.query(&[("filter[to]", DatadogClient::format_time(to))]);
        }
        if let Some(tier) = params.filter_storage_tier {
            req = req.query(&[("filter[storage_tier]", tier.as_str())]);
        }
        if let Some(sort) = params.sort {
            req = req.query(&[("sort", sort.as_str())]);
        }
        if let Some(cursor) = &params.page_cursor {
            req = req.query(&[("page[cursor]", cursor.as_str())]);
        }
        if let Some(limit) = params.page_limit {
            req = req.query(&[("page[limit]", limit.to_string())]);
        }
        self.client.execute(req, &LIST_LOGS_GET).await
    }

    /// Stream every log matching the query parameters, following `meta.page.after` cursors
    pub fn list_logs_get_with_pagination(
        &self,
        mut params: ListLogsGetOptionalParams,
    ) -> impl Stream<Item = DatadogResult<Log>> + 'a {
        let client = self.client;
        let limit = *params.page_limit.get_or_insert(DEFAULT_PAGE_LIMIT);

        stream::unfold(Some(params), move |state| async move {
            let mut params = state?;
            let api = LogsApi::new(client);
            let page = api.list_logs_get(params.clone()).await;

            Some(match page {
                Ok(response) => {
                    let next = next_cursor(&response, limit).map(|cursor| {
                        params.page_cursor = Some(cursor);
                        params
                    });
                    (page_items(response), next)
                }
                Err(err) => (vec![Err(err)], None),
            })
        })
        .flat_map(stream::iter)
    }

    /// Send your logs to your Datadog platform over HTTP
    ///
    /// Uses the logs intake server and only the API key.
    pub async fn submit_log(
        &self,
        body: &[HTTPLogItem],
        params: SubmitLogOptionalParams,
    ) -> DatadogResult<serde_json::Value> {
        info!("Submitting {} logs", body.len());
        let path = "/api/v2/logs";
        debug!("HTTP POST {}", path);

        let mut req = self.client.request(Method::POST, &SUBMIT_LOG, path).await?;
        if let Some(tags) = &params.ddtags {
            req = req.query(&[("ddtags", tags.as_str())]);
        }
        let encoding = params.content_encoding.map(|encoding| encoding.as_str());
        let req = DatadogClient::json_body(req, &body, encoding)?;
        self.client.execute(req, &SUBMIT_LOG).await
    }
}

/// Cursor for the following page, or `None` once the last page was reached.
fn next_cursor(response: &LogsListResponse, limit: i32) -> Option<String> {
    if response.data.len() < limit.max(0) as usize {
        return None;
    }
    response.next_cursor().map(str::to_string)
}

fn page_items(response: LogsListResponse) -> Vec<DatadogResult<Log>> {
    response.data.into_iter().map(Ok).collect()
}
