use super::Operation;
use crate::{
    client::DatadogClient,
    error::DatadogResult,
    models::{
        IntakePayloadAccepted, MetricAllTagsResponse, MetricBulkTagConfigCreateRequest,
        MetricBulkTagConfigDeleteRequest, MetricBulkTagConfigResponse, MetricContentEncoding,
        MetricEstimateResponse, MetricPayload, MetricSuggestedTagsAndAggregationsResponse,
        MetricTagConfigurationCreateRequest, MetricTagConfigurationMetricTypes,
        MetricTagConfigurationResponse, MetricTagConfigurationUpdateRequest,
        MetricVolumesResponse, MetricsAndMetricTagConfigurationsResponse,
        ScalarFormulaQueryRequest, ScalarFormulaQueryResponse, TimeseriesFormulaQueryRequest,
        TimeseriesFormulaQueryResponse,
    },
};
use log::{debug, info};
use reqwest::Method;

const CREATE_BULK_TAGS_METRICS_CONFIGURATION: Operation = Operation::new(
    "MetricsApi",
    "CreateBulkTagsMetricsConfiguration",
    &[400, 403, 404, 429],
);
const CREATE_TAG_CONFIGURATION: Operation =
    Operation::new("MetricsApi", "CreateTagConfiguration", &[400, 403, 409, 429]);
const DELETE_BULK_TAGS_METRICS_CONFIGURATION: Operation = Operation::new(
    "MetricsApi",
    "DeleteBulkTagsMetricsConfiguration",
    &[400, 403, 404, 429],
);
const DELETE_TAG_CONFIGURATION: Operation =
    Operation::new("MetricsApi", "DeleteTagConfiguration", &[403, 404, 429]);
const ESTIMATE_METRICS_OUTPUT_SERIES: Operation = Operation::new(
    "MetricsApi",
    "EstimateMetricsOutputSeries",
    &[400, 403, 404, 429],
);
const LIST_ACTIVE_METRIC_CONFIGURATIONS: Operation = Operation::new(
    "MetricsApi",
    "ListActiveMetricConfigurations",
    &[400, 403, 404, 429],
);
const LIST_TAG_CONFIGURATION_BY_NAME: Operation =
    Operation::new("MetricsApi", "ListTagConfigurationByName", &[403, 404, 429]);
const LIST_TAG_CONFIGURATIONS: Operation =
    Operation::new("MetricsApi", "ListTagConfigurations", &[400, 403, 429]);
const LIST_TAGS_BY_METRIC_NAME: Operation =
    Operation::new("MetricsApi", "ListTagsByMetricName", &[400, 403, 404, 429]);
const LIST_VOLUMES_BY_METRIC_NAME: Operation =
    Operation::new("MetricsApi", "ListVolumesByMetricName", &[400, 403, 404, 429]);
const QUERY_SCALAR_DATA: Operation =
    Operation::new("MetricsApi", "QueryScalarData", &[400, 401, 403, 429]);
const QUERY_TIMESERIES_DATA: Operation =
    Operation::new("MetricsApi", "QueryTimeseriesData", &[400, 401, 403, 429]);
const SUBMIT_METRICS: Operation =
    Operation::intake("MetricsApi", "SubmitMetrics", &[400, 403, 408, 413, 429]);
const UPDATE_TAG_CONFIGURATION: Operation =
    Operation::new("MetricsApi", "UpdateTagConfiguration", &[400, 403, 422, 429]);

/// Optional parameters for [`MetricsApi::estimate_metrics_output_series`]
#[derive(Debug, Clone, Default)]
pub struct EstimateMetricsOutputSeriesOptionalParams {
    pub filter_groups: Option<String>,
    pub filter_hours_ago: Option<i32>,
    pub filter_num_aggregations: Option<i32>,
    pub filter_pct: Option<bool>,
    pub filter_timespan_h: Option<i32>,
}

impl EstimateMetricsOutputSeriesOptionalParams {
    /// Comma-separated list of tag keys to group by.
    pub fn filter_groups(mut self, value: impl Into<String>) -> Self {
        self.filter_groups = Some(value.into());
        self
    }

    pub fn filter_hours_ago(mut self, value: i32) -> Self {
        self.filter_hours_ago = Some(value);
        self
    }

    pub fn filter_num_aggregations(mut self, value: i32) -> Self {
        self.filter_num_aggregations = Some(value);
        self
    }

    /// Estimate cardinality with percentile aggregations (distributions only).
    pub fn filter_pct(mut self, value: bool) -> Self {
        self.filter_pct = Some(value);
        self
    }

    pub fn filter_timespan_h(mut self, value: i32) -> Self {
        self.filter_timespan_h = Some(value);
        self
    }
}

/// Optional parameters for [`MetricsApi::list_active_metric_configurations`]
#[derive(Debug, Clone, Default)]
pub struct ListActiveMetricConfigurationsOptionalParams {
    pub window_seconds: Option<i64>,
}

impl ListActiveMetricConfigurationsOptionalParams {
    /// Lookback window in seconds. The server defaults to the last 30 days.
    pub fn window_seconds(mut self, value: i64) -> Self {
        self.window_seconds = Some(value);
        self
    }
}

/// Optional parameters for [`MetricsApi::list_tag_configurations`]
#[derive(Debug, Clone, Default)]
pub struct ListTagConfigurationsOptionalParams {
    pub filter_configured: Option<bool>,
    pub filter_tags_configured: Option<String>,
    pub filter_metric_type: Option<MetricTagConfigurationMetricTypes>,
    pub filter_include_percentiles: Option<bool>,
    pub filter_queried: Option<bool>,
    pub filter_tags: Option<String>,
    pub window_seconds: Option<i64>,
}

impl ListTagConfigurationsOptionalParams {
    /// Only return metrics with (or without) a tag configuration.
    pub fn filter_configured(mut self, value: bool) -> Self {
        self.filter_configured = Some(value);
        self
    }

    pub fn filter_tags_configured(mut self, value: impl Into<String>) -> Self {
        self.filter_tags_configured = Some(value.into());
        self
    }

    pub fn filter_metric_type(mut self, value: MetricTagConfigurationMetricTypes) -> Self {
        self.filter_metric_type = Some(value);
        self
    }

    pub fn filter_include_percentiles(mut self, value: bool) -> Self {
        self.filter_include_percentiles = Some(value);
        self
    }

    /// Only return metrics that have been queried in `window_seconds`.
    pub fn filter_queried(mut self, value: bool) -> Self {
        self.filter_queried = Some(value);
        self
    }

    /// Boolean tag filter expression, e.g. `env IN (staging,test) AND service:web`.
    pub fn filter_tags(mut self, value: impl Into<String>) -> Self {
        self.filter_tags = Some(value.into());
        self
    }

    pub fn window_seconds(mut self, value: i64) -> Self {
        self.window_seconds = Some(value);
        self
    }
}

/// Optional parameters for [`MetricsApi::submit_metrics`]
#[derive(Debug, Clone, Default)]
pub struct SubmitMetricsOptionalParams {
    pub content_encoding: Option<MetricContentEncoding>,
}

impl SubmitMetricsOptionalParams {
    pub fn content_encoding(mut self, value: MetricContentEncoding) -> Self {
        self.content_encoding = Some(value);
        self
    }
}

/// Metrics API operations
pub struct MetricsApi<'a> {
    client: &'a DatadogClient,
}

impl<'a> MetricsApi<'a> {
    pub fn new(client: &'a DatadogClient) -> Self {
        Self { client }
    }

    /// Create and define a list of queryable tag keys for metrics matching a name prefix
    pub async fn create_bulk_tags_metrics_configuration(
        &self,
        body: &MetricBulkTagConfigCreateRequest,
    ) -> DatadogResult<MetricBulkTagConfigResponse> {
        info!("Configuring tags for metrics prefixed {}", body.data.id);
        let path = "/api/v2/metrics/config/bulk-tags";
        debug!("HTTP POST {}", path);

        let req = self
            .client
            .request(Method::POST, &CREATE_BULK_TAGS_METRICS_CONFIGURATION, path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client
            .execute(req, &CREATE_BULK_TAGS_METRICS_CONFIGURATION)
            .await
    }

    /// Create and define a list of queryable tag keys for an existing metric
    ///
    /// # Arguments
    /// * `metric_name` - The name of the metric
    /// * `body` - The tag configuration
    pub async fn create_tag_configuration(
        &self,
        metric_name: &str,
        body: &MetricTagConfigurationCreateRequest,
    ) -> DatadogResult<MetricTagConfigurationResponse> {
        info!("Creating tag configuration for {}", metric_name);
        let path = format!("/api/v2/metrics/{}/tags", urlencoding::encode(metric_name));
        debug!("HTTP POST {}", path);

        let req = self
            .client
            .request(Method::POST, &CREATE_TAG_CONFIGURATION, &path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &CREATE_TAG_CONFIGURATION).await
    }

    /// Delete all custom lists of queryable tag keys for metrics matching a name prefix
    pub async fn delete_bulk_tags_metrics_configuration(
        &self,
        body: &MetricBulkTagConfigDeleteRequest,
    ) -> DatadogResult<MetricBulkTagConfigResponse> {
        info!("Deleting tag configurations for metrics prefixed {}", body.data.id);
        let path = "/api/v2/metrics/config/bulk-tags";
        debug!("HTTP DELETE {}", path);

        let req = self
            .client
            .request(Method::DELETE, &DELETE_BULK_TAGS_METRICS_CONFIGURATION, path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client
            .execute(req, &DELETE_BULK_TAGS_METRICS_CONFIGURATION)
            .await
    }

    /// Delete the tag configuration of a metric
    pub async fn delete_tag_configuration(&self, metric_name: &str) -> DatadogResult<()> {
        info!("Deleting tag configuration for {}", metric_name);
        let path = format!("/api/v2/metrics/{}/tags", urlencoding::encode(metric_name));
        debug!("HTTP DELETE {}", path);

        let req = self
            .client
            .request(Method::DELETE, &DELETE_TAG_CONFIGURATION, &path)
            .await?;
        self.client.execute_empty(req, &DELETE_TAG_CONFIGURATION).await
    }

    /// Estimate the cardinality of a metric for a given tag, percentile and aggregation configuration
    pub async fn estimate_metrics_output_series(
        &self,
        metric_name: &str,
        params: EstimateMetricsOutputSeriesOptionalParams,
    ) -> DatadogResult<MetricEstimateResponse> {
        info!("Estimating output series for {}", metric_name);
        let path = format!("/api/v2/metrics/{}/estimate", urlencoding::encode(metric_name));
        debug!("HTTP GET {}", path);

        let mut req = self
            .client
            .request(Method::GET, &ESTIMATE_METRICS_OUTPUT_SERIES, &path)
            .await?;
        if let Some(groups) = &params.filter_groups {
            req = req.query(&[("filter[groups]", groups.as_str())]);
        }
        if let Some(hours) = params.filter_hours_ago {
            req = req.query(&[("filter[hours_ago]", hours.to_string())]);
        }
        if let Some(count) = params.filter_num_aggregations {
            req = req.query(&[("filter[num_aggregations]", count.to_string())]);
        }
        if let Some(pct) = params.filter_pct {
            req = req.query(&[("filter[pct]", pct.to_string())]);
        }
        if let Some(timespan) = params.filter_timespan_h {
            req = req.query(&[("filter[timespan_h]", timespan.to_string())]);
        }
        self.client.execute(req, &ESTIMATE_METRICS_OUTPUT_SERIES).await
    }

    /// List tags and aggregations that are actively queried for a metric
    pub async fn list_active_metric_configurations(
        &self,
        metric_name: &str,
        params: ListActiveMetricConfigurationsOptionalParams,
    ) -> DatadogResult<MetricSuggestedTagsAndAggregationsResponse> {
        info!("Listing active configurations for {}", metric_name);
        let path = format!(
            "/api/v2/metrics/{}/active-configurations",
            urlencoding::encode(metric_name)
        );
        debug!("HTTP GET {}", path);

        let mut req = self
            .client
            .request(Method::GET, &LIST_ACTIVE_METRIC_CONFIGURATIONS, &path)
            .await?;
        if let Some(window) = params.window_seconds {
            req = req.query(&[("window[seconds]", window.to_string())]);
        }
        self.client.execute(req, &LIST_ACTIVE_METRIC_CONFIGURATIONS).await
    }

    /// Return the tag configuration for a metric
    pub async fn list_tag_configuration_by_name(
        &self,
        metric_name: &str,
    ) -> DatadogResult<MetricTagConfigurationResponse> {
        info!("Getting tag configuration for {}", metric_name);
        let path = format!("/api/v2/metrics/{}/tags", urlencoding::encode(metric_name));
        debug!("HTTP GET {}", path);

        let req = self
            .client
            .request(Method::GET, &LIST_TAG_CONFIGURATION_BY_NAME, &path)
            .await?;
        self.client.execute(req, &LIST_TAG_CONFIGURATION_BY_NAME).await
    }

    /// Return all metrics that can be configured, matching the given filters
    pub async fn list_tag_configurations(
        &self,
        params: ListTagConfigurationsOptionalParams,
    ) -> DatadogResult<MetricsAndMetricTagConfigurationsResponse> {
        info!("Listing tag configurations");
        let path = "/api/v2/metrics";
        debug!("HTTP GET {}", path);

        let mut req = self
            .client
            .request(Method::GET, &LIST_TAG_CONFIGURATIONS, path)
            .await?;
        if let Some(configured) = params.filter_configured {
            req = req.query(&[("filter[configured]", configured.to_string())]);
        }
        if let Some(tags) = &params.filter_tags_configured {
            req = req.query(&[("filter[tags_configured]", tags.as_str())]);
        }
        if let Some(metric_type) = params.filter_metric_type {
            req = req.query(&[("filter[metric_type]", metric_type.as_str())]);
        }
        if let Some(percentiles) = params.filter_include_percentiles {
            req = req.query(&[("filter[include_percentiles]", percentiles.to_string())]);
        }
        if let Some(queried) = params.filter_queried {
            req = req.query(&[("filter[queried]", queried.to_string())]);
        }
        if let Some(tags) = &params.filter_tags {
            req = req.query(&[("filter[tags]", tags.as_str())]);
        }
        if let Some(window) = params.window_seconds {
            req = req.query(&[("window[seconds]", window.to_string())]);
        }
        self.client.execute(req, &LIST_TAG_CONFIGURATIONS).await
    }

    /// View indexed tag key-value pairs for a metric
    pub async fn list_tags_by_metric_name(
        &self,
        metric_name: &str,
    ) -> DatadogResult<MetricAllTagsResponse> {
        info!("Listing tags of {}", metric_name);
        let path = format!("/api/v2/metrics/{}/all-tags", urlencoding::encode(metric_name));
        debug!("HTTP GET {}", path);

        let req = self
            .client
            .request(Method::GET, &LIST_TAGS_BY_METRIC_NAME, &path)
            .await?;
        self.client.execute(req, &LIST_TAGS_BY_METRIC_NAME).await
    }

    /// View distinct, or ingested and indexed, metrics volume for a metric
    pub async fn list_volumes_by_metric_name(
        &self,
        metric_name: &str,
    ) -> DatadogResult<MetricVolumesResponse> {
        info!("Listing volumes of {}", metric_name);
        let path = format!("/api/v2/metrics/{}/volumes", urlencoding::encode(metric_name));
        debug!("HTTP GET {}", path);

        let req = self
            .client
            .request(Method::GET, &LIST_VOLUMES_BY_METRIC_NAME, &path)
            .await?;
        self.client.execute(req, &LIST_VOLUMES_BY_METRIC_NAME).await
    }

    /// Query scalar values across multiple data sources and process them with formulas
    pub async fn query_scalar_data(
        &self,
        body: &ScalarFormulaQueryRequest,
    ) -> DatadogResult<ScalarFormulaQueryResponse> {
        info!("Querying scalar data");
        let path = "/api/v2/query/scalar";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &QUERY_SCALAR_DATA, path).await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &QUERY_SCALAR_DATA).await
    }

    /// Query timeseries points across multiple data sources and process them with formulas
    pub async fn query_timeseries_data(
        &self,
        body: &TimeseriesFormulaQueryRequest,
    ) -> DatadogResult<TimeseriesFormulaQueryResponse> {
        info!("Querying timeseries data");
        let path = "/api/v2/query/timeseries";
        debug!("HTTP POST {}", path);

        let req = self
            .client
            .request(Method::POST, &QUERY_TIMESERIES_DATA, path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &QUERY_TIMESERIES_DATA).await
    }

    /// Submit metrics to Datadog
    ///
    /// Only the API key is sent. The payload is compressed when a content encoding is set.
    pub async fn submit_metrics(
        &self,
        body: &MetricPayload,
        params: SubmitMetricsOptionalParams,
    ) -> DatadogResult<IntakePayloadAccepted> {
        info!("Submitting {} series", body.series.len());
        let path = "/api/v2/series";
        debug!("HTTP POST {}", path);

        let req = self.client.request(Method::POST, &SUBMIT_METRICS, path).await?;
        let encoding = params.content_encoding.map(|encoding| encoding.as_str());
        let req = DatadogClient::json_body(req, body, encoding)?;
        self.client.execute(req, &SUBMIT_METRICS).await
    }

    /// Update the tag configuration of a metric
    pub async fn update_tag_configuration(
        &self,
        metric_name: &str,
        body: &MetricTagConfigurationUpdateRequest,
    ) -> DatadogResult<MetricTagConfigurationResponse> {
        info!("Updating tag configuration for {}", metric_name);
        let path = format!("/api/v2/metrics/{}/tags", urlencoding::encode(metric_name));
        debug!("HTTP PATCH {}", path);

        let req = self
            .client
            .request(Method::PATCH, &UPDATE_TAG_CONFIGURATION, &path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &UPDATE_TAG_CONFIGURATION).await
    }
}
