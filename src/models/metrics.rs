use super::{exactly_one, try_variant, InvalidEnumValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The type of metric. The available types are `0` (unspecified), `1` (count), `2` (rate), and `3` (gauge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricIntakeType {
    #[default]
    Unspecified,
    Count,
    Rate,
    Gauge,
}

impl MetricIntakeType {
    pub const ALLOWED_VALUES: &'static [i32] = &[0, 1, 2, 3];

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::Count => 1,
            Self::Rate => 2,
            Self::Gauge => 3,
        }
    }

    pub fn is_valid(value: i32) -> bool {
        Self::ALLOWED_VALUES.contains(&value)
    }
}

impl TryFrom<i32> for MetricIntakeType {
    type Error = InvalidEnumValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unspecified),
            1 => Ok(Self::Count),
            2 => Ok(Self::Rate),
            3 => Ok(Self::Gauge),
            other => Err(InvalidEnumValue {
                type_name: "MetricIntakeType",
                value: other.to_string(),
                allowed: &["0", "1", "2", "3"],
            }),
        }
    }
}

impl fmt::Display for MetricIntakeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

impl Serialize for MetricIntakeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> Deserialize<'de> for MetricIntakeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

string_enum! {
    /// HTTP header used to compress the media-type
    pub enum MetricContentEncoding {
        Deflate = "deflate",
        Gzip = "gzip",
        Zstd1 = "zstd1",
    }
}

string_enum! {
    /// The metric resource type
    pub enum MetricType {
        Metrics = "metrics",
    }
}

string_enum! {
    /// The metric tag configuration resource type
    pub enum MetricTagConfigurationType {
        ManageTags = "manage_tags",
    }
}

string_enum! {
    /// The metric's type
    pub enum MetricTagConfigurationMetricTypes {
        Gauge = "gauge",
        Count = "count",
        Rate = "rate",
        Distribution = "distribution",
    }
}

string_enum! {
    /// A space aggregation for use in query
    pub enum MetricCustomSpaceAggregation {
        Avg = "avg",
        Max = "max",
        Min = "min",
        Sum = "sum",
    }
}

string_enum! {
    /// A time aggregation for use in query
    pub enum MetricCustomTimeAggregation {
        Avg = "avg",
        Count = "count",
        Max = "max",
        Min = "min",
        Sum = "sum",
    }
}

string_enum! {
    /// The metric bulk configure tags resource
    pub enum MetricBulkConfigureTagsType {
        BulkManageTags = "metric_bulk_configure_tags",
    }
}

string_enum! {
    /// The metric distinct volume type
    pub enum MetricDistinctVolumeType {
        DistinctMetricVolumes = "distinct_metric_volumes",
    }
}

string_enum! {
    /// The metric ingested and indexed volume type
    pub enum MetricIngestedIndexedVolumeType {
        MetricVolumes = "metric_volumes",
    }
}

string_enum! {
    /// Estimate type based on the queried configuration
    pub enum MetricEstimateType {
        CountOrGauge = "count_or_gauge",
        Distribution = "distribution",
        Percentile = "percentile",
    }
}

string_enum! {
    /// The metric estimate resource type
    pub enum MetricEstimateResourceType {
        OutputSeries = "metric_cardinality_estimate",
    }
}

string_enum! {
    /// The metric actively queried configuration resource type
    pub enum MetricActiveConfigurationType {
        ActivelyQueriedConfigurations = "actively_queried_configurations",
    }
}

/// A point object is of the form `{POSIX_timestamp, numeric_value}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl MetricPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            value: Some(value),
        }
    }
}

/// Metric resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

/// Metric origin information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricOrigin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<i32>,
}

/// Metadata for the metric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<MetricOrigin>,
}

/// A metric to submit to Datadog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetricMetadata>,
    pub metric: String,
    pub points: Vec<MetricPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<MetricResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricIntakeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MetricSeries {
    pub fn new(metric: impl Into<String>, points: Vec<MetricPoint>) -> Self {
        Self {
            interval: None,
            metadata: None,
            metric: metric.into(),
            points,
            resources: Vec::new(),
            source_type_name: None,
            tags: Vec::new(),
            metric_type: None,
            unit: None,
        }
    }

    pub fn with_type(mut self, metric_type: MetricIntakeType) -> Self {
        self.metric_type = Some(metric_type);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The metrics' payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPayload {
    pub series: Vec<MetricSeries>,
}

/// The payload accepted for intake
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakePayloadAccepted {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// A time and space aggregation combination for use in query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCustomAggregation {
    pub space: MetricCustomSpaceAggregation,
    pub time: MetricCustomTimeAggregation,
}

impl MetricCustomAggregation {
    pub fn new(time: MetricCustomTimeAggregation, space: MetricCustomSpaceAggregation) -> Self {
        Self { space, time }
    }
}

/// Object containing the definition of a metric tag configuration attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregations: Vec<MetricCustomAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_percentiles: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricTagConfigurationMetricTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Object for a single metric tag configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricTagConfigurationAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<MetricTagConfigurationType>,
}

/// Response object which includes a single metric's tag configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricTagConfiguration>,
}

/// Object containing the definition of a metric tag configuration to be created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationCreateAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregations: Vec<MetricCustomAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_percentiles: Option<bool>,
    pub metric_type: MetricTagConfigurationMetricTypes,
    pub tags: Vec<String>,
}

/// Object for a single metric to be configured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationCreateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricTagConfigurationCreateAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: MetricTagConfigurationType,
}

/// Request object that includes the metric that you would like to configure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationCreateRequest {
    pub data: MetricTagConfigurationCreateData,
}

impl MetricTagConfigurationCreateRequest {
    pub fn new(
        metric_name: impl Into<String>,
        metric_type: MetricTagConfigurationMetricTypes,
        tags: Vec<String>,
    ) -> Self {
        Self {
            data: MetricTagConfigurationCreateData {
                attributes: Some(MetricTagConfigurationCreateAttributes {
                    aggregations: Vec::new(),
                    include_percentiles: None,
                    metric_type,
                    tags,
                }),
                id: metric_name.into(),
                config_type: MetricTagConfigurationType::ManageTags,
            },
        }
    }
}

/// Object containing the definition of a metric tag configuration to be updated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationUpdateAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregations: Vec<MetricCustomAggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_percentiles: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Object for a single tag configuration to be edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricTagConfigurationUpdateAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: MetricTagConfigurationType,
}

/// Request object that includes the metric that you would like to edit the tag configuration on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTagConfigurationUpdateRequest {
    pub data: MetricTagConfigurationUpdateData,
}

impl MetricTagConfigurationUpdateRequest {
    pub fn new(
        metric_name: impl Into<String>,
        attributes: MetricTagConfigurationUpdateAttributes,
    ) -> Self {
        Self {
            data: MetricTagConfigurationUpdateData {
                attributes: Some(attributes),
                id: metric_name.into(),
                config_type: MetricTagConfigurationType::ManageTags,
            },
        }
    }
}

/// Optional parameters for bulk creating metric tag configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigCreateAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Request object for bulk configure tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricBulkTagConfigCreateAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: MetricBulkConfigureTagsType,
}

/// Wrapper object for a single bulk tag configuration request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigCreateRequest {
    pub data: MetricBulkTagConfigCreate,
}

impl MetricBulkTagConfigCreateRequest {
    /// `prefix` selects every metric whose name starts with it.
    pub fn new(prefix: impl Into<String>, attributes: MetricBulkTagConfigCreateAttributes) -> Self {
        Self {
            data: MetricBulkTagConfigCreate {
                attributes: Some(attributes),
                id: prefix.into(),
                config_type: MetricBulkConfigureTagsType::BulkManageTags,
            },
        }
    }
}

/// Optional parameters for bulk deleting metric tag configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigDeleteAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
}

/// Request object for bulk delete of tag configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricBulkTagConfigDeleteAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: MetricBulkConfigureTagsType,
}

/// Wrapper object for a single bulk tag deletion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigDeleteRequest {
    pub data: MetricBulkTagConfigDelete,
}

impl MetricBulkTagConfigDeleteRequest {
    pub fn new(prefix: impl Into<String>, emails: Vec<String>) -> Self {
        Self {
            data: MetricBulkTagConfigDelete {
                attributes: Some(MetricBulkTagConfigDeleteAttributes { emails }),
                id: prefix.into(),
                config_type: MetricBulkConfigureTagsType::BulkManageTags,
            },
        }
    }
}

/// Optional attributes for the status of a bulk tag configuration request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigStatusAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The status of a request to bulk configure metric tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricBulkTagConfigStatusAttributes>,
    pub id: String,
    #[serde(rename = "type")]
    pub config_type: MetricBulkConfigureTagsType,
}

/// Wrapper for a single bulk tag configuration status response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricBulkTagConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricBulkTagConfigStatus>,
}

/// Object containing the definition of a metric's tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAllTagsAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Object for a single metric's indexed tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAllTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricAllTagsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
}

/// Response object that includes a single metric's indexed tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricAllTagsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricAllTags>,
}

/// Object containing the definition of a metric's distinct volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricDistinctVolumeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_volume: Option<i64>,
}

/// Object for a single metric's distinct volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDistinctVolume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricDistinctVolumeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub volume_type: MetricDistinctVolumeType,
}

/// Object containing the definition of a metric's ingested and indexed volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricIngestedIndexedVolumeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingested_volume: Option<i64>,
}

/// Object for a single metric's ingested and indexed volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricIngestedIndexedVolume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricIngestedIndexedVolumeAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub volume_type: MetricIngestedIndexedVolumeType,
}

/// Possible response objects for a metric's volume
#[derive(Debug, Clone, PartialEq)]
pub enum MetricVolumes {
    Distinct(MetricDistinctVolume),
    IngestedIndexed(MetricIngestedIndexedVolume),
    UnparsedObject(Value),
}

impl Serialize for MetricVolumes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Distinct(volume) => volume.serialize(serializer),
            Self::IngestedIndexed(volume) => volume.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MetricVolumes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::Distinct),
            try_variant(&value).map(Self::IngestedIndexed),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Response object which includes a single metric's volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricVolumesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricVolumes>,
}

/// Object containing the definition of a metric estimate attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricEstimateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_type: Option<MetricEstimateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_output_series: Option<i64>,
}

/// Object for a metric cardinality estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricEstimate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricEstimateAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub estimate_type: Option<MetricEstimateResourceType>,
}

/// Response object that includes metric cardinality estimates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricEstimateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricEstimate>,
}

/// Object containing the definition of a metric's actively queried tags and aggregations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSuggestedTagsAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_aggregations: Vec<MetricCustomAggregation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_tags: Vec<String>,
}

/// Object for a single metric's actively queried tags and aggregations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSuggestedTagsAndAggregations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<MetricSuggestedTagsAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<MetricActiveConfigurationType>,
}

/// Response object that includes a single metric's actively queried tags and aggregations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSuggestedTagsAndAggregationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MetricSuggestedTagsAndAggregations>,
}

/// Object for a single metric tag configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
}

/// Either a metric without configuration or a metric with its tag configuration
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsAndMetricTagConfigurations {
    Metric(Metric),
    MetricTagConfiguration(Box<MetricTagConfiguration>),
    UnparsedObject(Value),
}

impl MetricsAndMetricTagConfigurations {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Metric(metric) => metric.id.as_deref(),
            Self::MetricTagConfiguration(config) => config.id.as_deref(),
            Self::UnparsedObject(raw) => raw.get("id").and_then(Value::as_str),
        }
    }
}

impl Serialize for MetricsAndMetricTagConfigurations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metric(metric) => metric.serialize(serializer),
            Self::MetricTagConfiguration(config) => config.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MetricsAndMetricTagConfigurations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::Metric),
            try_variant(&value).map(|config| Self::MetricTagConfiguration(Box::new(config))),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// Response object that includes metrics and metric tag configurations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsAndMetricTagConfigurationsResponse {
    #[serde(default)]
    pub data: Vec<MetricsAndMetricTagConfigurations>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intake_type_rejects_unknown_values() {
        let gauge: MetricIntakeType = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(gauge, MetricIntakeType::Gauge);
        assert!(serde_json::from_value::<MetricIntakeType>(json!(7)).is_err());
        assert_eq!(serde_json::to_value(MetricIntakeType::Rate).unwrap(), json!(2));
    }

    #[test]
    fn volumes_pick_variant_by_type() {
        let distinct: MetricVolumes = serde_json::from_value(json!({
            "type": "distinct_metric_volumes",
            "id": "system.cpu",
            "attributes": {"distinct_volume": 10}
        }))
        .unwrap();
        assert!(matches!(distinct, MetricVolumes::Distinct(_)));

        let unknown: MetricVolumes =
            serde_json::from_value(json!({"type": "something_else"})).unwrap();
        assert!(matches!(unknown, MetricVolumes::UnparsedObject(_)));
    }

    #[test]
    fn listed_metrics_are_told_apart() {
        let items: Vec<MetricsAndMetricTagConfigurations> = serde_json::from_value(json!([
            {"id": "plain.metric", "type": "metrics"},
            {"id": "tagged.metric", "type": "manage_tags", "attributes": {"tags": ["env"]}}
        ]))
        .unwrap();
        assert!(matches!(items[0], MetricsAndMetricTagConfigurations::Metric(_)));
        assert!(matches!(
            items[1],
            MetricsAndMetricTagConfigurations::MetricTagConfiguration(_)
        ));
        assert_eq!(items[1].id(), Some("tagged.metric"));
    }

    #[test]
    fn empty_listing_entry_stays_unparsed() {
        let item: MetricsAndMetricTagConfigurations = serde_json::from_value(json!({})).unwrap();
        assert_eq!(item, MetricsAndMetricTagConfigurations::UnparsedObject(json!({})));
    }
}
