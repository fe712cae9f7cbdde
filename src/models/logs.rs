use super::{exactly_one, try_variant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

string_enum! {
    /// Sort parameters when querying logs
    pub enum LogsSort {
        TimestampAscending = "timestamp",
        TimestampDescending = "-timestamp",
    }
}

string_enum! {
    /// Specifies storage type as indexes or online-archives
    pub enum LogsStorageTier {
        Indexes = "indexes",
        OnlineArchives = "online-archives",
    }
}

string_enum! {
    /// An aggregation function
    pub enum LogsAggregationFunction {
        Count = "count",
        Cardinality = "cardinality",
        Percentile75 = "pc75",
        Percentile90 = "pc90",
        Percentile95 = "pc95",
        Percentile98 = "pc98",
        Percentile99 = "pc99",
        Sum = "sum",
        Min = "min",
        Max = "max",
        Avg = "avg",
        Median = "median",
    }
}

string_enum! {
    /// The type of compute
    pub enum LogsComputeType {
        Timeseries = "timeseries",
        Total = "total",
    }
}

string_enum! {
    /// The order to use, ascending or descending
    pub enum LogsSortOrder {
        Ascending = "asc",
        Descending = "desc",
    }
}

string_enum! {
    /// The type of sorting algorithm
    pub enum LogsAggregateSortType {
        Alphabetical = "alphabetical",
        Measure = "measure",
    }
}

string_enum! {
    /// The status of the response
    pub enum LogsAggregateResponseStatus {
        Done = "done",
        Timeout = "timeout",
    }
}

string_enum! {
    /// Type of the event
    pub enum LogType {
        Log = "log",
    }
}

string_enum! {
    /// HTTP header used to compress the media-type
    pub enum ContentEncoding {
        Gzip = "gzip",
        Deflate = "deflate",
    }
}

/// The search and filter query settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsQueryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier: Option<LogsStorageTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl LogsQueryFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn between(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }
}

/// Global query options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsQueryOptions {
    #[serde(rename = "timeOffset", skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A compute rule to compute metrics or timeseries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsCompute {
    pub aggregation: LogsAggregationFunction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub compute_type: Option<LogsComputeType>,
}

impl LogsCompute {
    pub fn new(aggregation: LogsAggregationFunction) -> Self {
        Self {
            aggregation,
            interval: None,
            metric: None,
            compute_type: None,
        }
    }
}

/// Used to perform a histogram computation (only for measure facets)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsGroupByHistogram {
    pub interval: f64,
    pub max: f64,
    pub min: f64,
}

/// A resulting object to put the given computes in over all the matching records
#[derive(Debug, Clone, PartialEq)]
pub enum LogsGroupByTotal {
    Boolean(bool),
    String(String),
    Number(f64),
    UnparsedObject(Value),
}

impl Serialize for LogsGroupByTotal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Boolean(flag) => flag.serialize(serializer),
            Self::String(text) => text.serialize(serializer),
            Self::Number(number) => number.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogsGroupByTotal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::Boolean),
            try_variant(&value).map(Self::String),
            try_variant(&value).map(Self::Number),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// The value to use for logs that don't have the facet used to group by
#[derive(Debug, Clone, PartialEq)]
pub enum LogsGroupByMissing {
    String(String),
    Number(f64),
    UnparsedObject(Value),
}

impl Serialize for LogsGroupByMissing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(text) => text.serialize(serializer),
            Self::Number(number) => number.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogsGroupByMissing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::String),
            try_variant(&value).map(Self::Number),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// A sort rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<LogsAggregationFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<LogsSortOrder>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<LogsAggregateSortType>,
}

/// A group by rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogsGroupBy {
    pub facet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<LogsGroupByHistogram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<LogsGroupByMissing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<LogsAggregateSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<LogsGroupByTotal>,
}

impl LogsGroupBy {
    pub fn new(facet: impl Into<String>) -> Self {
        Self {
            facet: facet.into(),
            histogram: None,
            limit: None,
            missing: None,
            sort: None,
            total: None,
        }
    }
}

/// Paging settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateRequestPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// The object sent with the request to retrieve a list of logs from your organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compute: Vec<LogsCompute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<LogsQueryFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<LogsGroupBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LogsQueryOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<LogsAggregateRequestPage>,
}

/// A timeseries point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateBucketValueTimeseriesPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// A bucket value, can be either a timeseries or a single value
#[derive(Debug, Clone, PartialEq)]
pub enum LogsAggregateBucketValue {
    SingleString(String),
    SingleNumber(f64),
    Timeseries(Vec<LogsAggregateBucketValueTimeseriesPoint>),
    UnparsedObject(Value),
}

impl Serialize for LogsAggregateBucketValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::SingleString(text) => text.serialize(serializer),
            Self::SingleNumber(number) => number.serialize(serializer),
            Self::Timeseries(points) => points.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LogsAggregateBucketValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(Self::SingleString),
            try_variant(&value).map(Self::SingleNumber),
            try_variant(&value).map(Self::Timeseries),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// A bucket values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateBucket {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub by: Map<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub computes: BTreeMap<String, LogsAggregateBucketValue>,
}

/// The query results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateResponseData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<LogsAggregateBucket>,
}

/// A warning message indicating something that went wrong with the query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsWarning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Paging attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsResponseMetadataPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// The metadata associated with a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsResponseMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<LogsResponseMetadataPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LogsAggregateResponseStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LogsWarning>,
}

/// The response object for the logs aggregate API endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsAggregateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<LogsAggregateResponseData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<LogsResponseMetadata>,
}

/// Paging attributes for listing logs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsListRequestPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

/// The request for a logs list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<LogsQueryFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LogsQueryOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<LogsListRequestPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<LogsSort>,
}

/// JSON object containing all log attributes and their associated values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogAttributes {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Object description of a log after being processed and stored by Datadog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Log {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<LogAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub log_type: Option<LogType>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
    #[serde(skip)]
    pub unparsed_object: Option<Value>,
}

unparsed_fallback!(Log);

/// Links attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsListResponseLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Response object with all logs matching the request and pagination information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogsListResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Log>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<LogsListResponseLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<LogsResponseMetadata>,
}

impl LogsListResponse {
    /// Cursor of the next page, if the server returned one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.as_ref()?.page.as_ref()?.after.as_deref()
    }
}

/// Logs that are sent over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HTTPLogItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddsource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddtags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, String>,
}

impl HTTPLogItem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ddsource: None,
            ddtags: None,
            hostname: None,
            message: message.into(),
            service: None,
            additional_properties: BTreeMap::new(),
        }
    }
}
