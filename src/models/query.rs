use super::{exactly_one, try_variant};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

string_enum! {
    /// A data source that is powered by the Metrics platform
    pub enum MetricsDataSource {
        Metrics = "metrics",
        CloudCost = "cloud_cost",
    }
}

string_enum! {
    /// A data source that is powered by the Events platform
    pub enum EventsDataSource {
        Logs = "logs",
        Rum = "rum",
    }
}

string_enum! {
    /// The type of aggregation that can be performed on events-based queries
    pub enum EventsAggregation {
        Count = "count",
        Cardinality = "cardinality",
        Percentile = "pc90",
        Sum = "sum",
        Min = "min",
        Max = "max",
        Avg = "avg",
    }
}

string_enum! {
    /// Direction of sort
    pub enum QuerySortOrder {
        Asc = "asc",
        Desc = "desc",
    }
}

string_enum! {
    /// The type of the resource. The value should always be timeseries_request
    pub enum TimeseriesFormulaRequestType {
        TimeseriesRequest = "timeseries_request",
    }
}

string_enum! {
    /// The type of the resource. The value should always be scalar_request
    pub enum ScalarFormulaRequestType {
        ScalarRequest = "scalar_request",
    }
}

string_enum! {
    /// The type of the resource. The value should always be timeseries_response
    pub enum TimeseriesFormulaResponseType {
        TimeseriesResponse = "timeseries_response",
    }
}

string_enum! {
    /// The type of the resource. The value should always be scalar_response
    pub enum ScalarFormulaResponseType {
        ScalarResponse = "scalar_response",
    }
}

string_enum! {
    /// The type of column present for groups
    pub enum ScalarColumnTypeGroup {
        Group = "group",
    }
}

string_enum! {
    /// The type of column present for numbers
    pub enum ScalarColumnTypeNumber {
        Number = "number",
    }
}

/// Message for specifying limits to the number of values returned by a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormulaLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<QuerySortOrder>,
}

/// A formula for calculation based on one or more queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFormula {
    pub formula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<FormulaLimit>,
}

impl QueryFormula {
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            limit: None,
        }
    }
}

/// An individual timeseries metrics query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsTimeseriesQuery {
    pub data_source: MetricsDataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub query: String,
}

impl MetricsTimeseriesQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            data_source: MetricsDataSource::Metrics,
            name: None,
            query: query.into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An individual scalar metrics query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsScalarQuery {
    pub aggregator: MetricsAggregator,
    pub data_source: MetricsDataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub query: String,
}

string_enum! {
    /// The type of aggregation that can be performed on metrics queries
    pub enum MetricsAggregator {
        Avg = "avg",
        Min = "min",
        Max = "max",
        Sum = "sum",
        Last = "last",
        Percentile = "percentile",
        Mean = "mean",
        L2Norm = "l2norm",
        Area = "area",
    }
}

impl MetricsScalarQuery {
    pub fn new(aggregator: MetricsAggregator, query: impl Into<String>) -> Self {
        Self {
            aggregator,
            data_source: MetricsDataSource::Metrics,
            name: None,
            query: query.into(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// The instructions for what to compute for this query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsCompute {
    pub aggregation: EventsAggregation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

/// Configuration of the search/filter for an events query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// The dimension by which to sort a query's results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsGroupBySort {
    pub aggregation: EventsAggregation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<QuerySortOrder>,
}

/// A dimension on which to split a query's results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsGroupBy {
    pub facet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<EventsGroupBySort>,
}

/// An individual events query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsQuery {
    pub compute: EventsCompute,
    pub data_source: EventsDataSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<EventsGroupBy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<EventsSearch>,
}

impl EventsQuery {
    pub fn new(data_source: EventsDataSource, aggregation: EventsAggregation) -> Self {
        Self {
            compute: EventsCompute {
                aggregation,
                interval: None,
                metric: None,
            },
            data_source,
            group_by: Vec::new(),
            indexes: Vec::new(),
            name: None,
            search: None,
        }
    }
}

/// An individual timeseries query to one of the basic Datadog data sources
#[derive(Debug, Clone, PartialEq)]
pub enum TimeseriesQuery {
    Metrics(Box<MetricsTimeseriesQuery>),
    Events(Box<EventsQuery>),
    UnparsedObject(Value),
}

impl From<MetricsTimeseriesQuery> for TimeseriesQuery {
    fn from(query: MetricsTimeseriesQuery) -> Self {
        Self::Metrics(Box::new(query))
    }
}

impl From<EventsQuery> for TimeseriesQuery {
    fn from(query: EventsQuery) -> Self {
        Self::Events(Box::new(query))
    }
}

impl Serialize for TimeseriesQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metrics(query) => query.serialize(serializer),
            Self::Events(query) => query.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TimeseriesQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant::<MetricsTimeseriesQuery>(&value).map(Self::from),
            try_variant::<EventsQuery>(&value).map(Self::from),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// An individual scalar query to one of the basic Datadog data sources
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarQuery {
    Metrics(Box<MetricsScalarQuery>),
    Events(Box<EventsQuery>),
    UnparsedObject(Value),
}

impl From<MetricsScalarQuery> for ScalarQuery {
    fn from(query: MetricsScalarQuery) -> Self {
        Self::Metrics(Box::new(query))
    }
}

impl From<EventsQuery> for ScalarQuery {
    fn from(query: EventsQuery) -> Self {
        Self::Events(Box::new(query))
    }
}

impl Serialize for ScalarQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metrics(query) => query.serialize(serializer),
            Self::Events(query) => query.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant::<MetricsScalarQuery>(&value).map(Self::from),
            try_variant::<EventsQuery>(&value).map(Self::from),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// The object describing a timeseries formula request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesFormulaRequestAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formulas: Vec<QueryFormula>,
    /// Start of the queried interval in milliseconds since the Unix epoch
    pub from: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    pub queries: Vec<TimeseriesQuery>,
    /// End of the queried interval in milliseconds since the Unix epoch
    pub to: i64,
}

/// A single timeseries query to be executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesFormulaRequest {
    pub attributes: TimeseriesFormulaRequestAttributes,
    #[serde(rename = "type")]
    pub request_type: TimeseriesFormulaRequestType,
}

/// A request wrapper around a single timeseries query to be executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesFormulaQueryRequest {
    pub data: TimeseriesFormulaRequest,
}

impl TimeseriesFormulaQueryRequest {
    pub fn new(from: i64, to: i64, queries: Vec<TimeseriesQuery>) -> Self {
        Self {
            data: TimeseriesFormulaRequest {
                attributes: TimeseriesFormulaRequestAttributes {
                    formulas: Vec::new(),
                    from,
                    interval: None,
                    queries,
                    to,
                },
                request_type: TimeseriesFormulaRequestType::TimeseriesRequest,
            },
        }
    }

    pub fn with_formula(mut self, formula: QueryFormula) -> Self {
        self.data.attributes.formulas.push(formula);
        self
    }

    pub fn with_interval(mut self, interval_ms: i64) -> Self {
        self.data.attributes.interval = Some(interval_ms);
        self
    }
}

/// The object describing a scalar formula request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarFormulaRequestAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formulas: Vec<QueryFormula>,
    pub from: i64,
    pub queries: Vec<ScalarQuery>,
    pub to: i64,
}

/// A single scalar query to be executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarFormulaRequest {
    pub attributes: ScalarFormulaRequestAttributes,
    #[serde(rename = "type")]
    pub request_type: ScalarFormulaRequestType,
}

/// A wrapper request around one scalar query to be executed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarFormulaQueryRequest {
    pub data: ScalarFormulaRequest,
}

impl ScalarFormulaQueryRequest {
    pub fn new(from: i64, to: i64, queries: Vec<ScalarQuery>) -> Self {
        Self {
            data: ScalarFormulaRequest {
                attributes: ScalarFormulaRequestAttributes {
                    formulas: Vec::new(),
                    from,
                    queries,
                    to,
                },
                request_type: ScalarFormulaRequestType::ScalarRequest,
            },
        }
    }

    pub fn with_formula(mut self, formula: QueryFormula) -> Self {
        self.data.attributes.formulas.push(formula);
        self
    }
}

/// Object containing the metric unit family, scale factor, name, and short name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// A group of timeseries results, one per query and group-by combination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponseSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_index: Option<i32>,
    /// Entries are null when the unit is unknown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit: Vec<Option<Unit>>,
}

/// The object describing a timeseries response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponseAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<TimeseriesResponseSeries>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<i64>,
    /// One list per series, aligned with `times`; gaps are null
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<Option<f64>>>,
}

/// A message containing the response to a timeseries query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<TimeseriesResponseAttributes>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub response_type: Option<TimeseriesFormulaResponseType>,
}

/// A message containing one response to a timeseries query made with timeseries formula query request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesFormulaQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<TimeseriesResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

/// A column containing the tag keys and values in a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupScalarColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: ScalarColumnTypeGroup,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<String>>,
}

/// Metadata for the resulting numerical values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarMeta {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit: Vec<Option<Unit>>,
}

/// A column containing the numerical results for a formula or query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataScalarColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ScalarMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: ScalarColumnTypeNumber,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Option<f64>>,
}

/// A single column in a scalar query response
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarColumn {
    Group(Box<GroupScalarColumn>),
    Data(Box<DataScalarColumn>),
    UnparsedObject(Value),
}

impl Serialize for ScalarColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Group(column) => column.serialize(serializer),
            Self::Data(column) => column.serialize(serializer),
            Self::UnparsedObject(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ScalarColumn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let decoded = exactly_one([
            try_variant(&value).map(|column| Self::Group(Box::new(column))),
            try_variant(&value).map(|column| Self::Data(Box::new(column))),
        ]);
        Ok(decoded.unwrap_or(Self::UnparsedObject(value)))
    }
}

/// The object describing a scalar response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarResponseAttributes {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ScalarColumn>,
}

/// A message containing the response to a scalar query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<ScalarResponseAttributes>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ScalarFormulaResponseType>,
}

/// A message containing one or more responses to scalar queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarFormulaQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ScalarResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}
