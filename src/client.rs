use crate::{
    apis::{
        IncidentTeamsApi, LogsApi, MetricsApi, Operation, RolesApi, ServiceDefinitionApi,
    },
    auth::{ApiKeyAuth, Authentication, API_KEY_HEADER, APP_KEY_HEADER},
    configuration::Configuration,
    error::{ApiError, DatadogError, DatadogResult},
    models::ApiErrorResponse,
};
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use flate2::{
    write::{GzEncoder, ZlibEncoder},
    Compression,
};
use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE},
    Client, Method, Request, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::io::Write;
use std::sync::Arc;
use url::Url;

/// Main Datadog API client
#[derive(Clone)]
pub struct DatadogClient {
    client: Client,
    config: Arc<Configuration>,
    auth: Arc<dyn Authentication>,
}

impl std::fmt::Debug for DatadogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatadogClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DatadogClient {
    /// Create a client authenticating with the keys held by `config`
    pub fn new(config: Configuration) -> DatadogResult<Self> {
        let auth = ApiKeyAuth::from_parts(config.api_key.clone(), config.app_key.clone());
        Self::with_auth(config, auth)
    }

    /// Create a client with a custom authentication scheme
    pub fn with_auth(
        config: Configuration,
        auth: impl Authentication + 'static,
    ) -> DatadogResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_client(client, config, auth))
    }

    /// Create a client with a custom reqwest client
    pub fn with_client(
        client: Client,
        config: Configuration,
        auth: impl Authentication + 'static,
    ) -> Self {
        Self {
            client,
            config: Arc::new(config),
            auth: Arc::new(auth),
        }
    }

    /// Create a client from `DD_API_KEY`, `DD_APP_KEY` and `DD_SITE`
    pub fn from_env() -> DatadogResult<Self> {
        Self::new(Configuration::from_env())
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Get Roles API
    pub fn roles(&self) -> RolesApi<'_> {
        RolesApi::new(self)
    }

    /// Get Incident Teams API
    pub fn incident_teams(&self) -> IncidentTeamsApi<'_> {
        IncidentTeamsApi::new(self)
    }

    /// Get Service Definition API
    pub fn service_definition(&self) -> ServiceDefinitionApi<'_> {
        ServiceDefinitionApi::new(self)
    }

    /// Get Logs API
    pub fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(self)
    }

    /// Get Metrics API
    pub fn metrics(&self) -> MetricsApi<'_> {
        MetricsApi::new(self)
    }

    /// Build a request for an operation with authentication and default headers
    pub(crate) async fn request(
        &self,
        method: Method,
        operation: &Operation,
        path: &str,
    ) -> DatadogResult<RequestBuilder> {
        let operation_id = operation.id();
        if self.config.is_unstable_operation(&operation_id) {
            if !self.config.is_unstable_operation_enabled(&operation_id) {
                return Err(DatadogError::UnstableOperationDisabled(operation_id));
            }
            warn!("Using unstable operation '{}'", operation_id);
        }

        let base = self.config.server_url(&operation.server_key())?;
        let url = Url::parse(&format!("{}{}", base, path))?;

        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers, operation.auth).await?;
        for (name, value) in &self.config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| DatadogError::invalid_param(format!("Invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| DatadogError::invalid_param(format!("Invalid header value: {}", e)))?;
            headers.insert(name, value);
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.config.compress {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("identity"));
        }

        Ok(self.client.request(method, url).headers(headers))
    }

    /// Attach a JSON body, compressed when `content_encoding` is set
    pub(crate) fn json_body<B: Serialize>(
        request: RequestBuilder,
        body: &B,
        content_encoding: Option<&str>,
    ) -> DatadogResult<RequestBuilder> {
        let payload = serde_json::to_vec(body)?;
        let request = request.header(CONTENT_TYPE, "application/json");

        match content_encoding {
            None => Ok(request.body(payload)),
            Some(encoding) => {
                let compressed = compress_body(&payload, encoding)?;
                Ok(request
                    .header(CONTENT_ENCODING, encoding.to_string())
                    .body(compressed))
            }
        }
    }

    /// Execute a request and decode the JSON response
    ///
    /// An empty success body yields the model's empty value.
    pub(crate) async fn execute<T>(
        &self,
        request: RequestBuilder,
        operation: &Operation,
    ) -> DatadogResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.send(request, operation).await?;
        if body.is_empty() {
            debug!("Empty response body for {}", operation.id());
            return Ok(T::default());
        }

        serde_json::from_slice(&body).map_err(|e| DatadogError::Decode {
            message: e.to_string(),
            body,
        })
    }

    /// Execute a request whose response carries no payload
    pub(crate) async fn execute_empty(
        &self,
        request: RequestBuilder,
        operation: &Operation,
    ) -> DatadogResult<()> {
        self.send(request, operation).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, operation: &Operation) -> DatadogResult<Bytes> {
        let request = request.build()?;
        if self.config.debug {
            log_request(&request);
        }

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if self.config.debug {
            debug!(
                "Response {} for {}: {}",
                status,
                operation.id(),
                String::from_utf8_lossy(&body)
            );
        }

        if status.as_u16() >= 300 {
            return Err(api_error(status, body, operation));
        }

        Ok(body)
    }

    /// Render a timestamp the way the API expects it in query strings
    pub(crate) fn format_time(time: &DateTime<Utc>) -> String {
        if time.timestamp_subsec_nanos() == 0 {
            time.to_rfc3339_opts(SecondsFormat::Secs, true)
        } else {
            time.to_rfc3339_opts(SecondsFormat::Millis, true)
        }
    }
}

fn api_error(status: StatusCode, body: Bytes, operation: &Operation) -> DatadogError {
    // Undocumented statuses, and documented ones with a foreign body, keep only the raw bytes.
    let model = if operation.error_statuses.contains(&status.as_u16()) {
        serde_json::from_slice::<ApiErrorResponse>(&body).ok()
    } else {
        None
    };

    ApiError::new(status, body, model).into()
}

fn compress_body(payload: &[u8], encoding: &str) -> DatadogResult<Vec<u8>> {
    match encoding {
        "gzip" => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(payload)?;
            Ok(encoder.finish()?)
        }
        "deflate" => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(payload)?;
            Ok(encoder.finish()?)
        }
        "zstd1" => Ok(zstd::stream::encode_all(payload, 0)?),
        other => Err(DatadogError::invalid_param(format!(
            "Unsupported Content-Encoding: {}",
            other
        ))),
    }
}

fn log_request(request: &Request) {
    debug!("HTTP {} {}", request.method(), request.url());
    for (name, value) in request.headers() {
        let shown = if name.as_str().eq_ignore_ascii_case(API_KEY_HEADER)
            || name.as_str().eq_ignore_ascii_case(APP_KEY_HEADER)
        {
            "REDACTED".to_string()
        } else {
            String::from_utf8_lossy(value.as_bytes()).into_owned()
        };
        debug!("  {}: {}", name, shown);
    }
    let is_encoded = request.headers().contains_key(CONTENT_ENCODING);
    if let Some(body) = request.body().and_then(|body| body.as_bytes()) {
        if !is_encoded {
            debug!("  body: {}", String::from_utf8_lossy(body));
        }
    }
}
