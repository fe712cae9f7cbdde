use crate::error::{DatadogError, DatadogResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the organization API key.
pub const API_KEY_HEADER: &str = "DD-API-KEY";
/// Header carrying the application key.
pub const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// Security scheme an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `apiKeyAuth`, sent as `DD-API-KEY`
    ApiKey,
    /// `appKeyAuth`, sent as `DD-APPLICATION-KEY`
    AppKey,
}

/// Authentication trait for the Datadog API
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers for the schemes an operation declares
    async fn apply_auth(&self, headers: &mut HeaderMap, schemes: &[AuthScheme]) -> DatadogResult<()>;
}

/// API and application key authentication
#[derive(Clone, Default)]
pub struct ApiKeyAuth {
    api_key: Option<String>,
    app_key: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            app_key: Some(app_key.into()),
        }
    }

    /// Only the API key, enough for the intake endpoints
    pub fn api_key_only(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            app_key: None,
        }
    }

    pub(crate) fn from_parts(api_key: Option<String>, app_key: Option<String>) -> Self {
        Self { api_key, app_key }
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &self.api_key.as_ref().map(|_| "REDACTED"))
            .field("app_key", &self.app_key.as_ref().map(|_| "REDACTED"))
            .finish()
    }
}

fn insert_key(headers: &mut HeaderMap, name: &'static str, key: &str) -> DatadogResult<()> {
    let mut value = HeaderValue::from_str(key)
        .map_err(|e| DatadogError::auth_error(format!("Invalid {} header: {}", name, e)))?;
    value.set_sensitive(true);
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| DatadogError::auth_error(e.to_string()))?;
    headers.insert(name, value);
    Ok(())
}

#[async_trait::async_trait]
impl Authentication for ApiKeyAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap, schemes: &[AuthScheme]) -> DatadogResult<()> {
        // Keys that were never configured are skipped, the server answers 403.
        for scheme in schemes {
            match (scheme, &self.api_key, &self.app_key) {
                (AuthScheme::ApiKey, Some(key), _) => insert_key(headers, API_KEY_HEADER, key)?,
                (AuthScheme::AppKey, _, Some(key)) => insert_key(headers, APP_KEY_HEADER, key)?,
                _ => {}
            }
        }

        Ok(())
    }
}

/// Bearer token authentication (OAuth access tokens)
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap, _schemes: &[AuthScheme]) -> DatadogResult<()> {
        let auth_value = format!("Bearer {}", self.token);
        let mut value = HeaderValue::from_str(&auth_value)
            .map_err(|e| DatadogError::auth_error(format!("Invalid auth header: {}", e)))?;
        value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, value);

        Ok(())
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn apply_auth(&self, _headers: &mut HeaderMap, _schemes: &[AuthScheme]) -> DatadogResult<()> {
        Ok(())
    }
}
