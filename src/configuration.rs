//! Client configuration: credentials, server selection and operation gates.

use crate::error::{DatadogError, DatadogResult};
use log::warn;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Sites accepted by the `site` variable of the default server.
pub const DATADOG_SITES: &[&str] = &[
    "datadoghq.com",
    "us3.datadoghq.com",
    "us5.datadoghq.com",
    "ap1.datadoghq.com",
    "datadoghq.eu",
    "ddog-gov.com",
];

const UNSTABLE_OPERATIONS: &[&str] = &[
    "v2.CreateIncidentTeam",
    "v2.DeleteIncidentTeam",
    "v2.GetIncidentTeam",
    "v2.ListIncidentTeams",
    "v2.UpdateIncidentTeam",
    "v2.QueryScalarData",
    "v2.QueryTimeseriesData",
];

/// A templated URL variable with a default and, optionally, a closed value set.
#[derive(Debug, Clone)]
pub struct ServerVariable {
    pub description: &'static str,
    pub default_value: &'static str,
    pub enum_values: &'static [&'static str],
}

/// A server URL template such as `https://{subdomain}.{site}`.
#[derive(Debug, Clone)]
pub struct ServerConfiguration {
    pub url: &'static str,
    pub description: &'static str,
    pub variables: Vec<(&'static str, ServerVariable)>,
}

impl ServerConfiguration {
    /// Render the template, validating overrides against enum sets.
    pub fn render(&self, overrides: &HashMap<String, String>) -> DatadogResult<String> {
        let mut url = self.url.to_string();
        for (name, variable) in &self.variables {
            let value = match overrides.get(*name) {
                Some(value) => {
                    if !variable.enum_values.is_empty()
                        && !variable.enum_values.contains(&value.as_str())
                    {
                        return Err(DatadogError::server_config(format!(
                            "the variable {} in the server URL has invalid value {}. Must be {:?}",
                            name, value, variable.enum_values
                        )));
                    }
                    value.as_str()
                }
                None => variable.default_value,
            };
            url = url.replace(&format!("{{{}}}", name), value);
        }
        Ok(url)
    }
}

fn site_variable(enum_values: &'static [&'static str]) -> ServerVariable {
    ServerVariable {
        description: "The regional site for Datadog customers.",
        default_value: "datadoghq.com",
        enum_values,
    }
}

fn subdomain_variable(default_value: &'static str) -> ServerVariable {
    ServerVariable {
        description: "The subdomain where the API is deployed.",
        default_value,
        enum_values: &[],
    }
}

fn server_list(subdomain: &'static str, full_name: &'static str) -> Vec<ServerConfiguration> {
    vec![
        ServerConfiguration {
            url: "https://{subdomain}.{site}",
            description: "No description provided",
            variables: vec![
                ("site", site_variable(DATADOG_SITES)),
                ("subdomain", subdomain_variable(subdomain)),
            ],
        },
        ServerConfiguration {
            url: "{protocol}://{name}",
            description: "No description provided",
            variables: vec![
                (
                    "name",
                    ServerVariable {
                        description: "Full site DNS name.",
                        default_value: full_name,
                        enum_values: &[],
                    },
                ),
                (
                    "protocol",
                    ServerVariable {
                        description: "The protocol for accessing the API.",
                        default_value: "https",
                        enum_values: &[],
                    },
                ),
            ],
        },
        ServerConfiguration {
            url: "https://{subdomain}.{site}",
            description: "No description provided",
            variables: vec![
                ("site", site_variable(&[])),
                ("subdomain", subdomain_variable(subdomain)),
            ],
        },
    ]
}

fn operation_servers() -> HashMap<&'static str, Vec<ServerConfiguration>> {
    HashMap::from([(
        "v2.LogsApi.SubmitLog",
        server_list("http-intake.logs", "http-intake.logs.datadoghq.com"),
    )])
}

/// Settings shared by every API of a [`crate::DatadogClient`].
#[derive(Clone)]
pub struct Configuration {
    pub(crate) user_agent: String,
    pub(crate) debug: bool,
    pub(crate) compress: bool,
    pub(crate) default_headers: HashMap<String, String>,
    pub(crate) api_key: Option<String>,
    pub(crate) app_key: Option<String>,
    pub(crate) timeout: Option<Duration>,
    base_url: Option<Url>,
    server_index: usize,
    server_variables: HashMap<String, String>,
    servers: Vec<ServerConfiguration>,
    operation_servers: HashMap<&'static str, Vec<ServerConfiguration>>,
    operation_server_index: HashMap<String, usize>,
    operation_server_variables: HashMap<String, HashMap<String, String>>,
    unstable_operations: HashMap<String, bool>,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("user_agent", &self.user_agent)
            .field("debug", &self.debug)
            .field("compress", &self.compress)
            .field("api_key", &self.api_key.as_ref().map(|_| "REDACTED"))
            .field("app_key", &self.app_key.as_ref().map(|_| "REDACTED"))
            .field("base_url", &self.base_url)
            .field("server_index", &self.server_index)
            .field("server_variables", &self.server_variables)
            .finish_non_exhaustive()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            user_agent: default_user_agent(),
            debug: false,
            compress: true,
            default_headers: HashMap::new(),
            api_key: None,
            app_key: None,
            timeout: None,
            base_url: None,
            server_index: 0,
            server_variables: HashMap::new(),
            servers: server_list("api", "api.datadoghq.com"),
            operation_servers: operation_servers(),
            operation_server_index: HashMap::new(),
            operation_server_variables: HashMap::new(),
            unstable_operations: UNSTABLE_OPERATIONS
                .iter()
                .map(|id| (id.to_string(), false))
                .collect(),
        }
    }

    /// Configuration seeded from `DD_API_KEY`, `DD_APP_KEY` and `DD_SITE`.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.api_key = std::env::var("DD_API_KEY").ok();
        config.app_key = std::env::var("DD_APP_KEY").ok();
        if let Ok(site) = std::env::var("DD_SITE") {
            config.server_variables.insert("site".into(), site);
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Log every request and response at debug level, with keys redacted.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// When disabled, responses are requested with `Accept-Encoding: identity`.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send every operation to `base_url`, bypassing the server templates.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> DatadogResult<Self> {
        self.base_url = Some(Url::parse(base_url.as_ref())?);
        Ok(self)
    }

    /// Shortcut for the `site` server variable.
    pub fn with_site(self, site: impl Into<String>) -> Self {
        self.with_server_variable("site", site)
    }

    pub fn with_server_index(mut self, index: usize) -> Self {
        self.server_index = index;
        self
    }

    pub fn with_server_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.server_variables.insert(name.into(), value.into());
        self
    }

    /// Server index for one operation, keyed like `v2.LogsApi.SubmitLog`.
    pub fn with_operation_server_index(mut self, operation: impl Into<String>, index: usize) -> Self {
        self.operation_server_index.insert(operation.into(), index);
        self
    }

    pub fn with_operation_server_variable(
        mut self,
        operation: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.operation_server_variables
            .entry(operation.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn is_compress(&self) -> bool {
        self.compress
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Enable or disable an unstable operation.
    ///
    /// Returns `false` and leaves the table untouched when `operation_id`
    /// is not a known unstable operation.
    pub fn set_unstable_operation_enabled(&mut self, operation_id: &str, enabled: bool) -> bool {
        match self.unstable_operations.get_mut(operation_id) {
            Some(flag) => {
                *flag = enabled;
                true
            }
            None => {
                warn!("'{}' is not an unstable operation, can't enable it", operation_id);
                false
            }
        }
    }

    pub fn with_unstable_operation(mut self, operation_id: &str, enabled: bool) -> Self {
        self.set_unstable_operation_enabled(operation_id, enabled);
        self
    }

    pub fn is_unstable_operation(&self, operation_id: &str) -> bool {
        self.unstable_operations.contains_key(operation_id)
    }

    pub fn is_unstable_operation_enabled(&self, operation_id: &str) -> bool {
        match self.unstable_operations.get(operation_id) {
            Some(enabled) => *enabled,
            None => {
                warn!("'{}' is not an unstable operation", operation_id);
                false
            }
        }
    }

    /// Base URL for an operation, keyed like `v2.LogsApi.SubmitLog`.
    pub fn server_url(&self, operation_key: &str) -> DatadogResult<String> {
        if let Some(base_url) = &self.base_url {
            return Ok(base_url.as_str().trim_end_matches('/').to_string());
        }

        if let Some(servers) = self.operation_servers.get(operation_key) {
            let index = self
                .operation_server_index
                .get(operation_key)
                .copied()
                .unwrap_or(0);
            let mut variables = self.server_variables.clone();
            if let Some(overrides) = self.operation_server_variables.get(operation_key) {
                variables.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            return Self::render_server(servers, index, &variables);
        }

        Self::render_server(&self.servers, self.server_index, &self.server_variables)
    }

    fn render_server(
        servers: &[ServerConfiguration],
        index: usize,
        variables: &HashMap<String, String>,
    ) -> DatadogResult<String> {
        let server = servers.get(index).ok_or_else(|| {
            DatadogError::server_config(format!(
                "index {} out of range {}",
                index,
                servers.len().saturating_sub(1)
            ))
        })?;
        server.render(variables)
    }
}

fn default_user_agent() -> String {
    format!(
        "datadog-api-client-rust/{} (rust; os {}; arch {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_is_us1_api() {
        let config = Configuration::new();
        assert_eq!(
            config.server_url("v2.RolesApi.ListRoles").unwrap(),
            "https://api.datadoghq.com"
        );
    }

    #[test]
    fn site_variable_is_validated() {
        let config = Configuration::new().with_site("datadoghq.eu");
        assert_eq!(
            config.server_url("v2.RolesApi.ListRoles").unwrap(),
            "https://api.datadoghq.eu"
        );

        let config = Configuration::new().with_site("example.com");
        let err = config.server_url("v2.RolesApi.ListRoles").unwrap_err();
        assert!(matches!(err, DatadogError::ServerConfiguration(_)));
    }

    #[test]
    fn free_form_site_server_accepts_any_site() {
        let config = Configuration::new()
            .with_server_index(2)
            .with_site("datad0g.com");
        assert_eq!(
            config.server_url("v2.RolesApi.ListRoles").unwrap(),
            "https://api.datad0g.com"
        );
    }

    #[test]
    fn submit_log_uses_intake_server() {
        let config = Configuration::new().with_site("us5.datadoghq.com");
        assert_eq!(
            config.server_url("v2.LogsApi.SubmitLog").unwrap(),
            "https://http-intake.logs.us5.datadoghq.com"
        );

        let config = Configuration::new().with_operation_server_index("v2.LogsApi.SubmitLog", 1);
        assert_eq!(
            config.server_url("v2.LogsApi.SubmitLog").unwrap(),
            "https://http-intake.logs.datadoghq.com"
        );
    }

    #[test]
    fn operation_variables_override_global_ones() {
        let config = Configuration::new()
            .with_site("us3.datadoghq.com")
            .with_operation_server_variable("v2.LogsApi.SubmitLog", "site", "datadoghq.eu");
        assert_eq!(
            config.server_url("v2.LogsApi.SubmitLog").unwrap(),
            "https://http-intake.logs.datadoghq.eu"
        );
        assert_eq!(
            config.server_url("v2.RolesApi.ListRoles").unwrap(),
            "https://api.us3.datadoghq.com"
        );

        let config = Configuration::new()
            .with_site("ap1.datadoghq.com")
            .with_operation_server_index("v2.LogsApi.SubmitLog", 2)
            .with_operation_server_variable("v2.LogsApi.SubmitLog", "subdomain", "logs-proxy");
        assert_eq!(
            config.server_url("v2.LogsApi.SubmitLog").unwrap(),
            "https://logs-proxy.ap1.datadoghq.com"
        );

        let config = Configuration::new()
            .with_operation_server_variable("v2.LogsApi.SubmitLog", "site", "example.com");
        assert!(matches!(
            config.server_url("v2.LogsApi.SubmitLog"),
            Err(DatadogError::ServerConfiguration(_))
        ));
    }

    #[test]
    fn from_env_reads_keys_and_site() {
        std::env::set_var("DD_API_KEY", "env-api-key");
        std::env::set_var("DD_APP_KEY", "env-app-key");
        std::env::set_var("DD_SITE", "us5.datadoghq.com");

        let config = Configuration::from_env();

        std::env::remove_var("DD_API_KEY");
        std::env::remove_var("DD_APP_KEY");
        std::env::remove_var("DD_SITE");

        assert_eq!(config.api_key.as_deref(), Some("env-api-key"));
        assert_eq!(config.app_key.as_deref(), Some("env-app-key"));
        assert_eq!(
            config.server_url("v2.RolesApi.ListRoles").unwrap(),
            "https://api.us5.datadoghq.com"
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let config = Configuration::new().with_server_index(7);
        assert!(config.server_url("v2.RolesApi.ListRoles").is_err());
    }

    #[test]
    fn base_url_wins() {
        let config = Configuration::new()
            .with_base_url("http://127.0.0.1:8126/")
            .unwrap();
        assert_eq!(
            config.server_url("v2.LogsApi.SubmitLog").unwrap(),
            "http://127.0.0.1:8126"
        );
    }

    #[test]
    fn unstable_operations_start_disabled() {
        let mut config = Configuration::new();
        assert!(config.is_unstable_operation("v2.ListIncidentTeams"));
        assert!(!config.is_unstable_operation_enabled("v2.ListIncidentTeams"));

        assert!(config.set_unstable_operation_enabled("v2.ListIncidentTeams", true));
        assert!(config.is_unstable_operation_enabled("v2.ListIncidentTeams"));

        assert!(!config.set_unstable_operation_enabled("v2.ListRoles", true));
        assert!(!config.is_unstable_operation("v2.ListRoles"));
    }
}
