/*
 * Datadog API Client - Rust client for the Datadog v2 HTTP API
 */

// Internal modules
mod apis;
mod auth;
mod client;
mod configuration;
mod error;
pub mod models; // Make models public

#[cfg(test)]
mod tests;

// Re-export public types and interfaces
pub use apis::{
    EstimateMetricsOutputSeriesOptionalParams, IncidentTeamsApi,
    ListActiveMetricConfigurationsOptionalParams, ListIncidentTeamsOptionalParams,
    ListLogsGetOptionalParams, ListLogsOptionalParams, ListRoleUsersOptionalParams,
    ListRolesOptionalParams, ListTagConfigurationsOptionalParams, LogsApi, MetricsApi, RolesApi,
    ServiceDefinitionApi, SubmitLogOptionalParams, SubmitMetricsOptionalParams,
};
pub use auth::{
    ApiKeyAuth, AuthScheme, Authentication, BearerAuth, NoAuth, API_KEY_HEADER, APP_KEY_HEADER,
};
pub use client::DatadogClient;
pub use configuration::{Configuration, ServerConfiguration, ServerVariable, DATADOG_SITES};
pub use error::{ApiError, DatadogError, DatadogResult};
pub use models::*;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiKeyAuth, BearerAuth, Configuration, DatadogClient, DatadogError, DatadogResult,
        Nullable, NoAuth,
        // Common option structs
        ListLogsGetOptionalParams, ListLogsOptionalParams, ListRolesOptionalParams,
        SubmitLogOptionalParams, SubmitMetricsOptionalParams,
    };
}
