use crate::auth::AuthScheme;

pub mod incident_teams;
pub mod logs;
pub mod metrics;
pub mod roles;
pub mod service_definition;

// Re-export all APIs
pub use incident_teams::{IncidentTeamsApi, ListIncidentTeamsOptionalParams};
pub use logs::{ListLogsGetOptionalParams, ListLogsOptionalParams, LogsApi, SubmitLogOptionalParams};
pub use metrics::{
    EstimateMetricsOutputSeriesOptionalParams, ListActiveMetricConfigurationsOptionalParams,
    ListTagConfigurationsOptionalParams, MetricsApi, SubmitMetricsOptionalParams,
};
pub use roles::{ListRoleUsersOptionalParams, ListRolesOptionalParams, RolesApi};
pub use service_definition::ServiceDefinitionApi;

const API_AND_APP_KEY: &[AuthScheme] = &[AuthScheme::ApiKey, AuthScheme::AppKey];
const API_KEY_ONLY: &[AuthScheme] = &[AuthScheme::ApiKey];

/// Static description of one REST operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Operation {
    /// Api group, e.g. `LogsApi`
    pub api: &'static str,
    /// Operation name, e.g. `SubmitLog`
    pub name: &'static str,
    pub auth: &'static [AuthScheme],
    /// Statuses whose body is decoded as `ApiErrorResponse`
    pub error_statuses: &'static [u16],
}

impl Operation {
    pub const fn new(api: &'static str, name: &'static str, error_statuses: &'static [u16]) -> Self {
        Self {
            api,
            name,
            auth: API_AND_APP_KEY,
            error_statuses,
        }
    }

    /// Operation for the intake endpoints, which only take the API key.
    pub const fn intake(api: &'static str, name: &'static str, error_statuses: &'static [u16]) -> Self {
        Self {
            api,
            name,
            auth: API_KEY_ONLY,
            error_statuses,
        }
    }

    /// Identifier used by the unstable operations table, e.g. `v2.ListIncidentTeams`.
    pub fn id(&self) -> String {
        format!("v2.{}", self.name)
    }

    /// Key used for per-operation servers, e.g. `v2.LogsApi.SubmitLog`.
    pub fn server_key(&self) -> String {
        format!("v2.{}.{}", self.api, self.name)
    }
}
