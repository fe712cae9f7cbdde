use super::Operation;
use crate::{
    client::DatadogClient,
    error::DatadogResult,
    models::{
        ServiceDefinitionCreateResponse, ServiceDefinitionGetResponse,
        ServiceDefinitionsCreateRequest, ServiceDefinitionsListResponse,
    },
};
use log::{debug, info};
use reqwest::Method;

const CREATE_OR_UPDATE_SERVICE_DEFINITIONS: Operation = Operation::new(
    "ServiceDefinitionApi",
    "CreateOrUpdateServiceDefinitions",
    &[400, 403, 409, 429],
);
const DELETE_SERVICE_DEFINITION: Operation =
    Operation::new("ServiceDefinitionApi", "DeleteServiceDefinition", &[400, 403, 404, 429]);
const GET_SERVICE_DEFINITION: Operation =
    Operation::new("ServiceDefinitionApi", "GetServiceDefinition", &[400, 403, 404, 409, 429]);
const LIST_SERVICE_DEFINITIONS: Operation =
    Operation::new("ServiceDefinitionApi", "ListServiceDefinitions", &[403, 429]);

/// Service Definition API operations
pub struct ServiceDefinitionApi<'a> {
    client: &'a DatadogClient,
}

impl<'a> ServiceDefinitionApi<'a> {
    pub fn new(client: &'a DatadogClient) -> Self {
        Self { client }
    }

    /// Create or update service definitions in the Datadog Service Catalog
    ///
    /// # Arguments
    /// * `body` - A V2 definition, or a raw YAML/JSON document sent as a JSON string
    pub async fn create_or_update_service_definitions(
        &self,
        body: &ServiceDefinitionsCreateRequest,
    ) -> DatadogResult<ServiceDefinitionCreateResponse> {
        info!("Creating or updating service definitions");
        let path = "/api/v2/services/definitions";
        debug!("HTTP POST {}", path);

        let req = self
            .client
            .request(Method::POST, &CREATE_OR_UPDATE_SERVICE_DEFINITIONS, path)
            .await?;
        let req = DatadogClient::json_body(req, body, None)?;
        self.client.execute(req, &CREATE_OR_UPDATE_SERVICE_DEFINITIONS).await
    }

    /// Delete a single service definition in the Datadog Service Catalog
    pub async fn delete_service_definition(&self, service_name: &str) -> DatadogResult<()> {
        info!("Deleting service definition {}", service_name);
        let path = format!(
            "/api/v2/services/definitions/{}",
            urlencoding::encode(service_name)
        );
        debug!("HTTP DELETE {}", path);

        let req = self
            .client
            .request(Method::DELETE, &DELETE_SERVICE_DEFINITION, &path)
            .await?;
        self.client.execute_empty(req, &DELETE_SERVICE_DEFINITION).await
    }

    /// Get a single service definition from the Datadog Service Catalog
    pub async fn get_service_definition(
        &self,
        service_name: &str,
    ) -> DatadogResult<ServiceDefinitionGetResponse> {
        info!("Getting service definition {}", service_name);
        let path = format!(
            "/api/v2/services/definitions/{}",
            urlencoding::encode(service_name)
        );
        debug!("HTTP GET {}", path);

        let req = self
            .client
            .request(Method::GET, &GET_SERVICE_DEFINITION, &path)
            .await?;
        self.client.execute(req, &GET_SERVICE_DEFINITION).await
    }

    /// Get a list of all service definitions from the Datadog Service Catalog
    pub async fn list_service_definitions(&self) -> DatadogResult<ServiceDefinitionsListResponse> {
        info!("Listing service definitions");
        let path = "/api/v2/services/definitions";
        debug!("HTTP GET {}", path);

        let req = self
            .client
            .request(Method::GET, &LIST_SERVICE_DEFINITIONS, path)
            .await?;
        self.client.execute(req, &LIST_SERVICE_DEFINITIONS).await
    }
}
