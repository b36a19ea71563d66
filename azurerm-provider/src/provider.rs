//! Azure Resource Manager Provider implementation
//!
//! This module contains the main provider implementation that maps resource
//! attributes onto Resource Manager bodies and drives the management client.

use std::collections::HashMap;
use std::sync::Arc;

use azurerm_core::provider::{ProviderError, ProviderResult};
use azurerm_core::resource::{Resource, ResourceAddress, State, Value};
use azurerm_core::resource_id::{Identifier, format, try_format};
use azurerm_core::schema::ResourceSchema;
use serde_json::{Map, Value as JsonValue, json};

use crate::client::{ClientError, ManagementClient, request_url};
use crate::config::ProviderConfig;
use crate::ids::{SqlManagedDatabaseId, SqlManagedInstanceId};
use crate::resources::{
    IdSource, ResourceDefinition, definitions, get_resource_definition, mssql_managed_database,
};
use crate::utils::{get_path, json_to_value, normalize_location, set_path, value_to_json};

/// Get the ResourceDefinition for a resource type
fn definition_for(address: &ResourceAddress) -> ProviderResult<&'static ResourceDefinition> {
    get_resource_definition(&address.resource_type).ok_or_else(|| {
        ProviderError::new(format!("Unknown resource type: {}", address.resource_type))
            .for_resource(address.clone())
    })
}

/// Check that a body returned by the API has every path the read mapping relies on
pub fn validate_model(
    body: &JsonValue,
    id: &Identifier,
    required_paths: &[&str],
) -> ProviderResult<()> {
    if !body.is_object() {
        return Err(ProviderError::new(format!(
            "retrieving {}: `model` was nil",
            id.describe()
        )));
    }
    for path in required_paths {
        if get_path(body, path).is_none() {
            return Err(ProviderError::new(format!(
                "retrieving {}: `model.{}` was nil",
                id.describe(),
                path
            )));
        }
    }
    Ok(())
}

/// Azure Resource Manager Provider
pub struct AzurermProvider {
    client: Arc<dyn ManagementClient>,
    config: ProviderConfig,
}

impl AzurermProvider {
    pub fn new(client: Arc<dyn ManagementClient>, config: ProviderConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Resource provider namespaces the subscription must have registered
    ///
    /// Empty when provider registration is skipped.
    pub fn resource_providers_to_register(&self) -> Vec<&'static str> {
        if self.config.skip_provider_registration {
            log::debug!("skipping resource provider registration");
            return Vec::new();
        }
        let mut namespaces: Vec<&'static str> = definitions()
            .iter()
            .filter_map(|definition| {
                let segments = definition.grammar().segments();
                segments
                    .iter()
                    .position(|s| s.literal_text() == Some("providers"))
                    .and_then(|i| segments.get(i + 1))
                    .and_then(|s| s.literal_text())
            })
            .collect();
        namespaces.sort_unstable();
        namespaces.dedup();
        namespaces
    }

    /// URL a request for `id` is sent to
    pub fn request_url(&self, id: &Identifier, api_version: &str) -> ProviderResult<String> {
        request_url(
            self.config.environment.resource_manager_endpoint(),
            id,
            api_version,
        )
        .map_err(|e| ProviderError::new(e.to_string()).with_cause(e))
    }

    // =========================================================================
    // Identifier Helpers
    // =========================================================================

    /// Build the identifier of a resource from its attributes and the configured subscription
    pub fn build_identifier(
        &self,
        definition: &ResourceDefinition,
        attributes: &HashMap<String, Value>,
    ) -> ProviderResult<Identifier> {
        let mut parents: HashMap<&str, Identifier> = HashMap::new();
        let mut fields: Vec<(&str, String)> = Vec::new();

        for (label, source) in definition.id_bindings {
            let value = match source {
                IdSource::Subscription => self.config.subscription_id.clone(),
                IdSource::Attribute(attribute) => string_attribute(attributes, attribute)?,
                IdSource::Parent { attribute, grammar } => {
                    if !parents.contains_key(attribute) {
                        let raw = string_attribute(attributes, attribute)?;
                        let parent = grammar().parse(&raw).map_err(|e| {
                            ProviderError::new(format!("parsing `{}`: {}", attribute, e))
                                .with_cause(e)
                        })?;
                        parents.insert(*attribute, parent);
                    }
                    parents
                        .get(attribute)
                        .and_then(|parent| parent.get(label))
                        .map(str::to_string)
                        .ok_or_else(|| {
                            ProviderError::new(format!(
                                "`{}` has no segment '{}'",
                                attribute, label
                            ))
                        })?
                }
            };
            fields.push((*label, value));
        }

        Ok(Identifier::from_fields(definition.grammar(), fields)?)
    }

    /// Attributes that are encoded in the identifier, recovered from a parsed one
    fn attributes_from_identifier(
        &self,
        definition: &ResourceDefinition,
        id: &Identifier,
    ) -> ProviderResult<HashMap<String, Value>> {
        let mut attributes = HashMap::new();
        for (label, source) in definition.id_bindings {
            match source {
                IdSource::Subscription => {}
                IdSource::Attribute(attribute) => {
                    if let Some(value) = id.get(label) {
                        attributes.insert(attribute.to_string(), Value::from(value));
                    }
                }
                IdSource::Parent { attribute, grammar } => {
                    if attributes.contains_key(*attribute) {
                        continue;
                    }
                    let parent = Identifier::from_fields(
                        grammar(),
                        id.fields().iter().map(|(label, value)| (*label, value.clone())),
                    )?;
                    attributes.insert(attribute.to_string(), Value::String(format(&parent)));
                }
            }
        }
        Ok(attributes)
    }

    // =========================================================================
    // Body Mapping
    // =========================================================================

    /// Build the request body from resource attributes using provider_name
    fn build_body(
        &self,
        definition: &ResourceDefinition,
        schema: &ResourceSchema,
        attributes: &HashMap<String, Value>,
    ) -> JsonValue {
        let mut body = Map::new();

        for (name, attr_schema) in &schema.attributes {
            if attr_schema.computed {
                continue;
            }
            let Some(path) = &attr_schema.provider_name else {
                continue;
            };
            let value = attributes.get(name).or(attr_schema.default.as_ref());
            if let Some(value) = value {
                set_path(&mut body, path, self.value_to_api(name, value));
            }
        }

        for (path, value) in definition.fixed_properties {
            set_path(&mut body, path, json!(value));
        }

        self.create_special_attributes(definition, attributes, &mut body);

        JsonValue::Object(body)
    }

    /// Map a response body back to attributes using provider_name
    fn read_body(&self, schema: &ResourceSchema, body: &JsonValue) -> HashMap<String, Value> {
        let mut attributes = HashMap::new();
        for (name, attr_schema) in &schema.attributes {
            if let Some(path) = &attr_schema.provider_name
                && let Some(value) = get_path(body, path).and_then(json_to_value)
            {
                attributes.insert(name.clone(), value);
            }
        }
        attributes
    }

    fn value_to_api(&self, name: &str, value: &Value) -> JsonValue {
        match (name, value) {
            ("location", Value::String(s)) => json!(normalize_location(s)),
            _ => value_to_json(value),
        }
    }

    // =========================================================================
    // Special Case Handlers
    // =========================================================================

    /// Handle attributes that don't follow the provider_name mapping on write
    fn create_special_attributes(
        &self,
        definition: &ResourceDefinition,
        attributes: &HashMap<String, Value>,
        body: &mut Map<String, JsonValue>,
    ) {
        if definition.type_name == "azurerm_storage_account"
            && let (Some(tier), Some(replication)) = (
                attributes.get("account_tier").and_then(Value::as_str),
                attributes.get("account_replication_type").and_then(Value::as_str),
            )
        {
            set_path(body, "sku.name", json!(format!("{}_{}", tier, replication)));
        }
    }

    /// Handle attributes that don't follow the provider_name mapping on read
    fn read_special_attributes(
        &self,
        definition: &ResourceDefinition,
        body: &JsonValue,
        attributes: &mut HashMap<String, Value>,
    ) {
        if definition.type_name == "azurerm_storage_account"
            && let Some(sku) = get_path(body, "sku.name").and_then(JsonValue::as_str)
            && let Some((tier, replication)) = sku.split_once('_')
        {
            attributes.insert("account_tier".to_string(), Value::from(tier));
            attributes.insert("account_replication_type".to_string(), Value::from(replication));
        }
    }

    // =========================================================================
    // Resource Operations
    // =========================================================================

    /// Read a resource by its canonical ID
    pub async fn read_resource(
        &self,
        address: &ResourceAddress,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let definition = definition_for(address)?;

        let identifier = match identifier {
            Some(identifier) => identifier,
            None => return Ok(State::not_found(address.clone())),
        };

        let id = definition
            .grammar()
            .parse(identifier)
            .map_err(|e| ProviderError::from(e).for_resource(address.clone()))?;

        log::info!("retrieving {}", id.describe());
        let body = match self
            .client
            .get(&id, definition.api_version)
            .await
            .map_err(|e| client_error("retrieving", &id, e).for_resource(address.clone()))?
        {
            Some(body) => body,
            None => {
                log::info!("{} was not found, marking as gone", id.describe());
                return Ok(State::not_found(address.clone()));
            }
        };

        validate_model(&body, &id, definition.required_model_paths)
            .map_err(|e| e.for_resource(address.clone()))?;

        let schema = definition.schema();
        let mut attributes = self.read_body(&schema, &body);
        self.read_special_attributes(definition, &body, &mut attributes);
        attributes.extend(
            self.attributes_from_identifier(definition, &id)
                .map_err(|e| e.for_resource(address.clone()))?,
        );

        Ok(State::existing(address.clone(), attributes).with_identifier(format(&id)))
    }

    /// Create a resource, failing if one already exists at its identifier
    pub async fn create_resource(&self, resource: Resource) -> ProviderResult<State> {
        let address = resource.address.clone();
        let definition = definition_for(&address)?;
        let schema = definition.schema();

        validate_attributes(&schema, &resource.attributes)
            .map_err(|e| e.for_resource(address.clone()))?;

        let id = self
            .build_identifier(definition, &resource.attributes)
            .map_err(|e| e.for_resource(address.clone()))?;
        let canonical =
            canonical_identifier(&id).map_err(|e| e.for_resource(address.clone()))?;

        let existing = self
            .client
            .get(&id, definition.api_version)
            .await
            .map_err(|e| {
                client_error("checking for the presence of an existing", &id, e)
                    .for_resource(address.clone())
            })?;
        if existing.is_some() {
            return Err(
                ProviderError::requires_import(definition.type_name, &canonical)
                    .for_resource(address),
            );
        }

        log::info!("creating {}", id.describe());
        let body = self.build_body(definition, &schema, &resource.attributes);
        log::debug!("PUT {}: {}", canonical, body);
        self.client
            .create_or_update(&id, definition.api_version, body)
            .await
            .map_err(|e| client_error("creating", &id, e).for_resource(address.clone()))?;

        self.read_resource(&address, Some(&canonical)).await
    }

    /// Update a resource in place
    ///
    /// Changing an attribute that forces a new resource is rejected.
    pub async fn update_resource(
        &self,
        address: &ResourceAddress,
        identifier: &str,
        from: &State,
        to: Resource,
    ) -> ProviderResult<State> {
        let definition = definition_for(address)?;
        let schema = definition.schema();

        let id = definition
            .grammar()
            .parse(identifier)
            .map_err(|e| ProviderError::from(e).for_resource(address.clone()))?;

        for name in schema.force_new_attributes() {
            if let Some(new) = to.attributes.get(name)
                && from.attributes.get(name).is_some_and(|old| old != new)
            {
                return Err(ProviderError::new(format!(
                    "changing `{}` of {} requires replacing the resource",
                    name,
                    id.describe()
                ))
                .for_resource(address.clone()));
            }
        }

        validate_attributes(&schema, &to.attributes)
            .map_err(|e| e.for_resource(address.clone()))?;

        log::info!("updating {}", id.describe());
        let body = self.build_body(definition, &schema, &to.attributes);
        log::debug!("PUT {}: {}", identifier, body);
        self.client
            .create_or_update(&id, definition.api_version, body)
            .await
            .map_err(|e| client_error("updating", &id, e).for_resource(address.clone()))?;

        self.read_resource(address, Some(identifier)).await
    }

    /// Delete a resource; one that is already gone counts as deleted
    pub async fn delete_resource(
        &self,
        address: &ResourceAddress,
        identifier: &str,
    ) -> ProviderResult<()> {
        let definition = definition_for(address)?;

        let id = definition
            .grammar()
            .parse(identifier)
            .map_err(|e| ProviderError::from(e).for_resource(address.clone()))?;

        log::info!("deleting {}", id.describe());
        match self.client.delete(&id, definition.api_version).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                log::debug!("{} was already deleted", id.describe());
                Ok(())
            }
            Err(e) => Err(client_error("deleting", &id, e).for_resource(address.clone())),
        }
    }

    /// List the databases of a SQL managed instance
    pub async fn list_managed_databases(
        &self,
        instance: &SqlManagedInstanceId,
    ) -> ProviderResult<Vec<SqlManagedDatabaseId>> {
        let parent = instance.to_identifier();
        log::info!("listing databases of {}", parent.describe());

        let bodies = self
            .client
            .list(
                &parent,
                mssql_managed_database::DATABASES_COLLECTION,
                mssql_managed_database::DEFINITION.api_version,
            )
            .await
            .map_err(|e| client_error("listing databases of", &parent, e))?;

        bodies
            .iter()
            .map(|body| -> ProviderResult<SqlManagedDatabaseId> {
                let raw = body.get("id").and_then(JsonValue::as_str).ok_or_else(|| {
                    ProviderError::new(format!(
                        "listing databases of {}: `model.id` was nil",
                        parent.describe()
                    ))
                })?;
                Ok(SqlManagedDatabaseId::parse(raw)?)
            })
            .collect()
    }
}

/// Canonical form of an identifier built from attributes, checked to parse back
fn canonical_identifier(id: &Identifier) -> ProviderResult<String> {
    let canonical = try_format(id)?;
    id.grammar().parse(&canonical)?;
    Ok(canonical)
}

fn string_attribute(attributes: &HashMap<String, Value>, name: &str) -> ProviderResult<String> {
    match attributes.get(name).and_then(Value::as_str) {
        Some(value) => Ok(value.to_string()),
        None => Err(ProviderError::new(format!(
            "`{}` must be set to a string",
            name
        ))),
    }
}

fn validate_attributes(
    schema: &ResourceSchema,
    attributes: &HashMap<String, Value>,
) -> ProviderResult<()> {
    schema.validate(attributes).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        ProviderError::new(format!("invalid configuration: {}", messages.join("; ")))
    })
}

fn client_error(action: &str, id: &Identifier, e: ClientError) -> ProviderError {
    ProviderError::new(format!("{} {}: {}", action, id.describe(), e)).with_cause(e)
}
