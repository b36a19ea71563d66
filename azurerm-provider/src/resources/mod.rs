//! Resource type definitions for Azure Resource Manager
//!
//! This module defines:
//! - Resource type definitions (implementing ResourceType trait)
//! - How each resource's identifier is built from its arguments
//! - Mapping between schema attributes and API body properties

pub mod ai_services;
pub mod cdn_endpoint;
pub mod eventhub_consumer_group;
pub mod mssql_managed_database;
pub mod storage_account;

use azurerm_core::provider::ResourceType;
use azurerm_core::resource_id::Grammar;
use azurerm_core::schema::{AttributeSchema, ResourceSchema, types};

use crate::validate;

// =============================================================================
// Resource Definition
// =============================================================================

/// Where the value of one identifier segment comes from
#[derive(Debug, Clone, Copy)]
pub enum IdSource {
    /// Subscription of the provider configuration
    Subscription,
    /// String attribute of the resource (e.g. "resource_group_name")
    Attribute(&'static str),
    /// Same-labelled segment of a parent ID held in an attribute
    /// (e.g. "managed_instance_id")
    Parent {
        attribute: &'static str,
        grammar: fn() -> &'static Grammar,
    },
}

/// Everything the generic CRUD glue needs to manage one resource type
pub struct ResourceDefinition {
    /// Configuration type name (e.g. "azurerm_cdn_endpoint")
    pub type_name: &'static str,
    /// Grammar of the resource's identifier
    pub grammar: fn() -> &'static Grammar,
    /// Source of every value segment of the grammar, by label
    pub id_bindings: &'static [(&'static str, IdSource)],
    pub api_version: &'static str,
    /// Properties sent on every create and update, as (dotted path, value)
    pub fixed_properties: &'static [(&'static str, &'static str)],
    /// Paths that must be present in every body the API returns
    pub required_model_paths: &'static [&'static str],
    pub schema: fn() -> ResourceSchema,
}

impl ResourceDefinition {
    pub fn grammar(&self) -> &'static Grammar {
        (self.grammar)()
    }

    pub fn schema(&self) -> ResourceSchema {
        (self.schema)()
    }
}

// =============================================================================
// Resource Type Definitions
// =============================================================================

macro_rules! define_resource_type {
    ($name:ident, $definition:expr) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $definition.type_name
            }
            fn schema(&self) -> ResourceSchema {
                $definition.schema()
            }
        }
    };
}

define_resource_type!(AiServicesType, ai_services::DEFINITION);
define_resource_type!(CdnEndpointType, cdn_endpoint::DEFINITION);
define_resource_type!(EventhubConsumerGroupType, eventhub_consumer_group::DEFINITION);
define_resource_type!(MssqlManagedDatabaseType, mssql_managed_database::DEFINITION);
define_resource_type!(StorageAccountType, storage_account::DEFINITION);

/// Returns all resource types supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(AiServicesType),
        Box::new(CdnEndpointType),
        Box::new(EventhubConsumerGroupType),
        Box::new(MssqlManagedDatabaseType),
        Box::new(StorageAccountType),
    ]
}

// =============================================================================
// Definition Lookup
// =============================================================================

static DEFINITIONS: &[&ResourceDefinition] = &[
    &ai_services::DEFINITION,
    &cdn_endpoint::DEFINITION,
    &eventhub_consumer_group::DEFINITION,
    &mssql_managed_database::DEFINITION,
    &storage_account::DEFINITION,
];

/// Get resource definition by configuration type name
pub fn get_resource_definition(resource_type: &str) -> Option<&'static ResourceDefinition> {
    DEFINITIONS
        .iter()
        .copied()
        .find(|d| d.type_name == resource_type)
}

pub fn definitions() -> &'static [&'static ResourceDefinition] {
    DEFINITIONS
}

// =============================================================================
// Common Attributes
// =============================================================================

/// `resource_group_name`, shared by every resource-group scoped resource
pub fn resource_group_name() -> AttributeSchema {
    AttributeSchema::new(
        "resource_group_name",
        types::validated_string("ResourceGroupName", validate::resource_group_name),
    )
    .required()
    .force_new()
    .with_description("The name of the Resource Group where the resource should exist.")
}

/// `location`, normalized before it is sent
pub fn location() -> AttributeSchema {
    AttributeSchema::new(
        "location",
        types::validated_string("Location", validate::not_empty),
    )
    .required()
    .force_new()
    .with_description("The Azure Region where the resource should exist.")
    .with_provider_name("location")
}

pub fn tags() -> AttributeSchema {
    AttributeSchema::new("tags", types::tags())
        .with_description("A mapping of tags which should be assigned to the resource.")
        .with_provider_name("tags")
}
