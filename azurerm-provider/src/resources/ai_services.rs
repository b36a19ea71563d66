//! azurerm_ai_services

use azurerm_core::resource::Value;
use azurerm_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use super::{IdSource, ResourceDefinition, location, resource_group_name, tags};
use crate::ids::CognitiveAccountId;
use crate::validate;

pub static DEFINITION: ResourceDefinition = ResourceDefinition {
    type_name: "azurerm_ai_services",
    grammar: CognitiveAccountId::grammar,
    id_bindings: &[
        ("subscriptionId", IdSource::Subscription),
        ("resourceGroupName", IdSource::Attribute("resource_group_name")),
        ("accountName", IdSource::Attribute("name")),
    ],
    api_version: "2024-10-01",
    fixed_properties: &[("kind", "AIServices")],
    required_model_paths: &["properties"],
    schema,
};

fn schema() -> ResourceSchema {
    ResourceSchema::new("azurerm_ai_services")
        .with_description("Manages an AI Services Account.")
        .attribute(
            AttributeSchema::new(
                "name",
                types::validated_string("AccountName", validate::cognitive_account_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the AI Services Account."),
        )
        .attribute(resource_group_name())
        .attribute(location())
        .attribute(
            AttributeSchema::new("sku_name", AttributeType::Enum(vec!["F0".to_string(), "S0".to_string()]))
                .required()
                .with_provider_name("sku.name"),
        )
        .attribute(
            AttributeSchema::new("custom_subdomain_name", AttributeType::String)
                .force_new()
                .with_description("The subdomain name used for token-based authentication.")
                .with_provider_name("properties.customSubDomainName"),
        )
        .attribute(
            AttributeSchema::new(
                "public_network_access",
                AttributeType::Enum(vec!["Enabled".to_string(), "Disabled".to_string()]),
            )
            .with_default(Value::String("Enabled".to_string()))
            .with_provider_name("properties.publicNetworkAccess"),
        )
        .attribute(
            AttributeSchema::new("endpoint", AttributeType::String)
                .computed()
                .with_description("The endpoint used to connect to the AI Services Account.")
                .with_provider_name("properties.endpoint"),
        )
        .attribute(tags())
}
