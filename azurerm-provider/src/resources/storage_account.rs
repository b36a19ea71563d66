//! azurerm_storage_account
//!
//! `account_tier` and `account_replication_type` are sent together as
//! `sku.name` (e.g. "Standard_LRS"); see `AzurermProvider::build_body`.

use azurerm_core::resource::Value;
use azurerm_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use super::{IdSource, ResourceDefinition, location, resource_group_name, tags};
use crate::ids::StorageAccountId;
use crate::validate;

pub static DEFINITION: ResourceDefinition = ResourceDefinition {
    type_name: "azurerm_storage_account",
    grammar: StorageAccountId::grammar,
    id_bindings: &[
        ("subscriptionId", IdSource::Subscription),
        ("resourceGroupName", IdSource::Attribute("resource_group_name")),
        ("storageAccountName", IdSource::Attribute("name")),
    ],
    api_version: "2023-01-01",
    fixed_properties: &[],
    required_model_paths: &["kind", "properties", "sku"],
    schema,
};

pub const ACCOUNT_TIERS: &[&str] = &["Standard", "Premium"];

pub const REPLICATION_TYPES: &[&str] = &["LRS", "GRS", "RAGRS", "ZRS", "GZRS", "RAGZRS"];

const ACCOUNT_KINDS: &[&str] = &[
    "BlobStorage",
    "BlockBlobStorage",
    "FileStorage",
    "Storage",
    "StorageV2",
];

fn enum_of(values: &[&str]) -> AttributeType {
    AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
}

fn schema() -> ResourceSchema {
    ResourceSchema::new("azurerm_storage_account")
        .with_description("Manages an Azure Storage Account.")
        .attribute(
            AttributeSchema::new(
                "name",
                types::validated_string("StorageAccountName", validate::storage_account_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the storage account."),
        )
        .attribute(resource_group_name())
        .attribute(location())
        .attribute(
            AttributeSchema::new("account_kind", enum_of(ACCOUNT_KINDS))
                .with_default(Value::String("StorageV2".to_string()))
                .with_provider_name("kind"),
        )
        .attribute(
            AttributeSchema::new("account_tier", enum_of(ACCOUNT_TIERS))
                .required()
                .force_new(),
        )
        .attribute(
            AttributeSchema::new("account_replication_type", enum_of(REPLICATION_TYPES)).required(),
        )
        .attribute(
            AttributeSchema::new("https_traffic_only_enabled", AttributeType::Bool)
                .with_default(Value::Bool(true))
                .with_provider_name("properties.supportsHttpsTrafficOnly"),
        )
        .attribute(
            AttributeSchema::new("min_tls_version", enum_of(&["TLS1_0", "TLS1_1", "TLS1_2"]))
                .with_default(Value::String("TLS1_2".to_string()))
                .with_provider_name("properties.minimumTlsVersion"),
        )
        .attribute(
            AttributeSchema::new("primary_blob_endpoint", AttributeType::String)
                .computed()
                .with_provider_name("properties.primaryEndpoints.blob"),
        )
        .attribute(tags())
}
