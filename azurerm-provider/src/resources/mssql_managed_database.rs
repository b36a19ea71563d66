//! azurerm_mssql_managed_database
//!
//! The database is addressed through the ID of its managed instance, so every
//! segment except the database name is copied from `managed_instance_id`.

use azurerm_core::resource::Value;
use azurerm_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use super::{IdSource, ResourceDefinition};
use crate::ids::{SqlManagedDatabaseId, SqlManagedInstanceId};
use crate::validate;

const MANAGED_INSTANCE: IdSource = IdSource::Parent {
    attribute: "managed_instance_id",
    grammar: SqlManagedInstanceId::grammar,
};

pub static DEFINITION: ResourceDefinition = ResourceDefinition {
    type_name: "azurerm_mssql_managed_database",
    grammar: SqlManagedDatabaseId::grammar,
    id_bindings: &[
        ("subscriptionId", MANAGED_INSTANCE),
        ("resourceGroupName", MANAGED_INSTANCE),
        ("managedInstanceName", MANAGED_INSTANCE),
        ("databaseName", IdSource::Attribute("name")),
    ],
    api_version: "2023-08-01-preview",
    fixed_properties: &[],
    required_model_paths: &["properties"],
    schema,
};

/// Collection under a managed instance that holds its databases
pub const DATABASES_COLLECTION: &str = "databases";

fn schema() -> ResourceSchema {
    ResourceSchema::new("azurerm_mssql_managed_database")
        .with_description("Manages an Azure SQL Azure Managed Database.")
        .attribute(
            AttributeSchema::new(
                "name",
                types::validated_string("DatabaseName", validate::sql_database_name),
            )
            .required()
            .force_new()
            .with_description("The name of the Managed Database to create."),
        )
        .attribute(
            AttributeSchema::new(
                "managed_instance_id",
                types::resource_id("SQL Managed Instance", SqlManagedInstanceId::validate),
            )
            .required()
            .force_new()
            .with_description("The ID of the Azure SQL Managed Instance on which to create this Managed Database."),
        )
        .attribute(
            AttributeSchema::new("collation", AttributeType::String)
                .force_new()
                .with_default(Value::String("SQL_Latin1_General_CP1_CI_AS".to_string()))
                .with_provider_name("properties.collation"),
        )
        .attribute(
            AttributeSchema::new("status", AttributeType::String)
                .computed()
                .with_provider_name("properties.status"),
        )
}
