//! azurerm_eventhub_consumer_group

use azurerm_core::schema::{AttributeSchema, ResourceSchema, types};

use super::{IdSource, ResourceDefinition, resource_group_name};
use crate::ids::ConsumergroupId;
use crate::validate;

pub static DEFINITION: ResourceDefinition = ResourceDefinition {
    type_name: "azurerm_eventhub_consumer_group",
    grammar: ConsumergroupId::grammar,
    id_bindings: &[
        ("subscriptionId", IdSource::Subscription),
        ("resourceGroupName", IdSource::Attribute("resource_group_name")),
        ("namespaceName", IdSource::Attribute("namespace_name")),
        ("eventhubName", IdSource::Attribute("eventhub_name")),
        ("consumerGroupName", IdSource::Attribute("name")),
    ],
    api_version: "2017-04-01",
    fixed_properties: &[],
    required_model_paths: &[],
    schema,
};

fn schema() -> ResourceSchema {
    ResourceSchema::new("azurerm_eventhub_consumer_group")
        .with_description("Manages an Event Hubs Consumer Group as a nested resource within an Event Hub.")
        .attribute(
            AttributeSchema::new(
                "name",
                types::validated_string("ConsumerGroupName", validate::eventhub_consumer_group_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the EventHub Consumer Group resource."),
        )
        .attribute(
            AttributeSchema::new(
                "namespace_name",
                types::validated_string("NamespaceName", validate::eventhub_namespace_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the grandparent EventHub Namespace."),
        )
        .attribute(
            AttributeSchema::new(
                "eventhub_name",
                types::validated_string("EventhubName", validate::eventhub_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the EventHub."),
        )
        .attribute(resource_group_name())
        .attribute(
            AttributeSchema::new(
                "user_metadata",
                types::validated_string("UserMetadata", validate::user_metadata),
            )
            .with_description("Specifies the user metadata.")
            .with_provider_name("properties.userMetadata"),
        )
}
