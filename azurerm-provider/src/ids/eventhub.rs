//! Microsoft.EventHub identifiers

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of an Event Hubs namespace
    pub struct EventhubNamespaceId("eventhub_namespace", "Namespace") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.EventHub",
        "namespaces", namespace_name: "namespaceName",
    }
}

define_resource_id! {
    /// Identifier of an Event Hub
    pub struct EventhubId("eventhub", "Eventhub") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.EventHub",
        "namespaces", namespace_name: "namespaceName",
        "eventhubs", eventhub_name: "eventhubName",
    }
}

define_resource_id! {
    /// Identifier of an Event Hub consumer group
    pub struct ConsumergroupId("eventhub_consumer_group", "Consumergroup") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.EventHub",
        "namespaces", namespace_name: "namespaceName",
        "eventhubs", eventhub_name: "eventhubName",
        "consumergroups", consumer_group_name: "consumerGroupName",
    }
}

impl EventhubNamespaceId {
    pub fn eventhub_id(&self, eventhub_name: impl Into<String>) -> EventhubId {
        EventhubId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.namespace_name.clone(),
            eventhub_name,
        )
    }
}

impl EventhubId {
    pub fn namespace_id(&self) -> EventhubNamespaceId {
        EventhubNamespaceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.namespace_name.clone(),
        )
    }

    pub fn consumergroup_id(&self, consumer_group_name: impl Into<String>) -> ConsumergroupId {
        ConsumergroupId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.namespace_name.clone(),
            self.eventhub_name.clone(),
            consumer_group_name,
        )
    }
}

impl ConsumergroupId {
    pub fn eventhub_id(&self) -> EventhubId {
        EventhubId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.namespace_name.clone(),
            self.eventhub_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSUMER_GROUP: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.EventHub/namespaces/namespaceValue/eventhubs/eventhubValue/consumergroups/consumerGroupValue";

    #[test]
    fn consumer_group_round_trip() {
        let id = ConsumergroupId::parse(CONSUMER_GROUP).unwrap();
        assert_eq!(id.namespace_name, "namespaceValue");
        assert_eq!(id.eventhub_name, "eventhubValue");
        assert_eq!(id.consumer_group_name, "consumerGroupValue");
        assert_eq!(id.to_string(), CONSUMER_GROUP);
    }

    #[test]
    fn provider_namespace_casing_is_enforced() {
        let input = CONSUMER_GROUP.replace("Microsoft.EventHub", "microsoft.eventhub");
        let err = ConsumergroupId::parse(&input).unwrap_err();
        assert!(err.is_literal_mismatch());
        assert_eq!(err.expected, "Microsoft.EventHub");
    }

    #[test]
    fn navigation_between_levels() {
        let id = ConsumergroupId::parse(CONSUMER_GROUP).unwrap();
        let hub = id.eventhub_id();
        assert_eq!(hub.consumergroup_id("consumerGroupValue"), id);
        assert_eq!(
            hub.namespace_id().id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.EventHub/namespaces/namespaceValue"
        );
    }

    #[test]
    fn describe_for_messages() {
        let id = ConsumergroupId::new("sub", "rg", "ns", "hub", "cg");
        assert_eq!(
            id.describe(),
            "Consumergroup (Subscription: \"sub\" / Resource Group Name: \"rg\" / Namespace Name: \"ns\" / Eventhub Name: \"hub\" / Consumer Group Name: \"cg\")"
        );
    }
}
