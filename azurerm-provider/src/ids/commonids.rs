//! Subscription and resource group scoped identifiers shared by every service

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a subscription
    pub struct SubscriptionId("subscription", "Subscription") {
        "subscriptions", subscription_id: "subscriptionId",
    }
}

define_resource_id! {
    /// Identifier of a resource group
    pub struct ResourceGroupId("resource_group", "Resource Group") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
    }
}

impl SubscriptionId {
    pub fn resource_group_id(&self, resource_group_name: impl Into<String>) -> ResourceGroupId {
        ResourceGroupId::new(self.subscription_id.clone(), resource_group_name)
    }
}

impl ResourceGroupId {
    pub fn subscription_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.subscription_id.clone())
    }
}
