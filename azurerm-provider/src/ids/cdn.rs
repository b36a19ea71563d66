//! Microsoft.Cdn identifiers

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a CDN profile
    pub struct CdnProfileId("cdn_profile", "Profile") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Cdn",
        "profiles", profile_name: "profileName",
    }
}

define_resource_id! {
    /// Identifier of a CDN endpoint
    pub struct CdnEndpointId("cdn_endpoint", "Endpoint") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Cdn",
        "profiles", profile_name: "profileName",
        "endpoints", endpoint_name: "endpointName",
    }
}

define_resource_id! {
    /// Identifier of an origin of a CDN endpoint
    pub struct CdnOriginId("cdn_origin", "Origin") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Cdn",
        "profiles", profile_name: "profileName",
        "endpoints", endpoint_name: "endpointName",
        "origins", origin_name: "originName",
    }
}

impl CdnProfileId {
    pub fn endpoint_id(&self, endpoint_name: impl Into<String>) -> CdnEndpointId {
        CdnEndpointId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
            endpoint_name,
        )
    }
}

impl CdnEndpointId {
    pub fn profile_id(&self) -> CdnProfileId {
        CdnProfileId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
        )
    }

    pub fn origin_id(&self, origin_name: impl Into<String>) -> CdnOriginId {
        CdnOriginId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
            self.endpoint_name.clone(),
            origin_name,
        )
    }
}

impl CdnOriginId {
    pub fn endpoint_id(&self) -> CdnEndpointId {
        CdnEndpointId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.profile_name.clone(),
            self.endpoint_name.clone(),
        )
    }
}
