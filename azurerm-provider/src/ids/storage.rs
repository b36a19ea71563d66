//! Microsoft.Storage identifiers
//!
//! The blob service of an account always has the fixed name `default`; it is
//! a separate grammar rather than an optional suffix of the account ID.

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a storage account
    pub struct StorageAccountId("storage_account", "Storage Account") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Storage",
        "storageAccounts", storage_account_name: "storageAccountName",
    }
}

define_resource_id! {
    /// Identifier of the blob service of a storage account
    pub struct BlobServiceId("storage_blob_service", "Blob Service") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Storage",
        "storageAccounts", storage_account_name: "storageAccountName",
        "blobServices", "default",
    }
}

impl StorageAccountId {
    pub fn blob_service_id(&self) -> BlobServiceId {
        BlobServiceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.storage_account_name.clone(),
        )
    }
}

impl BlobServiceId {
    pub fn storage_account_id(&self) -> StorageAccountId {
        StorageAccountId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.storage_account_name.clone(),
        )
    }
}
