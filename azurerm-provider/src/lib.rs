//! AzureRM Provider
//!
//! Azure Resource Manager provider implementation.
//!
//! ## Module Structure
//!
//! - `ids` - Typed resource identifiers and the grammar registry
//! - `resources` - Resource type definitions and their identifier bindings
//! - `provider` - AzurermProvider implementation
//! - `client` - Management API boundary and the in-memory client
//! - `config` - Subscription and cloud environment settings
//! - `services` - Service registrations
//! - `validate` - Name validators shared by resource schemas
//! - `utils` - Helper functions for body mapping and normalization

pub mod client;
pub mod config;
pub mod ids;
pub mod provider;
pub mod resources;
pub mod services;
pub mod utils;
pub mod validate;

// Re-export main types
pub use client::{ClientError, InMemoryClient, ManagementClient};
pub use config::{ConfigError, Environment, ProviderConfig};
pub use ids::registry;
pub use provider::AzurermProvider;
pub use utils::normalize_location;

use azurerm_core::provider::{BoxFuture, Provider, ProviderResult};
use azurerm_core::resource::{Resource, ResourceAddress, State};

use resources::resource_types;

// =============================================================================
// Provider Trait Implementation
// =============================================================================

impl Provider for AzurermProvider {
    fn name(&self) -> &'static str {
        "azurerm"
    }

    fn resource_types(&self) -> Vec<Box<dyn azurerm_core::provider::ResourceType>> {
        resource_types()
    }

    fn read(
        &self,
        address: &ResourceAddress,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let address = address.clone();
        let identifier = identifier.map(|s| s.to_string());
        Box::pin(async move { self.read_resource(&address, identifier.as_deref()).await })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move { self.create_resource(resource).await })
    }

    fn update(
        &self,
        address: &ResourceAddress,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let address = address.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move {
            self.update_resource(&address, &identifier, &from, to)
                .await
        })
    }

    fn delete(
        &self,
        address: &ResourceAddress,
        identifier: &str,
    ) -> BoxFuture<'_, ProviderResult<()>> {
        let address = address.clone();
        let identifier = identifier.to_string();
        Box::pin(async move { self.delete_resource(&address, &identifier).await })
    }
}
