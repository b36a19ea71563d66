//! Provider - Trait abstracting resource lifecycle operations
//!
//! A Provider maps configured resources onto create/read/update/delete calls
//! against a management API. Every operation on an existing resource receives
//! the canonical resource ID that was stored after creation.

use std::future::Future;
use std::pin::Pin;

use crate::resource::{Resource, ResourceAddress, State};
use crate::resource_id::MalformedIdentifierError;
use crate::schema::ResourceSchema;

/// Error type for Provider operations
#[derive(Debug)]
pub struct ProviderError {
    pub message: String,
    pub address: Option<ResourceAddress>,
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref address) = self.address {
            write!(f, "[{}] {}", address, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            address: None,
            cause: None,
        }
    }

    /// The resource already exists remotely and must be imported first
    pub fn requires_import(resource_type: &str, id: &str) -> Self {
        Self::new(format!(
            "A resource with the ID {:?} already exists - to be managed via Terraform this resource needs to be imported into the State. Please see the resource documentation for {:?} for more information.",
            id, resource_type
        ))
    }

    pub fn for_resource(mut self, address: ResourceAddress) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl From<MalformedIdentifierError> for ProviderError {
    fn from(e: MalformedIdentifierError) -> Self {
        ProviderError::new(e.to_string()).with_cause(e)
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Return type for async operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Definition of resource types that a Provider can handle
pub trait ResourceType: Send + Sync {
    /// Resource type name (e.g., "azurerm_cdn_endpoint")
    fn name(&self) -> &'static str;

    /// Attribute schema for this resource type
    fn schema(&self) -> ResourceSchema;
}

/// Main Provider trait
///
/// All operations are async and involve side effects.
pub trait Provider: Send + Sync {
    /// Name of this Provider (e.g., "azurerm")
    fn name(&self) -> &'static str;

    /// List of resource types this Provider can handle
    fn resource_types(&self) -> Vec<Box<dyn ResourceType>>;

    /// Get the current state of a resource
    ///
    /// Without an identifier the resource has never been created and
    /// `State::not_found()` is returned. The same applies when the
    /// management API no longer knows the identifier.
    fn read(
        &self,
        address: &ResourceAddress,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>>;

    /// Create a resource
    ///
    /// Returns State with identifier set to the canonical resource ID
    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>>;

    /// Update a resource in place
    fn update(
        &self,
        address: &ResourceAddress,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>>;

    /// Delete a resource
    fn delete(&self, address: &ResourceAddress, identifier: &str)
    -> BoxFuture<'_, ProviderResult<()>>;
}

/// Provider implementation for Box<dyn Provider>
/// This enables dynamic dispatch for Providers
impl Provider for Box<dyn Provider> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
        (**self).resource_types()
    }

    fn read(
        &self,
        address: &ResourceAddress,
        identifier: Option<&str>,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).read(address, identifier)
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).create(resource)
    }

    fn update(
        &self,
        address: &ResourceAddress,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        (**self).update(address, identifier, from, to)
    }

    fn delete(
        &self,
        address: &ResourceAddress,
        identifier: &str,
    ) -> BoxFuture<'_, ProviderResult<()>> {
        (**self).delete(address, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_id::ParseErrorReason;

    // Mock Provider for testing
    struct MockProvider;

    impl Provider for MockProvider {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn resource_types(&self) -> Vec<Box<dyn ResourceType>> {
            vec![]
        }

        fn read(
            &self,
            address: &ResourceAddress,
            _identifier: Option<&str>,
        ) -> BoxFuture<'_, ProviderResult<State>> {
            let address = address.clone();
            Box::pin(async move { Ok(State::not_found(address)) })
        }

        fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
            let address = resource.address.clone();
            let attrs = resource.attributes.clone();
            Box::pin(async move {
                Ok(State::existing(address, attrs).with_identifier("/subscriptions/mock"))
            })
        }

        fn update(
            &self,
            address: &ResourceAddress,
            _identifier: &str,
            _from: &State,
            to: &Resource,
        ) -> BoxFuture<'_, ProviderResult<State>> {
            let address = address.clone();
            let attrs = to.attributes.clone();
            Box::pin(async move { Ok(State::existing(address, attrs)) })
        }

        fn delete(
            &self,
            _address: &ResourceAddress,
            _identifier: &str,
        ) -> BoxFuture<'_, ProviderResult<()>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[tokio::test]
    async fn mock_provider_read_returns_not_found() {
        let provider: Box<dyn Provider> = Box::new(MockProvider);
        let address = ResourceAddress::new("test", "example");
        let state = provider.read(&address, None).await.unwrap();
        assert!(!state.exists);
    }

    #[tokio::test]
    async fn mock_provider_create_returns_existing() {
        let provider = MockProvider;
        let resource = Resource::new("test", "example");
        let state = provider.create(&resource).await.unwrap();
        assert!(state.exists);
        assert_eq!(state.identifier, Some("/subscriptions/mock".to_string()));
    }

    #[test]
    fn error_display_includes_address() {
        let error = ProviderError::new("boom")
            .for_resource(ResourceAddress::new("azurerm_cdn_endpoint", "main"));
        assert_eq!(error.to_string(), "[azurerm_cdn_endpoint.main] boom");
    }

    #[test]
    fn requires_import_message() {
        let error = ProviderError::requires_import("azurerm_cdn_endpoint", "/subscriptions/0000");
        assert!(error.message.starts_with(
            "A resource with the ID \"/subscriptions/0000\" already exists"
        ));
    }

    #[test]
    fn malformed_identifier_is_kept_as_cause() {
        let malformed = MalformedIdentifierError::new(
            "",
            "Endpoint",
            "subscriptions",
            ParseErrorReason::EmptyInput,
        );
        let error = ProviderError::from(malformed);
        assert!(error.message.contains("empty input"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
