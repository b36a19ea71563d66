//! Resource - Configured resources and their observed state

use std::collections::HashMap;

/// Address of a resource in configuration (e.g. `azurerm_cdn_endpoint.main`)
///
/// This is the configuration-side name. The cloud-side identifier is the
/// canonical resource ID stored in [`State::identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceAddress {
    /// Resource type (e.g., "azurerm_cdn_endpoint")
    pub resource_type: String,
    /// Name given to the resource in configuration
    pub name: String,
}

impl ResourceAddress {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

/// Attribute value of a resource
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

/// Desired state declared in configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub address: ResourceAddress,
    pub attributes: HashMap<String, Value>,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: ResourceAddress::new(resource_type, name),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// String attribute, if set
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// Current state fetched from the management API
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub address: ResourceAddress,
    /// Canonical resource ID (e.g. `/subscriptions/.../providers/Microsoft.Cdn/profiles/p1`)
    pub identifier: Option<String>,
    pub attributes: HashMap<String, Value>,
    /// Whether this state exists
    pub exists: bool,
}

impl State {
    pub fn not_found(address: ResourceAddress) -> Self {
        Self {
            address,
            identifier: None,
            attributes: HashMap::new(),
            exists: false,
        }
    }

    pub fn existing(address: ResourceAddress, attributes: HashMap<String, Value>) -> Self {
        Self {
            address,
            identifier: None,
            attributes,
            exists: true,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_display() {
        let address = ResourceAddress::new("azurerm_cdn_endpoint", "main");
        assert_eq!(address.to_string(), "azurerm_cdn_endpoint.main");
    }

    #[test]
    fn resource_builder() {
        let resource = Resource::new("azurerm_eventhub_consumer_group", "audit")
            .with_attribute("name", "audit")
            .with_attribute("enabled", true);
        assert_eq!(resource.get_str("name"), Some("audit"));
        assert_eq!(resource.get_str("enabled"), None);
        assert_eq!(
            resource.attributes.get("enabled").and_then(Value::as_bool),
            Some(true)
        );
    }

    #[test]
    fn state_with_identifier() {
        let state = State::existing(ResourceAddress::new("t", "n"), HashMap::new())
            .with_identifier("/subscriptions/0000");
        assert!(state.exists);
        assert_eq!(state.identifier.as_deref(), Some("/subscriptions/0000"));

        let missing = State::not_found(ResourceAddress::new("t", "n"));
        assert!(!missing.exists);
        assert!(missing.identifier.is_none());
    }
}
