//! AzureRM Core
//!
//! Core library for the AzureRM provider: resource identifiers, resource
//! schemas and the provider trait that maps configuration onto lifecycle calls.

pub mod provider;
pub mod resource;
pub mod resource_id;
pub mod schema;

#[doc(hidden)]
pub use serde as __serde;
