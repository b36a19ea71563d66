//! azurerm_cdn_endpoint

use azurerm_core::resource::Value;
use azurerm_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use super::{IdSource, ResourceDefinition, location, resource_group_name, tags};
use crate::ids::CdnEndpointId;
use crate::validate;

pub static DEFINITION: ResourceDefinition = ResourceDefinition {
    type_name: "azurerm_cdn_endpoint",
    grammar: CdnEndpointId::grammar,
    id_bindings: &[
        ("subscriptionId", IdSource::Subscription),
        ("resourceGroupName", IdSource::Attribute("resource_group_name")),
        ("profileName", IdSource::Attribute("profile_name")),
        ("endpointName", IdSource::Attribute("name")),
    ],
    api_version: "2020-09-01",
    fixed_properties: &[],
    required_model_paths: &["properties"],
    schema,
};

const QUERYSTRING_CACHING_BEHAVIOURS: &[&str] = &[
    "BypassCaching",
    "IgnoreQueryString",
    "NotSet",
    "UseQueryString",
];

const OPTIMIZATION_TYPES: &[&str] = &[
    "DynamicSiteAcceleration",
    "GeneralMediaStreaming",
    "GeneralWebDelivery",
    "LargeFileDownload",
    "VideoOnDemandMediaStreaming",
];

fn enum_of(values: &[&str]) -> AttributeType {
    AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
}

fn schema() -> ResourceSchema {
    ResourceSchema::new("azurerm_cdn_endpoint")
        .with_description("A CDN Endpoint is the entity within a CDN Profile containing configuration information regarding caching behaviours and origins.")
        .attribute(
            AttributeSchema::new(
                "name",
                types::validated_string("EndpointName", validate::cdn_endpoint_name),
            )
            .required()
            .force_new()
            .with_description("Specifies the name of the CDN Endpoint."),
        )
        .attribute(location())
        .attribute(resource_group_name())
        .attribute(
            AttributeSchema::new(
                "profile_name",
                types::validated_string("ProfileName", validate::cdn_profile_name),
            )
                .required()
                .force_new()
                .with_description("The CDN Profile to which to attach the CDN Endpoint."),
        )
        .attribute(
            AttributeSchema::new("origin_host_header", AttributeType::String)
                .with_description("The host header CDN provider will send along with content requests to origins.")
                .with_provider_name("properties.originHostHeader"),
        )
        .attribute(
            AttributeSchema::new("is_http_allowed", AttributeType::Bool)
                .with_default(Value::Bool(true))
                .with_provider_name("properties.isHttpAllowed"),
        )
        .attribute(
            AttributeSchema::new("is_https_allowed", AttributeType::Bool)
                .with_default(Value::Bool(true))
                .with_provider_name("properties.isHttpsAllowed"),
        )
        .attribute(
            AttributeSchema::new("origin_path", AttributeType::String)
                .with_description("The path used at for origin requests.")
                .with_provider_name("properties.originPath"),
        )
        .attribute(
            AttributeSchema::new("querystring_caching_behaviour", enum_of(QUERYSTRING_CACHING_BEHAVIOURS))
                .with_default(Value::String("IgnoreQueryString".to_string()))
                .with_provider_name("properties.queryStringCachingBehavior"),
        )
        .attribute(
            AttributeSchema::new("is_compression_enabled", AttributeType::Bool)
                .with_provider_name("properties.isCompressionEnabled"),
        )
        .attribute(
            AttributeSchema::new(
                "content_types_to_compress",
                AttributeType::List(Box::new(AttributeType::String)),
            )
            .with_provider_name("properties.contentTypesToCompress"),
        )
        .attribute(
            AttributeSchema::new("probe_path", AttributeType::String)
                .with_provider_name("properties.probePath"),
        )
        .attribute(
            AttributeSchema::new("optimization_type", enum_of(OPTIMIZATION_TYPES))
                .with_provider_name("properties.optimizationType"),
        )
        .attribute(
            AttributeSchema::new("fqdn", AttributeType::String)
                .computed()
                .with_description("The Fully Qualified Domain Name of the CDN Endpoint.")
                .with_provider_name("properties.hostName"),
        )
        .attribute(tags())
}
