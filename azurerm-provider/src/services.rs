//! Service registrations
//!
//! Groups resource types by the Azure service they belong to, along with the
//! label used for issues and the documentation categories.

use crate::resources::{
    ResourceDefinition, ai_services, cdn_endpoint, eventhub_consumer_group,
    mssql_managed_database, storage_account,
};

pub struct ServiceRegistration {
    pub name: &'static str,
    pub github_label: &'static str,
    pub website_categories: &'static [&'static str],
    pub resources: &'static [&'static ResourceDefinition],
}

static REGISTRATIONS: &[ServiceRegistration] = &[
    ServiceRegistration {
        name: "AI Services",
        github_label: "service/ai-services",
        website_categories: &["AI Services"],
        resources: &[&ai_services::DEFINITION],
    },
    ServiceRegistration {
        name: "CDN",
        github_label: "service/cdn",
        website_categories: &["CDN"],
        resources: &[&cdn_endpoint::DEFINITION],
    },
    ServiceRegistration {
        name: "EventHub",
        github_label: "service/event-hubs",
        website_categories: &["Messaging"],
        resources: &[&eventhub_consumer_group::DEFINITION],
    },
    ServiceRegistration {
        name: "Microsoft SQL Server / Azure SQL",
        github_label: "service/mssql",
        website_categories: &["Database"],
        resources: &[&mssql_managed_database::DEFINITION],
    },
    ServiceRegistration {
        name: "Storage",
        github_label: "service/storage",
        website_categories: &["Storage"],
        resources: &[&storage_account::DEFINITION],
    },
];

pub fn registrations() -> &'static [ServiceRegistration] {
    REGISTRATIONS
}

/// Service a resource type is registered under
pub fn service_for(resource_type: &str) -> Option<&'static ServiceRegistration> {
    REGISTRATIONS
        .iter()
        .find(|s| s.resources.iter().any(|r| r.type_name == resource_type))
}
