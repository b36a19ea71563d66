//! Typed resource identifiers for each supported service
//!
//! Every identifier type is declared with `define_resource_id!` and its grammar
//! is listed in the static [`registry`], which the CLI and the resource
//! definitions look grammars up from.

pub mod aiservices;
pub mod cdn;
pub mod commonids;
pub mod cosmosdb;
pub mod eventhub;
pub mod mssql;
pub mod storage;

use std::sync::LazyLock;

use azurerm_core::resource_id::Registry;

pub use aiservices::{CognitiveAccountId, MachineLearningWorkspaceId};
pub use cdn::{CdnEndpointId, CdnOriginId, CdnProfileId};
pub use commonids::{ResourceGroupId, SubscriptionId};
pub use cosmosdb::{CosmosDbAccountId, CosmosSqlDatabaseId};
pub use eventhub::{ConsumergroupId, EventhubId, EventhubNamespaceId};
pub use mssql::{
    MsSqlRecoverableDatabaseId, SqlDatabaseId, SqlManagedDatabaseId, SqlManagedInstanceId,
    SqlServerId,
};
pub use storage::{BlobServiceId, StorageAccountId};

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new([
        SubscriptionId::grammar(),
        ResourceGroupId::grammar(),
        SqlServerId::grammar(),
        SqlDatabaseId::grammar(),
        MsSqlRecoverableDatabaseId::grammar(),
        SqlManagedInstanceId::grammar(),
        SqlManagedDatabaseId::grammar(),
        EventhubNamespaceId::grammar(),
        EventhubId::grammar(),
        ConsumergroupId::grammar(),
        CdnProfileId::grammar(),
        CdnEndpointId::grammar(),
        CdnOriginId::grammar(),
        StorageAccountId::grammar(),
        BlobServiceId::grammar(),
        CosmosDbAccountId::grammar(),
        CosmosSqlDatabaseId::grammar(),
        CognitiveAccountId::grammar(),
        MachineLearningWorkspaceId::grammar(),
    ])
});

/// All identifier grammars known to this provider
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use azurerm_core::resource_id::{Identifier, format, parse};
    use proptest::prelude::*;

    #[test]
    fn every_grammar_is_well_formed() {
        assert_eq!(registry().validate(), Ok(()));
    }

    #[test]
    fn grammar_names_are_unique() {
        assert_eq!(registry().len(), 19);
    }

    #[test]
    fn detect_finds_single_grammar() {
        let input = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Cdn/profiles/p1/endpoints/e1";
        let found = registry().detect(input);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].grammar().name(), "cdn_endpoint");
    }

    #[test]
    fn detect_distinguishes_blob_service_from_account() {
        let account = StorageAccountId::new("0000", "rg1", "acc1");
        let found = registry().detect(&account.blob_service_id().id());
        let names: Vec<_> = found.iter().map(|id| id.grammar().name()).collect();
        assert_eq!(names, vec!["storage_blob_service"]);
    }

    #[test]
    fn recoverable_and_sql_database_do_not_overlap() {
        let id = MsSqlRecoverableDatabaseId::new("0000", "rg1", "server1", "db1");
        let names: Vec<_> = registry()
            .detect(&id.id())
            .iter()
            .map(|id| id.grammar().name())
            .collect();
        assert_eq!(names, vec!["mssql_recoverable_database"]);
    }

    fn value_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9._ -]{0,20}"
    }

    proptest! {
        #[test]
        fn every_grammar_round_trips(
            values in proptest::collection::vec(value_strategy(), 8),
        ) {
            for grammar in registry().iter() {
                let id = Identifier::from_values(grammar, values.iter().cloned());
                let rendered = format(&id);
                let parsed = parse(&rendered, grammar).unwrap();
                prop_assert_eq!(parsed.fields(), id.fields());
                prop_assert_eq!(format(&parsed), rendered);
            }
        }
    }
}
