//! Microsoft.DocumentDB identifiers

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a Cosmos DB account
    pub struct CosmosDbAccountId("cosmosdb_account", "Database Account") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.DocumentDB",
        "databaseAccounts", database_account_name: "databaseAccountName",
    }
}

define_resource_id! {
    /// Identifier of a SQL API database in a Cosmos DB account
    pub struct CosmosSqlDatabaseId("cosmosdb_sql_database", "Sql Database") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.DocumentDB",
        "databaseAccounts", database_account_name: "databaseAccountName",
        "sqlDatabases", sql_database_name: "sqlDatabaseName",
    }
}

impl CosmosDbAccountId {
    pub fn sql_database_id(&self, sql_database_name: impl Into<String>) -> CosmosSqlDatabaseId {
        CosmosSqlDatabaseId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.database_account_name.clone(),
            sql_database_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_database_under_account() {
        let account = CosmosDbAccountId::new("0000", "rg1", "acc1");
        let database = account.sql_database_id("db1");
        let parsed = CosmosSqlDatabaseId::parse(
            "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.DocumentDB/databaseAccounts/acc1/sqlDatabases/db1",
        )
        .unwrap();
        assert_eq!(parsed, database);
    }

    #[test]
    fn document_db_casing_is_enforced() {
        let input = "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.DocumentDb/databaseAccounts/acc1";
        assert!(CosmosDbAccountId::parse(input).unwrap_err().is_literal_mismatch());
    }
}
