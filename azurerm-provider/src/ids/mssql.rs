//! Microsoft.Sql identifiers: servers, databases and managed instances

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a SQL server
    pub struct SqlServerId("sql_server", "SQL Server") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Sql",
        "servers", server_name: "serverName",
    }
}

define_resource_id! {
    /// Identifier of a database on a SQL server
    pub struct SqlDatabaseId("sql_database", "SQL Database") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Sql",
        "servers", server_name: "serverName",
        "databases", database_name: "databaseName",
    }
}

define_resource_id! {
    /// Identifier of a recoverable (geo-backup) database on a SQL server
    pub struct MsSqlRecoverableDatabaseId("mssql_recoverable_database", "Recoverable Database") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group: "resourceGroup",
        "providers", "Microsoft.Sql",
        "servers", ms_sql_server: "msSqlServer",
        "recoverabledatabases", name: "name",
    }
}

define_resource_id! {
    /// Identifier of a SQL managed instance
    pub struct SqlManagedInstanceId("sql_managed_instance", "SQL Managed Instance") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Sql",
        "managedInstances", managed_instance_name: "managedInstanceName",
    }
}

define_resource_id! {
    /// Identifier of a database on a SQL managed instance
    pub struct SqlManagedDatabaseId("sql_managed_database", "Managed Database") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.Sql",
        "managedInstances", managed_instance_name: "managedInstanceName",
        "databases", database_name: "databaseName",
    }
}

impl SqlServerId {
    pub fn database_id(&self, database_name: impl Into<String>) -> SqlDatabaseId {
        SqlDatabaseId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.server_name.clone(),
            database_name,
        )
    }
}

impl SqlDatabaseId {
    pub fn server_id(&self) -> SqlServerId {
        SqlServerId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.server_name.clone(),
        )
    }
}

impl MsSqlRecoverableDatabaseId {
    pub fn server_id(&self) -> SqlServerId {
        SqlServerId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.ms_sql_server.clone(),
        )
    }
}

impl SqlManagedInstanceId {
    pub fn database_id(&self, database_name: impl Into<String>) -> SqlManagedDatabaseId {
        SqlManagedDatabaseId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.managed_instance_name.clone(),
            database_name,
        )
    }
}

impl SqlManagedDatabaseId {
    pub fn managed_instance_id(&self) -> SqlManagedInstanceId {
        SqlManagedInstanceId::new(
            self.subscription_id.clone(),
            self.resource_group_name.clone(),
            self.managed_instance_name.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azurerm_core::resource_id::ParseErrorReason;

    const VALID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/sqlServer1/recoverabledatabases/sqlDB1";

    fn reason(input: &str) -> Option<ParseErrorReason> {
        MsSqlRecoverableDatabaseId::parse(input).err().map(|e| e.reason)
    }

    #[test]
    fn recoverable_database_id() {
        let id = MsSqlRecoverableDatabaseId::parse(VALID).unwrap();
        assert_eq!(id.name, "sqlDB1");
        assert_eq!(id.ms_sql_server, "sqlServer1");
        assert_eq!(id.resource_group, "resGroup1");
        assert_eq!(id.id(), VALID);
    }

    #[test]
    fn recoverable_database_table() {
        let cases: &[(&str, &str, Option<ParseErrorReason>)] = &[
            ("Empty", "", Some(ParseErrorReason::EmptyInput)),
            (
                "No Resource Groups Segment",
                "/subscriptions/00000000-0000-0000-0000-000000000000",
                Some(ParseErrorReason::MissingSegment),
            ),
            (
                "No Resource Groups Value",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/",
                Some(ParseErrorReason::EmptyValueSegment),
            ),
            (
                "Resource Group ID",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/foo/",
                Some(ParseErrorReason::MissingSegment),
            ),
            (
                "Missing Sql Server Value",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/",
                Some(ParseErrorReason::EmptyValueSegment),
            ),
            (
                "Missing Sql Recoverable Database",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/sqlServer1",
                Some(ParseErrorReason::MissingSegment),
            ),
            (
                "Missing Sql Recoverable Database Value",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/sqlServer1/recoverabledatabases",
                Some(ParseErrorReason::MissingSegment),
            ),
            ("Sql Database ID", VALID, None),
            (
                "Wrong Casing",
                "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/sqlServer1/Recoverabledatabases/sqlDB1",
                Some(ParseErrorReason::LiteralMismatch {
                    found: "Recoverabledatabases".to_string(),
                }),
            ),
        ];

        for (name, input, expected) in cases {
            assert_eq!(&reason(input), expected, "case {:?}", name);
        }
    }

    #[test]
    fn database_is_not_a_recoverable_database() {
        let database = VALID.replace("recoverabledatabases", "databases");
        assert!(SqlDatabaseId::parse(&database).is_ok());
        assert!(matches!(
            reason(&database),
            Some(ParseErrorReason::LiteralMismatch { .. })
        ));
    }

    #[test]
    fn parent_navigation() {
        let id = MsSqlRecoverableDatabaseId::parse(VALID).unwrap();
        let server = id.server_id();
        assert_eq!(
            server.id(),
            "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Sql/servers/sqlServer1"
        );
        assert_eq!(server.database_id("db2").server_id(), server);
    }

    #[test]
    fn managed_database_under_instance() {
        let instance = SqlManagedInstanceId::new("0000", "rg", "mi1");
        let database = instance.database_id("db1");
        assert_eq!(
            database.id(),
            "/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Sql/managedInstances/mi1/databases/db1"
        );
        assert_eq!(database.managed_instance_id(), instance);
    }
}
