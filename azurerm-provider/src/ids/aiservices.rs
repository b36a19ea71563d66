//! Identifiers for AI Services accounts and the hub/project workspaces built on them

use azurerm_core::define_resource_id;

define_resource_id! {
    /// Identifier of a Cognitive Services account (AI Services)
    pub struct CognitiveAccountId("cognitive_account", "Account") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.CognitiveServices",
        "accounts", account_name: "accountName",
    }
}

define_resource_id! {
    /// Identifier of a Machine Learning workspace (AI hub or project)
    pub struct MachineLearningWorkspaceId("machine_learning_workspace", "Workspace") {
        "subscriptions", subscription_id: "subscriptionId",
        "resourceGroups", resource_group_name: "resourceGroupName",
        "providers", "Microsoft.MachineLearningServices",
        "workspaces", workspace_name: "workspaceName",
    }
}
