//! Name validators used by resource schemas
//!
//! Each validator has the `ValidateFn` signature so it can be plugged into
//! `types::validated_string`.

use std::sync::LazyLock;

use azurerm_core::resource::Value;
use regex::Regex;

static CONSUMER_GROUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-._a-zA-Z0-9]{0,48}[a-zA-Z0-9])?$")
        .expect("consumer group name pattern is valid")
});

static NAMESPACE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][-a-zA-Z0-9]{4,48}[a-zA-Z0-9]$").expect("namespace name pattern is valid")
});

static EVENTHUB_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-._a-zA-Z0-9]{0,254}[a-zA-Z0-9])?$")
        .expect("eventhub name pattern is valid")
});

static RESOURCE_GROUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-\w._()]+$").expect("resource group name pattern is valid")
});

static CDN_ENDPOINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-a-zA-Z0-9]{0,48}[a-zA-Z0-9])?$")
        .expect("cdn endpoint name pattern is valid")
});

static CDN_PROFILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-a-zA-Z0-9]{0,258}[a-zA-Z0-9])?$")
        .expect("cdn profile name pattern is valid")
});

static COGNITIVE_ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_.-]{1,63}$")
        .expect("cognitive account name pattern is valid")
});

static STORAGE_ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]{3,24}$").expect("storage account name pattern is valid")
});

static SQL_DATABASE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^<>*%&:\\/?]{1,128}$").expect("sql database name pattern is valid")
});

/// Name of the consumer group every event hub is created with
const DEFAULT_CONSUMER_GROUP: &str = "$Default";

fn expect_string<'a>(value: &'a Value, what: &str) -> Result<&'a str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("{} must be a string", what))
}

/// Check that a string is between `min` and `max` characters long, inclusive
pub fn string_len_between(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = s.chars().count();
    if len < min || len > max {
        return Err(format!(
            "expected length to be in the range ({} - {}), got {}",
            min, max, len
        ));
    }
    Ok(())
}

pub fn eventhub_consumer_group_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "consumer group name")?;
    if name == DEFAULT_CONSUMER_GROUP || CONSUMER_GROUP_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the consumer group name can contain only letters, numbers, periods, hyphens and underscores, must start and end with a letter or number and be at most 50 characters",
            name
        ))
    }
}

pub fn eventhub_namespace_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "namespace name")?;
    if NAMESPACE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the namespace name can contain only letters, numbers and hyphens, must start with a letter, end with a letter or number and be between 6 and 50 characters",
            name
        ))
    }
}

pub fn eventhub_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "eventhub name")?;
    if EVENTHUB_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the eventhub name can contain only letters, numbers, periods, hyphens and underscores, must start and end with a letter or number and be at most 256 characters",
            name
        ))
    }
}

pub fn resource_group_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "resource group name")?;
    string_len_between(name, 1, 90)?;
    if name.ends_with('.') {
        return Err(format!("{:?}: resource group names cannot end with a period", name));
    }
    if !RESOURCE_GROUP_NAME.is_match(name) {
        return Err(format!(
            "{:?}: resource group names may only contain alphanumeric characters, dashes, underscores, parentheses and periods",
            name
        ));
    }
    Ok(())
}

pub fn cdn_endpoint_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "endpoint name")?;
    if CDN_ENDPOINT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the endpoint name can contain only letters, numbers and hyphens, must start and end with a letter or number and be at most 50 characters",
            name
        ))
    }
}

pub fn cdn_profile_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "profile name")?;
    if CDN_PROFILE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the profile name can contain only letters, numbers and hyphens, must start and end with a letter or number and be at most 260 characters",
            name
        ))
    }
}

pub fn cognitive_account_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "account name")?;
    if COGNITIVE_ACCOUNT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: the account name can contain only letters, numbers, periods, hyphens and underscores, must start with a letter or number and be between 2 and 64 characters",
            name
        ))
    }
}

pub fn storage_account_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "storage account name")?;
    if STORAGE_ACCOUNT_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: storage account names must be between 3 and 24 characters and may only contain lowercase letters and numbers",
            name
        ))
    }
}

pub fn sql_database_name(value: &Value) -> Result<(), String> {
    let name = expect_string(value, "database name")?;
    if SQL_DATABASE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "{:?}: database names must be at most 128 characters and cannot contain any of <>*%&:\\/?",
            name
        ))
    }
}

/// `user_metadata` of a consumer group: 1 to 1024 characters
pub fn user_metadata(value: &Value) -> Result<(), String> {
    string_len_between(expect_string(value, "user_metadata")?, 1, 1024)
}

/// Any non-empty string
pub fn not_empty(value: &Value) -> Result<(), String> {
    match expect_string(value, "value")? {
        "" => Err("expected a non-empty string".to_string()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn consumer_group_names() {
        for ok in ["a", "audit", "audit.log-1_x", "$Default", "a".repeat(50).as_str()] {
            assert!(eventhub_consumer_group_name(&s(ok)).is_ok(), "{}", ok);
        }
        for bad in ["", "-audit", "audit-", "audit log", "a".repeat(51).as_str()] {
            assert!(eventhub_consumer_group_name(&s(bad)).is_err(), "{}", bad);
        }
        assert!(eventhub_consumer_group_name(&Value::Int(1)).is_err());
    }

    #[test]
    fn namespace_names() {
        assert!(eventhub_namespace_name(&s("example-ns")).is_ok());
        assert!(eventhub_namespace_name(&s("short")).is_err());
        assert!(eventhub_namespace_name(&s("1namespace")).is_err());
        assert!(eventhub_namespace_name(&s("namespace-")).is_err());
    }

    #[test]
    fn eventhub_names() {
        assert!(eventhub_name(&s("hub.events_1")).is_ok());
        assert!(eventhub_name(&s(".hub")).is_err());
    }

    #[test]
    fn resource_group_names() {
        assert!(resource_group_name(&s("example-resources")).is_ok());
        assert!(resource_group_name(&s("rg(1)_x.y")).is_ok());
        assert!(resource_group_name(&s("rg.")).is_err());
        assert!(resource_group_name(&s("rg/1")).is_err());
        assert!(resource_group_name(&s("")).is_err());
        assert!(resource_group_name(&s(&"r".repeat(91))).is_err());
    }

    #[test]
    fn cdn_endpoint_names() {
        assert!(cdn_endpoint_name(&s("my-endpoint")).is_ok());
        assert!(cdn_endpoint_name(&s("my_endpoint")).is_err());
    }

    #[test]
    fn cdn_profile_names() {
        assert!(cdn_profile_name(&s("profile-1")).is_ok());
        assert!(cdn_profile_name(&s("p1/endpoints/e0")).is_err());
        assert!(cdn_profile_name(&s("-profile")).is_err());
    }

    #[test]
    fn cognitive_account_names() {
        assert!(cognitive_account_name(&s("ai1")).is_ok());
        assert!(cognitive_account_name(&s("ai.services_1-x")).is_ok());
        assert!(cognitive_account_name(&s("a")).is_err());
        assert!(cognitive_account_name(&s("ai/accounts")).is_err());
    }

    #[test]
    fn storage_account_names() {
        assert!(storage_account_name(&s("account01")).is_ok());
        assert!(storage_account_name(&s("Account01")).is_err());
        assert!(storage_account_name(&s("ab")).is_err());
    }

    #[test]
    fn sql_database_names() {
        assert!(sql_database_name(&s("sales db")).is_ok());
        assert!(sql_database_name(&s("sales/db")).is_err());
    }

    #[test]
    fn user_metadata_length() {
        assert!(user_metadata(&s("x")).is_ok());
        assert!(user_metadata(&s(&"x".repeat(1024))).is_ok());
        assert!(user_metadata(&s("")).is_err());
        assert_eq!(
            user_metadata(&s(&"x".repeat(1025))).unwrap_err(),
            "expected length to be in the range (1 - 1024), got 1025"
        );
    }

    #[test]
    fn not_empty_strings() {
        assert!(not_empty(&s("westeurope")).is_ok());
        assert!(not_empty(&s("")).is_err());
    }
}
