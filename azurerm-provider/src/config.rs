//! Provider configuration
//!
//! Built explicitly with the builder methods or read from the `ARM_*`
//! environment variables.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

pub const ENV_SUBSCRIPTION_ID: &str = "ARM_SUBSCRIPTION_ID";
pub const ENV_ENVIRONMENT: &str = "ARM_ENVIRONMENT";
pub const ENV_SKIP_PROVIDER_REGISTRATION: &str = "ARM_SKIP_PROVIDER_REGISTRATION";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ARM_SUBSCRIPTION_ID must be set")]
    MissingSubscriptionId,

    #[error("subscription ID {0:?} is not a valid UUID")]
    InvalidSubscriptionId(String),

    #[error("unknown environment {0:?}, expected one of: public, usgovernment, china")]
    UnknownEnvironment(String),

    #[error("{name} must be \"true\" or \"false\", got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Azure cloud the provider talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Public,
    UsGovernment,
    China,
}

impl Environment {
    /// Base URL of the Resource Manager endpoint
    pub fn resource_manager_endpoint(&self) -> &'static str {
        match self {
            Environment::Public => "https://management.azure.com",
            Environment::UsGovernment => "https://management.usgovcloudapi.net",
            Environment::China => "https://management.chinacloudapi.cn",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Environment::Public),
            "usgovernment" => Ok(Environment::UsGovernment),
            "china" => Ok(Environment::China),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Public => "public",
            Environment::UsGovernment => "usgovernment",
            Environment::China => "china",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Subscription every new resource is created in
    pub subscription_id: String,
    pub environment: Environment,
    pub skip_provider_registration: bool,
}

impl ProviderConfig {
    pub fn new(subscription_id: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            subscription_id: parse_subscription_id(subscription_id)?,
            environment: Environment::default(),
            skip_provider_registration: false,
        })
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_skip_provider_registration(mut self, skip: bool) -> Self {
        self.skip_provider_registration = skip;
        self
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which returns the value of a variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let subscription_id = lookup(ENV_SUBSCRIPTION_ID)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSubscriptionId)?;

        let mut config = Self::new(&subscription_id)?;

        if let Some(environment) = lookup(ENV_ENVIRONMENT).filter(|s| !s.is_empty()) {
            config.environment = environment.parse()?;
        }

        if let Some(skip) = lookup(ENV_SKIP_PROVIDER_REGISTRATION).filter(|s| !s.is_empty()) {
            config.skip_provider_registration = parse_bool(ENV_SKIP_PROVIDER_REGISTRATION, &skip)?;
        }

        Ok(config)
    }
}

fn parse_subscription_id(s: &str) -> Result<String, ConfigError> {
    Uuid::parse_str(s)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| ConfigError::InvalidSubscriptionId(s.to_string()))
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
