use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use serde_json::json;

use azurerm_core::resource_id::{Grammar, Identifier, format};
use azurerm_provider::config::ProviderConfig;
use azurerm_provider::registry;
use azurerm_provider::services::{ServiceRegistration, registrations, service_for};

const SUBSCRIPTION_LABEL: &str = "subscriptionId";

#[derive(Parser)]
#[command(name = "azurerm")]
#[command(about = "Inspect, build and validate Azure Resource Manager IDs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Subscription filled in when building an ID without `subscriptionId`
    #[arg(long, env = "ARM_SUBSCRIPTION_ID", global = true)]
    subscription_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an ID and print its segments
    Parse {
        /// Resource ID to parse
        id: String,

        /// Parse with this resource type instead of detecting it
        #[arg(long = "type")]
        resource_type: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the canonical ID of a resource type from its segment values
    Format {
        /// Resource type (see `azurerm types`)
        resource_type: String,

        /// Segment value as label=value (repeatable)
        #[arg(long = "set", value_parser = parse_key_value)]
        values: Vec<(String, String)>,
    },
    /// Check that an ID matches a resource type
    Validate {
        /// Resource type (see `azurerm types`)
        resource_type: String,

        /// Resource ID to check
        id: String,
    },
    /// List the known resource types and their ID templates
    Types,
    /// List service registrations and their resources
    Services {
        /// Only show the service this resource type belongs to
        #[arg(long)]
        resource: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Parse {
            id,
            resource_type,
            json,
        } => run_parse(&id, resource_type.as_deref(), json),
        Commands::Format {
            resource_type,
            values,
        } => run_format(&resource_type, values, cli.subscription_id.as_deref()),
        Commands::Validate { resource_type, id } => run_validate(&resource_type, &id),
        Commands::Types => run_types(),
        Commands::Services { resource } => run_services(resource.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected label=value, got {:?}", s)),
    }
}

fn lookup_grammar(resource_type: &str) -> Result<&'static Grammar, String> {
    registry().get(resource_type).ok_or_else(|| {
        format!(
            "unknown resource type {:?}; run `azurerm types` to list them",
            resource_type
        )
    })
}

/// Parse with the given grammar, or with every grammar that accepts the input
fn parse_identifiers(input: &str, resource_type: Option<&str>) -> Result<Vec<Identifier>, String> {
    match resource_type {
        Some(resource_type) => {
            let grammar = lookup_grammar(resource_type)?;
            let identifier = grammar.parse(input).map_err(|e| e.to_string())?;
            Ok(vec![identifier])
        }
        None => {
            let found = registry().detect(input);
            if found.is_empty() {
                return Err(format!("{:?} does not match any known resource ID", input));
            }
            log::info!("{:?} matched {} resource type(s)", input, found.len());
            Ok(found)
        }
    }
}

fn run_parse(input: &str, resource_type: Option<&str>, as_json: bool) -> Result<(), String> {
    let identifiers = parse_identifiers(input, resource_type)?;

    if as_json {
        let output: Vec<_> = identifiers.iter().map(identifier_json).collect();
        let text = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    for identifier in &identifiers {
        let grammar = identifier.grammar();
        println!(
            "{} {}",
            grammar.display_name().bold(),
            format!("({})", grammar.name()).dimmed()
        );
        for (label, value) in identifier.values() {
            println!("  {}: {}", label.cyan(), value);
        }
    }
    Ok(())
}

fn identifier_json(identifier: &Identifier) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = identifier
        .values()
        .map(|(label, value)| (label.to_string(), json!(value)))
        .collect();
    json!({
        "type": identifier.grammar().name(),
        "id": format(identifier),
        "fields": fields,
    })
}

/// Canonical ID built from label/value pairs
///
/// A missing `subscriptionId` is taken from the configured subscription.
fn build_identifier(
    resource_type: &str,
    mut values: Vec<(String, String)>,
    subscription_id: Option<&str>,
) -> Result<String, String> {
    let grammar = lookup_grammar(resource_type)?;

    let needs_subscription = grammar.value_labels().any(|l| l == SUBSCRIPTION_LABEL)
        && !values.iter().any(|(label, _)| label.as_str() == SUBSCRIPTION_LABEL);
    if needs_subscription && let Some(subscription_id) = subscription_id {
        let config = ProviderConfig::new(subscription_id).map_err(|e| e.to_string())?;
        values.push((SUBSCRIPTION_LABEL.to_string(), config.subscription_id));
    }

    for (label, _) in &values {
        if !grammar.value_labels().any(|l| l == label.as_str()) {
            log::warn!("{} has no segment {:?}, ignoring it", grammar.name(), label);
        }
    }

    let identifier = Identifier::from_fields(grammar, values).map_err(|e| e.to_string())?;
    Ok(format(&identifier))
}

fn run_format(
    resource_type: &str,
    values: Vec<(String, String)>,
    subscription_id: Option<&str>,
) -> Result<(), String> {
    println!("{}", build_identifier(resource_type, values, subscription_id)?);
    Ok(())
}

fn run_validate(resource_type: &str, input: &str) -> Result<(), String> {
    let grammar = lookup_grammar(resource_type)?;
    let identifier = grammar.parse(input).map_err(|e| e.to_string())?;
    println!("{} {}", "✓".green(), identifier.describe());
    Ok(())
}

fn run_types() -> Result<(), String> {
    for grammar in registry().iter() {
        println!("{:<32} {}", grammar.name().bold(), grammar.template());
    }
    Ok(())
}

/// Services to list, narrowed to the owner of `resource_type` when given
fn select_services(
    resource_type: Option<&str>,
) -> Result<Vec<&'static ServiceRegistration>, String> {
    match resource_type {
        Some(resource_type) => service_for(resource_type)
            .map(|service| vec![service])
            .ok_or_else(|| format!("no service registers resource type {:?}", resource_type)),
        None => Ok(registrations().iter().collect()),
    }
}

fn run_services(resource_type: Option<&str>) -> Result<(), String> {
    for service in select_services(resource_type)? {
        println!(
            "{} {}",
            service.name.bold(),
            format!("[{}]", service.github_label).dimmed()
        );
        for resource in service.resources {
            println!(
                "  {} {}",
                resource.type_name,
                resource.grammar().template().dimmed()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_set_flags() {
        let cli = Cli::try_parse_from([
            "azurerm",
            "format",
            "resource_group",
            "--set",
            "subscriptionId=0000",
            "--set",
            "resourceGroupName=rg1",
        ])
        .unwrap();
        match cli.command {
            Commands::Format {
                resource_type,
                values,
            } => {
                assert_eq!(resource_type, "resource_group");
                assert_eq!(values.len(), 2);
                assert_eq!(values[1], ("resourceGroupName".to_string(), "rg1".to_string()));
            }
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn key_value_requires_label() {
        assert!(parse_key_value("=value").is_err());
        assert!(parse_key_value("novalue").is_err());
        assert_eq!(
            parse_key_value("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn build_fills_in_subscription() {
        let id = build_identifier(
            "resource_group",
            vec![("resourceGroupName".to_string(), "rg1".to_string())],
            Some(SUBSCRIPTION),
        )
        .unwrap();
        assert_eq!(id, format!("/subscriptions/{}/resourceGroups/rg1", SUBSCRIPTION));
    }

    #[test]
    fn build_prefers_explicit_subscription() {
        let id = build_identifier(
            "resource_group",
            vec![
                ("subscriptionId".to_string(), "0000".to_string()),
                ("resourceGroupName".to_string(), "rg1".to_string()),
            ],
            Some(SUBSCRIPTION),
        )
        .unwrap();
        assert_eq!(id, "/subscriptions/0000/resourceGroups/rg1");
    }

    #[test]
    fn build_reports_missing_segment() {
        let err = build_identifier(
            "cdn_endpoint",
            vec![("resourceGroupName".to_string(), "rg1".to_string())],
            None,
        )
        .unwrap_err();
        assert!(err.contains("missing segment"));
    }

    #[test]
    fn parse_detects_every_matching_type() {
        let found = parse_identifiers(
            "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Storage/storageAccounts/acc1",
            None,
        )
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].grammar().name(), "storage_account");
    }

    #[test]
    fn parse_with_type_reports_reason() {
        let err = parse_identifiers("/subscriptions/0000/resourcegroups/rg1", Some("resource_group"))
            .unwrap_err();
        assert!(err.contains("literal mismatch, got 'resourcegroups'"));

        let err = parse_identifiers("/subscriptions/0000", Some("nope")).unwrap_err();
        assert!(err.starts_with("unknown resource type"));
    }

    #[test]
    fn services_narrowed_by_resource_type() {
        let services = select_services(Some("azurerm_cdn_endpoint")).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].github_label, "service/cdn");

        assert_eq!(select_services(None).unwrap().len(), registrations().len());
        assert!(select_services(Some("azurerm_unknown")).is_err());
    }

    #[test]
    fn format_rejects_separator_in_value() {
        let err = build_identifier(
            "resource_group",
            vec![
                ("subscriptionId".to_string(), "0000".to_string()),
                ("resourceGroupName".to_string(), "rg1/providers".to_string()),
            ],
            None,
        )
        .unwrap_err();
        assert!(err.contains("contains the separator '/'"));
    }

    #[test]
    fn json_output_lists_fields() {
        let found = parse_identifiers("/subscriptions/0000", Some("subscription")).unwrap();
        let value = identifier_json(&found[0]);
        assert_eq!(value["type"], "subscription");
        assert_eq!(value["id"], "/subscriptions/0000");
        assert_eq!(value["fields"]["subscriptionId"], "0000");
    }
}
