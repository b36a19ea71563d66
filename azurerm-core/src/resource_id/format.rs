//! Formatter - renders an identifier back into its canonical string

use super::error::{MalformedIdentifierError, ParseErrorReason};
use super::grammar::{SEPARATOR, Segment};
use super::identifier::Identifier;

/// Render the canonical, absolute form of `identifier`
///
/// # Panics
///
/// Panics if a value segment has no value, an empty one, or one holding the
/// separator. Outbound identifiers
/// are built from known fields, so this indicates a bug in the caller; use
/// [`try_format`] for identifiers assembled from untrusted input.
pub fn format(identifier: &Identifier) -> String {
    match try_format(identifier) {
        Ok(s) => s,
        Err(e) => panic!("formatting an identifier built from known fields: {}", e),
    }
}

/// Render the canonical form, reporting the first value that is missing, empty
/// or holds the separator
pub fn try_format(identifier: &Identifier) -> Result<String, MalformedIdentifierError> {
    let grammar = identifier.grammar();
    let mut out = String::new();

    for segment in grammar.segments() {
        out.push(SEPARATOR);
        match *segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Value(label) => match identifier.get(label) {
                Some(value) if value.contains(SEPARATOR) => {
                    return Err(MalformedIdentifierError::new(
                        out,
                        grammar.display_name(),
                        label,
                        ParseErrorReason::SeparatorInValue {
                            value: value.to_string(),
                        },
                    ));
                }
                Some(value) if !value.is_empty() => out.push_str(value),
                Some(_) => {
                    return Err(MalformedIdentifierError::new(
                        out,
                        grammar.display_name(),
                        label,
                        ParseErrorReason::EmptyValueSegment,
                    ));
                }
                None => {
                    return Err(MalformedIdentifierError::new(
                        out,
                        grammar.display_name(),
                        label,
                        ParseErrorReason::MissingSegment,
                    ));
                }
            },
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_id::grammar::{Grammar, segments};
    use crate::resource_id::parse::parse;

    static ENDPOINT: Grammar = Grammar::new(
        "cdn_endpoint",
        "Endpoint",
        &[
            segments::SUBSCRIPTIONS,
            segments::SUBSCRIPTION_ID,
            segments::RESOURCE_GROUPS,
            segments::RESOURCE_GROUP_NAME,
            segments::PROVIDERS,
            Segment::literal("Microsoft.Cdn"),
            Segment::literal("profiles"),
            Segment::value("profileName"),
            Segment::literal("endpoints"),
            Segment::value("endpointName"),
        ],
    );

    #[test]
    fn formats_absolute_path() {
        let id = Identifier::from_values(&ENDPOINT, ["sub", "rg", "profile1", "endpoint1"]);
        assert_eq!(
            format(&id),
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Cdn/profiles/profile1/endpoints/endpoint1"
        );
    }

    #[test]
    fn format_of_parse_is_identity() {
        let input = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Cdn/profiles/profile1/endpoints/endpoint1";
        let id = parse(input, &ENDPOINT).unwrap();
        assert_eq!(format(&id), input);
    }

    #[test]
    fn try_format_reports_missing_value() {
        let id = Identifier::from_values(&ENDPOINT, ["sub", "rg", "profile1"]);
        let err = try_format(&id).unwrap_err();
        assert!(err.is_missing_segment());
        assert_eq!(err.expected, "endpointName");
    }

    #[test]
    fn try_format_reports_empty_value() {
        let id = Identifier::from_values(&ENDPOINT, ["sub", "", "profile1", "endpoint1"]);
        let err = try_format(&id).unwrap_err();
        assert_eq!(err.reason, ParseErrorReason::EmptyValueSegment);
        assert_eq!(err.expected, "resourceGroupName");
    }

    #[test]
    fn try_format_rejects_separator_in_value() {
        let id = Identifier::from_values(&ENDPOINT, ["sub", "rg", "p1/endpoints/e0", "endpoint1"]);
        let err = try_format(&id).unwrap_err();
        assert!(err.is_separator_in_value());
        assert_eq!(err.expected, "profileName");
        assert_eq!(
            err.reason,
            ParseErrorReason::SeparatorInValue {
                value: "p1/endpoints/e0".to_string()
            }
        );
    }

    #[test]
    #[should_panic(expected = "contains the separator")]
    fn format_panics_on_separator_in_value() {
        let id = Identifier::from_values(&ENDPOINT, ["sub", "rg", "a/b", "endpoint1"]);
        let _ = format(&id);
    }

    #[test]
    #[should_panic(expected = "formatting an identifier built from known fields")]
    fn format_panics_on_missing_value() {
        let id = Identifier::from_values(&ENDPOINT, ["sub"]);
        let _ = format(&id);
    }
}
