//! Parser - walks an identifier string against a grammar

use std::collections::BTreeMap;

use super::error::{MalformedIdentifierError, ParseErrorReason};
use super::grammar::{Grammar, SEPARATOR, Segment};
use super::identifier::Identifier;

/// Parse `input` against `grammar`
///
/// One leading separator is optional. A trailing separator is only accepted
/// after a complete identifier; empty tokens anywhere else fail. Literal
/// segments are compared case-sensitively.
pub fn parse(
    input: &str,
    grammar: &'static Grammar,
) -> Result<Identifier, MalformedIdentifierError> {
    let segments = grammar.segments();
    let fail = |expected: &str, reason| {
        MalformedIdentifierError::new(input, grammar.display_name(), expected, reason)
    };

    if input.is_empty() {
        return match segments.first() {
            Some(first) => Err(fail(first.label(), ParseErrorReason::EmptyInput)),
            None => Ok(Identifier::from_parsed(grammar, BTreeMap::new())),
        };
    }

    let tokens: Vec<&str> = input
        .strip_prefix(SEPARATOR)
        .unwrap_or(input)
        .split(SEPARATOR)
        .collect();
    let last = tokens.len() - 1;

    let mut fields = BTreeMap::new();
    for (position, segment) in segments.iter().enumerate() {
        let Some(&token) = tokens.get(position) else {
            return Err(fail(segment.label(), ParseErrorReason::MissingSegment));
        };

        match *segment {
            Segment::Literal(text) => {
                if token.is_empty() && position == last {
                    return Err(fail(text, ParseErrorReason::MissingSegment));
                }
                if token != text {
                    return Err(fail(
                        text,
                        ParseErrorReason::LiteralMismatch {
                            found: token.to_string(),
                        },
                    ));
                }
            }
            Segment::Value(label) => {
                if token.is_empty() {
                    return Err(fail(label, ParseErrorReason::EmptyValueSegment));
                }
                fields.insert(label, token.to_string());
            }
        }
    }

    match tokens.get(segments.len()..).unwrap_or_default() {
        [] | [""] => Ok(Identifier::from_parsed(grammar, fields)),
        [extra, ..] => Err(fail(
            "end of identifier",
            ParseErrorReason::UnexpectedTrailingSegment {
                found: extra.to_string(),
            },
        )),
    }
}
