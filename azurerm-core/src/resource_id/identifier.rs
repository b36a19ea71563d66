//! Identifier - a parsed or constructed instance of a grammar

use std::collections::BTreeMap;
use std::fmt;

use super::error::{MalformedIdentifierError, ParseErrorReason};
use super::format::try_format;
use super::grammar::{Grammar, SEPARATOR, Segment, humanize_label};

/// Captured values of one identifier, keyed by segment label
///
/// Identifiers are immutable values. Changing a field produces a new
/// identifier via [`Identifier::with_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    grammar: &'static Grammar,
    fields: BTreeMap<&'static str, String>,
}

impl Identifier {
    pub(crate) fn from_parsed(
        grammar: &'static Grammar,
        fields: BTreeMap<&'static str, String>,
    ) -> Self {
        Self { grammar, fields }
    }

    /// Build from values given in grammar order, one per value segment
    ///
    /// Values are not checked here; formatting an identifier with a missing
    /// or empty value is a programming error.
    pub fn from_values<I, V>(grammar: &'static Grammar, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let fields = grammar
            .value_labels()
            .zip(values)
            .map(|(label, value)| (label, value.into()))
            .collect();
        Self { grammar, fields }
    }

    /// Build from label/value pairs supplied by a caller that may be wrong
    ///
    /// Every value segment of the grammar must receive a non-empty value without
    /// the separator.
    /// Pairs whose label is not a value segment of the grammar are ignored.
    pub fn from_fields<I, K, V>(
        grammar: &'static Grammar,
        pairs: I,
    ) -> Result<Self, MalformedIdentifierError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut supplied: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();

        let mut fields = BTreeMap::new();
        for label in grammar.value_labels() {
            match supplied.remove(label) {
                Some(value) if value.contains(SEPARATOR) => {
                    return Err(MalformedIdentifierError::new(
                        grammar.template(),
                        grammar.display_name(),
                        label,
                        ParseErrorReason::SeparatorInValue { value },
                    ));
                }
                Some(value) if value.is_empty() => {
                    return Err(MalformedIdentifierError::new(
                        grammar.template(),
                        grammar.display_name(),
                        label,
                        ParseErrorReason::EmptyValueSegment,
                    ));
                }
                Some(value) => {
                    fields.insert(label, value);
                }
                None => {
                    return Err(MalformedIdentifierError::new(
                        grammar.template(),
                        grammar.display_name(),
                        label,
                        ParseErrorReason::MissingSegment,
                    ));
                }
            }
        }

        Ok(Self { grammar, fields })
    }

    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<&'static str, String> {
        self.fields
    }

    /// Returns a copy with one value replaced
    ///
    /// Labels that are not value segments of the grammar leave the copy unchanged.
    #[must_use]
    pub fn with_value(&self, label: &str, value: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        if let Some(label) = self.grammar.value_labels().find(|l| *l == label) {
            fields.insert(label, value.into());
        }
        Self {
            grammar: self.grammar,
            fields,
        }
    }

    /// Human readable form used in messages, e.g.
    /// `Resource Group (Subscription: "0000" / Resource Group Name: "rg1")`
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .values()
            .map(|(label, value)| format!("{}: {:?}", describe_label(label), value))
            .collect();
        format!("{} ({})", self.grammar.display_name(), parts.join(" / "))
    }

    /// Value segments paired with their captured text, in grammar order
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.grammar.segments().iter().filter_map(|segment| match segment {
            Segment::Value(label) => Some((*label, self.get(label).unwrap_or_default())),
            Segment::Literal(_) => None,
        })
    }
}

fn describe_label(label: &str) -> String {
    match label {
        "subscriptionId" => "Subscription".to_string(),
        _ => humanize_label(label),
    }
}

/// Canonical form, or an `<invalid ...>` marker that no grammar accepts
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match try_format(self) {
            Ok(s) => write!(f, "{}", s),
            Err(e) => write!(f, "<invalid {} ID: {}>", self.grammar.display_name(), e.reason),
        }
    }
}
