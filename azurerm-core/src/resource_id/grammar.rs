//! Grammar - the ordered segment layout of one resource identifier type

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use super::error::MalformedIdentifierError;
use super::identifier::Identifier;
use super::parse::parse;

/// Separator between identifier segments
pub const SEPARATOR: char = '/';

/// Whether a segment is a fixed keyword or a captured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Literal,
    Value,
}

/// One element of an identifier grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed keyword matched exactly, including case (e.g. "resourceGroups")
    Literal(&'static str),
    /// User-supplied, non-empty value stored under the given label
    Value(&'static str),
}

impl Segment {
    pub const fn literal(text: &'static str) -> Self {
        Segment::Literal(text)
    }

    pub const fn value(label: &'static str) -> Self {
        Segment::Value(label)
    }

    pub const fn kind(&self) -> SegmentKind {
        match self {
            Segment::Literal(_) => SegmentKind::Literal,
            Segment::Value(_) => SegmentKind::Value,
        }
    }

    /// Field name for a value segment, keyword for a literal
    pub const fn label(&self) -> &'static str {
        match self {
            Segment::Literal(text) | Segment::Value(text) => text,
        }
    }

    pub const fn literal_text(&self) -> Option<&'static str> {
        match self {
            Segment::Literal(text) => Some(text),
            Segment::Value(_) => None,
        }
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Segment::Value(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => write!(f, "{}", text),
            Segment::Value(label) => write!(f, "{{{}}}", label),
        }
    }
}

/// Segments shared by every subscription and resource-group scoped identifier
pub mod segments {
    use super::Segment;

    pub const SUBSCRIPTIONS: Segment = Segment::literal("subscriptions");
    pub const SUBSCRIPTION_ID: Segment = Segment::value("subscriptionId");
    pub const RESOURCE_GROUPS: Segment = Segment::literal("resourceGroups");
    pub const RESOURCE_GROUP_NAME: Segment = Segment::value("resourceGroupName");
    pub const PROVIDERS: Segment = Segment::literal("providers");
}

/// Problems found when checking a grammar definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("grammar '{grammar}' has no segments")]
    Empty { grammar: &'static str },

    #[error("grammar '{grammar}' must start with the literal 'subscriptions', got '{found}'")]
    MissingPrefix {
        grammar: &'static str,
        found: Segment,
    },

    #[error("grammar '{grammar}' has adjacent value segments '{first}' and '{second}'")]
    AdjacentValues {
        grammar: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("grammar '{grammar}' uses the label '{label}' more than once")]
    DuplicateLabel {
        grammar: &'static str,
        label: &'static str,
    },
}

/// Ordered segment layout for one resource identifier type
///
/// Grammars are process-wide constants. They are declared once (usually through
/// [`define_resource_id!`](crate::define_resource_id)) and never change at runtime.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Grammar {
    name: &'static str,
    display_name: &'static str,
    segments: &'static [Segment],
}

impl Grammar {
    pub const fn new(
        name: &'static str,
        display_name: &'static str,
        segments: &'static [Segment],
    ) -> Self {
        Self {
            name,
            display_name,
            segments,
        }
    }

    /// Registry key (e.g. "eventhub_consumer_group")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human readable type name (e.g. "Consumer Group")
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Labels of the value segments, in grammar order
    pub fn value_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments
            .iter()
            .filter(|s| s.is_value())
            .map(|s| s.label())
    }

    /// Template form, e.g. `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push(SEPARATOR);
            out.push_str(&segment.to_string());
        }
        out
    }

    /// Parse `input` against this grammar
    pub fn parse(&'static self, input: &str) -> Result<Identifier, MalformedIdentifierError> {
        parse(input, self)
    }

    /// Check the structural rules every grammar must follow
    pub fn validate(&self) -> Result<(), GrammarError> {
        let Some(first) = self.segments.first() else {
            return Err(GrammarError::Empty { grammar: self.name });
        };
        if *first != segments::SUBSCRIPTIONS {
            return Err(GrammarError::MissingPrefix {
                grammar: self.name,
                found: *first,
            });
        }

        for pair in self.segments.windows(2) {
            if let [Segment::Value(first), Segment::Value(second)] = *pair {
                return Err(GrammarError::AdjacentValues {
                    grammar: self.name,
                    first,
                    second,
                });
            }
        }

        let mut seen = HashSet::new();
        for label in self.value_labels() {
            if !seen.insert(label) {
                return Err(GrammarError::DuplicateLabel {
                    grammar: self.name,
                    label,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Turn a camelCase label into words: "resourceGroupName" -> "Resource Group Name"
pub fn humanize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for (i, c) in label.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}
