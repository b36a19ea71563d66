//! Resource identifiers - parsing and formatting ARM resource IDs
//!
//! Every resource type has a hierarchical identifier such as
//! `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Sql/servers/{serverName}`.
//! Instead of one hand written parser per resource type, each type declares a
//! [`Grammar`] (an ordered list of [`Segment`]s) and a single engine parses and
//! formats all of them:
//!
//! - [`parse`] walks an input string against a grammar
//! - [`format`] renders an [`Identifier`] back into its canonical string
//! - [`Registry`] holds every grammar a provider knows about
//! - [`define_resource_id!`](crate::define_resource_id) generates a typed
//!   identifier struct from a grammar definition
//!
//! Parsing is strict: literal keywords are case-sensitive, every value segment
//! must be non-empty, and the number of segments must match exactly.

mod error;
mod format;
mod grammar;
mod identifier;
mod macros;
mod parse;
mod registry;

pub use error::{MalformedIdentifierError, ParseErrorReason};
pub use format::{format, try_format};
pub use grammar::{Grammar, GrammarError, SEPARATOR, Segment, SegmentKind, humanize_label, segments};
pub use identifier::Identifier;
pub use parse::parse;
pub use registry::Registry;
