//! Macro for declaring typed resource identifiers

/// Declare a typed resource identifier from its grammar.
///
/// Each entry of the body is either a literal keyword (`"servers",`) or a
/// value segment written as `field: "label",`. The macro generates:
/// - a struct with one `String` field per value segment, in grammar order
/// - `grammar()` returning the `'static` [`Grammar`](crate::resource_id::Grammar)
/// - `new(..)` taking the fields in order, and `parse(&str)`
/// - `id()` (canonical string), `describe()` (human readable form)
/// - `validate(&Value)` for use as a schema validator
/// - `Display`, `FromStr`, `Serialize`, `Deserialize`, and conversions
///   to and from the generic [`Identifier`](crate::resource_id::Identifier)
///
/// # Example
///
/// ```ignore
/// define_resource_id! {
///     /// Identifier of a SQL server
///     pub struct SqlServerId("sql_server", "SQL Server") {
///         "subscriptions", subscription_id: "subscriptionId",
///         "resourceGroups", resource_group_name: "resourceGroupName",
///         "providers", "Microsoft.Sql",
///         "servers", server_name: "serverName",
///     }
/// }
///
/// let id = SqlServerId::new("0000", "rg1", "server1");
/// let parsed: SqlServerId = id.id().parse()?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($key:literal, $display:literal) {
            $($body:tt)*
        }
    ) => {
        $crate::define_resource_id!(@munch
            [$(#[$meta])* $vis $name $key $display]
            []
            []
            $($body)*
        );
    };

    (@munch $hdr:tt [$($seg:expr,)*] [$($field:tt)*] $text:literal, $($rest:tt)*) => {
        $crate::define_resource_id!(@munch
            $hdr
            [$($seg,)* $crate::resource_id::Segment::literal($text),]
            [$($field)*]
            $($rest)*
        );
    };

    (@munch $hdr:tt [$($seg:expr,)*] [$($field:tt)*] $f:ident : $label:literal, $($rest:tt)*) => {
        $crate::define_resource_id!(@munch
            $hdr
            [$($seg,)* $crate::resource_id::Segment::value($label),]
            [$($field)* ($f $label)]
            $($rest)*
        );
    };

    (@munch
        [$(#[$meta:meta])* $vis:vis $name:ident $key:literal $display:literal]
        [$($seg:expr,)*]
        [$(($f:ident $label:literal))*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name {
            $(pub $f: String,)*
        }

        impl $name {
            /// The grammar this identifier is parsed and formatted with.
            pub fn grammar() -> &'static $crate::resource_id::Grammar {
                static GRAMMAR: $crate::resource_id::Grammar =
                    $crate::resource_id::Grammar::new($key, $display, &[$($seg,)*]);
                &GRAMMAR
            }

            /// The segments of this identifier type, in order.
            pub fn segments() -> &'static [$crate::resource_id::Segment] {
                Self::grammar().segments()
            }

            /// Builds an identifier from known field values.
            ///
            /// Values are not checked; use [`Self::try_id`] when they may be
            /// empty or hold the separator.
            pub fn new($($f: impl Into<String>),*) -> Self {
                Self {
                    $($f: $f.into(),)*
                }
            }

            /// Parses an identifier from its canonical string.
            pub fn parse(input: &str) -> Result<Self, $crate::resource_id::MalformedIdentifierError> {
                Self::from_identifier(Self::grammar().parse(input)?)
            }

            /// Converts a generic identifier, re-parsing it if it came from another grammar.
            ///
            /// Fails if any value is missing, empty or holds the separator.
            pub fn from_identifier(
                identifier: $crate::resource_id::Identifier,
            ) -> Result<Self, $crate::resource_id::MalformedIdentifierError> {
                let canonical = $crate::resource_id::try_format(&identifier)?;
                if identifier.grammar() != Self::grammar() {
                    return Self::parse(&canonical);
                }
                let mut fields = identifier.into_fields();
                Ok(Self {
                    $($f: fields.remove($label).unwrap_or_default(),)*
                })
            }

            pub fn to_identifier(&self) -> $crate::resource_id::Identifier {
                $crate::resource_id::Identifier::from_values(
                    Self::grammar(),
                    [$(self.$f.as_str(),)*],
                )
            }

            /// The canonical string form.
            ///
            /// # Panics
            ///
            /// Panics if any field is empty or holds the separator.
            pub fn id(&self) -> String {
                $crate::resource_id::format(&self.to_identifier())
            }

            /// The canonical string form, or why the fields cannot produce one.
            pub fn try_id(&self) -> Result<String, $crate::resource_id::MalformedIdentifierError> {
                $crate::resource_id::try_format(&self.to_identifier())
            }

            /// Human readable form used in messages, e.g.
            /// `Server (Subscription: "0000" / Resource Group Name: "rg1" / Server Name: "server1")`
            pub fn describe(&self) -> String {
                self.to_identifier().describe()
            }

            /// Schema validator accepting only strings that parse as this identifier.
            pub fn validate(value: &$crate::resource::Value) -> Result<(), String> {
                match value {
                    $crate::resource::Value::String(s) => {
                        Self::parse(s).map(|_| ()).map_err(|e| e.to_string())
                    }
                    _ => Err(format!("expected a {} ID string", $display)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.to_identifier())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::resource_id::MalformedIdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<&$name> for $crate::resource_id::Identifier {
            fn from(id: &$name) -> Self {
                id.to_identifier()
            }
        }

        impl TryFrom<$crate::resource_id::Identifier> for $name {
            type Error = $crate::resource_id::MalformedIdentifierError;

            fn try_from(identifier: $crate::resource_id::Identifier) -> Result<Self, Self::Error> {
                Self::from_identifier(identifier)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let s = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::resource::Value;
    use crate::resource_id::ParseErrorReason;

    define_resource_id! {
        /// Identifier of a SQL server
        pub struct SqlServerId("sql_server", "SQL Server") {
            "subscriptions", subscription_id: "subscriptionId",
            "resourceGroups", resource_group_name: "resourceGroupName",
            "providers", "Microsoft.Sql",
            "servers", server_name: "serverName",
        }
    }

    const SERVER: &str =
        "/subscriptions/0000/resourceGroups/rg1/providers/Microsoft.Sql/servers/server1";

    #[test]
    fn typed_round_trip() {
        let id = SqlServerId::new("0000", "rg1", "server1");
        assert_eq!(id.id(), SERVER);
        assert_eq!(SqlServerId::parse(SERVER).unwrap(), id);
        assert_eq!(id.to_string(), SERVER);
    }

    #[test]
    fn grammar_is_generated_from_body() {
        let grammar = SqlServerId::grammar();
        assert_eq!(grammar.name(), "sql_server");
        assert_eq!(grammar.display_name(), "SQL Server");
        assert_eq!(
            grammar.template(),
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Sql/servers/{serverName}"
        );
        assert!(grammar.validate().is_ok());
    }

    #[test]
    fn parse_errors_are_propagated() {
        let err = SqlServerId::parse(&SERVER.replace("servers", "Servers")).unwrap_err();
        assert!(matches!(err.reason, ParseErrorReason::LiteralMismatch { .. }));
    }

    #[test]
    fn describe_lists_fields() {
        let id = SqlServerId::new("0000", "rg1", "server1");
        assert_eq!(
            id.describe(),
            "SQL Server (Subscription: \"0000\" / Resource Group Name: \"rg1\" / Server Name: \"server1\")"
        );
    }

    #[test]
    fn validate_as_schema_validator() {
        assert!(SqlServerId::validate(&Value::String(SERVER.to_string())).is_ok());
        assert!(SqlServerId::validate(&Value::String("/subscriptions/0000".to_string())).is_err());
        assert!(SqlServerId::validate(&Value::Int(1)).is_err());
    }

    #[test]
    fn serde_as_canonical_string() {
        let id = SqlServerId::new("0000", "rg1", "server1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", SERVER));
        let back: SqlServerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<SqlServerId>("\"/subscriptions/0000\"").is_err());
    }

    #[test]
    fn generic_identifier_conversion() {
        let id = SqlServerId::new("0000", "rg1", "server1");
        let generic = crate::resource_id::Identifier::from(&id);
        assert_eq!(generic.get("serverName"), Some("server1"));
        assert_eq!(SqlServerId::try_from(generic).unwrap(), id);
    }

    #[test]
    fn incomplete_identifier_does_not_convert() {
        let generic =
            crate::resource_id::Identifier::from_values(SqlServerId::grammar(), ["0000", "rg1"]);
        let err = SqlServerId::try_from(generic).unwrap_err();
        assert!(err.is_missing_segment());
        assert_eq!(err.expected, "serverName");

        let generic = crate::resource_id::Identifier::from_values(
            SqlServerId::grammar(),
            ["0000", "rg1", ""],
        );
        let err = SqlServerId::from_identifier(generic).unwrap_err();
        assert_eq!(err.reason, ParseErrorReason::EmptyValueSegment);
    }

    #[test]
    fn separator_in_field_has_no_id() {
        let id = SqlServerId::new("0000", "rg1", "a/b");
        let err = id.try_id().unwrap_err();
        assert!(err.is_separator_in_value());
        assert_eq!(err.expected, "serverName");
        assert!(SqlServerId::try_from(id.to_identifier()).is_err());
        assert!(id.to_string().starts_with("<invalid SQL Server ID"));
    }
}
