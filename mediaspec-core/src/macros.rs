// ============================================================================
// mediaspec-core/src/macros.rs
// ============================================================================
//
// RECORD GENERATORS: Declarative macros behind every settings record
//
// Each settings record is a flat list of optional fields. The accessor,
// equality, hashing, dump and metadata code for those fields is identical
// from record to record, so it is generated here instead of being written
// out per field.
//
// KEY COMPONENTS:
// - token_enum!: closed vocabulary with an unknown-token fallback
// - settings_record!: record struct, accessors and trait implementations
// - constraint!: field constraint shorthand used inside settings_record!

/// Expands a field constraint shorthand into a [`Constraint`](crate::validation::Constraint).
///
/// ```text
/// []                         no constraint
/// [range 1000, 1152000000]   inclusive integer range
/// [one_of -1.5, -3.0]        discrete decimal values
/// [pattern "^s3://"]         regular expression
/// ```
macro_rules! constraint {
    () => {
        $crate::validation::Constraint::None
    };
    (range $min:expr, $max:expr) => {
        $crate::validation::Constraint::Range { min: $min, max: $max }
    };
    (one_of $($value:expr),+ $(,)?) => {
        $crate::validation::Constraint::OneOf(&[$($value),+])
    };
    (pattern $pattern:literal) => {
        $crate::validation::Constraint::Pattern($pattern)
    };
}

/// Declares a string-backed enumeration.
///
/// Every variant maps to one canonical token. Strings that match no token are
/// kept verbatim in the `Unknown` variant, so reading a document written
/// against a newer service vocabulary never loses data.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A token outside the known vocabulary, preserved as written.
            Unknown($crate::record::UnknownToken),
        }

        impl $name {
            /// Canonical tokens of the known variants, in documentation order.
            pub const VALUES: &'static [&'static str] = &[$($token),+];

            /// The canonical token for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $token, )+
                    $name::Unknown(token) => token.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                match token {
                    $( $token => $name::$variant, )+
                    other => $name::Unknown($crate::record::UnknownToken::new(other)),
                }
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                match token.as_str() {
                    $( $token => $name::$variant, )+
                    _ => $name::Unknown($crate::record::UnknownToken::new(token)),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                Ok($name::from(token))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let token = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(token))
            }
        }

        impl $crate::record::RecordField for $name {
            type Ref<'a> = &'a $name where Self: 'a;

            const KIND: &'static str = stringify!($name);
            const TOKENS: Option<&'static [&'static str]> = Some($name::VALUES);

            fn borrow_field(&self) -> Self::Ref<'_> {
                self
            }

            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state)
            }

            fn describe_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }

            fn check_value(
                &self,
                _constraint: &$crate::validation::Constraint,
                path: &str,
                report: &mut $crate::validation::ValidationReport,
            ) {
                if let $name::Unknown(token) = self {
                    report.push(
                        path,
                        $crate::validation::ViolationKind::UnknownToken {
                            token: token.as_str().to_string(),
                            allowed: $name::VALUES,
                        },
                    );
                }
            }
        }
    };
}

/// Declares a settings record.
///
/// Each field line reads
/// `getter / setter / with_setter : Type = "Label" [constraint]`, where the
/// label is the field's display name (its wire name is the label with a
/// lower-case first letter) and the bracketed constraint is optional.
///
/// The generated record has private `Option` fields and implements
/// `PartialEq`, `Eq`, `Hash`, `Display` (the field dump), serde, and
/// [`SettingsRecord`](crate::record::SettingsRecord).
macro_rules! settings_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident / $with:ident : $ty:ty = $label:literal
                $( [ $($constraint:tt)* ] )?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Creates a record with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<<$ty as $crate::record::RecordField>::Ref<'_>> {
                    self.$field
                        .as_ref()
                        .map(|value| <$ty as $crate::record::RecordField>::borrow_field(value))
                }

                #[doc = concat!("Stores `", $label, "`. The value is not checked against its constraint.")]
                pub fn $setter(&mut self, value: impl Into<$ty>) {
                    self.$field = Some(value.into());
                }

                #[doc = concat!("Stores `", $label, "` and returns the record for chaining.")]
                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$setter(value);
                    self
                }
            )+
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $( $crate::record::option_eq(&self.$field, &other.$field) )&&+
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::record::option_hash(&self.$field, state); )+
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut dump = $crate::record::Describer::new(f);
                $( dump.field($label, &self.$field); )+
                dump.finish()
            }
        }

        impl $crate::record::SettingsRecord for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::record::FieldInfo] {
                const FIELDS: &[$crate::record::FieldInfo] = &[
                    $(
                        $crate::record::FieldInfo {
                            name: $label,
                            kind: <$ty as $crate::record::RecordField>::KIND,
                            tokens: <$ty as $crate::record::RecordField>::TOKENS,
                            constraint: constraint!($( $($constraint)* )?),
                        },
                    )+
                ];
                FIELDS
            }

            fn collect_violations(
                &self,
                path: &str,
                report: &mut $crate::validation::ValidationReport,
            ) {
                $(
                    if let Some(value) = &self.$field {
                        let field_path = $crate::validation::join_path(path, $label);
                        <$ty as $crate::record::RecordField>::check_value(
                            value,
                            &constraint!($( $($constraint)* )?),
                            &field_path,
                            report,
                        );
                    }
                )+
            }

            fn field_to_json(&self, label: &str) -> ::serde_json::Result<Option<::serde_json::Value>> {
                match label {
                    $(
                        $label => self.$field
                            .as_ref()
                            .map(<$ty as $crate::record::RecordField>::to_json)
                            .transpose(),
                    )+
                    _ => Ok(None),
                }
            }

            fn field_from_json(&mut self, label: &str, value: ::serde_json::Value) -> ::serde_json::Result<()> {
                match label {
                    $(
                        $label => {
                            self.$field = if value.is_null() {
                                None
                            } else {
                                Some(<$ty as $crate::record::RecordField>::from_json(value)?)
                            };
                        }
                    )+
                    _ => {}
                }
                Ok(())
            }
        }

        impl $crate::record::RecordField for $name {
            type Ref<'a> = &'a $name where Self: 'a;

            const KIND: &'static str = stringify!($name);

            fn borrow_field(&self) -> Self::Ref<'_> {
                self
            }

            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn field_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }

            fn describe_value(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }

            fn check_value(
                &self,
                _constraint: &$crate::validation::Constraint,
                path: &str,
                report: &mut $crate::validation::ValidationReport,
            ) {
                <$name as $crate::record::SettingsRecord>::collect_violations(self, path, report)
            }

            fn to_json(&self) -> ::serde_json::Result<::serde_json::Value> {
                $crate::record::record_to_json(self)
            }

            fn from_json(value: ::serde_json::Value) -> ::serde_json::Result<Self> {
                $crate::record::record_from_json(value)
            }
        }
    };
}
