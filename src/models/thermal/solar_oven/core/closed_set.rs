//! Closed enumerations parsed from external identifiers.

use thiserror::Error;

/// An identifier that does not name any member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} `{value}`")]
pub struct UnknownVariant {
    /// Configuration field the identifier was given for.
    pub field: &'static str,

    /// The rejected identifier.
    pub value: String,
}

/// Declares a closed enumeration with a fixed variant listing.
///
/// Each variant is parsed from (and reports) its own name as identifier and
/// carries a human-readable label used for display.
/// Parsing an identifier outside the set fails with [`UnknownVariant`].
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident in $field:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Returns every member of the set, in declaration order.
            #[must_use]
            pub const fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            /// Returns the identifier this variant is parsed from.
            #[must_use]
            pub const fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            /// Returns the human-readable name of this variant.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::thermal::solar_oven::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(Self::$variant),)+
                    _ => Err($crate::models::thermal::solar_oven::UnknownVariant {
                        field: $field,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}
