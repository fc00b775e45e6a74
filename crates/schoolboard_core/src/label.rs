//! Closed string-labelled enums.
//!
//! # Responsibility
//! - Give every categorical field one canonical lowercase label used by
//!   serde, CSV export, filters and the CLI.
//!
//! # Invariants
//! - `as_str()` and the serde name of a variant are always the same label.
//! - Parsing is case-insensitive and ignores surrounding whitespace.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned when a label does not name any variant of its enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    /// Enum type name, e.g. `Severity`.
    pub kind: &'static str,
    /// Offending input after trimming.
    pub value: String,
}

impl Display for ParseLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} label: `{}`", self.kind, self.value)
    }
}

impl Error for ParseLabelError {}

/// Declares a `Copy` enum whose variants each carry one stable label.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical lowercase label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::label::ParseLabelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                $(
                    if normalized == $label {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::label::ParseLabelError {
                    kind: stringify!($name),
                    value: value.trim().to_string(),
                })
            }
        }
    };
}

pub(crate) use labelled_enum;

#[cfg(test)]
mod tests {
    labelled_enum! {
        /// Test-only enum.
        pub enum Shade {
            Light => "light",
            DeepBlue => "deep_blue",
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" LIGHT ".parse::<Shade>().unwrap(), Shade::Light);
        assert_eq!("deep_blue".parse::<Shade>().unwrap(), Shade::DeepBlue);
    }

    #[test]
    fn unknown_label_reports_kind_and_value() {
        let err = "teal".parse::<Shade>().unwrap_err();
        assert_eq!(err.kind, "Shade");
        assert_eq!(err.to_string(), "unknown Shade label: `teal`");
    }

    #[test]
    fn serde_uses_the_same_label() {
        let json = serde_json::to_string(&Shade::DeepBlue).unwrap();
        assert_eq!(json, "\"deep_blue\"");
        assert_eq!(Shade::DeepBlue.to_string(), "deep_blue");
        assert_eq!(Shade::ALL.len(), 2);
    }
}
