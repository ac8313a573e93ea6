use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed record identifier.
///
/// Seed data uses short string ids like "SA001" or "EQ002", so every id wraps a
/// `String` and compares directly against `&str`.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a construction project.
    ProjectId
);

string_id!(
    /// Identifier of a safety alert, e.g. "SA002".
    AlertId
);

string_id!(
    /// Identifier of a quality issue, e.g. "QI001".
    IssueId
);

string_id!(
    /// Identifier of a piece of site equipment, e.g. "EQ003".
    EquipmentId
);
