//! Error type for name lookups on the closed enumerations.

use std::fmt;

/// A name that does not belong to one of the closed enumerated sets.
///
/// Returned by the `FromStr` impls of the model enums. The sets are closed:
/// an unrecognized name is a caller error (or corrupt wire data), never
/// something to coerce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// Which enumeration was being parsed (e.g. `"profession"`).
    pub kind: &'static str,
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
        }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} name {:?}", self.kind, self.name)
    }
}

impl std::error::Error for UnknownName {}
