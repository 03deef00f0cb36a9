//! Error type for checked list operations.

use core::fmt;

/// Error returned by checked list operations.
///
/// Every fallible operation validates its preconditions before touching the
/// chain, so a returned error means the list and all existing cursors are
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The cursor cannot be used for the requested operation.
    ///
    /// Raised when a cursor belongs to a different list, its slot is no
    /// longer occupied, it sits at the end position for a dereference or
    /// forward step, or at the begin position for a backward step.
    InvalidCursor,
    /// The operation requires a non-empty list.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCursor => write!(f, "cursor is not valid for this operation"),
            Error::Empty => write!(f, "list is empty"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidCursor.to_string(),
            "cursor is not valid for this operation"
        );
        assert_eq!(Error::Empty.to_string(), "list is empty");
    }
}
