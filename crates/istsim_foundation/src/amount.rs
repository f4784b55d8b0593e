//! Removal counts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// How many units a request covers.
///
/// `All` is not a number: it means "every matching unit", and consumers
/// must handle it as its own case rather than as a large count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Amount {
    /// A finite, non-negative number of units.
    Count(u32),
    /// Every matching unit.
    All,
}

impl Amount {
    /// Returns true for [`Amount::All`].
    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the finite count, or `None` for [`Amount::All`].
    #[must_use]
    pub const fn count(self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(n),
            Self::All => None,
        }
    }

    /// Returns true when nothing more is requested.
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl From<u32> for Amount {
    fn from(n: u32) -> Self {
        Self::Count(n)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::All => write!(f, "all"),
        }
    }
}
