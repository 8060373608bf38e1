//! Shared types for the primitives.
//!
//! Small enums that more than one primitive hands to the host renderer.

// =============================================================================
// Heading Levels
// =============================================================================

/// Heading element used by accordion headers and alert titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl HeadingLevel {
    /// Parse a tag name (`"h1"`..`"h6"`, case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Element tag name.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Numeric level, for `aria-level`.
    pub const fn level(&self) -> u8 {
        *self as u8
    }
}

// =============================================================================
// Disclosure State
// =============================================================================

/// Open/closed state of a disclosure, as written to `data-state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DataState {
    Open = 0,
    #[default]
    Closed = 1,
}

impl DataState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for DataState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}
