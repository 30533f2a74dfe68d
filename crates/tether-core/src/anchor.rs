//! Anchor kinds.
//!
//! An anchor describes how a slot behaves when the sequence is shuffled.
//!
//! # Examples
//!
//! ```
//! use tether_core::AnchorKind;
//!
//! assert_eq!(AnchorKind::ToPrevious.to_string(), "to previous");
//! assert_eq!(AnchorKind::from(2u8), AnchorKind::ToPrevious);
//! assert_eq!(AnchorKind::from(9u8).to_string(), "unknown");
//! ```

use std::fmt;

/// Positional index assigned to an item in insertion order.
///
/// A slot is never the item's value; values are carried separately.
pub type Slot = usize;

/// How a slot is held in place during a shuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnchorKind {
    /// Not anchored. Shuffled freely.
    #[default]
    None,

    /// Stays at its original slot index.
    Position,

    /// Always immediately follows the previous slot, wherever it lands.
    ToPrevious,

    /// Always immediately precedes the next slot, wherever it lands.
    ToNext,

    /// A raw kind outside the known range.
    ///
    /// Placed like [`AnchorKind::None`], and serialized as `none`.
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    Unknown(u8),
}

impl AnchorKind {
    /// Returns the raw numeric value of this kind.
    pub fn raw(self) -> u8 {
        match self {
            AnchorKind::None => 0,
            AnchorKind::Position => 1,
            AnchorKind::ToPrevious => 2,
            AnchorKind::ToNext => 3,
            AnchorKind::Unknown(raw) => raw,
        }
    }

    /// Returns true if the slot may be placed anywhere.
    ///
    /// Unknown kinds count as free.
    pub fn is_free(self) -> bool {
        matches!(self, AnchorKind::None | AnchorKind::Unknown(_))
    }

    /// Returns true if the slot is tied to a neighbor.
    pub fn is_adjacency(self) -> bool {
        matches!(self, AnchorKind::ToPrevious | AnchorKind::ToNext)
    }
}

impl From<u8> for AnchorKind {
    fn from(raw: u8) -> Self {
        match raw {
            0 => AnchorKind::None,
            1 => AnchorKind::Position,
            2 => AnchorKind::ToPrevious,
            3 => AnchorKind::ToNext,
            other => AnchorKind::Unknown(other),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AnchorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (index, name) = match self {
            AnchorKind::None | AnchorKind::Unknown(_) => (0, "none"),
            AnchorKind::Position => (1, "position"),
            AnchorKind::ToPrevious => (2, "to_previous"),
            AnchorKind::ToNext => (3, "to_next"),
        };
        serializer.serialize_unit_variant("AnchorKind", index, name)
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorKind::None => "none",
            AnchorKind::Position => "position",
            AnchorKind::ToPrevious => "to previous",
            AnchorKind::ToNext => "to next",
            AnchorKind::Unknown(_) => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(AnchorKind::None.to_string(), "none");
        assert_eq!(AnchorKind::Position.to_string(), "position");
        assert_eq!(AnchorKind::ToPrevious.to_string(), "to previous");
        assert_eq!(AnchorKind::ToNext.to_string(), "to next");
        assert_eq!(AnchorKind::Unknown(4).to_string(), "unknown");
    }

    #[test]
    fn test_raw_values() {
        for raw in 0..=3u8 {
            assert_eq!(AnchorKind::from(raw).raw(), raw);
        }
        assert_eq!(AnchorKind::from(200), AnchorKind::Unknown(200));
        assert_eq!(AnchorKind::from(200).raw(), 200);
    }

    #[test]
    fn test_unknown_is_free() {
        assert!(AnchorKind::None.is_free());
        assert!(AnchorKind::Unknown(7).is_free());
        assert!(!AnchorKind::Position.is_free());
        assert!(AnchorKind::ToNext.is_adjacency());
        assert!(!AnchorKind::Position.is_adjacency());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(AnchorKind::default(), AnchorKind::None);
    }
}
