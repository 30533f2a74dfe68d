//! Compact notation for anchored sequences.
//!
//! Letters are items. A marker applies to the letter before it:
//!
//! - `.` anchors it in position
//! - `>` anchors it to the next item
//! - `<` anchors it to the previous item
//!
//! Spaces are ignored and the last marker on a letter wins.
//!
//! # Example
//!
//! ```
//! use tether_core::AnchorKind;
//! use tether_test::notation::Notation;
//!
//! let notation = Notation::parse("A > B C.").unwrap();
//! assert_eq!(notation.len(), 3);
//! assert_eq!(notation.choices()[0].anchor, AnchorKind::ToNext);
//! assert_eq!(notation.choices()[2].anchor, AnchorKind::Position);
//! assert_eq!(notation.render(&[2, 0, 1]), "CAB");
//! ```

use tether_core::{AnchorKind, Slot};
use thiserror::Error;

/// Notation parse error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    /// A marker appears before any letter.
    #[error("incorrect input string: marker {marker:?} has no item in {input:?}")]
    Dangling { marker: char, input: String },
}

/// An item parsed from notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub text: char,
    pub anchor: AnchorKind,
}

impl Choice {
    /// Creates an unanchored choice.
    pub fn new(text: char) -> Self {
        Self {
            text,
            anchor: AnchorKind::None,
        }
    }
}

/// A parsed anchored sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notation {
    choices: Vec<Choice>,
}

impl Notation {
    /// Parses notation such as `"AB.C"` or `"A>B<"`.
    pub fn parse(input: &str) -> Result<Self, NotationError> {
        let mut choices: Vec<Choice> = Vec::with_capacity(input.len());

        for c in input.chars().filter(|c| *c != ' ') {
            let anchor = match c {
                '.' => AnchorKind::Position,
                '>' => AnchorKind::ToNext,
                '<' => AnchorKind::ToPrevious,
                _ => {
                    choices.push(Choice::new(c));
                    continue;
                }
            };

            match choices.last_mut() {
                Some(top) => top.anchor = anchor,
                None => {
                    return Err(NotationError::Dangling {
                        marker: c,
                        input: input.to_string(),
                    })
                }
            }
        }

        Ok(Self { choices })
    }

    /// Returns the parsed choices in slot order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Returns `(letter, anchor)` pairs in slot order.
    pub fn items(&self) -> impl Iterator<Item = (char, AnchorKind)> + '_ {
        self.choices.iter().map(|choice| (choice.text, choice.anchor))
    }

    /// Renders slot indices as the letters they refer to.
    ///
    /// # Panics
    ///
    /// Panics if a slot is out of range.
    pub fn render(&self, slots: &[Slot]) -> String {
        slots.iter().map(|&slot| self.choices[slot].text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let notation = Notation::parse("").unwrap();
        assert!(notation.is_empty());
        assert_eq!(notation.render(&[]), "");
    }

    #[test]
    fn test_parse_markers() {
        let notation = Notation::parse("A.B>C<D").unwrap();
        let anchors: Vec<_> = notation.items().map(|(_, a)| a).collect();
        assert_eq!(
            anchors,
            vec![
                AnchorKind::Position,
                AnchorKind::ToNext,
                AnchorKind::ToPrevious,
                AnchorKind::None
            ]
        );
    }

    #[test]
    fn test_last_marker_wins() {
        let notation = Notation::parse("A.<").unwrap();
        assert_eq!(notation.choices()[0].anchor, AnchorKind::ToPrevious);
    }

    #[test]
    fn test_spaces_ignored() {
        let notation = Notation::parse(" A  B . ").unwrap();
        assert_eq!(notation.len(), 2);
        assert_eq!(notation.choices()[1].anchor, AnchorKind::Position);
    }

    #[test]
    fn test_leading_marker_is_error() {
        let err = Notation::parse(".A").unwrap_err();
        assert_eq!(
            err,
            NotationError::Dangling {
                marker: '.',
                input: ".A".to_string()
            }
        );
    }
}
