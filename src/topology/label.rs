//! `Label`: a two-letter name for a point of the wrapped grid
//!
//! Grid coordinates are unbounded integers, but the topology only ever sees
//! the points they wrap onto: each axis is reduced modulo the 26-letter
//! alphabet and the two letters are joined into a label such as `"ab"`.
//! The result is a torus of `26 × 26 = 676` distinct points.
//!
//! This module provides:
//! - The process-wide [`ALPHABET`] table and [`LABEL_SPACE`] constant.
//! - A `Copy` newtype [`Label`] over the two ASCII bytes, ordered like the
//!   string it renders to.
//! - Parsing (`FromStr`) for user-supplied queries and serde support that
//!   serializes a label as its two-letter string.

use std::{fmt, str::FromStr};

use crate::topos_error::ToposError;

/// The fixed 26-symbol alphabet, `a` through `z`.
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Number of distinct labels: every ordered pair of alphabet letters.
pub const LABEL_SPACE: usize = ALPHABET.len() * ALPHABET.len();

const ALPHABET_LEN: i64 = ALPHABET.len() as i64;

/// Two-letter point designation.
///
/// Rendered as a string to emphasize that it is an abstract point and not a
/// coordinate pair. The first letter comes from the x axis, the second from
/// the y axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(transparent)]
pub struct Label([u8; 2]);

impl Label {
    /// Maps a coordinate to its label, wrapping both axes onto the alphabet.
    ///
    /// Uses floored modulo, so negative coordinates wrap to the high end of
    /// the alphabet: `(-1, -1)` is `"zz"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use alpha_topos::topology::label::Label;
    /// assert_eq!(Label::from_coords(0, 1).to_string(), "ab");
    /// assert_eq!(Label::from_coords(-1, 26).to_string(), "za");
    /// ```
    #[inline]
    pub fn from_coords(x: i64, y: i64) -> Self {
        Label([ALPHABET[wrap(x)], ALPHABET[wrap(y)]])
    }

    /// Alphabet index (`0..26`) of the x letter.
    #[inline]
    pub const fn x_index(self) -> usize {
        (self.0[0] - b'a') as usize
    }

    /// Alphabet index (`0..26`) of the y letter.
    #[inline]
    pub const fn y_index(self) -> usize {
        (self.0[1] - b'a') as usize
    }

    /// The two letters of this label.
    #[inline]
    pub fn chars(self) -> (char, char) {
        (char::from(self.0[0]), char::from(self.0[1]))
    }
}

#[inline]
fn wrap(v: i64) -> usize {
    // rem_euclid is always in 0..ALPHABET_LEN
    v.rem_euclid(ALPHABET_LEN) as usize
}

// -----------------------------------------------------------------------------
// Formatting and parsing
// -----------------------------------------------------------------------------

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.chars();
        write!(f, "Label({a}{b})")
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.chars();
        write!(f, "{a}{b}")
    }
}

impl FromStr for Label {
    type Err = ToposError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            &[a, b] if a.is_ascii_lowercase() && b.is_ascii_lowercase() => Ok(Label([a, b])),
            _ => Err(ToposError::InvalidLabel(s.to_string())),
        }
    }
}

impl TryFrom<String> for Label {
    type Error = ToposError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Label, [u8; 2]);
}
