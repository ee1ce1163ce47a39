//! Ordered move sets.
//!
//! The order of offsets is the exploration order of the search, so two move
//! sets with the same offsets in a different order can yield different tours.

use std::fmt;
use std::str::FromStr;

use crate::grid::Offset;

/// Standard knight offsets in the default exploration order.
pub const KNIGHT: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Immutable ordered list of relative moves.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MoveSet {
    offsets: Vec<Offset>,
}

impl MoveSet {
    pub fn new(offsets: Vec<Offset>) -> Self {
        Self { offsets }
    }

    /// The eight knight moves, in `KNIGHT` order.
    pub fn knight() -> Self {
        KNIGHT.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Offset> {
        self.offsets.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Offset] {
        &self.offsets
    }

    /// True if every offset's negation is also in the set.
    ///
    /// Dead-end pruning reads outgoing moves as if they were incoming ones,
    /// which only holds for symmetric sets.
    pub fn is_symmetric(&self) -> bool {
        self.offsets
            .iter()
            .all(|o| self.offsets.contains(&o.negated()))
    }

    /// True if `o` is one of the legal moves.
    pub fn contains(&self, o: Offset) -> bool {
        self.offsets.contains(&o)
    }
}

impl FromIterator<(i32, i32)> for MoveSet {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(dx, dy)| Offset::new(dx, dy)).collect())
    }
}

impl FromIterator<Offset> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Offset>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Offset;
    type IntoIter = std::slice::Iter<'a, Offset>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

/// Malformed textual move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveParseError {
    pub token: String,
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move `{}` (expected `dx,dy`)", self.token)
    }
}

impl std::error::Error for MoveParseError {}

/// Parses `"dx,dy;dx,dy;..."`. Whitespace is ignored; an empty string is the
/// empty move set.
impl FromStr for MoveSet {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut offsets = Vec::new();
        for token in s.split(';').map(str::trim).filter(|t| !t.is_empty()) {
            let bad = || MoveParseError {
                token: token.to_string(),
            };
            let (dx, dy) = token.split_once(',').ok_or_else(bad)?;
            let dx = dx.trim().parse::<i32>().map_err(|_| bad())?;
            let dy = dy.trim().parse::<i32>().map_err(|_| bad())?;
            offsets.push(Offset::new(dx, dy));
        }
        Ok(Self::new(offsets))
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, o) in self.offsets.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{},{}", o.dx, o.dy)?;
        }
        Ok(())
    }
}
