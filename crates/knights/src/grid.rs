//! Board geometry and the visitation table.
//!
//! - `Dims`: immutable board size; negative sizes are unrepresentable.
//! - `Pos`, `Offset`: signed coordinates; a `Pos` may lie off the board while
//!   candidates are being computed.
//! - `Table`: one `u32` per cell, `0` = unvisited, `k` = occupied on move `k`.

use std::fmt;
use std::ops::Add;

/// Board size in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}

impl Dims {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Validate signed sizes coming from an outer configuration layer.
    pub fn try_from_signed(width: i64, height: i64) -> Result<Self, GridError> {
        let w = u32::try_from(width).map_err(|_| GridError::BadDimension {
            axis: "width",
            value: width,
        })?;
        let h = u32::try_from(height).map_err(|_| GridError::BadDimension {
            axis: "height",
            value: height,
        })?;
        Ok(Self::new(w, h))
    }

    /// Number of cells, i.e. the length of a complete tour.
    #[inline]
    pub fn total(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Row-major index of an in-bounds position.
    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }
}

/// A cell address; validity is relative to some `Dims`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset that carries `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Pos) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }
}

/// Relative move `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub fn negated(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl Add<Offset> for Pos {
    type Output = Pos;

    #[inline]
    fn add(self, rhs: Offset) -> Pos {
        Pos::new(self.x.wrapping_add(rhs.dx), self.y.wrapping_add(rhs.dy))
    }
}

/// Rejected board configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    BadDimension { axis: &'static str, value: i64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadDimension { axis, value } => {
                write!(f, "invalid board {axis}: {value} (expected 0..={})", u32::MAX)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Visitation table: move labels per cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    dims: Dims,
    cells: Vec<u32>,
}

impl Table {
    /// All-zero table sized to `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![0; dims.total()],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Label at `pos`, or `None` when `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<u32> {
        self.dims.index(pos).map(|i| self.cells[i])
    }

    /// Set the label of an in-bounds cell. Off-board positions are ignored.
    #[inline]
    pub fn mark(&mut self, pos: Pos, label: u32) {
        if let Some(i) = self.dims.index(pos) {
            self.cells[i] = label;
        }
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.mark(pos, 0);
    }

    /// Reset every cell to unvisited.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Number of visited cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Raw labels in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Rows from `y = 0` upward; empty when the board has no columns.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.dims.width.max(1) as usize)
    }

    /// Every cell position with its label, row-major.
    pub fn labelled(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        let w = self.dims.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Pos::new((i % w) as i32, (i / w) as i32), c))
    }
}

/// Each label right-aligned in five columns, one board row per line.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{c:5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_dims() {
        let d = Dims::new(3, 2);
        assert!(d.contains(Pos::new(0, 0)));
        assert!(d.contains(Pos::new(2, 1)));
        assert!(!d.contains(Pos::new(3, 0)));
        assert!(!d.contains(Pos::new(0, 2)));
        assert!(!d.contains(Pos::new(-1, 0)));
        assert!(!Dims::new(0, 5).contains(Pos::new(0, 0)));
        assert_eq!(d.total(), 6);
    }

    #[test]
    fn signed_dims_reject_negatives() {
        assert_eq!(Dims::try_from_signed(4, 5), Ok(Dims::new(4, 5)));
        assert!(matches!(
            Dims::try_from_signed(-1, 5),
            Err(GridError::BadDimension { axis: "width", value: -1 })
        ));
        assert!(Dims::try_from_signed(2, i64::MAX).is_err());
    }

    #[test]
    fn table_mark_and_clear() {
        let mut t = Table::new(Dims::new(3, 3));
        assert!(t.is_blank());
        t.mark(Pos::new(1, 2), 7);
        assert_eq!(t.get(Pos::new(1, 2)), Some(7));
        assert_eq!(t.cells()[7], 7);
        assert_eq!(t.occupied(), 1);
        // off-board writes are dropped
        t.mark(Pos::new(5, 5), 9);
        assert_eq!(t.get(Pos::new(5, 5)), None);
        t.clear(Pos::new(1, 2));
        assert!(t.is_blank());
    }

    #[test]
    fn display_is_row_major_width_five() {
        let mut t = Table::new(Dims::new(2, 2));
        t.mark(Pos::new(0, 0), 1);
        t.mark(Pos::new(1, 0), 2);
        t.mark(Pos::new(0, 1), 3);
        t.mark(Pos::new(1, 1), 4);
        assert_eq!(t.to_string(), "    1    2\n    3    4\n");
    }

    #[test]
    fn empty_table_renders_nothing() {
        let t = Table::new(Dims::new(0, 0));
        assert_eq!(t.rows().count(), 0);
        assert_eq!(t.to_string(), "");
    }
}
