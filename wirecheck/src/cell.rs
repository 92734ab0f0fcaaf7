//! Grid cells and the predicates defined over them.

use std::fmt;

use crate::error::VerifyError;
use crate::net::NetId;

/// A cell of the routing grid.
///
/// Layer 0 (`z == 0`) is the base layer the terminals sit on.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Cell {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Layer.
    pub z: i64,
}

impl Cell {
    /// A cell at `(x, y)` on layer `z`.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// A cell on the base layer.
    #[must_use]
    pub const fn planar(x: i64, y: i64) -> Self {
        Self::new(x, y, 0)
    }

    /// Returns the cells reachable by stepping one unit along a single axis.
    ///
    /// There are six of them, less any step that would leave the `i64` range.
    pub fn neighbours(self) -> impl Iterator<Item = Self> {
        let Self { x, y, z } = self;
        [
            x.checked_sub(1).map(|x| Self::new(x, y, z)),
            x.checked_add(1).map(|x| Self::new(x, y, z)),
            y.checked_sub(1).map(|y| Self::new(x, y, z)),
            y.checked_add(1).map(|y| Self::new(x, y, z)),
            z.checked_sub(1).map(|z| Self::new(x, y, z)),
            z.checked_add(1).map(|z| Self::new(x, y, z)),
        ]
        .into_iter()
        .flatten()
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub const fn distance(self, rhs: Self) -> u64 {
        self.x.abs_diff(rhs.x).saturating_add(self.y.abs_diff(rhs.y)).saturating_add(self.z.abs_diff(rhs.z))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::planar(x, y)
    }
}

impl From<(i64, i64, i64)> for Cell {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

/// A wire point exactly as the solution loader hands it over.
///
/// Solutions may mix two-coordinate points (implicitly on the base layer) and three-coordinate points, so
/// the arity is only checked when the point is resolved into a [`Cell`].
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Coords(pub Vec<i64>);

impl Coords {
    /// Resolve this point into a cell, promoting two-coordinate points to layer 0.
    ///
    /// # Errors
    /// Returns an error if the point does not have two or three coordinates, or if any coordinate is negative.
    pub fn to_cell(&self, net: NetId) -> Result<Cell, VerifyError> {
        if self.0.iter().any(|&c| c < 0) {
            return Err(VerifyError::NegativeCoordinate { net, coords: self.0.clone() });
        }

        match *self.0.as_slice() {
            [x, y] => Ok(Cell::planar(x, y)),
            [x, y, z] => Ok(Cell::new(x, y, z)),
            _ => Err(VerifyError::WrongArity { net, arity: self.0.len() }),
        }
    }
}

impl From<(i64, i64)> for Coords {
    fn from((x, y): (i64, i64)) -> Self {
        Self(vec![x, y])
    }
}

impl From<(i64, i64, i64)> for Coords {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self(vec![x, y, z])
    }
}

impl From<Cell> for Coords {
    fn from(cell: Cell) -> Self {
        Self(vec![cell.x, cell.y, cell.z])
    }
}

/// The legal footprint of a chip on the base plane, inclusive on both ends.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    /// Leftmost terminal column.
    pub min_x: i64,
    /// Rightmost terminal column.
    pub max_x: i64,
    /// Lowest terminal row.
    pub min_y: i64,
    /// Highest terminal row.
    pub max_y: i64,
}

impl Bounds {
    /// Returns true if `cell` lies within this footprint, widened by `margin` cells on every side.
    #[must_use]
    pub const fn contains(&self, cell: Cell, margin: i64) -> bool {
        cell.x >= self.min_x.saturating_sub(margin)
            && cell.x <= self.max_x.saturating_add(margin)
            && cell.y >= self.min_y.saturating_sub(margin)
            && cell.y <= self.max_y.saturating_add(margin)
    }
}

/// Returns true if two cells differ by exactly one unit along exactly one axis.
#[must_use]
pub const fn is_adjacent(a: Cell, b: Cell) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    let dz = a.z.abs_diff(b.z);
    matches!((dx, dy, dz), (1, 0, 0) | (0, 1, 0) | (0, 0, 1))
}

/// Returns true if `c` lies within the given footprint plus a one-cell margin.
#[must_use]
pub const fn in_bounds(c: Cell, min_x: i64, max_x: i64, min_y: i64, max_y: i64) -> bool {
    c.x >= min_x.saturating_sub(1)
        && c.x <= max_x.saturating_add(1)
        && c.y >= min_y.saturating_sub(1)
        && c.y <= max_y.saturating_add(1)
}

/// Returns true if `c` sits above the topmost routing layer.
#[must_use]
pub const fn exceeds_height(c: Cell, max_layer: i64) -> bool {
    c.z > max_layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_single_axis_unit_step() {
        let origin = Cell::new(1, 1, 1);

        for neighbour in origin.neighbours() {
            assert!(is_adjacent(origin, neighbour), "{} should neighbour {}", neighbour, origin);
            assert!(is_adjacent(neighbour, origin));
        }

        assert!(!is_adjacent(origin, origin));
        assert!(!is_adjacent(origin, Cell::new(2, 2, 1)));
        assert!(!is_adjacent(origin, Cell::new(3, 1, 1)));
        assert!(!is_adjacent(origin, Cell::new(2, 1, 2)));
    }

    #[test]
    fn bounds_allow_one_cell_margin() {
        let (min_x, max_x, min_y, max_y) = (2, 10, 3, 8);

        assert!(in_bounds(Cell::planar(min_x - 1, 5), min_x, max_x, min_y, max_y));
        assert!(!in_bounds(Cell::planar(min_x - 2, 5), min_x, max_x, min_y, max_y));
        assert!(in_bounds(Cell::planar(max_x + 1, max_y + 1), min_x, max_x, min_y, max_y));
        assert!(!in_bounds(Cell::planar(5, max_y + 2), min_x, max_x, min_y, max_y));
        // Height is not a bounds concern.
        assert!(in_bounds(Cell::new(5, 5, 100), min_x, max_x, min_y, max_y));
    }

    #[test]
    fn bounds_margin_is_configurable() {
        let bounds = Bounds { min_x: 2, max_x: 10, min_y: 3, max_y: 8 };

        assert!(bounds.contains(Cell::planar(1, 3), 1));
        assert!(!bounds.contains(Cell::planar(1, 3), 0));
        assert!(bounds.contains(Cell::planar(0, 3), 2));
    }

    #[test]
    fn height_limit_is_inclusive() {
        assert!(!exceeds_height(Cell::new(0, 0, 7), 7));
        assert!(exceeds_height(Cell::new(0, 0, 8), 7));
    }

    #[test]
    fn planar_coords_land_on_base_layer() {
        assert_eq!(Coords::from((4, 2)).to_cell(0).unwrap(), Cell::new(4, 2, 0));
        assert_eq!(Coords::from((4, 2, 3)).to_cell(0).unwrap(), Cell::new(4, 2, 3));
    }

    #[test]
    fn malformed_coords_are_rejected() {
        assert_eq!(
            Coords(vec![1]).to_cell(3),
            Err(VerifyError::WrongArity { net: 3, arity: 1 })
        );
        assert_eq!(
            Coords(vec![1, 2, 3, 4]).to_cell(3),
            Err(VerifyError::WrongArity { net: 3, arity: 4 })
        );
        assert_eq!(
            Coords(vec![1, -2]).to_cell(0),
            Err(VerifyError::NegativeCoordinate { net: 0, coords: vec![1, -2] })
        );
    }

    #[test]
    fn distance_is_manhattan() {
        assert_eq!(Cell::new(0, 0, 0).distance(Cell::new(3, 4, 1)), 8);
        assert_eq!(Cell::new(3, 4, 1).distance(Cell::new(3, 4, 1)), 0);
    }

    #[test]
    fn neighbours_stop_at_the_edge_of_the_range() {
        let corner = Cell::new(i64::MAX, 0, i64::MAX);

        let neighbours = corner.neighbours().collect::<Vec<_>>();
        assert_eq!(
            neighbours,
            vec![Cell::new(i64::MAX - 1, 0, i64::MAX), Cell::new(i64::MAX, -1, i64::MAX), Cell::new(i64::MAX, 1, i64::MAX), Cell::new(i64::MAX, 0, i64::MAX - 1)]
        );
        assert_eq!(Cell::new(1, 1, 1).neighbours().count(), 6);
    }

    #[test]
    fn bounds_saturate_at_the_edge_of_the_range() {
        assert!(in_bounds(Cell::planar(i64::MAX, 0), 0, i64::MAX, 0, 0));
        assert!(!in_bounds(Cell::planar(i64::MAX, 0), 0, 5, 0, 0));

        let bounds = Bounds { min_x: 0, max_x: i64::MAX - 1, min_y: 0, max_y: 0 };
        assert!(bounds.contains(Cell::planar(i64::MAX, 0), 3));
        assert!(!bounds.contains(Cell::planar(i64::MAX, 5), 3));
    }

    #[test]
    fn distance_saturates() {
        assert_eq!(Cell::new(0, 0, 0).distance(Cell::new(i64::MAX, i64::MAX, i64::MAX)), u64::MAX);
    }
}
