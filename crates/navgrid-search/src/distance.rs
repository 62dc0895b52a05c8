use navgrid_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a lattice with cell size `s`, `manhattan(a, b) / s` is the minimum
/// edge count between two cells under cardinal-only movement on an empty
/// grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
///
/// On a lattice with cell size `s`, `chebyshev(a, b) / s` is the minimum
/// edge count between two cells under 8-directional movement on an empty
/// grid, and two distinct cells are adjacent exactly when it equals `s`.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(0, 0);
        let b = Point::new(150, 50);
        assert_eq!(manhattan(a, b), 200);
        assert_eq!(chebyshev(a, b), 150);
        assert_eq!(chebyshev(b, a), 150);
        assert_eq!(manhattan(a, a), 0);
    }
}
