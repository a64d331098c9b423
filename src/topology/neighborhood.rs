//! Neighborhood generation around a grid cell.
//!
//! A [`DistanceFunction`] enumerates the coordinates within `radius` of a
//! center. "Radius" is used loosely: the built-in [`SquareNeighborhood`] is a
//! square of side `2 * radius + 1`, which is a valid metric ball on this
//! discrete space. Other shapes plug into the topology builder through the
//! same trait.

use itertools::iproduct;

use crate::topos_error::ToposError;

/// A transient integer coordinate on the unbounded grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Enumerates the coordinates making up the neighborhood of a center cell.
pub trait DistanceFunction {
    /// Coordinates within `radius` of `(x, y)`.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] if `radius` is negative or
    /// the neighborhood cannot be represented.
    fn neighborhood(&self, x: i64, y: i64, radius: i64) -> Result<Vec<Coordinate>, ToposError>;
}

impl<D: DistanceFunction + ?Sized> DistanceFunction for &D {
    #[inline]
    fn neighborhood(&self, x: i64, y: i64, radius: i64) -> Result<Vec<Coordinate>, ToposError> {
        (**self).neighborhood(x, y, radius)
    }
}

/// Square neighborhood: every `(x', y')` with `|x' - x| <= r` and `|y' - y| <= r`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareNeighborhood;

impl DistanceFunction for SquareNeighborhood {
    fn neighborhood(&self, x: i64, y: i64, radius: i64) -> Result<Vec<Coordinate>, ToposError> {
        generate_neighborhood(x, y, radius)
    }
}

/// Number of coordinates in a square neighborhood, `(2r + 1)^2`.
///
/// The `+ 1` is the center itself.
///
/// # Errors
/// Returns [`ToposError::InvalidParameter`] if `radius` is negative or the
/// size overflows `usize`.
pub fn neighborhood_size(radius: i64) -> Result<usize, ToposError> {
    let side = side_length(radius)?;
    side.checked_mul(side)
        .ok_or_else(|| ToposError::invalid("radius", format!("neighborhood of radius {radius} is too large")))
}

/// Coordinates of the square neighborhood of `(x, y)` in row-major order.
///
/// `y` is the outer loop and `x` the inner one, both ascending. Exactly
/// [`neighborhood_size`]`(radius)` coordinates are produced; `radius == 0`
/// yields only the center.
///
/// # Errors
/// Returns [`ToposError::InvalidParameter`] if `radius` is negative, if the
/// window would leave the `i64` range, or if the coordinates cannot be
/// allocated.
pub fn generate_neighborhood(x: i64, y: i64, radius: i64) -> Result<Vec<Coordinate>, ToposError> {
    let size = neighborhood_size(radius)?;
    let (x_lo, x_hi) = window(x, radius)?;
    let (y_lo, y_hi) = window(y, radius)?;

    let mut coords = Vec::new();
    coords.try_reserve_exact(size).map_err(|e| {
        ToposError::invalid("radius", format!("neighborhood of radius {radius} is too large: {e}"))
    })?;
    coords.extend(iproduct!(y_lo..=y_hi, x_lo..=x_hi).map(|(cy, cx)| Coordinate::new(cx, cy)));
    Ok(coords)
}

fn side_length(radius: i64) -> Result<usize, ToposError> {
    if radius < 0 {
        return Err(ToposError::invalid(
            "radius",
            format!("must be non-negative, got {radius}"),
        ));
    }
    usize::try_from(radius)
        .ok()
        .and_then(|r| r.checked_mul(2))
        .and_then(|d| d.checked_add(1))
        .ok_or_else(|| ToposError::invalid("radius", format!("{radius} is too large")))
}

fn window(center: i64, radius: i64) -> Result<(i64, i64), ToposError> {
    match (center.checked_sub(radius), center.checked_add(radius)) {
        (Some(lo), Some(hi)) => Ok((lo, hi)),
        _ => Err(ToposError::invalid(
            "radius",
            format!("window {center} ± {radius} leaves the coordinate range"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_of_small_radii() {
        assert_eq!(neighborhood_size(0), Ok(1));
        assert_eq!(neighborhood_size(1), Ok(9));
        assert_eq!(neighborhood_size(2), Ok(25));
        assert_eq!(neighborhood_size(3), Ok(49));
    }

    #[test]
    fn radius_zero_is_center_only() {
        assert_eq!(generate_neighborhood(0, 0, 0).unwrap(), vec![Coordinate::new(0, 0)]);
        assert_eq!(generate_neighborhood(7, -3, 0).unwrap(), vec![Coordinate::new(7, -3)]);
    }

    #[test]
    fn count_matches_size() {
        for r in 0..=2 {
            let coords = generate_neighborhood(0, 0, r).unwrap();
            assert_eq!(coords.len(), neighborhood_size(r).unwrap());
        }
    }

    #[test]
    fn row_major_order() {
        let coords = generate_neighborhood(5, 10, 1).unwrap();
        let expected: Vec<Coordinate> = [
            (4, 9), (5, 9), (6, 9),
            (4, 10), (5, 10), (6, 10),
            (4, 11), (5, 11), (6, 11),
        ]
        .into_iter()
        .map(Coordinate::from)
        .collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = generate_neighborhood(0, 0, -1).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(neighborhood_size(-3).unwrap_err().is_invalid_parameter());
        assert!(SquareNeighborhood.neighborhood(1, 1, -2).is_err());
    }

    #[test]
    fn window_overflow_is_rejected() {
        assert!(generate_neighborhood(i64::MAX, 0, 1).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn unallocatable_neighborhood_is_rejected() {
        // (2e9 + 1)^2 coordinates fit in usize but not in memory
        let err = generate_neighborhood(0, 0, 1_000_000_000).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(SquareNeighborhood.neighborhood(5, 5, 1_000_000_000).is_err());
    }

    #[test]
    fn square_impl_delegates() {
        assert_eq!(
            SquareNeighborhood.neighborhood(2, 3, 1).unwrap(),
            generate_neighborhood(2, 3, 1).unwrap()
        );
    }
}
