//! `Topology`: the ordered collection of cell neighborhoods over a grid.
//!
//! Each set is constructed by the radius and a [`DistanceFunction`], and is
//! defined solely by its membership of the underlying labeled points. The
//! collection is built once and is read-only afterwards.

use crate::debug_invariants;
use crate::topology::label::Label;
use crate::topology::neighborhood::{DistanceFunction, SquareNeighborhood, neighborhood_size};
use crate::topology::subset::Subset;
use crate::topos_error::ToposError;

/// Dimensions and radius a topology was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct GridShape {
    pub ymax: usize,
    pub xmax: usize,
    pub radius: usize,
}

impl GridShape {
    /// Validates signed dimensions and radius.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] for a negative argument or a
    /// cell count that overflows `usize`.
    pub fn new(ymax: i64, xmax: i64, radius: i64) -> Result<Self, ToposError> {
        let non_negative = |name: &'static str, v: i64| {
            usize::try_from(v)
                .map_err(|_| ToposError::invalid(name, format!("must be non-negative, got {v}")))
        };
        let shape = GridShape {
            ymax: non_negative("ymax", ymax)?,
            xmax: non_negative("xmax", xmax)?,
            radius: non_negative("radius", radius)?,
        };
        if shape.ymax.checked_mul(shape.xmax).is_none() {
            return Err(ToposError::invalid(
                "xmax",
                format!("{ymax} × {xmax} grid is too large"),
            ));
        }
        Ok(shape)
    }

    /// Number of grid cells, `ymax * xmax`.
    pub fn cells(&self) -> usize {
        self.ymax * self.xmax
    }

    /// Coordinates sampled per cell by the square neighborhood.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] if the size overflows.
    pub fn neighborhood_size(&self) -> Result<usize, ToposError> {
        neighborhood_size(signed("radius", self.radius)?)
    }

    /// Coordinate samples over the whole grid, `cells * neighborhood_size`.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] if the count overflows.
    pub fn total_points(&self) -> Result<usize, ToposError> {
        self.cells()
            .checked_mul(self.neighborhood_size()?)
            .ok_or_else(|| ToposError::invalid("radius", "total point count overflows usize"))
    }
}

fn signed(name: &'static str, v: usize) -> Result<i64, ToposError> {
    i64::try_from(v).map_err(|_| ToposError::invalid(name, format!("{v} exceeds the coordinate range")))
}

/// One [`Subset`] per grid cell in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Topology {
    subsets: Vec<Subset>,
    #[serde(skip)]
    shape: Option<GridShape>,
    #[serde(skip)]
    samples: usize,
}

impl Topology {
    /// Builds the topology of a `ymax × xmax` grid with square neighborhoods.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] if any argument is negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use alpha_topos::topology::topos::Topology;
    /// let topo = Topology::build(2, 2, 0).unwrap();
    /// let rendered: Vec<String> = topo.iter().map(|s| s.to_string()).collect();
    /// assert_eq!(rendered, ["aa", "ba", "ab", "bb"]);
    /// ```
    pub fn build(ymax: i64, xmax: i64, radius: i64) -> Result<Self, ToposError> {
        Self::build_with(ymax, xmax, radius, SquareNeighborhood)
    }

    /// Builds the topology using an arbitrary neighborhood shape.
    ///
    /// Cells are visited `y` outer, `x` inner. Every argument is validated
    /// before any subset is produced.
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] for negative dimensions or
    /// radius, a cell count that overflows `usize`, an empty neighborhood, or
    /// any error reported by `distance`.
    pub fn build_with<D>(ymax: i64, xmax: i64, radius: i64, distance: D) -> Result<Self, ToposError>
    where
        D: DistanceFunction,
    {
        Self::build_shape(GridShape::new(ymax, xmax, radius)?, distance)
    }

    /// Builds the topology of an already validated [`GridShape`].
    ///
    /// # Errors
    /// Returns [`ToposError::InvalidParameter`] if the shape does not fit the
    /// signed coordinate range, if `distance` yields an empty neighborhood,
    /// or for any error reported by `distance`.
    pub fn build_shape<D>(shape: GridShape, distance: D) -> Result<Self, ToposError>
    where
        D: DistanceFunction,
    {
        let ymax = signed("ymax", shape.ymax)?;
        let xmax = signed("xmax", shape.xmax)?;
        let radius = signed("radius", shape.radius)?;

        let mut subsets = Vec::new();
        subsets.try_reserve_exact(shape.cells()).map_err(|e| {
            ToposError::invalid("xmax", format!("{ymax} × {xmax} grid is too large: {e}"))
        })?;
        let mut samples = 0usize;
        for y in 0..ymax {
            for x in 0..xmax {
                let coords = distance.neighborhood(x, y, radius)?;
                if coords.is_empty() {
                    return Err(ToposError::invalid(
                        "distance",
                        format!("empty neighborhood at ({x}, {y})"),
                    ));
                }
                samples += coords.len();
                let subset: Subset = coords
                    .into_iter()
                    .map(|c| Label::from_coords(c.x, c.y))
                    .collect();
                subsets.push(subset);
            }
        }

        let topo = Topology {
            subsets,
            shape: Some(shape),
            samples,
        };
        debug_invariants!(
            crate::DebugInvariants::validate_invariants(&topo),
            "Topology::build_shape"
        );
        Ok(topo)
    }

    /// Wraps an arbitrary ordered collection of subsets.
    ///
    /// The result has no [`GridShape`]; each label counts as one sample.
    pub fn from_subsets(subsets: Vec<Subset>) -> Self {
        let samples = subsets.iter().map(Subset::len).sum();
        Topology {
            subsets,
            shape: None,
            samples,
        }
    }

    /// Grid the topology was built from, if it came from a builder.
    pub fn shape(&self) -> Option<GridShape> {
        self.shape
    }

    /// Subset of the cell at `(x, y)`.
    ///
    /// Returns `None` outside the grid or when the topology has no shape.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Subset> {
        let shape = self.shape?;
        if x >= shape.xmax || y >= shape.ymax {
            return None;
        }
        self.subsets.get(y * shape.xmax + x)
    }

    /// Number of subsets (grid cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Subset at `index` in row-major order.
    pub fn get(&self, index: usize) -> Option<&Subset> {
        self.subsets.get(index)
    }

    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subset> {
        self.subsets.iter()
    }

    /// Sum of the distinct-label counts of every subset.
    ///
    /// Never exceeds `len() * neighborhood_size(radius)`; it is smaller when
    /// wraparound folds coordinates of one neighborhood onto the same label.
    pub fn label_instances(&self) -> usize {
        self.subsets.iter().map(Subset::len).sum()
    }

    /// Coordinate samples taken while building, counted with multiplicity.
    ///
    /// For square neighborhoods this is `len() * neighborhood_size(radius)`,
    /// even where wraparound makes subsets smaller.
    pub fn total_points(&self) -> usize {
        self.samples
    }

    pub fn into_subsets(self) -> Vec<Subset> {
        self.subsets
    }
}

impl<'a> IntoIterator for &'a Topology {
    type Item = &'a Subset;
    type IntoIter = std::slice::Iter<'a, Subset>;

    fn into_iter(self) -> Self::IntoIter {
        self.subsets.iter()
    }
}
