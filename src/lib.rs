#![cfg_attr(docsrs, feature(doc_cfg))]
//! # alpha-topos
//!
//! alpha-topos builds a toy discrete topology over a wrapped 2-D grid. Every
//! grid cell is assigned the set of labeled points in its neighborhood, and
//! the resulting collection of subsets can be queried for its global
//! properties.
//!
//! ## Model
//! - A coordinate `(x, y)` wraps onto a two-letter [`Label`](topology::Label):
//!   `ALPHABET[x mod 26]` followed by `ALPHABET[y mod 26]`, with floored modulo.
//! - A [`Subset`](topology::Subset) is the set of labels covered by a cell's
//!   neighborhood, generated by a [`DistanceFunction`](topology::DistanceFunction)
//!   (square by default).
//! - A [`Topology`](topology::Topology) is one subset per cell of a
//!   `ymax × xmax` grid, in row-major order. It is immutable once built.
//!
//! ## Queries
//! [`algs::lattice`] answers three read-only questions: the union of all
//! subsets, their intersection, and which subsets contain a given label
//! (its *granularity*).
//!
//! ```rust
//! use alpha_topos::prelude::*;
//!
//! let topo = Topology::build(20, 20, 2)?;
//! assert_eq!(topo.len(), 400);
//! assert_eq!(unique_points(&topo).len(), 24 * 24);
//!
//! let g = granularity(&topo, "aa".parse()?)?;
//! assert_eq!((g.matches, g.total), (9, 400));
//! # Ok::<(), alpha_topos::topos_error::ToposError>(())
//! ```
//!
//! ## Parallel queries
//! The topology is read-only after construction, so it can be shared across
//! threads freely. With the `rayon` feature, [`algs::lattice`] also offers
//! data-parallel versions of the union and membership queries.

pub mod algs;
pub mod config;
pub mod debug_invariants;
pub mod report;
pub mod topology;
pub mod topos_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::lattice::{
        Granularity, find_subsets_containing, granularity, intersected_points, unique_points,
    };
    pub use crate::config::ToposConfig;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::report::ToposReport;
    pub use crate::topology::label::{ALPHABET, LABEL_SPACE, Label};
    pub use crate::topology::neighborhood::{
        Coordinate, DistanceFunction, SquareNeighborhood, generate_neighborhood,
        neighborhood_size,
    };
    pub use crate::topology::subset::Subset;
    pub use crate::topology::topos::{GridShape, Topology};
    pub use crate::topos_error::ToposError;
}
