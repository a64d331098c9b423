//! Top-level module for the wrapped-grid topology.
//!
//! This module provides the core types for building a topology:
//! - [`label`]: coordinate wrapping onto two-letter labels
//! - [`neighborhood`]: coordinates and the [`DistanceFunction`] seam
//! - [`subset`]: ordered label sets
//! - [`topos`]: the per-cell collection of subsets and its builder
//!
//! Most users will call [`Topology::build`] and hand the result to the
//! queries in [`crate::algs::lattice`].

pub mod label;
pub mod neighborhood;
pub mod subset;
pub mod topos;

pub use label::{ALPHABET, LABEL_SPACE, Label};
pub use neighborhood::{
    Coordinate, DistanceFunction, SquareNeighborhood, generate_neighborhood, neighborhood_size,
};
pub use subset::Subset;
pub use topos::{GridShape, Topology};
