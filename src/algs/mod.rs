//! Re-export public algorithms.

pub mod lattice;

pub use lattice::{
    Granularity, find_subsets_containing, granularity, intersected_points, unique_points,
};
#[cfg(feature = "rayon")]
pub use lattice::{par_find_subsets_containing, par_unique_points};
