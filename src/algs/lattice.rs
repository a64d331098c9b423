//! Set-lattice queries over a built topology: join, meet and membership.
//! All queries borrow the topology read-only; results are ordered sets, so
//! output is deterministic regardless of subset order.

use std::fmt;

use crate::topology::label::Label;
use crate::topology::subset::Subset;
use crate::topology::topos::Topology;
use crate::topos_error::ToposError;

/// Union of every subset: each label that appears anywhere in the topology.
///
/// An empty topology yields an empty set.
pub fn unique_points(topo: &Topology) -> Subset {
    topo.iter().flat_map(Subset::iter).collect()
}

/// Intersection of every subset: the labels common to all of them.
///
/// # Errors
/// Returns [`ToposError::InvalidParameter`] when the topology has fewer than
/// two subsets.
pub fn intersected_points(topo: &Topology) -> Result<Subset, ToposError> {
    let (first, rest) = match topo.subsets() {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        subsets => {
            return Err(ToposError::invalid(
                "topology",
                format!(
                    "intersection needs at least 2 subsets, got {}",
                    subsets.len()
                ),
            ));
        }
    };
    let mut meet = first.clone();
    for s in rest {
        if meet.is_empty() {
            break;
        }
        meet = meet.intersection(s);
    }
    Ok(meet)
}

/// Every subset containing `label`, in topology order.
///
/// A label absent from the topology yields an empty vector.
pub fn find_subsets_containing(topo: &Topology, label: Label) -> Vec<&Subset> {
    topo.iter().filter(|s| s.contains(label)).collect()
}

/// Fraction of subsets containing a label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Granularity {
    pub matches: usize,
    pub total: usize,
}

impl Granularity {
    /// `matches / total` as a float in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.matches as f64 / self.total as f64
    }
}

/// `M/N = ratio`
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} = {}", self.matches, self.total, self.ratio())
    }
}

/// Granularity of `label` in `topo`: how many subsets contain it, out of all.
///
/// # Errors
/// Returns [`ToposError::InvalidParameter`] for an empty topology, where the
/// ratio is undefined.
pub fn granularity(topo: &Topology, label: Label) -> Result<Granularity, ToposError> {
    if topo.is_empty() {
        return Err(ToposError::invalid(
            "topology",
            "granularity is undefined for an empty topology",
        ));
    }
    Ok(Granularity {
        matches: find_subsets_containing(topo, label).len(),
        total: topo.len(),
    })
}

/// Parallel [`unique_points`]: per-thread unions reduced pairwise.
#[cfg(feature = "rayon")]
pub fn par_unique_points(topo: &Topology) -> Subset {
    use rayon::prelude::*;
    topo.subsets()
        .par_iter()
        .fold(Subset::new, |mut acc, s| {
            acc.extend(s.iter());
            acc
        })
        .reduce(Subset::new, |a, b| a.union(&b))
}

/// Parallel [`find_subsets_containing`]; preserves topology order.
#[cfg(feature = "rayon")]
pub fn par_find_subsets_containing(topo: &Topology, label: Label) -> Vec<&Subset> {
    use rayon::prelude::*;
    topo.subsets()
        .par_iter()
        .filter(|s| s.contains(label))
        .collect()
}
