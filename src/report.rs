//! Report assembly for the `topos` command.
//!
//! [`ToposReport::run`] builds the topology and answers every requested query
//! before anything is rendered, so a rejected query produces no partial
//! output. Rendering is either the plain-text layout (`Display`) or JSON.

use std::fmt;

use crate::algs::lattice::{Granularity, granularity, intersected_points, unique_points};
use crate::config::ToposConfig;
use crate::topology::label::Label;
use crate::topology::neighborhood::SquareNeighborhood;
use crate::topology::subset::Subset;
use crate::topology::topos::Topology;
use crate::topos_error::ToposError;

/// Result of a `find` query.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FindReport {
    pub label: Label,
    pub granularity: Granularity,
}

/// Everything the command prints for one run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ToposReport {
    pub xmax: usize,
    pub ymax: usize,
    pub radius: usize,
    pub total_subsets: usize,
    pub subset_size: usize,
    pub total_nonunique_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<Subset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersected: Option<Subset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find: Option<FindReport>,
}

impl ToposReport {
    /// Validates `config`, builds the topology and runs the requested queries.
    ///
    /// # Errors
    /// Any [`ToposError`] from validation or from a rejected query, e.g.
    /// intersecting a topology with fewer than two subsets.
    pub fn run(config: &ToposConfig) -> Result<Self, ToposError> {
        let valid = config.validate()?;
        let shape = valid.shape;
        log::debug!(
            "building topology: xmax={} ymax={} radius={}",
            shape.xmax,
            shape.ymax,
            shape.radius
        );

        let subset_size = shape.neighborhood_size()?;
        let total_nonunique_points = shape.total_points()?;

        let topo = Topology::build_shape(shape, SquareNeighborhood)?;
        log::debug!(
            "built {} subsets holding {} distinct-label instances",
            topo.len(),
            topo.label_instances()
        );

        let unique = valid.unique.then(|| unique_points(&topo));
        let intersected = if valid.intersect {
            Some(intersected_points(&topo).inspect_err(|e| {
                log::warn!("intersection rejected: {e}");
            })?)
        } else {
            None
        };
        let find = match valid.find {
            Some(label) => {
                let granularity = granularity(&topo, label).inspect_err(|e| {
                    log::warn!("granularity of {label} rejected: {e}");
                })?;
                Some(FindReport { label, granularity })
            }
            None => None,
        };

        Ok(ToposReport {
            xmax: shape.xmax,
            ymax: shape.ymax,
            radius: shape.radius,
            total_subsets: topo.len(),
            subset_size,
            total_nonunique_points,
            unique,
            intersected,
            find,
        })
    }

    /// The report as pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ToposReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "xmax: {} ymax: {} radius: {}", self.xmax, self.ymax, self.radius)?;
        writeln!(f, "total subsets: {}", self.total_subsets)?;
        writeln!(f, "subset size: {}", self.subset_size)?;
        writeln!(f, "total nonunique points: {}", self.total_nonunique_points)?;

        if let Some(unique) = &self.unique {
            writeln!(f, "\nunique point collection:")?;
            writeln!(f, "unique point size: {}", unique.len())?;
            writeln!(f, "{unique}")?;
        }
        if let Some(intersected) = &self.intersected {
            writeln!(f, "\nintersected point collection:")?;
            writeln!(f, "{intersected}")?;
        }
        if let Some(found) = &self.find {
            writeln!(
                f,
                "\nsubsets containing {}: {}",
                found.label, found.granularity.matches
            )?;
            writeln!(f, "subset granularity: {}", found.granularity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_counts() {
        let report = ToposReport::run(&ToposConfig::default()).unwrap();
        assert_eq!(report.total_subsets, 400);
        assert_eq!(report.subset_size, 25);
        assert_eq!(report.total_nonunique_points, 10_000);
        assert!(report.unique.is_none() && report.intersected.is_none() && report.find.is_none());
    }

    #[test]
    fn text_layout() {
        let cfg = ToposConfig {
            xmax: 2,
            ymax: 1,
            radius: 0,
            find: Some("aa".into()),
            unique: true,
            intersect: true,
            json: false,
        };
        let report = ToposReport::run(&cfg).unwrap();
        let expected = "\
xmax: 2 ymax: 1 radius: 0
total subsets: 2
subset size: 1
total nonunique points: 2

unique point collection:
unique point size: 2
aa,ba

intersected point collection:


subsets containing aa: 1
subset granularity: 1/2 = 0.5
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn rejected_query_yields_no_report() {
        let cfg = ToposConfig {
            xmax: 1,
            ymax: 1,
            intersect: true,
            ..Default::default()
        };
        assert!(ToposReport::run(&cfg).unwrap_err().is_invalid_parameter());

        let empty = ToposConfig {
            xmax: 0,
            find: Some("aa".into()),
            ..Default::default()
        };
        assert!(ToposReport::run(&empty).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn oversized_runs_fail_without_building() {
        // total point count overflows before a single cell is visited
        let overflowing = ToposConfig {
            xmax: 1 << 40,
            ymax: 1,
            radius: 1 << 20,
            ..Default::default()
        };
        assert!(ToposReport::run(&overflowing).unwrap_err().is_invalid_parameter());

        let unallocatable = ToposConfig {
            xmax: 1,
            ymax: 1,
            radius: 1_000_000_000,
            ..Default::default()
        };
        assert!(ToposReport::run(&unallocatable).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn json_omits_unrequested_sections() {
        let cfg = ToposConfig {
            xmax: 1,
            ymax: 1,
            radius: 0,
            find: Some("aa".into()),
            ..Default::default()
        };
        let json = ToposReport::run(&cfg).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_subsets"], 1);
        assert_eq!(value["find"]["label"], "aa");
        assert_eq!(value["find"]["granularity"]["matches"], 1);
        assert!(value.get("unique").is_none());
        assert!(value.get("intersected").is_none());
    }
}
