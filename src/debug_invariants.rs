use crate::topology::label::LABEL_SPACE;
use crate::topology::subset::Subset;
use crate::topology::topos::Topology;
use crate::topos_error::ToposError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), ToposError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

impl DebugInvariants for Topology {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "Topology");
    }

    /// A built topology has exactly one non-empty subset per grid cell, and
    /// no subset can hold more labels than the alphabet torus has points.
    /// Distinct labels never outnumber the coordinate samples they came from.
    fn validate_invariants(&self) -> Result<(), ToposError> {
        if let Some(shape) = self.shape() {
            if self.len() != shape.cells() {
                return Err(ToposError::InvariantViolation(format!(
                    "{} subsets for a {}×{} grid",
                    self.len(),
                    shape.ymax,
                    shape.xmax
                )));
            }
            if let Some(idx) = self.iter().position(Subset::is_empty) {
                return Err(ToposError::InvariantViolation(format!(
                    "subset {idx} is empty"
                )));
            }
        }
        if self.label_instances() > self.total_points() {
            return Err(ToposError::InvariantViolation(format!(
                "{} labels from only {} samples",
                self.label_instances(),
                self.total_points()
            )));
        }
        if let Some((idx, s)) = self.iter().enumerate().find(|(_, s)| s.len() > LABEL_SPACE) {
            return Err(ToposError::InvariantViolation(format!(
                "subset {idx} has {} labels, more than {LABEL_SPACE}",
                s.len()
            )));
        }
        Ok(())
    }
}
