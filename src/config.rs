//! Run configuration for a topology report.

use crate::topology::label::Label;
use crate::topology::topos::GridShape;
use crate::topos_error::ToposError;

/// Default grid width.
pub const DEFAULT_XMAX: i64 = 20;
/// Default grid height.
pub const DEFAULT_YMAX: i64 = 20;
/// Default neighborhood radius.
pub const DEFAULT_RADIUS: i64 = 2;

/// What to build and which queries to answer.
///
/// Dimensions are signed so that out-of-range input can be rejected with a
/// [`ToposError::InvalidParameter`] rather than failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ToposConfig {
    pub xmax: i64,
    pub ymax: i64,
    pub radius: i64,
    /// Label to search for, as typed by the user.
    pub find: Option<String>,
    pub unique: bool,
    pub intersect: bool,
    /// Emit the report as JSON instead of text.
    pub json: bool,
}

impl Default for ToposConfig {
    fn default() -> Self {
        Self {
            xmax: DEFAULT_XMAX,
            ymax: DEFAULT_YMAX,
            radius: DEFAULT_RADIUS,
            find: None,
            unique: false,
            intersect: false,
            json: false,
        }
    }
}

/// A [`ToposConfig`] whose values have been checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidConfig {
    pub shape: GridShape,
    pub find: Option<Label>,
    pub unique: bool,
    pub intersect: bool,
}

impl ToposConfig {
    /// Checks ranges and parses the `find` label.
    ///
    /// # Errors
    /// [`ToposError::InvalidParameter`] for negative numbers,
    /// [`ToposError::InvalidLabel`] for a malformed `find`.
    pub fn validate(&self) -> Result<ValidConfig, ToposError> {
        let shape = GridShape::new(self.ymax, self.xmax, self.radius)?;
        let find = self.find.as_deref().map(str::parse::<Label>).transpose()?;
        Ok(ValidConfig {
            shape,
            find,
            unique: self.unique,
            intersect: self.intersect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ToposConfig::default();
        assert_eq!((cfg.xmax, cfg.ymax, cfg.radius), (20, 20, 2));
        assert!(cfg.find.is_none() && !cfg.unique && !cfg.intersect && !cfg.json);
        let valid = cfg.validate().unwrap();
        assert_eq!(valid.shape.cells(), 400);
    }

    #[test]
    fn negative_values_are_rejected() {
        for cfg in [
            ToposConfig { xmax: -1, ..Default::default() },
            ToposConfig { ymax: -5, ..Default::default() },
            ToposConfig { radius: -1, ..Default::default() },
        ] {
            assert!(cfg.validate().unwrap_err().is_invalid_parameter());
        }
    }

    #[test]
    fn find_is_parsed() {
        let cfg = ToposConfig { find: Some("qz".into()), ..Default::default() };
        assert_eq!(cfg.validate().unwrap().find, Some("qz".parse().unwrap()));

        let bad = ToposConfig { find: Some("QZ".into()), ..Default::default() };
        assert_eq!(
            bad.validate().unwrap_err(),
            ToposError::InvalidLabel("QZ".into())
        );
    }
}
